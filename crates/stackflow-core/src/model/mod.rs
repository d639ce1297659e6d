//! モデル定義
//!
//! 設定導出で使用されるデータモデルを定義します。
//! 各モデルは機能ごとにモジュールに分離されています。

mod config;
mod context;
mod image;
mod tags;

// Re-exports
pub use config::*;
pub use context::*;
pub use image::*;
pub use tags::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_creation() {
        let context = DeploymentContext {
            stage: "test".to_string(),
            is_ephemeral: true,
            namespace: Some("feature-branch".to_string()),
            commit_hash: Some("abc123".to_string()),
            ..Default::default()
        };

        assert_eq!(context.stage, "test");
        assert!(context.is_ephemeral);
        assert_eq!(context.namespace.as_deref(), Some("feature-branch"));
        assert!(context.image_tag_override.is_none());
    }

    #[test]
    fn test_config_stack_name() {
        let image = ImageReference {
            repo_name: "test/hello-api/lambda".to_string(),
            tag: "abc123".to_string(),
            account_id: "073835883885".to_string(),
            region: "us-west-2".to_string(),
        };

        let mut config = DeploymentConfig {
            base_name: "hello-api".to_string(),
            stage: "test".to_string(),
            namespace: Some("pr-42".to_string()),
            is_ephemeral: true,
            image,
            tags: TagSet::new(),
            env: EnvDescriptor::default(),
        };

        assert_eq!(config.stack_name(), "hello-api-pr-42");

        config.is_ephemeral = false;
        config.namespace = None;
        assert_eq!(config.stack_name(), "hello-api");
    }

    #[test]
    fn test_config_serialization() {
        let mut tags = TagSet::new();
        tags.insert("svc", "hello-api");
        tags.insert("stage", "prod");

        let config = DeploymentConfig {
            base_name: "hello-api".to_string(),
            stage: "prod".to_string(),
            namespace: None,
            is_ephemeral: false,
            image: ImageReference {
                repo_name: "prod/hello-api/lambda".to_string(),
                tag: "latest".to_string(),
                account_id: "073835883885".to_string(),
                region: "us-west-2".to_string(),
            },
            tags,
            env: EnvDescriptor::new(Some("111122223333".to_string()), Some("us-west-2".to_string())),
        };

        // JSON シリアライズ
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("hello-api"));
        assert!(json.contains("latest"));

        // JSON デシリアライズ
        let deserialized: DeploymentConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, config);
    }
}
