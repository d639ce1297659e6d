//! イメージ参照の導出

use crate::model::{DeploymentContext, ImageReference};
use serde::{Deserialize, Serialize};

/// レジストリの既定値
///
/// 呼び出しごとの省略引数ではなく、オプションとして一度だけ渡す。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryDefaults {
    /// 既定のレジストリアカウントID
    pub account_id: String,
    /// 既定のレジストリリージョン
    pub region: String,
}

/// コンテキストからデプロイ対象のイメージ参照を導出する
///
/// 各オーバーライドは計算値より常に優先される。タグの既定値:
/// 1. image_tag_override があればそのまま使用
/// 2. エフェメラルでコミットハッシュがあれば commit_hash
/// 3. それ以外は "latest"
pub fn resolve_image(
    context: &DeploymentContext,
    defaults: &RegistryDefaults,
    base_name: &str,
) -> ImageReference {
    let tag = match (
        &context.image_tag_override,
        context.is_ephemeral,
        &context.commit_hash,
    ) {
        (Some(tag), _, _) => tag.clone(),
        (None, true, Some(commit)) => commit.clone(),
        _ => "latest".to_string(),
    };

    ImageReference {
        repo_name: context
            .repo_override
            .clone()
            .unwrap_or_else(|| format!("{}/{}/lambda", context.stage, base_name)),
        tag,
        account_id: context
            .registry_account_override
            .clone()
            .unwrap_or_else(|| defaults.account_id.clone()),
        region: context
            .registry_region_override
            .clone()
            .unwrap_or_else(|| defaults.region.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> RegistryDefaults {
        RegistryDefaults {
            account_id: "073835883885".to_string(),
            region: "us-west-2".to_string(),
        }
    }

    #[test]
    fn test_persistent_deployment_uses_latest() {
        let context = DeploymentContext {
            stage: "prod".to_string(),
            is_ephemeral: false,
            commit_hash: Some("abc123".to_string()),
            ..Default::default()
        };

        let image = resolve_image(&context, &defaults(), "hello-api");
        assert_eq!(image.repo_name, "prod/hello-api/lambda");
        assert_eq!(image.tag, "latest");
        assert_eq!(image.account_id, "073835883885");
        assert_eq!(image.region, "us-west-2");
    }

    #[test]
    fn test_ephemeral_deployment_uses_commit_hash() {
        let context = DeploymentContext {
            stage: "test".to_string(),
            is_ephemeral: true,
            namespace: Some("feature-branch".to_string()),
            commit_hash: Some("abc123".to_string()),
            ..Default::default()
        };

        let image = resolve_image(&context, &defaults(), "hello-api");
        assert_eq!(image.repo_name, "test/hello-api/lambda");
        assert_eq!(image.tag, "abc123");
    }

    #[test]
    fn test_tag_override_wins_everywhere() {
        let mut context = DeploymentContext {
            stage: "test".to_string(),
            is_ephemeral: true,
            commit_hash: Some("abc123".to_string()),
            image_tag_override: Some("v1.2.3".to_string()),
            ..Default::default()
        };

        assert_eq!(resolve_image(&context, &defaults(), "hello-api").tag, "v1.2.3");

        context.is_ephemeral = false;
        assert_eq!(resolve_image(&context, &defaults(), "hello-api").tag, "v1.2.3");
    }

    #[test]
    fn test_repo_override() {
        let context = DeploymentContext {
            stage: "test".to_string(),
            commit_hash: Some("abc123".to_string()),
            repo_override: Some("custom-repo".to_string()),
            ..Default::default()
        };

        let image = resolve_image(&context, &defaults(), "hello-api");
        assert_eq!(image.repo_name, "custom-repo");
        assert_eq!(image.tag, "latest");
    }

    #[test]
    fn test_registry_overrides() {
        let context = DeploymentContext {
            stage: "staging".to_string(),
            commit_hash: Some("abc123".to_string()),
            registry_account_override: Some("999999999".to_string()),
            registry_region_override: Some("eu-west-1".to_string()),
            ..Default::default()
        };

        let image = resolve_image(&context, &defaults(), "hello-api");
        assert_eq!(image.account_id, "999999999");
        assert_eq!(image.region, "eu-west-1");
        assert_eq!(
            image.uri(),
            "999999999.dkr.ecr.eu-west-1.amazonaws.com/staging/hello-api/lambda:latest"
        );
    }

    #[test]
    fn test_resolved_image_round_trips_through_uri() {
        let context = DeploymentContext {
            stage: "test".to_string(),
            is_ephemeral: true,
            namespace: Some("pr-42".to_string()),
            commit_hash: Some("abc123".to_string()),
            ..Default::default()
        };

        let image = resolve_image(&context, &defaults(), "hello-api");
        let parsed = ImageReference::parse(&image.uri()).unwrap();
        assert_eq!(parsed, image);
    }
}
