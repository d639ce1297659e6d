//! コンテキストの事前検証

use crate::error::{ConfigError, Result};
use crate::model::DeploymentContext;

/// 導出処理の前に必須項目と項目間の整合性を検査する
///
/// 検査は純粋で副作用を持たず、最初の違反で即座に失敗する。
/// namespace はエフェメラルデプロイでのみ許可され、かつ必須
/// （厳格バリアント）。
pub fn validate_context(context: &DeploymentContext) -> Result<()> {
    if context.stage.is_empty() {
        return Err(ConfigError::MissingField("stage"));
    }
    if context.commit_hash.as_deref().is_none_or(str::is_empty) {
        return Err(ConfigError::MissingField("commit_hash"));
    }

    if context.is_ephemeral {
        if context.namespace.as_deref().is_none_or(str::is_empty) {
            return Err(ConfigError::MissingField("namespace"));
        }
    } else if context.namespace.as_deref().is_some_and(|ns| !ns.is_empty()) {
        return Err(ConfigError::InvalidCombination(
            "namespace はエフェメラルデプロイでのみ指定できます".to_string(),
        ));
    }

    Ok(())
}
