//! 設定レコードの組み立て

use crate::error::Result;
use crate::expire::{ExpireAfter, expires_at};
use crate::model::{DeploymentConfig, DeploymentContext, EnvDescriptor};
use crate::resolve::{RegistryDefaults, resolve_image};
use crate::stack::build_stack_name;
use crate::tagging::build_tags;
use crate::validate::validate_context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 組み立てオプション
///
/// 既定値を呼び出しごとの省略引数で持たせず、この構造体として
/// 一度だけ渡す。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssembleOptions {
    /// サービスのベース名
    pub base_name: String,
    /// レジストリの既定値
    pub registry: RegistryDefaults,
    /// エフェメラルスタックの生存期間
    pub expire_after: ExpireAfter,
}

/// コンテキストから不変の設定レコードを組み立てる
///
/// 検証 → 失効日 → イメージ → タグ → スタック名 の順で導出し、
/// 実行環境の記述子をマージして返す。検証に失敗した場合は部分的な
/// レコードを一切生成しない。同じ入力と同じ `now` に対して結果は
/// 常に同一。
pub fn assemble(
    context: &DeploymentContext,
    options: &AssembleOptions,
    env: EnvDescriptor,
    now: DateTime<Utc>,
) -> Result<DeploymentConfig> {
    validate_context(context)?;

    let expires = expires_at(context.is_ephemeral, options.expire_after, now);
    let image = resolve_image(context, &options.registry, &options.base_name);
    let tags = build_tags(context, &options.base_name, expires);
    let stack_name = build_stack_name(
        &options.base_name,
        context.is_ephemeral,
        context.namespace.as_deref(),
    )?;

    tracing::debug!(
        "assembled deployment config: stack={} image={} ephemeral={}",
        stack_name,
        image.uri(),
        context.is_ephemeral
    );

    Ok(DeploymentConfig {
        base_name: options.base_name.clone(),
        stage: context.stage.clone(),
        namespace: context.namespace.clone(),
        is_ephemeral: context.is_ephemeral,
        image,
        tags,
        env,
    })
}
