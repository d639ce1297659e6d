//! スタック名の導出

use crate::error::{ConfigError, Result};

/// プロビジョニング単位の名前を導出する
///
/// 非エフェメラルはベース名そのまま、エフェメラルは "{base}-{namespace}"。
/// 検証後のコンテキストでは namespace の欠落は起こらないが、単体で
/// 呼ばれた場合に備えて防御的に検査する。
pub fn build_stack_name(
    base_name: &str,
    is_ephemeral: bool,
    namespace: Option<&str>,
) -> Result<String> {
    if !is_ephemeral {
        return Ok(base_name.to_string());
    }

    match namespace {
        Some(namespace) if !namespace.is_empty() => Ok(format!("{}-{}", base_name, namespace)),
        _ => Err(ConfigError::MissingField("namespace")),
    }
}
