//! パラメータソースからのコンテキスト構築
//!
//! 入力はフラットな文字列 key/value マップ。キー名は歴史的に揺れがある
//! ため、ここでは snake_case の正規キー集合に統一している。

use crate::model::{DeploymentContext, resolve_ephemeral};
use std::collections::HashMap;

/// 正規のパラメータキー
pub const KEY_STAGE: &str = "stage";
pub const KEY_IS_EPHEMERAL: &str = "is_ephemeral";
pub const KEY_NAMESPACE: &str = "namespace";
pub const KEY_COMMIT_HASH: &str = "commit_hash";
pub const KEY_IMAGE_TAG: &str = "image_tag";
pub const KEY_REPO: &str = "repo";
pub const KEY_REGISTRY_ACCOUNT: &str = "registry_account";
pub const KEY_REGISTRY_REGION: &str = "registry_region";

/// 空文字列は未指定として扱う
fn non_empty<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    params
        .get(key)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
}

impl DeploymentContext {
    /// フラットなパラメータマップからコンテキストを構築する
    ///
    /// is_ephemeral は生の文字列のまま三値解決ルールへ渡す。必須項目の
    /// 検査はここでは行わず、`validate_context` が導出前にまとめて行う。
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let stage = non_empty(params, KEY_STAGE).unwrap_or_default().to_string();
        let is_ephemeral = resolve_ephemeral(non_empty(params, KEY_IS_EPHEMERAL), &stage);

        Self {
            is_ephemeral,
            namespace: non_empty(params, KEY_NAMESPACE).map(str::to_string),
            commit_hash: non_empty(params, KEY_COMMIT_HASH).map(str::to_string),
            image_tag_override: non_empty(params, KEY_IMAGE_TAG).map(str::to_string),
            repo_override: non_empty(params, KEY_REPO).map(str::to_string),
            registry_account_override: non_empty(params, KEY_REGISTRY_ACCOUNT).map(str::to_string),
            registry_region_override: non_empty(params, KEY_REGISTRY_REGION).map(str::to_string),
            stage,
        }
    }
}
