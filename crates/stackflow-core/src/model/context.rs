//! デプロイコンテキスト定義

use serde::{Deserialize, Serialize};

/// デプロイ1回分の入力コンテキスト
///
/// 外部のパラメータソースから一度だけ構築され、以降は不変として扱う。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeploymentContext {
    /// デプロイ先ステージ名（例: "prod", "staging", "test"）
    pub stage: String,
    /// エフェメラル（使い捨て）デプロイかどうか
    #[serde(default)]
    pub is_ephemeral: bool,
    /// エフェメラルインスタンスの名前空間（ブランチ名やPR番号など）
    #[serde(default)]
    pub namespace: Option<String>,
    /// デプロイ対象のコミットハッシュ
    #[serde(default)]
    pub commit_hash: Option<String>,
    /// イメージタグの明示指定（省略時は計算値）
    #[serde(default)]
    pub image_tag_override: Option<String>,
    /// リポジトリ名の明示指定
    #[serde(default)]
    pub repo_override: Option<String>,
    /// レジストリアカウントIDの明示指定
    #[serde(default)]
    pub registry_account_override: Option<String>,
    /// レジストリリージョンの明示指定
    #[serde(default)]
    pub registry_region_override: Option<String>,
}

/// エフェメラルフラグの三値解決ルール
///
/// 明示的な "true" / "false" が常に優先される。それ以外の値や未指定は
/// stage == "test" のときのみエフェメラル扱いになる。
pub fn resolve_ephemeral(raw: Option<&str>, stage: &str) -> bool {
    match raw {
        Some("true") => true,
        Some("false") => false,
        _ => stage == "test",
    }
}
