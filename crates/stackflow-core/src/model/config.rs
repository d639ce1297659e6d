//! デプロイ設定レコード

use crate::model::{ImageReference, TagSet};
use serde::{Deserialize, Serialize};

/// 実行環境の記述子
///
/// 実行環境から一度だけ読み取り、そのまま出力レコードへコピーする。
/// 導出コアがこの値を書き換えることはない。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvDescriptor {
    /// 実行環境のアカウントID
    pub account: Option<String>,
    /// 実行環境のリージョン
    pub region: Option<String>,
}

impl EnvDescriptor {
    pub fn new(account: Option<String>, region: Option<String>) -> Self {
        Self { account, region }
    }

    /// 環境変数 STACKFLOW_ACCOUNT / STACKFLOW_REGION から読み取る
    pub fn from_env() -> Self {
        Self {
            account: std::env::var("STACKFLOW_ACCOUNT").ok(),
            region: std::env::var("STACKFLOW_REGION").ok(),
        }
    }
}

/// プロビジョニング層へ渡す唯一の成果物
///
/// 1回の導出で構築される不変レコード。生のコンテキストを再参照せずに
/// 全リソースを命名・タグ付け・構成できる情報を持つ。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentConfig {
    /// サービスのベース名
    pub base_name: String,
    /// デプロイ先ステージ名
    pub stage: String,
    /// エフェメラルインスタンスの名前空間
    pub namespace: Option<String>,
    /// エフェメラルデプロイかどうか
    pub is_ephemeral: bool,
    /// デプロイするコンテナイメージ
    pub image: ImageReference,
    /// リソースへ付与するタグ
    pub tags: TagSet,
    /// 実行環境の記述子
    pub env: EnvDescriptor,
}

impl DeploymentConfig {
    /// プロビジョニング単位の名前
    ///
    /// エフェメラルなら "{base}-{namespace}"、それ以外はベース名。
    /// 検証済みレコードでは namespace の欠落は起こらない。
    pub fn stack_name(&self) -> String {
        match (self.is_ephemeral, self.namespace.as_deref()) {
            (true, Some(namespace)) => format!("{}-{}", self.base_name, namespace),
            _ => self.base_name.clone(),
        }
    }
}
