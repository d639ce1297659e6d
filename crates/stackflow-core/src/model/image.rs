//! コンテナイメージ参照

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};

/// コンテナイメージへの完全修飾参照
///
/// URI形式 `{account}.dkr.ecr.{region}.amazonaws.com/{repo}:{tag}` と
/// 構造化形式は相互に損失なく変換できる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageReference {
    /// リポジトリ名（"/" を含むことがある）
    pub repo_name: String,
    /// イメージタグ
    pub tag: String,
    /// レジストリのアカウントID
    pub account_id: String,
    /// レジストリのリージョン
    pub region: String,
}

impl ImageReference {
    /// 完全修飾URI形式に変換
    pub fn uri(&self) -> String {
        format!(
            "{}.dkr.ecr.{}.amazonaws.com/{}:{}",
            self.account_id, self.region, self.repo_name, self.tag
        )
    }

    /// URI形式から構造化参照へ復元する
    ///
    /// レジストリホストに "/" は現れないため、最初の "/" でホストと
    /// リポジトリパスに分割し、最後の ":" でリポジトリとタグに分割する。
    /// アカウントIDとリージョンはホストのドット区切りセグメント
    /// （先頭と4番目）から復元する。
    pub fn parse(uri: &str) -> Result<Self> {
        if uri.is_empty() {
            return Err(ConfigError::MalformedUri(uri.to_string()));
        }

        let (host, path) = uri
            .split_once('/')
            .ok_or_else(|| ConfigError::MalformedUri(uri.to_string()))?;
        let (repo_name, tag) = path
            .rsplit_once(':')
            .ok_or_else(|| ConfigError::MalformedUri(uri.to_string()))?;

        if repo_name.is_empty() || tag.is_empty() {
            return Err(ConfigError::MalformedUri(uri.to_string()));
        }

        let segments: Vec<&str> = host.split('.').collect();
        if segments.len() < 4 {
            return Err(ConfigError::MalformedUri(uri.to_string()));
        }

        Ok(Self {
            repo_name: repo_name.to_string(),
            tag: tag.to_string(),
            account_id: segments[0].to_string(),
            region: segments[3].to_string(),
        })
    }
}

impl std::fmt::Display for ImageReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.uri())
    }
}
