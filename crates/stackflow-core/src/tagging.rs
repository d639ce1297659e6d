//! リソースタグの構築

use crate::model::{DeploymentContext, TagSet};
use chrono::NaiveDate;

/// スタックへ付与するタグ集合を構築する
///
/// ベースタグ（svc, stage）は常に設定する。エフェメラル系のタグは
/// is_ephemeral / namespace / commit_hash がすべて揃っているときのみ
/// 追加し、揃っていなければベースタグのみへ黙って縮退する。
/// expires_at は失効日が計算されたときだけ入る。
pub fn build_tags(
    context: &DeploymentContext,
    base_name: &str,
    expires_at: Option<NaiveDate>,
) -> TagSet {
    let mut tags = TagSet::new();
    tags.insert("svc", base_name);
    tags.insert("stage", context.stage.as_str());

    let namespace = context.namespace.as_deref().filter(|ns| !ns.is_empty());
    let commit = context.commit_hash.as_deref().filter(|sha| !sha.is_empty());

    if let (true, Some(namespace), Some(commit)) = (context.is_ephemeral, namespace, commit) {
        tags.insert("ephemeral", "true");
        tags.insert("namespace", namespace);
        tags.insert("sha", commit);
        if let Some(date) = expires_at {
            tags.insert("expires_at", date.to_string());
        }
    }

    tags
}
