//! 有効期限の計算

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// エフェメラルスタックの生存期間ポリシー
///
/// 運用によって時間単位（短命なレビュー環境）と日単位（長めの検証環境）
/// の両方が使われるため、単位はポリシー側が持つ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpireAfter {
    /// 指定時間後に失効
    Hours(i64),
    /// 指定日数後に失効
    Days(i64),
}

impl ExpireAfter {
    fn as_duration(self) -> Duration {
        match self {
            ExpireAfter::Hours(hours) => Duration::hours(hours),
            ExpireAfter::Days(days) => Duration::days(days),
        }
    }
}

/// エフェメラルデプロイの失効日を計算する
///
/// 非エフェメラルでは None。時刻ではなく UTC の暦日（YYYY-MM-DD）を
/// 返す。`now` は常に注入されるため、同じ入力に対して結果は決定的。
pub fn expires_at(
    is_ephemeral: bool,
    after: ExpireAfter,
    now: DateTime<Utc>,
) -> Option<NaiveDate> {
    if !is_ephemeral {
        return None;
    }
    Some((now + after.as_duration()).date_naive())
}
