//! StackFlow Core
//!
//! 緩く型付けされたデプロイパラメータ（ステージ名、名前空間、コミット
//! ハッシュ、イメージ/レジストリのオーバーライド）から、検証済みで内部
//! 整合的なデプロイ設定レコードを導出するコア。
//!
//! 導出は純粋・同期的で、ネットワークアクセスも永続化も行わない。
//! 「現在時刻」は常に引数として注入されるため、同じ入力に対して結果は
//! 決定的になる。
//!
//! ```text
//! パラメータマップ → DeploymentContext → validate
//!     → (expires_at, resolve_image, build_tags, build_stack_name)
//!     → DeploymentConfig → プロビジョニング層
//! ```
//!
//! 歴史的に揺れのあったポリシー（厳格バリデーション、タグキー名、
//! パラメータキー名）の採用理由は DESIGN.md を参照。

pub mod assemble;
pub mod error;
pub mod expire;
pub mod model;
pub mod params;
pub mod resolve;
pub mod stack;
pub mod tagging;
pub mod validate;

// Re-exports
pub use assemble::{AssembleOptions, assemble};
pub use error::{ConfigError, Result};
pub use expire::{ExpireAfter, expires_at};
pub use model::{
    DeploymentConfig, DeploymentContext, EnvDescriptor, ImageReference, TagSet, resolve_ephemeral,
};
pub use resolve::{RegistryDefaults, resolve_image};
pub use stack::build_stack_name;
pub use tagging::build_tags;
pub use validate::validate_context;
