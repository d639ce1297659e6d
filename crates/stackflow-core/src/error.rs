use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("必須パラメータがありません: {0}")]
    MissingField(&'static str),

    #[error("無効なパラメータの組み合わせ: {0}")]
    InvalidCombination(String),

    #[error("不正なイメージURI: {0:?}")]
    MalformedUri(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
