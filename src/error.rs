//! 探索の設定・実行で発生するエラー

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid length: must be a positive integer")]
    InvalidLength,

    #[error("Invalid charset range: first ({first}) is greater than last ({last})")]
    InvertedRange { first: u8, last: u8 },

    #[error("Prefix of {prefix} bytes does not fit in a maximum length of {max}")]
    PrefixTooLong { prefix: usize, max: usize },

    #[cfg_attr(unix, allow(dead_code))]
    #[error("Argument is not valid UTF-8: {0}")]
    NonUtf8Argument(String),

    #[error("Invalid SHA-256 digest: {0}")]
    InvalidDigest(String),

    #[error("Failed to allocate a buffer of {len} elements")]
    Allocation { len: usize },
}

impl Error {
    /// 設定ミスかどうか (usageを表示して終了する類のもの)
    pub fn is_config(&self) -> bool {
        !matches!(self, Error::Allocation { .. })
    }
}
