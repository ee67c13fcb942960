// tagtune/src/error.rs

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("device not found")]
    DeviceNotFound,

    // シリアル実装を有効化したときだけ serialport のエラーを取り込む
    #[cfg(feature = "serial")]
    #[error("serial error: {0}")]
    Serial(#[from] serialport::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid tag identifier length: {0} bytes")]
    InvalidTagLength(usize),

    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("checksum mismatch: expected {expected:#06x}, got {actual:#06x}")]
    ChecksumMismatch { expected: u16, actual: u16 },
    #[error("frame format error: {0}")]
    FrameFormat(String),

    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse { expected: u8, actual: u8 },

    #[error("unknown command code: {0:#04x}")]
    UnknownCommand(u8),

    #[error("reader rejected the command frame (NACK)")]
    Nack,

    #[error("operation timed out")]
    Timeout,

    #[error("reader fault: {0}")]
    ReaderFault(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
