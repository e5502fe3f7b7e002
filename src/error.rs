//! # 错误类型模块
//!
//! 核心编解码逻辑返回的所有错误都在这里定义。
//! 命令行层通过 `anyhow` 为这些错误附加上下文。

use thiserror::Error;

/// 位图编解码与隐写过程中可能出现的错误。
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StegoError {
    #[error("buffer of {len} bytes is too short to hold a 54-byte BMP header")]
    MalformedHeader { len: usize },

    #[error("invalid BMP signature {found:02X?}, expected \"BM\"")]
    InvalidSignature { found: [u8; 2] },

    #[error("unsupported BMP format: {0}")]
    UnsupportedFormat(String),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("message too large: requires {required_bits} bits, carrier holds {available_bits}")]
    MessageTooLarge {
        required_bits: usize,
        available_bits: usize,
    },

    #[error("no message terminator found after decoding {decoded} bytes")]
    MissingTerminator { decoded: usize },

    #[error("character {character:?} at index {index} cannot be stored in a single byte")]
    UnencodableCharacter { character: char, index: usize },

    #[error("message contains a NUL byte at index {index}")]
    InteriorNul { index: usize },
}
