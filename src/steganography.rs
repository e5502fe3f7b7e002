//! # LSB 隐写核心模块
//!
//! 把以 0x00 结尾的字节串逐位写入载体字节的最低有效位，或从中读回。
//! 每个消息字节占用 8 个载体字节，低位在前。

use crate::constants::MESSAGE_TERMINATOR;
use crate::error::StegoError;
use std::iter;

/// 从载体中读出的消息。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// 结束标记之前解码出的所有字节。
    pub message: Vec<u8>,
    /// 是否找到了结束标记。为 `false` 时 `message` 是载体耗尽前解码出的全部内容。
    pub terminated: bool,
}

impl Extraction {
    /// 要求消息以结束标记收尾。
    ///
    /// # Errors
    ///
    /// 未找到结束标记时返回 [`StegoError::MissingTerminator`]。
    pub fn into_message(self) -> Result<Vec<u8>, StegoError> {
        if self.terminated {
            Ok(self.message)
        } else {
            Err(StegoError::MissingTerminator {
                decoded: self.message.len(),
            })
        }
    }
}

/// 从 `dix` 开始的载体可以容纳的比特数。
pub fn capacity_bits(pix: &[u8], dix: usize) -> usize {
    pix.len().saturating_sub(dix)
}

/// 将 `message` 加上结束标记后写入 `pix[dix..]` 的最低有效位。
///
/// 容量在写入任何比特之前检查，失败时 `pix` 保持不变。
///
/// # Errors
///
/// * `message` 含有 0x00 时返回 [`StegoError::InteriorNul`]。
/// * 载体容量不足时返回 [`StegoError::MessageTooLarge`]。
pub fn embed(pix: &mut [u8], message: &[u8], dix: usize) -> Result<(), StegoError> {
    if let Some(index) = message.iter().position(|&b| b == MESSAGE_TERMINATOR) {
        return Err(StegoError::InteriorNul { index });
    }

    let required_bits = message.len().saturating_add(1).saturating_mul(8);
    let available_bits = capacity_bits(pix, dix);
    if required_bits > available_bits {
        return Err(StegoError::MessageTooLarge {
            required_bits,
            available_bits,
        });
    }

    let bits = message
        .iter()
        .copied()
        .chain(iter::once(MESSAGE_TERMINATOR))
        .flat_map(|byte| (0..8).map(move |i| (byte >> i) & 1));

    for (carrier, bit) in pix[dix..].iter_mut().zip(bits) {
        *carrier = (*carrier & 0xFE) | bit;
    }

    Ok(())
}

/// 从 `pix[dix..]` 的最低有效位中读出消息，直到遇到结束标记或载体耗尽。
///
/// 末尾不足 8 个的零散比特会被忽略。
pub fn extract(pix: &[u8], dix: usize) -> Extraction {
    let carrier = pix.get(dix..).unwrap_or_default();
    let mut message = Vec::new();

    for chunk in carrier.chunks_exact(8) {
        let byte = chunk
            .iter()
            .enumerate()
            .fold(0u8, |acc, (i, &b)| acc | ((b & 1) << i));

        if byte == MESSAGE_TERMINATOR {
            return Extraction {
                message,
                terminated: true,
            };
        }
        message.push(byte);
    }

    Extraction {
        message,
        terminated: false,
    }
}

/// 把文本转换为单字节编码 (Latin-1)，每个字符对应一个字节。
///
/// # Errors
///
/// * 码点大于 U+00FF 时返回 [`StegoError::UnencodableCharacter`]。
/// * 含有 U+0000 时返回 [`StegoError::InteriorNul`]。
pub fn encode_text(text: &str) -> Result<Vec<u8>, StegoError> {
    text.chars()
        .enumerate()
        .map(|(index, character)| match u8::try_from(character) {
            Ok(MESSAGE_TERMINATOR) => Err(StegoError::InteriorNul { index }),
            Ok(byte) => Ok(byte),
            Err(_) => Err(StegoError::UnencodableCharacter { character, index }),
        })
        .collect()
}

/// `encode_text` 的逆操作：每个字节映射为同值的码点。
pub fn decode_text(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}
