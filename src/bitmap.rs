//! # BMP 容器编解码模块
//!
//! 从输入的 BMP 缓冲区中读取生成新图像所需的几何信息，
//! 并为输出图像构造固定配置 (24 位、无压缩、自下而上) 的文件头。

use crate::constants::{
    BITS_PER_PIXEL, BMP_HEADER_SIZE, BMP_SIGNATURE, BYTES_PER_PIXEL, DIB_HEADER_SIZE,
};
use crate::error::StegoError;

/// 从 BMP 文件头中读取的几何信息。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapGeometry {
    pub width: u32,
    /// 高度的绝对值。
    pub height: u32,
    /// 头部中的高度为负数时，行按自上而下的顺序存储。
    pub top_down: bool,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub file_size: u32,
    pub pixel_array_offset: u32,
}

impl BitmapGeometry {
    /// 确认源图像是未压缩的 24 位 BMP。
    ///
    /// # Errors
    ///
    /// 位深度不是 24 或存在压缩时返回 [`StegoError::UnsupportedFormat`]。
    pub fn ensure_supported(&self) -> Result<(), StegoError> {
        if self.bits_per_pixel != BITS_PER_PIXEL {
            return Err(StegoError::UnsupportedFormat(format!(
                "{} bits per pixel, only 24 is supported",
                self.bits_per_pixel
            )));
        }
        if self.compression != 0 {
            return Err(StegoError::UnsupportedFormat(format!(
                "compression method {}, only uncompressed images are supported",
                self.compression
            )));
        }
        Ok(())
    }
}

/// 输出图像的像素数组布局。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapLayout {
    pub width: u32,
    pub height: u32,
    pub row_stride: usize,
    pub pixel_array_offset: usize,
    pub pixel_array_size: usize,
    pub file_size: usize,
}

impl BitmapLayout {
    /// 根据宽高计算 24 位图像的布局，像素数组固定从第 54 字节开始。
    ///
    /// # Errors
    ///
    /// 尺寸导致文件大小超出 `u32` 范围时返回 [`StegoError::DimensionsTooLarge`]。
    pub fn new(width: u32, height: u32) -> Result<Self, StegoError> {
        let too_large = StegoError::DimensionsTooLarge { width, height };
        if i32::try_from(height).is_err() {
            return Err(too_large);
        }
        let row_stride = row_stride(width).ok_or_else(|| too_large.clone())?;
        let pixel_array_size = row_stride
            .checked_mul(height as usize)
            .ok_or_else(|| too_large.clone())?;
        let file_size = pixel_array_size
            .checked_add(BMP_HEADER_SIZE)
            .filter(|&size| u32::try_from(size).is_ok())
            .ok_or(too_large)?;

        Ok(Self {
            width,
            height,
            row_stride,
            pixel_array_offset: BMP_HEADER_SIZE,
            pixel_array_size,
            file_size,
        })
    }

    /// 每行末尾的填充字节数。
    pub fn row_padding(&self) -> usize {
        self.row_stride - self.width as usize * BYTES_PER_PIXEL
    }
}

/// 24 位图像每行的字节数，按 4 字节对齐。
pub fn row_stride(width: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(BYTES_PER_PIXEL)?
        .checked_add(3)
        .map(|bytes| bytes & !3)
}

/// 读取 BMP 文件头中的几何字段 (小端序)。
///
/// # Errors
///
/// * 缓冲区不足 54 字节时返回 [`StegoError::MalformedHeader`]。
/// * 前两个字节不是 "BM" 时返回 [`StegoError::InvalidSignature`]。
pub fn parse_geometry(buffer: &[u8]) -> Result<BitmapGeometry, StegoError> {
    if buffer.len() < BMP_HEADER_SIZE {
        return Err(StegoError::MalformedHeader { len: buffer.len() });
    }

    let found = [buffer[0], buffer[1]];
    if found != BMP_SIGNATURE {
        return Err(StegoError::InvalidSignature { found });
    }

    let raw_height = read_u32(buffer, 22) as i32;

    Ok(BitmapGeometry {
        width: read_u32(buffer, 18),
        height: raw_height.unsigned_abs(),
        top_down: raw_height < 0,
        bits_per_pixel: read_u16(buffer, 28),
        compression: read_u32(buffer, 30),
        file_size: read_u32(buffer, 2),
        pixel_array_offset: read_u32(buffer, 10),
    })
}

/// 分配一个零填充的输出缓冲区并写入完整的 BMP 文件头。
///
/// 高度总是以正数写入，声明自下而上的行顺序。
///
/// # Errors
///
/// 尺寸过大时返回 [`StegoError::DimensionsTooLarge`]。
pub fn build_canonical_header(
    width: u32,
    height: u32,
) -> Result<(Vec<u8>, BitmapLayout), StegoError> {
    let layout = BitmapLayout::new(width, height)?;
    let mut buffer = vec![0u8; layout.file_size];

    // BITMAPFILEHEADER
    buffer[0..2].copy_from_slice(&BMP_SIGNATURE);
    write_u32(&mut buffer, 2, layout.file_size as u32);
    write_u32(&mut buffer, 10, layout.pixel_array_offset as u32);

    // BITMAPINFOHEADER
    write_u32(&mut buffer, 14, DIB_HEADER_SIZE);
    write_u32(&mut buffer, 18, width);
    write_u32(&mut buffer, 22, height);
    write_u16(&mut buffer, 26, 1);
    write_u16(&mut buffer, 28, BITS_PER_PIXEL);
    write_u32(&mut buffer, 34, layout.pixel_array_size as u32);

    Ok((buffer, layout))
}

fn read_u16(buffer: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([buffer[offset], buffer[offset + 1]])
}

fn read_u32(buffer: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        buffer[offset],
        buffer[offset + 1],
        buffer[offset + 2],
        buffer[offset + 3],
    ])
}

fn write_u16(buffer: &mut [u8], offset: usize, value: u16) {
    buffer[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
}

fn write_u32(buffer: &mut [u8], offset: usize, value: u32) {
    buffer[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}
