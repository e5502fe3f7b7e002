//! # 图像生成模块
//!
//! 串联容器编解码、光栅化和隐写：读取源 BMP 的尺寸，
//! 构造新的 24 位图像，用选定的图案填充像素，最后嵌入消息。
//! 任何一步失败都不会产生输出。

use crate::bitmap::{build_canonical_header, parse_geometry};
use crate::constants::BMP_HEADER_SIZE;
use crate::error::StegoError;
use crate::pattern::{Colorizer, Pattern};
use crate::raster::{RowOrder, rasterize};
use crate::steganography::{Extraction, embed, extract};

/// 生成一张带隐藏消息的图案 BMP，尺寸与 `source` 相同。
///
/// # Errors
///
/// * `source` 的文件头无效或不是未压缩的 24 位图像。
/// * 尺寸过大。
/// * 消息含有 0x00 或超出载体容量。
pub fn generate(
    source: &[u8],
    pattern: Pattern,
    colorizer: Colorizer,
    order: RowOrder,
    message: &[u8],
) -> Result<Vec<u8>, StegoError> {
    let geometry = parse_geometry(source)?;
    geometry.ensure_supported()?;

    let (mut picture, layout) = build_canonical_header(geometry.width, geometry.height)?;
    let (width, height) = (layout.width, layout.height);

    rasterize(&mut picture, &layout, order, |x, y| {
        let flag = pattern.flag(x, y, width, height);
        colorizer.colorize(x, y, width, height, flag)
    })?;

    embed(&mut picture, message, layout.pixel_array_offset)?;

    Ok(picture)
}

/// 棋盘格图案，`colors` 为外部传入的着色方案编号。
pub fn generate_checkerboard(
    source: &[u8],
    colors: i64,
    message: &[u8],
) -> Result<Vec<u8>, StegoError> {
    generate(
        source,
        Pattern::Checkerboard,
        Colorizer::from_discriminant(colors),
        RowOrder::Legacy,
        message,
    )
}

/// 同心圆图案，`colors` 为外部传入的着色方案编号。
pub fn generate_circle(source: &[u8], colors: i64, message: &[u8]) -> Result<Vec<u8>, StegoError> {
    generate(
        source,
        Pattern::Circle,
        Colorizer::from_discriminant(colors),
        RowOrder::Legacy,
        message,
    )
}

/// 波浪图案，`colors` 为外部传入的着色方案编号。
pub fn generate_waves(source: &[u8], colors: i64, message: &[u8]) -> Result<Vec<u8>, StegoError> {
    generate(
        source,
        Pattern::Waves,
        Colorizer::from_discriminant(colors),
        RowOrder::Legacy,
        message,
    )
}

/// 校验 `picture` 的文件头后读出隐藏的消息。
///
/// # Errors
///
/// 文件头无效或不是未压缩的 24 位图像时返回错误。缺少结束标记不算错误，
/// 由 [`Extraction::terminated`] 表示。
pub fn extract_message(picture: &[u8]) -> Result<Extraction, StegoError> {
    parse_geometry(picture)?.ensure_supported()?;
    Ok(extract(picture, BMP_HEADER_SIZE))
}
