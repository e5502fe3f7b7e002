//! # 像素平面光栅化模块
//!
//! 遍历图像的每一个像素，调用着色函数取得颜色，
//! 按 B、G、R 的顺序写入带行填充的像素数组。

use crate::bitmap::BitmapLayout;
use crate::constants::BYTES_PER_PIXEL;
use crate::error::StegoError;
use crate::pattern::Rgb;

/// 逻辑行与存储行之间的对应关系。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowOrder {
    /// 第 y 个逻辑行写入第 y 个存储行。
    ///
    /// 头部声明自下而上，因此标准的 BMP 阅读器会显示上下翻转的图案。
    /// 这是旧版生成器的行为，默认保留以保持输出一致。
    #[default]
    Legacy,
    /// 第 y 个逻辑行写入第 `height - 1 - y` 个存储行，图案在阅读器中正向显示。
    Upright,
}

impl RowOrder {
    fn storage_row(self, y: u32, height: u32) -> usize {
        match self {
            Self::Legacy => y as usize,
            Self::Upright => (height - 1 - y) as usize,
        }
    }
}

/// 按行优先顺序访问每个像素并写入 `paint` 返回的颜色。
///
/// 行末的填充字节保持不变。返回访问的像素数量。
///
/// # Errors
///
/// `buffer` 无法容纳 `layout` 描述的像素数组时返回 [`StegoError::BufferTooSmall`]。
pub fn rasterize<F>(
    buffer: &mut [u8],
    layout: &BitmapLayout,
    order: RowOrder,
    mut paint: F,
) -> Result<usize, StegoError>
where
    F: FnMut(u32, u32) -> Rgb,
{
    let needed = layout.pixel_array_offset + layout.pixel_array_size;
    if buffer.len() < needed {
        return Err(StegoError::BufferTooSmall {
            needed,
            actual: buffer.len(),
        });
    }

    let pixels = &mut buffer[layout.pixel_array_offset..needed];
    let row_bytes = layout.width as usize * BYTES_PER_PIXEL;
    let mut visited = 0;

    for y in 0..layout.height {
        let start = order.storage_row(y, layout.height) * layout.row_stride;
        let row = &mut pixels[start..start + row_bytes];

        for (x, pixel) in (0..layout.width).zip(row.chunks_exact_mut(BYTES_PER_PIXEL)) {
            let color = paint(x, y);
            pixel[0] = color.blue;
            pixel[1] = color.green;
            pixel[2] = color.red;
            visited += 1;
        }
    }

    Ok(visited)
}
