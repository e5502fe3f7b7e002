use lsb_canvas::bitmap::{BitmapLayout, build_canonical_header};
use lsb_canvas::error::StegoError;
use lsb_canvas::pattern::Rgb;
use lsb_canvas::raster::{RowOrder, rasterize};
use std::collections::HashSet;

/// 给每个像素一个独一无二的颜色，方便定位
fn coordinate_color(x: u32, y: u32) -> Rgb {
    Rgb::new(x as u8 + 1, y as u8 + 1, 0xAA)
}

/// 7x3 图像：每个像素恰好访问一次，行末填充保持为零
#[test]
fn test_rasterize_visits_every_pixel_once() -> anyhow::Result<()> {
    let (mut buffer, layout) = build_canonical_header(7, 3)?;
    assert_eq!(layout.row_stride, 24);

    let mut seen = HashSet::new();
    let visited = rasterize(&mut buffer, &layout, RowOrder::Legacy, |x, y| {
        assert!(seen.insert((x, y)), "pixel ({x}, {y}) visited twice");
        coordinate_color(x, y)
    })?;

    assert_eq!(visited, 21);
    assert_eq!(seen.len(), 21);

    let pixels = &buffer[54..];
    assert_eq!(pixels.len(), 72);
    for (y, row) in pixels.chunks_exact(24).enumerate() {
        for x in 0..7 {
            let color = coordinate_color(x as u32, y as u32);
            assert_eq!(&row[x * 3..x * 3 + 3], &[color.blue, color.green, color.red]);
        }
        assert_eq!(&row[21..], &[0, 0, 0], "row {y} padding must stay zero");
    }

    Ok(())
}

/// Upright 模式把第一行逻辑像素写入最后一个存储行
#[test]
fn test_rasterize_upright_flips_storage_rows() -> anyhow::Result<()> {
    let (mut legacy, layout) = build_canonical_header(5, 4)?;
    let mut upright = legacy.clone();

    rasterize(&mut legacy, &layout, RowOrder::Legacy, coordinate_color)?;
    rasterize(&mut upright, &layout, RowOrder::Upright, coordinate_color)?;

    let stride = layout.row_stride;
    let rows = |buffer: &[u8]| -> Vec<Vec<u8>> {
        buffer[54..].chunks_exact(stride).map(<[u8]>::to_vec).collect()
    };
    let mut legacy_rows = rows(&legacy);
    legacy_rows.reverse();

    assert_eq!(legacy_rows, rows(&upright));
    assert_eq!(upright[54 + 3 * stride + 1], 1, "logical row 0 is stored last");

    Ok(())
}

#[test]
fn test_rasterize_leaves_header_untouched() -> anyhow::Result<()> {
    let (mut buffer, layout) = build_canonical_header(3, 2)?;
    let header = buffer[..54].to_vec();

    rasterize(&mut buffer, &layout, RowOrder::Legacy, |_, _| {
        Rgb::new(255, 255, 255)
    })?;

    assert_eq!(&buffer[..54], header.as_slice());
    Ok(())
}

#[test]
fn test_rasterize_rejects_short_buffer() -> anyhow::Result<()> {
    let layout = BitmapLayout::new(4, 4)?;
    let mut buffer = vec![0u8; 80];

    let result = rasterize(&mut buffer, &layout, RowOrder::Legacy, |_, _| Rgb::default());
    assert_eq!(
        result,
        Err(StegoError::BufferTooSmall {
            needed: 102,
            actual: 80
        })
    );

    Ok(())
}

#[test]
fn test_rasterize_empty_image() -> anyhow::Result<()> {
    let (mut buffer, layout) = build_canonical_header(0, 0)?;
    let visited = rasterize(&mut buffer, &layout, RowOrder::Upright, |_, _| {
        panic!("no pixel should be visited")
    })?;
    assert_eq!(visited, 0);
    assert_eq!(buffer.len(), 54);
    Ok(())
}
