//! # 图案模块
//!
//! 着色器 (`Colorizer`) 把像素坐标和一个布尔标志映射为 RGB 颜色；
//! 图案 (`Pattern`) 决定每个像素的布尔标志。两者在生成图像时组合使用。

use crate::constants::{RING_WIDTH, TILE_SIZE, WAVE_FREQUENCY};

/// 一个像素的颜色，每个分量取值 0..=255。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// 可选的着色方案。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Colorizer {
    /// 水平渐变，标志为真时为绿色，否则为蓝色。
    #[default]
    GradientBlueToGreen,
    /// 标志为真时为白色，否则为黑色。
    BlackAndWhite,
    /// 名字虽然叫 "random"，实际是确定性的双色渐变。
    RandomPattern,
}

impl Colorizer {
    /// 从外部传入的整数编号选择着色方案: 1 渐变、2 黑白、3 "随机"。
    /// 其他任何值都回退到渐变。
    pub fn from_discriminant(value: i64) -> Self {
        match value {
            2 => Self::BlackAndWhite,
            3 => Self::RandomPattern,
            _ => Self::GradientBlueToGreen,
        }
    }

    pub fn discriminant(self) -> i64 {
        match self {
            Self::GradientBlueToGreen => 1,
            Self::BlackAndWhite => 2,
            Self::RandomPattern => 3,
        }
    }

    /// 计算 `(x, y)` 处像素的颜色。
    pub fn colorize(self, x: u32, _y: u32, width: u32, _height: u32, flag: bool) -> Rgb {
        match self {
            Self::GradientBlueToGreen => {
                let value = horizontal_ramp(x, width);
                if flag {
                    Rgb::new(0, value, 0)
                } else {
                    Rgb::new(0, 0, value)
                }
            }
            Self::BlackAndWhite => {
                let value = if flag { 255 } else { 0 };
                Rgb::new(value, value, value)
            }
            Self::RandomPattern => {
                let value = horizontal_ramp(x, width);
                let inverse = 255 - value;
                if flag {
                    Rgb::new(value, value, inverse)
                } else {
                    Rgb::new(0, inverse, inverse)
                }
            }
        }
    }
}

/// `floor(x / width * 255)`。
fn horizontal_ramp(x: u32, width: u32) -> u8 {
    if width == 0 {
        return 0;
    }
    (f64::from(x) / f64::from(width) * 255.0).floor().clamp(0.0, 255.0) as u8
}

/// 决定像素布尔标志的图案。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// 边长 50 像素的棋盘格。
    Checkerboard,
    /// 以图像中心为圆心、宽 25 像素的同心圆环。
    Circle,
    /// 沿线性像素索引的正弦波带。
    Waves,
}

impl Pattern {
    /// 输出文件的默认名称。
    pub fn file_stem(self) -> &'static str {
        match self {
            Self::Checkerboard => "checkerboard_with_message",
            Self::Circle => "circle_with_message",
            Self::Waves => "waves_with_message",
        }
    }

    /// 计算 `(x, y)` 处像素的布尔标志。
    pub fn flag(self, x: u32, y: u32, width: u32, height: u32) -> bool {
        match self {
            Self::Checkerboard => (y / TILE_SIZE) % 2 == (x / TILE_SIZE) % 2,
            Self::Circle => {
                let dx = f64::from(x) - f64::from(width) / 2.0;
                let dy = f64::from(y) - f64::from(height) / 2.0;
                let distance = (dx * dx + dy * dy).sqrt();
                distance % (2.0 * RING_WIDTH) <= RING_WIDTH
            }
            Self::Waves => {
                let index = f64::from(x) + f64::from(y) * f64::from(width);
                (index * WAVE_FREQUENCY).sin() > 0.0
            }
        }
    }
}
