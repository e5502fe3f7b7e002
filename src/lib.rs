//! # lsb_canvas 库
//!
//! 生成带程序化图案的 24 位 BMP 图像，并用 LSB 隐写术在像素数据中隐藏或恢复一段文本。

// 声明库包含的所有模块。

pub mod bitmap;
pub mod cli;
pub mod constants;
pub mod error;
pub mod generator;
pub mod handler;
pub mod pattern;
pub mod raster;
pub mod steganography;
