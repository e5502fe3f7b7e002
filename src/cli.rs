//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use crate::pattern::Pattern;
use clap::{ArgGroup, Parser, ValueEnum};
use std::path::PathBuf;

/// 生成带图案的 24 位 BMP 图像，并在像素的最低有效位中隐藏一段文本。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "生成带图案的 24 位 BMP 图像，并在像素的最低有效位 (LSB) 中隐藏或恢复一段文本。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：generate (生成) 和 extract (提取)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 以源 BMP 的尺寸生成图案图像，并隐藏消息。
    Generate(GenerateArgs),

    /// 从生成的图像中提取隐藏的消息。
    Extract(ExtractArgs),
}

/// 可选的图案。
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PatternKind {
    #[default]
    Checkerboard,
    Circle,
    Waves,
}

impl From<PatternKind> for Pattern {
    fn from(kind: PatternKind) -> Self {
        match kind {
            PatternKind::Checkerboard => Pattern::Checkerboard,
            PatternKind::Circle => Pattern::Circle,
            PatternKind::Waves => Pattern::Waves,
        }
    }
}

/// 'generate' 命令所需的参数。
#[derive(Parser, Debug)]
#[command(group(
    ArgGroup::new("payload")
        .required(true)
        .args(["message", "message_file"])
))]
pub struct GenerateArgs {
    /// 提供图像尺寸的源 BMP 文件路径。
    #[arg(short, long)]
    pub source: PathBuf,

    /// 填充像素的图案。
    #[arg(short, long, value_enum, default_value_t = PatternKind::Checkerboard)]
    pub pattern: PatternKind,

    /// 着色方案编号：1 蓝绿渐变，2 黑白，3 双色渐变；其他值按 1 处理。
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub colors: i64,

    /// 要隐藏的文本。
    #[arg(short, long)]
    pub message: Option<String>,

    /// 从文件中读取要隐藏的文本。
    #[arg(long)]
    pub message_file: Option<PathBuf>,

    /// 输出图像路径。默认为源文件所在目录下的 `<图案>_with_message.bmp`。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 按标准的自下而上顺序存储行，使图案在阅读器中正向显示。
    #[arg(long)]
    pub upright: bool,

    /// 覆盖已存在的输出文件。
    #[arg(short, long)]
    pub force: bool,
}

/// 'extract' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// 隐藏了消息的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 把提取出的文本另存到此路径。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 找不到结束标记时报错，而不是返回已解码的内容。
    #[arg(long)]
    pub strict: bool,

    /// 覆盖已存在的输出文件。
    #[arg(short, long)]
    pub force: bool,
}
