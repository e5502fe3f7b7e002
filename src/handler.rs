//! # 命令处理逻辑模块
//!
//! 包含处理 `generate` 和 `extract` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用核心生成与隐写函数以及向用户报告结果。

use crate::cli::{ExtractArgs, GenerateArgs};
use crate::generator::{extract_message, generate};
use crate::pattern::{Colorizer, Pattern};
use crate::raster::RowOrder;
use crate::steganography::{decode_text, encode_text};
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// 处理 'Generate' 命令的执行逻辑。
///
/// 读取源图像和消息，生成带图案的新图像并隐藏消息，最后写入目标文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径和图案选项的 `GenerateArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取源图像或消息文件。
/// * 目标文件已存在且未指定 `--force`。
/// * 源图像不是有效的 24 位 BMP，或消息无法放入图像。
/// * 无法写入到目标图像文件。
pub fn handle_generate(args: GenerateArgs) -> Result<()> {
    let pattern = Pattern::from(args.pattern);
    let dest = args
        .dest
        .clone()
        .unwrap_or_else(|| default_image_path(&args.source, pattern));
    ensure_writable(&dest, args.force)?;

    let source = fs::read(&args.source).with_context(|| {
        format!(
            "Unable to read source image: {}",
            args.source.to_string_lossy().red().bold()
        )
    })?;

    let text = match (&args.message, &args.message_file) {
        (Some(message), _) => message.clone(),
        (None, Some(path)) => fs::read_to_string(path).with_context(|| {
            format!(
                "Unable to read message file: {}",
                path.to_string_lossy().red().bold()
            )
        })?,
        (None, None) => anyhow::bail!("No message given. Use --message or --message-file."),
    };

    let message = encode_text(&text)
        .with_context(|| "The message can only contain characters in the range U+0001..=U+00FF.")?;

    let colorizer = Colorizer::from_discriminant(args.colors);
    let order = if args.upright {
        RowOrder::Upright
    } else {
        RowOrder::Legacy
    };

    let picture = generate(&source, pattern, colorizer, order, &message).with_context(|| {
        format!(
            "Failed to generate an image from '{}'.",
            args.source.to_string_lossy().red().bold()
        )
    })?;

    fs::write(&dest, &picture).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The image has been generated with a hidden message ({} bytes) and saved: {}",
        message.len().to_string().green().bold(),
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Extract' 命令的执行逻辑。
///
/// 读取图像、提取隐藏的消息并打印；指定了 `--text` 时同时写入文本文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径的 `ExtractArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入的图像文件，或其文件头无效。
/// * 指定了 `--strict` 且找不到结束标记。
/// * 目标文本文件已存在且未指定 `--force`，或无法写入。
pub fn handle_extract(args: ExtractArgs) -> Result<()> {
    if let Some(path) = &args.text {
        ensure_writable(path, args.force)?;
    }

    let picture = fs::read(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let extraction = extract_message(&picture).with_context(|| {
        format!(
            "Failed to read a message from '{}'. \nThe file is not a supported BMP image.",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let terminated = extraction.terminated;
    let message = if args.strict {
        extraction.into_message().with_context(|| {
            format!(
                "The image '{}' does not contain a complete hidden message.",
                args.image.to_string_lossy().red().bold()
            )
        })?
    } else {
        extraction.message
    };

    if !terminated {
        println!(
            "{}",
            "Warning: no message terminator found, the recovered text may be corrupt.".yellow()
        );
    }

    let text = decode_text(&message);

    if let Some(path) = &args.text {
        fs::write(path, &text).with_context(|| {
            format!(
                "Unable to write to target text file: {}",
                path.to_string_lossy().red().bold()
            )
        })?;
        println!(
            "The message has been extracted and saved: {}",
            path.to_string_lossy().green().bold()
        );
    }

    println!("Extracted message: {}", text.green());

    Ok(())
}

/// 源文件所在目录下的 `<图案>_with_message.bmp`。
pub fn default_image_path(source: &Path, pattern: Pattern) -> PathBuf {
    source.with_file_name(format!("{}.bmp", pattern.file_stem()))
}

fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}
