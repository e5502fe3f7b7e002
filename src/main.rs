use clap::Parser;

use lsb_canvas::{
    cli::{Cli, Commands},
    handler::{handle_extract, handle_generate},
};

/// 程序的主入口点
///
/// 负责解析命令行参数，并根据指定的子命令（`generate` 或 `extract`）
/// 将执行分派到相应的处理函数
fn main() -> anyhow::Result<()> {
    // 解析命令行参数
    let cli = Cli::parse();

    // 根据子命令调用相应的处理函数
    match cli.command {
        Commands::Generate(args) => handle_generate(args),
        Commands::Extract(args) => handle_extract(args),
    }
}
