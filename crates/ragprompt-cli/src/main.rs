mod cli;
mod commands;
mod config_file;
mod output;
mod prompt;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    // Ctrl+C でパニックせずに終了するためのハンドラ
    ctrlc_handler();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Generate(args)) => commands::generate::run(&args),
        Some(Commands::New) | None => commands::new::run(),
    };

    if let Err(e) = result {
        eprintln!("エラー: {e:#}");
        std::process::exit(1);
    }
}

/// Ctrl+C のグローバルハンドラを設定する。
/// dialoguer が Ctrl+C を処理するため、ここでは最低限のフォールバックのみ。
fn ctrlc_handler() {
    let _ = ctrlc::set_handler(|| {
        // dialoguer の interact_opt が None を返すので、
        // ここでは何もしない（二重終了を防ぐ）。
    });
}
