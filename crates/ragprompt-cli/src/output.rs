//! 生成結果の出力先（表示・ファイル保存・クリップボード）。
//!
//! いずれもレンダリング完了後にのみ呼ばれる独立した副作用であり、
//! 失敗しても設定やレンダラの状態には影響しない。

use std::path::{Path, PathBuf};

use anyhow::Context;
use console::style;
use ragprompt_core::ProjectConfig;

/// 出力先の指定。
#[derive(Debug, Clone, Default)]
pub(crate) struct OutputOptions {
    /// 標準出力へ書き出す
    pub(crate) stdout: bool,
    /// プロジェクト名から導出したファイル名で保存する
    pub(crate) save: bool,
    /// 明示的な出力パス（`save` より優先）
    pub(crate) output: Option<PathBuf>,
    /// クリップボードへコピーする
    pub(crate) clipboard: bool,
}

/// 生成済みドキュメントを指定の出力先へ配送する。
///
/// どの出力先も指定されなかった場合は標準出力へ書き出す。
///
/// # Errors
///
/// ファイル書き込みまたはクリップボード操作に失敗した場合にエラーを返す。
pub(crate) fn dispatch(
    document: &str,
    config: &ProjectConfig,
    opts: &OutputOptions,
) -> anyhow::Result<()> {
    let mut delivered = false;

    if let Some(path) = &opts.output {
        write_file(path, document)?;
        delivered = true;
    } else if opts.save {
        write_file(Path::new(&config.output_file_name()), document)?;
        delivered = true;
    }

    if opts.clipboard {
        copy_to_clipboard(document)?;
        eprintln!("{} クリップボードにコピーしました。", style("✔").green());
        delivered = true;
    }

    if opts.stdout || !delivered {
        print!("{document}");
    }

    Ok(())
}

/// ドキュメントを Markdown ファイルとして保存する。
pub(crate) fn write_file(path: &Path, document: &str) -> anyhow::Result<()> {
    std::fs::write(path, document)
        .with_context(|| format!("ファイルの書き込みに失敗: {}", path.display()))?;
    eprintln!(
        "{} {} に保存しました。",
        style("✔").green(),
        path.display()
    );
    Ok(())
}

/// ドキュメントをシステムのクリップボードへコピーする。
pub(crate) fn copy_to_clipboard(document: &str) -> anyhow::Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().context("クリップボードの初期化に失敗")?;
    clipboard
        .set_text(document.to_string())
        .context("クリップボードへのコピーに失敗")?;
    Ok(())
}
