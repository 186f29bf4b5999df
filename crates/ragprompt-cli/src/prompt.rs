use std::io;

use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};

/// 対話式プロンプトのテーマを取得する。
pub(crate) fn theme() -> ColorfulTheme {
    ColorfulTheme::default()
}

/// 選択プロンプト。Ctrl+C / Esc で None を返す。
///
/// # Errors
///
/// プロンプトの入出力に失敗した場合にエラーを返す。
pub(crate) fn select_prompt(prompt: &str, items: &[&str]) -> anyhow::Result<Option<usize>> {
    let selection = Select::with_theme(&theme())
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact_opt()?;
    Ok(selection)
}

/// 複数選択プロンプト。`defaults` で初期チェック状態を指定する。
/// Ctrl+C / Esc で None を返す。
///
/// # Errors
///
/// プロンプトの入出力に失敗した場合にエラーを返す。
pub(crate) fn multi_select_prompt(
    prompt: &str,
    items: &[&str],
    defaults: &[bool],
) -> anyhow::Result<Option<Vec<usize>>> {
    let selection = MultiSelect::with_theme(&theme())
        .with_prompt(prompt)
        .items(items)
        .defaults(defaults)
        .interact_opt()?;
    Ok(selection)
}

/// テキスト入力プロンプト。空入力を許可し、現在値を初期表示する。
/// Ctrl+C で None を返す。
///
/// # Errors
///
/// 中断以外の入出力に失敗した場合にエラーを返す。
pub(crate) fn input_prompt(prompt: &str, initial: &str) -> anyhow::Result<Option<String>> {
    map_input_result(
        Input::with_theme(&theme())
            .with_prompt(prompt)
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text(),
    )
}

/// 入力結果の変換。中断（Ctrl+C）のみ None に畳み、他の I/O 失敗は
/// エラーとして伝播する。
fn map_input_result(result: dialoguer::Result<String>) -> anyhow::Result<Option<String>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// 確認プロンプトの結果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfirmResult {
    /// はい — 実行する
    Yes,
    /// いいえ — 前のステップに戻る
    GoBack,
    /// キャンセル — 生成を中止する
    Cancel,
}

/// 確認プロンプト（はい / いいえ（前のステップに戻る）/ キャンセル の3択）。
/// Ctrl+C / Esc の場合は Cancel を返す。
///
/// # Errors
///
/// プロンプトの入出力に失敗した場合にエラーを返す。
pub(crate) fn confirm_prompt() -> anyhow::Result<ConfirmResult> {
    let items = &[
        "はい",
        "いいえ（前のステップに戻る）",
        "キャンセル（生成を中止する）",
    ];
    let selection = Select::with_theme(&theme())
        .with_prompt("この内容で生成しますか？")
        .items(items)
        .default(0)
        .interact_opt()?;
    match selection {
        None | Some(2) => Ok(ConfirmResult::Cancel),
        Some(0) => Ok(ConfirmResult::Yes),
        Some(1) => Ok(ConfirmResult::GoBack),
        _ => unreachable!(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_result_eq() {
        assert_eq!(ConfirmResult::Yes, ConfirmResult::Yes);
        assert_eq!(ConfirmResult::GoBack, ConfirmResult::GoBack);
        assert_eq!(ConfirmResult::Cancel, ConfirmResult::Cancel);
        assert_ne!(ConfirmResult::Yes, ConfirmResult::GoBack);
    }

    #[test]
    fn test_map_input_result_ok() {
        let result = map_input_result(Ok("bot-suporte".to_string()));
        assert_eq!(result.unwrap(), Some("bot-suporte".to_string()));
    }

    #[test]
    fn test_map_input_result_interrupted_is_cancel() {
        let err = io::Error::new(io::ErrorKind::Interrupted, "read interrupted");
        let result = map_input_result(Err(dialoguer::Error::IO(err)));
        assert_eq!(result.unwrap(), None);
    }

    #[test]
    fn test_map_input_result_other_io_error_propagates() {
        let err = io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe");
        let result = map_input_result(Err(dialoguer::Error::IO(err)));
        assert!(result.is_err());
    }

    #[test]
    fn test_theme_creation() {
        let _theme = theme();
        // テーマが正常に作成されることを確認
    }
}
