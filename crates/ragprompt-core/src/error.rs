use thiserror::Error;

/// プロンプトレンダリングのエラー。
///
/// 組み込みテンプレートと完全なコンテキストを使う限り到達しないが、
/// Tera の API が返す失敗をそのまま伝播できるようにしておく。
#[derive(Debug, Error)]
pub enum RenderError {
    /// テンプレートの登録またはレンダリングに失敗
    #[error("テンプレートの処理に失敗しました: {0}")]
    Template(#[from] tera::Error),
}
