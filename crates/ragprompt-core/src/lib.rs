//! ragprompt コアライブラリ。
//!
//! WhatsApp 向け RAG チャットボット開発の技術プロンプト（Markdown ドキュメント）を、
//! プロジェクト設定から決定的に生成する。設定モデルとレンダラのみを提供し、
//! 入出力（画面表示・ファイル保存・クリップボード）は呼び出し側の責務とする。

pub mod config;
pub mod error;
pub mod renderer;

pub use config::{
    AiModel, FeatureKey, Features, ProjectConfig, TechStack, VectorDatabase, WhatsappProvider,
};
pub use error::RenderError;
pub use renderer::PromptRenderer;
