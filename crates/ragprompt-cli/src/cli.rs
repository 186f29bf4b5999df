use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "ragprompt",
    version,
    about = "WhatsApp RAG チャットボット向け技術プロンプト生成 CLI"
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// 対話形式でプロンプトを生成する
    New,
    /// 設定ファイルとオプションからプロンプトを生成する
    Generate(GenerateArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct GenerateArgs {
    /// 設定ファイルのパス（存在しない場合は既定値を使う）
    #[arg(short, long, default_value = "ragprompt.yaml")]
    pub(crate) config: PathBuf,

    /// 出力ファイルのパス
    #[arg(short, long)]
    pub(crate) output: Option<PathBuf>,

    /// プロジェクト名から導出したファイル名で保存する
    #[arg(long, default_value_t = false)]
    pub(crate) save: bool,

    /// 標準出力へ書き出す
    #[arg(long, default_value_t = false)]
    pub(crate) stdout: bool,

    /// クリップボードへコピーする
    #[arg(long, default_value_t = false)]
    pub(crate) clipboard: bool,

    /// プロジェクト名
    #[arg(long)]
    pub(crate) project_name: Option<String>,

    /// クライアント名
    #[arg(long)]
    pub(crate) client_name: Option<String>,

    /// プロジェクト概要
    #[arg(long)]
    pub(crate) description: Option<String>,

    /// AI モデル (gpt-4-turbo / gpt-4 / gpt-3.5-turbo / claude-3)
    #[arg(long)]
    pub(crate) ai_model: Option<String>,

    /// ベクトルデータベース (Pinecone / Weaviate / Milvus / Chroma / Qdrant)
    #[arg(long)]
    pub(crate) vector_database: Option<String>,

    /// WhatsApp プロバイダ (cloud-api / Twilio / 360dialog / ChatAPI)
    #[arg(long)]
    pub(crate) whatsapp_provider: Option<String>,

    /// 機能トグル (例: --feature analytics=true、複数指定可)
    #[arg(long = "feature", value_name = "KEY=BOOL")]
    pub(crate) features: Vec<String>,

    /// 追加要件
    #[arg(long)]
    pub(crate) additional_requirements: Option<String>,
}
