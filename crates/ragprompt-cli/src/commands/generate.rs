use anyhow::{bail, Context};
use ragprompt_core::{FeatureKey, ProjectConfig, PromptRenderer};

use crate::cli::GenerateArgs;
use crate::config_file;
use crate::output::{self, OutputOptions};

/// 非対話モードでプロンプトを生成する。
///
/// 設定ファイルを読み込み、コマンドラインオプションで上書きしてから
/// レンダリングし、指定された出力先へ配送する。
///
/// # Errors
///
/// 設定の読み込み・上書き値のパース・出力のいずれかに失敗した場合に
/// エラーを返す。
pub(crate) fn run(args: &GenerateArgs) -> anyhow::Result<()> {
    let config = load_with_overrides(args)?;
    let renderer = PromptRenderer::new()?;
    let document = renderer.render(&config)?;

    let opts = OutputOptions {
        stdout: args.stdout,
        save: args.save,
        output: args.output.clone(),
        clipboard: args.clipboard,
    };
    output::dispatch(&document, &config, &opts)
}

/// 設定ファイルを読み込み、コマンドラインオプションをフィールド単位で適用する。
fn load_with_overrides(args: &GenerateArgs) -> anyhow::Result<ProjectConfig> {
    let mut config = config_file::load_config(&args.config)?;

    if let Some(name) = &args.project_name {
        config = config.with_project_name(name.clone());
    }
    if let Some(name) = &args.client_name {
        config = config.with_client_name(name.clone());
    }
    if let Some(description) = &args.description {
        config = config.with_description(description.clone());
    }
    if let Some(model) = &args.ai_model {
        config = config.with_ai_model(model.parse().map_err(anyhow::Error::msg)?);
    }
    if let Some(db) = &args.vector_database {
        config = config.with_vector_database(db.parse().map_err(anyhow::Error::msg)?);
    }
    if let Some(provider) = &args.whatsapp_provider {
        config = config.with_whatsapp_provider(provider.parse().map_err(anyhow::Error::msg)?);
    }
    for spec in &args.features {
        let (key, value) = parse_feature(spec)?;
        config = config.with_feature(key, value);
    }
    if let Some(requirements) = &args.additional_requirements {
        config = config.with_additional_requirements(requirements.clone());
    }

    Ok(config)
}

/// `KEY=BOOL` 形式の機能トグル指定をパースする。
fn parse_feature(spec: &str) -> anyhow::Result<(FeatureKey, bool)> {
    let Some((key, value)) = spec.split_once('=') else {
        bail!("機能トグルは KEY=BOOL 形式で指定してください: {spec}");
    };
    let key: FeatureKey = key.trim().parse().map_err(anyhow::Error::msg)?;
    let value: bool = value
        .trim()
        .parse()
        .with_context(|| format!("真偽値のパースに失敗: {value}"))?;
    Ok((key, value))
}
