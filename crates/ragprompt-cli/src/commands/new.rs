use std::path::PathBuf;

use anyhow::Result;
use console::style;
use ragprompt_core::{
    AiModel, FeatureKey, ProjectConfig, PromptRenderer, VectorDatabase, WhatsappProvider,
};

use crate::output;
use crate::prompt::{self, ConfirmResult};

// ============================================================================
// ステートマシン
// ============================================================================

/// 対話フローのステップ。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Info,
    Stack,
    Features,
    Extras,
    Confirm,
}

/// 対話形式でプロンプトを生成する。
///
/// 各ステップで Esc / Ctrl+C を押すと前のステップに戻る。
/// 最初のステップで中断した場合は生成を中止する。
///
/// # Errors
///
/// プロンプトの入出力、レンダリング、または出力に失敗した場合にエラーを返す。
pub(crate) fn run() -> Result<()> {
    println!("\n--- 技術プロンプト生成（対話モード） ---\n");

    let mut config = ProjectConfig::default();
    let mut step = Step::Info;

    loop {
        match step {
            Step::Info => match step_info(config.clone())? {
                Some(c) => {
                    config = c;
                    step = Step::Stack;
                }
                None => return Ok(()),
            },

            Step::Stack => match step_stack(config.clone())? {
                Some(c) => {
                    config = c;
                    step = Step::Features;
                }
                None => {
                    step = Step::Info;
                }
            },

            Step::Features => match step_features(config.clone())? {
                Some(c) => {
                    config = c;
                    step = Step::Extras;
                }
                None => {
                    step = Step::Stack;
                }
            },

            Step::Extras => match step_extras(config.clone())? {
                Some(c) => {
                    config = c;
                    step = Step::Confirm;
                }
                None => {
                    step = Step::Features;
                }
            },

            Step::Confirm => {
                print_summary(&config);
                match prompt::confirm_prompt()? {
                    ConfirmResult::Yes => return deliver(&config),
                    ConfirmResult::GoBack => {
                        step = Step::Extras;
                    }
                    ConfirmResult::Cancel => {
                        println!("キャンセルしました。");
                        return Ok(());
                    }
                }
            }
        }
    }
}

// ============================================================================
// 各ステップ
// ============================================================================

/// ステップ1: プロジェクト情報の入力。
fn step_info(config: ProjectConfig) -> Result<Option<ProjectConfig>> {
    let Some(project_name) = prompt::input_prompt("プロジェクト名", &config.project_name)? else {
        return Ok(None);
    };
    let Some(client_name) = prompt::input_prompt("クライアント名", &config.client_name)? else {
        return Ok(None);
    };
    let Some(description) = prompt::input_prompt("プロジェクト概要", &config.description)? else {
        return Ok(None);
    };
    Ok(Some(
        config
            .with_project_name(project_name)
            .with_client_name(client_name)
            .with_description(description),
    ))
}

/// ステップ2: 技術選択（AI モデル / ベクトルDB / WhatsApp プロバイダ）。
fn step_stack(config: ProjectConfig) -> Result<Option<ProjectConfig>> {
    let model_labels = AiModel::ALL.map(AiModel::label);
    let Some(model_idx) = prompt::select_prompt("AI モデルを選択してください", &model_labels)?
    else {
        return Ok(None);
    };

    let db_labels = VectorDatabase::ALL.map(VectorDatabase::label);
    let Some(db_idx) =
        prompt::select_prompt("ベクトルデータベースを選択してください", &db_labels)?
    else {
        return Ok(None);
    };

    let provider_labels = WhatsappProvider::ALL.map(WhatsappProvider::label);
    let Some(provider_idx) =
        prompt::select_prompt("WhatsApp プロバイダを選択してください", &provider_labels)?
    else {
        return Ok(None);
    };

    Ok(Some(
        config
            .with_ai_model(AiModel::ALL[model_idx])
            .with_vector_database(VectorDatabase::ALL[db_idx])
            .with_whatsapp_provider(WhatsappProvider::ALL[provider_idx]),
    ))
}

/// ステップ3: 機能トグルの選択。
///
/// 現在の設定値を初期チェック状態として複数選択を表示し、
/// チェックされたキーのみを有効化する。
fn step_features(mut config: ProjectConfig) -> Result<Option<ProjectConfig>> {
    let labels = FeatureKey::ALL.map(FeatureKey::label);
    let defaults = FeatureKey::ALL.map(|key| config.features.get(key));
    let Some(selected) =
        prompt::multi_select_prompt("機能を選択してください（複数選択可）", &labels, &defaults)?
    else {
        return Ok(None);
    };

    for (idx, key) in FeatureKey::ALL.into_iter().enumerate() {
        config.features.set(key, selected.contains(&idx));
    }
    Ok(Some(config))
}

/// ステップ4: 追加要件の入力（空のままなら該当セクションは出力されない）。
fn step_extras(config: ProjectConfig) -> Result<Option<ProjectConfig>> {
    let Some(requirements) = prompt::input_prompt(
        "追加要件（任意、例: Integração com CRM, compliance LGPD）",
        &config.additional_requirements,
    )?
    else {
        return Ok(None);
    };
    Ok(Some(config.with_additional_requirements(requirements)))
}

/// 確認サマリを表示する。
fn print_summary(config: &ProjectConfig) {
    println!("\n--- 設定内容 ---");
    println!("プロジェクト名:       {}", config.project_name);
    println!("クライアント名:       {}", config.client_name);
    println!("概要:                 {}", config.description);
    println!("AI モデル:            {}", config.ai_model);
    println!("ベクトルDB:           {}", config.vector_database);
    println!("WhatsApp プロバイダ:  {}", config.whatsapp_provider);
    let enabled: Vec<&str> = FeatureKey::ALL
        .into_iter()
        .filter(|&key| config.features.get(key))
        .map(FeatureKey::label)
        .collect();
    println!("機能:                 {}", enabled.join(", "));
    if !config.additional_requirements.is_empty() {
        println!("追加要件:             {}", config.additional_requirements);
    }
    println!();
}

// ============================================================================
// 出力
// ============================================================================

/// レンダリングして出力メニューを表示する。
///
/// 出力先の失敗は報告するだけで、生成済みドキュメントには影響しない。
fn deliver(config: &ProjectConfig) -> Result<()> {
    let renderer = PromptRenderer::new()?;
    let document = renderer.render(config)?;
    println!(
        "{} プロンプトを生成しました（{} 文字）。",
        style("✔").green(),
        document.chars().count()
    );

    loop {
        let items = &[
            "ファイルに保存",
            "クリップボードにコピー",
            "標準出力に表示",
            "終了",
        ];
        let Some(idx) = prompt::select_prompt("出力方法を選択してください", items)? else {
            return Ok(());
        };
        match idx {
            0 => {
                let path = PathBuf::from(config.output_file_name());
                if let Err(e) = output::write_file(&path, &document) {
                    eprintln!("エラー: {e:#}");
                }
            }
            1 => match output::copy_to_clipboard(&document) {
                Ok(()) => {
                    eprintln!("{} クリップボードにコピーしました。", style("✔").green());
                }
                Err(e) => eprintln!("エラー: {e:#}"),
            },
            2 => print!("{document}"),
            3 => return Ok(()),
            _ => unreachable!(),
        }
    }
}
