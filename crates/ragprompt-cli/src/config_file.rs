use std::path::Path;

use anyhow::Context;
use ragprompt_core::ProjectConfig;

/// 設定ファイルを読み込む。
///
/// 指定されたパスから YAML 形式のプロジェクト設定を読み込む。
/// ファイルが存在しない場合は既定値を返す。部分的なファイルでも
/// 欠けたフィールドは既定値で補われる。
pub(crate) fn load_config(path: &Path) -> anyhow::Result<ProjectConfig> {
    if !path.exists() {
        return Ok(ProjectConfig::default());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("設定ファイルの読み込みに失敗: {}", path.display()))?;
    let config: ProjectConfig = serde_yaml::from_str(&content)
        .with_context(|| format!("設定ファイルのパースに失敗: {}", path.display()))?;
    Ok(config)
}
