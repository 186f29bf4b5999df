//! `ragprompt generate` のエンドツーエンドテスト。
//!
//! 実際のバイナリを一時ディレクトリで実行し、標準出力・生成ファイル・
//! エラー報告を検証する。対話モードとクリップボードは CI で実行できない
//! ため対象外。

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ragprompt(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ragprompt").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn test_generate_defaults_to_stdout() {
    let tmp = TempDir::new().unwrap();
    ragprompt(&tmp)
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "# Prompt Técnico Detalhado: Chatbot RAG para WhatsApp",
        ))
        .stdout(predicate::str::contains("**Backend:** Node.js, TypeScript, Express"))
        .stdout(predicate::str::contains("**IA:** gpt-4-turbo"))
        .stdout(predicate::str::contains("#### Dashboard Administrativo"))
        .stdout(predicate::str::contains("#### Gerenciamento de Documentos"))
        .stdout(predicate::str::contains("#### Analytics Dashboard").not())
        .stdout(predicate::str::contains("## 9. Internacionalização").not());
}

#[test]
fn test_generate_with_config_file() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("ragprompt.yaml"),
        "project_name: bot-suporte\nclient_name: Acme Ltda\nvector_database: Qdrant\nfeatures:\n  analytics: true\n",
    )
    .unwrap();

    ragprompt(&tmp)
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("**Nome do Projeto:** bot-suporte"))
        .stdout(predicate::str::contains("**Cliente:** Acme Ltda"))
        .stdout(predicate::str::contains("**Banco Vetorial:** Qdrant"))
        .stdout(predicate::str::contains("#### Analytics Dashboard"));
}

#[test]
fn test_generate_flag_overrides_config_file() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("ragprompt.yaml"), "project_name: do-arquivo\n").unwrap();

    ragprompt(&tmp)
        .args(["generate", "--project-name", "da-linha-de-comando"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "**Nome do Projeto:** da-linha-de-comando",
        ));
}

#[test]
fn test_generate_feature_toggle_flags() {
    let tmp = TempDir::new().unwrap();
    ragprompt(&tmp)
        .args([
            "generate",
            "--feature",
            "analytics=true",
            "--feature",
            "admin-dashboard=false",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("#### Analytics Dashboard"))
        .stdout(predicate::str::contains("#### Dashboard Administrativo").not());
}

#[test]
fn test_generate_additional_requirements_flag() {
    let tmp = TempDir::new().unwrap();
    ragprompt(&tmp)
        .args([
            "generate",
            "--additional-requirements",
            "Needs LGPD compliance",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("## 12. Requisitos Adicionais"))
        .stdout(predicate::str::contains("Needs LGPD compliance"));
}

#[test]
fn test_generate_output_writes_file() {
    let tmp = TempDir::new().unwrap();
    ragprompt(&tmp)
        .args(["generate", "--output", "saida.md"])
        .assert()
        .success();

    let content = std::fs::read_to_string(tmp.path().join("saida.md")).unwrap();
    assert!(content.starts_with("# Prompt Técnico Detalhado: Chatbot RAG para WhatsApp"));
    assert!(content.ends_with("recuperação de informações.\n"));
}

#[test]
fn test_generate_save_derives_file_name() {
    let tmp = TempDir::new().unwrap();
    ragprompt(&tmp).args(["generate", "--save"]).assert().success();
    assert!(tmp.path().join("chatbot-rag-prompt-tecnico.md").exists());

    ragprompt(&tmp)
        .args(["generate", "--save", "--project-name", "bot-suporte"])
        .assert()
        .success();
    assert!(tmp.path().join("bot-suporte-prompt-tecnico.md").exists());
}

#[test]
fn test_generate_deterministic_output() {
    let tmp = TempDir::new().unwrap();
    let first = ragprompt(&tmp).arg("generate").output().unwrap();
    let second = ragprompt(&tmp).arg("generate").output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_generate_unknown_ai_model_fails() {
    let tmp = TempDir::new().unwrap();
    ragprompt(&tmp)
        .args(["generate", "--ai-model", "gpt-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("不明な AI モデル"));
}

#[test]
fn test_generate_malformed_feature_fails() {
    let tmp = TempDir::new().unwrap();
    ragprompt(&tmp)
        .args(["generate", "--feature", "analytics"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("KEY=BOOL"));
}

#[test]
fn test_generate_invalid_config_file_fails() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("ragprompt.yaml"), "{invalid yaml").unwrap();
    ragprompt(&tmp)
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("設定ファイルのパースに失敗"));
}
