//! プロンプトレンダラ。
//!
//! ドキュメントはブロック記述子の固定順テーブルとして定義する。各ブロックは
//! 無条件か、機能トグルまたは追加要件の有無をゲートとして持つ。レンダリングは
//! テーブルを順に走査し、ゲートが閉じたブロックを（見出しごと）完全に省略し、
//! 残りを Tera でレンダリングして連結するだけの純粋な処理である。

use tera::Tera;

use crate::config::{FeatureKey, ProjectConfig};
use crate::error::RenderError;

/// ブロックの包含条件。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gate {
    /// 常に出力する
    Always,
    /// 指定の機能トグルが有効なときのみ出力する
    Feature(FeatureKey),
    /// 追加要件が空でないときのみ出力する
    AdditionalRequirements,
}

/// ドキュメントを構成するブロック。
struct Block {
    name: &'static str,
    source: &'static str,
    gate: Gate,
}

/// ドキュメントの骨格。宣言順がそのまま出力順になる。
const BLOCKS: &[Block] = &[
    Block {
        name: "overview",
        source: include_str!("../templates/overview.tera"),
        gate: Gate::Always,
    },
    Block {
        name: "architecture",
        source: include_str!("../templates/architecture.tera"),
        gate: Gate::Always,
    },
    Block {
        name: "backend",
        source: include_str!("../templates/backend.tera"),
        gate: Gate::Always,
    },
    Block {
        name: "frontend_intro",
        source: include_str!("../templates/frontend_intro.tera"),
        gate: Gate::Always,
    },
    Block {
        name: "admin_dashboard",
        source: include_str!("../templates/admin_dashboard.tera"),
        gate: Gate::Feature(FeatureKey::AdminDashboard),
    },
    Block {
        name: "document_management",
        source: include_str!("../templates/document_management.tera"),
        gate: Gate::Feature(FeatureKey::FileUpload),
    },
    Block {
        name: "conversation_monitoring",
        source: include_str!("../templates/conversation_monitoring.tera"),
        gate: Gate::Always,
    },
    Block {
        name: "analytics",
        source: include_str!("../templates/analytics.tera"),
        gate: Gate::Feature(FeatureKey::Analytics),
    },
    Block {
        name: "frontend_tech",
        source: include_str!("../templates/frontend_tech.tera"),
        gate: Gate::Always,
    },
    Block {
        name: "integrations",
        source: include_str!("../templates/integrations.tera"),
        gate: Gate::Always,
    },
    Block {
        name: "security",
        source: include_str!("../templates/security.tera"),
        gate: Gate::Always,
    },
    Block {
        name: "performance",
        source: include_str!("../templates/performance.tera"),
        gate: Gate::Always,
    },
    Block {
        name: "deployment",
        source: include_str!("../templates/deployment.tera"),
        gate: Gate::Always,
    },
    Block {
        name: "internationalization",
        source: include_str!("../templates/internationalization.tera"),
        gate: Gate::Feature(FeatureKey::MultiLanguage),
    },
    Block {
        name: "testing",
        source: include_str!("../templates/testing.tera"),
        gate: Gate::Always,
    },
    Block {
        name: "deliverables",
        source: include_str!("../templates/deliverables.tera"),
        gate: Gate::Always,
    },
    Block {
        name: "additional_requirements",
        source: include_str!("../templates/additional_requirements.tera"),
        gate: Gate::AdditionalRequirements,
    },
    Block {
        name: "timeline",
        source: include_str!("../templates/timeline.tera"),
        gate: Gate::Always,
    },
];

/// ゲートが開いているかを判定する。
fn gate_open(gate: Gate, config: &ProjectConfig) -> bool {
    match gate {
        Gate::Always => true,
        Gate::Feature(key) => config.features.get(key),
        Gate::AdditionalRequirements => !config.additional_requirements.is_empty(),
    }
}

/// 設定から Tera コンテキストを構築する。
///
/// 技術スタックのリストはここで ", " 連結する。空リストは空文字列になる。
/// 列挙型のラベルは一切加工せずそのまま渡す。
fn build_context(config: &ProjectConfig) -> tera::Context {
    let mut ctx = tera::Context::new();
    ctx.insert("project_name", &config.project_name);
    ctx.insert("client_name", &config.client_name);
    ctx.insert("description", &config.description);
    ctx.insert("backend", &config.tech_stack.backend.join(", "));
    ctx.insert("frontend", &config.tech_stack.frontend.join(", "));
    ctx.insert("database", &config.tech_stack.database.join(", "));
    ctx.insert("deployment", &config.tech_stack.deployment.join(", "));
    ctx.insert("ai_model", config.ai_model.label());
    ctx.insert("vector_database", config.vector_database.label());
    ctx.insert("whatsapp_provider", config.whatsapp_provider.label());
    ctx.insert("additional_requirements", &config.additional_requirements);
    ctx
}

/// プロンプトレンダラ。
///
/// 組み込みのブロックテンプレートを一度だけ登録し、以後は設定を受け取って
/// ドキュメント文字列を返す。入力は変更しない。
pub struct PromptRenderer {
    tera: Tera,
}

impl PromptRenderer {
    /// レンダラを初期化する。
    ///
    /// # Errors
    ///
    /// 組み込みテンプレートの登録に失敗した場合にエラーを返す
    /// （テンプレートはコンパイル時に埋め込まれるため、実行時には発生しない）。
    pub fn new() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        for block in BLOCKS {
            tera.add_raw_template(block.name, block.source)?;
        }
        Ok(Self { tera })
    }

    /// 設定からドキュメントをレンダリングする。
    ///
    /// 決定的であり、同じ設定からは常にバイト単位で同一の出力を返す。
    ///
    /// # Errors
    ///
    /// Tera のレンダリングに失敗した場合にエラーを返す。到達可能な
    /// どの設定値でも失敗しないことをテストで保証している。
    pub fn render(&self, config: &ProjectConfig) -> Result<String, RenderError> {
        let ctx = build_context(config);
        let mut sections = Vec::new();
        for block in BLOCKS {
            if !gate_open(block.gate, config) {
                continue;
            }
            let rendered = self.tera.render(block.name, &ctx)?;
            sections.push(rendered.trim_end().to_string());
        }
        let mut document = sections.join("\n\n");
        document.push('\n');
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renderer_initializes() {
        assert!(PromptRenderer::new().is_ok());
    }

    #[test]
    fn test_block_table_has_all_gates() {
        let gated: Vec<FeatureKey> = BLOCKS
            .iter()
            .filter_map(|b| match b.gate {
                Gate::Feature(key) => Some(key),
                _ => None,
            })
            .collect();
        assert_eq!(
            gated,
            vec![
                FeatureKey::AdminDashboard,
                FeatureKey::FileUpload,
                FeatureKey::Analytics,
                FeatureKey::MultiLanguage,
            ]
        );
        assert_eq!(
            BLOCKS
                .iter()
                .filter(|b| b.gate == Gate::AdditionalRequirements)
                .count(),
            1
        );
    }

    #[test]
    fn test_gate_open_follows_features() {
        let config = ProjectConfig::default();
        assert!(gate_open(Gate::Always, &config));
        assert!(gate_open(Gate::Feature(FeatureKey::AdminDashboard), &config));
        assert!(!gate_open(Gate::Feature(FeatureKey::Analytics), &config));
        assert!(!gate_open(Gate::AdditionalRequirements, &config));

        let config = config.with_additional_requirements("LGPD");
        assert!(gate_open(Gate::AdditionalRequirements, &config));
    }

    #[test]
    fn test_context_joins_lists_in_order() {
        let config = ProjectConfig::default();
        let ctx = build_context(&config);
        assert_eq!(
            ctx.get("backend").and_then(|v| v.as_str()),
            Some("Node.js, TypeScript, Express")
        );
        assert_eq!(
            ctx.get("database").and_then(|v| v.as_str()),
            Some("PostgreSQL, Redis")
        );
    }

    #[test]
    fn test_render_does_not_mutate_config() {
        let config = ProjectConfig::default().with_project_name("bot-suporte");
        let snapshot = config.clone();
        let renderer = PromptRenderer::new().unwrap();
        renderer.render(&config).unwrap();
        assert_eq!(config, snapshot);
    }
}
