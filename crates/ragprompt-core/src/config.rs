use serde::{Deserialize, Serialize};

/// プロジェクト名が空のときに使うファイル名の語幹。
const DEFAULT_FILE_STEM: &str = "chatbot-rag";

/// AI モデルの選択肢。
///
/// ラベルはドキュメントにそのまま埋め込まれるため、正規化や大文字小文字の
/// 変換は行わない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiModel {
    #[serde(rename = "gpt-4-turbo")]
    Gpt4Turbo,
    #[serde(rename = "gpt-4")]
    Gpt4,
    #[serde(rename = "gpt-3.5-turbo")]
    Gpt35Turbo,
    #[serde(rename = "claude-3")]
    Claude3,
}

impl AiModel {
    pub const ALL: [Self; 4] = [Self::Gpt4Turbo, Self::Gpt4, Self::Gpt35Turbo, Self::Claude3];

    /// ドキュメントへ埋め込むラベル。
    pub fn label(self) -> &'static str {
        match self {
            Self::Gpt4Turbo => "gpt-4-turbo",
            Self::Gpt4 => "gpt-4",
            Self::Gpt35Turbo => "gpt-3.5-turbo",
            Self::Claude3 => "claude-3",
        }
    }
}

impl Default for AiModel {
    fn default() -> Self {
        Self::Gpt4Turbo
    }
}

impl std::fmt::Display for AiModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for AiModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gpt-4-turbo" | "gpt4-turbo" => Ok(Self::Gpt4Turbo),
            "gpt-4" | "gpt4" => Ok(Self::Gpt4),
            "gpt-3.5-turbo" | "gpt-3.5" | "gpt3.5-turbo" => Ok(Self::Gpt35Turbo),
            "claude-3" | "claude3" => Ok(Self::Claude3),
            _ => Err(format!("不明な AI モデル: {s}")),
        }
    }
}

/// ベクトルデータベースの選択肢。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VectorDatabase {
    Pinecone,
    Weaviate,
    Milvus,
    Chroma,
    Qdrant,
}

impl VectorDatabase {
    pub const ALL: [Self; 5] = [
        Self::Pinecone,
        Self::Weaviate,
        Self::Milvus,
        Self::Chroma,
        Self::Qdrant,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Pinecone => "Pinecone",
            Self::Weaviate => "Weaviate",
            Self::Milvus => "Milvus",
            Self::Chroma => "Chroma",
            Self::Qdrant => "Qdrant",
        }
    }
}

impl Default for VectorDatabase {
    fn default() -> Self {
        Self::Pinecone
    }
}

impl std::fmt::Display for VectorDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for VectorDatabase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pinecone" => Ok(Self::Pinecone),
            "weaviate" => Ok(Self::Weaviate),
            "milvus" => Ok(Self::Milvus),
            "chroma" => Ok(Self::Chroma),
            "qdrant" => Ok(Self::Qdrant),
            _ => Err(format!("不明なベクトルデータベース: {s}")),
        }
    }
}

/// WhatsApp プロバイダの選択肢。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WhatsappProvider {
    #[serde(rename = "WhatsApp Cloud API")]
    CloudApi,
    #[serde(rename = "Twilio")]
    Twilio,
    #[serde(rename = "360dialog")]
    Dialog360,
    #[serde(rename = "ChatAPI")]
    ChatApi,
}

impl WhatsappProvider {
    pub const ALL: [Self; 4] = [Self::CloudApi, Self::Twilio, Self::Dialog360, Self::ChatApi];

    pub fn label(self) -> &'static str {
        match self {
            Self::CloudApi => "WhatsApp Cloud API",
            Self::Twilio => "Twilio",
            Self::Dialog360 => "360dialog",
            Self::ChatApi => "ChatAPI",
        }
    }
}

impl Default for WhatsappProvider {
    fn default() -> Self {
        Self::CloudApi
    }
}

impl std::fmt::Display for WhatsappProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for WhatsappProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "whatsapp cloud api" | "cloud-api" | "cloud_api" | "cloudapi" => Ok(Self::CloudApi),
            "twilio" => Ok(Self::Twilio),
            "360dialog" => Ok(Self::Dialog360),
            "chatapi" => Ok(Self::ChatApi),
            _ => Err(format!("不明な WhatsApp プロバイダ: {s}")),
        }
    }
}

/// 機能トグルのキー。コンパイル時に確定する閉じた集合。
///
/// `AdminDashboard` / `FileUpload` / `Analytics` / `MultiLanguage` の 4 つが
/// ドキュメントのブロック出力を制御する。残り 2 つは設定としてのみ保持する。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKey {
    RagArchitecture,
    WhatsappIntegration,
    AdminDashboard,
    FileUpload,
    Analytics,
    MultiLanguage,
}

impl FeatureKey {
    pub const ALL: [Self; 6] = [
        Self::RagArchitecture,
        Self::WhatsappIntegration,
        Self::AdminDashboard,
        Self::FileUpload,
        Self::Analytics,
        Self::MultiLanguage,
    ];

    /// CLI で使う識別子。
    pub fn key(self) -> &'static str {
        match self {
            Self::RagArchitecture => "rag-architecture",
            Self::WhatsappIntegration => "whatsapp-integration",
            Self::AdminDashboard => "admin-dashboard",
            Self::FileUpload => "file-upload",
            Self::Analytics => "analytics",
            Self::MultiLanguage => "multi-language",
        }
    }

    /// 対話プロンプトに表示するラベル。
    pub fn label(self) -> &'static str {
        match self {
            Self::RagArchitecture => "Arquitetura RAG",
            Self::WhatsappIntegration => "Integração WhatsApp",
            Self::AdminDashboard => "Dashboard Administrativo",
            Self::FileUpload => "Upload de Documentos",
            Self::Analytics => "Analytics",
            Self::MultiLanguage => "Multi-idioma",
        }
    }
}

impl std::fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl std::str::FromStr for FeatureKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rag-architecture" | "rag_architecture" => Ok(Self::RagArchitecture),
            "whatsapp-integration" | "whatsapp_integration" => Ok(Self::WhatsappIntegration),
            "admin-dashboard" | "admin_dashboard" => Ok(Self::AdminDashboard),
            "file-upload" | "file_upload" => Ok(Self::FileUpload),
            "analytics" => Ok(Self::Analytics),
            "multi-language" | "multi_language" => Ok(Self::MultiLanguage),
            _ => Err(format!("不明な機能キー: {s}")),
        }
    }
}

/// 機能トグルの集合。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Features {
    pub rag_architecture: bool,
    pub whatsapp_integration: bool,
    pub admin_dashboard: bool,
    pub file_upload: bool,
    pub analytics: bool,
    pub multi_language: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            rag_architecture: true,
            whatsapp_integration: true,
            admin_dashboard: true,
            file_upload: true,
            analytics: false,
            multi_language: false,
        }
    }
}

impl Features {
    pub fn get(&self, key: FeatureKey) -> bool {
        match key {
            FeatureKey::RagArchitecture => self.rag_architecture,
            FeatureKey::WhatsappIntegration => self.whatsapp_integration,
            FeatureKey::AdminDashboard => self.admin_dashboard,
            FeatureKey::FileUpload => self.file_upload,
            FeatureKey::Analytics => self.analytics,
            FeatureKey::MultiLanguage => self.multi_language,
        }
    }

    pub fn set(&mut self, key: FeatureKey, value: bool) {
        match key {
            FeatureKey::RagArchitecture => self.rag_architecture = value,
            FeatureKey::WhatsappIntegration => self.whatsapp_integration = value,
            FeatureKey::AdminDashboard => self.admin_dashboard = value,
            FeatureKey::FileUpload => self.file_upload = value,
            FeatureKey::Analytics => self.analytics = value,
            FeatureKey::MultiLanguage => self.multi_language = value,
        }
    }
}

/// 技術スタックの選択。各リストは宣言順のまま ", " 連結で出力される。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TechStack {
    pub backend: Vec<String>,
    pub frontend: Vec<String>,
    pub database: Vec<String>,
    pub deployment: Vec<String>,
}

impl Default for TechStack {
    fn default() -> Self {
        Self {
            backend: vec![
                "Node.js".to_string(),
                "TypeScript".to_string(),
                "Express".to_string(),
            ],
            frontend: vec![
                "React".to_string(),
                "TypeScript".to_string(),
                "Vite".to_string(),
            ],
            database: vec!["PostgreSQL".to_string(), "Redis".to_string()],
            deployment: vec!["Docker".to_string(), "AWS".to_string()],
        }
    }
}

/// プロンプト生成の入力となるプロジェクト設定。
///
/// 全フィールドに既定値があるため、どの状態でもレンダリング可能。
/// 更新は `with_*` によるフィールド単位の置き換えで行い、レンダラは
/// 読み取り専用のスナップショットとして参照する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// プロジェクト名
    pub project_name: String,
    /// クライアント名
    pub client_name: String,
    /// プロジェクト概要
    pub description: String,
    /// 技術スタック
    pub tech_stack: TechStack,
    /// 機能トグル
    pub features: Features,
    /// AI モデル
    pub ai_model: AiModel,
    /// ベクトルデータベース
    pub vector_database: VectorDatabase,
    /// WhatsApp プロバイダ
    pub whatsapp_provider: WhatsappProvider,
    /// 追加要件（空文字列なら該当セクションを出力しない）
    pub additional_requirements: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            project_name: String::new(),
            client_name: String::new(),
            description: String::new(),
            tech_stack: TechStack::default(),
            features: Features::default(),
            ai_model: AiModel::default(),
            vector_database: VectorDatabase::default(),
            whatsapp_provider: WhatsappProvider::default(),
            additional_requirements: String::new(),
        }
    }
}

impl ProjectConfig {
    #[must_use]
    pub fn with_project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = name.into();
        self
    }

    #[must_use]
    pub fn with_client_name(mut self, name: impl Into<String>) -> Self {
        self.client_name = name.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_tech_stack(mut self, tech_stack: TechStack) -> Self {
        self.tech_stack = tech_stack;
        self
    }

    #[must_use]
    pub fn with_ai_model(mut self, model: AiModel) -> Self {
        self.ai_model = model;
        self
    }

    #[must_use]
    pub fn with_vector_database(mut self, db: VectorDatabase) -> Self {
        self.vector_database = db;
        self
    }

    #[must_use]
    pub fn with_whatsapp_provider(mut self, provider: WhatsappProvider) -> Self {
        self.whatsapp_provider = provider;
        self
    }

    #[must_use]
    pub fn with_additional_requirements(mut self, requirements: impl Into<String>) -> Self {
        self.additional_requirements = requirements.into();
        self
    }

    #[must_use]
    pub fn with_feature(mut self, key: FeatureKey, value: bool) -> Self {
        self.features.set(key, value);
        self
    }

    /// 出力する Markdown ファイル名を導出する。
    ///
    /// プロジェクト名が空の場合は既定の語幹 `chatbot-rag` を使う。
    pub fn output_file_name(&self) -> String {
        let stem = if self.project_name.is_empty() {
            DEFAULT_FILE_STEM
        } else {
            self.project_name.as_str()
        };
        format!("{stem}-prompt-tecnico.md")
    }
}
