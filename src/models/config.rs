use serde::Deserialize;

/// Which implementation backs the category listing pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectSourceKind {
    /// The relational catalog (default).
    Catalog,
    /// Live NASA image search keyed by category slug.
    NasaSearch,
}

impl Default for ObjectSourceKind {
    fn default() -> Self {
        Self::Catalog
    }
}

/// Settings for the NASA image-search client.
#[derive(Debug, Clone, Deserialize)]
pub struct NasaConfig {
    #[serde(default = "default_nasa_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for NasaConfig {
    fn default() -> Self {
        Self {
            base_url: default_nasa_base_url(),
            timeout_secs: default_timeout_secs(),
            page_size: default_page_size(),
        }
    }
}

/// Settings for the chat relay gateway.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    #[serde(default = "default_gateway_url")]
    pub gateway_url: String,
    /// Bearer credential for the gateway. Absent keys surface as a
    /// configuration failure at send time, never a panic.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_chat_model")]
    pub model: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            gateway_url: default_gateway_url(),
            api_key: None,
            model: default_chat_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default)]
    pub object_source: ObjectSourceKind,
    #[serde(default)]
    pub nasa: NasaConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

fn default_database_url() -> String {
    "brahmand.db".to_string()
}

fn default_bind_address() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_nasa_base_url() -> String {
    "https://images-api.nasa.gov".to_string()
}

fn default_gateway_url() -> String {
    "https://ai.gateway.lovable.dev/v1/chat/completions".to_string()
}

fn default_chat_model() -> String {
    "google/gemini-2.5-flash".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_page_size() -> u32 {
    24
}

impl AppConfig {
    /// Loads configuration from `config.yaml` (optional) with environment
    /// overrides prefixed `BRAHMAND_` (e.g. `BRAHMAND_CHAT__API_KEY`).
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("BRAHMAND")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
