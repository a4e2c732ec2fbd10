//! 配置服务

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use post_explorer_core::{RacePolicy, Route};
use post_explorer_provider::{ClientOptions, DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT_SECS};

use crate::i18n::Language;
use crate::view::theme::Theme;

/// 应用配置
///
/// 所有字段都可省略，缺省值见 `Default`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// API 根地址
    pub base_url: String,
    /// 连接超时（秒）
    pub connect_timeout_secs: u64,
    /// 整个请求的超时（秒），缺省不限制
    pub request_timeout_secs: Option<u64>,
    pub theme: Theme,
    pub language: Language,
    /// 启动时打开的路径，如 `/users`、`/posts/3`
    pub start_route: String,
    /// 只接受最后发出的请求的响应
    pub discard_stale_responses: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            request_timeout_secs: None,
            theme: Theme::Dark,
            language: Language::EnUs,
            start_route: "/".to_string(),
            discard_stale_responses: false,
        }
    }
}

impl AppConfig {
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            base_url: self.base_url.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
        }
    }

    pub fn race_policy(&self) -> RacePolicy {
        RacePolicy::from_discard_stale(self.discard_stale_responses)
    }

    pub fn start_route(&self) -> Route {
        Route::parse(&self.start_route)
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 加载配置，失败时记录警告并使用默认值
    fn load_or_default(&self) -> AppConfig {
        self.load().unwrap_or_else(|e| {
            log::warn!("Config unreadable, using defaults: {e:#}");
            AppConfig::default()
        })
    }
}

/// 获取配置文件路径
fn default_config_file() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("post-explorer")
        .join("config.json")
}

/// 本地 JSON 配置文件（只读）
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new() -> Self {
        Self::with_path(default_config_file())
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::info!("No config at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;

        log::info!("Loaded config from {}", self.path.display());
        Ok(config)
    }
}
