use crate::error::{AppError, AppResult};
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

/// 配置文件的默认位置
const CONFIG_FILE: &str = "note2quiz.toml";

/// 程序配置
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 笔记文本存放目录
    pub notes_folder: String,
    /// 导出文件存放目录
    pub output_dir: String,
    /// 每份笔记生成的选择题数量
    pub num_mcqs: usize,
    /// 每份笔记生成的开放题数量
    pub num_open_questions: usize,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
    // --- LLM 配置 ---
    pub llm_api_key: String,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notes_folder: "notes".to_string(),
            output_dir: "output".to_string(),
            num_mcqs: 10,
            num_open_questions: 5,
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
            llm_api_key: String::new(),
            llm_api_base_url: "https://generativelanguage.googleapis.com/v1beta/openai"
                .to_string(),
            llm_model_name: "gemini-2.5-flash".to_string(),
        }
    }
}

impl Config {
    /// 从环境变量加载配置，缺失的项使用默认值
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            notes_folder: std::env::var("NOTES_FOLDER").unwrap_or(default.notes_folder),
            output_dir: std::env::var("OUTPUT_DIR").unwrap_or(default.output_dir),
            num_mcqs: std::env::var("NUM_MCQS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.num_mcqs),
            num_open_questions: std::env::var("NUM_OPEN_QUESTIONS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.num_open_questions),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
            llm_api_key: std::env::var("LLM_API_KEY")
                .or_else(|_| std::env::var("GEMINI_API_KEY"))
                .unwrap_or(default.llm_api_key),
            llm_api_base_url: std::env::var("LLM_API_BASE_URL").unwrap_or(default.llm_api_base_url),
            llm_model_name: std::env::var("LLM_MODEL_NAME").unwrap_or(default.llm_model_name),
        }
    }

    /// 从 TOML 配置文件加载
    ///
    /// 文件中缺失的项使用默认值
    pub async fn from_toml_file(path: &Path) -> AppResult<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AppError::config_read_failed(path.display().to_string(), e))?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// 加载配置：优先读取 note2quiz.toml，不存在或读取失败时退回环境变量
    pub async fn load() -> Self {
        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            match Self::from_toml_file(path).await {
                Ok(config) => {
                    info!("✓ 已加载配置文件: {}", CONFIG_FILE);
                    return config;
                }
                Err(e) => {
                    warn!("⚠️ 配置文件加载失败，退回环境变量: {}", e);
                }
            }
        }
        Self::from_env()
    }
}
