//! LLM 服务 - 业务能力层
//!
//! 只负责"发一条提示词、拿一段文本"能力，不关心流程
//!
//! ## 技术栈
//! - 使用 `async-openai` crate 进行 API 调用
//! - 支持自定义 API 端点和模型
//! - 兼容 OpenAI API 的服务（如 Gemini, Doubao 等）

use anyhow::Result;
use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{AppError, LlmError};

/// LLM 服务
///
/// 职责：
/// - 持有 OpenAI 兼容客户端，暴露生成能力
/// - 不认识题目记录，不关心响应怎么解析
pub struct LlmService {
    client: Client<OpenAIConfig>,
    model_name: String,
}

impl LlmService {
    /// 从配置创建 LLM 服务
    ///
    /// API 密钥为空时返回 `None`，即显式的"不可用"状态，
    /// 由调用方决定如何降级，不在进程全局做隐式判空
    pub fn from_config(config: &Config) -> Option<Self> {
        if config.llm_api_key.trim().is_empty() {
            warn!("⚠️ 未配置 LLM API 密钥，生成能力不可用");
            return None;
        }

        let openai_config = OpenAIConfig::new()
            .with_api_key(&config.llm_api_key)
            .with_api_base(&config.llm_api_base_url);

        let client = Client::with_config(openai_config);

        Some(Self {
            client,
            model_name: config.llm_model_name.clone(),
        })
    }

    /// 当前使用的模型名称
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// 发送一次生成请求
    ///
    /// # 参数
    /// - `user_message`: 用户提示词
    /// - `system_message`: 系统消息（可选）
    ///
    /// # 返回
    /// 返回去掉首尾空白的响应文本
    pub async fn send_to_llm(
        &self,
        user_message: &str,
        system_message: Option<&str>,
    ) -> Result<String> {
        debug!("调用 LLM API，模型: {}", self.model_name);
        debug!("用户消息长度: {} 字符", user_message.len());

        // 构建消息列表
        let mut messages = Vec::new();

        // 添加系统消息（如果提供）
        if let Some(sys_msg) = system_message {
            let system_msg = ChatCompletionRequestSystemMessageArgs::default()
                .content(sys_msg)
                .build()?;
            messages.push(ChatCompletionRequestMessage::System(system_msg));
        }

        // 添加用户消息
        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(user_message)
            .build()?;
        messages.push(ChatCompletionRequestMessage::User(user_msg));

        // 构建请求
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .messages(messages)
            .temperature(0.3)
            .max_tokens(2048u32)
            .build()?;

        // 调用 API
        let response = self.client.chat().create(request).await.map_err(|e| {
            warn!("LLM API 调用失败: {}", e);
            AppError::llm_api_failed(&self.model_name, e)
        })?;

        debug!("LLM API 调用成功");

        // 提取响应内容
        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| {
                AppError::Llm(LlmError::EmptyContent {
                    model: self.model_name.clone(),
                })
            })?;

        Ok(content.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_without_key_is_unavailable() {
        let config = Config::default();
        assert!(LlmService::from_config(&config).is_none());

        let mut config = Config::default();
        config.llm_api_key = "   ".to_string();
        assert!(LlmService::from_config(&config).is_none());
    }

    #[test]
    fn test_from_config_with_key() {
        let mut config = Config::default();
        config.llm_api_key = "test-key".to_string();
        config.llm_model_name = "gemini-2.5-flash".to_string();

        let service = LlmService::from_config(&config).expect("应当可用");
        assert_eq!(service.model_name(), "gemini-2.5-flash");
    }

    /// 测试真实 LLM 调用
    ///
    /// 运行方式：
    /// ```bash
    /// cargo test test_send_to_llm_live -- --ignored --nocapture
    /// ```
    #[tokio::test]
    #[ignore]
    async fn test_send_to_llm_live() {
        let _ = tracing_subscriber::fmt::try_init();

        let config = Config::from_env();
        let service = LlmService::from_config(&config).expect("需要配置 LLM_API_KEY");

        let result = service
            .send_to_llm("Reply with the single word: pong", None)
            .await;

        match result {
            Ok(response) => {
                println!("\n========== LLM 响应 ==========");
                println!("{}", response);
                println!("==============================\n");
                assert!(!response.is_empty());
            }
            Err(e) => {
                panic!("LLM 调用失败: {}", e);
            }
        }
    }
}
