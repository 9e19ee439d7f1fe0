//! 测验生成流程 - 流程层
//!
//! 核心职责：定义"一种题型"的完整生成流程
//!
//! 流程顺序：
//! 1. 截断笔记文本 → 组装提示词
//! 2. 调用 LLM 生成
//! 3. 按题型解析响应 → 附加 Bloom 标签
//!
//! 上游失败（无凭证 / 网络错误 / 空响应）一律降级为空结果，
//! 不向调用方抛出异常

use tracing::{error, info, warn};

use crate::config::Config;
use crate::models::{McqRecord, OpenQuestionRecord};
use crate::services::{mcq_parser, open_parser, LlmService};
use crate::utils::logging::truncate_text;
use crate::workflow::generation_ctx::GenerationCtx;

/// 提示词中笔记文本的字符数上限
const PROMPT_CHAR_BUDGET: usize = 4000;

/// 出题人系统指令
const STRICT_SYSTEM_INSTRUCTION: &str =
    "You are a highly analytical academic question generator. \
     Your only task is to create exam-based questions from the given text. \
     Avoid conversational language, greetings, or explanations. \
     Return only a clean, numbered list of short, exam-style questions.";

/// 测验生成流程
///
/// 职责：
/// - 编排完整的生成流程（提示词 → 生成 → 解析 → 分类）
/// - 决定何时降级为空结果
/// - 不持有任何文件资源
/// - 只依赖业务能力（services）
pub struct QuizFlow {
    llm_service: Option<LlmService>,
    verbose_logging: bool,
}

impl QuizFlow {
    /// 创建新的生成流程
    ///
    /// LLM 凭证缺失时流程仍可创建，此后所有生成请求都得到空结果
    pub fn new(config: &Config) -> Self {
        Self {
            llm_service: LlmService::from_config(config),
            verbose_logging: config.verbose_logging,
        }
    }

    /// 生成能力是否可用
    pub fn is_available(&self) -> bool {
        self.llm_service.is_some()
    }

    /// 生成选择题
    ///
    /// # 参数
    /// - `ctx`: 生成上下文（`ctx.requested` 即解析上限）
    /// - `source_text`: 已完成文本提取的笔记内容
    ///
    /// # 返回
    /// 上游失败或响应为空时返回空列表，不返回错误
    pub async fn generate_mcqs(&self, ctx: &GenerationCtx, source_text: &str) -> Vec<McqRecord> {
        let prompt = build_mcq_prompt(source_text, ctx.requested);

        let raw_text = match self
            .request_completion(ctx, &prompt, Some(STRICT_SYSTEM_INSTRUCTION))
            .await
        {
            Some(text) => text,
            None => return Vec::new(),
        };

        let records = mcq_parser::parse_mcqs(&raw_text, ctx.requested);
        info!("{} ✓ 解析出 {} 道选择题", ctx, records.len());

        if self.verbose_logging {
            self.log_question_preview(ctx, records.iter().map(|r| r.question.as_str()));
        }

        records
    }

    /// 生成开放题
    ///
    /// # 参数
    /// - `ctx`: 生成上下文（`ctx.requested` 即解析上限）
    /// - `source_text`: 已完成文本提取的笔记内容
    ///
    /// # 返回
    /// 上游失败或响应为空时返回空列表，不返回错误
    pub async fn generate_open_questions(
        &self,
        ctx: &GenerationCtx,
        source_text: &str,
    ) -> Vec<OpenQuestionRecord> {
        let prompt = build_open_prompt(source_text, ctx.requested);

        let raw_text = match self.request_completion(ctx, &prompt, None).await {
            Some(text) => text,
            None => return Vec::new(),
        };

        let records = open_parser::parse_open_questions(&raw_text, ctx.requested);
        info!("{} ✓ 解析出 {} 道开放题", ctx, records.len());

        if self.verbose_logging {
            self.log_question_preview(ctx, records.iter().map(|r| r.question.as_str()));
        }

        records
    }

    /// 调用 LLM，把所有失败归一为 `None`
    ///
    /// 失败原因（无凭证 / API 错误 / 空文本）只体现在日志里，
    /// 调用方统一把 `None` 当作"没有记录"
    async fn request_completion(
        &self,
        ctx: &GenerationCtx,
        prompt: &str,
        system_message: Option<&str>,
    ) -> Option<String> {
        let llm_service = match &self.llm_service {
            Some(service) => service,
            None => {
                warn!("{} ⚠️ LLM 不可用，返回空结果", ctx);
                return None;
            }
        };

        info!("{} 🤖 正在调用 LLM 生成...", ctx);

        match llm_service.send_to_llm(prompt, system_message).await {
            Ok(text) if text.is_empty() => {
                warn!("{} ⚠️ LLM 返回空文本", ctx);
                None
            }
            Ok(text) => Some(text),
            Err(e) => {
                error!("{} ❌ LLM 调用失败: {}", ctx, e);
                None
            }
        }
    }

    // ========== 日志辅助方法 ==========

    /// 显示解析出的题目预览
    fn log_question_preview<'a>(
        &self,
        ctx: &GenerationCtx,
        questions: impl Iterator<Item = &'a str>,
    ) {
        for (i, question) in questions.take(3).enumerate() {
            info!("{}   {}. {}", ctx, i + 1, truncate_text(question, 60));
        }
    }
}

// ========== 提示词组装 ==========

/// 截断笔记文本到提示词预算（按字符计）
fn truncate_source(source_text: &str) -> String {
    source_text.chars().take(PROMPT_CHAR_BUDGET).collect()
}

/// 组装选择题提示词
fn build_mcq_prompt(source_text: &str, count: usize) -> String {
    format!(
        r#"You are an expert exam question setter.

Generate {} short, exam-style multiple-choice questions (MCQs) based strictly on the following notes.

Each MCQ must:
- Be concise and relevant (max 1 sentence).
- Have 4 options (A, B, C, D).
- Have exactly one correct answer.
- Be suitable for college-level objective exams.

Provide output in this exact format:
1. Question?
A) Option 1
B) Option 2
C) Option 3
D) Option 4
Answer: C) Correct Option

Notes:
{}"#,
        count,
        truncate_source(source_text)
    )
}

/// 组装开放题提示词
fn build_open_prompt(source_text: &str, count: usize) -> String {
    format!(
        r#"You are an academic examiner.
Based on the following lecture notes, generate exactly {} high-level review questions (Analysis, Synthesis, or Evaluation).
Rules:
- Output ONLY numbered questions
- One question per line
- No explanations or extra text
Notes:
---
{}"#,
        count,
        truncate_source(source_text)
    )
}
