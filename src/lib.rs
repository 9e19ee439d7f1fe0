//! # Note2Quiz
//!
//! 一个把讲义笔记变成结构化测验题的 Rust 应用程序：
//! 组装提示词调用生成式模型，把返回的自由文本确定性地解析成
//! 带 Bloom 认知层级标签的题目记录，再交给导出边界。
//!
//! ## 架构设计
//!
//! 本系统采用严格的三层架构：
//!
//! ### ① 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单次调用
//! - `bloom` - Bloom 认知层级分类能力（纯函数）
//! - `mcq_parser` / `open_parser` - 响应文本解析能力（纯函数）
//! - `LlmService` - LLM 生成能力（带显式的"不可用"状态）
//! - `QuizWriter` - 导出能力（JSON + 纯文本）
//!
//! ### ② 流程层（Workflow）
//! - `workflow/` - 定义"一种题型"的完整生成流程
//! - `GenerationCtx` - 上下文封装（笔记来源 + 题型 + 数量）
//! - `QuizFlow` - 流程编排（提示词 → 生成 → 解析 → 分类）
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/` - 批量笔记处理器，顺序处理每份笔记并导出
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{BloomLevel, McqRecord, OpenQuestionRecord, QuestionKind, QuizSet};
pub use orchestrator::App;
pub use services::{classify, parse_mcqs, parse_open_questions, LlmService, QuizWriter};
pub use utils::logging as logger;
pub use workflow::{GenerationCtx, QuizFlow};
