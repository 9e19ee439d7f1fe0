//! 生成请求上下文
//!
//! 封装"我正在为哪份笔记生成哪种题、要几道"这一信息

use crate::models::QuestionKind;
use std::fmt::Display;

/// 生成请求上下文
///
/// 包含一次生成调用所需的全部上下文信息
#[derive(Debug, Clone)]
pub struct GenerationCtx {
    /// 笔记来源名称（仅用于日志显示）
    pub source_name: String,

    /// 题目类型
    pub kind: QuestionKind,

    /// 请求的题目数量（同时也是解析上限）
    pub requested: usize,
}

impl GenerationCtx {
    /// 创建新的生成上下文
    pub fn new(source_name: impl Into<String>, kind: QuestionKind, requested: usize) -> Self {
        Self {
            source_name: source_name.into(),
            kind,
            requested,
        }
    }
}

impl Display for GenerationCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[笔记#{} {}#{}道]",
            self.source_name,
            self.kind.name(),
            self.requested
        )
    }
}
