//! 开放题响应解析 - 业务能力层
//!
//! 只负责"把 LLM 返回的编号列表解析成开放题记录"能力，不关心流程
//!
//! ## 解析策略
//!
//! 严格编号提取：只认"数字 + 句点 + 可选空白"开头的条目，
//! 捕获到行尾作为题干；其他项目符号（如 `- xxx`）不会被提取

use crate::models::OpenQuestionRecord;
use crate::services::bloom;
use regex::Regex;
use std::sync::OnceLock;

static NUMBERED_ITEM: OnceLock<Regex> = OnceLock::new();

/// 编号条目模式：数字、句点、可选空白，捕获到行尾
fn numbered_item() -> &'static Regex {
    NUMBERED_ITEM.get_or_init(|| Regex::new(r"\d+\.\s*(.+)").expect("编号条目模式应当合法"))
}

/// 把 LLM 返回的编号列表文本解析为开放题记录列表
///
/// # 参数
/// - `raw_text`: LLM 的原始响应文本
/// - `limit`: 最多返回的记录数
///
/// 修剪后为空的条目直接丢弃，不占用数量名额；
/// 空输入得到空输出，没有错误分支
pub fn parse_open_questions(raw_text: &str, limit: usize) -> Vec<OpenQuestionRecord> {
    numbered_item()
        .captures_iter(raw_text)
        .filter_map(|caps| caps.get(1))
        .map(|capture| capture.as_str().trim())
        .filter(|question| !question.is_empty())
        .take(limit)
        .map(|question| OpenQuestionRecord {
            question: question.to_string(),
            bloom: bloom::classify(question),
        })
        .collect()
}
