//! 测验题目数据模型
//!
//! 所有记录都是一次生成请求构建出来的不可变值对象

use serde::{Deserialize, Serialize};
use std::fmt;

/// Bloom 认知层级标签
///
/// 七个固定取值，记录中永远不会缺失；
/// 无法识别时落到 `Unclassified`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BloomLevel {
    Knowledge,
    Comprehension,
    Application,
    Analysis,
    Synthesis,
    Evaluation,
    Unclassified,
}

impl BloomLevel {
    /// 获取标签名称
    pub fn name(self) -> &'static str {
        match self {
            BloomLevel::Knowledge => "Knowledge",
            BloomLevel::Comprehension => "Comprehension",
            BloomLevel::Application => "Application",
            BloomLevel::Analysis => "Analysis",
            BloomLevel::Synthesis => "Synthesis",
            BloomLevel::Evaluation => "Evaluation",
            BloomLevel::Unclassified => "Unclassified",
        }
    }
}

impl fmt::Display for BloomLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 题目类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// 选择题（四个选项 + 正确答案）
    Mcq,
    /// 开放题（只有题干）
    Open,
}

impl QuestionKind {
    /// 获取类型名称（用于日志显示）
    pub fn name(self) -> &'static str {
        match self {
            QuestionKind::Mcq => "选择题",
            QuestionKind::Open => "开放题",
        }
    }
}

/// 选择题记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McqRecord {
    /// 题干（保留响应里的编号前缀）
    pub question: String,
    /// 选项列表（已去掉 `A)`~`D)` 标签，按位置对应 A-D）
    #[serde(default)]
    pub options: Vec<String>,
    /// 正确答案描述（响应里没有时为空）
    #[serde(default)]
    pub answer: String,
    /// Bloom 认知层级
    pub bloom: BloomLevel,
}

/// 开放题记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenQuestionRecord {
    /// 题干（已去掉编号前缀）
    pub question: String,
    /// Bloom 认知层级
    pub bloom: BloomLevel,
}

/// 一份笔记的完整生成结果
///
/// 两个输出序列原样交给导出边界，排版由导出方负责
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSet {
    /// 笔记来源名称（文件名主干）
    pub source_name: String,
    pub mcqs: Vec<McqRecord>,
    pub open_questions: Vec<OpenQuestionRecord>,
}

impl QuizSet {
    /// 两种题型是否都没有记录
    pub fn is_empty(&self) -> bool {
        self.mcqs.is_empty() && self.open_questions.is_empty()
    }

    /// 记录总数
    pub fn len(&self) -> usize {
        self.mcqs.len() + self.open_questions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bloom_level_serializes_as_name() {
        let json = serde_json::to_string(&BloomLevel::Comprehension).unwrap();
        assert_eq!(json, "\"Comprehension\"");

        let level: BloomLevel = serde_json::from_str("\"Unclassified\"").unwrap();
        assert_eq!(level, BloomLevel::Unclassified);
    }

    #[test]
    fn test_quiz_set_is_empty() {
        let quiz = QuizSet {
            source_name: "示例".to_string(),
            mcqs: Vec::new(),
            open_questions: Vec::new(),
        };
        assert!(quiz.is_empty());
        assert_eq!(quiz.len(), 0);
    }
}
