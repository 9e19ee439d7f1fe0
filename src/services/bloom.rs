//! Bloom 认知层级分类 - 业务能力层
//!
//! 只负责"给题目打认知层级标签"能力，不关心流程
//!
//! 纯函数：相同输入永远得到相同标签，没有任何副作用

use crate::models::BloomLevel;

/// 按优先级排列的关键词组
///
/// 顺序即优先级：从上往下逐组匹配，第一个命中的组获胜，
/// 所以必须保持有序切片，不能换成查表结构
const KEYWORD_GROUPS: &[(BloomLevel, &[&str])] = &[
    (
        BloomLevel::Knowledge,
        &["define", "list", "name", "what is", "who is"],
    ),
    (
        BloomLevel::Comprehension,
        &["explain", "summarize", "describe", "identify"],
    ),
    (
        BloomLevel::Application,
        &["apply", "use", "solve", "demonstrate"],
    ),
    (
        BloomLevel::Analysis,
        &["analyze", "compare", "contrast", "why", "examine"],
    ),
    (
        BloomLevel::Synthesis,
        &["design", "compose", "create", "what if", "develop"],
    ),
    (
        BloomLevel::Evaluation,
        &["evaluate", "assess", "argue", "critique", "justify"],
    ),
];

/// 对题目文本进行 Bloom 认知层级分类
///
/// # 参数
/// - `question`: 题目文本（可以为空）
///
/// # 返回
/// 大小写不敏感的子串匹配，第一个命中的关键词组获胜；
/// 没有任何关键词命中时返回 `Unclassified`
pub fn classify(question: &str) -> BloomLevel {
    let q = question.to_lowercase();

    for (level, keywords) in KEYWORD_GROUPS {
        if keywords.iter().any(|keyword| q.contains(keyword)) {
            return *level;
        }
    }

    BloomLevel::Unclassified
}
