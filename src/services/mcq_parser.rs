//! 选择题响应解析 - 业务能力层
//!
//! 只负责"把 LLM 返回的自由文本解析成选择题记录"能力，不关心流程
//!
//! ## 解析规则
//!
//! 逐行扫描，同一时刻只维护一条"构建中"的记录：
//! - 编号行（`1.`~`99.`，无前导零）开始一条新记录
//! - `A)`~`D)` 行追加为选项（去掉标签前缀）
//! - `answer:` 行（不区分大小写）取第一个冒号之后的内容
//! - 其余行直接跳过，不构成错误
//!
//! 缺少选项或答案的记录照常输出；只有从未出现编号行时才没有记录

use crate::models::McqRecord;
use crate::services::bloom;

/// 选项标签，按位置对应 A-D
const OPTION_TAGS: [&str; 4] = ["A)", "B)", "C)", "D)"];

/// 构建中的选择题记录
///
/// 只有编号行才会开始构建；在此之前的选项/答案行没有归属，直接丢弃
#[derive(Debug, Default)]
struct McqAccumulator {
    question: Option<String>,
    options: Vec<String>,
    answer: String,
}

impl McqAccumulator {
    /// 是否已经开始构建
    fn is_started(&self) -> bool {
        self.question.is_some()
    }

    /// 以新的编号行重新开始构建，返回上一条构建完的记录
    fn restart(&mut self, question_line: &str) -> Option<McqRecord> {
        let finished = std::mem::take(self).finish();
        self.question = Some(question_line.to_string());
        finished
    }

    /// 收尾：把构建中的内容变成一条记录
    ///
    /// 从未开始构建时返回 `None`
    fn finish(self) -> Option<McqRecord> {
        let question = self.question?;
        let bloom = bloom::classify(&question);
        Some(McqRecord {
            question,
            options: self.options,
            answer: self.answer,
            bloom,
        })
    }
}

/// 把 LLM 返回的多行文本解析为选择题记录列表
///
/// # 参数
/// - `raw_text`: LLM 的原始响应文本
/// - `limit`: 最多返回的记录数
///
/// 输出数量达到 `limit` 时立即停止扫描，后续行不再处理；
/// 此时构建中的记录不会在循环里收尾，扫描结束后统一收尾再截断。
/// 任何输入下返回数量都不会超过 `limit`
pub fn parse_mcqs(raw_text: &str, limit: usize) -> Vec<McqRecord> {
    let mut records = Vec::new();
    let mut acc = McqAccumulator::default();

    for line in raw_text.lines() {
        let line = line.trim();

        if is_ordinal_line(line) {
            if let Some(finished) = acc.restart(line) {
                records.push(finished);
            }
        } else if let Some(option) = strip_option_tag(line) {
            if acc.is_started() {
                acc.options.push(option);
            }
        } else if let Some(answer) = strip_answer_prefix(line) {
            if acc.is_started() {
                acc.answer = answer;
            }
        }

        // 达到数量上限就停止扫描，不再处理剩余行
        if records.len() >= limit {
            break;
        }
    }

    if let Some(finished) = acc.finish() {
        records.push(finished);
    }

    records.truncate(limit);
    records
}

/// 判断编号行：1~2 位数字（无前导零）后跟英文句点
fn is_ordinal_line(line: &str) -> bool {
    let digit_count = line.chars().take_while(|c| c.is_ascii_digit()).count();

    if !(1..=2).contains(&digit_count) || line.starts_with('0') {
        return false;
    }

    // 数字都是 ASCII，按字节切片是安全的
    line[digit_count..].starts_with('.')
}

/// 识别选项行并去掉标签前缀
///
/// 行长超过 2 个字符时去掉前 3 个字符（标签 + 后面一个空格）再修剪；
/// 否则（裸标签行）原样返回
fn strip_option_tag(line: &str) -> Option<String> {
    if !OPTION_TAGS.iter().any(|tag| line.starts_with(tag)) {
        return None;
    }

    if line.chars().count() > 2 {
        let mut chars = line.chars();
        chars.by_ref().take(3).for_each(drop);
        Some(chars.as_str().trim().to_string())
    } else {
        Some(line.trim().to_string())
    }
}

/// 识别 `answer:` 行并取出第一个冒号之后的内容
fn strip_answer_prefix(line: &str) -> Option<String> {
    if !line.to_lowercase().starts_with("answer:") {
        return None;
    }

    line.split_once(':')
        .map(|(_, rest)| rest.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BloomLevel;

    const TWO_MCQS: &str = "1. What is inheritance?\n\
A) A class feature\n\
B) A loop construct\n\
C) A data type\n\
D) A database term\n\
Answer: A) A class feature\n\
2. Why use polymorphism?\n\
A) Speed\n\
B) Flexibility\n\
C) Memory\n\
D) Syntax\n\
Answer: B) Flexibility";

    #[test]
    fn test_parse_mcqs_two_records() {
        let records = parse_mcqs(TWO_MCQS, 2);
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].question, "1. What is inheritance?");
        assert_eq!(
            records[0].options,
            vec!["A class feature", "A loop construct", "A data type", "A database term"]
        );
        assert_eq!(records[0].answer, "A) A class feature");
        assert_eq!(records[0].bloom, BloomLevel::Knowledge);

        assert_eq!(records[1].question, "2. Why use polymorphism?");
        assert_eq!(records[1].answer, "B) Flexibility");
        // 题干里的 "use" 属于 Application 组，排在 Analysis 组的 "why" 之前
        assert_eq!(records[1].bloom, BloomLevel::Application);
    }

    #[test]
    fn test_parse_mcqs_empty_input() {
        assert!(parse_mcqs("", 10).is_empty());
    }

    #[test]
    fn test_parse_mcqs_limit_zero() {
        assert!(parse_mcqs(TWO_MCQS, 0).is_empty());
    }

    #[test]
    fn test_parse_mcqs_never_exceeds_limit() {
        let mut text = String::new();
        for i in 1..=20 {
            text.push_str(&format!("{}. Question number {}?\nA) x\nB) y\nAnswer: A) x\n", i, i));
        }

        for limit in [1, 3, 7, 20, 50] {
            let records = parse_mcqs(&text, limit);
            assert!(records.len() <= limit);
            assert_eq!(records.len(), limit.min(20));
        }
    }

    #[test]
    fn test_parse_mcqs_early_stop_drops_in_flight_record() {
        // 第 3 题的编号行会把输出推到上限并终止扫描；
        // 此时第 3 题只有题干在累加器里，收尾后被截断丢弃
        let text = "1. Define a stack.\nAnswer: A) LIFO\n\
2. Define a queue.\nAnswer: B) FIFO\n\
3. Define a heap.\nA) Tree\nAnswer: C) Tree";
        let records = parse_mcqs(text, 2);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].question, "1. Define a stack.");
        assert_eq!(records[1].question, "2. Define a queue.");
    }

    #[test]
    fn test_parse_mcqs_partial_record_still_emitted() {
        // 缺少选项和答案的记录不会被校验拒绝
        let records = parse_mcqs("5. Explain virtual memory.", 10);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].question, "5. Explain virtual memory.");
        assert!(records[0].options.is_empty());
        assert_eq!(records[0].answer, "");
        assert_eq!(records[0].bloom, BloomLevel::Comprehension);
    }

    #[test]
    fn test_parse_mcqs_stray_lines_before_first_question_dropped() {
        // 编号行出现之前的选项/答案行没有归属
        let text = "A) orphan option\nAnswer: C) orphan\n1. What is a socket?\nA) An endpoint";
        let records = parse_mcqs(text, 10);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].question, "1. What is a socket?");
        assert_eq!(records[0].options, vec!["An endpoint"]);
        assert_eq!(records[0].answer, "");
    }

    #[test]
    fn test_parse_mcqs_ignores_unrecognized_lines() {
        let text = "Here are your questions:\n\
1. What is DNS?\n\
Some commentary in between.\n\
A) Name resolution\n\
**bold noise**\n\
Answer: A) Name resolution";
        let records = parse_mcqs(text, 10);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].options, vec!["Name resolution"]);
        assert_eq!(records[0].answer, "A) Name resolution");
    }

    #[test]
    fn test_parse_mcqs_answer_takes_text_after_first_colon() {
        let text = "1. What is the ratio?\nANSWER: C) 3:4 exactly";
        let records = parse_mcqs(text, 1);

        assert_eq!(records[0].answer, "C) 3:4 exactly");
    }

    #[test]
    fn test_parse_mcqs_bare_option_tag_kept_as_is() {
        let text = "1. Pick one.\nA)\nB) Real option";
        let records = parse_mcqs(text, 1);

        assert_eq!(records[0].options, vec!["A)", "Real option"]);
    }

    #[test]
    fn test_is_ordinal_line_bounds() {
        assert!(is_ordinal_line("1. ok"));
        assert!(is_ordinal_line("99. ok"));
        assert!(!is_ordinal_line("0. nope"));
        assert!(!is_ordinal_line("01. nope"));
        assert!(!is_ordinal_line("100. nope"));
        assert!(!is_ordinal_line("1) nope"));
        assert!(!is_ordinal_line("no number"));
    }
}
