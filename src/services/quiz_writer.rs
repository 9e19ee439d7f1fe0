//! 测验导出服务 - 业务能力层
//!
//! 只负责"把生成结果交到导出边界"能力，不关心流程
//!
//! 本仓库的导出边界是两个文件：JSON（给下游程序消费）
//! 和纯文本排版（给人直接阅读）；更丰富的文档格式由下游
//! 消费 JSON 自行渲染

use crate::error::{AppError, AppResult};
use crate::models::QuizSet;
use std::path::PathBuf;
use tracing::{debug, info};

/// 测验导出服务
pub struct QuizWriter {
    output_dir: PathBuf,
}

impl QuizWriter {
    /// 创建新的导出服务
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// 导出一份笔记的生成结果
    ///
    /// # 参数
    /// - `quiz`: 两个输出序列，原样接收，排版在这里完成
    ///
    /// # 返回
    /// 返回写出的 (JSON 路径, 文本路径)
    pub async fn write(&self, quiz: &QuizSet) -> AppResult<(PathBuf, PathBuf)> {
        debug!(
            "导出 {}: {} 道选择题, {} 道开放题",
            quiz.source_name,
            quiz.mcqs.len(),
            quiz.open_questions.len()
        );

        let json_path = self.output_dir.join(format!("{}_quiz.json", quiz.source_name));
        let text_path = self.output_dir.join(format!("{}_quiz.txt", quiz.source_name));

        let json = serde_json::to_string_pretty(quiz)?;
        tokio::fs::write(&json_path, json)
            .await
            .map_err(|e| AppError::export_write_failed(json_path.display().to_string(), e))?;

        tokio::fs::write(&text_path, render_text(quiz))
            .await
            .map_err(|e| AppError::export_write_failed(text_path.display().to_string(), e))?;

        info!("💾 导出完成: {}", json_path.display());

        Ok((json_path, text_path))
    }
}

/// 把生成结果渲染成纯文本
///
/// 选项按位置恢复 A-D 标签，每道题后面跟答案和 Bloom 标签
fn render_text(quiz: &QuizSet) -> String {
    let mut out = String::new();

    out.push_str("Note2Quiz Generated Questions\n");
    out.push_str(&"=".repeat(60));
    out.push('\n');

    out.push_str("\nMultiple Choice Questions (MCQs)\n\n");
    for (i, q) in quiz.mcqs.iter().enumerate() {
        out.push_str(&format!("Q{}: {}\n", i + 1, q.question));
        for (idx, opt) in q.options.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", option_label(idx), opt));
        }
        out.push_str(&format!("Answer: {} | Bloom Level: {}\n\n", q.answer, q.bloom));
    }

    out.push_str("Viva/Discussion Questions\n\n");
    for (i, q) in quiz.open_questions.iter().enumerate() {
        out.push_str(&format!("Q{}: {}\n", i + 1, q.question));
        out.push_str(&format!("Bloom Level: {}\n\n", q.bloom));
    }

    out
}

/// 按位置生成选项标签（A、B、C、D，越界时退化为数字）
fn option_label(index: usize) -> String {
    if index < 26 {
        ((b'A' + index as u8) as char).to_string()
    } else {
        (index + 1).to_string()
    }
}
