//! 批量笔记处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责批量笔记的处理和结果导出。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：启动运行日志、准备输出目录、创建 QuizFlow
//! 2. **批量加载**：扫描并加载所有待处理的笔记文本
//! 3. **顺序处理**：一次只运行一条生成流水线，上一份笔记处理完才开始下一份
//! 4. **结果导出**：把每份笔记的生成结果交给 QuizWriter
//! 5. **全局统计**：汇总所有笔记的处理结果

use anyhow::Result;
use std::path::Path;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::error::AppError;
use crate::models::{load_all_notes_files, QuestionKind, QuizSet};
use crate::services::QuizWriter;
use crate::utils::logging::init_log_file;
use crate::workflow::{GenerationCtx, QuizFlow};

/// 应用主结构
pub struct App {
    config: Config,
    flow: QuizFlow,
    writer: QuizWriter,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        // 初始化日志文件
        init_log_file(&config.output_log_file)?;

        log_startup(&config);

        // 准备输出目录
        if !Path::new(&config.output_dir).exists() {
            tokio::fs::create_dir_all(&config.output_dir)
                .await
                .map_err(|e| AppError::export_write_failed(&config.output_dir, e))?;
        }

        // 创建生成流程（凭证缺失时进入显式的"不可用"状态）
        let flow = QuizFlow::new(&config);
        if !flow.is_available() {
            warn!("⚠️ LLM 凭证未配置，所有生成请求都会得到空结果");
        }

        let writer = QuizWriter::new(&config.output_dir);

        Ok(Self {
            config,
            flow,
            writer,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        // 加载所有待处理的笔记
        let all_notes = self.load_notes().await?;

        if all_notes.is_empty() {
            warn!("⚠️ 没有找到待处理的笔记文件，程序结束");
            return Ok(());
        }

        log_notes_loaded(all_notes.len());

        let mut stats = ProcessingStats {
            total: all_notes.len(),
            ..Default::default()
        };

        // 严格顺序处理：一次只有一条生成流水线在运行
        for (idx, (source_name, text)) in all_notes.iter().enumerate() {
            let notes_index = idx + 1;
            log_notes_start(notes_index, stats.total, source_name);

            match self.process_notes(notes_index, source_name, text).await {
                Ok(true) => {
                    stats.generated += 1;
                }
                Ok(false) => {
                    stats.empty += 1;
                }
                Err(e) => {
                    error!("[笔记 {}] ❌ 处理过程中发生错误: {}", notes_index, e);
                    stats.failed += 1;
                }
            }
        }

        // 输出最终统计
        print_final_stats(&stats, &self.config);

        Ok(())
    }

    /// 加载笔记
    async fn load_notes(&self) -> Result<Vec<(String, String)>> {
        info!("\n📁 正在扫描待处理的笔记...");
        load_all_notes_files(&self.config.notes_folder).await
    }

    /// 处理单份笔记
    ///
    /// # 参数
    /// - `notes_index`: 笔记序号（用于日志）
    /// - `source_name`: 笔记来源名称
    /// - `text`: 笔记文本
    ///
    /// # 返回
    /// 返回是否生成了任何记录（true=有记录，false=两种题型都为空）
    async fn process_notes(
        &self,
        notes_index: usize,
        source_name: &str,
        text: &str,
    ) -> Result<bool> {
        if text.is_empty() {
            // 空笔记照常发起生成调用，由下游的空响应处理兜底
            warn!("[笔记 {}] ⚠️ 笔记内容为空", notes_index);
        }

        // 1. 生成选择题
        let mcq_ctx = GenerationCtx::new(source_name, QuestionKind::Mcq, self.config.num_mcqs);
        let mcqs = self.flow.generate_mcqs(&mcq_ctx, text).await;

        // 2. 生成开放题
        let open_ctx = GenerationCtx::new(
            source_name,
            QuestionKind::Open,
            self.config.num_open_questions,
        );
        let open_questions = self.flow.generate_open_questions(&open_ctx, text).await;

        let quiz = QuizSet {
            source_name: source_name.to_string(),
            mcqs,
            open_questions,
        };

        // 分支：两种题型都没有记录
        if quiz.is_empty() {
            warn!("[笔记 {}] ⚠️ 没有生成任何记录，跳过导出", notes_index);
            return Ok(false);
        }

        // 3. 导出
        let (json_path, _text_path) = self.writer.write(&quiz).await?;
        info!(
            "[笔记 {}] ✓ 共 {} 条记录，已导出: {}",
            notes_index,
            quiz.len(),
            json_path.display()
        );

        Ok(true)
    }
}

/// 处理统计
#[derive(Debug, Default)]
struct ProcessingStats {
    generated: usize,
    empty: usize,
    failed: usize,
    total: usize,
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 笔记测验生成模式");
    info!(
        "📊 每份笔记: {} 道选择题 + {} 道开放题",
        config.num_mcqs, config.num_open_questions
    );
    info!("{}", "=".repeat(60));
}

fn log_notes_loaded(total: usize) {
    info!("✓ 找到 {} 份待处理的笔记", total);
    info!("💡 将按顺序逐份生成，一次只运行一条流水线\n");
}

fn log_notes_start(notes_index: usize, total: usize, source_name: &str) {
    info!("\n{}", "─".repeat(60));
    info!("📄 开始处理第 {}/{} 份笔记: {}", notes_index, total, source_name);
    info!("{}", "─".repeat(60));
}

fn print_final_stats(stats: &ProcessingStats, config: &Config) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 有生成结果: {}/{}", stats.generated, stats.total);
    info!("⚪ 空结果: {}", stats.empty);
    info!("❌ 失败: {}", stats.failed);
    info!("{}", "=".repeat(60));
    info!("\n日志已保存至: {}", config.output_log_file);
}
