//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责批量处理和流程调度，是整个系统的"指挥中心"。
//!
//! ## 层次关系
//!
//! ```text
//! app (处理 Vec<笔记>)
//!     ↓
//! workflow::QuizFlow (处理单种题型的一次生成)
//!     ↓
//! services (能力层：llm / 解析 / 分类 / 导出)
//! ```
//!
//! ## 设计原则
//!
//! 1. **单一职责**：编排层只做调度和统计，不做具体业务判断
//! 2. **顺序执行**：每次用户动作只驱动一条流水线，没有共享可变状态
//! 3. **向下依赖**：编排层 → workflow → services

pub mod app;

// 重新导出主要类型
pub use app::App;
