pub mod bloom;
pub mod llm_service;
pub mod mcq_parser;
pub mod open_parser;
pub mod quiz_writer;

pub use bloom::classify;
pub use llm_service::LlmService;
pub use mcq_parser::parse_mcqs;
pub use open_parser::parse_open_questions;
pub use quiz_writer::QuizWriter;
