pub mod loaders;
pub mod question;

pub use loaders::{load_all_notes_files, load_notes_text};
pub use question::{BloomLevel, McqRecord, OpenQuestionRecord, QuestionKind, QuizSet};
