pub mod notes_loader;

pub use notes_loader::{load_all_notes_files, load_notes_text};
