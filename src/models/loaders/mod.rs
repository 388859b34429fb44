pub mod json_loader;
pub mod toml_loader;

pub use json_loader::{load_questions, save_questions, validate_document};
pub use toml_loader::{load_answer_key, parse_answer_key};
