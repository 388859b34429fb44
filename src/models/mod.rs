pub mod answer_key;
pub mod loaders;
pub mod question;

pub use answer_key::{AnswerKey, DEFAULT_CORRECT_ANSWER};
pub use loaders::{load_answer_key, load_questions, save_questions};
pub use question::{ParsedQuestion, QuestionDocument, QuestionNumber, QuestionRecord};
