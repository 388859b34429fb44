pub mod question_parser;
pub mod report_writer;
pub mod validation;

pub use question_parser::{DropReason, DroppedBlock, LineKind, ParseOutcome, QuestionParser, RawBlock};
pub use report_writer::ReportWriter;
pub use validation::{review, Diagnostic, ValidationReport};
