mod bank;
mod loader;
mod raw;

pub use bank::{QuestionBank, ValidationIssue};
pub use loader::{load_bank_from_json, parse_bank, try_parse_bank};
pub use raw::{RawQuestion, RawQuizDocument};
