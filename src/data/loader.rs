use std::fs;
use std::path::Path;

use crate::error::LoadError;

use super::bank::QuestionBank;
use super::raw::RawQuizDocument;

/// Parse a question document, failing on malformed JSON.
pub fn try_parse_bank(json: &str) -> Result<QuestionBank, LoadError> {
    let document: RawQuizDocument = serde_json::from_str(json)?;
    Ok(QuestionBank::from_document(document))
}

/// Parse a question document.
///
/// Empty or malformed input yields an empty (not ready) bank.
pub fn parse_bank(json: &str) -> QuestionBank {
    match try_parse_bank(json) {
        Ok(bank) => bank,
        Err(err) => {
            tracing::warn!("Ignoring question document: {}", err);
            QuestionBank::empty()
        }
    }
}

/// Load a question bank from a JSON file.
///
/// With `strict` set, malformed JSON and questions without exactly one
/// matching answer are errors instead of being skipped.
pub fn load_bank_from_json<P: AsRef<Path>>(path: P, strict: bool) -> Result<QuestionBank, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let bank = if strict {
        try_parse_bank(&json_content)?.into_strict()?
    } else {
        parse_bank(&json_content)
    };

    tracing::info!(
        "Loaded {} questions from {} ({} skipped)",
        bank.len(),
        path.display(),
        bank.issues().len()
    );

    Ok(bank)
}
