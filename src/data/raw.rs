use serde::Deserialize;

/// The question document as stored on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct RawQuizDocument {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub university: String,
    #[serde(default)]
    pub course: String,
    pub questions: Vec<RawQuestion>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawQuestion {
    pub question: String,
    pub options: Vec<String>,
    /// Text of the correct option, matched exactly.
    pub answer: String,
}
