use std::fmt;

use serde::{Deserialize, Serialize};

use crate::id_generator;
use crate::language::Language;

/// Identifier joining a store record to its tab and editor panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileId(pub u64);

impl FileId {
    /// A fresh id derived from the current time.
    pub fn generate() -> Self {
        FileId(id_generator::generate_id())
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single file in the playground.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub id: FileId,
    pub name: String,
    pub language: Language,
    pub content: String,
}

impl FileRecord {
    /// Creates an empty file, normalizing `name` for `language`.
    pub fn new(name: &str, language: Language) -> Self {
        Self {
            id: FileId::generate(),
            name: normalize_name(name, &language),
            language,
            content: String::new(),
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }
}

/// Trims `name` and appends the language extension unless it is already there.
pub fn normalize_name(name: &str, language: &Language) -> String {
    let name = name.trim();
    if language.has_extension(name) {
        name.to_owned()
    } else {
        format!("{}{}", name, language.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_appended_once() {
        assert_eq!(normalize_name("app", &Language::Python), "app.py");
        assert_eq!(normalize_name("app.py", &Language::Python), "app.py");
        assert_eq!(normalize_name("app.PY", &Language::Python), "app.PY");
        assert_eq!(normalize_name("  index ", &Language::Html), "index.html");
    }

    #[test]
    fn test_empty_name_is_just_the_extension() {
        assert_eq!(normalize_name("", &Language::Css), ".css");
        assert_eq!(normalize_name("   ", &Language::Rust), ".rs");
    }

    #[test]
    fn test_unknown_language_gets_txt() {
        let lang = Language::from_tag("brainfuck");
        assert_eq!(normalize_name("notes", &lang), "notes.txt");
    }

    #[test]
    fn test_record_serializes_id_as_number() {
        let record = FileRecord {
            id: FileId(42),
            name: "a.js".to_owned(),
            language: Language::JavaScript,
            content: "1".to_owned(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 42, "name": "a.js", "language": "javascript", "content": "1"})
        );
    }
}
