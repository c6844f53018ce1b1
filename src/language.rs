use std::fmt;

use serde::{Deserialize, Serialize};

/// Language tag attached to every file.
///
/// Determines the extension appended to new file names, the MIME type used
/// on export, and whether the file takes part in the preview at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Language {
    #[default]
    Html,
    Css,
    JavaScript,
    Python,
    Ruby,
    TypeScript,
    Java,
    CSharp,
    Php,
    Go,
    Swift,
    Kotlin,
    Rust,
    /// Any tag outside the known set, kept verbatim.
    Other(String),
}

impl Language {
    /// Every language offered in the new-file dialog, in menu order.
    pub const ALL: [Language; 13] = [
        Language::Html,
        Language::Css,
        Language::JavaScript,
        Language::Python,
        Language::Ruby,
        Language::TypeScript,
        Language::Java,
        Language::CSharp,
        Language::Php,
        Language::Go,
        Language::Swift,
        Language::Kotlin,
        Language::Rust,
    ];

    /// Parses a tag case-insensitively. `js` is accepted for JavaScript.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "html" => Language::Html,
            "css" => Language::Css,
            "javascript" | "js" => Language::JavaScript,
            "python" => Language::Python,
            "ruby" => Language::Ruby,
            "typescript" => Language::TypeScript,
            "java" => Language::Java,
            "csharp" => Language::CSharp,
            "php" => Language::Php,
            "go" => Language::Go,
            "swift" => Language::Swift,
            "kotlin" => Language::Kotlin,
            "rust" => Language::Rust,
            _ => Language::Other(tag.to_owned()),
        }
    }

    /// The tag written to persisted state.
    pub fn tag(&self) -> &str {
        match self {
            Language::Html => "html",
            Language::Css => "css",
            Language::JavaScript => "javascript",
            Language::Python => "python",
            Language::Ruby => "ruby",
            Language::TypeScript => "typescript",
            Language::Java => "java",
            Language::CSharp => "csharp",
            Language::Php => "php",
            Language::Go => "go",
            Language::Swift => "swift",
            Language::Kotlin => "kotlin",
            Language::Rust => "rust",
            Language::Other(tag) => tag,
        }
    }

    /// Human readable name for menus.
    pub fn label(&self) -> &str {
        match self {
            Language::Html => "HTML",
            Language::Css => "CSS",
            Language::JavaScript => "JavaScript",
            Language::Python => "Python",
            Language::Ruby => "Ruby",
            Language::TypeScript => "TypeScript",
            Language::Java => "Java",
            Language::CSharp => "C#",
            Language::Php => "PHP",
            Language::Go => "Go",
            Language::Swift => "Swift",
            Language::Kotlin => "Kotlin",
            Language::Rust => "Rust",
            Language::Other(tag) => tag,
        }
    }

    /// Canonical extension, including the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Language::Html => ".html",
            Language::Css => ".css",
            Language::JavaScript => ".js",
            Language::Python => ".py",
            Language::Ruby => ".rb",
            Language::TypeScript => ".ts",
            Language::Java => ".java",
            Language::CSharp => ".cs",
            Language::Php => ".php",
            Language::Go => ".go",
            Language::Swift => ".swift",
            Language::Kotlin => ".kt",
            Language::Rust => ".rs",
            Language::Other(_) => ".txt",
        }
    }

    /// Content type used when the file is exported.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Language::Html => "text/html",
            Language::Css => "text/css",
            Language::JavaScript => "application/javascript",
            Language::Python => "text/x-python",
            Language::Ruby => "text/x-ruby",
            Language::TypeScript => "application/typescript",
            Language::Java => "text/x-java-source",
            Language::Php => "application/x-httpd-php",
            Language::Swift => "text/x-swift",
            Language::CSharp
            | Language::Go
            | Language::Kotlin
            | Language::Rust
            | Language::Other(_) => "text/plain",
        }
    }

    /// Returns true if `name` already ends with this language's extension,
    /// ignoring ASCII case.
    pub fn has_extension(&self, name: &str) -> bool {
        let ext = self.extension();
        name.len() >= ext.len()
            && name.is_char_boundary(name.len() - ext.len())
            && name[name.len() - ext.len()..].eq_ignore_ascii_case(ext)
    }
}

impl From<String> for Language {
    fn from(tag: String) -> Self {
        Language::from_tag(&tag)
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.tag().to_owned()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_parse_case_insensitively() {
        assert_eq!(Language::from_tag("HTML"), Language::Html);
        assert_eq!(Language::from_tag("JavaScript"), Language::JavaScript);
        assert_eq!(Language::from_tag("js"), Language::JavaScript);
        assert_eq!(Language::from_tag("CSharp"), Language::CSharp);
    }

    #[test]
    fn test_unknown_language_falls_back() {
        let lang = Language::from_tag("cobol");
        assert_eq!(lang, Language::Other("cobol".to_owned()));
        assert_eq!(lang.extension(), ".txt");
        assert_eq!(lang.mime_type(), "text/plain");
        assert_eq!(lang.tag(), "cobol");
    }

    #[test]
    fn test_known_tags_are_canonical() {
        for lang in Language::ALL {
            assert_eq!(Language::from_tag(lang.tag()), lang);
        }
    }

    #[test]
    fn test_extension_match() {
        assert!(Language::Python.has_extension("app.py"));
        assert!(Language::Python.has_extension("app.PY"));
        assert!(!Language::Python.has_extension("apppy"));
        assert!(!Language::Python.has_extension("py"));
        assert!(Language::Kotlin.has_extension("Main.KT"));
    }

    #[test]
    fn test_serde_uses_tag() {
        let json = serde_json::to_string(&Language::CSharp).unwrap();
        assert_eq!(json, "\"csharp\"");
        let lang: Language = serde_json::from_str("\"Rust\"").unwrap();
        assert_eq!(lang, Language::Rust);
    }
}
