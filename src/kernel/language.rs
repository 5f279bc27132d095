use crate::models::file_tree::file_name;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum LanguageId {
    TypeScript,
    JavaScript,
    Json,
    Css,
    Scss,
    Less,
    Html,
    Markdown,
    Yaml,
    Toml,
    Xml,
    Rust,
    Python,
    Go,
    Shell,
    Sql,
    PlainText,
}

impl LanguageId {
    /// Language for a '/'-joined path, from its extension. Unknown extensions are plain text.
    pub fn from_path(path: &str) -> Self {
        let name = file_name(path);
        let Some((stem, ext)) = name.rsplit_once('.') else {
            return Self::PlainText;
        };
        if stem.is_empty() {
            // Dotfiles such as `.gitignore` carry no extension.
            return Self::PlainText;
        }

        match ext.to_ascii_lowercase().as_str() {
            "ts" | "tsx" | "mts" | "cts" => Self::TypeScript,
            "js" | "jsx" | "mjs" | "cjs" => Self::JavaScript,
            "json" | "jsonc" => Self::Json,
            "css" => Self::Css,
            "scss" | "sass" => Self::Scss,
            "less" => Self::Less,
            "html" | "htm" => Self::Html,
            "md" | "markdown" => Self::Markdown,
            "yaml" | "yml" => Self::Yaml,
            "toml" => Self::Toml,
            "xml" | "svg" | "xsl" => Self::Xml,
            "rs" => Self::Rust,
            "py" | "pyi" => Self::Python,
            "go" => Self::Go,
            "sh" | "bash" | "zsh" => Self::Shell,
            "sql" => Self::Sql,
            _ => Self::PlainText,
        }
    }

    /// Identifier understood by the embedded text widget.
    pub fn language_id(self) -> &'static str {
        match self {
            Self::TypeScript => "typescript",
            Self::JavaScript => "javascript",
            Self::Json => "json",
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Less => "less",
            Self::Html => "html",
            Self::Markdown => "markdown",
            Self::Yaml => "yaml",
            Self::Toml => "toml",
            Self::Xml => "xml",
            Self::Rust => "rust",
            Self::Python => "python",
            Self::Go => "go",
            Self::Shell => "shell",
            Self::Sql => "sql",
            Self::PlainText => "plaintext",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::TypeScript => "TypeScript",
            Self::JavaScript => "JavaScript",
            Self::Json => "JSON",
            Self::Css => "CSS",
            Self::Scss => "SCSS",
            Self::Less => "Less",
            Self::Html => "HTML",
            Self::Markdown => "Markdown",
            Self::Yaml => "YAML",
            Self::Toml => "TOML",
            Self::Xml => "XML",
            Self::Rust => "Rust",
            Self::Python => "Python",
            Self::Go => "Go",
            Self::Shell => "Shell",
            Self::Sql => "SQL",
            Self::PlainText => "Plain Text",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/language.rs"]
mod tests;
