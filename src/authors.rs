use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub const DEFAULT_AUTHOR: &str = "hemingway";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorStyle {
    pub name: String,
    pub style: String,
}

/// Author-style lookup table, loaded once at startup from an external JSON
/// map of author key to `{name, style}`. Load failures degrade to a single
/// built-in entry; the table is immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct AuthorStyles {
    styles: HashMap<String, AuthorStyle>,
    fallback: AuthorStyle,
}

impl AuthorStyles {
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(styles) => styles,
            Err(err) => {
                warn!("Could not load {}: {:#}", path.display(), err);
                Self::built_in()
            }
        }
    }

    fn try_load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let styles: HashMap<String, AuthorStyle> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(Self {
            styles,
            fallback: Self::fallback_entry(),
        })
    }

    pub fn built_in() -> Self {
        let fallback = Self::fallback_entry();
        let mut styles = HashMap::new();
        styles.insert(DEFAULT_AUTHOR.to_string(), fallback.clone());
        Self { styles, fallback }
    }

    fn fallback_entry() -> AuthorStyle {
        AuthorStyle {
            name: "Ernest Hemingway".to_string(),
            style: "Short declarative sentences. Concrete nouns. Subtext over statement."
                .to_string(),
        }
    }

    /// Entry for `key`, else the hemingway entry, else the built-in fallback.
    pub fn resolve(&self, key: &str) -> &AuthorStyle {
        self.styles
            .get(key)
            .or_else(|| self.styles.get(DEFAULT_AUTHOR))
            .unwrap_or(&self.fallback)
    }

    /// Display name for `key`; unknown keys echo back unchanged.
    pub fn display_name(&self, key: &str) -> String {
        self.styles
            .get(key)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_json_file() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(
            file,
            r#"{{"carver": {{"name": "Raymond Carver", "style": "Minimalist."}}}}"#
        )?;

        let styles = AuthorStyles::load(file.path());
        assert_eq!(styles.resolve("carver").name, "Raymond Carver");
        assert_eq!(styles.display_name("carver"), "Raymond Carver");
        Ok(())
    }

    #[test]
    fn test_missing_file_falls_back_to_built_in() {
        let styles = AuthorStyles::load(Path::new("does/not/exist.json"));
        assert_eq!(styles.resolve("anything").name, "Ernest Hemingway");
    }

    #[test]
    fn test_malformed_file_falls_back_to_built_in() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(file, "not json at all")?;

        let styles = AuthorStyles::load(file.path());
        assert_eq!(styles.resolve(DEFAULT_AUTHOR).name, "Ernest Hemingway");
        Ok(())
    }

    #[test]
    fn test_unknown_key_resolves_to_hemingway() {
        let styles = AuthorStyles::built_in();
        assert_eq!(styles.resolve("no-such-author").name, "Ernest Hemingway");
    }

    #[test]
    fn test_display_name_echoes_unknown_key() {
        let styles = AuthorStyles::built_in();
        assert_eq!(styles.display_name("no-such-author"), "no-such-author");
    }
}
