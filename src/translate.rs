//! Host collaborator for translation and library-support queries.

use indexmap::IndexMap;
use log::debug;
use std::path::Path;

use crate::error::{Error, Result};

/// Access to the host's translation facilities.
pub trait Translator {
    /// Translates `text` into `language`. Untranslated text is returned unchanged.
    fn translate(&self, text: &str, language: &str) -> String;

    /// Whether the host declares support for a `libs/` directory.
    fn libs_declared(&self) -> bool;
}

/// Translator that never translates.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTranslation {
    pub libs_declared: bool,
}

impl Translator for NoTranslation {
    fn translate(&self, text: &str, _language: &str) -> String {
        text.to_string()
    }

    fn libs_declared(&self) -> bool {
        self.libs_declared
    }
}

/// Translator backed by per-language JSON tables of `source -> translation`.
#[derive(Debug, Default, Clone)]
pub struct TableTranslator {
    tables: IndexMap<String, IndexMap<String, String>>,
    libs_declared: bool,
}

impl TableTranslator {
    pub fn new(libs_declared: bool) -> Self {
        Self { tables: IndexMap::new(), libs_declared }
    }

    /// Loads `template_root/tl/<language>/strings.json` if it exists.
    pub fn load<P: AsRef<Path>>(
        template_root: P,
        language: Option<&str>,
        libs_declared: bool,
    ) -> Result<Self> {
        let mut translator = Self::new(libs_declared);
        let Some(language) = language else {
            return Ok(translator);
        };

        let path = template_root.as_ref().join("tl").join(language).join("strings.json");
        if !path.is_file() {
            debug!("No translation table at '{}', strings pass through.", path.display());
            return Ok(translator);
        }

        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let table: IndexMap<String, String> = serde_json::from_str(&content)?;
        debug!("Loaded {} translations for '{language}'.", table.len());
        translator.insert_table(language, table);
        Ok(translator)
    }

    pub fn insert_table(&mut self, language: &str, table: IndexMap<String, String>) {
        self.tables.insert(language.to_string(), table);
    }
}

impl Translator for TableTranslator {
    fn translate(&self, text: &str, language: &str) -> String {
        self.tables
            .get(language)
            .and_then(|table| table.get(text))
            .cloned()
            .unwrap_or_else(|| text.to_string())
    }

    fn libs_declared(&self) -> bool {
        self.libs_declared
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_translation_passes_through() {
        let mut translator = TableTranslator::new(false);
        translator.insert_table("french", IndexMap::from([("Start".into(), "Commencer".into())]));
        assert_eq!(translator.translate("Start", "french"), "Commencer");
        assert_eq!(translator.translate("Load", "french"), "Load");
        assert_eq!(translator.translate("Start", "german"), "Start");
    }

    #[test]
    fn loads_table_from_template_tree() {
        let root = TempDir::new().unwrap();
        let dir = root.path().join("tl").join("french");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("strings.json"), r#"{"Start": "Commencer"}"#).unwrap();

        let translator = TableTranslator::load(root.path(), Some("french"), true).unwrap();
        assert_eq!(translator.translate("Start", "french"), "Commencer");
        assert!(translator.libs_declared());

        let absent = TableTranslator::load(root.path(), Some("german"), false).unwrap();
        assert_eq!(absent.translate("Start", "german"), "Start");
    }
}
