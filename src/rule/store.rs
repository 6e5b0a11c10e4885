//! @acp:module "Rule Store"
//! @acp:summary "Load, save and discover rule documents on disk"
//! @acp:domain cli
//! @acp:layer io

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::types::Rule;
use crate::error::{Result, RulesError};

/// Anything that can turn a rule identifier into a [`Rule`].
///
/// Resolution only needs this seam, so tests can resolve against an
/// in-memory graph without touching the filesystem.
pub trait RuleSource {
    fn load(&self, identifier: &str) -> Result<Rule>;
}

/// @acp:summary "Filesystem-backed rule store"
///
/// Identifiers are paths relative to `base` (the directory holding
/// rules.yaml). Listing and lookup by name walk `rules_dir`.
#[derive(Debug, Clone)]
pub struct RuleStore {
    base: PathBuf,
    rules_dir: PathBuf,
}

impl RuleStore {
    pub fn new(base: impl Into<PathBuf>, rules_dir: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            rules_dir: rules_dir.into(),
        }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn rules_dir(&self) -> &Path {
        &self.rules_dir
    }

    /// Full path for an identifier. Absolute identifiers are used as-is.
    pub fn path_of(&self, identifier: &str) -> PathBuf {
        self.base.join(identifier)
    }

    /// Load a rule document from an explicit path
    pub fn load_path(&self, path: &Path) -> Result<Rule> {
        if !path.exists() {
            return Err(RulesError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json).map_err(|source| RulesError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write every field of `rule` to the document at `identifier`
    pub fn save(&self, rule: &Rule, identifier: &str) -> Result<()> {
        let path = self.path_of(identifier);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut json = serde_json::to_string_pretty(rule)?;
        json.push('\n');
        std::fs::write(&path, json)?;
        tracing::debug!("Saved rule to {}", path.display());
        Ok(())
    }

    pub fn has_rules_dir(&self) -> bool {
        self.rules_dir.is_dir()
    }

    /// All `*.json` documents below the rules directory, relative to it, sorted
    pub fn list(&self) -> Vec<String> {
        if !self.has_rules_dir() {
            return vec![];
        }

        let mut files: Vec<String> = WalkDir::new(&self.rules_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry: {}", e);
                    None
                }
            })
            .filter(|e| e.file_type().is_file())
            .filter(|e| e.path().extension().map(|ext| ext == "json").unwrap_or(false))
            .filter_map(|e| {
                e.path()
                    .strip_prefix(&self.rules_dir)
                    .ok()
                    .map(|p| p.to_string_lossy().into_owned())
            })
            .collect();

        files.sort();
        files
    }

    /// Find a rule file by name: exact relative match first, then the first
    /// listed file ending with the name. `.json` is appended when missing.
    pub fn find(&self, name: &str) -> Option<PathBuf> {
        let name = if name.ends_with(".json") {
            name.to_string()
        } else {
            format!("{}.json", name)
        };

        let files = self.list();
        let found = files
            .iter()
            .find(|f| **f == name)
            .or_else(|| files.iter().find(|f| f.ends_with(&name)))?;

        Some(self.rules_dir.join(found))
    }
}

impl RuleSource for RuleStore {
    fn load(&self, identifier: &str) -> Result<Rule> {
        self.load_path(&self.path_of(identifier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, RuleStore) {
        let dir = TempDir::new().unwrap();
        let store = RuleStore::new(dir.path(), dir.path().join("rules"));
        (dir, store)
    }

    #[test]
    fn test_save_then_load() {
        let (_dir, store) = store();
        let rule = Rule::new("Style", "Use rustfmt").with_requires(["rules/base.json"]);
        store.save(&rule, "rules/style.json").unwrap();

        let loaded = store.load("rules/style.json").unwrap();
        assert_eq!(loaded, rule);
    }

    #[test]
    fn test_load_missing_is_not_found() {
        let (_dir, store) = store();
        let err = store.load("rules/nope.json").unwrap_err();
        assert!(matches!(err, RulesError::NotFound { .. }));
    }

    #[test]
    fn test_load_malformed_is_parse_error() {
        let (dir, store) = store();
        std::fs::create_dir_all(dir.path().join("rules")).unwrap();
        std::fs::write(dir.path().join("rules/bad.json"), "{ not json").unwrap();

        let err = store.load("rules/bad.json").unwrap_err();
        assert!(matches!(err, RulesError::Parse { .. }));
    }

    #[test]
    fn test_list_is_recursive_and_sorted() {
        let (dir, store) = store();
        store.save(&Rule::default(), "rules/z.json").unwrap();
        store.save(&Rule::default(), "rules/base_rules/a.json").unwrap();
        std::fs::write(dir.path().join("rules/notes.txt"), "ignored").unwrap();

        let files = store.list();
        let expected: Vec<String> = vec![
            Path::new("base_rules").join("a.json").to_string_lossy().into_owned(),
            "z.json".to_string(),
        ];
        assert_eq!(files, expected);
    }

    #[test]
    fn test_list_without_rules_dir() {
        let (_dir, store) = store();
        assert!(!store.has_rules_dir());
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_find_prefers_exact_then_suffix() {
        let (_dir, store) = store();
        store.save(&Rule::default(), "rules/core.json").unwrap();
        store.save(&Rule::default(), "rules/base_rules/testing.json").unwrap();

        assert_eq!(store.find("core"), Some(store.rules_dir().join("core.json")));
        assert_eq!(
            store.find("testing.json"),
            Some(store.rules_dir().join("base_rules").join("testing.json"))
        );
        assert_eq!(store.find("missing"), None);
    }
}
