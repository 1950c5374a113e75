use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use tracing::debug;

use super::config::{parse_table_toml, validate_unit, TableError};
use super::DEFAULT_TABLE_TOML;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Read-only lookup from unit key to its accepted spellings.
#[derive(Debug, Clone)]
pub struct RomanizationTable {
    units: HashMap<String, Vec<String>>,
}

impl RomanizationTable {
    pub fn from_toml(toml_str: &str) -> Result<Self, TableError> {
        let map = parse_table_toml(toml_str)?;
        Ok(Self {
            units: map.into_iter().collect(),
        })
    }

    pub fn from_path(path: &Path) -> Result<Self, TableError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Build a table from in-memory entries, applying the same validation as
    /// the TOML loader. Later entries for the same key replace earlier ones.
    pub fn from_entries<K, S, I>(entries: I) -> Result<Self, TableError>
    where
        K: Into<String>,
        S: Into<String>,
        I: IntoIterator<Item = (K, Vec<S>)>,
    {
        let mut units = HashMap::new();
        for (key, spellings) in entries {
            let key = key.into();
            let spellings: Vec<String> = spellings.into_iter().map(Into::into).collect();
            let spellings = validate_unit(&key, spellings)?;
            units.insert(key, spellings);
        }
        if units.is_empty() {
            return Err(TableError::Empty);
        }
        Ok(Self { units })
    }

    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), TableError> {
        // Validate eagerly
        parse_table_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| TableError::AlreadyInitialized)
    }

    /// Get or initialize the global table.
    pub fn global() -> Arc<RomanizationTable> {
        static INSTANCE: OnceLock<Arc<RomanizationTable>> = OnceLock::new();
        INSTANCE
            .get_or_init(|| {
                let toml_str = CUSTOM_TOML
                    .get()
                    .map(|s| s.as_str())
                    .unwrap_or(DEFAULT_TABLE_TOML);
                let table =
                    RomanizationTable::from_toml(toml_str).expect("romanization TOML must be valid");
                debug!(
                    units = table.len(),
                    custom = CUSTOM_TOML.get().is_some(),
                    "romanization table loaded"
                );
                Arc::new(table)
            })
            .clone()
    }

    /// Accepted spellings for `key`, canonical first. Empty for unknown units.
    pub fn spellings_for(&self, key: &str) -> &[String] {
        self.units.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First spelling for `key`, or `""` for unknown units.
    pub fn canonical_spelling_for(&self, key: &str) -> &str {
        self.spellings_for(key)
            .first()
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn contains(&self, key: &str) -> bool {
        self.units.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.units.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_plain_lookup() {
        let table = RomanizationTable::global();
        assert_eq!(table.spellings_for("さ"), ["sa"]);
        assert_eq!(table.canonical_spelling_for("さ"), "sa");
    }

    #[test]
    fn test_alternatives_keep_order() {
        let table = RomanizationTable::global();
        assert_eq!(table.spellings_for("し"), ["shi", "si", "ci"]);
        assert_eq!(table.canonical_spelling_for("ち"), "chi");
    }

    #[test]
    fn test_contraction_key() {
        let table = RomanizationTable::global();
        assert_eq!(table.canonical_spelling_for("きゃ"), "kya");
        assert!(table.spellings_for("しゃ").iter().any(|s| s == "sya"));
    }

    #[test]
    fn test_unknown_unit_is_empty() {
        let table = RomanizationTable::global();
        assert!(table.spellings_for("漢").is_empty());
        assert_eq!(table.canonical_spelling_for("漢"), "");
        assert!(!table.contains("漢"));
    }

    #[test]
    fn test_special_units_present() {
        let table = RomanizationTable::global();
        assert_eq!(table.canonical_spelling_for("っ"), "xtu");
        assert_eq!(table.canonical_spelling_for("ん"), "nn");
        assert_eq!(table.canonical_spelling_for("ー"), "-");
    }

    #[test]
    fn test_from_entries() {
        let table =
            RomanizationTable::from_entries([("さ", vec!["sa"]), ("し", vec!["shi", "si"])])
                .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.spellings_for("し"), ["shi", "si"]);
        let mut keys: Vec<&str> = table.keys().collect();
        keys.sort_unstable();
        assert_eq!(keys, ["さ", "し"]);
    }

    #[test]
    fn test_from_entries_rejects_empty_spelling() {
        let err = RomanizationTable::from_entries([("さ", vec![""])]).unwrap_err();
        assert!(matches!(err, TableError::EmptySpelling(_)));
    }

    #[test]
    fn test_from_entries_rejects_no_entries() {
        let entries: Vec<(String, Vec<String>)> = Vec::new();
        let err = RomanizationTable::from_entries(entries).unwrap_err();
        assert!(matches!(err, TableError::Empty));
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.toml");
        let mut f = fs::File::create(&path).unwrap();
        writeln!(f, "[units]\n\"と\" = [\"to\"]").unwrap();
        drop(f);

        let table = RomanizationTable::from_path(&path).unwrap();
        assert_eq!(table.spellings_for("と"), ["to"]);
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = RomanizationTable::from_path(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, TableError::Io(_)));
    }

    #[test]
    fn test_all_default_units_have_canonical() {
        let table = RomanizationTable::global();
        for key in table.keys() {
            assert!(
                !table.canonical_spelling_for(key).is_empty(),
                "missing canonical spelling for {key}"
            );
        }
    }
}
