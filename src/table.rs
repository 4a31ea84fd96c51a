//! Script tables: the per-script data the engine is parameterized over.
//!
//! A table is built either programmatically through [`TableBuilder`] or
//! from TOML via [`ScriptTable::from_toml`] (raw deserialize, then the same
//! validation as the builder). Validation rejects the silent last-write-wins
//! behavior a plain map load would give: duplicate keys within a category
//! and identical keys across categories are both load-time errors.

use std::collections::BTreeMap;
use std::collections::HashMap;

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("duplicate {category} key {key:?}")]
    DuplicateKey { category: &'static str, key: String },
    #[error("key {key:?} appears in both {first} and {second}")]
    CrossCategoryKey {
        first: &'static str,
        second: &'static str,
        key: String,
    },
    #[error("empty key in {category}")]
    EmptyKey { category: &'static str },
    #[error("{category} key {key:?} is the suppression mark itself")]
    ViramaKey { category: &'static str, key: String },
    #[error("{field} must be a single character, got {value:?}")]
    NotSingleChar { field: &'static str, value: String },
}

/// One glyph→Latin mapping, with the key pre-split for positional matching.
#[derive(Debug)]
pub(crate) struct Entry {
    pub key: Vec<char>,
    pub latin: String,
}

/// Immutable per-script data bundle. Entry lists are sorted longest key
/// first so every pass gets longest-sequence-first matching.
#[derive(Debug)]
pub struct ScriptTable {
    virama: char,
    vowels: Vec<Entry>,
    consonants: Vec<Entry>,
    compounds: Vec<Entry>,
    modifiers: Vec<Entry>,
    chillus: Vec<Entry>,
    anusvara: Option<(char, String)>,
}

impl ScriptTable {
    pub fn builder(virama: char) -> TableBuilder {
        TableBuilder {
            virama,
            vowels: Vec::new(),
            consonants: Vec::new(),
            compounds: Vec::new(),
            modifiers: Vec::new(),
            chillus: Vec::new(),
            anusvara: None,
        }
    }

    /// Load and validate a table from TOML. The TOML parser already rejects
    /// duplicate keys inside one section; cross-category duplicates and the
    /// remaining structural checks come from the builder.
    pub fn from_toml(content: &str) -> Result<ScriptTable, TableError> {
        let raw: RawTable =
            toml::from_str(content).map_err(|e| TableError::Parse(e.to_string()))?;
        let virama = single_char("virama", &raw.virama)?;

        let mut builder = ScriptTable::builder(virama)
            .vowel_entries(raw.vowels)
            .consonant_entries(raw.consonants)
            .compound_entries(raw.compounds)
            .modifier_entries(raw.modifiers)
            .chillu_entries(raw.chillus);
        if let Some(a) = raw.anusvara {
            builder = builder.anusvara(single_char("anusvara.mark", &a.mark)?, &a.latin);
        }
        builder.build()
    }

    pub fn virama(&self) -> char {
        self.virama
    }

    /// Total number of glyph mappings across all categories.
    pub fn entry_count(&self) -> usize {
        self.vowels.len()
            + self.consonants.len()
            + self.compounds.len()
            + self.modifiers.len()
            + self.chillus.len()
            + usize::from(self.anusvara.is_some())
    }

    pub(crate) fn vowels(&self) -> &[Entry] {
        &self.vowels
    }

    pub(crate) fn consonants(&self) -> &[Entry] {
        &self.consonants
    }

    pub(crate) fn compounds(&self) -> &[Entry] {
        &self.compounds
    }

    pub(crate) fn modifiers(&self) -> &[Entry] {
        &self.modifiers
    }

    pub(crate) fn chillus(&self) -> &[Entry] {
        &self.chillus
    }

    pub(crate) fn anusvara(&self) -> Option<(char, &str)> {
        self.anusvara.as_ref().map(|(c, s)| (*c, s.as_str()))
    }
}

pub struct TableBuilder {
    virama: char,
    vowels: Vec<(String, String)>,
    consonants: Vec<(String, String)>,
    compounds: Vec<(String, String)>,
    modifiers: Vec<(String, String)>,
    chillus: Vec<(String, String)>,
    anusvara: Option<(char, String)>,
}

macro_rules! bulk_setter {
    ($slice_fn:ident, $entries_fn:ident, $field:ident) => {
        pub fn $slice_fn(mut self, entries: &[(&str, &str)]) -> Self {
            self.$field
                .extend(entries.iter().map(|&(k, v)| (k.to_string(), v.to_string())));
            self
        }

        fn $entries_fn(mut self, entries: BTreeMap<String, String>) -> Self {
            self.$field.extend(entries);
            self
        }
    };
}

impl TableBuilder {
    bulk_setter!(vowels, vowel_entries, vowels);
    bulk_setter!(consonants, consonant_entries, consonants);
    bulk_setter!(compounds, compound_entries, compounds);
    bulk_setter!(modifiers, modifier_entries, modifiers);
    bulk_setter!(chillus, chillu_entries, chillus);

    pub fn anusvara(mut self, mark: char, latin: &str) -> Self {
        self.anusvara = Some((mark, latin.to_string()));
        self
    }

    pub fn build(self) -> Result<ScriptTable, TableError> {
        let mut seen: HashMap<String, &'static str> = HashMap::new();

        let categories = [
            ("vowels", &self.vowels),
            ("consonants", &self.consonants),
            ("compounds", &self.compounds),
            ("modifiers", &self.modifiers),
            ("chillus", &self.chillus),
        ];
        for (category, entries) in categories {
            for (key, _) in entries {
                check_key(&mut seen, category, key, self.virama)?;
            }
        }
        if let Some((mark, _)) = &self.anusvara {
            check_key(&mut seen, "anusvara", &mark.to_string(), self.virama)?;
        }

        Ok(ScriptTable {
            virama: self.virama,
            vowels: sorted_entries(self.vowels),
            consonants: sorted_entries(self.consonants),
            compounds: sorted_entries(self.compounds),
            modifiers: sorted_entries(self.modifiers),
            chillus: sorted_entries(self.chillus),
            anusvara: self.anusvara,
        })
    }
}

fn check_key(
    seen: &mut HashMap<String, &'static str>,
    category: &'static str,
    key: &str,
    virama: char,
) -> Result<(), TableError> {
    if key.is_empty() {
        return Err(TableError::EmptyKey { category });
    }
    let mut it = key.chars();
    if it.next() == Some(virama) && it.next().is_none() {
        return Err(TableError::ViramaKey {
            category,
            key: key.to_string(),
        });
    }
    if let Some(first) = seen.insert(key.to_string(), category) {
        if first == category {
            return Err(TableError::DuplicateKey {
                category,
                key: key.to_string(),
            });
        }
        return Err(TableError::CrossCategoryKey {
            first,
            second: category,
            key: key.to_string(),
        });
    }
    Ok(())
}

/// Longest key first; ties broken by the key itself for determinism.
fn sorted_entries(raw: Vec<(String, String)>) -> Vec<Entry> {
    let mut entries: Vec<Entry> = raw
        .into_iter()
        .map(|(k, v)| Entry {
            key: k.chars().collect(),
            latin: v,
        })
        .collect();
    entries.sort_by(|a, b| b.key.len().cmp(&a.key.len()).then_with(|| a.key.cmp(&b.key)));
    entries
}

fn single_char(field: &'static str, value: &str) -> Result<char, TableError> {
    let mut it = value.chars();
    match (it.next(), it.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(TableError::NotSingleChar {
            field,
            value: value.to_string(),
        }),
    }
}

#[derive(Deserialize)]
struct RawTable {
    virama: String,
    #[serde(default)]
    vowels: BTreeMap<String, String>,
    #[serde(default)]
    consonants: BTreeMap<String, String>,
    #[serde(default)]
    compounds: BTreeMap<String, String>,
    #[serde(default)]
    modifiers: BTreeMap<String, String>,
    #[serde(default)]
    chillus: BTreeMap<String, String>,
    anusvara: Option<RawAnusvara>,
}

#[derive(Deserialize)]
struct RawAnusvara {
    mark: String,
    latin: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIRAMA: char = '\u{0D4D}';

    #[test]
    fn build_minimal() {
        let table = ScriptTable::builder(VIRAMA)
            .vowels(&[("അ", "a")])
            .consonants(&[("ക", "k")])
            .build()
            .unwrap();
        assert_eq!(table.virama(), VIRAMA);
        assert_eq!(table.entry_count(), 2);
    }

    #[test]
    fn table_formats_for_debug() {
        let table = ScriptTable::builder(VIRAMA)
            .consonants(&[("ക", "k")])
            .build()
            .unwrap();
        let dump = format!("{table:?}");
        assert!(dump.contains("virama"));
        assert!(dump.contains("consonants"));
    }

    #[test]
    fn longest_key_first() {
        let table = ScriptTable::builder(VIRAMA)
            .modifiers(&[("ു", "u"), ("ു്", "u")])
            .build()
            .unwrap();
        assert_eq!(table.modifiers()[0].key.len(), 2);
        assert_eq!(table.modifiers()[1].key.len(), 1);
    }

    #[test]
    fn error_duplicate_key() {
        let err = ScriptTable::builder(VIRAMA)
            .consonants(&[("ക", "k"), ("ക", "q")])
            .build()
            .unwrap_err();
        assert!(matches!(err, TableError::DuplicateKey { category: "consonants", .. }));
    }

    #[test]
    fn error_cross_category_key() {
        let err = ScriptTable::builder(VIRAMA)
            .vowels(&[("അ", "a")])
            .consonants(&[("അ", "a")])
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            TableError::CrossCategoryKey { first: "vowels", second: "consonants", .. }
        ));
    }

    #[test]
    fn error_empty_key() {
        let err = ScriptTable::builder(VIRAMA)
            .vowels(&[("", "a")])
            .build()
            .unwrap_err();
        assert!(matches!(err, TableError::EmptyKey { .. }));
    }

    #[test]
    fn error_virama_as_key() {
        let err = ScriptTable::builder(VIRAMA)
            .modifiers(&[("\u{0D4D}", "x")])
            .build()
            .unwrap_err();
        assert!(matches!(err, TableError::ViramaKey { .. }));
    }

    #[test]
    fn modifier_containing_virama_is_fine() {
        // "ു്" contains the mark but is not equal to it.
        assert!(ScriptTable::builder(VIRAMA)
            .modifiers(&[("ു്", "u")])
            .build()
            .is_ok());
    }

    #[test]
    fn from_toml_minimal() {
        let toml = r#"
virama = "്"

[vowels]
"അ" = "a"

[consonants]
"ക" = "k"

[anusvara]
mark = "ം"
latin = "m"
"#;
        let table = ScriptTable::from_toml(toml).unwrap();
        assert_eq!(table.virama(), VIRAMA);
        assert_eq!(table.anusvara(), Some(('ം', "m")));
        assert_eq!(table.entry_count(), 3);
    }

    #[test]
    fn from_toml_bad_virama() {
        let err = ScriptTable::from_toml("virama = \"ab\"\n").unwrap_err();
        assert!(matches!(err, TableError::NotSingleChar { field: "virama", .. }));
    }

    #[test]
    fn from_toml_invalid() {
        let err = ScriptTable::from_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, TableError::Parse(_)));
    }

    #[test]
    fn from_toml_duplicate_key_rejected_by_parser() {
        let toml = r#"
virama = "്"

[consonants]
"ക" = "k"
"ക" = "q"
"#;
        let err = ScriptTable::from_toml(toml).unwrap_err();
        assert!(matches!(err, TableError::Parse(_)));
    }

    #[test]
    fn table_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ScriptTable>();
    }
}
