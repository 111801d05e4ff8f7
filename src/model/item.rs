use serde::{Deserialize, Deserializer, Serialize};

use super::line::Line;

/// An item as stored in `<folder>/<uid>.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default, deserialize_with = "null_as_default")]
    pub uid: String,
    /// Display name; falls back to the uid when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_fa: Option<String>,
    /// Content lines in reading order; `null` reads as no lines
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: Vec<Line>,
}

impl Item {
    pub fn display_name(&self) -> &str {
        display_name(self.name_fa.as_deref(), &self.uid)
    }
}

/// One row of `manifest.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogueEntry {
    pub uid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_fa: Option<String>,
}

impl CatalogueEntry {
    pub fn display_name(&self) -> &str {
        display_name(self.name_fa.as_deref(), &self.uid)
    }
}

/// The selectable list of items, loaded once at startup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalogue {
    pub entries: Vec<CatalogueEntry>,
}

impl Catalogue {
    pub fn new(entries: Vec<CatalogueEntry>) -> Self {
        Catalogue { entries }
    }

    pub fn contains(&self, uid: &str) -> bool {
        self.get(uid).is_some()
    }

    pub fn get(&self, uid: &str) -> Option<&CatalogueEntry> {
        self.entries.iter().find(|e| e.uid == uid)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Treat an explicit `null` the same as a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn display_name<'a>(name: Option<&'a str>, uid: &'a str) -> &'a str {
    name.filter(|n| !n.is_empty()).unwrap_or(uid)
}
