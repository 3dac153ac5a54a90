use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// A localized push: one language's title and message for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PushEntry {
    #[serde(skip)]
    pub language_code: String,
    pub title: String,
    pub message: String,
}

impl PushEntry {
    pub fn new(
        language_code: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            language_code: language_code.into(),
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Language code -> entry map that keeps first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translations {
    entries: Vec<PushEntry>,
}

impl Translations {
    /// Insert an entry. A repeated language code replaces the earlier entry
    /// in place and the replaced one is returned.
    pub fn insert(&mut self, entry: PushEntry) -> Option<PushEntry> {
        match self
            .entries
            .iter_mut()
            .find(|e| e.language_code == entry.language_code)
        {
            Some(existing) => Some(std::mem::replace(existing, entry)),
            None => {
                self.entries.push(entry);
                None
            }
        }
    }

    pub fn get(&self, language_code: &str) -> Option<&PushEntry> {
        self.entries.iter().find(|e| e.language_code == language_code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PushEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Translations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.language_code, entry)?;
        }
        map.end()
    }
}

/// All pushes of one category column, keyed by language code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub translations: Translations,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            translations: Translations::default(),
        }
    }
}

// Serialized as the bare language map; the name becomes the file name.
impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.translations.serialize(serializer)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Push {
    pub id: String,
    pub translations: Translations,
}

impl Push {
    pub fn new(number: usize) -> Self {
        Self {
            id: format!("push_{:03}", number),
            translations: Translations::default(),
        }
    }
}

/// Category document with the languages header and numbered pushes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PushDocument {
    pub languages: Vec<String>,
    pub pushes: Vec<Push>,
}

/// Ordered `name -> value` collection of per-category results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Categorized<T> {
    items: Vec<(String, T)>,
}

impl<T> Default for Categorized<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Categorized<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, name: impl Into<String>, value: T) {
        self.items.push((name.into(), value));
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.items.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.items.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Serialize> Serialize for Categorized<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.items.len()))?;
        for (name, value) in &self.items {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
