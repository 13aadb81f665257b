// ABOUTME: Tag catalog type definitions
// ABOUTME: Stored tag records and the per-request tag count mapping

use std::collections::HashMap;

use serde::{Deserialize, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Tag {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Number of questions referencing a tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    pub name: String,
    pub qcnt: u64,
}

/// Tag name to question count, in the order tags were discovered.
///
/// Serializes as a JSON array of `{name, qcnt}` objects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagCountMap {
    entries: Vec<TagCount>,
    index: HashMap<String, usize>,
}

impl TagCountMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry. Returns the entry back if its name is already present.
    pub fn try_insert(&mut self, count: TagCount) -> Result<(), TagCount> {
        if self.index.contains_key(&count.name) {
            return Err(count);
        }
        self.index.insert(count.name.clone(), self.entries.len());
        self.entries.push(count);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<u64> {
        self.index.get(name).map(|&i| self.entries[i].qcnt)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TagCount> {
        self.entries.iter()
    }

    pub fn into_vec(self) -> Vec<TagCount> {
        self.entries
    }
}

impl Serialize for TagCountMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.entries)
    }
}
