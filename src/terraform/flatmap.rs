use std::collections::HashMap;

use thiserror::Error;

/// Errors raised while walking a flattened attribute map.
#[derive(Debug, Error)]
pub enum FlatmapError {
    /// A key the traversal requires is absent from the map
    #[error("missing attribute '{key}'")]
    Missing { key: String },

    /// A `.#` count key holds something that is not a non-negative integer
    #[error("attribute '{key}' is not a valid list count: '{value}'")]
    BadCount { key: String, value: String },
}

/// A resource's `primary.attributes` map in Terraform's legacy flattened
/// encoding: nested lists are stored as `<path>.#` count keys plus
/// `<path>.<index>` element keys.
///
/// All lookups go through [`FlatScope`] and [`FlatList`] so the key-building
/// convention lives in one place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatMap {
    entries: HashMap<String, String>,
}

impl FlatMap {
    /// Scope rooted at the top of the map (empty prefix).
    pub fn root(&self) -> FlatScope<'_> {
        FlatScope {
            map: self,
            prefix: String::new(),
        }
    }

    fn lookup(&self, key: &str) -> Result<&str, FlatmapError> {
        self.entries
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| FlatmapError::Missing {
                key: key.to_string(),
            })
    }
}

impl FromIterator<(String, String)> for FlatMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// A prefix into a [`FlatMap`]: the root scope, or one element of a
/// structured list (e.g. `group.0`).
#[derive(Debug, Clone)]
pub struct FlatScope<'a> {
    map: &'a FlatMap,
    prefix: String,
}

impl<'a> FlatScope<'a> {
    fn key(&self, field: &str) -> String {
        if self.prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", self.prefix, field)
        }
    }

    /// Scalar attribute at `<prefix>.<field>`.
    pub fn get(&self, field: &str) -> Result<&'a str, FlatmapError> {
        self.map.lookup(&self.key(field))
    }

    /// List attribute rooted at `<prefix>.<field>`, sized by its `.#` key.
    pub fn list(&self, field: &str) -> Result<FlatList<'a>, FlatmapError> {
        let path = self.key(field);
        let count_key = format!("{path}.#");
        let raw = self.map.lookup(&count_key)?;
        let len = raw.parse::<usize>().map_err(|_| FlatmapError::BadCount {
            key: count_key,
            value: raw.to_string(),
        })?;
        Ok(FlatList {
            map: self.map,
            path,
            len,
        })
    }
}

/// A flattened list of known length. Elements are either plain strings
/// ([`FlatList::get`] / [`FlatList::values`]) or structured sub-records
/// reached through [`FlatList::scope`].
#[derive(Debug, Clone)]
pub struct FlatList<'a> {
    map: &'a FlatMap,
    path: String,
    len: usize,
}

impl<'a> FlatList<'a> {
    pub fn len(&self) -> usize {
        self.len
    }

    #[allow(dead_code)] // NOTE: convention pair for len()
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// String element at `<path>.<index>`.
    pub fn get(&self, index: usize) -> Result<&'a str, FlatmapError> {
        self.map.lookup(&format!("{}.{}", self.path, index))
    }

    /// Scope for the structured element at `<path>.<index>`.
    pub fn scope(&self, index: usize) -> FlatScope<'a> {
        FlatScope {
            map: self.map,
            prefix: format!("{}.{}", self.path, index),
        }
    }

    /// All string elements, in index order.
    pub fn values(&self) -> Result<Vec<&'a str>, FlatmapError> {
        (0..self.len).map(|i| self.get(i)).collect()
    }
}
