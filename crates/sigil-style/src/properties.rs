//! Custom-property (CSS variable) maps.

use indexmap::IndexMap;
use serde::Deserialize;

/// Indentation used for each rendered declaration line.
pub const DECLARATION_INDENT: &str = "  ";

/// An ordered set of custom-property declarations.
///
/// Names are stored without their leading `--`, so `--accent` and `accent`
/// address the same entry. Iteration follows first-insertion order; setting
/// an existing name replaces its value but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "IndexMap<String, String>")]
pub struct PropertyMap {
    properties: IndexMap<String, String>,
}

impl PropertyMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let name = match name.strip_prefix("--") {
            Some(stripped) => stripped.to_string(),
            None => name,
        };
        self.properties.insert(name, value.into());
    }

    /// Get a property value.
    pub fn get(&self, name: &str) -> Option<&str> {
        let name = name.strip_prefix("--").unwrap_or(name);
        self.properties.get(name).map(|s| s.as_str())
    }

    /// Check if a property exists.
    pub fn contains(&self, name: &str) -> bool {
        let name = name.strip_prefix("--").unwrap_or(name);
        self.properties.contains_key(name)
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate over `(name, value)` pairs in declaration order.
    ///
    /// Names are yielded without the leading `--`.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render the map as newline-joined `  --name: value;` lines.
    ///
    /// An empty map renders as an empty string.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(DECLARATION_INDENT);
            out.push_str("--");
            out.push_str(name);
            out.push_str(": ");
            out.push_str(value);
            out.push(';');
        }
        out
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertyMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for PropertyMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.set(name, value);
        }
    }
}

impl From<IndexMap<String, String>> for PropertyMap {
    fn from(map: IndexMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}
