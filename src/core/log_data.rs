//! Keyed data attached to a log entry
//!
//! Keys are kept in a `BTreeMap`, so iteration is always lexicographic and
//! output stays deterministic no matter the insertion order.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Data map for a single log entry
///
/// # Example
///
/// ```
/// use leveled_logger::Data;
///
/// let data = Data::new().with("c", 3).with("a", 1).with("b", 2);
/// assert_eq!(data.keys(), vec!["a", "b", "c"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Data {
    fields: BTreeMap<String, Value>,
}

impl Data {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, replacing any previous value under the same key
    #[must_use]
    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.insert(key, value);
        self
    }

    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Sorted keys
    pub fn keys(&self) -> Vec<&str> {
        self.fields.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<BTreeMap<String, Value>> for Data {
    fn from(fields: BTreeMap<String, Value>) -> Self {
        Self { fields }
    }
}

impl<K, V> FromIterator<(K, V)> for Data
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut data = Data::new();
        for (k, v) in iter {
            data.insert(k, v);
        }
        data
    }
}

/// Human-readable rendering of a data value
///
/// Strings are printed without quotes, everything else as compact JSON.
pub struct PlainValue<'a>(pub &'a Value);

impl fmt::Display for PlainValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

/// Build a [`Data`] map from `key => value` pairs.
///
/// # Examples
///
/// ```
/// use leveled_logger::data;
///
/// let data = data! { "user" => "alice", "attempts" => 3 };
/// assert_eq!(data.len(), 2);
/// ```
#[macro_export]
macro_rules! data {
    () => {
        $crate::Data::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::Data::new()$(.with($key, $value))+
    };
}
