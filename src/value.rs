//! Parameter values and parameter sets.
//!
//! Callers reach for `false`, `null` and `""` interchangeably to say "no
//! value". All three collapse into [`ParamValue::Absent`] at the edges so the
//! rest of the crate only ever compares against that one tag. `0` and `"0"`
//! are genuine values and never absent.

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// A single parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ParamValue {
    /// Text value
    Text(String),
    /// Integer value, rendered in decimal
    Int(i64),
    /// No value supplied
    #[default]
    Absent,
}

impl ParamValue {
    /// True for the absent tag, and for empty text built without going
    /// through `From`.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        match self {
            ParamValue::Text(s) => s.is_empty(),
            ParamValue::Int(_) => false,
            ParamValue::Absent => true,
        }
    }

    /// Text form of a present value; `None` when absent.
    #[must_use]
    pub fn as_text(&self) -> Option<String> {
        match self {
            ParamValue::Text(s) if !s.is_empty() => Some(s.clone()),
            ParamValue::Int(i) => Some(i.to_string()),
            ParamValue::Text(_) | ParamValue::Absent => None,
        }
    }

    /// Value equivalence: both absent, or both present with the same text.
    ///
    /// `Int(2004)` and `Text("2004")` are equivalent; `Int(0)` is never
    /// equivalent to `Absent`.
    #[must_use]
    pub fn equivalent(&self, other: &ParamValue) -> bool {
        match (self.as_text(), other.as_text()) {
            (None, None) => true,
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Text(s) => f.write_str(s),
            ParamValue::Int(i) => write!(f, "{i}"),
            ParamValue::Absent => Ok(()),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        if s.is_empty() {
            ParamValue::Absent
        } else {
            ParamValue::Text(s.to_string())
        }
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        if s.is_empty() {
            ParamValue::Absent
        } else {
            ParamValue::Text(s)
        }
    }
}

impl From<&String> for ParamValue {
    fn from(s: &String) -> Self {
        ParamValue::from(s.as_str())
    }
}

impl From<i64> for ParamValue {
    fn from(i: i64) -> Self {
        ParamValue::Int(i)
    }
}

impl From<i32> for ParamValue {
    fn from(i: i32) -> Self {
        ParamValue::Int(i64::from(i))
    }
}

impl From<u32> for ParamValue {
    fn from(i: u32) -> Self {
        ParamValue::Int(i64::from(i))
    }
}

/// `false` is absent; `true` becomes `1`.
impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        if b {
            ParamValue::Int(1)
        } else {
            ParamValue::Absent
        }
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(ParamValue::Absent, Into::into)
    }
}

impl Serialize for ParamValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ParamValue::Text(s) if !s.is_empty() => serializer.serialize_str(s),
            ParamValue::Int(i) => serializer.serialize_i64(*i),
            ParamValue::Text(_) | ParamValue::Absent => serializer.serialize_none(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Int(i64),
    Bool(bool),
    Text(String),
}

impl<'de> Deserialize<'de> for ParamValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<RawValue>::deserialize(deserializer)? {
            None | Some(RawValue::Bool(false)) => Ok(ParamValue::Absent),
            Some(RawValue::Bool(true)) => Err(de::Error::custom(
                "`true` is not a parameter value; use a string or an integer",
            )),
            Some(RawValue::Int(i)) => Ok(ParamValue::Int(i)),
            Some(RawValue::Text(s)) => Ok(ParamValue::from(s)),
        }
    }
}

/// Ordered `name -> value` map used for both recognition output and
/// generation input.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSet(BTreeMap<String, ParamValue>);

impl ParameterSet {
    /// Empty set.
    #[must_use]
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Insert or replace a value, returning the previous one.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Option<ParamValue> {
        self.0.insert(name.into(), value.into())
    }

    /// Look up a value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.get(name)
    }

    /// Text of a present value; `None` if missing or absent.
    #[must_use]
    pub fn get_str(&self, name: &str) -> Option<String> {
        self.0.get(name).and_then(ParamValue::as_text)
    }

    /// True if `name` is a key, whatever its value.
    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, ParamValue> {
        self.0.iter()
    }

    pub fn keys(&self) -> btree_map::Keys<'_, String, ParamValue> {
        self.0.keys()
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<'a> IntoIterator for &'a ParameterSet {
    type Item = (&'a String, &'a ParamValue);
    type IntoIter = btree_map::Iter<'a, String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for ParameterSet {
    type Item = (String, ParamValue);
    type IntoIter = btree_map::IntoIter<String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Build a [`ParameterSet`] from `name => value` pairs.
///
/// ```
/// use url_mapper::{params, ParamValue};
///
/// let p = params! { "controller" => "blog", "year" => 2004, "id" => ParamValue::Absent };
/// assert_eq!(p.get_str("year").as_deref(), Some("2004"));
/// assert!(p.get("id").is_some_and(ParamValue::is_absent));
/// ```
#[macro_export]
macro_rules! params {
    () => { $crate::ParameterSet::new() };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut set = $crate::ParameterSet::new();
        $( set.insert($name, $value); )+
        set
    }};
}

/// Build a validator map from `name => regex fragment` pairs.
#[macro_export]
macro_rules! validators {
    () => { $crate::Validators::new() };
    ($($name:expr => $fragment:expr),+ $(,)?) => {{
        let mut map = $crate::Validators::new();
        $( map.insert(::std::string::String::from($name), ::std::string::String::from($fragment)); )+
        map
    }};
}
