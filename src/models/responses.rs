//! Flat, insertion-ordered answer record for one evaluator.

use std::fmt;

/// A single recorded answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseValue {
    Text(String),
    Integer(i64),
}

impl fmt::Display for ResponseValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseValue::Text(s) => f.write_str(s),
            ResponseValue::Integer(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for ResponseValue {
    fn from(value: &str) -> Self {
        ResponseValue::Text(value.to_string())
    }
}

impl From<String> for ResponseValue {
    fn from(value: String) -> Self {
        ResponseValue::Text(value)
    }
}

impl From<i64> for ResponseValue {
    fn from(value: i64) -> Self {
        ResponseValue::Integer(value)
    }
}

impl From<u32> for ResponseValue {
    fn from(value: u32) -> Self {
        ResponseValue::Integer(i64::from(value))
    }
}

impl From<u8> for ResponseValue {
    fn from(value: u8) -> Self {
        ResponseValue::Integer(i64::from(value))
    }
}

/// Column order is the order keys were first written; rewriting a key keeps
/// its column and replaces the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseStore {
    entries: Vec<(String, ResponseValue)>,
}

impl ResponseStore {
    pub fn record(&mut self, key: impl Into<String>, value: impl Into<ResponseValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&ResponseValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Text form of a value, for keys recorded as text
    pub fn get_text(&self, key: &str) -> Option<&str> {
        match self.get(key) {
            Some(ResponseValue::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResponseValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Record keys for the PART 1 answer at zero-based `index`
pub fn case_keys(index: usize) -> (String, String) {
    let n = index + 1;
    (format!("Case_{}_File", n), format!("Case_{}_Choice", n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_get() {
        let mut store = ResponseStore::default();
        store.record("Evaluator_Name", "Kim");
        store.record("Experience", 7u32);
        assert_eq!(store.get_text("Evaluator_Name"), Some("Kim"));
        assert_eq!(store.get("Experience"), Some(&ResponseValue::Integer(7)));
        assert_eq!(store.get_text("Experience"), None);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut store = ResponseStore::default();
        store.record("Case_1_Choice", "Method A");
        store.record("Case_2_Choice", "Method B");
        store.record("Case_1_Choice", "No significant difference");

        assert_eq!(store.len(), 2);
        let keys: Vec<&str> = store.keys().collect();
        assert_eq!(keys, vec!["Case_1_Choice", "Case_2_Choice"]);
        assert_eq!(store.get_text("Case_1_Choice"), Some("No significant difference"));
    }

    #[test]
    fn test_case_keys_are_one_based() {
        assert_eq!(
            case_keys(0),
            ("Case_1_File".to_string(), "Case_1_Choice".to_string())
        );
        assert_eq!(case_keys(2).1, "Case_3_Choice");
    }

    #[test]
    fn test_value_display() {
        assert_eq!(ResponseValue::from("a,b").to_string(), "a,b");
        assert_eq!(ResponseValue::from(3u8).to_string(), "3");
    }
}
