// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Records as the host engine hands them to stages.
//!
//! Keys and values are fully generic. Streams that carry absent keys or
//! values model them as `Option` types, and every decorator in this crate
//! passes them through untouched.

/// A single header entry. A header may be present with an absent value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub key: String,
    pub value: Option<Vec<u8>>,
}

/// Ordered record headers. Keys may repeat, the last entry wins on lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers(Vec<Header>);

impl Headers {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a header, keeping earlier entries with the same key.
    pub fn add(&mut self, key: impl Into<String>, value: Option<Vec<u8>>) {
        self.0.push(Header {
            key: key.into(),
            value,
        });
    }

    /// Remove every header with the given key.
    pub fn remove(&mut self, key: &str) {
        self.0.retain(|header| header.key != key);
    }

    /// Replace all headers named `key` with a single UTF-8 encoded entry.
    pub fn set_str(&mut self, key: &str, value: Option<&str>) {
        self.remove(key);
        self.add(key, value.map(|v| v.as_bytes().to_vec()));
    }

    /// Value of the last header named `key`.
    ///
    /// `None` if no such header exists, `Some(None)` if it exists without a value.
    pub fn last_value(&self, key: &str) -> Option<Option<&[u8]>> {
        self.0
            .iter()
            .rev()
            .find(|header| header.key == key)
            .map(|header| header.value.as_deref())
    }

    /// Like [`Headers::last_value`], decoded as UTF-8. Invalid UTF-8 reads as absent.
    pub fn last_str(&self, key: &str) -> Option<Option<&str>> {
        self.last_value(key)
            .map(|value| value.and_then(|bytes| std::str::from_utf8(bytes).ok()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Header> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Stream position of the record currently being processed.
///
/// Each field is independently optional: punctuation callbacks and records
/// produced upstream in the same task may not have all of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordMetadata {
    pub topic: Option<String>,
    pub partition: Option<i32>,
    pub offset: Option<i64>,
}

impl RecordMetadata {
    pub fn new(topic: impl Into<String>, partition: i32, offset: i64) -> Self {
        Self {
            topic: Some(topic.into()),
            partition: Some(partition),
            offset: Some(offset),
        }
    }

    /// No position information at all.
    pub fn unavailable() -> Self {
        Self::default()
    }
}

/// A keyed record with its event timestamp (epoch millis) and headers.
#[derive(Debug, Clone, PartialEq)]
pub struct Record<K, V> {
    pub key: K,
    pub value: V,
    pub timestamp: i64,
    pub headers: Headers,
}

impl<K, V> Record<K, V> {
    pub fn new(key: K, value: V, timestamp: i64) -> Self {
        Self {
            key,
            value,
            timestamp,
            headers: Headers::new(),
        }
    }

    pub fn with_key<KR>(self, key: KR) -> Record<KR, V> {
        Record {
            key,
            value: self.value,
            timestamp: self.timestamp,
            headers: self.headers,
        }
    }

    pub fn with_value<VR>(self, value: VR) -> Record<K, VR> {
        Record {
            key: self.key,
            value,
            timestamp: self.timestamp,
            headers: self.headers,
        }
    }

    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = headers;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_str_replaces_existing_entries() {
        let mut headers = Headers::new();
        headers.add("a", Some(b"first".to_vec()));
        headers.add("a", Some(b"second".to_vec()));
        headers.add("b", None);

        headers.set_str("a", Some("third"));

        assert_eq!(headers.len(), 2);
        assert_eq!(headers.last_str("a"), Some(Some("third")));
    }

    #[test]
    fn test_header_present_without_value() {
        let mut headers = Headers::new();
        headers.set_str("empty", None);

        assert_eq!(headers.last_value("empty"), Some(None));
        assert_eq!(headers.last_value("missing"), None);
    }

    #[test]
    fn test_last_entry_wins_on_lookup() {
        let mut headers = Headers::new();
        headers.add("k", Some(b"1".to_vec()));
        headers.add("k", Some(b"2".to_vec()));
        assert_eq!(headers.last_str("k"), Some(Some("2")));
    }

    #[test]
    fn test_with_key_keeps_timestamp_and_headers() {
        let mut headers = Headers::new();
        headers.add("h", None);
        let record = Record::new(1, "foo", 42).with_headers(headers.clone());

        let rekeyed = record.with_key("one").with_value(3usize);

        assert_eq!(rekeyed.key, "one");
        assert_eq!(rekeyed.value, 3);
        assert_eq!(rekeyed.timestamp, 42);
        assert_eq!(rekeyed.headers, headers);
    }
}
