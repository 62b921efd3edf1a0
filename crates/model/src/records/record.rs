use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single record moving through the ingest pipeline: an opaque byte
/// payload plus a small string header map. The pipeline never interprets
/// the body; transforms read it and annotate the record through headers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Record {
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl Record {
    pub fn new(body: impl Into<Vec<u8>>) -> Self {
        Record {
            headers: HashMap::new(),
            body: body.into(),
        }
    }

    pub fn with_headers(body: impl Into<Vec<u8>>, headers: HashMap<String, String>) -> Self {
        Record {
            headers,
            body: body.into(),
        }
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }

    pub fn set_header(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(key.into(), value.into());
    }

    pub fn has_header(&self, key: &str) -> bool {
        self.headers.contains_key(key)
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn size_bytes(&self) -> usize {
        self.body.len()
            + self
                .headers
                .iter()
                .map(|(k, v)| k.len() + v.len())
                .sum::<usize>()
    }
}
