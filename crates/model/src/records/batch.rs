use crate::records::record::Record;

/// An ordered collection of records handed to the pipeline together.
/// Batch processing is strictly sequential; the batch carries no
/// ordering or delivery guarantees of its own.
#[derive(Debug, Clone)]
pub struct Batch {
    pub id: String,
    pub records: Vec<Record>,
    pub ts: chrono::DateTime<chrono::Utc>,
}

impl Batch {
    pub fn new(id: impl Into<String>, records: Vec<Record>) -> Self {
        Batch {
            id: id.into(),
            records,
            ts: chrono::Utc::now(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn size_bytes(&self) -> usize {
        self.records.iter().map(|r| r.size_bytes()).sum()
    }
}
