use model::records::record::Record;

/// A single in-place record transformation step. The host drives the
/// lifecycle: `initialize` once before the first record, `apply` or
/// `apply_batch` per record or batch, `close` once at shutdown.
pub trait Transform: Send + Sync {
    /// Called once before the first record. Nothing to acquire by default.
    fn initialize(&mut self) {}

    /// Transform one record in place.
    fn apply(&self, record: &mut Record);

    /// Delegates to `apply` for each record, strictly in order. Callers
    /// needing parallel batch throughput parallelize outside the step.
    fn apply_batch(&self, records: &mut [Record]) {
        for record in records.iter_mut() {
            self.apply(record);
        }
    }

    /// Called once at shutdown. Nothing to release by default.
    fn close(&mut self) {}
}

pub trait TransformPipelineExt {
    fn add_if<T, F>(self, condition: bool, factory: F) -> Self
    where
        T: Transform + 'static,
        F: FnOnce() -> T;
}

/// Ordered composition of transform steps. Each record passes through
/// every step in insertion order.
pub struct TransformPipeline {
    transforms: Vec<Box<dyn Transform>>,
}

impl TransformPipeline {
    pub fn new() -> Self {
        Self {
            transforms: Vec::new(),
        }
    }

    pub fn add_transform<T: Transform + 'static>(mut self, transform: T) -> Self {
        self.transforms.push(Box::new(transform));
        self
    }

    pub fn initialize(&mut self) {
        for transform in self.transforms.iter_mut() {
            transform.initialize();
        }
    }

    pub fn apply(&self, record: &mut Record) {
        for transform in self.transforms.iter() {
            transform.apply(record);
        }
    }

    pub fn apply_batch(&self, records: &mut [Record]) {
        for transform in self.transforms.iter() {
            transform.apply_batch(records);
        }
    }

    pub fn close(&mut self) {
        for transform in self.transforms.iter_mut() {
            transform.close();
        }
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }
}

impl TransformPipelineExt for TransformPipeline {
    fn add_if<T, F>(mut self, condition: bool, factory: F) -> Self
    where
        T: Transform + 'static,
        F: FnOnce() -> T,
    {
        if condition {
            self = self.add_transform(factory());
        }
        self
    }
}

impl Default for TransformPipeline {
    fn default() -> Self {
        Self::new()
    }
}
