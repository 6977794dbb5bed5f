use super::model::ProductRecord;

/// Read-only product table loaded once per process.
pub trait ProductRegistry: Send + Sync {
    /// Returns the record whose GTIN equals the trimmed `code`, if any.
    fn lookup(&self, code: &str) -> Option<ProductRecord>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
