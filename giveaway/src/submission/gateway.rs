use super::errors::StoreError;
use super::model::Entry;

/// Result of an insert attempt. A duplicate email is reported as its own
/// variant so callers never have to look at driver error codes.
#[derive(Debug)]
pub enum InsertOutcome {
    Inserted,
    DuplicateKey,
    Failed(StoreError)
}

/// Storage behind the giveaway: a single `entry` table with unique emails.
pub trait EntryGateway: Send + Sync {
    /// Total number of stored entries.
    fn count(&self) -> Result<i64, StoreError>;

    /// Stores `entry` with its creation and update time set to now.
    fn insert(&self, entry: &Entry) -> InsertOutcome;
}

impl<'a, G: EntryGateway + ?Sized> EntryGateway for &'a G {
    fn count(&self) -> Result<i64, StoreError> {
        (**self).count()
    }

    fn insert(&self, entry: &Entry) -> InsertOutcome {
        (**self).insert(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shared<T: Send + Sync + ?Sized>(_: &T) {}

    #[test]
    fn test_gateway_objects_are_shareable() {
        fn check(gateway: &dyn EntryGateway) {
            shared(gateway);
        }
        let _ = check;
    }
}
