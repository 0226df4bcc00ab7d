use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use crate::core::error::{Error, Result};
use crate::domain::{points, prelude::*};

/// In-memory store of submitted receipts, keyed by generated id.
///
/// Receipts are never updated or removed. Writers hold the lock only
/// while inserting, and readers only while looking up; points are
/// calculated after the lock is released.
///
#[derive(Debug, Default)]
pub struct ReceiptStore {
    receipts: RwLock<HashMap<String, Arc<Receipt>>>,
}

impl ReceiptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a receipt and returns its newly generated id.
    ///
    /// Fails with [`Error::InvalidInput`] if a required field is empty; in
    /// that case nothing is stored.
    ///
    pub fn submit(&self, receipt: Receipt) -> Result<String> {
        let missing = receipt.missing_fields();
        if !missing.is_empty() {
            return Err(Error::missing_fields(&missing));
        }

        let id = Uuid::new_v4().to_string();
        self.write().insert(id.clone(), Arc::new(receipt));
        tracing::debug!(%id, "receipt stored");

        Ok(id)
    }

    /// Calculates the points for the receipt stored under `id`.
    pub fn points(&self, id: &str) -> Result<i64> {
        let receipt = self
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| Error::NotFound(id.to_string()))?;

        Ok(points::calculate(&receipt))
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Entries are inserted whole, so a panic elsewhere can never leave the
    // map half-written; a poisoned lock is safe to keep using.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Arc<Receipt>>> {
        self.receipts.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Arc<Receipt>>> {
        self.receipts.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn receipt() -> Receipt {
        Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            total: "6.49".to_string(),
            items: vec![Item {
                short_description: "Mountain Dew 12PK".to_string(),
                price: "6.49".to_string(),
            }],
        }
    }

    #[test]
    fn submitted_receipt_scores_like_calculation() {
        let store = ReceiptStore::new();
        let receipt = receipt();
        let id = store.submit(receipt.clone()).unwrap();

        assert_eq!(store.points(&id), Ok(points::calculate(&receipt)));
        assert_eq!(store.points(&id), Ok(12));
    }

    #[test]
    fn unknown_id_is_not_found() {
        let store = ReceiptStore::new();
        store.submit(receipt()).unwrap();

        assert_eq!(
            store.points("non-existent-id"),
            Err(Error::NotFound("non-existent-id".to_string()))
        );
    }

    #[test]
    fn incomplete_receipt_is_rejected_and_not_stored() {
        let store = ReceiptStore::new();
        let incomplete = Receipt {
            retailer: "Target".to_string(),
            ..Default::default()
        };

        let err = store.submit(incomplete).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(err.to_string().contains("purchaseDate, purchaseTime, total, items"));
        assert!(store.is_empty());
    }

    #[test]
    fn malformed_values_are_stored_and_score_zero() {
        let store = ReceiptStore::new();
        let id = store
            .submit(Receipt {
                retailer: "&".to_string(),
                purchase_date: "yesterday".to_string(),
                purchase_time: "noon".to_string(),
                total: "lots".to_string(),
                items: vec![Item {
                    short_description: "ab".to_string(),
                    price: "cheap".to_string(),
                }],
            })
            .unwrap();

        assert_eq!(store.points(&id), Ok(0));
    }

    #[test]
    fn each_submission_gets_a_new_id() {
        let store = ReceiptStore::new();
        let first = store.submit(receipt()).unwrap();
        let second = store.submit(receipt()).unwrap();

        assert_ne!(first, second);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn concurrent_submissions_are_all_kept() {
        let store = ReceiptStore::new();
        let threads = 16;
        let per_thread = 50;

        let ids: Vec<String> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..threads)
                .map(|_| {
                    scope.spawn(|| {
                        (0..per_thread)
                            .map(|_| store.submit(receipt()).unwrap())
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|handle| handle.join().unwrap())
                .collect()
        });

        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), threads * per_thread);
        assert_eq!(store.len(), threads * per_thread);
        assert!(ids.iter().all(|id| store.points(id) == Ok(12)));
    }
}
