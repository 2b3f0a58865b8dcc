// Health check service implementation

use crate::db::LedgerStore;

pub struct HealthChecker<'a, S> {
    store: &'a S,
}

impl<'a, S: LedgerStore> HealthChecker<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// The ledger is reachable when a read scope can be opened
    pub async fn check(&self) -> bool {
        match self.store.begin_read().await {
            Ok(_) => true,
            Err(err) => {
                tracing::warn!("Health check failed: {}", err);
                false
            }
        }
    }
}
