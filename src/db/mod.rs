// Database Module
// Read-only access to the ledger tables: the store seam, its SeaORM backend and
// an in-memory backend.

pub mod error;
pub mod memory;
pub mod pool;
pub mod repositories;
pub mod store;

pub use error::DbError;
pub use memory::{MemoryLedger, MemoryLedgerStore, StoredValidator};
pub use pool::DbPool;
pub use repositories::SeaOrmLedgerStore;
pub use store::{LedgerReader, LedgerStore};
