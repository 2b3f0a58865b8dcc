// API request/response models
use serde::{Deserialize, Deserializer};

pub mod ledger;
pub mod views;

pub use ledger::*;
pub use views::*;

/// Custom deserializer to convert string to u64
fn deserialize_string_to_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let s: String = String::deserialize(deserializer)?;
    s.parse::<u64>().map_err(serde::de::Error::custom)
}

/// Pagination parameters for the listing endpoints (1-based pages)
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct PaginationParams {
    #[serde(default = "default_page", deserialize_with = "deserialize_string_to_u64")]
    pub page: u64,
    #[serde(default = "default_limit", deserialize_with = "deserialize_string_to_u64")]
    pub limit: u64,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
        }
    }
}

impl PaginationParams {
    pub fn new(limit: u64, page: u64) -> Self {
        Self { page, limit }
    }

    /// Page 0 is read as page 1 and the limit is clamped to `1..=max_limit`
    pub fn normalized(self, max_limit: u64) -> Self {
        Self {
            page: self.page.max(1),
            limit: self.limit.clamp(1, max_limit.max(1)),
        }
    }

    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    20
}
