use serde::{Deserialize, Serialize};

/// One server-returned slice of records plus the total row count.
///
/// `total` is the server-side count across the whole query, independent of
/// page size. The client uses it only to drive pagination controls and never
/// re-slices the data locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: usize,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            total: 0,
        }
    }
}

/// Response of `GET /users/counts` (registered customer count).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountsResponse {
    pub counts: usize,
}
