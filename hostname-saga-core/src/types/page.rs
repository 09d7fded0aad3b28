use serde::{Deserialize, Serialize};

/// Cursor pagination request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page size.
    pub first: u32,
    /// Cursor returned by the previous page; `None` for the first page.
    pub after: Option<String>,
}

impl PageRequest {
    /// First page of `first` items; a size of 0 is raised to 1.
    pub fn first(first: u32) -> Self {
        Self {
            first: first.max(1),
            after: None,
        }
    }
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Cursor for the next page; `None` when exhausted.
    pub next_cursor: Option<String>,
}
