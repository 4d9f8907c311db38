use serde::Serialize;

pub const DEFAULT_LIMIT: u32 = 20;
pub const MAX_LIMIT: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: u32,
    pub offset: u64,
}

impl PageRequest {
    /// A zero limit falls back to the default; larger limits are capped.
    pub fn normalized(limit: Option<u32>, offset: Option<u64>) -> Self {
        let limit = match limit {
            None | Some(0) => DEFAULT_LIMIT,
            Some(limit) => limit.min(MAX_LIMIT),
        };
        Self {
            limit,
            offset: offset.unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OffsetPage<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub limit: u32,
    pub offset: u64,
    pub has_next: bool,
}

impl<T> OffsetPage<T> {
    pub fn new(items: Vec<T>, total: u64, page: PageRequest) -> Self {
        let has_next = page.offset + u64::from(page.limit) < total;
        Self {
            items,
            total,
            limit: page.limit,
            offset: page.offset,
            has_next,
        }
    }
}
