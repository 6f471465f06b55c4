//! Pagination query parameter extractor.

use serde::{Deserialize, Serialize};

use estatehub_core::types::pagination::{DEFAULT_PAGE_SIZE, PageRequest};

/// Query parameters for paginated endpoints.
///
/// Values are kept as text so that a stray `?page=abc` falls back to the
/// defaults instead of failing the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Page number (1-based, default: 1).
    pub page: Option<String>,
    /// Items per page (default: 9, max: 100).
    pub limit: Option<String>,
}

impl PaginationParams {
    /// Converts to a `PageRequest`.
    pub fn into_page_request(self) -> PageRequest {
        let page = parse_or(self.page.as_deref(), 1);
        let limit = parse_or(self.limit.as_deref(), DEFAULT_PAGE_SIZE);
        PageRequest::new(page, limit)
    }
}

fn parse_or(value: Option<&str>, fallback: u64) -> u64 {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(fallback)
}
