use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

fn def_page() -> i64 {
    1
}

fn def_page_size() -> i64 {
    25
}

/// Query parameters for paginated listing endpoints
#[derive(Deserialize, Clone, Copy, IntoParams)]
pub struct Pagination {
    /// 1 indexed page to fetch
    #[serde(default = "def_page")]
    pub page: i64,

    #[serde(default = "def_page_size")]
    pub page_size: i64,
}

impl Pagination {
    /// clamps the page and page size to sane bounds, listing screens
    /// never show more than a hundred rows
    pub fn clamped(self) -> Pagination {
        Pagination {
            page: self.page.max(1),
            page_size: self.page_size.clamp(1, 100),
        }
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.page_size
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[aliases(PaginatedVehicles = PaginationResult<crate::database::models::Vehicle>)]
pub struct PaginationResult<T> {
    pub page: i64,
    pub page_size: i64,
    pub item_count: i64,
    pub page_count: i64,
    pub records: Vec<T>,
}

impl<T> PaginationResult<T> {
    pub fn new(pagination: Pagination, item_count: i64, records: Vec<T>) -> PaginationResult<T> {
        PaginationResult {
            page: pagination.page,
            page_size: pagination.page_size,
            item_count,
            page_count: (item_count + pagination.page_size - 1) / pagination.page_size,
            records,
        }
    }
}
