use serde::Serialize;

/// Page size used by every catalog listing.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 30;

/// Pagination block attached to every listing response.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total_items: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub items_per_page: usize,
}

impl PageMeta {
    pub fn new(total_items: usize, current_page: usize) -> Self {
        let current_page = if current_page == 0 { 1 } else { current_page };

        Self {
            total_items,
            total_pages: total_items.div_ceil(DEFAULT_ITEMS_PER_PAGE),
            current_page,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}
