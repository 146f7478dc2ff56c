use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::design::{Design, DesignStatus};
use crate::domain::user::User;
use crate::pagination::PageMeta;

/// Query parameters accepted by the design listing endpoints.
///
/// Raw strings are kept as received; the accessors apply the permissive
/// defaults, so malformed input never fails the request.
#[derive(Debug, Default, Deserialize)]
pub struct DesignListParams {
    pub page: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "searchQuery")]
    pub search_query: Option<String>,
}

impl DesignListParams {
    /// Effective page number. Absent, non-numeric, or non-positive input
    /// falls back to the first page.
    pub fn page(&self) -> usize {
        self.page
            .as_deref()
            .and_then(|page| page.parse::<usize>().ok())
            .filter(|&page| page > 0)
            .unwrap_or(1)
    }

    /// Requested category; `"all"` disables category filtering.
    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or("all")
    }

    /// Trimmed search text; empty input disables the name filter.
    pub fn search_query(&self) -> &str {
        self.search_query.as_deref().unwrap_or("").trim()
    }
}

/// Result payload returned by [`crate::services::designs::list_designs`].
#[derive(Debug)]
pub struct DesignList {
    /// Total number of designs matching the filter.
    pub total: usize,
    /// Effective page number the rows were read from.
    pub page: usize,
    /// Page of designs, each with its author.
    pub items: Vec<(Design, User)>,
}

#[derive(Debug, Serialize)]
pub struct AuthorPayload {
    pub name: String,
    pub image: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignPayload {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub subcategory: String,
    pub status: DesignStatus,
    pub tags: Vec<String>,
    pub image: String,
    pub author_id: i32,
    pub created_at: NaiveDateTime,
    pub author: AuthorPayload,
}

/// Wire shape of a listing response: `{ data, meta }`.
#[derive(Debug, Serialize)]
pub struct DesignListBody {
    pub data: Vec<DesignPayload>,
    pub meta: PageMeta,
}

impl From<(Design, User)> for DesignPayload {
    fn from((design, author): (Design, User)) -> Self {
        Self {
            id: design.id,
            name: design.name,
            category: design.category,
            subcategory: design.subcategory,
            status: design.status,
            tags: design.tags,
            image: design.image,
            author_id: design.author_id,
            created_at: design.created_at,
            author: AuthorPayload {
                name: author.name,
                image: author.image,
            },
        }
    }
}

impl From<DesignList> for DesignListBody {
    fn from(list: DesignList) -> Self {
        let meta = PageMeta::new(list.total, list.page);

        Self {
            data: list.items.into_iter().map(Into::into).collect(),
            meta,
        }
    }
}
