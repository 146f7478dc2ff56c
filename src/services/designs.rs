use crate::domain::auth::AuthenticatedUser;
use crate::dto::design::{DesignList, DesignListParams};
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::repository::{DesignListQuery, DesignReader};
use crate::services::{ServiceError, ServiceResult};

/// Which designs a request is allowed to see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesignVisibility {
    /// Anonymous catalog browsing: published designs only, any author.
    PublicOnly,
    /// Authenticated listing: administrators see every design of every
    /// status; everyone else sees only their own, drafts included.
    OwnerOrAdmin(AuthenticatedUser),
}

/// Returns the requested page of designs under the given visibility rule.
pub fn list_designs<R>(
    repo: &R,
    visibility: DesignVisibility,
    params: &DesignListParams,
) -> ServiceResult<DesignList>
where
    R: DesignReader + ?Sized,
{
    let page = params.page();
    let mut query = DesignListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);

    match visibility {
        DesignVisibility::PublicOnly => query = query.published_only(),
        DesignVisibility::OwnerOrAdmin(principal) if !principal.is_admin() => {
            query = query.author(principal.id);
        }
        DesignVisibility::OwnerOrAdmin(_) => {}
    }

    let category = params.category();
    if category != "all" {
        query = query.category(category);
    }

    let search = params.search_query();
    if !search.is_empty() {
        query = query.search(search);
    }

    let (total, items) = repo.list_designs(query).map_err(ServiceError::from)?;

    Ok(DesignList { total, page, items })
}
