//! Shared search/sort/pagination contract for catalog listings.
//!
//! Every list endpoint resolves its caller-supplied [`ListRequest`] against a
//! per-resource [`ListConfig`] and returns a [`Page`] envelope, so pagination
//! arithmetic and sort-field fallback behave the same everywhere.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListError {
    #[error("Invalid value for {field}")]
    InvalidArgument { field: &'static str },
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// A resolved sort: the field is guaranteed to be one of the resource's
/// sortable fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

/// Raw query parameters as sent by the caller. Everything is optional;
/// [`ListRequest::resolve`] fills the gaps from the resource config.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ListRequest {
    pub search: Option<String>,
    pub sort_field: Option<String>,
    pub sort_direction: Option<SortDirection>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

/// Per-resource listing defaults and the whitelist of sortable fields.
pub struct ListConfig {
    pub default_sort_field: &'static str,
    pub default_per_page: i64,
    pub sortable_fields: &'static [&'static str],
}

/// Validated listing parameters ready for the repository.
#[derive(Clone, Debug, PartialEq)]
pub struct ListParams {
    pub search: Option<String>,
    pub sort: SortSpec,
    pub page: i64,
    pub per_page: i64,
}

impl ListParams {
    /// Zero-based row offset for the page. Saturates on overflow so an
    /// absurdly large page number still lands past the end of the result
    /// set and yields an empty page.
    pub fn offset(&self) -> i64 {
        (self.page - 1)
            .checked_mul(self.per_page)
            .unwrap_or(i64::MAX)
    }
}

impl ListRequest {
    /// Validates pagination and resolves the sort against `config`.
    ///
    /// An unknown sort field falls back to the resource default rather than
    /// erroring, so stale client bookmarks keep working. Out-of-range `page`
    /// or `per_page` values are rejected.
    pub fn resolve(&self, config: &ListConfig) -> Result<ListParams, ListError> {
        let page = self.page.unwrap_or(1);
        if page < 1 {
            return Err(ListError::InvalidArgument { field: "page" });
        }

        let per_page = self.per_page.unwrap_or(config.default_per_page);
        if per_page < 1 {
            return Err(ListError::InvalidArgument { field: "per_page" });
        }

        let sort = match self
            .sort_field
            .as_deref()
            .filter(|field| config.sortable_fields.contains(field))
        {
            Some(field) => SortSpec {
                field: field.to_string(),
                direction: self.sort_direction.unwrap_or_default(),
            },
            None => SortSpec {
                field: config.default_sort_field.to_string(),
                direction: SortDirection::default(),
            },
        };

        let search = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(ToString::to_string);

        Ok(ListParams {
            search,
            sort,
            page,
            per_page,
        })
    }
}

/// One page of results together with the pagination totals the caller needs
/// to render page controls.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub current_page: i64,
    pub last_page: i64,
    pub per_page: i64,
    pub total: i64,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, total: i64, params: &ListParams) -> Self {
        Self {
            data,
            current_page: params.page,
            // An empty result set still reports one page.
            last_page: ((total + params.per_page - 1) / params.per_page).max(1),
            per_page: params.per_page,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: ListConfig = ListConfig {
        default_sort_field: "id",
        default_per_page: 10,
        sortable_fields: &["id", "name", "created_at"],
    };

    #[test]
    fn resolve_applies_defaults() {
        let params = ListRequest::default().resolve(&CONFIG).unwrap();

        assert_eq!(params.page, 1);
        assert_eq!(params.per_page, 10);
        assert_eq!(params.sort.field, "id");
        assert_eq!(params.sort.direction, SortDirection::Asc);
        assert_eq!(params.search, None);
    }

    #[test]
    fn resolve_rejects_out_of_range_pagination() {
        let request = ListRequest {
            page: Some(0),
            ..Default::default()
        };
        assert_eq!(
            request.resolve(&CONFIG).unwrap_err(),
            ListError::InvalidArgument { field: "page" }
        );

        let request = ListRequest {
            per_page: Some(-5),
            ..Default::default()
        };
        assert_eq!(
            request.resolve(&CONFIG).unwrap_err(),
            ListError::InvalidArgument { field: "per_page" }
        );
    }

    #[test]
    fn unknown_sort_field_falls_back_to_default() {
        let request = ListRequest {
            sort_field: Some("password".to_string()),
            sort_direction: Some(SortDirection::Desc),
            ..Default::default()
        };
        let params = request.resolve(&CONFIG).unwrap();

        assert_eq!(params.sort.field, "id");
        assert_eq!(params.sort.direction, SortDirection::Asc);
    }

    #[test]
    fn known_sort_field_keeps_requested_direction() {
        let request = ListRequest {
            sort_field: Some("name".to_string()),
            sort_direction: Some(SortDirection::Desc),
            ..Default::default()
        };
        let params = request.resolve(&CONFIG).unwrap();

        assert_eq!(params.sort.field, "name");
        assert_eq!(params.sort.direction, SortDirection::Desc);
    }

    #[test]
    fn blank_search_is_dropped() {
        let request = ListRequest {
            search: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(request.resolve(&CONFIG).unwrap().search, None);

        let request = ListRequest {
            search: Some("  aspirine ".to_string()),
            ..Default::default()
        };
        assert_eq!(
            request.resolve(&CONFIG).unwrap().search,
            Some("aspirine".to_string())
        );
    }

    #[test]
    fn offset_is_zero_based() {
        let request = ListRequest {
            page: Some(3),
            per_page: Some(25),
            ..Default::default()
        };
        let params = request.resolve(&CONFIG).unwrap();
        assert_eq!(params.offset(), 50);
    }

    #[test]
    fn offset_saturates_instead_of_overflowing() {
        let request = ListRequest {
            page: Some(i64::MAX),
            per_page: Some(25),
            ..Default::default()
        };
        let params = request.resolve(&CONFIG).unwrap();
        assert_eq!(params.offset(), i64::MAX);
    }

    #[test]
    fn page_reports_last_page_rounding_up() {
        let request = ListRequest {
            per_page: Some(10),
            ..Default::default()
        };
        let params = request.resolve(&CONFIG).unwrap();

        let page = Page::new(vec![1, 2, 3], 23, &params);
        assert_eq!(page.last_page, 3);
        assert_eq!(page.total, 23);
        assert_eq!(page.current_page, 1);

        // An exact multiple does not round up to an extra page.
        let page = Page::new(vec![1, 2, 3], 30, &params);
        assert_eq!(page.last_page, 3);
    }

    #[test]
    fn empty_result_set_still_has_one_page() {
        let params = ListRequest::default().resolve(&CONFIG).unwrap();
        let page: Page<i32> = Page::new(vec![], 0, &params);

        assert_eq!(page.last_page, 1);
        assert_eq!(page.total, 0);
        assert!(page.data.is_empty());
    }
}
