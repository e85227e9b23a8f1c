//! Pagination metadata carried in response headers.

use reqwest::header::HeaderMap;

pub const TOTAL_HEADER: &str = "x-tracker-pagination-total";
pub const LIMIT_HEADER: &str = "x-tracker-pagination-limit";
pub const OFFSET_HEADER: &str = "x-tracker-pagination-offset";
pub const RETURNED_HEADER: &str = "x-tracker-pagination-returned";

/// Position of one page within a listing.
///
/// The service reports pagination out-of-band in `X-Tracker-Pagination-*`
/// headers rather than in the JSON body, so this is returned next to the
/// decoded payload. Endpoints that do not paginate send no headers and yield
/// [`Pagination::default()`], which has `present` unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    /// Total number of items matching the query across all pages.
    pub total: u64,
    /// Page size the service applied.
    pub limit: u64,
    /// Offset of the first item in this page.
    pub offset: u64,
    /// Number of items in this page.
    pub returned: u64,
    /// Whether any pagination header was on the response, even one reading `0`.
    pub present: bool,
}

impl Pagination {
    /// Reads the pagination headers. Missing or unparsable values count as zero.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            total: header_u64(headers, TOTAL_HEADER),
            limit: header_u64(headers, LIMIT_HEADER),
            offset: header_u64(headers, OFFSET_HEADER),
            returned: header_u64(headers, RETURNED_HEADER),
            present: [TOTAL_HEADER, LIMIT_HEADER, OFFSET_HEADER, RETURNED_HEADER]
                .iter()
                .any(|name| headers.contains_key(*name)),
        }
    }

    /// True when the response carried any pagination header.
    pub fn is_paginated(&self) -> bool {
        self.present
    }

    pub fn has_next(&self) -> bool {
        self.next_offset().is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.offset > 0
    }

    /// Offset to request for the following page, if there is one.
    /// `None` when `offset + returned` would not fit in a `u64`.
    pub fn next_offset(&self) -> Option<u64> {
        self.offset
            .checked_add(self.returned)
            .filter(|end| *end < self.total)
    }
}

fn header_u64(headers: &HeaderMap, name: &str) -> u64 {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use reqwest::header::{HeaderMap, HeaderValue};

    use super::*;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(*value));
        }
        map
    }

    #[test]
    fn reads_all_headers() {
        let pagination = Pagination::from_headers(&headers(&[
            ("x-tracker-pagination-total", "57"),
            ("x-tracker-pagination-limit", "25"),
            ("x-tracker-pagination-offset", "25"),
            ("x-tracker-pagination-returned", "25"),
        ]));
        assert_eq!(
            pagination,
            Pagination {
                total: 57,
                limit: 25,
                offset: 25,
                returned: 25,
                present: true,
            }
        );
        assert!(pagination.is_paginated());
        assert!(pagination.has_next());
        assert!(pagination.has_previous());
        assert_eq!(pagination.next_offset(), Some(50));
    }

    #[test]
    fn last_page_has_no_next() {
        let pagination = Pagination {
            total: 57,
            limit: 25,
            offset: 50,
            returned: 7,
            present: true,
        };
        assert!(!pagination.has_next());
        assert_eq!(pagination.next_offset(), None);
    }

    #[test]
    fn missing_headers_are_zero() {
        let pagination = Pagination::from_headers(&HeaderMap::new());
        assert_eq!(pagination, Pagination::default());
        assert!(!pagination.is_paginated());
        assert!(!pagination.has_next());
        assert!(!pagination.has_previous());
    }

    #[test]
    fn garbage_header_is_ignored() {
        let pagination = Pagination::from_headers(&headers(&[
            ("x-tracker-pagination-total", "lots"),
            ("x-tracker-pagination-returned", "3"),
        ]));
        assert_eq!(pagination.total, 0);
        assert_eq!(pagination.returned, 3);
    }

    #[test]
    fn zero_valued_headers_still_count_as_paginated() {
        let pagination = Pagination::from_headers(&headers(&[
            ("x-tracker-pagination-total", "0"),
            ("x-tracker-pagination-limit", "0"),
            ("x-tracker-pagination-offset", "0"),
            ("x-tracker-pagination-returned", "0"),
        ]));
        assert!(pagination.is_paginated());
        assert!(!pagination.has_next());
        assert_eq!(pagination.next_offset(), None);
    }

    #[test]
    fn huge_header_values_do_not_overflow() {
        let pagination = Pagination::from_headers(&headers(&[
            ("x-tracker-pagination-total", "18446744073709551615"),
            ("x-tracker-pagination-offset", "18446744073709551615"),
            ("x-tracker-pagination-returned", "1"),
        ]));
        assert_eq!(pagination.total, u64::MAX);
        assert!(!pagination.has_next());
        assert_eq!(pagination.next_offset(), None);
        assert!(pagination.has_previous());
    }

    #[test]
    fn next_offset_at_the_top_of_the_range() {
        let pagination = Pagination {
            total: u64::MAX,
            offset: u64::MAX - 10,
            returned: 5,
            ..Pagination::default()
        };
        assert!(pagination.has_next());
        assert_eq!(pagination.next_offset(), Some(u64::MAX - 5));
    }
}
