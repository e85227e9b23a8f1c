//! Shared query infrastructure: the [`Query`] trait and the [`QueryCommon`] paging fields.

use url::Url;

/// Trait implemented by all query builders. Provides query-pair
/// serialization and shared builder methods for paging.
pub trait Query {
    /// Returns this query's parameters. Unset fields are left out.
    fn to_query_pairs(&self) -> Vec<(String, String)>;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Sets the maximum number of results to return.
    fn with_limit(mut self, limit: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().limit = Some(limit);
        self
    }

    /// Sets the number of results to skip. `with_offset(0)` is sent explicitly.
    fn with_offset(mut self, offset: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().offset = Some(offset);
        self
    }

    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        let pairs = self.to_query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        url
    }
}

/// Paging fields shared by all listing queries. `None` means "use the service default".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QueryCommon {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl QueryCommon {
    /// Appends `limit` and `offset`, in that order, when set.
    pub fn push_pairs(&self, params: &mut Vec<(String, String)>) {
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(offset) = self.offset {
            params.push(("offset".to_string(), offset.to_string()));
        }
    }
}

/// Pushes a string parameter unless it is empty.
pub(crate) fn push_str(params: &mut Vec<(String, String)>, key: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        params.push((key.to_string(), value.to_string()));
    }
}
