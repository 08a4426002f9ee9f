//! Shared query infrastructure: the [`Query`] trait and [`QueryCommon`] fields.

use url::Url;

use crate::types::Rating;

/// Trait implemented by all query builders. Serializes a query's parameters
/// into the request URL.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;
}

/// Fields shared by the list query types: paging and the rating ceiling.
#[derive(Clone, Copy, Default)]
pub struct QueryCommon {
    /// Results per page. The API accepts 1 to 100; out-of-range values are
    /// passed through and rejected server-side. `None` uses the API default.
    pub limit: Option<u32>,
    /// Offset of the first result. `None` uses the API default.
    pub offset: Option<u32>,
    /// Maximum user discretion rating. `None` applies no ceiling.
    pub rating: Option<Rating>,
}

impl QueryCommon {
    /// Appends the common paging and rating parameters to the URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(limit) = self.limit {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        };
        if let Some(offset) = self.offset {
            url.query_pairs_mut()
                .append_pair("offset", &offset.to_string());
        };
        if let Some(rating) = self.rating {
            url.query_pairs_mut().append_pair("rating", rating.as_str());
        };
        url
    }
}
