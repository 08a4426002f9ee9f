use url::Url;

use crate::types::Rating;

use super::common::{Query, QueryCommon};

/// Query for the `search` endpoint.
pub struct SearchQuery {
    pub common: QueryCommon,
    /// The search phrase.
    pub q: String,
}

impl SearchQuery {
    /// Creates a search query for the given phrase.
    pub fn new(q: &str) -> Self {
        Self {
            common: QueryCommon::default(),
            q: q.to_string(),
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.common.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.common.offset = Some(offset);
        self
    }

    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.common.rating = Some(rating);
        self
    }
}

impl Query for SearchQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut().append_pair("q", self.q.as_str());
        self.common.add_to_url(&url)
    }
}
