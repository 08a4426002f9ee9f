use url::Url;

use crate::types::Rating;

use super::common::{Query, QueryCommon};

/// Query for the `trending` endpoint.
#[derive(Default)]
pub struct TrendingQuery {
    pub common: QueryCommon,
}

impl TrendingQuery {
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

impl Query for TrendingQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        self.common.add_to_url(url)
    }
}
