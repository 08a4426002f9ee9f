use url::Url;

use crate::types::Rating;

use super::common::Query;

/// Query for the `random` endpoint.
#[derive(Default)]
pub struct RandomQuery {
    /// Tag the random gif should have. `None` draws from everything.
    pub tag: Option<String>,
    /// Maximum user discretion rating. `None` applies no ceiling.
    pub rating: Option<Rating>,
}

impl RandomQuery {
    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tag = Some(tag.to_string());
        self
    }

    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = Some(rating);
        self
    }
}

impl Query for RandomQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(tag) = &self.tag {
            url.query_pairs_mut().append_pair("tag", tag.as_str());
        };
        if let Some(rating) = self.rating {
            url.query_pairs_mut().append_pair("rating", rating.as_str());
        };
        url
    }
}
