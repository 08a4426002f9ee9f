use url::Url;

use crate::types::Rating;

use super::common::Query;

/// Query for the `translate` endpoint.
pub struct TranslateQuery {
    /// The term or phrase to translate into a gif.
    pub s: String,
    /// Maximum user discretion rating. `None` applies no ceiling.
    pub rating: Option<Rating>,
}

impl TranslateQuery {
    /// Creates a translate query for the given term.
    pub fn new(term: &str) -> Self {
        Self {
            s: term.to_string(),
            rating: None,
        }
    }

    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = Some(rating);
        self
    }
}

impl Query for TranslateQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut().append_pair("s", self.s.as_str());
        if let Some(rating) = self.rating {
            url.query_pairs_mut().append_pair("rating", rating.as_str());
        };
        url
    }
}
