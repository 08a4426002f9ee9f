//! HTTP client for the Giphy v1 gifs API.

use url::Url;

use crate::{
    query::{Query, RandomQuery, SearchQuery, TranslateQuery, TrendingQuery},
    types::{Gif, PaginatedResponse},
    Error,
};

/// The production base URL of the gifs API.
const BASE_API_URL: &str = "https://api.giphy.com/v1/gifs";

const DEFAULT_USER_AGENT: &str = concat!("giphy_api/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the Giphy v1 gifs API.
///
/// Holds the API key and the underlying `reqwest::Client` for its whole
/// lifetime. The client is cheap to clone and safe to share across tasks;
/// nothing is mutated after construction.
#[derive(Debug, Clone)]
pub struct Client {
    /// Base URL for the API. Defaults to `https://api.giphy.com/v1/gifs`.
    base_api_url: String,
    /// The API key appended to every request.
    api_key: String,
    /// The inner http client.
    http: reqwest::Client,
}

impl Client {
    /// The public beta API key. Should only be used for testing.
    pub const PUBLIC_BETA_API_KEY: &'static str = "dc6zaTOxFJmzC";

    /// Creates a new client pointing at the production gifs API.
    pub fn new(api_key: &str) -> Self {
        Self::with_http_client(api_key, default_http_client())
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(api_key: &str, base_url: &str) -> Self {
        Self {
            base_api_url: base_url.to_string(),
            api_key: api_key.to_string(),
            http: default_http_client(),
        }
    }

    /// Creates a new client that sends requests through the given
    /// `reqwest::Client` instead of the default one.
    pub fn with_http_client(api_key: &str, http: reqwest::Client) -> Self {
        Self {
            base_api_url: BASE_API_URL.to_string(),
            api_key: api_key.to_string(),
            http,
        }
    }

    fn get_url(&self, endpoint: &str, query: Option<&impl Query>) -> Result<Url, Error> {
        let path = if endpoint.is_empty() {
            self.base_api_url.clone()
        } else {
            format!("{}/{}", self.base_api_url, endpoint)
        };
        let url = Url::parse(&path).map_err(|e| {
            tracing::error!("invalid url constructed: {e}");
            e
        })?;
        let mut url = match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        };
        url.query_pairs_mut().append_pair("api_key", &self.api_key);
        Ok(url)
    }

    async fn request<Q>(&self, endpoint: &str, query: Option<&Q>) -> Result<PaginatedResponse, Error>
    where
        Q: Query,
    {
        let url = self.get_url(endpoint, query)?;
        let resp = self.http.get(url).send().await.map_err(|e| {
            tracing::error!("failed to reach the api: {e}");
            Error::Transport(e)
        })?;
        let body = resp.text().await.map_err(|e| {
            tracing::error!("failed to read response body: {e}");
            Error::Transport(e)
        })?;

        PaginatedResponse::from_body(&body).map_err(|e| {
            tracing::error!("bad response from the api: {e}");
            e
        })
    }

    /// Searches for gifs matching a query.
    pub async fn search(&self, query: &SearchQuery) -> Result<PaginatedResponse, Error> {
        self.request("search", Some(query)).await
    }

    /// Fetches the current trending gifs.
    pub async fn trending(&self, query: &TrendingQuery) -> Result<PaginatedResponse, Error> {
        self.request("trending", Some(query)).await
    }

    /// Translates a term or phrase into a single matching gif.
    pub async fn translate(&self, query: &TranslateQuery) -> Result<Option<Gif>, Error> {
        let page = self.request("translate", Some(query)).await?;
        Ok(page.data.into_iter().next())
    }

    /// Fetches a random gif, optionally constrained by tag.
    pub async fn random(&self, query: &RandomQuery) -> Result<Option<Gif>, Error> {
        let page = self.request("random", Some(query)).await?;
        Ok(page.data.into_iter().next())
    }

    /// Fetches a single gif by its giphy id.
    pub async fn gif(&self, id: &str) -> Result<Option<Gif>, Error> {
        let page = self.request::<SearchQuery>(id, None).await?;
        Ok(page.data.into_iter().next())
    }

    /// Fetches multiple gifs by id with one request.
    pub async fn gifs(&self, ids: &[&str]) -> Result<Vec<Gif>, Error> {
        let query = IdsQuery {
            ids: ids.join(","),
        };
        let page = self.request("", Some(&query)).await?;
        Ok(page.data)
    }
}

/// Comma-joined id list for the multi-id lookup, which lives at the bare
/// base path.
struct IdsQuery {
    ids: String,
}

impl Query for IdsQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut().append_pair("ids", self.ids.as_str());
        url
    }
}

fn default_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(DEFAULT_USER_AGENT)
        .build()
        .expect("failed to build http client")
}
