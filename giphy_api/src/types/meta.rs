use serde::Deserialize;
use serde_json::Value;

use crate::{types::Gif, Error};

#[derive(Deserialize)]
struct Meta {
    status: i64,
    msg: String,
}

/// One page of a list result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    /// The count of the items retrieved.
    pub count: u64,
    /// The offset of the first item.
    pub offset: u64,
}

/// The response envelope shared by every endpoint.
#[derive(Deserialize)]
struct Envelope {
    meta: Meta,
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    pagination: Option<Pagination>,
}

/// A page of gifs plus the pagination metadata the API returned with it.
///
/// `pagination` is only sent by the list endpoints (`search`, `trending`).
#[derive(Debug)]
pub struct PaginatedResponse {
    pub data: Vec<Gif>,
    pub pagination: Option<Pagination>,
}

impl PaginatedResponse {
    /// Decodes one raw response body.
    ///
    /// The API reuses a single envelope for the single-item and list
    /// endpoints: `data` is either one object or an array of objects, and is
    /// resolved here exactly once. An absent `data`, or `data` of any other
    /// JSON type, decodes to an empty page.
    ///
    /// Exposed so callers that bring their own transport can reuse the
    /// decode pipeline.
    pub fn from_body(body: &str) -> Result<Self, Error> {
        let value = serde_json::from_str::<Value>(body).map_err(Error::Decode)?;
        let envelope = serde_json::from_value::<Envelope>(value)
            .map_err(|e| Error::DataFormat(format!("bad envelope: {e}")))?;

        if envelope.meta.status != 200 {
            return Err(Error::Api {
                status: envelope.meta.status,
                msg: envelope.meta.msg,
            });
        }

        let data = match envelope.data {
            Some(Value::Array(items)) => items
                .into_iter()
                .map(decode_gif)
                .collect::<Result<Vec<_>, _>>()?,
            Some(item @ Value::Object(_)) => vec![decode_gif(item)?],
            _ => Vec::new(),
        };

        Ok(Self {
            data,
            pagination: envelope.pagination,
        })
    }
}

fn decode_gif(value: Value) -> Result<Gif, Error> {
    serde_json::from_value(value).map_err(|e| Error::DataFormat(e.to_string()))
}
