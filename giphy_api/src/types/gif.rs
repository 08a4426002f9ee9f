use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::Error;

/// The user discretion rating of a gif.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Rating {
    #[serde(rename = "y")]
    Y,
    #[serde(rename = "g")]
    G,
    #[serde(rename = "pg")]
    Pg,
    #[serde(rename = "pg-13")]
    Pg13,
    #[serde(rename = "r")]
    R,
}

impl Rating {
    /// The wire code, used in payloads and as the `rating` query value.
    pub fn as_str(self) -> &'static str {
        match self {
            Rating::Y => "y",
            Rating::G => "g",
            Rating::Pg => "pg",
            Rating::Pg13 => "pg-13",
            Rating::R => "r",
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The five fixed renditions the API offers per gif.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rendition {
    /// Height fixed at 200px.
    FixedHeight,
    /// Height fixed at 200px, downsampled.
    FixedHeightDownsampled,
    /// Width fixed at 200px.
    FixedWidth,
    /// Width fixed at 200px, downsampled.
    FixedWidthDownsampled,
    /// The original upload.
    Original,
}

impl Rendition {
    /// The wire code, used as the key into the `images` map.
    pub fn as_str(self) -> &'static str {
        match self {
            Rendition::FixedHeight => "fixed_height",
            Rendition::FixedHeightDownsampled => "fixed_height_downsampled",
            Rendition::FixedWidth => "fixed_width",
            Rendition::FixedWidthDownsampled => "fixed_width_downsampled",
            Rendition::Original => "original",
        }
    }

    /// Downsampled renditions have no still form.
    fn is_downsampled(self) -> bool {
        matches!(
            self,
            Rendition::FixedHeightDownsampled | Rendition::FixedWidthDownsampled
        )
    }
}

impl std::fmt::Display for Rendition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Concrete metadata for one rendition of a gif.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageMetadata {
    /// The url of the gif.
    pub url: String,
    /// The width of the gif in pixels.
    pub width: u64,
    /// The height of the gif in pixels.
    pub height: u64,
    /// The size of the gif in bytes. Not every rendition includes this.
    pub size: Option<u64>,
    /// The number of frames. Not every rendition includes this.
    pub frames: Option<u64>,
    /// Url of the mp4 form. Absent for stills.
    pub mp4_url: Option<String>,
}

/// One gif returned by the API.
///
/// Decoded strictly: the id, page url, rating, and one of the two image
/// payload shapes must all be present and well formed, otherwise the whole
/// response fails with [`Error::DataFormat`].
#[derive(Debug, Clone, Deserialize)]
pub struct Gif {
    /// The giphy id of the gif.
    pub id: String,
    /// The url of the gif's page on giphy.
    #[serde(rename = "url")]
    pub page_url: String,
    /// The user discretion rating of the gif.
    pub rating: Rating,
    #[serde(flatten)]
    images: ImagePayload,
}

impl Gif {
    /// Resolves the metadata for one rendition of this gif.
    ///
    /// `still` selects the still form of the rendition. Downsampled
    /// renditions have no still form, so `still` is ignored for them.
    ///
    /// Nothing is cached; each call recomputes the metadata from the decoded
    /// payload.
    pub fn image(&self, rendition: Rendition, still: bool) -> Result<ImageMetadata, Error> {
        let still = still && !rendition.is_downsampled();
        match &self.images {
            ImagePayload::Nested(images) => {
                let key = if still {
                    format!("{}_still", rendition.as_str())
                } else {
                    rendition.as_str().to_string()
                };
                let entry = images.get(&key).ok_or_else(|| {
                    Error::DataFormat(format!("no `{key}` entry in the images map"))
                })?;
                entry.to_metadata(&key)
            }
            ImagePayload::Flat(flat) => flat.resolve(rendition, still),
        }
    }
}

/// The per-rendition image data, in whichever of the two shapes the API used.
///
/// Modern responses carry a nested `images` map keyed by rendition code;
/// legacy responses carry flat `image_*` fields the renditions are derived
/// from. Exactly one shape is present per gif.
#[derive(Debug, Clone)]
enum ImagePayload {
    Nested(BTreeMap<String, ImageEntry>),
    Flat(FlatImages),
}

impl<'de> Deserialize<'de> for ImagePayload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map: serde_json::Map<String, Value> = serde_json::Map::deserialize(deserializer)?;
        if let Some(images) = map.get("images") {
            let images: BTreeMap<String, ImageEntry> =
                BTreeMap::deserialize(images).map_err(serde::de::Error::custom)?;
            Ok(ImagePayload::Nested(images))
        } else {
            let flat = FlatImages::deserialize(&Value::Object(map)).map_err(|e| {
                serde::de::Error::custom(format!(
                    "gif has neither an `images` map nor legacy flat fields: {e}"
                ))
            })?;
            Ok(ImagePayload::Flat(flat))
        }
    }
}

/// One entry of the nested `images` map.
///
/// All fields are optional at the wire level because the map also carries
/// preview entries whose shapes differ from the five renditions. Required
/// fields are checked when a rendition is resolved.
#[derive(Debug, Clone, Deserialize)]
struct ImageEntry {
    #[serde(default)]
    url: Option<String>,
    #[serde(default, deserialize_with = "opt_count")]
    width: Option<u64>,
    #[serde(default, deserialize_with = "opt_count")]
    height: Option<u64>,
    #[serde(default, deserialize_with = "opt_count")]
    size: Option<u64>,
    #[serde(default, deserialize_with = "opt_count")]
    frames: Option<u64>,
    #[serde(default)]
    mp4: Option<String>,
}

impl ImageEntry {
    fn to_metadata(&self, key: &str) -> Result<ImageMetadata, Error> {
        Ok(ImageMetadata {
            url: self.url.clone().ok_or_else(|| missing(key, "url"))?,
            width: self.width.ok_or_else(|| missing(key, "width"))?,
            height: self.height.ok_or_else(|| missing(key, "height"))?,
            size: self.size,
            frames: self.frames,
            mp4_url: self.mp4.clone(),
        })
    }
}

fn missing(key: &str, field: &str) -> Error {
    Error::DataFormat(format!("images entry `{key}` is missing `{field}`"))
}

/// The legacy flat image fields. Dimension fields arrive as decimal strings.
#[derive(Debug, Clone, Deserialize)]
struct FlatImages {
    image_url: String,
    #[serde(deserialize_with = "count")]
    image_width: u64,
    #[serde(deserialize_with = "count")]
    image_height: u64,
    #[serde(default)]
    image_mp4_url: Option<String>,
    #[serde(deserialize_with = "count")]
    fixed_height_downsampled_width: u64,
    #[serde(deserialize_with = "count")]
    fixed_width_downsampled_height: u64,
}

impl FlatImages {
    /// Derives a rendition from the flat fields.
    ///
    /// The fixed renditions live next to `image_url` under well-known
    /// filenames; `Original` is the flat fields themselves.
    fn resolve(&self, rendition: Rendition, still: bool) -> Result<ImageMetadata, Error> {
        let (url, width, height, mp4_url) = match rendition {
            Rendition::FixedHeight => (
                self.sibling("200.gif")?,
                self.fixed_height_downsampled_width,
                200,
                Some(self.sibling("200.mp4")?),
            ),
            Rendition::FixedHeightDownsampled => (
                self.sibling("200_d.gif")?,
                self.fixed_height_downsampled_width,
                200,
                Some(self.sibling("200_d.mp4")?),
            ),
            Rendition::FixedWidth => (
                self.sibling("200w.gif")?,
                200,
                self.fixed_width_downsampled_height,
                Some(self.sibling("200w.mp4")?),
            ),
            Rendition::FixedWidthDownsampled => (
                self.sibling("200w_d.gif")?,
                200,
                self.fixed_width_downsampled_height,
                Some(self.sibling("200w_d.mp4")?),
            ),
            Rendition::Original => (
                self.image_url.clone(),
                self.image_width,
                self.image_height,
                self.image_mp4_url.clone(),
            ),
        };

        let (url, mp4_url) = if still {
            (still_url(&url), None)
        } else {
            (url, mp4_url)
        };

        Ok(ImageMetadata {
            url,
            width,
            height,
            size: None,
            frames: None,
            mp4_url,
        })
    }

    /// Replaces the filename of `image_url` with `name`, keeping its directory.
    fn sibling(&self, name: &str) -> Result<String, Error> {
        let (dir, _) = self.image_url.rsplit_once('/').ok_or_else(|| {
            Error::DataFormat(format!("`image_url` has no path: {}", self.image_url))
        })?;
        Ok(format!("{dir}/{name}"))
    }
}

/// Swaps the url's extension for the `_s.gif` still suffix.
fn still_url(url: &str) -> String {
    let last_slash = url.rfind('/').unwrap_or(0);
    match url.rfind('.').filter(|&dot| dot > last_slash) {
        Some(dot) => format!("{}_s.gif", &url[..dot]),
        None => format!("{url}_s.gif"),
    }
}

/// Decodes a numeric field that the API sends as either a decimal string or
/// a bare integer.
fn count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| serde::de::Error::custom("expected an unsigned integer")),
        Value::String(s) => s
            .parse::<u64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid integer string `{s}`"))),
        other => Err(serde::de::Error::custom(format!(
            "expected an integer or integer string, got {other}"
        ))),
    }
}

fn opt_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(value) => count(value).map(Some).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::still_url;

    #[test]
    fn still_url_swaps_the_extension() {
        assert_eq!(still_url("http://x/y/200.gif"), "http://x/y/200_s.gif");
        assert_eq!(
            still_url("https://media0.giphy.com/media/abc/giphy.gif"),
            "https://media0.giphy.com/media/abc/giphy_s.gif"
        );
    }

    #[test]
    fn still_url_ignores_dots_in_the_host() {
        assert_eq!(
            still_url("https://media0.giphy.com/media/abc/plain"),
            "https://media0.giphy.com/media/abc/plain_s.gif"
        );
    }
}
