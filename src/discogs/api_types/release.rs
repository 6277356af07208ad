use serde::{Deserialize, Deserializer};

/// `GET /releases/{id}`
///
/// Fields that are missing or `null` keep their zero value. A field of the wrong type fails the
/// whole decode.
// Most fields are only read through `Debug` output
#[allow(dead_code)]
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Release {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub artists: Vec<Artist>,
    /// `0` when unknown
    #[serde(deserialize_with = "null_as_default")]
    pub year: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub genres: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(deserialize_with = "null_as_default")]
    pub images: Vec<Image>,
    #[serde(deserialize_with = "null_as_default")]
    pub tracklist: Vec<Track>,
    #[serde(deserialize_with = "null_as_default")]
    pub videos: Vec<Video>,
    /// Link to the release page on the website
    #[serde(deserialize_with = "null_as_default")]
    pub uri: String,
}

impl Release {
    pub fn has_videos(&self) -> bool {
        !self.videos.is_empty()
    }
}

#[allow(dead_code)]
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Artist {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub resource_url: String,
}

#[allow(dead_code)]
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Image {
    /// `primary` or `secondary`
    #[serde(deserialize_with = "null_as_default")]
    pub r#type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub uri: String,
}

#[allow(dead_code)]
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Track {
    /// M:SS, may be empty
    #[serde(deserialize_with = "null_as_default")]
    pub duration: String,
    #[serde(deserialize_with = "null_as_default")]
    pub position: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    /// `track`, `heading` or `index`
    #[serde(deserialize_with = "null_as_default")]
    pub type_: String,
}

#[allow(dead_code)]
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Video {
    #[serde(deserialize_with = "null_as_default")]
    pub uri: String,
}

/// `null` decodes the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
