use log::{debug, info};

use crate::discogs::{self, api_types::release::Release};
use crate::error::FetchError;

/// Something that can look up a release by ID
pub trait ReleaseSource {
    async fn fetch(&self, release_id: &str) -> Result<Release, FetchError>;
}

impl ReleaseSource for discogs::Client {
    async fn fetch(&self, release_id: &str) -> Result<Release, FetchError> {
        self.get_release(release_id).await
    }
}

#[derive(Debug)]
pub struct Found {
    pub release_id: String,
    /// Number of IDs tried, including the one that was accepted
    pub attempts: u64,
    pub release: Release,
}

/// Only releases with at least one video are worth showing
pub fn accept(release: Release) -> Result<Release, FetchError> {
    if release.has_videos() {
        Ok(release)
    } else {
        Err(FetchError::InvalidRelease)
    }
}

/// Try IDs in order until one resolves to a release with videos.
///
/// [`FetchError::InvalidRelease`] moves on to the next ID without delay. Any other error is
/// returned immediately. There is no attempt limit, so with an endless `release_ids` this only
/// returns once a release is found or something fails.
pub async fn find_release<S, I>(source: &S, release_ids: I) -> Result<Found, FetchError>
where
    S: ReleaseSource,
    I: IntoIterator<Item = String>,
{
    for (attempts, release_id) in (1..).zip(release_ids) {
        info!("Requesting release {release_id}");
        match source.fetch(&release_id).await.and_then(accept) {
            Ok(release) => {
                return Ok(Found {
                    release_id,
                    attempts,
                    release,
                });
            }
            Err(err) if err.is_retryable() => debug!("Skipping release {release_id}: {err}"),
            Err(err) => return Err(err),
        }
    }
    Err(FetchError::Exhausted)
}
