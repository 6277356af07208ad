pub mod api_types;
mod client;

use rand::Rng;

pub use client::{Client, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
#[cfg(test)]
pub use client::decode_release;

/// Exclusive upper bound for guessed release IDs
pub const MAX_RELEASE_ID: u32 = 9_999_999;

/// Pick a release ID that may or may not exist
pub fn random_release_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    rng.random_range(0..MAX_RELEASE_ID).to_string()
}

/// Endless stream of guessed release IDs. Repeats are possible.
pub fn release_ids<R: Rng>(mut rng: R) -> impl Iterator<Item = String> {
    std::iter::repeat_with(move || random_release_id(&mut rng))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_random_release_id_in_range() {
        let mut rng = StdRng::seed_from_u64(249504);
        for _ in 0..10_000 {
            let id = random_release_id(&mut rng);
            let parsed: u32 = id.parse().unwrap();
            assert!(parsed < MAX_RELEASE_ID);
            assert_eq!(parsed.to_string(), id, "leading zeros in {id}");
        }
    }

    #[test]
    fn test_release_ids_is_endless() {
        let ids: Vec<String> = release_ids(StdRng::seed_from_u64(1)).take(100).collect();
        assert_eq!(ids.len(), 100);
        assert!(ids.iter().all(|id| id.parse::<u32>().is_ok()));
    }
}
