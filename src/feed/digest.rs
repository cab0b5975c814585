// Latest digest post from the subreddit search endpoint
use super::HttpClient;
use crate::digest::DigestPost;
use crate::error::{Result, TrackerError};
use log::info;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Default, Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<ListingChild>,
}

#[derive(Debug, Deserialize)]
struct ListingChild {
    data: DigestPost,
}

pub fn fetch_latest_post(client: &HttpClient, search_url: &str) -> Result<DigestPost> {
    info!("Fetching digest from: {}", search_url);

    let listing: Listing = client.get_json(search_url)?;
    first_post(listing)
}

fn first_post(listing: Listing) -> Result<DigestPost> {
    listing
        .data
        .children
        .into_iter()
        .next()
        .map(|child| child.data)
        .ok_or(TrackerError::NoPost)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_post() {
        let json = r#"{"kind": "Listing", "data": {"children": [
            {"kind": "t3", "data": {"title": "Weekly Bonuses and Discounts - May 1 to May 8", "selftext": "body", "score": 42}}
        ]}}"#;
        let listing: Listing = serde_json::from_str(json).unwrap();
        let post = first_post(listing).unwrap();

        assert_eq!(post.title, "Weekly Bonuses and Discounts - May 1 to May 8");
        assert_eq!(post.selftext, "body");
        assert_eq!(post.score, 42);
    }

    #[test]
    fn test_empty_listing() {
        let listing: Listing = serde_json::from_str(r#"{"data": {"children": []}}"#).unwrap();
        assert!(matches!(first_post(listing), Err(TrackerError::NoPost)));
    }
}
