//! Remote catalog client abstraction and wire decoding.
//!
//! This module defines the [`CatalogClient`] trait, the seam between the
//! application layer and the remote catalog API, together with the decoding
//! of the catalog's JSON responses into domain types. Decoding is kept
//! separate from transport so it can be tested against captured bodies
//! without a network.
//!
//! The wire format is a JSON object with a `data` member: an array of item
//! objects for search, a single item object for detail. Only the fields the
//! client renders are mapped (`mal_id`, `title`, `images.jpg.image_url`,
//! `score`, and for detail `synopsis` and `episodes`); everything else in the
//! response is ignored.

use crate::domain::error::{AnimarkError, Result};
use crate::domain::{ItemDetail, ItemSummary};
use serde::Deserialize;

/// Abstraction over the remote catalog API.
///
/// The catalog is a black-box query endpoint: given free text it returns an
/// ordered sequence of item summaries, or fails. Transport errors and
/// malformed bodies both collapse to [`AnimarkError::Fetch`]; callers never
/// distinguish them.
pub trait CatalogClient {
    /// Searches the catalog for items matching the query.
    ///
    /// The query is passed verbatim; percent-encoding is the implementation's
    /// job. Result order is the catalog's ranking and is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`AnimarkError::Fetch`] on any transport or decode failure.
    fn search(&self, query: &str) -> Result<Vec<ItemSummary>>;

    /// Fetches the full detail record for one item.
    ///
    /// # Errors
    ///
    /// Returns [`AnimarkError::Fetch`] on any transport or decode failure.
    fn detail(&self, id: u64) -> Result<ItemDetail>;
}

#[derive(Deserialize)]
struct SearchEnvelope {
    #[serde(default)]
    data: Vec<RawItem>,
}

#[derive(Deserialize)]
struct DetailEnvelope {
    data: RawDetail,
}

#[derive(Deserialize)]
struct RawItem {
    mal_id: u64,
    title: String,
    #[serde(default)]
    images: RawImages,
    score: Option<f64>,
}

#[derive(Deserialize)]
struct RawDetail {
    mal_id: u64,
    title: String,
    synopsis: Option<String>,
    score: Option<f64>,
    episodes: Option<u32>,
    #[serde(default)]
    images: RawImages,
}

#[derive(Deserialize, Default)]
struct RawImages {
    #[serde(default)]
    jpg: RawJpg,
}

#[derive(Deserialize, Default)]
struct RawJpg {
    image_url: Option<String>,
}

/// Decodes a search response body into ordered item summaries.
///
/// # Errors
///
/// Returns [`AnimarkError::Fetch`] if the body is not the expected JSON shape.
pub fn decode_search(body: &str) -> Result<Vec<ItemSummary>> {
    let envelope: SearchEnvelope = serde_json::from_str(body)
        .map_err(|e| AnimarkError::Fetch(format!("malformed search response: {e}")))?;

    let items = envelope
        .data
        .into_iter()
        .map(|raw| ItemSummary {
            id: raw.mal_id,
            title: raw.title,
            thumbnail_url: raw.images.jpg.image_url.unwrap_or_default(),
            score: raw.score,
        })
        .collect::<Vec<_>>();

    tracing::debug!(count = items.len(), "search response decoded");
    Ok(items)
}

/// Decodes a detail response body into a single detail record.
///
/// # Errors
///
/// Returns [`AnimarkError::Fetch`] if the body is not the expected JSON shape.
pub fn decode_detail(body: &str) -> Result<ItemDetail> {
    let envelope: DetailEnvelope = serde_json::from_str(body)
        .map_err(|e| AnimarkError::Fetch(format!("malformed detail response: {e}")))?;

    let raw = envelope.data;
    Ok(ItemDetail {
        id: raw.mal_id,
        title: raw.title,
        synopsis: raw.synopsis,
        score: raw.score,
        episodes: raw.episodes,
        thumbnail_url: raw.images.jpg.image_url.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_search_body_preserving_order() {
        let body = r#"{
            "pagination": {"has_next_page": true},
            "data": [
                {
                    "mal_id": 21,
                    "title": "One Piece",
                    "images": {"jpg": {"image_url": "https://cdn.example/21.jpg"}},
                    "score": 8.69
                },
                {
                    "mal_id": 1,
                    "title": "Cowboy Bebop",
                    "images": {"jpg": {"image_url": "https://cdn.example/1.jpg"}},
                    "score": null
                }
            ]
        }"#;

        let items = decode_search(body).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, 21);
        assert_eq!(items[0].score, Some(8.69));
        assert_eq!(items[1].id, 1);
        assert_eq!(items[1].title, "Cowboy Bebop");
        assert!(items[1].score.is_none());
    }

    #[test]
    fn tolerates_missing_image_fields() {
        let body = r#"{"data": [{"mal_id": 7, "title": "no art"}]}"#;
        let items = decode_search(body).unwrap();
        assert_eq!(items[0].thumbnail_url, "");
    }

    #[test]
    fn empty_data_array_decodes_to_no_items() {
        let items = decode_search(r#"{"data": []}"#).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn malformed_body_is_a_fetch_error() {
        let err = decode_search("<html>rate limited</html>").unwrap_err();
        assert!(matches!(err, AnimarkError::Fetch(_)));
    }

    #[test]
    fn decodes_detail_body() {
        let body = r#"{
            "data": {
                "mal_id": 1,
                "title": "Cowboy Bebop",
                "synopsis": "Bounty hunters in space.",
                "score": 8.75,
                "episodes": 26,
                "images": {"jpg": {"image_url": "https://cdn.example/1.jpg"}}
            }
        }"#;

        let detail = decode_detail(body).unwrap();
        assert_eq!(detail.id, 1);
        assert_eq!(detail.episodes, Some(26));
        assert_eq!(detail.synopsis.as_deref(), Some("Bounty hunters in space."));
    }

    #[test]
    fn detail_without_data_member_is_a_fetch_error() {
        assert!(matches!(
            decode_detail(r#"{"error": "not found"}"#),
            Err(AnimarkError::Fetch(_))
        ));
    }
}
