//! DTOs for details endpoint.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::entities::{DownloadCandidate, MovieDetails};

#[derive(Debug, Serialize)]
pub struct DetailsResponse {
    pub success: bool,
    pub data: DetailsData,
}

#[derive(Debug, Serialize)]
pub struct DetailsData {
    pub movie_info: MovieInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    pub download_links: Vec<DownloadLinkItem>,
}

/// Descriptive part of an item page.
#[derive(Debug, Serialize)]
pub struct MovieInfo {
    pub title: String,
    pub year: String,
    pub rating: String,
    pub description: String,
    pub metadata: BTreeMap<String, String>,
}

#[derive(Debug, Serialize)]
pub struct DownloadLinkItem {
    pub quality: String,
    pub size: String,
    pub countdown_url: String,
}

impl From<DownloadCandidate> for DownloadLinkItem {
    fn from(candidate: DownloadCandidate) -> Self {
        Self {
            quality: candidate.quality,
            size: candidate.size,
            countdown_url: candidate.countdown_url,
        }
    }
}

impl From<MovieDetails> for DetailsResponse {
    fn from(details: MovieDetails) -> Self {
        Self {
            success: true,
            data: DetailsData {
                movie_info: MovieInfo {
                    title: details.title,
                    year: details.year,
                    rating: details.rating,
                    description: details.description,
                    metadata: details.metadata,
                },
                poster_url: details.poster_url,
                download_links: details.download_links.into_iter().map(Into::into).collect(),
            },
        }
    }
}
