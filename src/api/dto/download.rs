//! DTOs for download endpoint.

use serde::Serialize;

use crate::domain::entities::ResolvedLink;

/// Resolved links. `success` is false when nothing usable was found.
#[derive(Debug, Serialize)]
pub struct DownloadResponse {
    pub success: bool,
    pub count: usize,
    pub download_options: Vec<DownloadOption>,
}

#[derive(Debug, Serialize)]
pub struct DownloadOption {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub label: &'static str,
    pub download_url: String,
}

impl From<ResolvedLink> for DownloadOption {
    fn from(link: ResolvedLink) -> Self {
        Self {
            kind: link.kind.as_str(),
            label: link.label,
            download_url: link.download_url,
        }
    }
}

impl From<Vec<ResolvedLink>> for DownloadResponse {
    fn from(links: Vec<ResolvedLink>) -> Self {
        let download_options: Vec<DownloadOption> = links.into_iter().map(Into::into).collect();
        Self {
            success: !download_options.is_empty(),
            count: download_options.len(),
            download_options,
        }
    }
}
