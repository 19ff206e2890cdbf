//! Countdown/redirect page resolution into final download links.

use regex::Regex;
use std::sync::LazyLock;

use crate::domain::entities::{LinkKind, ResolvedLink};
use crate::extraction::dedup::dedup_by_key;
use crate::extraction::markup::{Markup, Node};
use crate::extraction::url_transform::{CANONICAL_HOST, is_placeholder, transform};

const LEGACY_STORAGE_PATTERN: &str = "google.com/server";
const GENERATOR_IDS: [&str; 2] = ["link", "generate"];

static SCRIPT_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"https?://[^\s'"]+"#).unwrap());

/// Resolves every usable link on a countdown page.
///
/// Static anchors come first, then canonical-host URLs found inside
/// `<script>` blocks. The result is unique by `download_url`, first
/// occurrence wins.
pub fn resolve_links(html: &str) -> Vec<ResolvedLink> {
    let markup = Markup::parse(html);

    let from_anchors = markup.select("a").into_iter().filter_map(|a| classify_anchor(&a));
    let from_scripts = markup
        .select("script")
        .into_iter()
        .flat_map(|script| extract_script_links(&script.text()));

    let links = dedup_by_key(from_anchors.chain(from_scripts), |link| {
        link.download_url.clone()
    });

    tracing::debug!(count = links.len(), "Resolved download links");
    links
}

/// Classifies one anchor by its `href` (and `id` for generator buttons).
fn classify_anchor(anchor: &Node<'_>) -> Option<ResolvedLink> {
    let href = anchor.attr("href").unwrap_or_default();
    if is_placeholder(href) {
        return None;
    }

    let link = if href.contains(CANONICAL_HOST) || href.contains(LEGACY_STORAGE_PATTERN) {
        ResolvedLink::new(LinkKind::Direct, "Sonic Cloud", transform(href))
    } else if href.contains("mega.nz") {
        ResolvedLink::new(LinkKind::Mega, "Mega.nz", href)
    } else if href.contains("drive.google.com") {
        ResolvedLink::new(LinkKind::Google, "Google Drive", href)
    } else if href.contains("t.me/") {
        ResolvedLink::new(LinkKind::Telegram, "Telegram Fast", href)
    } else if anchor
        .attr("id")
        .is_some_and(|id| GENERATOR_IDS.contains(&id))
    {
        generator_link(href)
    } else {
        return None;
    };

    Some(link)
}

/// `#link` / `#generate` buttons are typed by what their `href` points at.
fn generator_link(href: &str) -> ResolvedLink {
    const LABEL: &str = "Direct Stream";

    if href.contains("t.me") {
        ResolvedLink::new(LinkKind::Telegram, LABEL, href)
    } else if href.contains("drive.google") {
        ResolvedLink::new(LinkKind::Google, LABEL, href)
    } else {
        ResolvedLink::new(LinkKind::Direct, LABEL, transform(href))
    }
}

/// Canonical-host URLs embedded in script text, backslashes stripped.
///
/// Matches are taken as already canonical and are not re-transformed.
fn extract_script_links(script: &str) -> Vec<ResolvedLink> {
    SCRIPT_URL
        .find_iter(script)
        .map(|m| m.as_str().replace('\\', ""))
        .filter(|url| url.contains(CANONICAL_HOST))
        .map(|url| ResolvedLink::new(LinkKind::Direct, "Extracted Direct", url))
        .collect()
}
