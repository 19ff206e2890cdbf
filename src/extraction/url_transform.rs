//! Legacy storage URL rewriting.
//!
//! Raw links on countdown pages point at legacy `google.com/serverNN/1:/`
//! storage prefixes. [`transform`] maps them onto the Sonic Cloud streaming
//! host and then runs a fixed sequence of text fixups on the result.
//!
//! The fixups reproduce the site's historical string patches step for step,
//! quirks included. Each step is a plain `fn(&str) -> String` so it can be
//! tested on its own.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Host every mapped legacy URL ends up on.
pub const CANONICAL_HOST: &str = "cloud.sonic-cloud.online";

/// Prefix rewrite rule: the first matching search prefix is swapped for
/// `replacement_prefix`.
#[derive(Debug, Clone, Copy)]
pub struct UrlMappingRule {
    pub search_prefixes: &'static [&'static str],
    pub replacement_prefix: &'static str,
}

/// Legacy storage node table, scanned in order.
pub static SONIC_CLOUD_RULES: &[UrlMappingRule] = &[
    UrlMappingRule {
        search_prefixes: &[
            "https://google.com/server11/1:/",
            "https://google.com/server12/1:/",
            "https://google.com/server13/1:/",
        ],
        replacement_prefix: "https://cloud.sonic-cloud.online/server1/",
    },
    UrlMappingRule {
        search_prefixes: &[
            "https://google.com/server21/1:/",
            "https://google.com/server22/1:/",
            "https://google.com/server23/1:/",
        ],
        replacement_prefix: "https://cloud.sonic-cloud.online/server2/",
    },
    UrlMappingRule {
        search_prefixes: &["https://google.com/server3/1:/"],
        replacement_prefix: "https://cloud.sonic-cloud.online/server3/",
    },
    UrlMappingRule {
        search_prefixes: &["https://google.com/server4/1:/"],
        replacement_prefix: "https://cloud.sonic-cloud.online/server4/",
    },
    UrlMappingRule {
        search_prefixes: &["https://google.com/server5/1:/"],
        replacement_prefix: "https://cloud.sonic-cloud.online/server5/",
    },
];

type FixupStep = fn(&str) -> String;

/// Steps applied, in order, to URLs on [`CANONICAL_HOST`].
const CANONICAL_STEPS: &[(&str, FixupStep)] = &[
    ("mp4_extension", mp4_extension_to_query),
    ("mkv_extension", mkv_extension_to_query),
    ("zip_extension", zip_extension_to_query),
    ("collapse_double_question", collapse_double_question),
    ("demote_ext_query", demote_later_ext_query),
    ("demote_bot_query", demote_later_bot_query),
    ("promote_first_ampersand", promote_first_ampersand),
];

static MP4_SUFFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.mp4(\?|$)").unwrap());
static MKV_SUFFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.mkv(\?|$)").unwrap());
static ZIP_SUFFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.zip(\?|$)").unwrap());

/// Rewrites a raw link with the built-in Sonic Cloud rule table.
///
/// Returns an empty string for empty input and `#` anchors. Never fails;
/// input no rule or step applies to comes back unchanged.
///
/// # Examples
///
/// ```
/// use cinesubz_scraper::extraction::url_transform::transform;
///
/// assert_eq!(
///     transform("https://google.com/server11/1:/abc.mp4"),
///     "https://cloud.sonic-cloud.online/server1/abc?ext=mp4"
/// );
/// assert_eq!(transform("#"), "");
/// ```
pub fn transform(raw: &str) -> String {
    transform_with(raw, SONIC_CLOUD_RULES)
}

/// Same as [`transform`] with a caller supplied rule table.
pub fn transform_with(raw: &str, rules: &[UrlMappingRule]) -> String {
    if is_placeholder(raw) {
        return String::new();
    }

    let mapped = apply_first_rule(raw, rules);
    if !is_canonical_host(&mapped) {
        return mapped;
    }

    CANONICAL_STEPS.iter().fold(mapped, |url, (name, step)| {
        let next = step(&url);
        if next != url {
            tracing::trace!(step = *name, from = %url, to = %next, "URL fixup applied");
        }
        next
    })
}

/// Empty links and `#` anchors carry no target.
pub fn is_placeholder(raw: &str) -> bool {
    raw.is_empty() || raw.starts_with('#')
}

/// Replaces the first matching prefix of the first matching rule.
pub fn apply_first_rule(raw: &str, rules: &[UrlMappingRule]) -> String {
    rules
        .iter()
        .find_map(|rule| {
            rule.search_prefixes
                .iter()
                .find(|prefix| raw.starts_with(*prefix))
                .map(|prefix| format!("{}{}", rule.replacement_prefix, &raw[prefix.len()..]))
        })
        .unwrap_or_else(|| raw.to_string())
}

pub fn is_canonical_host(url: &str) -> bool {
    Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(|host| host == CANONICAL_HOST))
        .unwrap_or(false)
}

fn mp4_extension_to_query(url: &str) -> String {
    MP4_SUFFIX.replace(url, "?ext=mp4").into_owned()
}

fn mkv_extension_to_query(url: &str) -> String {
    MKV_SUFFIX.replace(url, "?ext=mkv").into_owned()
}

fn zip_extension_to_query(url: &str) -> String {
    ZIP_SUFFIX.replace(url, "?ext=zip").into_owned()
}

fn collapse_double_question(url: &str) -> String {
    url.replacen("??", "?", 1)
}

fn demote_later_ext_query(url: &str) -> String {
    demote_later_query(url, "?ext=")
}

fn demote_later_bot_query(url: &str) -> String {
    demote_later_query(url, "?bot=")
}

/// Turns the `?` of `token` into `&` when an earlier `?` already opened the query.
fn demote_later_query(url: &str, token: &str) -> String {
    let Some(first) = url.find('?') else {
        return url.to_string();
    };
    let rest = first + 1;
    match url[rest..].find(token) {
        Some(offset) => {
            let at = rest + offset;
            let mut out = url.to_string();
            out.replace_range(at..at + 1, "&");
            out
        }
        None => url.to_string(),
    }
}

fn promote_first_ampersand(url: &str) -> String {
    if !url.contains('?') && url.contains('&') {
        url.replacen('&', "?", 1)
    } else {
        url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_anchor_yield_empty() {
        assert_eq!(transform(""), "");
        assert_eq!(transform("#"), "");
        assert_eq!(transform("#anything"), "");
    }

    #[test]
    fn test_server1_mp4() {
        assert_eq!(
            transform("https://google.com/server11/1:/abc.mp4"),
            "https://cloud.sonic-cloud.online/server1/abc?ext=mp4"
        );
    }

    #[test]
    fn test_server2_mkv() {
        assert_eq!(
            transform("https://google.com/server22/1:/Movie.2021.mkv"),
            "https://cloud.sonic-cloud.online/server2/Movie.2021?ext=mkv"
        );
    }

    #[test]
    fn test_server3_zip() {
        assert_eq!(
            transform("https://google.com/server3/1:/subs.zip"),
            "https://cloud.sonic-cloud.online/server3/subs?ext=zip"
        );
    }

    #[test]
    fn test_every_rule_prefix_maps() {
        for rule in SONIC_CLOUD_RULES {
            for prefix in rule.search_prefixes {
                let out = transform(&format!("{prefix}file"));
                assert_eq!(out, format!("{}file", rule.replacement_prefix));
            }
        }
    }

    #[test]
    fn test_unmapped_legacy_url_passes_through() {
        let raw = "https://google.com/server9/1:/abc.mp4";
        assert_eq!(transform(raw), raw);
    }

    #[test]
    fn test_foreign_host_is_untouched() {
        let raw = "https://example.com/video.mp4?x=1&&y";
        assert_eq!(transform(raw), raw);
    }

    #[test]
    fn test_unparsable_input_passes_through() {
        assert_eq!(transform("not a url.mp4"), "not a url.mp4");
    }

    #[test]
    fn test_extension_mid_path_is_kept() {
        let raw = "https://cloud.sonic-cloud.online/server1/a.mp4/b";
        assert_eq!(transform(raw), raw);
    }

    #[test]
    fn test_first_rule_wins() {
        let rules = [
            UrlMappingRule {
                search_prefixes: &["https://a.test/"],
                replacement_prefix: "https://first.test/",
            },
            UrlMappingRule {
                search_prefixes: &["https://a.test/x/"],
                replacement_prefix: "https://second.test/",
            },
        ];
        assert_eq!(
            transform_with("https://a.test/x/y", &rules),
            "https://first.test/x/y"
        );
    }

    #[test]
    fn test_double_question_collapses() {
        assert_eq!(
            transform("https://cloud.sonic-cloud.online/f??id=1"),
            "https://cloud.sonic-cloud.online/f?id=1"
        );
    }

    #[test]
    fn test_ampersand_promoted_without_query() {
        assert_eq!(
            transform("https://cloud.sonic-cloud.online/f&id=1"),
            "https://cloud.sonic-cloud.online/f?id=1"
        );
    }

    #[test]
    fn test_later_ext_query_is_demoted() {
        assert_eq!(
            transform("https://cloud.sonic-cloud.online/a?token=x&name.mp4"),
            "https://cloud.sonic-cloud.online/a?token=x&name&ext=mp4"
        );
    }

    #[test]
    fn test_later_bot_query_is_demoted() {
        assert_eq!(
            transform("https://cloud.sonic-cloud.online/a?ext=mp4?bot=1"),
            "https://cloud.sonic-cloud.online/a?ext=mp4&bot=1"
        );
    }

    // Legacy quirk: the extension pattern swallows the `?` of an existing
    // query string.
    #[test]
    fn test_existing_query_after_extension_is_merged() {
        assert_eq!(
            transform("https://google.com/server11/1:/abc.mp4?bot=1"),
            "https://cloud.sonic-cloud.online/server1/abc?ext=mp4bot=1"
        );
    }

    // Legacy quirk: only the trailing occurrence of a repeated extension moves.
    #[test]
    fn test_repeated_extension_only_trailing_moves() {
        assert_eq!(
            transform("https://cloud.sonic-cloud.online/a.mp4.mp4"),
            "https://cloud.sonic-cloud.online/a.mp4?ext=mp4"
        );
    }

    // Legacy quirk: two extension steps can both fire on one URL.
    #[test]
    fn test_stacked_extensions_both_fire() {
        assert_eq!(
            transform("https://cloud.sonic-cloud.online/a.mkv.mp4"),
            "https://cloud.sonic-cloud.online/a?ext=mkvext=mp4"
        );
    }

    #[test]
    fn test_step_collapse_double_question_only_first() {
        assert_eq!(collapse_double_question("a??b??c"), "a?b??c");
    }

    #[test]
    fn test_step_demote_keeps_single_query() {
        assert_eq!(demote_later_ext_query("a?ext=mp4"), "a?ext=mp4");
        assert_eq!(demote_later_ext_query("a"), "a");
    }

    #[test]
    fn test_step_promote_ampersand_noop_with_query() {
        assert_eq!(promote_first_ampersand("a?x=1&y=2"), "a?x=1&y=2");
        assert_eq!(promote_first_ampersand("a&x=1&y=2"), "a?x=1&y=2");
    }

    #[test]
    fn test_is_canonical_host() {
        assert!(is_canonical_host("https://cloud.sonic-cloud.online/x"));
        assert!(!is_canonical_host("https://sonic-cloud.online/x"));
        assert!(!is_canonical_host("https://google.com/server11/1:/x"));
        assert!(!is_canonical_host("garbage"));
    }

    #[test]
    fn test_transform_is_stable_on_its_output() {
        let once = transform("https://google.com/server4/1:/show.mkv");
        assert_eq!(transform(&once), once);
    }
}
