//! Resolved download link entity.

/// Host family a resolved link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Direct,
    Mega,
    Google,
    Telegram,
}

impl LinkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Mega => "mega",
            Self::Google => "google",
            Self::Telegram => "telegram",
        }
    }
}

/// A final download link extracted from a countdown page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLink {
    pub kind: LinkKind,
    pub label: &'static str,
    pub download_url: String,
}

impl ResolvedLink {
    pub fn new(kind: LinkKind, label: &'static str, download_url: impl Into<String>) -> Self {
        Self {
            kind,
            label,
            download_url: download_url.into(),
        }
    }
}
