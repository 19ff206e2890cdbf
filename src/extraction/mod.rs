//! HTML extraction pipeline.
//!
//! Pure functions from page HTML to domain entities. Nothing here touches the
//! network or fails: pages with an unexpected layout yield empty or `"N/A"`
//! fields.
//!
//! # Modules
//!
//! - [`markup`] - Selector query layer over the HTML parser
//! - [`url_transform`] - Legacy storage URL rewriting
//! - [`search`] - Search results page
//! - [`details`] - Item page metadata and download candidates
//! - [`resolver`] - Countdown page link resolution
//! - [`dedup`] - First-seen-wins deduplication

pub mod dedup;
pub mod details;
pub mod markup;
pub mod resolver;
pub mod search;
pub mod url_transform;

pub use details::extract_details;
pub use resolver::resolve_links;
pub use search::extract_search;
pub use url_transform::transform;
