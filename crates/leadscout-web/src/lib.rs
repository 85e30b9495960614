//! Website signal extraction for candidate businesses.
//!
//! Given a business's website URL, fetches the page once with a bounded
//! timeout and derives presence/absence quality signals: reachability,
//! an SEO meta description, a contact email, and structured data. Any
//! fetch failure collapses to the all-false "unreachable" signal set —
//! a broken site is a lead signal, not an error.

pub mod error;
pub mod extract;
pub mod parse;

pub use error::WebError;
pub use extract::{SignalExtractor, WebsiteSignals};
