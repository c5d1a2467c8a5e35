//! relurl - Relative URL reference resolution
//!
//! This crate resolves chains of URL references — absolute or relative,
//! including filesystem-style paths with drive letters — into a single
//! normalized component set, and derives serialized views (href, host,
//! origin, pathname, segments) from it.
//!
//! # Features
//!
//! - **Total parsing**: any string parses to a defined component set;
//!   malformed input degrades to absent fields, never an error
//! - **Generic-syntax resolution**: a reference merges against a base with
//!   dot-segment normalization, authority inheritance, and drive-letter
//!   support
//! - **Composable chains**: whole reference sequences fold into one result,
//!   most authoritative last
//! - **Relative-capable wrapper**: [`RelativeUrl`] offers the standard URL
//!   accessor contract without requiring an absolute URL
//! - **Deferred validation**: percent-encoding, IDNA and host validation
//!   belong to the platform `url` type, reached only through [`RelativeUrl::to_url`]
//!
//! # Quick Start
//!
//! ```
//! use relurl::{merge, parse, to_href, RelativeUrl};
//!
//! // Resolve a relative reference against a base
//! let base = parse("https://localhost/kittens/index.html");
//! let resolved = merge(&parse("../assets/kitten.jpg"), &base);
//! assert_eq!(to_href(&resolved), "https://localhost/assets/kitten.jpg");
//!
//! // Or stay in relative space entirely
//! let gallery = RelativeUrl::new("../assets/kitten.jpg");
//! assert_eq!(gallery.to("puppy.jpg").href(), "../assets/puppy.jpg");
//! assert_eq!(gallery.segments(), ["..", "assets", "kitten.jpg"]);
//! ```
//!
//! # Component Model
//!
//! A reference decomposes into optional fields, any subset of which may be
//! present:
//!
//! | Field    | Example        | Notes                                 |
//! |----------|----------------|---------------------------------------|
//! | scheme   | `https`        | lower-cased, no colon                 |
//! | user     | `un`           | authority credential                  |
//! | pass     | `pw`           | authority credential                  |
//! | host     | `localhost`    | name, number, or joined parts         |
//! | port     | `8080`         | kept as written                       |
//! | drive    | `C:`           | file-style paths only                 |
//! | root     | `/`            | present when the path is absolute     |
//! | dirs     | `path`, `to`   | ordered directory segments            |
//! | file     | `kitten.jpg`   | absent for directory paths            |
//! | query    | `q=a`          | no leading `?`                        |
//! | hash     | `top`          | no leading `#`                        |
//!
//! # Error Handling
//!
//! The core is total: parsing and merging never fail. [`RelUrlError`]
//! exists only at the platform boundary — converting to an absolute
//! `url::Url`, or setting a hostname the platform rejects.

// Re-export the core resolution functions
pub use crate::core::{merge, parse, resolve_chain};

// Re-export the data model
pub use crate::types::{Host, UrlComponents};

// Re-export the serialized views and the wrapper type
pub use crate::view::{to_host, to_href, to_origin, to_pathname, to_segments, RelativeUrl};

// Re-export the boundary error type
pub use crate::error::RelUrlError;

// Module declarations
pub mod core;
pub mod error;
pub mod types;
pub mod view;
