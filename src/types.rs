//! Core data structures for URL reference resolution.

use std::fmt;

/// Host of a URL authority.
///
/// Hosts arrive in three shapes: plain registered names, purely numeric
/// forms, and pre-split part sequences (IPv6 groups). All three serialize
/// through the [`Display`](fmt::Display) impl, which is the single join
/// point for comparison and output — callers never branch on the variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Host {
    /// Registered name or opaque host text (e.g. "example.com").
    /// May be empty for an authority with no host (`scheme:///path`).
    Name(String),
    /// Purely numeric host form.
    Number(u64),
    /// Pre-split host parts, joined with no separator on output.
    Parts(Vec<String>),
}

impl Host {
    /// Whether the joined host text is empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Host::Name(name) => name.is_empty(),
            Host::Number(_) => false,
            Host::Parts(parts) => parts.iter().all(String::is_empty),
        }
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Host::Name(name) => f.write_str(name),
            Host::Number(number) => write!(f, "{}", number),
            Host::Parts(parts) => {
                for part in parts {
                    f.write_str(part)?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for Host {
    fn from(name: &str) -> Self {
        Host::Name(name.to_string())
    }
}

impl From<String> for Host {
    fn from(name: String) -> Self {
        Host::Name(name)
    }
}

/// Structured decomposition of a URL reference.
///
/// Produced by [`parse`](crate::parse) and by [`merge`](crate::merge);
/// every field is optional so that partial references — a bare query, a
/// relative path, a lone fragment — are representable without sentinel
/// values. A fully-default value is what an empty input parses to.
///
/// Merging never mutates a component set; it always yields a new one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UrlComponents {
    /// Scheme, lower-cased, without the trailing colon.
    pub scheme: Option<String>,
    /// Authority username.
    pub user: Option<String>,
    /// Authority password.
    pub pass: Option<String>,
    /// Authority host. Present (possibly empty) whenever the input carried
    /// a `//` authority section.
    pub host: Option<Host>,
    /// Port, kept as a string to preserve its exact spelling.
    pub port: Option<String>,
    /// Filesystem drive, stored with its colon (e.g. "C:").
    pub drive: Option<String>,
    /// Path-root marker, `"/"` when the path is absolute.
    pub root: Option<String>,
    /// Directory segments in path order. Never `Some(vec![])`: an absent
    /// directory run is always `None`.
    pub dirs: Option<Vec<String>>,
    /// Final path segment; `None` when the path denotes a directory.
    pub file: Option<String>,
    /// Query, without the leading `?`.
    pub query: Option<String>,
    /// Fragment, without the leading `#`.
    pub hash: Option<String>,
}

impl UrlComponents {
    /// Create an all-absent component set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an authority section is present (host set, even if empty).
    pub fn has_authority(&self) -> bool {
        self.host.is_some()
    }

    /// Whether any path element is present (drive, root, dirs, or file).
    pub fn has_path(&self) -> bool {
        self.drive.is_some() || self.root.is_some() || self.dirs.is_some() || self.file.is_some()
    }

    /// Whether this reference carries nothing beyond query/fragment.
    ///
    /// Such references inherit the base's path — and, when they carry no
    /// query of their own, the base's query too.
    pub fn is_bare_reference(&self) -> bool {
        self.scheme.is_none() && !self.has_authority() && !self.has_path()
    }

    /// Joined host text, or `None` when no authority is present.
    pub fn host_string(&self) -> Option<String> {
        self.host.as_ref().map(Host::to_string)
    }
}
