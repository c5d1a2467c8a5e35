//! The `RelativeUrl` wrapper type.
//!
//! Presents the standard URL accessor contract (href, host, origin,
//! pathname, search, hash, ...) over an owned component set, without
//! requiring the reference to be absolute. Resolution state lives in a
//! plain struct field and is replaced atomically by the setters, so a
//! clone observed concurrently is always a consistent snapshot.

use std::fmt;

use url::Url;

use crate::core::parser::parse;
use crate::core::resolver::{merge, resolve_chain};
use crate::error::RelUrlError;
use crate::types::{Host, UrlComponents};
use crate::view::serialize::{to_host, to_href, to_origin, to_pathname, to_segments};

/// A URL that may be relative, with the full URL accessor contract.
///
/// Unlike a platform URL object, a `RelativeUrl` never rejects its input:
/// construction is total, and partial references keep exactly the
/// components they carry. Conversion to a platform [`Url`] is the one
/// fallible step, deferred until a caller actually needs an absolute URL.
///
/// # Examples
///
/// ```
/// use relurl::RelativeUrl;
///
/// let gallery = RelativeUrl::new("../assets/kitten.jpg");
/// assert_eq!(gallery.href(), "../assets/kitten.jpg");
/// assert_eq!(gallery.to("puppy.jpg").href(), "../assets/puppy.jpg");
///
/// let page = RelativeUrl::new("https://localhost/kittens/index.html");
/// assert_eq!(page.to("../assets/kitten.jpg").href(), "https://localhost/assets/kitten.jpg");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelativeUrl {
    components: UrlComponents,
}

impl RelativeUrl {
    /// Construct from a single reference (a string or a component set).
    pub fn new(href: impl Into<UrlComponents>) -> Self {
        Self { components: href.into() }
    }

    /// Construct by resolving a whole chain of references, the most
    /// authoritative last.
    ///
    /// # Examples
    ///
    /// ```
    /// use relurl::RelativeUrl;
    ///
    /// let resolved = RelativeUrl::from_chain(["../assets/kitten.jpg", "puppy.jpg"]);
    /// assert_eq!(resolved.href(), "../assets/puppy.jpg");
    /// ```
    pub fn from_chain<I>(refs: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<UrlComponents>,
    {
        Self { components: resolve_chain(refs) }
    }

    /// Construct directly from an existing component set.
    pub fn from_components(components: UrlComponents) -> Self {
        Self { components }
    }

    /// The underlying component set.
    pub fn components(&self) -> &UrlComponents {
        &self.components
    }

    /// Consume the wrapper, yielding its component set.
    pub fn into_components(self) -> UrlComponents {
        self.components
    }

    /// Navigate: resolve `href` against this URL, yielding a new one.
    pub fn to(&self, href: impl Into<UrlComponents>) -> RelativeUrl {
        RelativeUrl { components: merge(&href.into(), &self.components) }
    }

    /// Serialized form of the whole reference.
    pub fn href(&self) -> String {
        to_href(&self.components)
    }

    /// Scheme without its colon, or empty.
    pub fn scheme(&self) -> &str {
        self.components.scheme.as_deref().unwrap_or("")
    }

    /// Scheme with its trailing colon (`https:`), or empty.
    pub fn protocol(&self) -> String {
        match self.components.scheme.as_deref() {
            Some(scheme) if !scheme.is_empty() => format!("{}:", scheme),
            _ => String::new(),
        }
    }

    /// Host and port (`localhost:8080`), or empty.
    pub fn host(&self) -> String {
        to_host(&self.components)
    }

    /// Host without the port, or empty.
    pub fn hostname(&self) -> String {
        self.components.host_string().unwrap_or_default()
    }

    /// Origin (`scheme://host:port`), or empty for authority-less
    /// references. `blob` URLs reconstruct the inner origin from the path.
    pub fn origin(&self) -> String {
        to_origin(&self.components)
    }

    /// Authority username, or empty.
    pub fn username(&self) -> &str {
        self.components.user.as_deref().unwrap_or("")
    }

    /// Authority password, or empty.
    pub fn password(&self) -> &str {
        self.components.pass.as_deref().unwrap_or("")
    }

    /// Port as written, or empty.
    pub fn port(&self) -> &str {
        self.components.port.as_deref().unwrap_or("")
    }

    /// Serialized path.
    pub fn pathname(&self) -> String {
        to_pathname(&self.components)
    }

    /// Query with its leading `?`, or empty.
    pub fn search(&self) -> String {
        match self.components.query.as_deref() {
            Some(query) if !query.is_empty() => format!("?{}", query),
            _ => String::new(),
        }
    }

    /// Fragment with its leading `#`, or empty.
    pub fn hash(&self) -> String {
        match self.components.hash.as_deref() {
            Some(hash) if !hash.is_empty() => format!("#{}", hash),
            _ => String::new(),
        }
    }

    /// Path segments: drive, directories, then the file or a trailing
    /// empty marker for directory paths.
    pub fn segments(&self) -> Vec<String> {
        to_segments(&self.components)
    }

    /// Replace the whole component set by re-parsing `href`.
    pub fn set_href(&mut self, href: impl Into<UrlComponents>) {
        self.components = href.into();
    }

    /// Replace the hostname, validating and normalizing it through the
    /// platform URL type. On success the platform's normalized spelling
    /// (case-folded, IDNA-mapped) is stored.
    pub fn set_hostname(&mut self, hostname: &str) -> Result<(), RelUrlError> {
        let normalized = url::Host::parse(hostname)
            .map_err(|_| RelUrlError::InvalidHost(hostname.to_string()))?;
        self.components.host = Some(Host::Name(normalized.to_string()));
        Ok(())
    }

    /// Replace the query. A leading `?` is accepted and stripped; an empty
    /// search clears the query.
    pub fn set_search(&mut self, search: &str) {
        let query = search.strip_prefix('?').unwrap_or(search);
        self.components.query = if query.is_empty() {
            None
        } else {
            Some(query.to_string())
        };
    }

    /// Convert to a platform [`Url`].
    ///
    /// This is the error boundary: the platform type applies the
    /// percent-encoding, IDNA and structural validation this crate
    /// deliberately leaves to it. Fails when the reference has no scheme
    /// or when the platform rejects the serialized form.
    ///
    /// # Examples
    ///
    /// ```
    /// use relurl::{RelativeUrl, RelUrlError};
    ///
    /// let page = RelativeUrl::new("https://localhost/kittens/index.html");
    /// assert_eq!(page.to_url().unwrap().host_str(), Some("localhost"));
    ///
    /// let relative = RelativeUrl::new("../assets/kitten.jpg");
    /// assert_eq!(relative.to_url(), Err(RelUrlError::NotAbsolute));
    /// ```
    pub fn to_url(&self) -> Result<Url, RelUrlError> {
        if self.components.scheme.is_none() {
            return Err(RelUrlError::NotAbsolute);
        }
        Ok(Url::parse(&self.href())?)
    }
}

impl fmt::Display for RelativeUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

impl From<&str> for RelativeUrl {
    fn from(href: &str) -> Self {
        Self { components: parse(href) }
    }
}

impl From<UrlComponents> for RelativeUrl {
    fn from(components: UrlComponents) -> Self {
        Self { components }
    }
}

impl TryFrom<&RelativeUrl> for Url {
    type Error = RelUrlError;

    fn try_from(url: &RelativeUrl) -> Result<Self, Self::Error> {
        url.to_url()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_href() {
        let url = RelativeUrl::new("https://localhost/a/b?q=1#top");
        assert_eq!(url.to_string(), url.href());
    }

    #[test]
    fn test_set_search_accepts_both_spellings() {
        let mut url = RelativeUrl::new("a/b");
        url.set_search("?q=1");
        assert_eq!(url.search(), "?q=1");
        url.set_search("q=2");
        assert_eq!(url.search(), "?q=2");
        url.set_search("");
        assert_eq!(url.search(), "");
    }

    #[test]
    fn test_set_hostname_normalizes_through_platform() {
        let mut url = RelativeUrl::new("https://localhost/a");
        url.set_hostname("EXAMPLE.com").unwrap();
        assert_eq!(url.hostname(), "example.com");
    }

    #[test]
    fn test_set_hostname_rejects_invalid() {
        let mut url = RelativeUrl::new("https://localhost/a");
        let err = url.set_hostname("exa mple").unwrap_err();
        assert!(matches!(err, RelUrlError::InvalidHost(_)));
        assert_eq!(url.hostname(), "localhost");
    }
}
