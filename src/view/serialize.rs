//! Pure serializers over resolved component sets.
//!
//! Each function is a total formatter: it reads field presence and emits
//! text, performing no resolution and no validation. Empty strings are
//! treated as absent wherever the output would otherwise grow a dangling
//! delimiter; `port` and `root` print whenever present, so `host:` and a
//! bare `/` round-trip.

use crate::types::UrlComponents;

/// Present and non-empty, or nothing.
fn filled(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.is_empty())
}

/// Serialize a component set to its href form.
///
/// # Examples
///
/// ```
/// use relurl::{parse, to_href};
///
/// let href = "https://un:pw@localhost:8080/path/to/assets/kitten.jpg?q=a#root";
/// assert_eq!(to_href(&parse(href)), href);
/// assert_eq!(to_href(&parse("../assets/kitten.jpg")), "../assets/kitten.jpg");
/// ```
pub fn to_href(components: &UrlComponents) -> String {
    let mut out = String::new();
    if let Some(scheme) = filled(&components.scheme) {
        out.push_str(scheme);
        out.push(':');
    }
    let host = components.host_string().unwrap_or_default();
    let has_user = if let Some(user) = filled(&components.user) {
        out.push_str("//");
        out.push_str(user);
        if let Some(pass) = filled(&components.pass) {
            out.push(':');
            out.push_str(pass);
        }
        true
    } else {
        false
    };
    if !host.is_empty() {
        out.push_str(if has_user { "@" } else { "//" });
        out.push_str(&host);
    }
    if let Some(port) = &components.port {
        out.push(':');
        out.push_str(port);
    }
    out.push_str(&to_pathname(components));
    if let Some(query) = filled(&components.query) {
        out.push('?');
        out.push_str(query);
    }
    if let Some(hash) = filled(&components.hash) {
        out.push('#');
        out.push_str(hash);
    }
    out
}

/// Serialize the host-and-port view (`localhost:8080`), empty when no
/// authority is present.
pub fn to_host(components: &UrlComponents) -> String {
    let mut out = components.host_string().unwrap_or_default();
    if let Some(port) = &components.port {
        out.push(':');
        out.push_str(port);
    }
    out
}

/// Serialize the origin view.
///
/// For the `blob` scheme the origin is reconstructed from the path — the
/// root plus the first three directory entries, which hold the inner URL's
/// scheme and host text. Otherwise it is `scheme://host:port` when a host
/// is present, and empty when not.
pub fn to_origin(components: &UrlComponents) -> String {
    if components.scheme.as_deref() == Some("blob") {
        let mut out = components.root.clone().unwrap_or_default();
        if let Some(dirs) = &components.dirs {
            let take = dirs.len().min(3);
            out.push_str(&dirs[..take].join("/"));
        }
        return out;
    }
    let host = components.host_string().unwrap_or_default();
    if host.is_empty() {
        return String::new();
    }
    let mut out = String::new();
    if let Some(scheme) = filled(&components.scheme) {
        out.push_str(scheme);
        out.push(':');
    }
    out.push_str("//");
    out.push_str(&host);
    if let Some(port) = &components.port {
        out.push(':');
        out.push_str(port);
    }
    out
}

/// Serialize the path view: `/drive root dirs/ file`.
pub fn to_pathname(components: &UrlComponents) -> String {
    let mut out = String::new();
    if let Some(drive) = filled(&components.drive) {
        out.push('/');
        out.push_str(drive);
    }
    if let Some(root) = &components.root {
        out.push_str(root);
    }
    if let Some(dirs) = &components.dirs {
        out.push_str(&dirs.join("/"));
        out.push('/');
    }
    if let Some(file) = &components.file {
        out.push_str(file);
    }
    out
}

/// List the path segments: the drive (if any), each directory, then the
/// file — or an empty-string marker when directories end the path.
///
/// # Examples
///
/// ```
/// use relurl::{parse, to_segments};
///
/// assert_eq!(
///     to_segments(&parse("../assets/kitten.jpg")),
///     vec!["..".to_string(), "assets".to_string(), "kitten.jpg".to_string()],
/// );
/// ```
pub fn to_segments(components: &UrlComponents) -> Vec<String> {
    let mut segments = Vec::new();
    if let Some(drive) = filled(&components.drive) {
        segments.push(drive.to_string());
    }
    if let Some(dirs) = &components.dirs {
        segments.extend(dirs.iter().cloned());
    }
    if let Some(file) = filled(&components.file) {
        segments.push(file.to_string());
    } else if components.dirs.is_some() {
        segments.push(String::new());
    }
    segments
}
