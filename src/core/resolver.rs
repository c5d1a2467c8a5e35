//! Merging of URL references against bases, and chain resolution.
//!
//! This is the algorithmic heart of the crate: generic-syntax reference
//! resolution extended with drive letters and directory-segment semantics.
//! Both operations are total — every pair of component sets merges to a
//! defined result, and inputs are never mutated.

use crate::types::UrlComponents;

/// Resolve `reference` against `base`, producing a new component set.
///
/// Follows generic-syntax resolution: an absolute reference (one with a
/// scheme) stands alone; otherwise the scheme is inherited, the authority
/// comes wholesale from whichever side supplies a host, and the path is
/// taken, inherited, or spliced depending on what the reference carries.
/// The fragment always comes from the reference — a fragment describes the
/// final reference, never an intermediate base.
///
/// # Examples
///
/// ```
/// use relurl::{merge, parse, to_href};
///
/// let base = parse("https://localhost/kittens/index.html");
/// let resolved = merge(&parse("../assets/kitten.jpg"), &base);
/// assert_eq!(to_href(&resolved), "https://localhost/assets/kitten.jpg");
/// ```
pub fn merge(reference: &UrlComponents, base: &UrlComponents) -> UrlComponents {
    // An absolute reference stands alone; only its path needs normalizing.
    if reference.scheme.is_some() {
        let mut out = reference.clone();
        out.dirs = normalize_dirs(out.dirs.take(), out.root.is_some());
        return out;
    }

    let mut out = UrlComponents::new();
    out.scheme = base.scheme.clone();

    // Authority comes wholesale from whichever side supplies a host.
    let authority = if reference.has_authority() { reference } else { base };
    out.user = authority.user.clone();
    out.pass = authority.pass.clone();
    out.host = authority.host.clone();
    out.port = authority.port.clone();

    if reference.has_authority() {
        // New authority: the reference's path stands alone, drive included.
        out.drive = reference.drive.clone();
        out.root = reference.root.clone();
        out.dirs = normalize_dirs(reference.dirs.clone(), reference.root.is_some());
        out.file = reference.file.clone();
    } else if reference.root.is_some() {
        // Absolute path: only the drive may fall through from the base.
        out.drive = reference.drive.clone().or_else(|| base.drive.clone());
        out.root = reference.root.clone();
        out.dirs = normalize_dirs(reference.dirs.clone(), true);
        out.file = reference.file.clone();
    } else if !reference.has_path() {
        // Bare reference: the path is inherited wholesale, and the base
        // query survives unless the reference brings its own.
        out.drive = base.drive.clone();
        out.root = base.root.clone();
        out.dirs = base.dirs.clone();
        out.file = base.file.clone();
        out.query = reference.query.clone().or_else(|| base.query.clone());
        out.hash = reference.hash.clone();
        return out;
    } else {
        // Relative path: splice onto the base's directory run, dropping
        // the base's file segment.
        out.drive = base.drive.clone();
        out.root = base.root.clone();
        let mut segments = base.dirs.clone().unwrap_or_default();
        if let Some(dirs) = &reference.dirs {
            segments.extend(dirs.iter().cloned());
        }
        out.dirs = normalize_dirs(Some(segments), out.root.is_some());
        out.file = reference.file.clone();
    }

    out.query = reference.query.clone();
    out.hash = reference.hash.clone();
    out
}

/// Fold a chain of references into a single component set.
///
/// The most authoritative reference comes last: each item is resolved
/// against everything before it, so `resolve_chain([a, b, c])` equals
/// `merge(c, merge(b, a))`. Items are anything convertible to
/// [`UrlComponents`], strings included. An empty chain yields the
/// all-absent component set.
///
/// # Examples
///
/// ```
/// use relurl::{resolve_chain, to_href};
///
/// let resolved = resolve_chain(["../assets/kitten.jpg", "puppy.jpg"]);
/// assert_eq!(to_href(&resolved), "../assets/puppy.jpg");
/// ```
pub fn resolve_chain<I>(refs: I) -> UrlComponents
where
    I: IntoIterator,
    I::Item: Into<UrlComponents>,
{
    let mut refs = refs.into_iter();
    let Some(first) = refs.next() else {
        return UrlComponents::new();
    };
    refs.fold(first.into(), |base, reference| merge(&reference.into(), &base))
}

/// Remove dot segments from a directory run.
///
/// `.` is dropped; `..` pops the previous real segment. At the start of a
/// rooted path `..` is absorbed silently; on a rootless path it is
/// preserved, since there is no segment it could consume. An empty result
/// collapses to `None`.
fn normalize_dirs(dirs: Option<Vec<String>>, rooted: bool) -> Option<Vec<String>> {
    let dirs = dirs?;
    let mut out: Vec<String> = Vec::with_capacity(dirs.len());
    for segment in dirs {
        match segment.as_str() {
            "." => {}
            ".." => {
                if out.last().is_some_and(|last| last != "..") {
                    out.pop();
                } else if !rooted {
                    out.push(segment);
                }
            }
            _ => out.push(segment),
        }
    }
    if out.is_empty() {
        None
    } else {
        Some(out)
    }
}
