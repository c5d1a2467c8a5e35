//! Tests for reference merging and chain resolution.

use relurl::{merge, parse, resolve_chain, to_href, UrlComponents};

fn dirs(entries: &[&str]) -> Option<Vec<String>> {
    Some(entries.iter().map(|entry| entry.to_string()).collect())
}

#[test]
fn test_sibling_file_resolution() {
    let base = parse("https://localhost/path/to/assets/kitten.jpg?q=a#root");
    let merged = merge(&parse("puppy.jpg"), &base);

    // The reference supplies a new file, so the base query and hash drop.
    assert_eq!(to_href(&merged), "https://localhost/path/to/assets/puppy.jpg");
}

#[test]
fn test_parent_directory_resolution() {
    let base = parse("https://localhost/kittens/index.html");
    let merged = merge(&parse("../assets/kitten.jpg"), &base);

    assert_eq!(to_href(&merged), "https://localhost/assets/kitten.jpg");
}

#[test]
fn test_relative_against_relative() {
    let base = parse("../assets/kitten.jpg");
    let merged = merge(&parse("puppy.jpg"), &base);

    assert_eq!(to_href(&merged), "../assets/puppy.jpg");
}

#[test]
fn test_empty_reference_is_identity_modulo_fragment() {
    let bases = vec![
        "https://un:pw@localhost:8080/path/to/file?q=a",
        "//host/x",
        "../assets/kitten.jpg",
        "/rooted/dir/",
        "C:/files/kitten.jpg",
        "",
    ];

    for base in bases {
        let base = parse(base);
        assert_eq!(merge(&parse(""), &base), base);
    }

    // The base fragment never survives; everything else does.
    let with_fragment = parse("https://h/a/b?q=1#top");
    let merged = merge(&parse(""), &with_fragment);
    assert_eq!(merged.hash, None);
    assert_eq!(merged.query.as_deref(), Some("q=1"));
    assert_eq!(to_href(&merged), "https://h/a/b?q=1");
}

#[test]
fn test_absolute_reference_overrides_base() {
    let bases = vec![
        "https://other.example/very/deep/path?q=1#frag",
        "../relative",
        "",
    ];
    let reference = parse("ftp://files.example.com:21/pub/kitten.jpg");

    for base in bases {
        let merged = merge(&reference, &parse(base));
        assert_eq!(merged.scheme.as_deref(), Some("ftp"), "scheme not taken for base: {}", base);
        assert_eq!(merged.host, reference.host, "host not taken for base: {}", base);
        assert_eq!(to_href(&merged), "ftp://files.example.com:21/pub/kitten.jpg");
    }
}

#[test]
fn test_absolute_reference_path_is_normalized() {
    let merged = merge(&parse("https://h/a/../b/./c"), &parse(""));
    assert_eq!(to_href(&merged), "https://h/b/c");
}

#[test]
fn test_authority_reference_takes_own_path() {
    let base = parse("https://old.example/deep/dir/file?q=1");
    let merged = merge(&parse("//new.example/x"), &base);

    assert_eq!(merged.scheme.as_deref(), Some("https"));
    assert_eq!(to_href(&merged), "https://new.example/x");
}

#[test]
fn test_authority_reference_replaces_credentials() {
    let base = parse("https://un:pw@old.example:9/x");
    let merged = merge(&parse("//new.example/y"), &base);

    assert_eq!(merged.user, None);
    assert_eq!(merged.pass, None);
    assert_eq!(merged.port, None);
    assert_eq!(to_href(&merged), "https://new.example/y");
}

#[test]
fn test_rooted_reference_keeps_base_authority() {
    let base = parse("https://un:pw@localhost:8080/deep/dir/file");
    let merged = merge(&parse("/top/x"), &base);

    assert_eq!(to_href(&merged), "https://un:pw@localhost:8080/top/x");
}

#[test]
fn test_rooted_reference_inherits_base_drive() {
    let base = parse("file:///C:/kittens/index.html");
    let merged = merge(&parse("/assets/kitten.jpg"), &base);

    assert_eq!(merged.drive.as_deref(), Some("C:"));
    assert_eq!(merged.root.as_deref(), Some("/"));
    assert_eq!(merged.dirs, dirs(&["assets"]));
}

#[test]
fn test_reference_drive_overrides_base_drive() {
    let base = parse("file:///C:/kittens/index.html");
    let merged = merge(&parse("D:/assets/kitten.jpg"), &base);

    assert_eq!(merged.drive.as_deref(), Some("D:"));
    assert_eq!(merged.dirs, dirs(&["assets"]));
}

#[test]
fn test_relative_merge_inherits_base_drive() {
    let base = parse("file:///C:/kittens/index.html");
    let merged = merge(&parse("../assets/kitten.jpg"), &base);

    assert_eq!(merged.scheme.as_deref(), Some("file"));
    assert_eq!(merged.drive.as_deref(), Some("C:"));
    assert_eq!(merged.dirs, dirs(&["assets"]));
    assert_eq!(merged.file.as_deref(), Some("kitten.jpg"));
}

#[test]
fn test_dot_segments_never_survive_a_rooted_merge() {
    let base = parse("https://h/a/b/c/file.html");
    let references = vec!["..", "../..", "./x", "../x/./y", "a/../b", "../../../../../x"];

    for reference in references {
        let merged = merge(&parse(reference), &base);
        let merged_dirs = merged.dirs.clone().unwrap_or_default();
        assert!(
            !merged_dirs.iter().any(|dir| dir == "." || dir == ".."),
            "dot segment survived for reference {:?}: {:?}",
            reference,
            merged_dirs,
        );
    }
}

#[test]
fn test_excess_dotdot_absorbed_at_root() {
    let base = parse("https://h/a/");
    let merged = merge(&parse("../../../x"), &base);

    assert_eq!(to_href(&merged), "https://h/x");
}

#[test]
fn test_unconsumable_dotdot_preserved_without_root() {
    let base = parse("a/b/file");
    let merged = merge(&parse("../../../x"), &base);

    assert_eq!(merged.dirs, dirs(&[".."]));
    assert_eq!(to_href(&merged), "../x");
}

#[test]
fn test_normalization_is_idempotent() {
    let base = parse("https://h/a/b/file");
    let once = merge(&parse("../x/../y/z"), &base);
    let twice = merge(&parse(""), &once);

    assert_eq!(once.dirs, twice.dirs);
    assert_eq!(once.root, twice.root);
}

#[test]
fn test_directory_reference_drops_file() {
    let base = parse("https://h/a/b/file.html");

    let dot = merge(&parse("."), &base);
    assert_eq!(to_href(&dot), "https://h/a/b/");

    let trailing = merge(&parse("sub/"), &base);
    assert_eq!(to_href(&trailing), "https://h/a/b/sub/");

    let dotdot = merge(&parse(".."), &base);
    assert_eq!(to_href(&dotdot), "https://h/a/");
}

#[test]
fn test_query_reference_inherits_path_not_query() {
    let base = parse("https://h/a/b?old=1#frag");
    let merged = merge(&parse("?new=2"), &base);

    assert_eq!(to_href(&merged), "https://h/a/b?new=2");
}

#[test]
fn test_fragment_reference_inherits_path_and_query() {
    let base = parse("https://h/a/b?q=1#old");
    let merged = merge(&parse("#new"), &base);

    assert_eq!(to_href(&merged), "https://h/a/b?q=1#new");
}

#[test]
fn test_path_reference_drops_base_query() {
    let base = parse("https://h/a/b?q=1");
    let merged = merge(&parse("c"), &base);

    assert_eq!(merged.query, None);
    assert_eq!(to_href(&merged), "https://h/a/c");
}

#[test]
fn test_hash_is_never_inherited() {
    let base = parse("https://h/a#top");

    assert_eq!(merge(&parse("x"), &base).hash, None);
    assert_eq!(merge(&parse("?q=1"), &base).hash, None);
    assert_eq!(merge(&parse(""), &base).hash, None);
}

#[test]
fn test_chain_equals_nested_merges() {
    let a = parse("https://h/a/b/c");
    let b = parse("../x/y");
    let c = parse("puppy.jpg?q=1");

    let chained = resolve_chain([a.clone(), b.clone(), c.clone()]);
    let nested = merge(&c, &merge(&b, &a));

    assert_eq!(chained, nested);
    assert_eq!(to_href(&chained), "https://h/a/x/puppy.jpg?q=1");
}

#[test]
fn test_chain_accepts_strings() {
    let resolved = resolve_chain(["../assets/kitten.jpg", "puppy.jpg"]);
    assert_eq!(to_href(&resolved), "../assets/puppy.jpg");
}

#[test]
fn test_chain_of_one() {
    let resolved = resolve_chain(["../assets/kitten.jpg"]);
    assert_eq!(resolved, parse("../assets/kitten.jpg"));
}

#[test]
fn test_empty_chain() {
    let refs: Vec<&str> = Vec::new();
    assert_eq!(resolve_chain(refs), UrlComponents::new());
}

#[test]
fn test_merge_does_not_mutate_inputs() {
    let reference = parse("../assets/kitten.jpg");
    let base = parse("https://localhost/kittens/index.html");
    let reference_before = reference.clone();
    let base_before = base.clone();

    let _ = merge(&reference, &base);

    assert_eq!(reference, reference_before);
    assert_eq!(base, base_before);
}
