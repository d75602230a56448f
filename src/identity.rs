//! Node identity and display-label derivation
//!
//! Every graph node carries two strings: a *key* used for deduplication and a
//! *display name* emitted into the DOT output. Projects use their name for
//! both. Modules are keyed by the literal `group:artifact` pair (version
//! intentionally excluded, so multiple versions collapse to one node) and
//! labelled by a heuristic shortening of the coordinate.
//!
//! The shortening is cosmetic and replaceable: callers can swap it out via
//! [`GeneratorConfig::with_display_name`](crate::generator::GeneratorConfig::with_display_name).
//! Only the `group:artifact` dedup contract is load-bearing.

/// Leading group-id segments carrying no information about the library itself
pub const GENERIC_GROUP_SEGMENTS: &[&str] = &["com", "org", "net", "io", "me", "de", "co", "android"];

/// Unique node key for a module coordinate, independent of its version
pub fn module_key(group: &str, artifact: &str) -> String {
    format!("{group}:{artifact}")
}

/// Short human-readable label for a module coordinate
///
/// Strips generic reversed-domain segments from the group id, drops the
/// organization segment when more specific segments follow, and prefixes the
/// artifact id with whatever remains. When the artifact id already restates
/// the retained group segments the group contribution is dropped entirely:
/// `org.jetbrains.kotlin:kotlin-stdlib` stays `kotlin-stdlib`, while
/// `org.jetbrains:annotations` becomes `jetbrains-annotations`.
pub fn display_name(group: &str, artifact: &str) -> String {
    let retained = retained_segments(group);

    if retained.is_empty() || restates(artifact, &retained) {
        artifact.to_string()
    } else {
        format!("{}-{}", retained.join("-"), artifact)
    }
}

/// The meaningful trailing segments of a group id
fn retained_segments(group: &str) -> Vec<&str> {
    let mut segments: Vec<&str> = group.split('.').filter(|s| !s.is_empty()).collect();

    while segments.len() > 1 && GENERIC_GROUP_SEGMENTS.contains(&segments[0]) {
        segments.remove(0);
    }

    // With several segments left, the first is an organization name and the
    // rest identify the library.
    if segments.len() > 1 {
        segments.remove(0);
    }

    segments
}

/// Whether the artifact id already spells out the retained group segments
fn restates(artifact: &str, retained: &[&str]) -> bool {
    let artifact = normalize(artifact);
    let retained = normalize(&retained.join("-"));

    artifact.starts_with(&retained) || retained.starts_with(&artifact)
}

fn normalize(input: &str) -> String {
    input.replace('-', "").to_ascii_lowercase()
}
