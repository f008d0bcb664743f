use semver::Version;

/// Parse a strict `major.minor.patch` string into a version.
///
/// Unlike `semver::Version::parse`, this accepts only three dot-separated
/// unsigned integers. Pre-release and build suffixes, a `v` prefix, signs
/// and surrounding whitespace are all rejected.
///
/// Examples:
/// - "1.2.3" -> Version(1, 2, 3)
/// - "01.2.3" -> Version(1, 2, 3)
/// - "1.2" -> None
/// - "1.2.3-rc.1" -> None
pub fn parse_version(version: &str) -> Option<Version> {
    let parts: Vec<&str> = version.split('.').collect();
    let [major, minor, patch] = parts.as_slice() else {
        return None;
    };

    Some(Version::new(
        parse_component(major)?,
        parse_component(minor)?,
        parse_component(patch)?,
    ))
}

fn parse_component(token: &str) -> Option<u64> {
    // u64::from_str accepts a leading '+'
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// Returns true if `a` is strictly later than `b` on (major, minor, patch)
pub fn is_later(a: &Version, b: &Version) -> bool {
    (a.major, a.minor, a.patch) > (b.major, b.minor, b.patch)
}

/// The versions reachable from `previous` by one bump, in the order
/// minor, patch, major.
///
/// A bump that would overflow is left out.
pub fn direct_successors(previous: &Version) -> Vec<Version> {
    [
        previous
            .minor
            .checked_add(1)
            .map(|minor| Version::new(previous.major, minor, 0)),
        previous
            .patch
            .checked_add(1)
            .map(|patch| Version::new(previous.major, previous.minor, patch)),
        previous
            .major
            .checked_add(1)
            .map(|major| Version::new(major, 0, 0)),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Returns true if `candidate` is a minor, patch or major bump of `previous`
pub fn is_direct_successor(candidate: &Version, previous: &Version) -> bool {
    direct_successors(previous).contains(candidate)
}
