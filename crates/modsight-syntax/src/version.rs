//! Version token validation.

/// Reports whether `version` is a valid `go` directive version.
///
/// The accepted form is `MAJOR.MINOR`, optionally followed by `.PATCH` and a
/// prerelease tag of lowercase letters and digits, e.g. `1.21`, `1.21.0`, or
/// `1.22rc1`. Numbers carry no leading zeros.
#[must_use]
pub fn is_valid_go_version(version: &str) -> bool {
    let release = strip_prerelease(version);
    let mut parts = release.split('.');
    let (Some(major), Some(minor)) = (parts.next(), parts.next()) else {
        return false;
    };
    let patch_ok = match (parts.next(), parts.next()) {
        (None, None) => true,
        (Some(patch), None) => is_decimal(patch) && !has_leading_zero(patch),
        _ => false,
    };
    is_decimal(major)
        && !major.starts_with('0')
        && is_decimal(minor)
        && !has_leading_zero(minor)
        && patch_ok
}

/// Removes a trailing `[a-z]+[0-9]+` tag such as `rc1` or `beta2`.
///
/// Returns `version` unchanged when no well-formed tag is present, leaving
/// malformed tags to fail the numeric checks.
fn strip_prerelease(version: &str) -> &str {
    let digits = version.trim_end_matches(|c: char| c.is_ascii_digit());
    let letters = digits.trim_end_matches(|c: char| c.is_ascii_lowercase());
    let has_tag = digits.len() < version.len() && letters.len() < digits.len();
    if has_tag { letters } else { version }
}

/// Reports whether `version` is a semantic module version such as
/// `v1.2.3`, `v0.0.0-20191219192050-56b0b28a00f7`, or `v2.0.0+incompatible`.
#[must_use]
pub fn is_valid_module_version(version: &str) -> bool {
    version
        .strip_prefix('v')
        .is_some_and(|rest| semver::Version::parse(rest).is_ok())
}

fn is_decimal(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|byte| byte.is_ascii_digit())
}

fn has_leading_zero(text: &str) -> bool {
    text.len() > 1 && text.starts_with('0')
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("1.21", true)]
    #[case("1.0", true)]
    #[case("10.4", true)]
    #[case("1", false)]
    #[case("1.", false)]
    #[case("01.2", false)]
    #[case("1.02", false)]
    #[case("1.21.0", true)]
    #[case("1.21.3", true)]
    #[case("1.22rc1", true)]
    #[case("1.21.0beta2", true)]
    #[case("1.21.03", false)]
    #[case("1.21.3.4", false)]
    #[case("1.22rc", false)]
    #[case("1.22RC1", false)]
    #[case("1.21.", false)]
    #[case("go1.21", false)]
    fn validates_go_versions(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_valid_go_version(input), expected);
    }

    #[rstest]
    #[case("v1.2.3", true)]
    #[case("v0.0.0-20191219192050-56b0b28a00f7", true)]
    #[case("v2.0.0+incompatible", true)]
    #[case("1.2.3", false)]
    #[case("v1.2", false)]
    #[case("latest", false)]
    fn validates_module_versions(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_valid_module_version(input), expected);
    }
}
