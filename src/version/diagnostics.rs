//! Human-readable report lines for a verdict

use semver::Version;

use crate::version::checker::Verdict;

const ACCEPTED: &str = "The version name is unique, and conforms to the semantic versioning system.";

/// Build the lines printed for a verdict
///
/// `existing` is the raw list as given by the caller, shown to the operator
/// when no ordering context could be established. Every rejection ends with
/// `bypass_hint`.
pub fn report(verdict: &Verdict, existing: &[String], bypass_hint: &str) -> Vec<String> {
    let mut lines = Vec::new();

    match verdict {
        Verdict::AcceptLatest { latest } => {
            if let Some(latest) = latest {
                lines.push(latest_line(latest));
            }
            lines.push(format!("{ACCEPTED} Proceeding with this version as the tag."));
        }
        Verdict::AcceptBehind {
            latest,
            predecessor,
        } => {
            lines.push(latest_line(latest));
            lines.push(ACCEPTED.to_string());
            lines.push(format!(
                "However, this version is behind the latest version, which is {latest}"
            ));
            lines.push(format!("This version will go directly ahead of {predecessor}"));
        }
        Verdict::Duplicate { existing: version } => {
            lines.push(format!(
                "The version name {version} is not unique and already exists on the server. \
                 Aborting. Give a unique version and try again."
            ));
        }
        Verdict::NotBootstrapped => {
            lines.push(
                "Looks like this is a new repository. Please start the versioning with '0.0.0'. Aborting."
                    .to_string(),
            );
        }
        Verdict::NotSequential { latest } => {
            lines.push(latest_line(latest));
            lines.push(
                "Version name is unique, however it does not follow the semantic versioning system. \
                 Here is a list of versions already on the server:"
                    .to_string(),
            );
            lines.push(format!("{existing:?}"));
            lines.push(
                "Please make sure the version number you specify fits into this semantic versioning system, and try again."
                    .to_string(),
            );
        }
        Verdict::MalformedSet => {
            lines.push(
                "None of the versions on the server follow the MAJOR.MINOR.PATCH format, \
                 so the ordering cannot be checked. Here is what was found:"
                    .to_string(),
            );
            lines.push(format!("{existing:?}"));
        }
    }

    if !verdict.is_accepted() {
        lines.push(bypass_hint.to_string());
    }
    lines
}

fn latest_line(latest: &Version) -> String {
    format!("The latest version currently is {latest}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const HINT: &str = "Or, rerun with '--no-verify'";

    fn v(major: u64, minor: u64, patch: u64) -> Version {
        Version::new(major, minor, patch)
    }

    #[test]
    fn report_for_bootstrap_has_no_latest_line() {
        let lines = report(&Verdict::AcceptLatest { latest: None }, &[], HINT);

        assert_eq!(
            lines,
            vec![
                "The version name is unique, and conforms to the semantic versioning system. \
                 Proceeding with this version as the tag."
                    .to_string()
            ]
        );
    }

    #[test]
    fn report_for_behind_names_latest_and_predecessor() {
        let verdict = Verdict::AcceptBehind {
            latest: v(2, 0, 0),
            predecessor: v(1, 0, 0),
        };

        let lines = report(&verdict, &[], HINT);

        assert_eq!(
            lines,
            vec![
                "The latest version currently is 2.0.0".to_string(),
                ACCEPTED.to_string(),
                "However, this version is behind the latest version, which is 2.0.0".to_string(),
                "This version will go directly ahead of 1.0.0".to_string(),
            ]
        );
    }

    #[test]
    fn report_for_not_sequential_lists_existing_versions() {
        let existing = vec!["1.0.0".to_string(), "junk".to_string()];
        let verdict = Verdict::NotSequential { latest: v(1, 0, 0) };

        let lines = report(&verdict, &existing, HINT);

        assert_eq!(lines[0], "The latest version currently is 1.0.0");
        assert!(lines.contains(&r#"["1.0.0", "junk"]"#.to_string()));
    }

    #[rstest]
    #[case(Verdict::Duplicate { existing: v(1, 0, 0) })]
    #[case(Verdict::NotBootstrapped)]
    #[case(Verdict::NotSequential { latest: v(1, 0, 0) })]
    #[case(Verdict::MalformedSet)]
    fn report_for_rejection_ends_with_bypass_hint(#[case] verdict: Verdict) {
        let lines = report(&verdict, &["x".to_string()], HINT);

        assert_eq!(lines.last().map(String::as_str), Some(HINT));
    }

    #[rstest]
    #[case(Verdict::AcceptLatest { latest: Some(v(1, 0, 0)) })]
    #[case(Verdict::AcceptBehind { latest: v(2, 0, 0), predecessor: v(1, 0, 0) })]
    fn report_for_acceptance_omits_bypass_hint(#[case] verdict: Verdict) {
        let lines = report(&verdict, &[], HINT);

        assert!(!lines.iter().any(|line| line == HINT));
    }
}
