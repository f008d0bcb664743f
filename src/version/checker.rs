//! Candidate version classification against published versions

use semver::Version;
use tracing::{debug, info};

use crate::version::error::GateError;
use crate::version::semver::{is_direct_successor, is_later, parse_version};

/// Outcome of evaluating a candidate version
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Candidate becomes the new tip. `latest` is None when bootstrapping at 0.0.0
    AcceptLatest { latest: Option<Version> },
    /// Candidate is sequential but extends an older version, not the tip
    AcceptBehind {
        latest: Version,
        predecessor: Version,
    },
    /// Candidate already exists
    Duplicate { existing: Version },
    /// No versions exist yet and the candidate is not 0.0.0
    NotBootstrapped,
    /// Candidate is not a direct successor of any existing version
    NotSequential { latest: Version },
    /// None of the existing entries is a valid MAJOR.MINOR.PATCH version
    MalformedSet,
}

impl Verdict {
    /// Process exit code for this verdict: 0 accept, 1 reject, 2 accept behind tip
    pub fn exit_code(&self) -> u8 {
        match self {
            Verdict::AcceptLatest { .. } => 0,
            Verdict::AcceptBehind { .. } => 2,
            Verdict::Duplicate { .. }
            | Verdict::NotBootstrapped
            | Verdict::NotSequential { .. }
            | Verdict::MalformedSet => 1,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(
            self,
            Verdict::AcceptLatest { .. } | Verdict::AcceptBehind { .. }
        )
    }
}

/// Running state of the single pass over existing versions
#[derive(Default)]
struct Scan {
    max_version: Option<Version>,
    prev_version: Option<Version>,
}

impl Scan {
    fn observe(&mut self, candidate: &Version, version: Version) {
        // Only strictly later values replace, so the first of equal entries wins
        if self.prev_version.as_ref().is_none_or(|prev| is_later(&version, prev))
            && is_direct_successor(candidate, &version)
        {
            self.prev_version = Some(version.clone());
        }
        if self.max_version.as_ref().is_none_or(|max| is_later(&version, max)) {
            self.max_version = Some(version);
        }
    }
}

/// Evaluate a candidate version against the already-published versions
///
/// Existing entries that are not strict `MAJOR.MINOR.PATCH` are skipped.
/// A malformed candidate is rejected before anything else.
pub fn evaluate(candidate: &str, existing: &[String]) -> Result<Verdict, GateError> {
    let candidate_version = parse_version(candidate)
        .ok_or_else(|| GateError::InvalidCandidate(candidate.to_string()))?;

    if existing.is_empty() {
        let verdict = if candidate_version == Version::new(0, 0, 0) {
            Verdict::AcceptLatest { latest: None }
        } else {
            Verdict::NotBootstrapped
        };
        info!("Evaluated {} with no existing versions: {:?}", candidate, verdict);
        return Ok(verdict);
    }

    let mut scan = Scan::default();
    for raw in existing {
        let Some(version) = parse_version(raw) else {
            debug!("Skipping non-conforming version '{}'", raw);
            continue;
        };
        if version == candidate_version {
            info!("Candidate {} already exists", candidate);
            return Ok(Verdict::Duplicate { existing: version });
        }
        scan.observe(&candidate_version, version);
    }

    let verdict = match scan {
        Scan {
            max_version: None, ..
        } => Verdict::MalformedSet,
        Scan {
            max_version: Some(latest),
            prev_version: None,
        } => Verdict::NotSequential { latest },
        Scan {
            max_version: Some(latest),
            prev_version: Some(predecessor),
        } if predecessor == latest => Verdict::AcceptLatest {
            latest: Some(latest),
        },
        Scan {
            max_version: Some(latest),
            prev_version: Some(predecessor),
        } => Verdict::AcceptBehind {
            latest,
            predecessor,
        },
    };

    info!(
        "Evaluated {} against {} existing versions: {:?}",
        candidate,
        existing.len(),
        verdict
    );
    Ok(verdict)
}
