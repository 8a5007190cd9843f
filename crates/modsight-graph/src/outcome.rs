//! Tagged result of asking for build-graph facts.

use strum::Display;

use crate::facts::BuildGraphFacts;

/// Why semantic analysis did not run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum SkipReason {
    /// The module file has syntax errors, so its requirements are not
    /// trustworthy.
    ParseErrors,
    /// The provider reported that it cannot compute facts.
    Unavailable,
    /// The provider has no facts for this snapshot yet.
    NoFacts,
}

/// Facts for a snapshot, or the reason there are none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphOutcome {
    /// Facts were obtained and analysis can proceed.
    Analyzed(BuildGraphFacts),
    /// Analysis was skipped.
    Skipped(SkipReason),
}

impl GraphOutcome {
    /// Returns the facts when analysis can proceed.
    #[must_use]
    pub const fn facts(&self) -> Option<&BuildGraphFacts> {
        match self {
            Self::Analyzed(facts) => Some(facts),
            Self::Skipped(_) => None,
        }
    }

    /// Returns the skip reason, if analysis was skipped.
    #[must_use]
    pub const fn skip_reason(&self) -> Option<SkipReason> {
        match self {
            Self::Analyzed(_) => None,
            Self::Skipped(reason) => Some(*reason),
        }
    }
}

impl From<Option<BuildGraphFacts>> for GraphOutcome {
    fn from(facts: Option<BuildGraphFacts>) -> Self {
        facts.map_or(Self::Skipped(SkipReason::NoFacts), Self::Analyzed)
    }
}
