//! Submission outcomes
//!
//! Every submission resolves to a value: accepted with points, or rejected
//! with a reason the presentation layer can show as an alert. Rejections are
//! never surfaced as errors.

use std::fmt;

/// Why a submission was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    /// Two characters or fewer after normalization
    TooShort,
    /// Equal to the root word
    SameAsRoot,
    /// Already accepted this session
    AlreadyUsed,
    /// Uses a letter the root word does not contain
    NotSpellable,
    /// Not recognized by the dictionary
    NotRecognized,
}

impl RejectReason {
    /// Alert title for this rejection
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::TooShort => "Word too short",
            Self::SameAsRoot => "That's the root word",
            Self::AlreadyUsed => "Word used already",
            Self::NotSpellable => "Word not possible",
            Self::NotRecognized => "Word not recognized",
        }
    }

    /// Alert message for this rejection, phrased against the current root
    #[must_use]
    pub fn message(self, root_word: &str) -> String {
        match self {
            Self::TooShort => "Words must be longer than two letters".to_string(),
            Self::SameAsRoot => "Spelling the root word back doesn't count".to_string(),
            Self::AlreadyUsed => "Be more original".to_string(),
            Self::NotSpellable => format!("You can't spell that word from '{root_word}'"),
            Self::NotRecognized => "You can't just make them up, you know".to_string(),
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Result of submitting a candidate word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The word was accepted and scored
    Accepted {
        /// The normalized word as it entered the history
        word: String,
        /// Points earned by this word
        score_delta: u32,
    },
    /// The word was rejected; session state is unchanged
    Rejected(RejectReason),
}

impl SubmissionOutcome {
    /// Whether the submission was accepted
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// The rejection reason, if any
    #[must_use]
    pub const fn reason(&self) -> Option<RejectReason> {
        match self {
            Self::Rejected(reason) => Some(*reason),
            Self::Accepted { .. } => None,
        }
    }
}
