use std::fmt;

/// Warnings about the compared revision range.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The comparison returned no commits
    NoCommitsInRange { from: String, to: String },
    /// The hosting API returned fewer commits than the range holds
    TruncatedComparison { returned: usize, total: usize },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoCommitsInRange { from, to } => {
                write!(f, "No commits between '{}' and '{}'", from, to)
            }
            BoundaryWarning::TruncatedComparison { returned, total } => {
                write!(
                    f,
                    "Comparison truncated: only {} of {} commits were returned",
                    returned, total
                )
            }
        }
    }
}
