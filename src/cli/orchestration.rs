//! Release-notes workflow orchestration
//!
//! Keeps the fetch, classify and render steps apart from CLI argument
//! parsing so the workflow can run against any [`ReleaseSource`].

use tracing::{info, warn};

use crate::aggregator::{aggregate, ReleaseGrouping};
use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::error::Result;
use crate::github::{Release, ReleaseSource};
use crate::ui::render_release_notes;

/// Arguments for the release-notes workflow
///
/// Mirrors the CLI flags without depending on clap.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReleaseNotesArgs {
    /// Release tag to compare from; the latest release when unset
    pub from: Option<String>,

    /// Revision to compare up to; `repository.default_to` when unset
    pub to: Option<String>,
}

/// Result of a successful release-notes run
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseNotesOutput {
    /// The release the notes are drafted against
    pub previous: Release,

    /// The revision compared up to
    pub to: String,

    pub grouping: ReleaseGrouping,

    /// Rendered release-note text
    pub notes: String,

    /// Non-fatal conditions found along the way
    pub warnings: Vec<BoundaryWarning>,
}

/// Main release-notes workflow
///
/// 1. Resolve the previous release
/// 2. Compare it against the target revision
/// 3. Group the commits by section
/// 4. Render the notes
pub fn run_release_notes<S: ReleaseSource>(
    source: &S,
    args: &ReleaseNotesArgs,
    config: &Config,
) -> Result<ReleaseNotesOutput> {
    let previous = match args.from.as_deref() {
        Some(tag) => source.release_by_tag(tag)?,
        None => source.latest_release()?,
    };
    let to = args
        .to
        .clone()
        .unwrap_or_else(|| config.repository.default_to.clone());

    info!(from = %previous.tag_name, %to, "drafting release notes");
    let comparison = source.compare(&previous.tag_name, &to)?;

    let mut warnings = Vec::new();
    if comparison.commits.is_empty() {
        warnings.push(BoundaryWarning::NoCommitsInRange {
            from: previous.tag_name.clone(),
            to: to.clone(),
        });
    }
    if comparison.total_commits > comparison.commits.len() {
        warnings.push(BoundaryWarning::TruncatedComparison {
            returned: comparison.commits.len(),
            total: comparison.total_commits,
        });
    }
    for warning in &warnings {
        warn!(%warning, "boundary warning");
    }

    let grouping = aggregate(comparison.messages(), &config.category_order());
    let notes = render_release_notes(&previous, &grouping, &config.categories);

    Ok(ReleaseNotesOutput {
        previous,
        to,
        grouping,
        notes,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CategoryKey;
    use crate::github::MockSource;

    fn source() -> MockSource {
        let mut source = MockSource::new();
        source.add_release("v1.0.0", "https://example.test/v1.0.0");
        source.add_release("v1.1.0", "https://example.test/v1.1.0");
        source
    }

    #[test]
    fn test_defaults_to_latest_release_and_configured_branch() {
        let mut source = source();
        source.add_comparison("v1.1.0", "master", ["[Feature] a"]);

        let output =
            run_release_notes(&source, &ReleaseNotesArgs::default(), &Config::default()).unwrap();
        assert_eq!(output.previous.tag_name, "v1.1.0");
        assert_eq!(output.to, "master");
        assert_eq!(output.grouping.entries(CategoryKey::Feature), ["[Feature] a"]);
        assert!(output.warnings.is_empty());
    }

    #[test]
    fn test_explicit_range() {
        let mut source = source();
        source.add_comparison("v1.0.0", "develop", ["[Bugfix] b"]);
        let args = ReleaseNotesArgs {
            from: Some("v1.0.0".to_string()),
            to: Some("develop".to_string()),
        };

        let output = run_release_notes(&source, &args, &Config::default()).unwrap();
        assert!(output
            .notes
            .starts_with("*Previous Release Notes:* [v1.0.0](https://example.test/v1.0.0)"));
    }

    #[test]
    fn test_empty_range_warns() {
        let mut source = source();
        source.add_comparison("v1.1.0", "master", Vec::<String>::new());

        let output =
            run_release_notes(&source, &ReleaseNotesArgs::default(), &Config::default()).unwrap();
        assert!(output.grouping.is_empty());
        assert_eq!(
            output.warnings,
            vec![BoundaryWarning::NoCommitsInRange {
                from: "v1.1.0".to_string(),
                to: "master".to_string(),
            }]
        );
    }

    #[test]
    fn test_unknown_from_tag_is_an_error() {
        let args = ReleaseNotesArgs {
            from: Some("v9".to_string()),
            to: None,
        };
        assert!(run_release_notes(&source(), &args, &Config::default()).is_err());
    }
}
