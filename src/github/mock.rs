use std::collections::HashMap;

use crate::error::{HeraldError, Result};
use crate::github::{CommitDetail, CompareCommit, Comparison, Release, ReleaseSource};

/// In-memory release source for testing without network access
#[derive(Debug, Default)]
pub struct MockSource {
    releases: Vec<Release>,
    comparisons: HashMap<(String, String), Comparison>,
}

impl MockSource {
    /// Create a new empty mock source
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a release; the last one added is the latest
    pub fn add_release(&mut self, tag: impl Into<String>, html_url: impl Into<String>) {
        self.releases.push(Release {
            tag_name: tag.into(),
            html_url: html_url.into(),
        });
    }

    /// Register the commit messages returned for `base...head`
    pub fn add_comparison<S: Into<String>>(
        &mut self,
        base: impl Into<String>,
        head: impl Into<String>,
        messages: impl IntoIterator<Item = S>,
    ) {
        let commits: Vec<CompareCommit> = messages
            .into_iter()
            .enumerate()
            .map(|(i, message)| CompareCommit {
                sha: format!("{:040x}", i + 1),
                commit: CommitDetail {
                    message: message.into(),
                },
            })
            .collect();
        let comparison = Comparison {
            total_commits: commits.len(),
            commits,
        };
        self.comparisons
            .insert((base.into(), head.into()), comparison);
    }

    /// Register a comparison as-is, e.g. one reporting more commits than it carries
    pub fn add_raw_comparison(
        &mut self,
        base: impl Into<String>,
        head: impl Into<String>,
        comparison: Comparison,
    ) {
        self.comparisons
            .insert((base.into(), head.into()), comparison);
    }
}

impl ReleaseSource for MockSource {
    fn latest_release(&self) -> Result<Release> {
        self.releases
            .last()
            .cloned()
            .ok_or_else(|| HeraldError::api(404, "Not Found"))
    }

    fn release_by_tag(&self, tag: &str) -> Result<Release> {
        self.releases
            .iter()
            .find(|r| r.tag_name == tag)
            .cloned()
            .ok_or_else(|| HeraldError::api(404, "Not Found"))
    }

    fn compare(&self, base: &str, head: &str) -> Result<Comparison> {
        self.comparisons
            .get(&(base.to_string(), head.to_string()))
            .cloned()
            .ok_or_else(|| HeraldError::api(404, "No common ancestor between revisions"))
    }
}
