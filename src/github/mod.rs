//! Hosting API abstraction layer
//!
//! This module provides a trait-based abstraction over the release and
//! comparison endpoints herald reads from, allowing for a real GitHub
//! client and an in-memory implementation for testing.
//!
//! # Overview
//!
//! - [client::GitHubClient]: talks to the GitHub REST API with `reqwest`
//! - [mock::MockSource]: serves canned releases and comparisons
//!
//! Most code should depend on the [ReleaseSource] trait rather than on a
//! concrete implementation.

pub mod client;
pub mod mock;

pub use client::GitHubClient;
pub use mock::MockSource;

use serde::Deserialize;

use crate::error::Result;

/// A published release
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Release {
    /// The git tag the release was cut from
    pub tag_name: String,
    /// Web page of the release notes
    pub html_url: String,
}

/// Commits between two revisions
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Comparison {
    /// Number of commits in the range, which may exceed `commits.len()`
    #[serde(default)]
    pub total_commits: usize,
    pub commits: Vec<CompareCommit>,
}

impl Comparison {
    /// Raw commit messages in the order the API returned them.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.commits.iter().map(|c| c.commit.message.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CompareCommit {
    #[serde(default)]
    pub sha: String,
    pub commit: CommitDetail,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommitDetail {
    pub message: String,
}

/// Source of releases and revision comparisons for a single repository.
pub trait ReleaseSource {
    /// The most recent published release.
    fn latest_release(&self) -> Result<Release>;

    /// The release cut from `tag`.
    fn release_by_tag(&self, tag: &str) -> Result<Release>;

    /// Commits reachable from `head` but not from `base`, oldest first.
    fn compare(&self, base: &str, head: &str) -> Result<Comparison>;
}
