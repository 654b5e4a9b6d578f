use git2::Repository;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::{HeraldError, Result};

/// Wrapper around git2 Repository for locating the hosted project.
pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Discovers the git repository containing `path` or one of its parents.
    ///
    /// # Returns
    /// * `Ok(GitRepo)` - Successfully initialized repository wrapper
    /// * `Err` - If `path` is not inside a git repository
    pub fn discover(path: impl AsRef<Path>) -> Result<Self> {
        let repo = Repository::discover(path.as_ref()).map_err(|e| {
            HeraldError::repository(format!("Not in a git repository: {}", e.message()))
        })?;
        Ok(GitRepo { repo })
    }

    /// Returns the fetch URL configured for `remote_name`.
    pub fn remote_url(&self, remote_name: &str) -> Result<String> {
        let remote = self
            .repo
            .find_remote(remote_name)
            .map_err(|_| HeraldError::repository(format!("Remote '{}' not found", remote_name)))?;

        remote.url().map(str::to_string).ok_or_else(|| {
            HeraldError::repository(format!("Remote '{}' has no valid URL", remote_name))
        })
    }

    /// Returns the `owner/name` of the GitHub project behind `remote_name`.
    pub fn github_slug(&self, remote_name: &str) -> Result<String> {
        let url = self.remote_url(remote_name)?;
        parse_github_slug(&url).ok_or_else(|| {
            HeraldError::repository(format!(
                "Remote '{}' does not point at GitHub: {}",
                remote_name, url
            ))
        })
    }
}

fn slug_regex() -> Option<&'static Regex> {
    static SLUG: OnceLock<Option<Regex>> = OnceLock::new();
    SLUG.get_or_init(|| Regex::new(r"github\.com[:/]([\w.\-]+/[\w.\-]+?)(?:\.git)?/?$").ok())
        .as_ref()
}

/// Extracts `owner/name` from an SSH or HTTPS GitHub remote URL.
///
/// A trailing `.git` is not part of the slug.
pub fn parse_github_slug(url: &str) -> Option<String> {
    slug_regex()?
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}
