use serde::{Deserialize, Serialize};
use std::fmt;

/// Release-note section a commit is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKey {
    Security,
    Breaking,
    Feature,
    Vpat,
    Bugfix,
    Refactor,
    Dependency,
    Testing,
    Documentation,
}

impl CategoryKey {
    /// All keys in canonical presentation order.
    pub const ALL: [CategoryKey; 9] = [
        CategoryKey::Security,
        CategoryKey::Breaking,
        CategoryKey::Feature,
        CategoryKey::Vpat,
        CategoryKey::Bugfix,
        CategoryKey::Refactor,
        CategoryKey::Dependency,
        CategoryKey::Testing,
        CategoryKey::Documentation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKey::Security => "security",
            CategoryKey::Breaking => "breaking",
            CategoryKey::Feature => "feature",
            CategoryKey::Vpat => "vpat",
            CategoryKey::Bugfix => "bugfix",
            CategoryKey::Refactor => "refactor",
            CategoryKey::Dependency => "dependency",
            CategoryKey::Testing => "testing",
            CategoryKey::Documentation => "documentation",
        }
    }

    /// Look up a key by its lowercase identifier.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
