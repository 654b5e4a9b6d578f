pub mod aggregator;
pub mod boundary;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git_ops;
pub mod github;
pub mod ui;

pub use aggregator::{aggregate, ReleaseGrouping};
pub use classifier::{classify, Classification};
pub use domain::CategoryKey;
pub use error::{HeraldError, Result};
