pub mod orchestration;

pub use orchestration::{run_release_notes, ReleaseNotesArgs, ReleaseNotesOutput};
