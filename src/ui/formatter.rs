//! Pure formatting functions for release notes.
//!
//! Nothing here prints; callers decide where the text goes.

use crate::aggregator::ReleaseGrouping;
use crate::config::CategoryConfig;
use crate::github::Release;

/// Placeholder printed under a shown section with no entries.
pub const EMPTY_SECTION: &str = "*None*";

/// Header line linking to the notes of the previous release.
pub fn format_previous_release(previous: &Release) -> String {
    format!(
        "*Previous Release Notes:* [{}]({})",
        previous.tag_name, previous.html_url
    )
}

/// Render the grouped entries as release-note text.
///
/// Sections print in the order of `categories`. A section without entries
/// prints [`EMPTY_SECTION`] when its `show_when_empty` flag is set and is
/// left out otherwise.
pub fn render_release_notes(
    previous: &Release,
    grouping: &ReleaseGrouping,
    categories: &[CategoryConfig],
) -> String {
    let mut notes = String::new();
    notes.push_str(&format_previous_release(previous));
    notes.push_str("\n\n");

    for category in categories {
        let entries = grouping.entries(category.key);
        if entries.is_empty() && !category.show_when_empty {
            continue;
        }

        notes.push_str(&format!("{}\n\n", category.title));
        if entries.is_empty() {
            notes.push_str(&format!("{}\n", EMPTY_SECTION));
        } else {
            for entry in entries {
                notes.push_str(&format!("* {}\n", entry));
            }
        }
        notes.push('\n');
    }

    notes
}
