//! Commit header classification.
//!
//! Maps the first line of a commit message to a normalized display string
//! and the release-note section it belongs to. Classification never fails:
//! headers without a recognizable tag are filed as bugfixes.

use std::collections::HashSet;

use tracing::trace;

use crate::domain::{header_line, CategoryKey, ParsedTag};

/// Literal marker that files a commit under `breaking` verbatim.
pub const SYSADMIN_MARKER: &str = "[SYSADMIN ACTION]";

const FALLBACK_TYPE: &str = "Bugfix";
const TESTING_SUBTYPES: [&str; 4] = ["testing", "test", "tests", "vagrant"];

/// Result of classifying a single commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub display: String,
    pub category: CategoryKey,
}

/// Type and subtype being rewritten by the alias rules.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TagDraft {
    r#type: String,
    subtype: String,
    category: Option<CategoryKey>,
}

enum Flow {
    Continue,
    Halt,
}

type AliasRule = fn(&mut TagDraft, &HashSet<CategoryKey>) -> Option<Flow>;

/// Alias rules in evaluation order. A rule returns `None` when it does not
/// apply; `Some(Flow::Halt)` stops evaluation after it fired.
const ALIAS_RULES: &[(&str, AliasRule)] = &[
    ("vapt-typo", vapt_typo as AliasRule),
    ("ui-as-feature", ui_as_feature as AliasRule),
    ("testing-subtype", testing_subtype as AliasRule),
    ("dev-dependency", dev_dependency as AliasRule),
    ("unknown-type", unknown_type as AliasRule),
    ("testing-swap", testing_swap as AliasRule),
];

fn vapt_typo(draft: &mut TagDraft, _: &HashSet<CategoryKey>) -> Option<Flow> {
    if !draft.r#type.eq_ignore_ascii_case("vapt") {
        return None;
    }
    draft.r#type = "VPAT".to_string();
    Some(Flow::Continue)
}

fn ui_as_feature(draft: &mut TagDraft, _: &HashSet<CategoryKey>) -> Option<Flow> {
    let lowered = draft.r#type.to_lowercase();
    if lowered != "ui" && lowered != "ui/ux" {
        return None;
    }
    draft.r#type = "Feature".to_string();
    if draft.subtype.is_empty() {
        draft.subtype = "UI".to_string();
    }
    Some(Flow::Continue)
}

fn testing_subtype(draft: &mut TagDraft, _: &HashSet<CategoryKey>) -> Option<Flow> {
    if !TESTING_SUBTYPES.contains(&draft.subtype.to_lowercase().as_str()) {
        return None;
    }
    draft.subtype = "Testing".to_string();
    Some(Flow::Continue)
}

fn dev_dependency(draft: &mut TagDraft, _: &HashSet<CategoryKey>) -> Option<Flow> {
    match draft.r#type.to_lowercase().as_str() {
        "dependencydev" => draft.r#type = "DevDependency".to_string(),
        "devdependency" => {}
        _ => return None,
    }
    draft.category = Some(CategoryKey::Dependency);
    Some(Flow::Halt)
}

fn unknown_type(draft: &mut TagDraft, known: &HashSet<CategoryKey>) -> Option<Flow> {
    if is_known(&draft.r#type, known) {
        return None;
    }
    draft.r#type = if draft.subtype.is_empty() {
        FALLBACK_TYPE.to_string()
    } else {
        draft.subtype.clone()
    };
    Some(Flow::Halt)
}

fn testing_swap(draft: &mut TagDraft, _: &HashSet<CategoryKey>) -> Option<Flow> {
    if !draft.subtype.eq_ignore_ascii_case("testing") {
        return None;
    }
    draft.subtype = std::mem::replace(&mut draft.r#type, "Testing".to_string());
    Some(Flow::Halt)
}

fn known_key(token: &str, known: &HashSet<CategoryKey>) -> Option<CategoryKey> {
    CategoryKey::from_key(&token.to_lowercase()).filter(|key| known.contains(key))
}

fn is_known(token: &str, known: &HashSet<CategoryKey>) -> bool {
    known_key(token, known).is_some()
}

/// Every category key, for callers that do not restrict the known set.
pub fn all_known_types() -> HashSet<CategoryKey> {
    CategoryKey::ALL.into_iter().collect()
}

/// Classify one raw commit message.
///
/// `known_types` is the set of section keys a tag may name directly. Types
/// outside it are recategorized by their subtype or filed as bugfixes.
pub fn classify(message: &str, known_types: &HashSet<CategoryKey>) -> Classification {
    let header = header_line(message);

    if header.contains(SYSADMIN_MARKER) {
        return Classification {
            display: header.to_string(),
            category: CategoryKey::Breaking,
        };
    }

    let (mut draft, remainder) = match ParsedTag::parse(header) {
        Some(tag) => (
            TagDraft {
                r#type: tag.r#type,
                subtype: tag.subtype,
                category: None,
            },
            tag.remainder,
        ),
        None => (
            TagDraft {
                r#type: FALLBACK_TYPE.to_string(),
                subtype: String::new(),
                category: None,
            },
            header.to_string(),
        ),
    };

    for (name, rule) in ALIAS_RULES {
        match rule(&mut draft, known_types) {
            Some(Flow::Halt) => {
                trace!(rule = *name, header, "alias rule fired, halting");
                break;
            }
            Some(Flow::Continue) => trace!(rule = *name, header, "alias rule fired"),
            None => {}
        }
    }

    let mut display = format!("[{}", draft.r#type);
    if !draft.subtype.is_empty() {
        display.push(':');
        display.push_str(&draft.subtype);
    }
    display.push_str("] ");
    display.push_str(&remainder);

    let category = draft
        .category
        .or_else(|| known_key(&draft.r#type, known_types))
        .unwrap_or(CategoryKey::Bugfix);

    Classification { display, category }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(message: &str) -> (String, CategoryKey) {
        let c = classify(message, &all_known_types());
        (c.display, c.category)
    }

    #[test]
    fn test_sysadmin_marker_wins_over_tag() {
        assert_eq!(
            run("[Feature] [SYSADMIN ACTION] rotate keys"),
            (
                "[Feature] [SYSADMIN ACTION] rotate keys".to_string(),
                CategoryKey::Breaking
            )
        );
    }

    #[test]
    fn test_sysadmin_marker_is_case_sensitive() {
        let (_, category) = run("[sysadmin action] lowercase marker");
        assert_eq!(category, CategoryKey::Bugfix);
    }

    #[test]
    fn test_vapt_typo_becomes_vpat() {
        assert_eq!(
            run("[vapt] label inputs"),
            ("[VPAT] label inputs".to_string(), CategoryKey::Vpat)
        );
    }

    #[test]
    fn test_ui_keeps_explicit_subtype() {
        assert_eq!(
            run("[UI/UX:Forum] new layout"),
            ("[Feature:Forum] new layout".to_string(), CategoryKey::Feature)
        );
    }

    #[test]
    fn test_ui_with_testing_subtype_swaps() {
        assert_eq!(
            run("[ui:tests] cover navbar"),
            ("[Testing:Feature] cover navbar".to_string(), CategoryKey::Testing)
        );
    }

    #[test]
    fn test_testing_alias_then_swap() {
        assert_eq!(
            run("[Bugfix:vagrant] fix box"),
            ("[Testing:Bugfix] fix box".to_string(), CategoryKey::Testing)
        );
    }

    #[test]
    fn test_devdependency_keeps_spelling() {
        assert_eq!(
            run("[devDependency] bump eslint"),
            ("[devDependency] bump eslint".to_string(), CategoryKey::Dependency)
        );
    }

    #[test]
    fn test_dev_dependency_halts_before_testing_swap() {
        assert_eq!(
            run("[DependencyDev:Test] bump jest"),
            (
                "[DevDependency:Testing] bump jest".to_string(),
                CategoryKey::Dependency
            )
        );
    }

    #[test]
    fn test_unknown_type_without_subtype_is_bugfix() {
        assert_eq!(
            run("[Chore] tidy"),
            ("[Bugfix] tidy".to_string(), CategoryKey::Bugfix)
        );
    }

    #[test]
    fn test_unknown_type_promotes_known_subtype() {
        assert_eq!(
            run("[Submission:Feature] allow zip"),
            ("[Feature:Feature] allow zip".to_string(), CategoryKey::Feature)
        );
    }

    #[test]
    fn test_unknown_type_promotes_unknown_subtype_to_bugfix() {
        assert_eq!(
            run("[Foo:Bar] odd tag"),
            ("[Bar:Bar] odd tag".to_string(), CategoryKey::Bugfix)
        );
    }

    #[test]
    fn test_unknown_type_with_testing_subtype_lands_in_testing() {
        let (_, category) = run("[Forum:test] add fixture");
        assert_eq!(category, CategoryKey::Testing);
    }

    #[test]
    fn test_restricted_known_set_falls_back() {
        let known: HashSet<CategoryKey> = [CategoryKey::Bugfix, CategoryKey::Feature]
            .into_iter()
            .collect();
        let c = classify("[Refactor] split module", &known);
        assert_eq!(c.display, "[Bugfix] split module");
        assert_eq!(c.category, CategoryKey::Bugfix);
    }

    #[test]
    fn test_only_first_line_is_used() {
        assert_eq!(
            run("[Documentation] update readme\n\n[Feature] not this"),
            (
                "[Documentation] update readme".to_string(),
                CategoryKey::Documentation
            )
        );
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(run(""), ("[Bugfix] ".to_string(), CategoryKey::Bugfix));
    }
}
