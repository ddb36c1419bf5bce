//! Checklist catalogue configuration: parsing, normalization, and loading.
//!
//! The catalogue is a TOML file describing the standard workflow checklist:
//! an ordered list of template tasks, each with a responsible role and zero
//! or more declared note attributes. The file order is the checklist order —
//! it decides each contract task's `sequence_no` at bootstrap.
//!
//! Key behaviors:
//! - Normalization trims task names, lowercases role names, and de-duplicates
//!   tasks by case-insensitive name while preserving order.
//! - Attribute lists are trimmed and de-duplicated per task, preserving order.
//! - Empty names/roles/attributes after trimming are errors.
//!
//! Entrypoints:
//! - Parse + normalize from a TOML string: [`load_catalog_str`]
//! - Parse + normalize from a file path: [`load_catalog_path`]
//!
//! The normalized shape is what [`crate::templates::sync`] reconciles into
//! [`crate::schema::template_tasks`] and
//! [`crate::schema::template_task_attributes`].

use std::collections::HashSet;
use std::mem;

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};
use toml::from_str;

/// Top-level catalogue: the ordered checklist.
#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ChecklistCatalog {
    /// Template tasks in checklist order.
    pub tasks: Vec<TemplateCfg>,
}

/// One checklist step in the catalogue.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TemplateCfg {
    /// Step name (e.g., "Survei Lapangan"). Phase operations match contract
    /// tasks by substring on this name, so renames change matching behavior.
    pub name: String,
    /// Responsible role name, normalized to lowercase (e.g., "credit_analyst").
    pub role: String,
    /// Declared note attributes, copied to contracts as empty pending stubs.
    #[serde(default)]
    pub attributes: Vec<String>,
}

/// Summary of changes performed during normalization.
#[derive(Debug, Default)]
pub struct NormalizationReport {
    /// Count of removed duplicate tasks (same name ignoring case).
    pub tasks_deduped: usize,
    /// Count of removed duplicate attributes across all tasks.
    pub attributes_deduped: usize,
}

/// Normalize a catalogue in place.
///
/// What normalization does:
/// - Trim task names; reject empties; de-duplicate by case-insensitive name,
///   keeping the first occurrence (checklist order is significant)
/// - Trim + lowercase role names; reject empties
/// - Trim attributes; reject empties; de-duplicate per task, preserving order
///
/// Returns a [`NormalizationReport`] detailing the changes made.
pub fn normalize_catalog(cat: &mut ChecklistCatalog) -> anyhow::Result<NormalizationReport> {
    let mut report = NormalizationReport::default();

    let old = mem::take(&mut cat.tasks);
    let mut rebuilt: Vec<TemplateCfg> = Vec::with_capacity(old.len());
    let mut seen_names: HashSet<String> = HashSet::new();

    for mut task in old {
        task.name = task.name.trim().to_string();
        if task.name.is_empty() {
            bail!("template task name cannot be empty after trimming");
        }
        if !seen_names.insert(task.name.to_lowercase()) {
            report.tasks_deduped += 1;
            continue;
        }

        task.role = task.role.trim().to_lowercase();
        if task.role.is_empty() {
            bail!("template task '{}' has an empty role", task.name);
        }

        let before_len = task.attributes.len();
        let mut seen_attrs = HashSet::new();
        let mut attrs = Vec::with_capacity(before_len);
        for attr in mem::take(&mut task.attributes) {
            let attr = attr.trim().to_string();
            if attr.is_empty() {
                bail!("template task '{}' has an empty attribute", task.name);
            }
            if seen_attrs.insert(attr.clone()) {
                attrs.push(attr);
            }
        }
        report.attributes_deduped += before_len.saturating_sub(attrs.len());
        task.attributes = attrs;

        rebuilt.push(task);
    }

    cat.tasks = rebuilt;
    Ok(report)
}

/// Parse and normalize a catalogue from a TOML string.
pub fn load_catalog_str(toml_str: &str) -> anyhow::Result<ChecklistCatalog> {
    let mut cat: ChecklistCatalog = from_str(toml_str).context("failed to parse checklist TOML")?;
    let _report = normalize_catalog(&mut cat).context("normalize_catalog failed")?;
    Ok(cat)
}

/// Read a catalogue TOML file from disk, parse, and normalize it.
///
/// See [`load_catalog_str`] for details on parsing and normalization.
pub fn load_catalog_path(path: impl AsRef<std::path::Path>) -> anyhow::Result<ChecklistCatalog> {
    let text = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("read checklist file {}", path.as_ref().display()))?;
    load_catalog_str(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mk() -> ChecklistCatalog {
        ChecklistCatalog {
            tasks: vec![
                TemplateCfg {
                    name: "  Credit Scoring ".into(),
                    role: "Credit_Analyst".into(),
                    attributes: vec![
                        "auto_scoring_note".into(),
                        " auto_scoring_note".into(), // dup -> dropped
                    ],
                },
                TemplateCfg {
                    name: "credit scoring".into(), // dup name -> dropped
                    role: "credit_analyst".into(),
                    attributes: vec![],
                },
                TemplateCfg {
                    name: "Survei Lapangan".into(),
                    role: "SURVEYOR".into(),
                    attributes: vec!["survey_note".into()],
                },
            ],
        }
    }

    #[test]
    fn normalizes_and_dedupes() {
        let mut cat = mk();
        let report = normalize_catalog(&mut cat).unwrap();

        assert_eq!(report.tasks_deduped, 1);
        assert_eq!(report.attributes_deduped, 1);
        assert_eq!(cat.tasks.len(), 2);
        assert_eq!(cat.tasks[0].name, "Credit Scoring"); // trimmed, first kept
        assert_eq!(cat.tasks[0].role, "credit_analyst");
        assert_eq!(cat.tasks[0].attributes, vec!["auto_scoring_note"]);
        assert_eq!(cat.tasks[1].role, "surveyor");
    }

    #[test]
    fn empty_name_errors() {
        let mut cat = ChecklistCatalog {
            tasks: vec![TemplateCfg {
                name: "   ".into(),
                role: "surveyor".into(),
                attributes: vec![],
            }],
        };
        let err = normalize_catalog(&mut cat).unwrap_err();
        assert!(err.to_string().contains("cannot be empty"));
    }

    #[test]
    fn snapshot_normalized_catalog() {
        let toml_str = r#"
            [[tasks]]
            name = "Credit Scoring"
            role = "Credit_Analyst"
            attributes = ["auto_scoring_note"]

            [[tasks]]
            name = "Pembayaran DP "
            role = "KASIR"
        "#;

        let cat = load_catalog_str(toml_str).unwrap();

        // insta compares against a stored snapshot you review+accept.
        insta::assert_json_snapshot!("normalized_checklist", &cat);
    }

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn normalized_names_are_unique_ignoring_case(
            names in proptest::collection::vec("[A-Za-z ]{1,12}", 1..8),
        ) {
            let mut cat = ChecklistCatalog {
                tasks: names
                    .iter()
                    .map(|n| TemplateCfg {
                        name: n.clone(),
                        role: "surveyor".into(),
                        attributes: vec![],
                    })
                    .collect(),
            };

            if normalize_catalog(&mut cat).is_ok() {
                let mut seen = std::collections::HashSet::new();
                for task in &cat.tasks {
                    prop_assert!(seen.insert(task.name.to_lowercase()));
                }
            }
        }
    }
}
