//! The merge operation
//!
//! A single in-memory pass over the catalog: for every record whose slug
//! has a patch entry, each field named in the entry is written onto the
//! record (unconditional overwrite, lists replaced wholesale). Slugs are
//! not assumed unique: every matching record is updated, so a catalog
//! with duplicate slugs gets all of its duplicates patched.
//!
//! A patch slug that matches no record is not an error; it lands in
//! [`MergeOutcome::missing`] for the caller to warn about.

use crate::catalog::entities::Catalog;
use crate::patch::entities::PatchSet;
use serde::Serialize;

/// What a merge pass did.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MergeOutcome {
    /// Patch slugs matched by at least one record, in the order the
    /// matching records appear in the document, deduplicated.
    pub applied: Vec<String>,
    /// Patch slugs that matched no record, in patch entry order.
    pub missing: Vec<String>,
    /// Number of records mutated. Greater than `applied.len()` when the
    /// catalog holds duplicate slugs.
    pub records_updated: usize,
}

impl MergeOutcome {
    /// Whether every patch entry found a record.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Apply a patch set to a catalog in place.
///
/// Records are visited in document order; the record's slug is read
/// before its fields are patched, so an entry that rewrites `slug`
/// itself cannot change which later records match.
pub fn apply_patches(catalog: &mut Catalog, patches: &PatchSet) -> MergeOutcome {
    let mut applied: Vec<String> = Vec::new();
    let mut records_updated = 0;

    for record in catalog.records_mut() {
        let Some(slug) = record.slug().map(str::to_owned) else {
            continue;
        };
        let Some(fields) = patches.get(&slug) else {
            continue;
        };

        for (name, value) in fields {
            record.set(name.clone(), value.clone());
        }
        records_updated += 1;

        if !applied.iter().any(|s| *s == slug) {
            applied.push(slug);
        }
    }

    let missing = patches
        .slugs()
        .filter(|slug| !applied.iter().any(|a| a == slug))
        .map(String::from)
        .collect();

    MergeOutcome {
        applied,
        missing,
        records_updated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog(value: serde_json::Value) -> Catalog {
        Catalog::from_value(value).unwrap()
    }

    fn patches(value: serde_json::Value) -> PatchSet {
        PatchSet::from_value(value).unwrap()
    }

    #[test]
    fn test_targeted_update_overwrites_and_adds_fields() {
        // Scenario: one record, patch overwrites description and adds tags
        let mut cat = catalog(json!({
            "tools": [{"slug": "alpha", "description": "old"}]
        }));
        let set = patches(json!({
            "alpha": {"description": "new", "tags": ["x", "y"]}
        }));

        let outcome = apply_patches(&mut cat, &set);

        let record = cat.records().next().unwrap();
        assert_eq!(record.get("description"), Some(&json!("new")));
        assert_eq!(record.get("tags"), Some(&json!(["x", "y"])));
        assert_eq!(record.slug(), Some("alpha"));
        assert_eq!(outcome.applied, vec!["alpha"]);
        assert!(outcome.missing.is_empty());
        assert_eq!(outcome.records_updated, 1);
    }

    #[test]
    fn test_unnamed_fields_left_untouched() {
        let mut cat = catalog(json!({
            "tools": [{"slug": "alpha", "description": "old", "monthly_price": 20}]
        }));
        let set = patches(json!({"alpha": {"description": "new"}}));

        apply_patches(&mut cat, &set);

        let record = cat.records().next().unwrap();
        assert_eq!(record.get("monthly_price"), Some(&json!(20)));
    }

    #[test]
    fn test_list_values_replaced_wholesale() {
        let mut cat = catalog(json!({
            "tools": [{"slug": "alpha", "tags": ["old-a", "old-b", "old-c"]}]
        }));
        let set = patches(json!({"alpha": {"tags": ["new"]}}));

        apply_patches(&mut cat, &set);

        let record = cat.records().next().unwrap();
        assert_eq!(record.get("tags"), Some(&json!(["new"])));
    }

    #[test]
    fn test_unmatched_records_byte_identical() {
        let mut cat = catalog(json!({
            "tools": [
                {"slug": "alpha", "description": "old"},
                {"slug": "bystander", "description": "说明", "tags": ["原样"]}
            ]
        }));
        let before = serde_json::to_string(cat.records().nth(1).unwrap()).unwrap();

        let set = patches(json!({"alpha": {"description": "new"}}));
        apply_patches(&mut cat, &set);

        let after = serde_json::to_string(cat.records().nth(1).unwrap()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_missing_slug_reported_not_applied() {
        // Scenario: patch targets a slug absent from the catalog
        let mut cat = catalog(json!({
            "tools": [{"slug": "alpha", "description": "old"}]
        }));
        let before = serde_json::to_string(&cat).unwrap();

        let set = patches(json!({"ghost": {"description": "new"}}));
        let outcome = apply_patches(&mut cat, &set);

        assert!(outcome.applied.is_empty());
        assert_eq!(outcome.missing, vec!["ghost"]);
        assert!(!outcome.is_complete());
        assert_eq!(outcome.records_updated, 0);
        assert_eq!(serde_json::to_string(&cat).unwrap(), before);
    }

    #[test]
    fn test_duplicate_slugs_all_updated() {
        // Scenario: malformed catalog with two records sharing a slug
        let mut cat = catalog(json!({
            "tools": [
                {"slug": "dup", "description": "first"},
                {"slug": "other"},
                {"slug": "dup", "description": "second"}
            ]
        }));
        let set = patches(json!({"dup": {"description": "new"}}));

        let outcome = apply_patches(&mut cat, &set);

        let descriptions: Vec<_> = cat
            .records()
            .filter(|r| r.slug() == Some("dup"))
            .map(|r| r.get("description").cloned())
            .collect();
        assert_eq!(descriptions, vec![Some(json!("new")), Some(json!("new"))]);
        assert_eq!(outcome.applied, vec!["dup"]);
        assert_eq!(outcome.records_updated, 2);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let mut once = catalog(json!({
            "tools": [
                {"slug": "alpha", "description": "old", "tags": ["a"]},
                {"slug": "beta"}
            ]
        }));
        let set = patches(json!({
            "alpha": {"description": "new", "tags": ["x"]},
            "beta": {"pros": ["fast"]}
        }));

        let first = apply_patches(&mut once, &set);
        let mut twice = once.clone();
        let second = apply_patches(&mut twice, &set);

        assert_eq!(once, twice);
        assert_eq!(first, second);
    }

    #[test]
    fn test_records_without_slug_are_skipped() {
        let mut cat = catalog(json!({
            "tools": [
                {"name": "anonymous", "description": "old"},
                {"slug": "alpha", "description": "old"}
            ]
        }));
        let set = patches(json!({"alpha": {"description": "new"}}));

        let outcome = apply_patches(&mut cat, &set);

        assert_eq!(outcome.records_updated, 1);
        let anonymous = cat.records().next().unwrap();
        assert_eq!(anonymous.get("description"), Some(&json!("old")));
    }

    #[test]
    fn test_applied_order_follows_document_missing_follows_patch() {
        let mut cat = catalog(json!({
            "tools": [{"slug": "second"}, {"slug": "first"}]
        }));
        let set = patches(json!({
            "first": {"n": 1},
            "gone-a": {"n": 2},
            "second": {"n": 3},
            "gone-b": {"n": 4}
        }));

        let outcome = apply_patches(&mut cat, &set);

        assert_eq!(outcome.applied, vec!["second", "first"]);
        assert_eq!(outcome.missing, vec!["gone-a", "gone-b"]);
    }

    #[test]
    fn test_empty_patch_set_is_a_no_op() {
        let mut cat = catalog(json!({"tools": [{"slug": "alpha"}]}));
        let before = serde_json::to_string(&cat).unwrap();

        let outcome = apply_patches(&mut cat, &PatchSet::new());

        assert_eq!(outcome, MergeOutcome::default());
        assert_eq!(serde_json::to_string(&cat).unwrap(), before);
    }

    #[test]
    fn test_round_trip_after_merge_is_deep_equal() {
        let mut cat = catalog(json!({
            "meta": {"locale": "ko"},
            "tools": [{"slug": "alpha", "description": "옛날 설명"}]
        }));
        let set = patches(json!({"alpha": {"description": "새 설명", "tags": ["한국어"]}}));
        apply_patches(&mut cat, &set);

        let text = serde_json::to_string(&cat).unwrap();
        assert!(text.contains("새 설명"));

        let reparsed = Catalog::from_value(serde_json::from_str(&text).unwrap()).unwrap();
        assert_eq!(reparsed, cat);
    }
}
