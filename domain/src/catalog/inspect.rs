//! Catalog health summary
//!
//! The merge assumes slugs are unique but does not enforce it (it
//! updates every match). [`summarize`] is the read-only counterpart: it
//! surfaces duplicate slugs and slugless records so an operator can see
//! what a patch run would actually hit.

use crate::catalog::entities::Catalog;
use serde::Serialize;
use std::collections::BTreeMap;

/// Structural summary of a catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CatalogSummary {
    /// Total number of records in `tools`.
    pub total_records: usize,
    /// Slugs appearing on more than one record, with their occurrence
    /// counts, sorted by slug.
    pub duplicate_slugs: Vec<(String, usize)>,
    /// Records with no string `slug` field. These can never be patched.
    pub unslugged_records: usize,
}

impl CatalogSummary {
    /// Whether the catalog has anything worth warning about.
    pub fn has_issues(&self) -> bool {
        !self.duplicate_slugs.is_empty() || self.unslugged_records > 0
    }
}

/// Summarize a catalog's structure.
pub fn summarize(catalog: &Catalog) -> CatalogSummary {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    let mut unslugged_records = 0;

    for record in catalog.records() {
        match record.slug() {
            Some(slug) => *counts.entry(slug).or_insert(0) += 1,
            None => unslugged_records += 1,
        }
    }

    let duplicate_slugs = counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(slug, count)| (slug.to_string(), count))
        .collect();

    CatalogSummary {
        total_records: catalog.len(),
        duplicate_slugs,
        unslugged_records,
    }
}
