//! Record filtering.

use crate::catalog::ChemicalRecord;
use std::collections::BTreeSet;

/// Filter criteria entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Free text matched against name and formula.
    pub search_term: String,
    /// Selected hazard classification tags.
    pub hazard_tags: BTreeSet<String>,
}

impl Query {
    /// Create a query from a search term and tags.
    pub fn new<I, T>(search_term: impl Into<String>, hazard_tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            search_term: search_term.into(),
            hazard_tags: hazard_tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Check if the query narrows anything.
    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty() && self.hazard_tags.iter().all(|t| t.is_empty())
    }

    /// Check if a record satisfies both criteria.
    pub fn matches(&self, record: &ChemicalRecord) -> bool {
        matches_search(record, &self.search_term.to_lowercase())
            && matches_hazards(record, &self.hazard_tags)
    }

    /// Apply this query to a sequence of records.
    pub fn apply<'a, I>(&self, records: I) -> FilteredView<'a>
    where
        I: IntoIterator<Item = &'a ChemicalRecord>,
    {
        filter(records, &self.search_term, &self.hazard_tags)
    }
}

/// Ordered subsequence of records left after filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredView<'a> {
    records: Vec<&'a ChemicalRecord>,
}

impl<'a> FilteredView<'a> {
    /// Matching records in their original order.
    pub fn records(&self) -> &[&'a ChemicalRecord] {
        &self.records
    }

    /// Number of matching records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when nothing matched. The UI reports this as a no-results notice.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at a position in the view.
    pub fn get(&self, index: usize) -> Option<&'a ChemicalRecord> {
        self.records.get(index).copied()
    }

    /// Iterate matching records.
    pub fn iter(&self) -> impl Iterator<Item = &'a ChemicalRecord> + '_ {
        self.records.iter().copied()
    }
}

impl<'a> IntoIterator for FilteredView<'a> {
    type Item = &'a ChemicalRecord;
    type IntoIter = std::vec::IntoIter<&'a ChemicalRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a, 'v> IntoIterator for &'v FilteredView<'a> {
    type Item = &'a ChemicalRecord;
    type IntoIter = std::iter::Copied<std::slice::Iter<'v, &'a ChemicalRecord>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter().copied()
    }
}

/// Narrow records by search term and hazard tags.
///
/// A non-empty `search_term` keeps records whose name or formula contains it,
/// ignoring case. A non-empty tag set keeps records whose classification
/// contains at least one tag. Both apply together; an absent criterion keeps
/// everything. Order is preserved.
pub fn filter<'a, I>(
    records: I,
    search_term: &str,
    hazard_tags: &BTreeSet<String>,
) -> FilteredView<'a>
where
    I: IntoIterator<Item = &'a ChemicalRecord>,
{
    let needle = search_term.to_lowercase();
    let records = records
        .into_iter()
        .filter(|record| matches_search(record, &needle) && matches_hazards(record, hazard_tags))
        .collect();
    FilteredView { records }
}

fn matches_search(record: &ChemicalRecord, needle: &str) -> bool {
    needle.is_empty()
        || record.name.to_lowercase().contains(needle)
        || record.formula.to_lowercase().contains(needle)
}

fn matches_hazards(record: &ChemicalRecord, tags: &BTreeSet<String>) -> bool {
    let mut tags = tags.iter().filter(|tag| !tag.is_empty()).peekable();
    if tags.peek().is_none() {
        return true;
    }
    tags.any(|tag| record.classification.contains(tag.as_str()))
}
