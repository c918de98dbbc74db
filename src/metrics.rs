use std::collections::HashMap;

use crate::types::FileName;

/// Aggregate skew metrics for per-document sample yields.
#[derive(Clone, Debug, PartialEq)]
pub struct YieldSkew {
    /// Total pairs across all documents.
    pub total: usize,
    /// Number of documents that produced at least one entry in the map.
    pub documents: usize,
    /// Smallest per-document yield.
    pub min: usize,
    /// Largest per-document yield.
    pub max: usize,
    /// Mean per-document yield.
    pub mean: f64,
    /// Share of the corpus contributed by the largest document.
    pub max_share: f64,
    /// Per-document shares, largest first.
    pub per_document: Vec<DocumentShare>,
}

/// One document's share of a corpus.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentShare {
    /// Document file name.
    pub document: FileName,
    /// Pairs sampled from this document.
    pub count: usize,
    /// Fraction of the corpus total.
    pub share: f64,
}

/// Compute yield-skew metrics from per-document pair counts. Returns
/// `None` for an empty map.
pub fn yield_skew(counts: &HashMap<FileName, usize>) -> Option<YieldSkew> {
    if counts.is_empty() {
        return None;
    }
    let total: usize = counts.values().sum();
    let documents = counts.len();
    let min = *counts.values().min()?;
    let max = *counts.values().max()?;
    let mean = total as f64 / documents as f64;
    let max_share = if total == 0 {
        0.0
    } else {
        max as f64 / total as f64
    };
    let mut per_document: Vec<DocumentShare> = counts
        .iter()
        .map(|(document, count)| DocumentShare {
            document: document.clone(),
            count: *count,
            share: if total == 0 {
                0.0
            } else {
                *count as f64 / total as f64
            },
        })
        .collect();
    per_document.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.document.cmp(&b.document)));
    Some(YieldSkew {
        total,
        documents,
        min,
        max,
        mean,
        max_share,
        per_document,
    })
}
