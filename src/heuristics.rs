//! Closed-form capacity estimates for corpus planning.
//!
//! A document with `L` line slots has `L - 1` candidate windows; the
//! bounded yield of a sampling run is `min(n_sample, L - 1)` per
//! document. These helpers compute both without sampling anything.

/// Aggregate capacity totals for a corpus directory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CorpusCapacity {
    /// Number of documents considered.
    pub documents: usize,
    /// Total candidate windows across all documents.
    pub candidate_windows: u128,
    /// Total windows a run with the given per-document request yields.
    pub bounded_yield: u128,
}

/// Candidate windows for a document with `line_count` line slots.
pub fn document_window_capacity(line_count: usize) -> u128 {
    line_count.saturating_sub(1) as u128
}

/// Sum per-document capacities and the bounded per-document yield for a
/// run requesting `samples_per_document` windows from each document.
pub fn estimate_corpus_capacity(line_counts: &[usize], samples_per_document: usize) -> CorpusCapacity {
    let mut totals = CorpusCapacity {
        documents: line_counts.len(),
        ..CorpusCapacity::default()
    };
    for &line_count in line_counts {
        let capacity = document_window_capacity(line_count);
        totals.candidate_windows += capacity;
        totals.bounded_yield += capacity.min(samples_per_document as u128);
    }
    totals
}

/// Format a count with comma grouping for CLI reporting.
pub fn format_u128_with_commas(value: u128) -> String {
    let raw = value.to_string();
    let mut grouped_reversed = String::with_capacity(raw.len() + (raw.len() / 3));
    for (idx, ch) in raw.chars().rev().enumerate() {
        if idx > 0 && idx % 3 == 0 {
            grouped_reversed.push(',');
        }
        grouped_reversed.push(ch);
    }
    grouped_reversed.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_capacity_handles_degenerate_documents() {
        assert_eq!(document_window_capacity(0), 0);
        assert_eq!(document_window_capacity(1), 0);
        assert_eq!(document_window_capacity(2), 1);
        assert_eq!(document_window_capacity(100), 99);
    }

    #[test]
    fn corpus_estimate_bounds_yield_by_request() {
        let totals = estimate_corpus_capacity(&[4, 1, 10], 2);
        assert_eq!(totals.documents, 3);
        assert_eq!(totals.candidate_windows, 3 + 0 + 9);
        assert_eq!(totals.bounded_yield, 2 + 0 + 2);

        let unbounded = estimate_corpus_capacity(&[4, 1, 10], 100);
        assert_eq!(unbounded.bounded_yield, unbounded.candidate_windows);
    }

    #[test]
    fn comma_formatting_is_stable() {
        assert_eq!(format_u128_with_commas(0), "0");
        assert_eq!(format_u128_with_commas(999), "999");
        assert_eq!(format_u128_with_commas(1_234_567), "1,234,567");
    }
}
