use serde::{Deserialize, Serialize};

use crate::types::{FileName, Seed};

/// Policy for the empty segment a final `'\n'` leaves behind when a
/// document is split into lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrailingBlank {
    /// Raw split semantics: the empty segment occupies a line slot and
    /// can appear as the second element of the last window.
    Keep,
    /// Drop a single empty segment at the end of the document.
    Exclude,
}

/// Per-document sampling configuration.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SamplerConfig {
    /// Desired number of two-line windows per document. Actual yield is
    /// `min(samples_per_document, candidate_windows)`.
    pub samples_per_document: usize,
    /// Trailing-line policy applied when splitting documents.
    pub trailing: TrailingBlank,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            samples_per_document: 1,
            trailing: TrailingBlank::Exclude,
        }
    }
}

/// Corpus-build configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// Seed that controls every per-document sampling stream.
    pub seed: Seed,
    /// Desired number of windows per document.
    pub samples_per_document: usize,
    /// File names excluded from the directory listing. Entries naming no
    /// actual file are silently skipped.
    pub ignore_files: Vec<FileName>,
    /// Trailing-line policy applied when splitting documents.
    pub trailing: TrailingBlank,
    /// Fan document sampling out across threads. Output is identical to
    /// a sequential build because each document owns a derived stream.
    pub parallel: bool,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            samples_per_document: 1,
            ignore_files: Vec::new(),
            trailing: TrailingBlank::Exclude,
            parallel: true,
        }
    }
}
