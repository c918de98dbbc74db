use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::TrailingBlank;
use crate::errors::SamplerError;
use crate::listing::expect_file;
use crate::types::{FileName, Seed, Sentence, StartIndex};

/// A line-oriented document, fully resident in memory.
///
/// Capacity contract: construction reads the whole file, so documents
/// must fit in RAM. Lines are assumed pairwise distinct; duplicates are
/// not detected and may yield content-duplicate windows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    lines: Vec<Sentence>,
}

impl Document {
    /// Split `text` into line slots on `'\n'` under the given
    /// trailing-line policy.
    pub fn from_text(text: &str, trailing: TrailingBlank) -> Self {
        let mut lines: Vec<Sentence> = text.split('\n').map(str::to_string).collect();
        if trailing == TrailingBlank::Exclude
            && lines.len() > 1
            && lines.last().is_some_and(|line| line.is_empty())
        {
            lines.pop();
        }
        Self { lines }
    }

    /// Read and split a document file. The path must name an existing
    /// regular file.
    pub fn read(path: &Path, trailing: TrailingBlank) -> Result<Self, SamplerError> {
        expect_file(path)?;
        let text = fs::read_to_string(path)?;
        Ok(Self::from_text(&text, trailing))
    }

    /// Number of line slots.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// All line slots in document order.
    pub fn lines(&self) -> &[Sentence] {
        &self.lines
    }

    /// Number of candidate two-line windows: line slots minus one.
    pub fn window_count(&self) -> usize {
        self.lines.len().saturating_sub(1)
    }

    /// The window starting at `start_index`, in document order, or
    /// `None` when the index is out of candidate range.
    pub fn window(&self, start_index: StartIndex) -> Option<SentencePair> {
        let first = self.lines.get(start_index)?;
        let second = self.lines.get(start_index + 1)?;
        Some(SentencePair {
            start_index,
            first: first.clone(),
            second: second.clone(),
        })
    }
}

/// Two consecutive lines drawn from a document.
///
/// Distinctness is defined by `start_index`, not by content. The pair is
/// always in forward document order.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SentencePair {
    /// 0-based line index of `first` within the source document.
    pub start_index: StartIndex,
    /// The line at `start_index`.
    pub first: Sentence,
    /// The line at `start_index + 1`.
    pub second: Sentence,
}

/// A request to sample windows from one document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SampleRequest {
    /// Path of the document to sample.
    pub path: PathBuf,
    /// Desired sample count; actual yield is bounded by the document's
    /// candidate windows.
    pub n_sample: usize,
}

/// A sentence pair tagged with the document it came from. One corpus
/// line per record.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorpusRecord {
    /// File name of the source document.
    pub document: FileName,
    /// 0-based line index of `first` within the source document.
    pub start_index: StartIndex,
    /// The line at `start_index`.
    pub first: Sentence,
    /// The line at `start_index + 1`.
    pub second: Sentence,
}

/// Self-describing metadata written alongside a corpus file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CorpusManifest {
    /// When the corpus was built.
    pub created_at: DateTime<Utc>,
    /// Seed every per-document stream was derived from.
    pub seed: Seed,
    /// Requested windows per document.
    pub samples_per_document: usize,
    /// Trailing-line policy the documents were split under.
    pub trailing: TrailingBlank,
    /// Number of documents sampled.
    pub documents: usize,
    /// Total sentence pairs in the corpus.
    pub records: usize,
}
