use std::path::Path;

use rand::Rng;
use rand::seq::{SliceRandom, index};

use crate::config::{SamplerConfig, TrailingBlank};
use crate::data::{Document, SampleRequest, SentencePair};
use crate::errors::SamplerError;
use crate::listing::expect_file;
use crate::types::StartIndex;

#[derive(Debug, Clone)]
/// Small deterministic RNG (splitmix64) for reproducible sampling streams.
pub struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    /// Create a stream seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64_internal(&mut self) -> u64 {
        let mut z = self.state.wrapping_add(0x9E3779B97F4A7C15);
        self.state = z;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }
}

impl rand::RngCore for DeterministicRng {
    fn next_u32(&mut self) -> u32 {
        self.next_u64_internal() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_u64_internal()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut offset = 0;
        while offset < dest.len() {
            let value = self.next_u64_internal();
            let bytes = value.to_le_bytes();
            let remaining = dest.len() - offset;
            let copy_len = remaining.min(bytes.len());
            dest[offset..offset + copy_len].copy_from_slice(&bytes[..copy_len]);
            offset += copy_len;
        }
    }
}

/// Sample up to `n_sample` distinct two-line windows from the document
/// at `path`.
///
/// Candidate start indices are `0..=L-2` for a document with `L` line
/// slots. When the document has `n_sample` or fewer candidates, every
/// window is returned in shuffled order; otherwise `n_sample` distinct
/// start indices are drawn uniformly without replacement. Each selected
/// index `i` yields `(lines[i], lines[i+1])` in document order.
///
/// The RNG is caller-owned; seed it (or pass a [`DeterministicRng`]) for
/// reproducible output.
pub fn sample_sentence_pairs<R: Rng + ?Sized>(
    path: &Path,
    n_sample: usize,
    trailing: TrailingBlank,
    rng: &mut R,
) -> Result<Vec<SentencePair>, SamplerError> {
    expect_file(path)?;
    if n_sample == 0 {
        return Err(SamplerError::InvalidValue(
            "n_sample must be a positive integer".to_string(),
        ));
    }
    let text = std::fs::read_to_string(path)?;
    let document = Document::from_text(&text, trailing);
    Ok(sample_document_windows(&document, n_sample, rng))
}

/// Sample window start indices from an in-memory document and
/// materialize the pairs. Infallible: a document with fewer than two
/// line slots yields an empty set.
pub fn sample_document_windows<R: Rng + ?Sized>(
    document: &Document,
    n_sample: usize,
    rng: &mut R,
) -> Vec<SentencePair> {
    let candidates = document.window_count();
    let start_indices: Vec<StartIndex> = if candidates <= n_sample {
        // Not enough windows to choose among: return them all, order-randomized.
        let mut all: Vec<StartIndex> = (0..candidates).collect();
        all.shuffle(rng);
        all
    } else {
        index::sample(rng, candidates, n_sample).into_iter().collect()
    };
    start_indices
        .into_iter()
        .filter_map(|start| document.window(start))
        .collect()
}

/// Samples two-line windows from documents using a caller-supplied RNG.
///
/// Holds no random state of its own; every call draws from the stream
/// passed in, so concurrent use only requires concurrent streams.
#[derive(Clone, Debug, Default)]
pub struct DocumentSampler {
    config: SamplerConfig,
}

impl DocumentSampler {
    /// Create a sampler with the given configuration.
    pub fn new(config: SamplerConfig) -> Self {
        Self { config }
    }

    /// The sampler's configuration.
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Sample the configured number of windows from the document at
    /// `path`.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        path: &Path,
        rng: &mut R,
    ) -> Result<Vec<SentencePair>, SamplerError> {
        sample_sentence_pairs(
            path,
            self.config.samples_per_document,
            self.config.trailing,
            rng,
        )
    }

    /// Sample with a per-request count override.
    pub fn sample_request<R: Rng + ?Sized>(
        &self,
        request: &SampleRequest,
        rng: &mut R,
    ) -> Result<Vec<SentencePair>, SamplerError> {
        sample_sentence_pairs(&request.path, request.n_sample, self.config.trailing, rng)
    }
}
