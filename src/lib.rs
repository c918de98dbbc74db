#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// CLI runners shared by the crate's binaries.
pub mod cli;
/// Sampling and corpus configuration types.
pub mod config;
/// Corpus assembly driver.
pub mod corpus;
/// Document, sample, and corpus record types.
pub mod data;
mod errors;
mod hash;
/// Candidate-window capacity estimation helpers.
pub mod heuristics;
/// Directory enumeration and path validation.
pub mod listing;
/// Per-document yield metrics.
pub mod metrics;
/// Document sampler and deterministic RNG.
pub mod sampler;
/// Shared type aliases.
pub mod types;

pub use config::{CorpusConfig, SamplerConfig, TrailingBlank};
pub use corpus::{CorpusBuilder, CorpusSummary};
pub use data::{CorpusManifest, CorpusRecord, Document, SampleRequest, SentencePair};
pub use errors::{PathKind, SamplerError};
pub use listing::list_documents;
pub use sampler::{DeterministicRng, DocumentSampler, sample_sentence_pairs};
pub use types::{FileName, Seed, Sentence, StartIndex};
