use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use indexmap::IndexMap;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::CorpusConfig;
use crate::data::{CorpusManifest, CorpusRecord, SentencePair};
use crate::errors::SamplerError;
use crate::hash::stable_hash_str;
use crate::listing::list_documents;
use crate::sampler::{DeterministicRng, sample_sentence_pairs};
use crate::types::FileName;

/// Builds a sentence-pair corpus from a directory of documents.
///
/// Each document is sampled with its own RNG stream, seeded from the
/// corpus seed mixed with the document's file name. Parallel and
/// sequential builds therefore produce identical corpora, and no random
/// state is shared across workers.
pub struct CorpusBuilder {
    config: CorpusConfig,
}

impl CorpusBuilder {
    /// Create a builder with the given configuration.
    pub fn new(config: CorpusConfig) -> Self {
        Self { config }
    }

    /// The builder's configuration.
    pub fn config(&self) -> &CorpusConfig {
        &self.config
    }

    /// Sample every document in `dir` and aggregate the results in
    /// listing order. A failing document aborts the whole build.
    pub fn build(&self, dir: &Path) -> Result<CorpusSummary, SamplerError> {
        let names = list_documents(dir, &self.config.ignore_files)?;
        info!(
            documents = names.len(),
            seed = self.config.seed,
            samples_per_document = self.config.samples_per_document,
            parallel = self.config.parallel,
            "building sentence-pair corpus"
        );

        let sampled: Vec<(FileName, Vec<SentencePair>)> = if self.config.parallel {
            names
                .par_iter()
                .map(|name| self.sample_one(dir, name))
                .collect::<Result<_, _>>()?
        } else {
            names
                .iter()
                .map(|name| self.sample_one(dir, name))
                .collect::<Result<_, _>>()?
        };

        let mut by_document: IndexMap<FileName, Vec<SentencePair>> = IndexMap::new();
        let mut records = 0;
        for (name, pairs) in sampled {
            records += pairs.len();
            by_document.insert(name, pairs);
        }

        let manifest = CorpusManifest {
            created_at: Utc::now(),
            seed: self.config.seed,
            samples_per_document: self.config.samples_per_document,
            trailing: self.config.trailing,
            documents: by_document.len(),
            records,
        };
        info!(records, "corpus build finished");
        Ok(CorpusSummary {
            manifest,
            by_document,
        })
    }

    fn sample_one(
        &self,
        dir: &Path,
        name: &str,
    ) -> Result<(FileName, Vec<SentencePair>), SamplerError> {
        let path = dir.join(name);
        // Seed from the file name, not the full path, so corpora are
        // reproducible regardless of where the directory is mounted.
        let mut rng = DeterministicRng::new(stable_hash_str(self.config.seed, name));
        let pairs = sample_sentence_pairs(
            &path,
            self.config.samples_per_document,
            self.config.trailing,
            &mut rng,
        )?;
        debug!(document = name, sampled = pairs.len(), "sampled document");
        Ok((name.to_string(), pairs))
    }
}

/// The result of a corpus build: manifest plus samples grouped by
/// document in listing order.
#[derive(Debug)]
pub struct CorpusSummary {
    /// Corpus metadata.
    pub manifest: CorpusManifest,
    /// Sampled pairs per document, in listing order.
    pub by_document: IndexMap<FileName, Vec<SentencePair>>,
}

impl CorpusSummary {
    /// Flatten the summary into corpus records, documents in listing
    /// order, pairs in sampled order.
    pub fn records(&self) -> impl Iterator<Item = CorpusRecord> + '_ {
        self.by_document.iter().flat_map(|(document, pairs)| {
            pairs.iter().map(move |pair| CorpusRecord {
                document: document.clone(),
                start_index: pair.start_index,
                first: pair.first.clone(),
                second: pair.second.clone(),
            })
        })
    }

    /// Total sampled pairs.
    pub fn record_count(&self) -> usize {
        self.by_document.values().map(Vec::len).sum()
    }

    /// Per-document yield counts, for skew reporting.
    pub fn yield_counts(&self) -> HashMap<FileName, usize> {
        self.by_document
            .iter()
            .map(|(document, pairs)| (document.clone(), pairs.len()))
            .collect()
    }

    /// Write the corpus as JSON Lines at `corpus_path` and the manifest
    /// as a sibling `<stem>.manifest.json`. Returns the manifest path.
    pub fn write(&self, corpus_path: &Path) -> Result<PathBuf, SamplerError> {
        let file = fs::File::create(corpus_path)?;
        let mut writer = io::BufWriter::new(file);
        for record in self.records() {
            serde_json::to_writer(&mut writer, &record).map_err(io::Error::from)?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;

        let manifest_path = manifest_path_for(corpus_path);
        let manifest_file = fs::File::create(&manifest_path)?;
        serde_json::to_writer_pretty(io::BufWriter::new(manifest_file), &self.manifest)
            .map_err(io::Error::from)?;
        Ok(manifest_path)
    }
}

fn manifest_path_for(corpus_path: &Path) -> PathBuf {
    let stem = corpus_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("corpus");
    corpus_path.with_file_name(format!("{stem}.manifest.json"))
}
