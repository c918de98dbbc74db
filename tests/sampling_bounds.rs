use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::tempdir;

use pairs::{
    DeterministicRng, DocumentSampler, PathKind, SamplerConfig, SamplerError, TrailingBlank,
    list_documents, sample_sentence_pairs,
};

fn write_numbered_document(dir: &Path, name: &str, line_count: usize) -> PathBuf {
    let lines: Vec<String> = (0..line_count).map(|idx| format!("sentence {idx}")).collect();
    let path = dir.join(name);
    fs::write(&path, lines.join("\n")).unwrap();
    path
}

#[test]
fn oversized_request_yields_every_window_exactly_once() {
    let temp = tempdir().unwrap();
    for line_count in [2, 3, 7, 12] {
        let path = write_numbered_document(temp.path(), "doc.txt", line_count);
        let mut rng = DeterministicRng::new(13);
        let pairs =
            sample_sentence_pairs(&path, line_count + 5, TrailingBlank::Exclude, &mut rng)
                .unwrap();

        assert_eq!(pairs.len(), line_count - 1);
        let starts: HashSet<usize> = pairs.iter().map(|pair| pair.start_index).collect();
        let expected: HashSet<usize> = (0..line_count - 1).collect();
        assert_eq!(starts, expected, "every window exactly once");
    }
}

#[test]
fn bounded_request_yields_distinct_starts_in_candidate_range() {
    let temp = tempdir().unwrap();
    let line_count = 30;
    let path = write_numbered_document(temp.path(), "doc.txt", line_count);

    for n_sample in [1, 5, line_count - 2] {
        let mut rng = DeterministicRng::new(n_sample as u64);
        let pairs =
            sample_sentence_pairs(&path, n_sample, TrailingBlank::Exclude, &mut rng).unwrap();

        assert_eq!(pairs.len(), n_sample);
        let starts: HashSet<usize> = pairs.iter().map(|pair| pair.start_index).collect();
        assert_eq!(starts.len(), n_sample);
        assert!(starts.iter().all(|start| *start < line_count - 1));
    }
}

#[test]
fn pair_order_is_always_forward_consecutive() {
    let temp = tempdir().unwrap();
    let path = write_numbered_document(temp.path(), "doc.txt", 40);
    let mut rng = DeterministicRng::new(5);

    let pairs = sample_sentence_pairs(&path, 10, TrailingBlank::Exclude, &mut rng).unwrap();
    for pair in &pairs {
        assert_eq!(pair.first, format!("sentence {}", pair.start_index));
        assert_eq!(pair.second, format!("sentence {}", pair.start_index + 1));
    }
}

#[test]
fn zero_request_fails_regardless_of_document_content() {
    let temp = tempdir().unwrap();
    for text in ["", "one line", "S1\nS2\nS3"] {
        let path = temp.path().join("doc.txt");
        fs::write(&path, text).unwrap();
        let mut rng = DeterministicRng::new(1);
        let err =
            sample_sentence_pairs(&path, 0, TrailingBlank::Exclude, &mut rng).unwrap_err();
        assert!(matches!(err, SamplerError::InvalidValue(_)));
    }
}

#[test]
fn path_validation_distinguishes_missing_from_wrong_kind() {
    let temp = tempdir().unwrap();
    let mut rng = DeterministicRng::new(1);

    let missing = temp.path().join("absent.txt");
    assert!(matches!(
        sample_sentence_pairs(&missing, 1, TrailingBlank::Exclude, &mut rng).unwrap_err(),
        SamplerError::NotFound(_)
    ));

    assert!(matches!(
        sample_sentence_pairs(temp.path(), 1, TrailingBlank::Exclude, &mut rng).unwrap_err(),
        SamplerError::InvalidPathKind {
            expected: PathKind::File,
            ..
        }
    ));
}

#[test]
fn trailing_blank_policies_differ_only_at_the_boundary() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("doc.txt");
    fs::write(&path, "S1\nS2\nS3\n").unwrap();

    // Keep: slots [S1, S2, S3, ""] give three windows, one ending empty.
    let sampler = DocumentSampler::new(SamplerConfig {
        samples_per_document: 10,
        trailing: TrailingBlank::Keep,
    });
    let mut rng = DeterministicRng::new(17);
    let kept = sampler.sample(&path, &mut rng).unwrap();
    assert_eq!(kept.len(), 3);
    assert!(kept.iter().any(|pair| pair.second.is_empty()));

    // Exclude: slots [S1, S2, S3] give two windows, none empty.
    let sampler = DocumentSampler::new(SamplerConfig {
        samples_per_document: 10,
        trailing: TrailingBlank::Exclude,
    });
    let mut rng = DeterministicRng::new(17);
    let trimmed = sampler.sample(&path, &mut rng).unwrap();
    assert_eq!(trimmed.len(), 2);
    assert!(trimmed.iter().all(|pair| !pair.second.is_empty()));
}

#[test]
fn listing_feeds_the_sampler_end_to_end() {
    let temp = tempdir().unwrap();
    write_numbered_document(temp.path(), "b.txt", 5);
    write_numbered_document(temp.path(), "a.txt", 5);
    write_numbered_document(temp.path(), "c.txt", 5);

    let ignored = vec!["b.txt".to_string(), "z.txt".to_string()];
    let names = list_documents(temp.path(), &ignored).unwrap();
    assert_eq!(names, vec!["a.txt".to_string(), "c.txt".to_string()]);

    let sampler = DocumentSampler::new(SamplerConfig {
        samples_per_document: 2,
        trailing: TrailingBlank::Exclude,
    });
    for name in &names {
        let mut rng = DeterministicRng::new(3);
        let pairs = sampler.sample(&temp.path().join(name), &mut rng).unwrap();
        assert_eq!(pairs.len(), 2);
    }
}
