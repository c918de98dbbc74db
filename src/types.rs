/// Sentence text, one document line.
/// Example: `The cat sat on the mat.`
pub type Sentence = String;
/// Bare file name of a document inside a corpus directory.
/// Example: `wiki_00042.txt`
pub type FileName = String;
/// 0-based line index of the first sentence of a sampled window.
/// Example: `17` for the window `(lines[17], lines[18])`
pub type StartIndex = usize;
/// Seed value for deterministic sampling streams.
/// Example: `42`
pub type Seed = u64;
