use super::{reading_from_feature, Morpheme, Tokenize};
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

/// Field of an IPADIC feature string holding the katakana reading.
pub const IPADIC_READING_FIELD: usize = 7;

/// Runs [vibrato](https://github.com/daac-tools/vibrato) in-process.
///
/// Loading the dictionary is slow and memory hungry, so build this once and share it.
pub struct VibratoTokenizer {
    tokenizer: ::vibrato::Tokenizer,
    reading_field: usize,
}

impl VibratoTokenizer {
    /// Loads an uncompressed vibrato system dictionary from disk.
    pub fn from_path(path: impl AsRef<Path>, reading_field: usize) -> Result<Self> {
        let path = path.as_ref();
        info!(path = %path.display(), "loading tokenizer dictionary");
        let file = File::open(path).map_err(|source| Error::DictionaryFile {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);
        Self::from_reader(reader, reading_field)
    }

    pub fn from_reader<R: Read>(reader: R, reading_field: usize) -> Result<Self> {
        let dictionary = ::vibrato::Dictionary::read(reader)?;
        Ok(Self {
            tokenizer: ::vibrato::Tokenizer::new(dictionary),
            reading_field,
        })
    }
}

impl Tokenize for VibratoTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<Morpheme>> {
        let mut worker = self.tokenizer.new_worker();
        worker.reset_sentence(text);
        worker.tokenize();
        let morphemes: Vec<Morpheme> = worker
            .token_iter()
            .map(|token| {
                let surface = token.surface();
                let reading = reading_from_feature(token.feature(), self.reading_field);
                Morpheme::new(surface, reading.unwrap_or_default())
            })
            .collect();
        debug!(text, morphemes = morphemes.len(), "tokenized in-process");
        Ok(morphemes)
    }
}

impl std::fmt::Debug for VibratoTokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VibratoTokenizer")
            .field("reading_field", &self.reading_field)
            .finish_non_exhaustive()
    }
}
