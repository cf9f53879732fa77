//! Structural errors.
//!
//! These abort the operation that raised them. Disagreements between an annotation and
//! the text or reading it is supposed to describe are not errors, see
//! [`FuriganaMismatch`](crate::FuriganaMismatch).

use crate::config::Backend;
use std::fmt::Display;
#[cfg(feature = "vibrato")]
use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The kana around a unit's kanji could not be matched against its reading.
    #[error("cannot align reading 「{reading}」 with 「{origin}」")]
    Alignment { origin: String, reading: String },

    /// Ruby or bracket markup that could not be parsed.
    #[error("malformed {format} markup near 「{fragment}」")]
    Markup {
        format: MarkupFormat,
        fragment: String,
    },

    /// Plain text that would read back as bracket markup once written out.
    #[error("text contains bracket markup syntax near 「{0}」")]
    MarkupInText(String),

    #[error("unknown furigana kind '{0}'")]
    UnknownKind(String),

    /// The configured tokenizer backend was left out at compile time.
    #[error("tokenizer backend {0:?} is not compiled in")]
    Backend(Backend),

    /// The tokenizer service could not be reached or did not answer in time.
    #[cfg(feature = "remote")]
    #[error("tokenizer at {endpoint} is unavailable")]
    TokenizerUnavailable {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The tokenizer answered, but not with something usable.
    #[error("unexpected tokenizer response: {0}")]
    TokenizerResponse(String),

    /// The in-process tokenizer's dictionary could not be loaded.
    #[cfg(feature = "vibrato")]
    #[error("failed to load the tokenizer dictionary")]
    Dictionary(#[from] vibrato::errors::VibratoError),

    #[cfg(feature = "vibrato")]
    #[error("cannot open the tokenizer dictionary at {}", path.display())]
    DictionaryFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid configuration")]
    Config(#[from] toml::de::Error),
}

impl Error {
    pub(crate) fn alignment(origin: &str, reading: &str) -> Self {
        Self::Alignment {
            origin: origin.to_string(),
            reading: reading.to_string(),
        }
    }

    /// True for failures of the tokenizer backend, as opposed to problems with the input.
    pub fn is_tokenizer_failure(&self) -> bool {
        match self {
            #[cfg(feature = "remote")]
            Self::TokenizerUnavailable { .. } => true,
            #[cfg(feature = "vibrato")]
            Self::Dictionary(_) | Self::DictionaryFile { .. } => true,
            Self::TokenizerResponse(_) => true,
            _ => false,
        }
    }
}

/// The markup formats that can be parsed back into tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkupFormat {
    Ruby,
    Bracket,
}

impl Display for MarkupFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MarkupFormat::Ruby => "ruby",
            MarkupFormat::Bracket => "bracket",
        };
        write!(f, "{}", label)
    }
}
