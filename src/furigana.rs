use crate::{kana, Error};
use std::fmt::Display;
use std::str::FromStr;

/// The ways a token can be written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum FuriganaKind {
    /// The plain text, furigana dropped.
    None,
    /// `[漢字|かんじ|f]`, the storage format.
    #[default]
    Bracket,
    /// `<ruby>漢字<rt>かんじ</rt></ruby>`.
    Ruby,
    /// ` 漢字[かんじ]`, as expected by Anki.
    Simple,
    /// `漢字(かんじ)`.
    Parenthesis,
}

impl FromStr for FuriganaKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "bracket" => Ok(Self::Bracket),
            "ruby" => Ok(Self::Ruby),
            "simple" => Ok(Self::Simple),
            "parenthesis" => Ok(Self::Parenthesis),
            other => Err(Error::UnknownKind(other.to_string())),
        }
    }
}

impl Display for FuriganaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::None => "none",
            Self::Bracket => "bracket",
            Self::Ruby => "ruby",
            Self::Simple => "simple",
            Self::Parenthesis => "parenthesis",
        };
        write!(f, "{}", label)
    }
}

/// A segment of a text, with furigana if it contains kanji that need a reading.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextToken {
    origin: String,
    reading: Option<String>,
}

impl TextToken {
    /// A token written as is.
    pub fn plain(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            reading: None,
        }
    }

    /// A token annotated with a reading. Katakana in the reading is stored as hiragana.
    /// Annotated tokens come out of [`split_sub_token`](crate::split_sub_token), which checks
    /// that the reading fits.
    pub(crate) fn annotated(origin: impl Into<String>, reading: &str) -> Self {
        Self {
            origin: origin.into(),
            reading: Some(kana::kat2hir(reading)),
        }
    }

    /// The segment as it appears in the text.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// The reading in hiragana, if the segment is annotated.
    pub fn reading(&self) -> Option<&str> {
        self.reading.as_deref()
    }

    pub fn is_annotated(&self) -> bool {
        self.reading.is_some()
    }

    /// Writes the token in the given format.
    pub fn furigana(&self, kind: FuriganaKind) -> String {
        let Some(reading) = &self.reading else {
            return self.origin.clone();
        };
        let origin = &self.origin;
        match kind {
            FuriganaKind::None => origin.clone(),
            FuriganaKind::Bracket => format!("[{origin}|{reading}|f]"),
            FuriganaKind::Ruby => format!("<ruby>{origin}<rt>{reading}</rt></ruby>"),
            FuriganaKind::Simple => format!(" {origin}[{reading}]"),
            FuriganaKind::Parenthesis => format!("{origin}({reading})"),
        }
    }

    /// The reading if there is one, else the segment itself in hiragana.
    pub fn hiragana(&self) -> String {
        match &self.reading {
            Some(reading) => reading.clone(),
            None => kana::kat2hir(&self.origin),
        }
    }
}

/// Prints the token in the bracket format.
impl Display for TextToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.furigana(FuriganaKind::Bracket))
    }
}
