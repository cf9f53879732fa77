//! Morphological analysis, the only source of guessed readings.
//!
//! Analysers are injected wherever a reading has to be guessed: [`VibratoTokenizer`] runs
//! in-process with a dictionary loaded once, [`RemoteTokenizer`] asks a resident analyser
//! service so that short lived processes don't each load a dictionary.

#[cfg(feature = "remote")]
mod remote;
#[cfg(feature = "vibrato")]
mod in_process;

#[cfg(feature = "remote")]
pub use self::remote::RemoteTokenizer;
#[cfg(feature = "vibrato")]
pub use self::in_process::VibratoTokenizer;

use crate::Result;
use serde::{Deserialize, Serialize};

/// A unit of text as cut by a morphological analyser, with its reading.
/// The reading is usually in katakana, and empty when the analyser does not know the word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Morpheme {
    pub surface: String,
    pub reading: String,
}

impl Morpheme {
    pub fn new(surface: impl Into<String>, reading: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            reading: reading.into(),
        }
    }
}

pub trait Tokenize {
    /// Cuts the text into morphemes which, concatenated, spell out the text.
    fn tokenize(&self, text: &str) -> Result<Vec<Morpheme>>;
}

impl<T: Tokenize + ?Sized> Tokenize for &T {
    fn tokenize(&self, text: &str) -> Result<Vec<Morpheme>> {
        (**self).tokenize(text)
    }
}

impl<T: Tokenize + ?Sized> Tokenize for Box<T> {
    fn tokenize(&self, text: &str) -> Result<Vec<Morpheme>> {
        (**self).tokenize(text)
    }
}

/// Picks the reading out of a dictionary feature string such as IPADIC's
/// `名詞,一般,*,*,*,*,漢字,カンジ,カンジ`.
/// Unknown words have no reading.
pub(crate) fn reading_from_feature(feature: &str, reading_field: usize) -> Option<&str> {
    feature
        .split(',')
        .nth(reading_field)
        .filter(|reading| !reading.is_empty() && *reading != "*")
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::Error;
    use std::collections::HashMap;

    /// Answers with canned analyses.
    pub struct FixtureTokenizer {
        analyses: HashMap<String, Vec<Morpheme>>,
    }

    impl FixtureTokenizer {
        pub fn new<'a, I>(analyses: I) -> Self
        where
            I: IntoIterator<Item = (&'a str, Vec<(&'a str, &'a str)>)>,
        {
            let analyses = analyses
                .into_iter()
                .map(|(text, morphemes)| {
                    let morphemes = morphemes
                        .into_iter()
                        .map(|(surface, reading)| Morpheme::new(surface, reading))
                        .collect();
                    (text.to_string(), morphemes)
                })
                .collect();
            Self { analyses }
        }

        /// Analyses in the style of an IPADIC based analyser.
        pub fn reference() -> Self {
            Self::new([
                (
                    "身体は芭蕉の如し、風に従って破れ易し。",
                    vec![
                        ("身体", "シンタイ"),
                        ("は", "ハ"),
                        ("芭蕉", "バショウ"),
                        ("の", "ノ"),
                        ("如し", "ゴトシ"),
                        ("、", "、"),
                        ("風", "カゼ"),
                        ("に", "ニ"),
                        ("従っ", "シタガッ"),
                        ("て", "テ"),
                        ("破れ", "ヤブレ"),
                        ("易し", "ヤスシ"),
                        ("。", "。"),
                    ],
                ),
                (
                    "よリ崩れル",
                    vec![("よ", "ヨ"), ("リ", "ヨリ"), ("崩れ", "クズレ"), ("ル", "ル")],
                ),
                (
                    "ご飯に差し支えない様に",
                    vec![
                        ("ご飯", "ゴハン"),
                        ("に", "ニ"),
                        ("差し支え", "サシツカエ"),
                        ("ない", "ナイ"),
                        ("様", "ヨウ"),
                        ("に", "ニ"),
                    ],
                ),
                ("漢字", vec![("漢字", "カンジ")]),
                ("身体", vec![("身体", "シンタイ")]),
                ("お世話", vec![("お", "オ"), ("世話", "セワ")]),
                (
                    "檸檬とAlphabet",
                    vec![("檸檬", ""), ("と", "ト"), ("Alphabet", "")],
                ),
            ])
        }
    }

    impl Tokenize for FixtureTokenizer {
        fn tokenize(&self, text: &str) -> Result<Vec<Morpheme>> {
            self.analyses
                .get(text)
                .cloned()
                .ok_or_else(|| Error::TokenizerResponse(format!("no analysis for 「{text}」")))
        }
    }
}
