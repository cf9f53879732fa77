//! Splits a single morphological unit into kana and kanji parts and distributes its reading.

use crate::{kana, Error, Result, TextToken};
use tracing::{debug, warn};

/// A unit cut around its kanji: the kana before the first kanji, everything from the first
/// to the last kanji, and the kana after the last kanji.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubToken<'a> {
    pub prefix: &'a str,
    pub kanji: &'a str,
    pub suffix: &'a str,
}

impl<'a> SubToken<'a> {
    /// Returns None if the unit contains no kanji.
    pub fn new(origin: &'a str) -> Option<Self> {
        let start = origin.find(kana::is_kanji)?;
        let (last_idx, last) = origin
            .char_indices()
            .rev()
            .find(|&(_, c)| kana::is_kanji(c))?;
        let end = last_idx + last.len_utf8();
        Some(Self {
            prefix: &origin[..start],
            kanji: &origin[start..end],
            suffix: &origin[end..],
        })
    }

    /// Finds the part of the (hiragana) reading that belongs to the kanji.
    /// The kana around the kanji must appear verbatim at the ends of the reading, and what
    /// is left for the kanji must be hiragana.
    pub fn kanji_reading<'r>(&self, reading: &'r str) -> Option<&'r str> {
        reading
            .strip_prefix(kana::kat2hir(self.prefix).as_str())?
            .strip_suffix(kana::kat2hir(self.suffix).as_str())
            .filter(|kanji_reading| !kanji_reading.is_empty())
            .filter(|kanji_reading| {
                kanji_reading
                    .chars()
                    .all(|c| kana::is_hiragana(c) || c == 'ー')
            })
    }
}

/// Splits a unit and its reading into at most three tokens: leading kana, the annotated
/// kanji and trailing kana.
///
/// Fails when the reading does not account for the unit's kana.
pub fn split_sub_token(origin: &str, reading: &str) -> Result<Vec<TextToken>> {
    if origin.is_empty() && reading.is_empty() {
        return Ok(vec![]);
    }
    let hiragana_reading = kana::kat2hir(reading);

    let Some(sub_token) = SubToken::new(origin) else {
        // no kanji, nothing to annotate as long as the reading agrees
        if kana::kat2hir(origin) == hiragana_reading {
            return Ok(vec![TextToken::plain(origin)]);
        }
        if is_single_katakana(origin) {
            // some analysers read a lone katakana character as something else, e.g. リ in よリ
            warn!(origin, reading, "accepting lone katakana with a mismatched reading");
            return Ok(vec![TextToken::plain(origin)]);
        }
        return Err(Error::alignment(origin, reading));
    };

    let kanji_reading = sub_token
        .kanji_reading(&hiragana_reading)
        .ok_or_else(|| Error::alignment(origin, reading))?;
    debug!(?sub_token, kanji_reading, "split sub token");

    let mut tokens = Vec::with_capacity(3);
    if !sub_token.prefix.is_empty() {
        tokens.push(TextToken::plain(sub_token.prefix));
    }
    tokens.push(TextToken::annotated(sub_token.kanji, kanji_reading));
    if !sub_token.suffix.is_empty() {
        tokens.push(TextToken::plain(sub_token.suffix));
    }
    Ok(tokens)
}

fn is_single_katakana(origin: &str) -> bool {
    let mut chars = origin.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if kana::is_katakana(c))
}
