#![doc = include_str!("../README.md")]

pub mod config;
mod error;
mod furigana;
pub mod kana;
mod markup;
mod segmentation;
mod text;
pub mod tokenizer;

pub use self::error::{Error, MarkupFormat, Result};
pub use self::furigana::{FuriganaKind, TextToken};
pub use self::segmentation::{split_sub_token, SubToken};
pub use self::text::{FuriganaMismatch, JpnText};
pub use self::tokenizer::{Morpheme, Tokenize};

/// Removes the furigana from bracket formatted text.
pub fn furigana_remove(furigana: &str) -> Result<String> {
    convert_bracket(furigana, FuriganaKind::None)
}

/// Converts bracket formatted text to HTML ruby.
pub fn furigana_ruby(furigana: &str) -> Result<String> {
    convert_bracket(furigana, FuriganaKind::Ruby)
}

/// Converts bracket formatted text to `漢字(かんじ)`.
pub fn furigana_parenthesis(furigana: &str) -> Result<String> {
    convert_bracket(furigana, FuriganaKind::Parenthesis)
}

/// Writes `plain_text` as HTML ruby using its bracket formatted furigana.
///
/// Without furigana the plain text is returned as is. Furigana that does not spell out the
/// plain text yields the mismatch message instead of markup.
pub fn furigana_html(plain_text: &str, furigana_text: &str) -> Result<String> {
    if furigana_text.is_empty() {
        return Ok(plain_text.to_string());
    }
    let text = JpnText::from_furigana_format(furigana_text, Some(plain_text), None)?;
    if text.is_consistent() {
        Ok(text.furigana(FuriganaKind::Ruby, &[]))
    } else {
        Ok(text.furigana_error_messages().join("\n"))
    }
}

fn convert_bracket(furigana: &str, kind: FuriganaKind) -> Result<String> {
    Ok(JpnText::from_furigana_format(furigana, None, None)?.furigana(kind, &[]))
}
