//! Annotated text: a sequence of tokens together with the text and reading it should match.

use crate::{
    kana, markup, segmentation::split_sub_token, tokenizer::Tokenize, FuriganaKind, Result,
    TextToken,
};
use std::fmt::Display;
use tracing::{debug, warn};

/// A disagreement between the tokens and what they are supposed to describe.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FuriganaMismatch {
    /// The tokens spell out a different text. Holds the text they do spell out.
    Reconstruction(String),
    /// The tokens' reading differs from the expected reading.
    Reading,
}

impl Display for FuriganaMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reconstruction(reconstructed) => {
                write!(f, "元の文章を復元出来ない: 「{}」", reconstructed)
            }
            Self::Reading => write!(f, "推測振り仮名と元の読み方が合致しない"),
        }
    }
}

/// Japanese text with furigana.
///
/// Built once from raw text, markup or tokens and checked on construction. Mismatches with
/// the expected text or reading do not prevent construction, they are collected in
/// [`JpnText::furigana_errors`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JpnText {
    text: String,
    tokens: Vec<TextToken>,
    expected_yomi: Option<String>,
    furigana_errors: Vec<FuriganaMismatch>,
}

impl JpnText {
    /// Guesses the furigana of `text` with a morphological analyser.
    pub fn from_text<T>(text: &str, expected_yomi: Option<&str>, tokenizer: &T) -> Result<Self>
    where
        T: Tokenize + ?Sized,
    {
        let mut tokens = vec![];
        if !text.is_empty() {
            for morpheme in tokenizer.tokenize(text)? {
                if morpheme.reading.is_empty() {
                    // unknown to the analyser, left without furigana
                    debug!(surface = morpheme.surface.as_str(), "no reading");
                    tokens.push(TextToken::plain(morpheme.surface));
                    continue;
                }
                tokens.extend(split_sub_token(&morpheme.surface, &morpheme.reading)?);
            }
        }
        Self::from_tokens(tokens, Some(text), expected_yomi)
    }

    /// Reads `<ruby>漢字<rt>かんじ</rt></ruby>` markup.
    /// Without `text`, the text is whatever the markup spells out.
    pub fn from_ruby(ruby: &str, text: Option<&str>, expected_yomi: Option<&str>) -> Result<Self> {
        let tokens = markup::parse_ruby(ruby)?;
        Self::from_tokens(tokens, text, expected_yomi)
    }

    /// Reads `[漢字|かんじ|f]` markup.
    /// Without `text`, the text is whatever the markup spells out.
    pub fn from_furigana_format(
        furigana: &str,
        text: Option<&str>,
        expected_yomi: Option<&str>,
    ) -> Result<Self> {
        let tokens = markup::parse_bracket(furigana)?;
        Self::from_tokens(tokens, text, expected_yomi)
    }

    /// Wraps tokens, cutting annotated ones again so that okurigana is never annotated.
    ///
    /// Fails if an annotation does not fit its segment, or if the text could not be read back
    /// from the bracket format.
    pub fn from_tokens(
        tokens: Vec<TextToken>,
        text: Option<&str>,
        expected_yomi: Option<&str>,
    ) -> Result<Self> {
        let tokens = normalize(tokens)?;
        let text = match text {
            Some(text) => text.to_string(),
            None => tokens.iter().map(TextToken::origin).collect(),
        };
        let mut jpn_text = Self {
            text,
            tokens,
            expected_yomi: expected_yomi
                .filter(|yomi| !yomi.is_empty())
                .map(str::to_string),
            furigana_errors: vec![],
        };
        jpn_text.furigana_errors = jpn_text.check_furigana();
        Ok(jpn_text)
    }

    // both checks always run
    fn check_furigana(&self) -> Vec<FuriganaMismatch> {
        let mut errors = vec![];
        let reconstructed = self.furigana(FuriganaKind::None, &[]);
        if reconstructed != self.text {
            errors.push(FuriganaMismatch::Reconstruction(reconstructed));
        }
        if let Some(expected_yomi) = &self.expected_yomi {
            if self.hiragana() != kana::kat2hir(expected_yomi) {
                errors.push(FuriganaMismatch::Reading);
            }
        }
        if errors.is_empty() {
            debug!(text = self.text.as_str(), "furigana consistent");
        } else {
            warn!(text = self.text.as_str(), ?errors, "furigana inconsistent");
        }
        errors
    }

    /// The plain text the furigana belongs to.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[TextToken] {
        &self.tokens
    }

    pub fn expected_yomi(&self) -> Option<&str> {
        self.expected_yomi.as_deref()
    }

    pub fn furigana_errors(&self) -> &[FuriganaMismatch] {
        &self.furigana_errors
    }

    /// The errors as user facing messages.
    pub fn furigana_error_messages(&self) -> Vec<String> {
        self.furigana_errors.iter().map(ToString::to_string).collect()
    }

    pub fn is_consistent(&self) -> bool {
        self.furigana_errors.is_empty()
    }

    /// Writes the text in the given format.
    /// Tokens whose origin is in `excluded` are written without furigana.
    pub fn furigana(&self, kind: FuriganaKind, excluded: &[&str]) -> String {
        let mut furigana = String::new();
        for token in &self.tokens {
            if excluded.contains(&token.origin()) {
                furigana.push_str(token.origin());
                continue;
            }
            let rendered = token.furigana(kind);
            if kind == FuriganaKind::Simple && furigana.is_empty() {
                // the separating space is only needed after other text
                furigana.push_str(rendered.strip_prefix(' ').unwrap_or(&rendered));
            } else {
                furigana.push_str(&rendered);
            }
        }
        furigana
    }

    /// The reading of the whole text in hiragana.
    pub fn hiragana(&self) -> String {
        self.tokens.iter().map(TextToken::hiragana).collect()
    }
}

fn normalize(tokens: Vec<TextToken>) -> Result<Vec<TextToken>> {
    let mut split = Vec::with_capacity(tokens.len());
    for token in tokens {
        if token.is_annotated() {
            let reading = token.reading().unwrap_or_default();
            split.extend(split_sub_token(token.origin(), reading)?);
        } else {
            split.push(token);
        }
    }

    // adjacent plain tokens are written out as one run
    let mut plain_run = String::new();
    for token in &split {
        if token.is_annotated() {
            markup::check_plain_text(&plain_run)?;
            markup::check_annotated_text(token.origin())?;
            plain_run.clear();
        } else {
            plain_run.push_str(token.origin());
        }
    }
    markup::check_plain_text(&plain_run)?;
    Ok(split)
}

/// Prints the text in the bracket format.
impl Display for JpnText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.furigana(FuriganaKind::Bracket, &[]))
    }
}
