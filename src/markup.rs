//! Reads furigana back out of ruby and bracket markup.

use crate::{segmentation::split_sub_token, Error, MarkupFormat, Result, TextToken};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static RE_RUBY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<ruby>([^<>]*)(?:<rp>[^<>]*</rp>)?<rt>([^<>]*)</rt>(?:<rp>[^<>]*</rp>)?</ruby>")
        .unwrap()
});
static RE_RUBY_LEFTOVER: Lazy<Regex> = Lazy::new(|| Regex::new(r"</?(?:ruby|rt|rp)>").unwrap());
static RE_BRACKET: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\[\]|]*)\|([^\[\]|]*)\|f\]").unwrap());
static RE_BRACKET_LEFTOVER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[[^\[\]]*\|[^\[\]]*\]|\|f\]").unwrap());

/// Parses `<ruby>漢字<rt>かんじ</rt></ruby>` markup.
pub fn parse_ruby(ruby: &str) -> Result<Vec<TextToken>> {
    parse(ruby, MarkupFormat::Ruby, &RE_RUBY, &RE_RUBY_LEFTOVER)
}

/// Parses `[漢字|かんじ|f]` markup.
pub fn parse_bracket(furigana: &str) -> Result<Vec<TextToken>> {
    parse(furigana, MarkupFormat::Bracket, &RE_BRACKET, &RE_BRACKET_LEFTOVER)
}

// annotated spans go through the splitter so that okurigana inside the markup gets pulled out,
// the text in between is kept as is
fn parse(
    markup: &str,
    format: MarkupFormat,
    annotation: &Regex,
    leftover: &Regex,
) -> Result<Vec<TextToken>> {
    let mut tokens = vec![];
    let mut rest_start = 0;
    for captures in annotation.captures_iter(markup) {
        let (Some(whole), Some(origin), Some(reading)) =
            (captures.get(0), captures.get(1), captures.get(2))
        else {
            continue;
        };
        push_plain(&mut tokens, &markup[rest_start..whole.start()], format, leftover)?;
        debug!(%format, origin = origin.as_str(), reading = reading.as_str(), "annotated span");
        tokens.extend(split_sub_token(origin.as_str(), reading.as_str())?);
        rest_start = whole.end();
    }
    push_plain(&mut tokens, &markup[rest_start..], format, leftover)?;
    Ok(tokens)
}

/// Fails if plain text would be taken for bracket markup once written out.
pub(crate) fn check_plain_text(plain: &str) -> Result<()> {
    let found = RE_BRACKET
        .find(plain)
        .into_iter()
        .chain(RE_BRACKET_LEFTOVER.find(plain))
        .map(|found| found.start())
        .min();
    match found {
        Some(start) => Err(Error::MarkupInText(plain[start..].chars().take(20).collect())),
        None => Ok(()),
    }
}

/// Fails if an annotated segment contains characters that delimit bracket markup.
pub(crate) fn check_annotated_text(origin: &str) -> Result<()> {
    if origin.contains(['[', ']', '|']) {
        return Err(Error::MarkupInText(origin.to_string()));
    }
    Ok(())
}

fn push_plain(
    tokens: &mut Vec<TextToken>,
    plain: &str,
    format: MarkupFormat,
    leftover: &Regex,
) -> Result<()> {
    if let Some(found) = leftover.find(plain) {
        return Err(Error::Markup {
            format,
            fragment: plain[found.start()..].chars().take(20).collect(),
        });
    }
    if !plain.is_empty() {
        tokens.push(TextToken::plain(plain));
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn pairs(tokens: Vec<TextToken>) -> Vec<(String, Option<String>)> {
        tokens
            .into_iter()
            .map(|t| (t.origin().to_string(), t.reading().map(str::to_string)))
            .collect()
    }

    fn pair(origin: &str, reading: Option<&str>) -> (String, Option<String>) {
        (origin.to_string(), reading.map(str::to_string))
    }

    #[test]
    fn parses_bracket() {
        let tokens = parse_bracket("ご[飯|はん|f]に[差し支|さしつか|f]えない").unwrap();
        assert_eq!(
            pairs(tokens),
            vec![
                pair("ご", None),
                pair("飯", Some("はん")),
                pair("に", None),
                pair("差し支", Some("さしつか")),
                pair("えない", None),
            ]
        );
    }

    #[test]
    fn parses_ruby_with_okurigana() {
        let tokens =
            parse_ruby("<ruby>ご飯<rt>ごはん</rt></ruby>に<ruby>差し支え<rt>さしつかえ</rt></ruby>ない")
                .unwrap();
        assert_eq!(
            pairs(tokens),
            vec![
                pair("ご", None),
                pair("飯", Some("はん")),
                pair("に", None),
                pair("差し支", Some("さしつか")),
                pair("え", None),
                pair("ない", None),
            ]
        );
    }

    #[test]
    fn parses_ruby_with_fallback_parentheses() {
        let tokens = parse_ruby("<ruby>漢字<rp>(</rp><rt>かんじ</rt><rp>)</rp></ruby>").unwrap();
        assert_eq!(pairs(tokens), vec![pair("漢字", Some("かんじ"))]);
    }

    #[test]
    fn keeps_kanji_outside_markup_plain() {
        let tokens = parse_bracket("一竿の[風月|ふうげつ|f]").unwrap();
        assert_eq!(
            pairs(tokens),
            vec![pair("一竿の", None), pair("風月", Some("ふうげつ"))]
        );
    }

    #[test]
    fn plain_text_without_markup() {
        assert_eq!(pairs(parse_bracket("ひ_カ_A").unwrap()), vec![pair("ひ_カ_A", None)]);
        assert!(parse_ruby("").unwrap().is_empty());
    }

    #[test]
    fn rejects_unclosed_ruby() {
        let err = parse_ruby("<ruby>漢字<rt>かんじ</ruby>").unwrap_err();
        assert!(matches!(
            err,
            Error::Markup {
                format: MarkupFormat::Ruby,
                ..
            }
        ));
    }

    #[test]
    fn rejects_broken_bracket() {
        for broken in ["[漢字|かんじ]", "漢字|かんじ|f]", "[漢字|かんじ|x]"] {
            let err = parse_bracket(broken).unwrap_err();
            assert!(
                matches!(
                    err,
                    Error::Markup {
                        format: MarkupFormat::Bracket,
                        ..
                    }
                ),
                "{broken}"
            );
        }
    }

    #[test]
    fn rejects_readings_that_are_not_kana() {
        for bracket in ["[漢字|漢字|f]", "[漢字|kanji|f]"] {
            assert!(
                matches!(parse_bracket(bracket), Err(Error::Alignment { .. })),
                "{bracket}"
            );
        }
        assert!(matches!(
            parse_ruby("<ruby>漢字<rt>漢字</rt></ruby>"),
            Err(Error::Alignment { .. })
        ));
    }

    #[test]
    fn plain_square_brackets_are_text() {
        assert_eq!(pairs(parse_bracket("[注]").unwrap()), vec![pair("[注]", None)]);
    }

    #[test]
    fn flags_markup_syntax_in_plain_text() {
        for plain in ["A|f]", "[a|b]", "前[漢字|かんじ|f]後", "x|f]y[a|b]"] {
            assert!(
                matches!(check_plain_text(plain), Err(Error::MarkupInText(_))),
                "{plain}"
            );
        }
        assert!(matches!(
            check_plain_text("A|f]"),
            Err(Error::MarkupInText(fragment)) if fragment == "|f]"
        ));
        for plain in ["", "[注]", "a|b", "ひ_カ_A", "[f]"] {
            assert!(check_plain_text(plain).is_ok(), "{plain}");
        }
        assert!(check_annotated_text("漢|字").is_err());
        assert!(check_annotated_text("差し支").is_ok());
    }

    #[test]
    fn rejects_misaligned_annotation() {
        assert!(matches!(
            parse_bracket("[漢字かな|かんじ|f]"),
            Err(Error::Alignment { .. })
        ));
    }
}
