//! Kana charts, character classes and table driven conversions.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use wana_kana::IsJapaneseChar;

/// Every katakana character, in the same order as [`HIRAGANA_CHART`].
pub const KATAKANA_CHART: &str = "ァアィイゥウェエォオカガキギクグケゲコゴサザシジスズセゼソゾタダチヂッツヅテデトドナニヌネノ\
ハバパヒビピフブプヘベペホボポマミムメモャヤュユョヨラリルレロヮワヰヱヲンヴヵヶヽヾ";
/// Every hiragana character, in the same order as [`KATAKANA_CHART`].
pub const HIRAGANA_CHART: &str = "ぁあぃいぅうぇえぉおかがきぎくぐけげこごさざしじすずせぜそぞただちぢっつづてでとどなにぬねの\
はばぱひびぴふぶぷへべぺほぼぽまみむめもゃやゅゆょよらりるれろゎわゐゑをんゔゕゖゝゞ";

pub const PUNCTUATION_CHART: &str = "。、・";
pub const ALPHABET_LOWER_CHART: &str = "abcdefghijklmnopqrstuvwxyz";
pub const ALPHABET_UPPER_CHART: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const FULLWIDTH_DIGIT_CHART: &str = "０１２３４５６７８９";
pub const HALFWIDTH_DIGIT_CHART: &str = "0123456789";

static HIR2KAT: Lazy<HashMap<char, char>> = Lazy::new(|| chart_map(HIRAGANA_CHART, KATAKANA_CHART));
static KAT2HIR: Lazy<HashMap<char, char>> = Lazy::new(|| chart_map(KATAKANA_CHART, HIRAGANA_CHART));
static DIGIT_FUL2HALF: Lazy<HashMap<char, char>> =
    Lazy::new(|| chart_map(FULLWIDTH_DIGIT_CHART, HALFWIDTH_DIGIT_CHART));

fn chart_map(from: &str, to: &str) -> HashMap<char, char> {
    debug_assert_eq!(from.chars().count(), to.chars().count());
    from.chars().zip(to.chars()).collect()
}

fn translate(text: &str, table: &HashMap<char, char>) -> String {
    text.chars().map(|c| *table.get(&c).unwrap_or(&c)).collect()
}

/// Converts every katakana character to hiragana, leaving everything else untouched.
pub fn kat2hir(text: &str) -> String {
    translate(text, &KAT2HIR)
}

/// Converts every hiragana character to katakana, leaving everything else untouched.
pub fn hir2kat(text: &str) -> String {
    translate(text, &HIR2KAT)
}

/// Removes every hiragana character.
pub fn strip_hiragana(text: &str) -> String {
    text.chars().filter(|c| !HIR2KAT.contains_key(c)).collect()
}

/// Converts full-width digits to their ASCII counterparts.
pub fn digit_ful2half(text: &str) -> String {
    translate(text, &DIGIT_FUL2HALF)
}

pub fn is_hiragana(c: char) -> bool {
    HIR2KAT.contains_key(&c)
}

pub fn is_katakana(c: char) -> bool {
    KAT2HIR.contains_key(&c)
}

pub fn is_kana(c: char) -> bool {
    is_hiragana(c) || is_katakana(c)
}

/// CJK ideographs, plus the iteration mark 々 so that 日々 forms a single run.
pub fn is_kanji(c: char) -> bool {
    c == '々' || c.is_kanji()
}

pub fn contains_kanji(text: &str) -> bool {
    text.chars().any(is_kanji)
}

/// Kana-only form fields: normalise the input, then check it against a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KanaField {
    /// Readings stored in katakana.
    Katakana,
    /// Readings stored in hiragana.
    Hiragana,
    /// Hiragana readings that may also contain punctuation, digits and latin letters.
    HiraganaPlus,
}

impl KanaField {
    fn label(self) -> &'static str {
        match self {
            Self::Katakana => "片仮名",
            Self::Hiragana | Self::HiraganaPlus => "平仮名",
        }
    }

    fn accepts(self, c: char) -> bool {
        match self {
            Self::Katakana => is_katakana(c),
            Self::Hiragana => is_hiragana(c),
            Self::HiraganaPlus => {
                is_hiragana(c)
                    || PUNCTUATION_CHART.contains(c)
                    || FULLWIDTH_DIGIT_CHART.contains(c)
                    || HALFWIDTH_DIGIT_CHART.contains(c)
                    || ALPHABET_LOWER_CHART.contains(c)
                    || ALPHABET_UPPER_CHART.contains(c)
            }
        }
    }

    /// Translates the value to the field's script and trims surrounding whitespace.
    pub fn normalize(self, value: &str) -> String {
        let translated = match self {
            Self::Katakana => hir2kat(value),
            Self::Hiragana | Self::HiraganaPlus => kat2hir(value),
        };
        translated.trim().to_string()
    }

    /// Normalises the value and checks that every character belongs to the field's chart.
    pub fn clean(self, value: &str) -> Result<String, InvalidKana> {
        let value = self.normalize(value);
        if value.chars().all(|c| self.accepts(c)) {
            Ok(value)
        } else {
            Err(InvalidKana { field: self, value })
        }
    }
}

/// A kana field received characters outside of its chart.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("入力は{}以外: {value}", .field.label())]
pub struct InvalidKana {
    pub field: KanaField,
    pub value: String,
}
