//! Converts ruby or bracket markup given on the command line to every other format.
//!
//! `cargo run --example convert -- '<ruby>差し支え<rt>さしつかえ</rt></ruby>ない'`

use jpntext::{FuriganaKind, JpnText};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "ご[飯|はん|f]に[差し支|さしつか|f]えない[様|よう|f]に".to_string());
    let text = if input.contains("<ruby>") {
        JpnText::from_ruby(&input, None, None)?
    } else {
        JpnText::from_furigana_format(&input, None, None)?
    };

    for kind in [
        FuriganaKind::None,
        FuriganaKind::Bracket,
        FuriganaKind::Ruby,
        FuriganaKind::Simple,
        FuriganaKind::Parenthesis,
    ] {
        println!("{:>11}: {}", kind.to_string(), text.furigana(kind, &[]));
    }
    println!("   hiragana: {}", text.hiragana());
    Ok(())
}
