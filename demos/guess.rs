//! Guesses the furigana of a sentence with the tokenizer described in `jpntext.toml`.
//!
//! `cargo run --example guess -- 身体は芭蕉の如し しんたいはばしょうのごとし`

use jpntext::{config, FuriganaKind, JpnText};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let sentence = args.next().unwrap_or_else(|| "ご飯に差し支えない様に".to_string());
    let expected_yomi = args.next();

    let config = config::load_config("jpntext.toml")?;
    let tokenizer = config.tokenizer.build()?;
    let text = JpnText::from_text(&sentence, expected_yomi.as_deref(), &*tokenizer)?;

    println!("{}", text.furigana(FuriganaKind::Bracket, &[]));
    println!("{}", text.furigana(FuriganaKind::Simple, &[]));
    for message in text.furigana_error_messages() {
        eprintln!("{message}");
    }
    Ok(())
}
