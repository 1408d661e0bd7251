// hanzi-pinyin/src/main.rs
//
// Command-line front-end: converts argument text (or stdin lines) to pinyin
// in the selected style, joined output by default or the full candidate
// matrix as JSON.

use std::io::{self, BufRead};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use hanzi_pinyin::{pinyin, slug, Args, Style};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StyleArg {
    Normal,
    Tone,
    Tone2,
    Tone3,
    Initials,
    FirstLetter,
    Finals,
    FinalsTone,
    FinalsTone2,
    FinalsTone3,
}

impl From<StyleArg> for Style {
    fn from(s: StyleArg) -> Self {
        match s {
            StyleArg::Normal => Style::Normal,
            StyleArg::Tone => Style::Tone,
            StyleArg::Tone2 => Style::Tone2,
            StyleArg::Tone3 => Style::Tone3,
            StyleArg::Initials => Style::Initials,
            StyleArg::FirstLetter => Style::FirstLetter,
            StyleArg::Finals => Style::Finals,
            StyleArg::FinalsTone => Style::FinalsTone,
            StyleArg::FinalsTone2 => Style::FinalsTone2,
            StyleArg::FinalsTone3 => Style::FinalsTone3,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "hanzi-pinyin", about = "Convert hanzi text to pinyin")]
struct Cli {
    /// Text to convert; reads lines from stdin when omitted.
    text: Vec<String>,

    /// Output style.
    #[arg(long, value_enum, default_value_t = StyleArg::Tone)]
    style: StyleArg,

    /// Emit every reading for characters with more than one.
    #[arg(long)]
    heteronym: bool,

    /// Separator for joined output.
    #[arg(long, default_value = "-")]
    separator: String,

    /// Print the full candidate matrix as JSON instead of joined output.
    #[arg(long)]
    json: bool,

    /// Pass characters without a reading through unchanged instead of
    /// dropping them.
    #[arg(long)]
    keep_unknown: bool,
}

fn passthrough(ch: char, _args: &Args) -> Vec<String> {
    vec![ch.to_string()]
}

fn convert_line(line: &str, args: &Args, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string(&pinyin(line, args))?)
    } else {
        Ok(slug(line, args))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let args = Args {
        style: cli.style.into(),
        heteronym: cli.heteronym,
        separator: cli.separator.clone(),
        fallback: cli.keep_unknown.then_some(passthrough as hanzi_pinyin::Fallback),
    };

    if cli.text.is_empty() {
        for line in io::stdin().lock().lines() {
            println!("{}", convert_line(&line?, &args, cli.json)?);
        }
    } else {
        for text in &cli.text {
            println!("{}", convert_line(text, &args, cli.json)?);
        }
    }
    Ok(())
}
