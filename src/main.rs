//! spanfmt - render annotated message JSON to markup

use std::io::Read;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use spanfmt::{Dialect, Message, RenderOptions, render};

#[derive(Parser)]
#[command(name = "spanfmt")]
#[command(version, about = "Render annotated message JSON to HTML or Markdown", long_about = None)]
#[command(after_help = "EXAMPLES:
    spanfmt message.json                 Render the message text as HTML
    spanfmt -d markdown-v2 message.json  Render as MarkdownV2
    cat message.json | spanfmt -         Read the message from stdin")]
struct Cli {
    /// Input JSON file, or - for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output dialect
    #[arg(short, long, value_enum, default_value_t = DialectArg::Html)]
    dialect: DialectArg,

    /// Format bare URLs as links
    #[arg(short, long)]
    urled: bool,

    /// Render the caption instead of the message text
    #[arg(short, long)]
    caption: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum DialectArg {
    Html,
    Markdown,
    MarkdownV2,
}

impl From<DialectArg> for Dialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Html => Dialect::Html,
            DialectArg::Markdown => Dialect::Markdown,
            DialectArg::MarkdownV2 => Dialect::MarkdownV2,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let json = read_input(&cli.input)?;
    let message: Message =
        serde_json::from_str(&json).map_err(|e| format!("invalid message JSON: {e}"))?;

    let (text, entities) = if cli.caption {
        (message.caption.as_deref(), &message.caption_entities)
    } else {
        (message.text.as_deref(), &message.entities)
    };

    let mut options = RenderOptions::new(cli.dialect.into());
    if cli.urled {
        options.auto_link_urls = true;
    }

    match render(text, entities, &options).map_err(|e| e.to_string())? {
        Some(markup) => {
            println!("{markup}");
            Ok(())
        }
        None if cli.caption => Err("message has no caption".to_string()),
        None => Err("message has no text".to_string()),
    }
}

fn read_input(input: &str) -> Result<String, String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("failed to read stdin: {e}"))?;
        Ok(buf)
    } else {
        std::fs::read_to_string(input).map_err(|e| format!("failed to read {input}: {e}"))
    }
}
