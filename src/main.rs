//! mdblank CLI - blank Markdown syntax for spell checking

use std::io::{self, Read, Write};

use mdblank::{BlankMarkup, MarkdownFilter, Options};

const USAGE: &str = "usage: mdblank [--multiline-tags] [--blank-markup] [FILE|-]";

fn main() -> io::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let mut options = Options::default();
    let mut blank_markup = false;
    let mut path = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--multiline-tags" => options.multiline_tags = true,
            "--blank-markup" => blank_markup = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(());
            }
            _ if arg.starts_with("--") => {
                eprintln!("{USAGE}");
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("unknown option {arg}"),
                ));
            }
            _ => path = Some(arg),
        }
    }

    // Simple usage: read from stdin or file
    let mut input = match path.as_deref() {
        Some(p) if p != "-" => std::fs::read(p)?,
        _ => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };
    log::debug!("read {} bytes", input.len());

    if blank_markup {
        MarkdownFilter::with_markup(options, BlankMarkup).process(&mut input);
    } else {
        MarkdownFilter::with_options(options).process(&mut input);
    }

    io::stdout().write_all(&input)?;
    Ok(())
}
