use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use treelight::cli::CliArgs;
use treelight::markdown::markdown_to_html;
use treelight::syntax::{Cancellation, LanguageId};
use treelight::{CodeblockContext, HighlightConfig, Highlighter, TreeSitterHighlighter};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    treelight::tracing::init(args.log_dir().as_deref());

    if args.list_languages {
        for lang in LanguageId::ALL {
            println!("{:<18} {}", lang.display_name(), lang.aliases().join(", "));
        }
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => HighlightConfig::load(path)?,
        None => HighlightConfig::load_user(),
    };
    config.apply(&args.highlight_options()?);

    let source = read_source(args.file.as_deref())?;
    let highlighter = TreeSitterHighlighter::new(config);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if args.is_markdown() {
        let html = markdown_to_html(&source, &highlighter, highlighter.config())?;
        out.write_all(html.as_bytes())?;
    } else {
        let ctx = CodeblockContext::new(source, args.language()).with_inline(args.inline);
        highlighter.render_code_block(&Cancellation::none(), &mut out, &ctx)?;
        writeln!(out)?;
    }

    out.flush().context("Failed to flush output")?;
    Ok(())
}

fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read stdin")?;
            Ok(source)
        }
    }
}
