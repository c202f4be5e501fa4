//! Command-line argument parsing
//!
//! Supports:
//! - Highlighting a file or stdin as a single code block
//! - Rendering markdown documents with highlighted fences
//! - Overriding config fields per invocation

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::HighlightOptions;
use crate::config_paths;
use crate::error::Result;

/// Syntax-highlight source code to HTML
#[derive(Parser, Debug, Default)]
#[command(name = "treelight", version, about = "Syntax-highlight source code to HTML")]
pub struct CliArgs {
    /// File to highlight (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Language alias (defaults to the file extension)
    #[arg(short, long, value_name = "LANG")]
    pub lang: Option<String>,

    /// Wrap in inline `<code>` instead of a block
    #[arg(long)]
    pub inline: bool,

    /// Treat the input as a markdown document
    #[arg(short, long)]
    pub markdown: bool,

    /// Config file (defaults to the per-user config)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Theme used for inline styles
    #[arg(long, value_name = "NAME")]
    pub style: Option<String>,

    /// Emit inline styles instead of classes where supported
    #[arg(long)]
    pub no_classes: bool,

    /// Extra options, e.g. `wrapper_class=code,guess_syntax=true`
    #[arg(short = 'O', long = "options", value_name = "OPTIONS")]
    pub options: Option<String>,

    /// List languages with a bundled grammar and exit
    #[arg(long)]
    pub list_languages: bool,

    /// Also write debug logs to the per-user logs directory
    #[arg(long)]
    pub log: bool,

    /// Also write debug logs to this directory (implies --log)
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

impl CliArgs {
    /// Call-site options gathered from the flags
    pub fn highlight_options(&self) -> Result<HighlightOptions> {
        let mut options = match &self.options {
            Some(options) => options.parse()?,
            None => HighlightOptions::default(),
        };
        if let Some(style) = &self.style {
            options.style = Some(style.clone());
        }
        if self.no_classes {
            options.no_classes = Some(true);
        }
        Ok(options)
    }

    /// Explicit `--lang`, else the file extension, else empty
    pub fn language(&self) -> String {
        self.lang
            .clone()
            .or_else(|| self.file.as_deref().and_then(extension))
            .unwrap_or_default()
    }

    /// Where file logs go: `--log-dir`, else the per-user logs dir with `--log`
    pub fn log_dir(&self) -> Option<PathBuf> {
        self.log_dir
            .clone()
            .or_else(|| self.log.then(config_paths::logs_dir).flatten())
    }

    pub fn is_markdown(&self) -> bool {
        self.markdown
            || (self.lang.is_none()
                && self
                    .file
                    .as_deref()
                    .and_then(extension)
                    .is_some_and(|ext| matches!(ext.as_str(), "md" | "markdown")))
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::try_parse_from([
            "treelight",
            "main.go",
            "--inline",
            "--style",
            "InspiredGitHub",
            "--no-classes",
        ])
        .unwrap();
        assert_eq!(args.file, Some(PathBuf::from("main.go")));
        assert!(args.inline);

        let options = args.highlight_options().unwrap();
        assert_eq!(options.style.as_deref(), Some("InspiredGitHub"));
        assert_eq!(options.no_classes, Some(true));
    }

    #[test]
    fn test_language_from_extension() {
        let args = CliArgs {
            file: Some(PathBuf::from("src/Main.RS")),
            ..CliArgs::default()
        };
        assert_eq!(args.language(), "rs");
    }

    #[test]
    fn test_explicit_language_wins() {
        let args = CliArgs {
            file: Some(PathBuf::from("script")),
            lang: Some("bash".to_string()),
            ..CliArgs::default()
        };
        assert_eq!(args.language(), "bash");
        assert_eq!(CliArgs::default().language(), "");
    }

    #[test]
    fn test_markdown_detection() {
        let args = CliArgs {
            file: Some(PathBuf::from("README.md")),
            ..CliArgs::default()
        };
        assert!(args.is_markdown());

        let args = CliArgs {
            file: Some(PathBuf::from("README.md")),
            lang: Some("markdown".to_string()),
            ..CliArgs::default()
        };
        assert!(!args.is_markdown());
        assert!(!CliArgs::default().is_markdown());
    }

    #[test]
    fn test_log_dir() {
        assert_eq!(CliArgs::default().log_dir(), None);

        let args = CliArgs::try_parse_from(["treelight", "--log-dir", "/tmp/tl"]).unwrap();
        assert_eq!(args.log_dir(), Some(PathBuf::from("/tmp/tl")));

        let args = CliArgs::try_parse_from(["treelight", "--log"]).unwrap();
        assert_eq!(args.log_dir(), config_paths::logs_dir());
    }

    #[test]
    fn test_options_string() {
        let args = CliArgs {
            options: Some("wrapper_class=code, guess_syntax=yes".to_string()),
            ..CliArgs::default()
        };
        let options = args.highlight_options().unwrap();
        assert_eq!(options.wrapper_class.as_deref(), Some("code"));
        assert_eq!(options.guess_syntax, Some(true));

        let args = CliArgs {
            options: Some("guess_syntax=sometimes".to_string()),
            ..CliArgs::default()
        };
        assert!(args.highlight_options().is_err());
    }
}
