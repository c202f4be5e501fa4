//! Highlighting configuration
//!
//! `HighlightConfig` holds the effective settings for one call. It is built by
//! layering partial [`HighlightOptions`] over the defaults, in this order:
//!
//! 1. defaults (or the loaded config file)
//! 2. the code block's own options map
//! 3. call-site options
//! 4. per-block context overrides
//!
//! The same merged record is used whichever backend ends up rendering.

use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codeblock::CodeblockContext;
use crate::error::{HighlightError, Result};

/// Raw option map as it arrives from a code fence
pub type OptionsMap = BTreeMap<String, Value>;

/// Option keys, normalized (lowercase, no `_`/`-`)
const KEY_STYLE: &str = "style";
const KEY_NO_CLASSES: &str = "noclasses";
const KEY_HL_INLINE: &str = "hlinline";
const KEY_WRAPPER_CLASS: &str = "wrapperclass";
const KEY_GUESS_SYNTAX: &str = "guesssyntax";
const KEY_CODE_FENCES: &str = "codefences";

const KNOWN_KEYS: &[&str] = &[
    KEY_STYLE,
    KEY_NO_CLASSES,
    KEY_HL_INLINE,
    KEY_WRAPPER_CLASS,
    KEY_GUESS_SYNTAX,
    KEY_CODE_FENCES,
];

/// Effective highlighting settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Theme used by the fallback when emitting inline styles
    pub style: String,
    /// Fallback emits inline styles instead of classes
    pub no_classes: bool,
    /// Wrap output in inline `<code>` instead of `<div><pre><code>`
    pub hl_inline: bool,
    /// Class of the outer wrapper `<div>`
    pub wrapper_class: String,
    /// Fallback guesses the syntax from the first line of unknown languages
    pub guess_syntax: bool,
    /// Highlight fenced code blocks in markdown documents
    pub code_fences: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            style: "base16-ocean.dark".to_string(),
            no_classes: false,
            hl_inline: false,
            wrapper_class: "highlight".to_string(),
            guess_syntax: false,
            code_fences: true,
        }
    }
}

impl HighlightConfig {
    /// Parse a YAML config document. Missing fields take their defaults.
    pub fn from_yaml(yaml: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse highlight config")
    }

    /// Load config from `path`, or return defaults if it does not exist
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config = Self::from_yaml(&content)
            .with_context(|| format!("Invalid config at {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load the per-user config file, falling back to defaults on any problem
    pub fn load_user() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{:#}", e);
                Self::default()
            }
        }
    }

    /// Overlay every field `options` sets
    pub fn apply(&mut self, options: &HighlightOptions) {
        if let Some(style) = &options.style {
            self.style = style.clone();
        }
        if let Some(no_classes) = options.no_classes {
            self.no_classes = no_classes;
        }
        if let Some(hl_inline) = options.hl_inline {
            self.hl_inline = hl_inline;
        }
        if let Some(wrapper_class) = &options.wrapper_class {
            self.wrapper_class = wrapper_class.clone();
        }
        if let Some(guess_syntax) = options.guess_syntax {
            self.guess_syntax = guess_syntax;
        }
        if let Some(code_fences) = options.code_fences {
            self.code_fences = code_fences;
        }
    }

    /// Effective config for a plain highlight call
    pub fn for_call(&self, call_site: Option<&HighlightOptions>) -> Self {
        let mut config = self.clone();
        if let Some(options) = call_site {
            config.apply(options);
        }
        config
    }

    /// Effective config for a code block: block options, then call-site
    /// options, then the block's own overrides
    pub fn for_code_block(
        &self,
        ctx: &CodeblockContext,
        call_site: Option<&HighlightOptions>,
    ) -> Result<Self> {
        let mut config = self.clone();
        config.apply(&HighlightOptions::from_map(&ctx.options)?);
        if let Some(options) = call_site {
            config.apply(options);
        }
        config.apply(&ctx.overrides());
        Ok(config)
    }
}

/// A partial configuration; unset fields leave the layer below untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightOptions {
    pub style: Option<String>,
    pub no_classes: Option<bool>,
    pub hl_inline: Option<bool>,
    pub wrapper_class: Option<String>,
    pub guess_syntax: Option<bool>,
    pub code_fences: Option<bool>,
}

impl HighlightOptions {
    /// Build from an options map. Keys are case-insensitive and may use
    /// `snake_case` or `camelCase`; unknown keys are ignored.
    pub fn from_map(map: &OptionsMap) -> Result<Self> {
        let mut options = Self::default();
        for (key, value) in map {
            options.set(key, value)?;
        }
        Ok(options)
    }

    /// Whether `key` names a highlighting option
    pub fn is_known_key(key: &str) -> bool {
        KNOWN_KEYS.contains(&normalize_key(key).as_str())
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn set(&mut self, key: &str, value: &Value) -> Result<()> {
        match normalize_key(key).as_str() {
            KEY_STYLE => self.style = Some(string_value(key, value)?),
            KEY_NO_CLASSES => self.no_classes = Some(bool_value(key, value)?),
            KEY_HL_INLINE => self.hl_inline = Some(bool_value(key, value)?),
            KEY_WRAPPER_CLASS => self.wrapper_class = Some(string_value(key, value)?),
            KEY_GUESS_SYNTAX => self.guess_syntax = Some(bool_value(key, value)?),
            KEY_CODE_FENCES => self.code_fences = Some(bool_value(key, value)?),
            _ => tracing::trace!("Ignoring unknown highlight option `{}`", key),
        }
        Ok(())
    }
}

/// Parses `key=value` pairs separated by commas or whitespace,
/// e.g. `"hl_inline=true, style=monokai"`
impl FromStr for HighlightOptions {
    type Err = HighlightError;

    fn from_str(s: &str) -> Result<Self> {
        let mut map = OptionsMap::new();
        for pair in s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|pair| !pair.is_empty())
        {
            let (key, value) = pair.split_once('=').ok_or_else(|| {
                HighlightError::invalid_option(pair, "expected `key=value`")
            })?;
            let value = value.trim_matches(|c| c == '"' || c == '\'');
            map.insert(key.trim().to_string(), Value::String(value.to_string()));
        }
        Self::from_map(&map)
    }
}

fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

fn bool_value(key: &str, value: &Value) -> Result<bool> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::String(s) => match s.to_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Ok(true),
            "false" | "no" | "off" | "0" => Ok(false),
            _ => Err(HighlightError::invalid_option(
                key,
                format!("expected a boolean, got `{}`", s),
            )),
        },
        other => Err(HighlightError::invalid_option(
            key,
            format!("expected a boolean, got {}", other),
        )),
    }
}

fn string_value(key: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(HighlightError::invalid_option(
            key,
            format!("expected a string, got {}", other),
        )),
    }
}
