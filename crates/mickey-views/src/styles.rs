//! Scoped stylesheets.
//!
//! Views with their own styles ship a CSS module. Modules are compiled once with
//! lightningcss, which renames every class to a scoped name; views look the
//! scoped names up by their local name.

use std::collections::HashMap;
use std::sync::OnceLock;

use lightningcss::css_modules::Config;
use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

const LAYOUT_CSS: &str = include_str!("styles/layout.css");
const HEADER_CSS: &str = include_str!("styles/header.module.css");
const NOT_FOUND_CSS: &str = include_str!("styles/notfound.module.css");

/// Errors that can occur when compiling a stylesheet.
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    #[error("CSS parse error in {file}: {message}")]
    Parse { file: String, message: String },

    #[error("CSS print error in {file}: {message}")]
    Print { file: String, message: String },
}

/// A compiled CSS module.
#[derive(Debug, Clone)]
pub struct ScopedStyles {
    /// Module file name, also the scope seed
    filename: String,
    /// Compiled CSS with scoped class names
    css: String,
    /// Local class name to scoped class name
    classes: HashMap<String, String>,
}

impl ScopedStyles {
    /// Compile `source` as a CSS module.
    pub fn compile(filename: &str, source: &str) -> Result<Self, StyleError> {
        let options = ParserOptions {
            filename: filename.to_string(),
            css_modules: Some(Config::default()),
            ..ParserOptions::default()
        };

        let stylesheet = StyleSheet::parse(source, options).map_err(|e| StyleError::Parse {
            file: filename.to_string(),
            message: e.to_string(),
        })?;

        let output = stylesheet
            .to_css(PrinterOptions::default())
            .map_err(|e| StyleError::Print {
                file: filename.to_string(),
                message: e.to_string(),
            })?;

        let classes = output
            .exports
            .unwrap_or_default()
            .into_iter()
            .map(|(local, export)| (local, export.name))
            .collect();

        Ok(Self {
            filename: filename.to_string(),
            css: output.code,
            classes,
        })
    }

    /// Use `source` as-is, with every class keeping its local name.
    pub fn unscoped(filename: &str, source: &str) -> Self {
        Self {
            filename: filename.to_string(),
            css: source.to_string(),
            classes: HashMap::new(),
        }
    }

    /// Scoped name for a local class. Unknown classes keep their local name.
    pub fn class<'a>(&'a self, local: &'a str) -> &'a str {
        self.classes.get(local).map(String::as_str).unwrap_or(local)
    }

    /// Compiled CSS.
    pub fn css(&self) -> &str {
        &self.css
    }

    /// Module file name.
    pub fn filename(&self) -> &str {
        &self.filename
    }
}

fn compile_or_fallback(filename: &str, source: &str) -> ScopedStyles {
    ScopedStyles::compile(filename, source).unwrap_or_else(|e| {
        tracing::error!("Failed to compile stylesheet, using it unscoped: {}", e);
        ScopedStyles::unscoped(filename, source)
    })
}

/// Styles for the header.
pub fn header() -> &'static ScopedStyles {
    static STYLES: OnceLock<ScopedStyles> = OnceLock::new();
    STYLES.get_or_init(|| compile_or_fallback("header.module.css", HEADER_CSS))
}

/// Styles for the 404 page.
pub fn not_found() -> &'static ScopedStyles {
    static STYLES: OnceLock<ScopedStyles> = OnceLock::new();
    STYLES.get_or_init(|| compile_or_fallback("notfound.module.css", NOT_FOUND_CSS))
}

/// Every stylesheet of the site in one file, global layout first.
pub fn bundle() -> String {
    let mut css = String::from(LAYOUT_CSS);
    for module in [header(), not_found()] {
        css.push_str("\n/* ");
        css.push_str(module.filename());
        css.push_str(" */\n");
        css.push_str(module.css());
    }
    css
}
