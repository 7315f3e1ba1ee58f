//! Asset pipeline for the CSS bundle.

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Generate the main CSS file from the view stylesheets.
    pub fn generate_css() -> String {
        mickey_views::styles::bundle()
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_css_with_scoped_classes() {
        let css = AssetPipeline::generate_css();

        assert!(css.contains("box-sizing"));
        assert!(css.contains(mickey_views::styles::header().class("header__logo")));
    }

    #[test]
    fn minifies_css() {
        let css = r#"
.header {
    background-color: blue;
    padding: 10px;
}
        "#;

        let minified = AssetPipeline::minify_css(css).unwrap();

        assert!(!minified.contains('\n'));
        assert!(minified.contains(".header"));
    }

    #[test]
    fn minifies_the_bundle() {
        let bundle = AssetPipeline::generate_css();
        let minified = AssetPipeline::minify_css(&bundle).unwrap();

        assert!(minified.len() < bundle.len());
        assert!(minified.contains(mickey_views::styles::not_found().class("notfound")));
    }
}
