//! Document shell rendered around every page.

use minijinja::{context, Environment};

/// Errors that can occur while rendering a document.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a template engine with the site templates loaded.
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.add_template("base.html", BASE_TEMPLATE)?;
        Ok(Self { env })
    }

    /// Render a full HTML document.
    pub fn render_document(
        &self,
        title: &str,
        site_title: &str,
        base_url: &str,
        header: &str,
        body: &str,
    ) -> Result<String, RenderError> {
        let tmpl = self.env.get_template("base.html")?;

        Ok(tmpl.render(context! {
            title => title,
            site_title => site_title,
            base_url => base_url,
            header => header,
            body => body,
        })?)
    }
}

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{% if title == site_title %}{{ site_title }}{% else %}{{ title }} - {{ site_title }}{% endif %}</title>
  <link rel="stylesheet" href="{{ base_url | safe }}assets/main.css">
</head>
<body>
  {{ header | safe }}
  <main>
    {{ body | safe }}
  </main>
</body>
</html>"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_document_shell() {
        let engine = TemplateEngine::new().unwrap();

        let html = engine
            .render_document("Blogs", "simplemickey.com", "/", "<header></header>", "<p>x</p>")
            .unwrap();

        assert!(html.contains("<title>Blogs - simplemickey.com</title>"));
        assert!(html.contains(r#"href="/assets/main.css""#));
        assert!(html.contains("<header></header>"));
        assert!(html.contains("<p>x</p>"));
    }

    #[test]
    fn escapes_titles() {
        let engine = TemplateEngine::new().unwrap();

        let html = engine
            .render_document("<b>", "site", "/", "", "")
            .unwrap();

        assert!(html.contains("&lt;b&gt; - site"));
    }
}
