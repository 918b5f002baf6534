//! The banner page document

/// Default version label. Deployments that stamp builds with pipeline
/// metadata override this via the `APP_VERSION` environment variable
/// rather than editing the source.
pub const DEFAULT_VERSION: &str = "v1.1";

/// The full banner document. `{version}` is the only substitution point.
pub const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Version Banner</title>
    <style>
        body {
            background-color: violet;
            display: flex;
            justify-content: center;
            align-items: center;
            height: 100vh;
            margin: 0;
            font-family: Arial, sans-serif;
        }
        .content {
            text-align: center;
            color: white;
            font-size: 2em;
        }
    </style>
</head>
<body>
    <div class="content">
        <h1>This is application version: {version}</h1>
    </div>
</body>
</html>
"#;

/// Render the banner page for the given version label.
pub fn render_page(version: &str) -> String {
    PAGE_TEMPLATE.replace("{version}", version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_default_version_heading() {
        let page = render_page(DEFAULT_VERSION);
        assert!(page.contains("<h1>This is application version: v1.1</h1>"));
    }

    #[test]
    fn substitutes_custom_version() {
        let page = render_page("v2.0-rc1");
        assert!(page.contains("This is application version: v2.0-rc1"));
        assert!(!page.contains("{version}"));
    }

    #[test]
    fn renders_well_formed_document() {
        let page = render_page(DEFAULT_VERSION);
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<style>"));
        assert!(page.contains("background-color: violet"));
        assert!(page.trim_end().ends_with("</html>"));
    }
}
