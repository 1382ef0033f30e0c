use crate::models::ViewerConfig;

/// File name the viewer's `index.html` loads its bootstrap script from.
pub const INITIALIZER_FILE: &str = "swagger-initializer.js";

/// Renders the `swagger-initializer.js` script for `config`.
///
/// The script builds the widget from the browser's load event. String
/// options are JSON-encoded; presets and plugins are bare identifiers that
/// resolve inside the widget bundle.
pub fn render_initializer(config: &ViewerConfig) -> String {
    let options = [
        ("url", json_str(config.url())),
        ("dom_id", json_str(config.dom_id())),
        ("deepLinking", config.deep_linking().to_string()),
        ("operationsSorter", json_str(&config.operations_sorter().to_string())),
        ("apisSorter", json_str(&config.apis_sorter().to_string())),
        ("tagsSorter", json_str(&config.tags_sorter().to_string())),
        ("presets", js_list(config.presets().iter().map(|p| p.js_expr()))),
        ("plugins", js_list(config.plugins().iter().map(|p| p.js_expr()))),
        ("layout", json_str(config.layout().as_str())),
    ];

    let body = options
        .iter()
        .map(|(key, value)| format!("    {key}: {value}"))
        .collect::<Vec<_>>()
        .join(",\n");

    format!("window.onload = function () {{\n  window.ui = SwaggerUIBundle({{\n{body}\n  }});\n}};\n")
}

fn json_str(value: &str) -> String {
    // Serializing a str cannot fail.
    serde_json::to_string(value).unwrap_or_default()
}

fn js_list<'a>(items: impl Iterator<Item = &'a str>) -> String {
    let items = items
        .map(|item| format!("      {item}"))
        .collect::<Vec<_>>()
        .join(",\n");
    format!("[\n{items}\n    ]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_explorer_initializer() {
        let script = render_initializer(&ViewerConfig::explorer());

        let expected = r##"window.onload = function () {
  window.ui = SwaggerUIBundle({
    url: "/explorer/swagger.json",
    dom_id: "#swagger-ui",
    deepLinking: true,
    operationsSorter: "alpha",
    apisSorter: "alpha",
    tagsSorter: "alpha",
    presets: [
      SwaggerUIBundle.presets.apis,
      SwaggerUIStandalonePreset
    ],
    plugins: [
      SwaggerUIBundle.plugins.DownloadUrl
    ],
    layout: "StandaloneLayout"
  });
};
"##;
        assert_eq!(script, expected);
    }

    #[test]
    fn test_json_str_escapes_quotes() {
        assert_eq!(json_str(r#"a"b</script>"#), r#""a\"b</script>""#);
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let config = ViewerConfig::explorer();
        assert_eq!(render_initializer(&config), render_initializer(&config));
    }
}
