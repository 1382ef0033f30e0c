use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Path the viewer and its assets are mounted under.
pub const EXPLORER_PATH: &str = "/explorer";

/// Where the viewer fetches the schema document from.
pub const SCHEMA_URL: &str = "/explorer/swagger.json";

/// Page element the viewer renders into.
pub const DOM_ID: &str = "#swagger-ui";

/// Ordering applied by the viewer to operations, API groups or tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    /// Alphabetical by path or name
    Alpha,
    /// By HTTP method, only meaningful for operations
    Method,
}

/// Preset bundles registered with the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Apis,
    Standalone,
}

impl Preset {
    /// JavaScript expression resolving to the preset inside the viewer bundle.
    pub fn js_expr(&self) -> &'static str {
        match self {
            Preset::Apis => "SwaggerUIBundle.presets.apis",
            Preset::Standalone => "SwaggerUIStandalonePreset",
        }
    }
}

/// Plugins registered with the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Plugin {
    /// Adds the top-bar field for loading another schema document URL
    DownloadUrl,
}

impl Plugin {
    pub fn js_expr(&self) -> &'static str {
        match self {
            Plugin::DownloadUrl => "SwaggerUIBundle.plugins.DownloadUrl",
        }
    }
}

/// Top-level page layout of the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Layout {
    #[serde(rename = "StandaloneLayout")]
    Standalone,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Standalone => "StandaloneLayout",
        }
    }
}

/// Options handed to the viewer widget when the page loads.
///
/// Immutable once built: there are no setters, and the bootstrapper shares
/// the single instance behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerConfig {
    url: String,
    #[serde(rename = "dom_id")]
    dom_id: String,
    deep_linking: bool,
    operations_sorter: SortOrder,
    apis_sorter: SortOrder,
    tags_sorter: SortOrder,
    presets: Vec<Preset>,
    plugins: Vec<Plugin>,
    layout: Layout,
}

impl ViewerConfig {
    /// The explorer's fixed viewer options.
    pub fn explorer() -> Self {
        Self {
            url: SCHEMA_URL.to_string(),
            dom_id: DOM_ID.to_string(),
            deep_linking: true,
            operations_sorter: SortOrder::Alpha,
            apis_sorter: SortOrder::Alpha,
            tags_sorter: SortOrder::Alpha,
            presets: vec![Preset::Apis, Preset::Standalone],
            plugins: vec![Plugin::DownloadUrl],
            layout: Layout::Standalone,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn dom_id(&self) -> &str {
        &self.dom_id
    }

    pub fn deep_linking(&self) -> bool {
        self.deep_linking
    }

    pub fn operations_sorter(&self) -> SortOrder {
        self.operations_sorter
    }

    pub fn apis_sorter(&self) -> SortOrder {
        self.apis_sorter
    }

    pub fn tags_sorter(&self) -> SortOrder {
        self.tags_sorter
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    pub fn plugins(&self) -> &[Plugin] {
        &self.plugins
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Maps onto the bundled widget's own configuration, used to serve its
    /// static files.
    ///
    /// The widget config only carries the document URL and deep linking.
    /// Sorters, presets, plugins and layout reach the browser through the
    /// rendered initializer.
    pub fn to_swagger_config(&self) -> utoipa_swagger_ui::Config<'static> {
        utoipa_swagger_ui::Config::new([self.url.clone()]).deep_linking(self.deep_linking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_explorer_literal_values() {
        let config = ViewerConfig::explorer();

        assert_eq!(config.url(), "/explorer/swagger.json");
        assert_eq!(config.dom_id(), "#swagger-ui");
        assert!(config.deep_linking());
        assert_eq!(config.operations_sorter(), SortOrder::Alpha);
        assert_eq!(config.apis_sorter(), SortOrder::Alpha);
        assert_eq!(config.tags_sorter(), SortOrder::Alpha);
        assert_eq!(config.presets(), &[Preset::Apis, Preset::Standalone]);
        assert_eq!(config.plugins(), &[Plugin::DownloadUrl]);
        assert_eq!(config.layout(), Layout::Standalone);
    }

    #[test]
    fn test_two_constructions_are_equal_but_independent() {
        let first = ViewerConfig::explorer();
        let second = ViewerConfig::explorer();

        assert_eq!(first, second);
        assert_ne!(first.presets().as_ptr(), second.presets().as_ptr());
    }

    #[test]
    fn test_sort_order_strings() {
        assert_eq!(SortOrder::Alpha.to_string(), "alpha");
        assert_eq!(SortOrder::Method.to_string(), "method");
        assert_eq!(SortOrder::from_str("method").unwrap(), SortOrder::Method);
        assert!(SortOrder::from_str("random").is_err());
    }

    #[test]
    fn test_js_expressions() {
        assert_eq!(Preset::Apis.js_expr(), "SwaggerUIBundle.presets.apis");
        assert_eq!(Preset::Standalone.js_expr(), "SwaggerUIStandalonePreset");
        assert_eq!(
            Plugin::DownloadUrl.js_expr(),
            "SwaggerUIBundle.plugins.DownloadUrl"
        );
    }

    #[test]
    fn test_serializes_with_viewer_option_names() {
        let json = serde_json::to_value(ViewerConfig::explorer()).unwrap();

        assert_eq!(json["url"], "/explorer/swagger.json");
        assert_eq!(json["dom_id"], "#swagger-ui");
        assert_eq!(json["deepLinking"], true);
        assert_eq!(json["operationsSorter"], "alpha");
        assert_eq!(json["apisSorter"], "alpha");
        assert_eq!(json["tagsSorter"], "alpha");
        assert_eq!(json["presets"], serde_json::json!(["apis", "standalone"]));
        assert_eq!(json["plugins"], serde_json::json!(["download_url"]));
        assert_eq!(json["layout"], "StandaloneLayout");
    }

    #[test]
    fn test_swagger_config_serves_widget_files() {
        let widget = std::sync::Arc::new(ViewerConfig::explorer().to_swagger_config());

        let index = utoipa_swagger_ui::serve("index.html", widget.clone())
            .unwrap()
            .unwrap();
        assert!(index.content_type.starts_with("text/html"));

        let bundle = utoipa_swagger_ui::serve("swagger-ui-bundle.js", widget).unwrap();
        assert!(bundle.is_some());
    }

    #[test]
    fn test_layout_name() {
        assert_eq!(Layout::Standalone.as_str(), "StandaloneLayout");
    }
}
