use std::fmt;

use serde::{Deserialize, Serialize};

/// Node schema version, as declared by the host for the node instance.
///
/// The model parameter changed shape at 1.2 (plain name before, structured
/// locator after); everything else is version-independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SchemaVersion {
    pub major: u16,
    pub minor: u16,
}

impl SchemaVersion {
    pub const V1_0: SchemaVersion = SchemaVersion { major: 1, minor: 0 };
    pub const V1_1: SchemaVersion = SchemaVersion { major: 1, minor: 1 };
    pub const V1_2: SchemaVersion = SchemaVersion { major: 1, minor: 2 };

    pub fn new(major: u16, minor: u16) -> Self {
        Self { major, minor }
    }

    /// The host reports the node's type version as a decimal number
    /// (1, 1.1, 1.2). One fractional digit is significant.
    pub fn from_type_version(version: f64) -> Self {
        let major = version.trunc().max(0.0) as u16;
        let minor = ((version - version.trunc()) * 10.0).round().max(0.0) as u16;
        Self { major, minor }
    }

    /// Whether the model parameter is a structured locator rather than a
    /// plain name. Unknown future versions keep locator semantics.
    pub fn supports_model_locator(&self) -> bool {
        *self >= Self::V1_2
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// How a locator value was chosen in the host UI.
///
/// Both modes resolve to the same model-name string; the distinction is
/// UI provenance only and is never re-validated here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocatorMode {
    List,
    Id,
}

/// Versioned model selection, decoded once at the node boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSelector {
    /// Plain model name (schema < 1.2).
    Name(String),
    /// Structured locator (schema >= 1.2).
    Locator { mode: LocatorMode, value: String },
}

impl ModelSelector {
    /// Fold the selector to the single model-name string it denotes.
    pub fn model_name(&self) -> &str {
        match self {
            ModelSelector::Name(name) => name,
            ModelSelector::Locator { value, .. } => value,
        }
    }
}

/// One entry of the models-listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ModelEntry {
    pub id: String,
}

/// Wire shape of `GET <base>/models`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelsPage {
    #[serde(default)]
    pub data: Vec<ModelEntry>,
}

#[cfg(test)]
mod tests {
    use super::{LocatorMode, ModelSelector, ModelsPage, SchemaVersion};

    #[test]
    fn type_version_maps_to_major_minor() {
        assert_eq!(SchemaVersion::from_type_version(1.0), SchemaVersion::V1_0);
        assert_eq!(SchemaVersion::from_type_version(1.1), SchemaVersion::V1_1);
        assert_eq!(SchemaVersion::from_type_version(1.2), SchemaVersion::V1_2);
    }

    #[test]
    fn locator_support_starts_at_1_2() {
        assert!(!SchemaVersion::V1_0.supports_model_locator());
        assert!(!SchemaVersion::V1_1.supports_model_locator());
        assert!(SchemaVersion::V1_2.supports_model_locator());
        assert!(SchemaVersion::new(2, 0).supports_model_locator());
    }

    #[test]
    fn both_selector_shapes_fold_to_the_name() {
        assert_eq!(ModelSelector::Name("gpt-4o".into()).model_name(), "gpt-4o");
        let locator = ModelSelector::Locator {
            mode: LocatorMode::Id,
            value: "gpt-4o".into(),
        };
        assert_eq!(locator.model_name(), "gpt-4o");
    }

    #[test]
    fn models_page_decodes_listing_body() {
        let page: ModelsPage = serde_json::from_str(
            r#"{"object":"list","data":[{"id":"gpt-4o","object":"model","owned_by":"openai"}]}"#,
        )
        .expect("models page");
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].id, "gpt-4o");
    }
}
