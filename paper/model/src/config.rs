/// The locale of the application, unless overridden by the configuration.
pub const LOCALE: &str = "en-US";

pub const DEFAULT_PRODUCT_NAME: &str = "Paper";

/// Paper UI configuration
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    #[serde(default)]
    pub global: Global,
}

/// Global values which affect the overall site
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Global {
    /// Language tag of the site, applied to the document.
    ///
    /// Dates in post badges are not localized and ignore this value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
}

impl Global {
    pub fn locale(&self) -> String {
        self.locale.as_deref().unwrap_or(LOCALE).to_string()
    }

    pub fn product_name(&self) -> String {
        self.product_name.as_deref().unwrap_or(DEFAULT_PRODUCT_NAME).to_string()
    }
}
