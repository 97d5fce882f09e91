use serde::{Deserialize, Serialize};

/// Element id of the optional JSON configuration block in `index.html`.
const CONFIG_ELEMENT_ID: &str = "agribuild-config";

/// How line breaks between fields are written into the join email body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineBreaks {
    /// The body is built with the literal text `%0A` and then encoded as a
    /// whole, so the link carries `%250A` and mail clients show `%0A`.
    #[default]
    Literal,
    /// The body is built with real newlines, so the link carries `%0A`.
    Encoded,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_contact_email")]
    pub contact_email: String,
    #[serde(default)]
    pub line_breaks: LineBreaks,
}

fn default_contact_email() -> String {
    "info@agribuild.org".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contact_email: default_contact_email(),
            line_breaks: LineBreaks::default(),
        }
    }
}

/// Log a warning message to the browser console.
///
/// Used for non-fatal problems the page recovers from on its own.
pub fn log_warning(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

/// Parse a configuration block. Blank input yields the defaults.
pub fn parse_config(json: &str) -> Result<SiteConfig, serde_json::Error> {
    if json.trim().is_empty() {
        return Ok(SiteConfig::default());
    }
    serde_json::from_str(json)
}

/// Text content of the configuration element, if the host page has one.
fn config_source() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
}

/// Load the site configuration from the host page.
///
/// # Fallback Behavior
///
/// Returns the defaults if the page has no configuration element, or if
/// its JSON is malformed (with a console warning). The site always renders.
pub fn load_config() -> SiteConfig {
    match config_source() {
        Some(json) => parse_config(&json).unwrap_or_else(|e| {
            log_warning(&format!(
                "Agri-Build: Failed to parse site configuration (using defaults): {}",
                e
            ));
            SiteConfig::default()
        }),
        None => SiteConfig::default(),
    }
}
