//! Site Configuration
//!
//! Thresholds, timings and user-facing texts. Every field has a default;
//! a page may override any subset through an inline JSON script:
//!
//! ```html
//! <script type="application/json" id="site-config">{"scroll_top": {"show_threshold": 600}}</script>
//! ```

use serde::Deserialize;

/// Id of the optional inline JSON config element
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid site config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub header: HeaderConfig,
    pub scroll_top: ScrollTopConfig,
    pub smooth_scroll: SmoothScrollConfig,
    pub reveal: RevealConfig,
    pub forms: FormConfig,
    pub logging: LoggingConfig,
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read the inline config element, falling back to defaults.
    ///
    /// Runs before logging is installed, so a parse failure is handed back
    /// for the caller to report.
    pub fn load() -> (Self, Option<ConfigError>) {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match text {
            Some(json) if !json.trim().is_empty() => match Self::from_json(&json) {
                Ok(config) => (config, None),
                Err(e) => (Self::default(), Some(e)),
            },
            _ => (Self::default(), None),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Scroll offset (px) past which the header counts as scrolled
    pub scrolled_threshold: f64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self { scrolled_threshold: 50.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollTopConfig {
    pub show_threshold: f64,
}

impl Default for ScrollTopConfig {
    fn default() -> Self {
        Self { show_threshold: 400.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SmoothScrollConfig {
    /// Extra space (px) left between the sticky header and the target
    pub gap: f64,
}

impl Default for SmoothScrollConfig {
    fn default() -> Self {
        Self { gap: 20.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub root_margin: String,
    pub threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            root_margin: "0px 0px -50px 0px".to_string(),
            threshold: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Delay of the simulated submission call
    pub simulated_latency_ms: u32,
    pub messages: FormMessages,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: 1500,
            messages: FormMessages::default(),
        }
    }
}

/// User-facing form texts (Norwegian by default)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FormMessages {
    pub required: String,
    pub invalid_email: String,
    pub invalid_phone: String,
    pub sending: String,
    pub success: String,
    pub failure: String,
}

impl Default for FormMessages {
    fn default() -> Self {
        Self {
            required: "Dette feltet er obligatorisk".to_string(),
            invalid_email: "Vennligst oppgi en gyldig e-postadresse".to_string(),
            invalid_phone: "Vennligst oppgi et gyldig telefonnummer".to_string(),
            sending: "Sender...".to_string(),
            success: "Takk for din henvendelse! Vi kontakter deg snart.".to_string(),
            failure: "Noe gikk galt. Vennligst prøv igjen eller ring oss direkte.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of `error`, `warn`, `info`, `debug`, `trace`
    pub level: String,
    /// Lines kept for `window.siteLogs()`
    pub capacity: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            capacity: console_logger::DEFAULT_CAPACITY,
        }
    }
}

impl LoggingConfig {
    /// Unknown names fall back to `info`
    pub fn max_level(&self) -> tracing::Level {
        self.level.parse().unwrap_or(tracing::Level::INFO)
    }
}
