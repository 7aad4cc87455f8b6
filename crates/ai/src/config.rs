//! Gateway configuration, read from the environment.

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Connection settings for [`crate::GenerativeGateway`].
#[derive(Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Missing keys are reported at call time, not at construction.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl GatewayConfig {
    /// Read `GEMINI_API_KEY` (or `API_KEY`), `STOCKROOM_GEMINI_MODEL` and
    /// `STOCKROOM_GEMINI_BASE_URL`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = non_blank("GEMINI_API_KEY").or_else(|| non_blank("API_KEY"));
        if api_key.is_none() {
            tracing::warn!("GEMINI_API_KEY not set; restock recommendations will fail");
        }

        Self {
            api_key,
            model: non_blank("STOCKROOM_GEMINI_MODEL")
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: non_blank("STOCKROOM_GEMINI_BASE_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    pub fn generate_url(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }
}

impl core::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = GatewayConfig::from_lookup(lookup(&[]));
        assert_eq!(cfg.api_key, None);
        assert_eq!(cfg.model, DEFAULT_MODEL);
        assert_eq!(
            cfg.generate_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn api_key_falls_back_to_generic_name() {
        let cfg = GatewayConfig::from_lookup(lookup(&[("API_KEY", "k2")]));
        assert_eq!(cfg.api_key.as_deref(), Some("k2"));

        let cfg =
            GatewayConfig::from_lookup(lookup(&[("API_KEY", "k2"), ("GEMINI_API_KEY", "k1")]));
        assert_eq!(cfg.api_key.as_deref(), Some("k1"));
    }

    #[test]
    fn overrides_and_trailing_slash() {
        let cfg = GatewayConfig::from_lookup(lookup(&[
            ("STOCKROOM_GEMINI_MODEL", "gemini-pro"),
            ("STOCKROOM_GEMINI_BASE_URL", "http://localhost:9000/"),
        ]));
        assert_eq!(
            cfg.generate_url(),
            "http://localhost:9000/v1beta/models/gemini-pro:generateContent"
        );
    }

    #[test]
    fn debug_output_hides_the_key() {
        let cfg = GatewayConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "secret-123")]));
        assert!(!format!("{cfg:?}").contains("secret-123"));
    }
}
