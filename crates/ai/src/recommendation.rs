use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use thiserror::Error;

/// One restock suggestion for a low-stock SKU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestockRecommendation {
    pub sku: String,
    pub product_name: String,
    pub current_stock: u32,
    /// Short justification for the suggested quantity.
    pub recommendation: String,
    pub suggested_restock_quantity: u32,
}

/// Any failure of a recommendation request.
///
/// Network, auth and parse failures all surface through this one type; none of
/// them is retried automatically.
#[derive(Debug, Error)]
pub enum RecommendationError {
    #[error("no API key configured for the recommendation gateway")]
    MissingApiKey,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("gateway returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("malformed recommendation response: {0}")]
    MalformedResponse(String),

    #[error("a recommendation request is already in flight")]
    Busy,
}

/// Validate untrusted gateway output and convert it into recommendations.
///
/// The payload must be a JSON array of objects carrying every field of
/// [`RestockRecommendation`] with the right type; counts must be non-negative
/// integers and the SKU must not be blank.
pub fn parse_recommendations(
    raw: JsonValue,
) -> Result<Vec<RestockRecommendation>, RecommendationError> {
    if !raw.is_array() {
        return Err(RecommendationError::MalformedResponse(
            "expected a JSON array".to_string(),
        ));
    }

    let recs: Vec<RestockRecommendation> = serde_json::from_value(raw)
        .map_err(|e| RecommendationError::MalformedResponse(e.to_string()))?;

    if let Some(pos) = recs.iter().position(|r| r.sku.trim().is_empty()) {
        return Err(RecommendationError::MalformedResponse(format!(
            "entry {pos} has an empty sku"
        )));
    }

    Ok(recs)
}
