use crate::fetcher::FetchError;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

// {
//   "listings": [
//     {
//       "address":       "123 Main St, Springfield",
//       "price":         "$450,000+",
//       "bedrooms":      "3",
//       "bathrooms":     "2",
//       "sqft":          "1,850",
//       "property_type": "Single Family"
//     }
//   ],
//   "analysis": "free-form market commentary"
// }

/// The document returned by the market webhook.
#[derive(Debug, Default, Deserialize)]
pub struct MarketData {
    #[serde(default, deserialize_with = "lenient_listings")]
    pub listings: Vec<RawListing>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub analysis: Option<String>,
}

/// One listing exactly as received. Every field may be absent, `null`,
/// a string or a number.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct RawListing {
    pub address: Option<Value>,
    pub price: Option<Value>,
    pub bedrooms: Option<Value>,
    pub bathrooms: Option<Value>,
    pub sqft: Option<Value>,
    pub property_type: Option<Value>,
}

impl MarketData {
    pub fn from_json(text: &str) -> Result<Self, FetchError> {
        serde_json::from_str(text).map_err(|e| FetchError::JsonParse(e.to_string()))
    }
}

impl RawListing {
    /// Entries that aren't JSON objects degrade to a listing with no fields.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}

fn lenient_listings<'de, D>(deserializer: D) -> Result<Vec<RawListing>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items.into_iter().map(RawListing::from_value).collect(),
        _ => Vec::new(),
    })
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}
