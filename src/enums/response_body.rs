use serde_json::Value;
use crate::config::constants::RESPONSE_PREVIEW_CHARS;

#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    /// First [`RESPONSE_PREVIEW_CHARS`] characters of the body.
    Text {
        preview: String,
        /// Set when the response claimed JSON but did not parse.
        declared_json: bool,
    },
}

impl ResponseBody {
    pub fn decode(content_type: Option<&str>, bytes: &[u8]) -> Self {
        let declared_json = content_type.is_some_and(|ct| ct.starts_with("application/json"));

        if declared_json {
            match serde_json::from_slice::<Value>(bytes) {
                Ok(value) => return Self::Json(value),
                Err(e) => log::debug!("Response declared JSON but failed to parse: {}", e),
            }
        }

        Self::Text {
            preview: String::from_utf8_lossy(bytes).chars().take(RESPONSE_PREVIEW_CHARS).collect(),
            declared_json,
        }
    }

    pub fn render(&self) -> String {
        match self {
            Self::Json(value) => serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()),
            Self::Text { preview, .. } => preview.clone(),
        }
    }
}
