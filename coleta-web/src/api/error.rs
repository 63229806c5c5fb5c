use wasm_bindgen::JsValue;

#[derive(Debug, Clone)]
pub enum ApiError {
    Fetch(String),
    Decode(String),
    Server { status: u16, message: String },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Fetch(msg) => write!(f, "Request error: {}", msg),
            ApiError::Decode(msg) => write!(f, "Decode error: {}", msg),
            ApiError::Server { status, message } => {
                write!(f, "Server error {}: {}", status, message)
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<JsValue> for ApiError {
    fn from(value: JsValue) -> Self {
        ApiError::Fetch(
            value.as_string().unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ApiError::Server {
            status: 400,
            message: "invalid point".to_string(),
        };
        assert_eq!(err.to_string(), "Server error 400: invalid point");

        let err = ApiError::Fetch("network down".to_string());
        assert_eq!(err.to_string(), "Request error: network down");
    }

    #[test]
    fn test_from_serde_error() {
        let serde_err =
            serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        match ApiError::from(serde_err) {
            ApiError::Decode(_) => {}
            other => panic!("expected Decode, got {:?}", other),
        }
    }
}
