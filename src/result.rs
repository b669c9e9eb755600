use serde::{Deserialize, Serialize};

/// Generic API response envelope
///
/// Every operation exposed by the identity service returns its outcome in
/// this shape: a status code, a human-readable message and an optional typed
/// body. The envelope is an opaque carrier. It never interprets the status
/// code or inspects the body; deciding which codes mean success or failure
/// belongs to the producer and the consumer.
///
/// This type is WASM-compatible and can be used in both backend and frontend.
/// The backend wraps it in a type that speaks the web framework's response
/// trait.
///
/// Instances are immutable once built: fields are private and only `&self`
/// accessors are exposed, so a finished envelope can be read concurrently
/// (logging, serialization) without synchronization.
///
/// # Examples
///
/// ```rust
/// use identity_service_api::ApiResponse;
///
/// // Direct construction
/// let response = ApiResponse::new(200, "login successful", Some("token"));
///
/// // Staged construction, fields in any order
/// let response = ApiResponse::builder()
///     .message("success")
///     .status_code(200)
///     .body("token")
///     .build();
///
/// // No payload (e.g. logout)
/// let response = ApiResponse::<()>::success_empty();
/// assert!(response.body().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    status_code: u16,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    body: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Creates an envelope from all three fields at once
    pub fn new(status_code: u16, message: impl Into<String>, body: Option<T>) -> Self {
        Self {
            status_code,
            message: message.into(),
            body,
        }
    }

    /// Starts staged construction; nothing is observable until `build`
    pub fn builder() -> ApiResponseBuilder<T> {
        ApiResponseBuilder::default()
    }

    // === Common outcome constructors ===

    /// 200 "success" with a body
    pub fn success(body: T) -> Self {
        Self::new(200, "success", Some(body))
    }

    // === Read accessors (no mutators exist) ===

    /// The status code as supplied by the producer, uninterpreted
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// The human-readable outcome description
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The payload, absent for void operations
    pub fn body(&self) -> Option<&T> {
        self.body.as_ref()
    }

    /// Consumes the envelope, yielding the payload
    pub fn into_body(self) -> Option<T> {
        self.body
    }
}

impl ApiResponse<()> {
    /// 200 "success" with no payload (logout, revoke, reset-password)
    pub fn success_empty() -> Self {
        Self::new(200, "success", None)
    }
}

/// Fields start at their empty values: code 0, empty message, absent body.
/// A default-constructed envelope is a construction aid for callers that
/// populate fields afterwards through [`ApiResponseBuilder`]; it should not
/// be surfaced to consumers as-is.
impl<T> Default for ApiResponse<T> {
    fn default() -> Self {
        Self {
            status_code: 0,
            message: String::new(),
            body: None,
        }
    }
}

/// Staged builder for [`ApiResponse`]
///
/// Accepts the three fields in any order and yields a finished, immutable
/// envelope only on [`build`](ApiResponseBuilder::build). Unset fields keep
/// their empty values (0 / "" / absent); the builder validates nothing,
/// by the same contract as direct construction.
#[derive(Debug, Clone)]
pub struct ApiResponseBuilder<T> {
    status_code: u16,
    message: String,
    body: Option<T>,
}

impl<T> Default for ApiResponseBuilder<T> {
    fn default() -> Self {
        Self {
            status_code: 0,
            message: String::new(),
            body: None,
        }
    }
}

impl<T> ApiResponseBuilder<T> {
    /// Sets the status code
    pub fn status_code(mut self, status_code: u16) -> Self {
        self.status_code = status_code;
        self
    }

    /// Sets the outcome message
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Sets the payload
    pub fn body(mut self, body: T) -> Self {
        self.body = Some(body);
        self
    }

    /// Finishes construction, freezing the fields
    pub fn build(self) -> ApiResponse<T> {
        ApiResponse {
            status_code: self.status_code,
            message: self.message,
            body: self.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
    struct TestToken {
        token: String,
    }

    #[test]
    fn new_reads_back_all_fields() {
        let token = TestToken {
            token: "abc123".to_string(),
        };
        let response = ApiResponse::new(200, "login successful", Some(token.clone()));
        assert_eq!(response.status_code(), 200);
        assert_eq!(response.message(), "login successful");
        assert_eq!(response.body(), Some(&token));
    }

    #[test]
    fn builder_accepts_fields_in_any_order() {
        let token = TestToken {
            token: "abc123".to_string(),
        };
        let response = ApiResponse::builder()
            .body(token.clone())
            .message("login successful")
            .status_code(200)
            .build();
        assert_eq!(response.status_code(), 200);
        assert_eq!(response.message(), "login successful");
        assert_eq!(response.body(), Some(&token));
    }

    #[test]
    fn builder_and_direct_construction_are_equivalent() {
        let token = TestToken {
            token: "abc123".to_string(),
        };
        let direct = ApiResponse::new(201, "created", Some(token.clone()));
        let built = ApiResponse::builder()
            .status_code(201)
            .message("created")
            .body(token)
            .build();
        assert_eq!(direct, built);
    }

    #[test]
    fn default_fields_start_empty() {
        let response = ApiResponse::<TestToken>::default();
        assert_eq!(response.status_code(), 0);
        assert_eq!(response.message(), "");
        assert!(response.body().is_none());
    }

    #[test]
    fn success_empty_has_no_body() {
        let response = ApiResponse::success_empty();
        assert_eq!(response.status_code(), 200);
        assert_eq!(response.message(), "success");
        assert!(response.body().is_none());
    }

    #[test]
    fn absent_body_construction_reads_back_none() {
        let response: ApiResponse<TestToken> = ApiResponse::new(401, "invalid credentials", None);
        assert_eq!(response.status_code(), 401);
        assert_eq!(response.message(), "invalid credentials");
        assert!(response.body().is_none());
    }

    #[test]
    fn into_body_yields_the_payload() {
        let token = TestToken {
            token: "abc123".to_string(),
        };
        let response = ApiResponse::success(token.clone());
        assert_eq!(response.into_body(), Some(token));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let token = TestToken {
            token: "abc123".to_string(),
        };
        let response = ApiResponse::new(200, "login successful", Some(token));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["statusCode"], 200);
        assert_eq!(json["message"], "login successful");
        assert_eq!(json["body"]["token"], "abc123");
    }

    #[test]
    fn serialization_omits_absent_body() {
        let response: ApiResponse<TestToken> = ApiResponse::new(401, "invalid credentials", None);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["statusCode"], 401);
        assert_eq!(json["message"], "invalid credentials");
        assert!(json.get("body").is_none());
    }

    #[test]
    fn deserializes_without_body_key() {
        let json = r#"{"statusCode":401,"message":"invalid credentials"}"#;
        let response: ApiResponse<TestToken> = serde_json::from_str(json).unwrap();
        assert_eq!(response.status_code(), 401);
        assert_eq!(response.message(), "invalid credentials");
        assert!(response.body().is_none());
    }

    #[test]
    fn round_trips_through_json() {
        let token = TestToken {
            token: "abc123".to_string(),
        };
        let response = ApiResponse::success(token);
        let json = serde_json::to_string(&response).unwrap();
        let back: ApiResponse<TestToken> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, response);
    }
}
