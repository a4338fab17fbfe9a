//! Classification of the final response of an exchange.
//!
//! Once the connector stops following redirects, the last response is
//! classified here:
//!
//! - 400..=599: converted into [`ConnectorError::Api`]
//! - 200: the body must be a JSON object and is handed to
//!   [`Resource::parse`]
//! - anything else: returned untouched

use serde_json::{Map, Value};

use crate::clients::errors::{ConnectorError, ErrorResponse};
use crate::clients::http_response::HttpResponse;
use crate::rest::Resource;

/// Classifies `response`, updating `resource` on 200 OK.
pub(crate) fn handle(
    response: HttpResponse,
    resource: &mut dyn Resource,
) -> Result<HttpResponse, ConnectorError> {
    if response.is_error() {
        return Err(error_response(&response).into());
    }

    if response.code == 200 {
        let data = parse_object(&response.body)?;
        resource.parse(data);
    }

    Ok(response)
}

fn error_response(response: &HttpResponse) -> ErrorResponse {
    let json = if response.body.trim().is_empty() {
        tracing::warn!("Empty error body in {} response", response.code);
        None
    } else {
        match serde_json::from_str::<Value>(&response.body) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Unparseable error body in {} response: {e}", response.code);
                None
            }
        }
    };

    ErrorResponse {
        code: response.code,
        reason: response.reason.clone(),
        json,
    }
}

fn parse_object(body: &str) -> Result<Map<String, Value>, ConnectorError> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => {
            tracing::error!("Expected a JSON object in 200 response, got: {other}");
            Err(ConnectorError::MalformedResponse {
                reason: "body is not a JSON object".to_string(),
            })
        }
        Err(e) => {
            tracing::error!("Invalid JSON in 200 response: {e}");
            Err(ConnectorError::MalformedResponse {
                reason: e.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::CheckoutResource;
    use serde_json::json;

    #[test]
    fn test_ok_response_is_parsed_into_resource() {
        let mut resource = CheckoutResource::new("application/json");
        let response =
            HttpResponse::new(200, "OK").with_body(r#"{"flobadob":["bobcat","wookie"]}"#);

        let result = handle(response, &mut resource).unwrap();

        assert_eq!(result.code, 200);
        assert_eq!(resource.get("flobadob"), Some(&json!(["bobcat", "wookie"])));
    }

    #[test]
    fn test_error_response_carries_json_body() {
        let mut resource = CheckoutResource::new("application/json");
        let response = HttpResponse::new(404, "Not Found").with_body(r#"{"reason":"not_found"}"#);

        let error = handle(response, &mut resource).unwrap_err();
        let api = error.as_api_error().unwrap();
        assert_eq!(api.code, 404);
        assert_eq!(api.reason, "Not Found");
        assert_eq!(api.field("reason"), Some("not_found"));
    }

    #[test]
    fn test_error_response_with_unparseable_body() {
        for body in ["", "   ", "<html>oops</html>"] {
            let mut resource = CheckoutResource::new("application/json");
            let response = HttpResponse::new(500, "Internal Server Error").with_body(body);

            let error = handle(response, &mut resource).unwrap_err();
            let api = error.as_api_error().unwrap();
            assert_eq!(api.code, 500);
            assert!(api.json.is_none());
        }
    }

    #[test]
    fn test_error_range_boundaries() {
        let mut resource = CheckoutResource::new("application/json");
        assert!(handle(HttpResponse::new(400, ""), &mut resource).is_err());
        assert!(handle(HttpResponse::new(599, ""), &mut resource).is_err());
        assert!(handle(HttpResponse::new(399, ""), &mut resource).is_ok());
        assert!(handle(HttpResponse::new(600, ""), &mut resource).is_ok());
    }

    #[test]
    fn test_malformed_ok_body_is_rejected() {
        for body in ["", "not json", "[1,2,3]", "\"text\""] {
            let mut resource = CheckoutResource::new("application/json");
            resource.set("kept", json!(true));
            let response = HttpResponse::new(200, "OK").with_body(body);

            let result = handle(response, &mut resource);
            assert!(matches!(result, Err(ConnectorError::MalformedResponse { .. })));
            assert_eq!(resource.get("kept"), Some(&json!(true)));
        }
    }

    #[test]
    fn test_other_statuses_pass_through_without_parsing() {
        for code in [201, 204, 302, 303] {
            let mut resource = CheckoutResource::new("application/json");
            resource.set("kept", json!(true));
            let response = HttpResponse::new(code, "").with_body("not json");

            let result = handle(response, &mut resource).unwrap();
            assert_eq!(result.code, code);
            assert_eq!(resource.get("kept"), Some(&json!(true)));
        }
    }
}
