//! Request metadata extraction
//!
//! Normalizes a request-like JSON object (as produced by HTTP frameworks or
//! assembled by the caller) into the flat [`RequestInfo`] shape that is
//! attached to a log record.

use super::error::{LoggerError, Result};
use super::log_record::is_truthy;
use serde::Serialize;
use serde_json::Value;

/// Flat request metadata attached to a record
///
/// Fields that cannot be derived from the request are `None`, never defaulted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_address: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
}

impl RequestInfo {
    pub fn is_empty(&self) -> bool {
        self.method.is_none()
            && self.endpoint.is_none()
            && self.remote_address.is_none()
            && self.id.is_none()
    }

    /// Present fields as `(name, value)` pairs in display order
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        [
            ("method", self.method.as_ref()),
            ("endpoint", self.endpoint.as_ref()),
            ("remoteAddress", self.remote_address.as_ref()),
            ("id", self.id.as_ref()),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
    }
}

/// Extract request metadata from the `req` key of an extra-info container
///
/// A missing container, a missing `req` key and a falsy request (`null`,
/// `false`, `0`, `""`) all yield an empty [`RequestInfo`].
///
/// # Errors
///
/// Returns [`LoggerError::Validation`] when `req` is present but not an object.
///
/// # Examples
///
/// ```
/// use bitnacle::core::request::extract;
/// use serde_json::json;
///
/// let info = extract(Some(&json!({"req": {"method": "GET"}}))).unwrap();
/// assert_eq!(info.method, Some(json!("GET")));
/// assert!(info.endpoint.is_none());
/// ```
pub fn extract(container: Option<&Value>) -> Result<RequestInfo> {
    match container.and_then(|c| c.get("req")).filter(|req| is_truthy(req)) {
        None => Ok(RequestInfo::default()),
        Some(req) => extract_request(req),
    }
}

/// Normalize a request-like object directly
///
/// # Errors
///
/// Returns [`LoggerError::Validation`] when `req` is not an object.
pub fn extract_request(req: &Value) -> Result<RequestInfo> {
    let req = req
        .as_object()
        .ok_or_else(|| LoggerError::validation("extraInfo.req must be an object"))?;

    let field = |name: &str| req.get(name).filter(|v| !v.is_null()).cloned();

    Ok(RequestInfo {
        method: field("method"),
        endpoint: field("originalUrl").or_else(|| field("url")),
        remote_address: field("clientIp").or_else(|| field("ip")),
        id: field("id"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_container_is_empty() {
        assert!(extract(None).unwrap().is_empty());
        assert!(extract(Some(&json!({}))).unwrap().is_empty());
        assert!(extract(Some(&json!({"req": null}))).unwrap().is_empty());
    }

    #[test]
    fn test_falsy_request_is_empty() {
        for req in [json!(""), json!(false), json!(0)] {
            let info = extract(Some(&json!({ "req": req }))).unwrap();
            assert!(info.is_empty());
        }
    }

    #[test]
    fn test_non_object_request_fails() {
        let err = extract(Some(&json!({"req": "req"}))).unwrap_err();
        assert!(err.is_validation());

        let err = extract(Some(&json!({"req": 42}))).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_method_only() {
        let info = extract(Some(&json!({"req": {"method": "GET"}}))).unwrap();
        assert_eq!(
            info,
            RequestInfo {
                method: Some(json!("GET")),
                ..RequestInfo::default()
            }
        );
    }

    #[test]
    fn test_original_url_preferred_over_url() {
        let info = extract_request(&json!({
            "originalUrl": "/api/users?page=2",
            "url": "/users?page=2",
        }))
        .unwrap();
        assert_eq!(info.endpoint, Some(json!("/api/users?page=2")));

        let info = extract_request(&json!({"url": "/users"})).unwrap();
        assert_eq!(info.endpoint, Some(json!("/users")));
    }

    #[test]
    fn test_client_ip_preferred_over_ip() {
        let info = extract_request(&json!({"clientIp": "10.0.0.1", "ip": "127.0.0.1"})).unwrap();
        assert_eq!(info.remote_address, Some(json!("10.0.0.1")));

        let info = extract_request(&json!({"clientIp": null, "ip": "127.0.0.1"})).unwrap();
        assert_eq!(info.remote_address, Some(json!("127.0.0.1")));
    }

    #[test]
    fn test_full_request() {
        let info = extract_request(&json!({
            "method": "POST",
            "url": "/login",
            "ip": "::1",
            "id": 7,
            "headers": {"host": "localhost"},
        }))
        .unwrap();

        let fields: Vec<_> = info.fields().map(|(k, _)| k).collect();
        assert_eq!(fields, vec!["method", "endpoint", "remoteAddress", "id"]);
        assert_eq!(info.id, Some(json!(7)));
    }

    #[test]
    fn test_serializes_camel_case_without_absent_fields() {
        let info = extract_request(&json!({"ip": "127.0.0.1"})).unwrap();
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value, json!({"remoteAddress": "127.0.0.1"}));
    }
}
