//! Gather the accepted Thing fields from the query string and request body.

use crate::error::AppError;
use crate::model::ThingParams;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, StatusCode},
};

/// Decode `a=1&b=2` keeping only the accepted fields. A repeated key keeps its last value.
fn from_urlencoded(input: &[u8]) -> Result<ThingParams, serde_urlencoded::de::Error> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(input)?;
    let mut params = ThingParams::default();
    for (key, value) in pairs {
        match key.as_str() {
            "name" => params.name = Some(value),
            "status" => params.status = Some(value),
            _ => {}
        }
    }
    Ok(params)
}

/// `name` and `status` from the query string, overlaid by the body.
/// JSON bodies are read when the content-type says so; anything else is treated as a form.
#[derive(Clone, Debug, Default)]
pub struct AcceptedParams(pub ThingParams);

#[async_trait]
impl<S> FromRequest<S> for AcceptedParams
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let query = match req.uri().query() {
            Some(q) => from_urlencoded(q.as_bytes())
                .map_err(|e| AppError::BadRequest(format!("invalid query string: {}", e)))?,
            None => ThingParams::default(),
        };
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|ct| ct.trim_start().to_ascii_lowercase().starts_with("application/json"))
            .unwrap_or(false);
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| {
                if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    AppError::PayloadTooLarge
                } else {
                    AppError::BadRequest(e.body_text())
                }
            })?;

        let body = if bytes.iter().all(u8::is_ascii_whitespace) {
            ThingParams::default()
        } else if is_json {
            serde_json::from_slice::<ThingParams>(&bytes)
                .map_err(|e| AppError::BadRequest(format!("invalid JSON body: {}", e)))?
        } else {
            from_urlencoded(&bytes)
                .map_err(|e| AppError::BadRequest(format!("invalid form body: {}", e)))?
        };
        Ok(AcceptedParams(query.merge(body)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_keys_keep_the_last_value() {
        let params = from_urlencoded(b"name=a&status=x&name=b&id=4").unwrap();
        assert_eq!(params, ThingParams { name: Some("b".into()), status: Some("x".into()) });
    }

    #[test]
    fn percent_encoding_is_decoded() {
        let params = from_urlencoded(b"name=big+red%20widget").unwrap();
        assert_eq!(params.name.as_deref(), Some("big red widget"));
    }
}
