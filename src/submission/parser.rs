use axum::http::HeaderMap;
use bytes::Bytes;
use serde_json::{Map, Value};

/// Decode a posted form into a JSON value.
///
/// JSON is assumed when Content-Type is missing. An empty body is an empty
/// form, whatever the declared type. Types other than JSON, urlencoded and
/// multipart are rejected.
pub async fn parse_body(headers: &HeaderMap, body: Bytes) -> Result<Value, String> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }

    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/json");

    let media_type = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match media_type.as_str() {
        "application/json" => {
            serde_json::from_slice(&body).map_err(|e| format!("Invalid JSON: {e}"))
        }
        "application/x-www-form-urlencoded" => parse_form_urlencoded(&body),
        "multipart/form-data" => parse_multipart(content_type, body).await,
        other => Err(format!("Unsupported content type: {other}")),
    }
}

/// Repeated keys keep the last value, matching a browser posting a plain
/// HTML form.
fn parse_form_urlencoded(body: &[u8]) -> Result<Value, String> {
    std::str::from_utf8(body).map_err(|e| format!("Invalid UTF-8: {e}"))?;

    let map: Map<String, Value> = form_urlencoded::parse(body)
        .map(|(k, v)| (k.into_owned(), Value::String(v.into_owned())))
        .collect();
    Ok(Value::Object(map))
}

/// Text fields only; unnamed parts are skipped.
async fn parse_multipart(content_type: &str, body: Bytes) -> Result<Value, String> {
    let boundary = multer::parse_boundary(content_type)
        .map_err(|_| "Missing multipart boundary".to_string())?;

    let stream = futures_util::stream::once(async { Ok::<_, std::io::Error>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    let mut map = Map::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Multipart error: {e}"))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        let value = field
            .text()
            .await
            .map_err(|e| format!("Field read error: {e}"))?;
        map.insert(name, Value::String(value));
    }

    Ok(Value::Object(map))
}
