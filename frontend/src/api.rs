use captions::{ContentKind, GenerateError, RequestPayload};

/// Asks the caption webhook for captions and splits its answer into cards.
pub async fn generate_captions(
    endpoint: &str,
    payload: &RequestPayload,
) -> Result<Vec<String>, GenerateError> {
    let resp = gloo_net::http::Request::post(endpoint)
        .json(payload)
        .map_err(|e| GenerateError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| GenerateError::Network(e.to_string()))?;

    if !resp.ok() {
        return Err(GenerateError::Status {
            status: resp.status(),
        });
    }

    let kind = ContentKind::from_header(resp.headers().get("content-type").as_deref());
    let body = resp
        .text()
        .await
        .map_err(|e| GenerateError::Decode(e.to_string()))?;

    captions::extract_captions(kind, &body)
}
