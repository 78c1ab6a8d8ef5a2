//! Data-URI helpers shared by the dispatcher and the client invoker.

/// Strip a `data:<mime>;base64,` prefix, returning the raw base64 payload.
///
/// Strings without a comma are returned unchanged.
pub fn strip_prefix(data_uri: &str) -> &str {
    match data_uri.split_once(',') {
        Some((_, payload)) => payload,
        None => data_uri,
    }
}

/// Build a browser-renderable data-URI from a mime type and base64 payload.
pub fn from_base64(mime_type: &str, data: &str) -> String {
    format!("data:{};base64,{}", mime_type, data)
}

/// Encode raw photo bytes as a JPEG data-URI, the way the studio UI encodes
/// file uploads before submitting them.
pub fn from_jpeg_bytes(bytes: &[u8]) -> String {
    use base64::Engine as _;
    from_base64(
        "image/jpeg",
        &base64::engine::general_purpose::STANDARD.encode(bytes),
    )
}
