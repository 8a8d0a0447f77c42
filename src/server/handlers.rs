//! Axum request handlers for the feed endpoints.

/// Fixed feed payload: three pipe-delimited counter values.
///
/// The `*` prefix marks the value seven-segment units render; LCD units strip
/// it before splitting on `|`.
pub const FEED_PAYLOAD: &str = "123|*456|789";

/// `GET /api/test` — return the current counter values.
///
/// Responds `200 OK` with the pipe-delimited payload as plain text.
pub async fn counter_values() -> &'static str {
    FEED_PAYLOAD
}
