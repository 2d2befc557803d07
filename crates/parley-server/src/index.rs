use axum::response::Html;

/// Recorder/chat front end, embedded at build time
const INDEX_HTML: &str = include_str!("../assets/index.html");

/// Serve the static front end
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}
