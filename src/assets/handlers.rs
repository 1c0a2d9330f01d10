use axum::http::header;
use axum::response::{Html, IntoResponse};

pub async fn handle_home() -> Html<&'static str> {
    Html(include_str!("index.html"))
}

pub async fn handle_script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        include_str!("script.js"),
    )
}
