use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use include_dir::{Dir, include_dir};

static FRONTEND_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/frontend");

fn serve_page(name: &str) -> axum::response::Response {
    match FRONTEND_DIR.get_file(name) {
        Some(file) => Html(file.contents()).into_response(),
        None => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
    }
}

pub async fn landing() -> axum::response::Response {
    serve_page("index.html")
}

pub async fn summarizer() -> axum::response::Response {
    serve_page("summarizer.html")
}
