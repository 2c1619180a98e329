use axum::extract::Query;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use super::{BlogPost, Testimonial, BLOG_POSTS, TESTIMONIALS};
use crate::export;
use crate::widgets::{StatDisplay, StatsBoard};

/// Read-only content endpoints plus the article download.
pub fn content_router() -> Router {
    Router::new()
        .route("/api/v1/content/blog", get(blog_handler))
        .route("/api/v1/content/testimonials", get(testimonials_handler))
        .route("/api/v1/content/stats", get(stats_handler))
        .route("/api/v1/blog/pdf", get(pdf_handler))
}

#[derive(Debug, Deserialize)]
pub(crate) struct PdfQuery {
    title: String,
}

pub(crate) async fn blog_handler() -> Json<&'static [BlogPost]> {
    Json(&BLOG_POSTS)
}

pub(crate) async fn testimonials_handler() -> Json<&'static [Testimonial]> {
    Json(&TESTIMONIALS)
}

/// Counters as they read once the animation has finished.
pub(crate) async fn stats_handler() -> Json<Vec<StatDisplay>> {
    let mut board = StatsBoard::default();
    board.finish();
    Json(board.snapshot())
}

pub(crate) async fn pdf_handler(Query(query): Query<PdfQuery>) -> Response {
    let article = export::download_pdf(&query.title);
    let disposition = format!(
        "attachment; filename=\"{}\"",
        header_safe(&article.file_name)
    );

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, mime::APPLICATION_PDF.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        article.bytes,
    )
        .into_response()
}

fn header_safe(file_name: &str) -> String {
    file_name
        .chars()
        .map(|c| {
            if c.is_ascii_graphic() && c != '"' && c != '\\' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    async fn get(uri: &str) -> Response {
        content_router()
            .oneshot(Request::get(uri).body(Body::empty()).expect("request"))
            .await
            .expect("router dispatch")
    }

    #[tokio::test]
    async fn blog_lists_every_post() {
        let response = get("/api/v1/content/blog").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");
        let posts = payload.as_array().expect("array");
        assert_eq!(posts.len(), BLOG_POSTS.len());
        assert_eq!(
            posts[0].get("subtitle").and_then(Value::as_str),
            Some(BLOG_POSTS[0].subtitle)
        );
    }

    #[tokio::test]
    async fn stats_report_final_values() {
        let response = get("/api/v1/content/stats").await;
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");
        let texts: Vec<&str> = payload
            .as_array()
            .expect("array")
            .iter()
            .filter_map(|stat| stat.get("text").and_then(Value::as_str))
            .collect();
        assert_eq!(texts, vec!["500+", "50K+", "95%"]);
    }

    #[tokio::test]
    async fn pdf_download_sets_headers() {
        let response = get("/api/v1/blog/pdf?title=Why%20Upskilling%20Matters%20in%202025").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()),
            Some("application/pdf")
        );
        assert_eq!(
            response
                .headers()
                .get(header::CONTENT_DISPOSITION)
                .and_then(|v| v.to_str().ok()),
            Some("attachment; filename=\"Why_Upskilling_Matters_in_2025.pdf\"")
        );

        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        assert!(body.starts_with(b"%PDF-1.3"));
    }

    #[tokio::test]
    async fn pdf_download_requires_a_title() {
        let response = get("/api/v1/blog/pdf").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn header_file_names_are_ascii() {
        assert_eq!(header_safe("Caf\u{e9}_\"x\".pdf"), "Caf___x_.pdf");
    }
}
