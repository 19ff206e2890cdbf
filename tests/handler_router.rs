mod common;

use axum::ServiceExt;
use axum::extract::Request;
use axum::http::{HeaderValue, header};
use axum_test::TestServer;
use cinesubz_scraper::routes::app_router;
use common::StubFetcher;

fn server(fetcher: std::sync::Arc<StubFetcher>) -> TestServer {
    let app = app_router(common::create_test_state(fetcher));
    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}

#[tokio::test]
async fn test_trailing_slash_is_normalized() {
    let fetcher = StubFetcher::html("<html></html>");
    let server = server(fetcher.clone());

    let response = server.get("/search/").add_query_param("q", "x").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], true);
    assert_eq!(fetcher.calls(), 1);
}

#[tokio::test]
async fn test_any_origin_is_allowed() {
    let fetcher = StubFetcher::html("<html></html>");
    let server = server(fetcher);

    let response = server
        .get("/search")
        .add_query_param("q", "x")
        .add_header(
            header::ORIGIN,
            HeaderValue::from_static("https://dashboard.example"),
        )
        .await;

    response.assert_status_ok();
    assert_eq!(
        response
            .header(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .to_str()
            .unwrap(),
        "*"
    );
}
