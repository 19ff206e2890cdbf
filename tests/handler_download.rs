mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use common::StubFetcher;

const COUNTDOWN_PAGE: &str = r##"
<html><body>
  <a href="#">Wait...</a>
  <a href="https://google.com/server11/1:/Movies/Dune.2021.1080p.mp4">Sonic</a>
  <a href="https://mega.nz/file/XYZ">Mega</a>
  <a href="https://drive.google.com/file/d/abc/view">Drive</a>
  <a href="https://t.me/cinesubz_bot?start=42">Telegram</a>
  <a href="https://mega.nz/file/XYZ">Mega again</a>
  <script>
    var direct = "https://cloud.sonic-cloud.online/server2/Dune?ext=mkv";
  </script>
</body></html>
"##;

#[tokio::test]
async fn test_download_resolves_all_kinds() {
    let fetcher = StubFetcher::html(COUNTDOWN_PAGE);
    let server = TestServer::new(common::create_test_app(fetcher)).unwrap();

    let response = server
        .get("/download")
        .add_query_param("url", "https://cinesubz.co/api-1080p/9")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], true);
    assert_eq!(json["count"], 5);

    let options = json["download_options"].as_array().unwrap();
    assert_eq!(options[0]["type"], "direct");
    assert_eq!(options[0]["label"], "Sonic Cloud");
    assert_eq!(
        options[0]["download_url"],
        "https://cloud.sonic-cloud.online/server1/Movies/Dune.2021.1080p?ext=mp4"
    );
    assert_eq!(options[1]["type"], "mega");
    assert_eq!(options[1]["label"], "Mega.nz");
    assert_eq!(options[2]["type"], "google");
    assert_eq!(options[3]["type"], "telegram");
    assert_eq!(options[3]["label"], "Telegram Fast");
    assert_eq!(options[4]["label"], "Extracted Direct");
    assert_eq!(
        options[4]["download_url"],
        "https://cloud.sonic-cloud.online/server2/Dune?ext=mkv"
    );
}

#[tokio::test]
async fn test_download_without_links_is_unsuccessful_200() {
    let fetcher = StubFetcher::html("<html><body><a href='#'>Please wait</a></body></html>");
    let server = TestServer::new(common::create_test_app(fetcher)).unwrap();

    let response = server
        .get("/download")
        .add_query_param("url", "https://cinesubz.co/api-720p/1")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], false);
    assert_eq!(json["count"], 0);
    assert_eq!(json["download_options"], serde_json::json!([]));
}

#[tokio::test]
async fn test_download_missing_url_makes_no_fetch() {
    let fetcher = StubFetcher::html(COUNTDOWN_PAGE);
    let server = TestServer::new(common::create_test_app(fetcher.clone())).unwrap();

    let response = server.get("/download").add_query_param("url", "").await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "Missing 'url' parameter");
    assert_eq!(fetcher.calls(), 0);
}
