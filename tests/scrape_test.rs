//! Reader-proxy scraping against a mock server

use std::time::Duration;

use docs_search::{ScrapeError, WebScraper, count_word_occurrences};

fn scraper_for(server: &mockito::ServerGuard) -> WebScraper {
    WebScraper::new(
        reqwest::Client::new(),
        format!("{}/", server.url()),
        Duration::from_secs(5),
    )
}

#[tokio::test]
async fn returns_proxy_body_for_page() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/https://example.com/page")
        .with_status(200)
        .with_body("# Example\nRust is fast. rust is safe.")
        .expect(1)
        .create_async()
        .await;

    let body = scraper_for(&server)
        .scrape("https://example.com/page")
        .await
        .unwrap();

    assert!(body.starts_with("# Example"));
    assert_eq!(count_word_occurrences(&body, "rust", true).count, 2);
    mock.assert_async().await;
}

#[tokio::test]
async fn http_error_status_is_a_content_fetch_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/https://example.com/missing")
        .with_status(404)
        .create_async()
        .await;

    let err = scraper_for(&server)
        .scrape("https://example.com/missing")
        .await
        .unwrap_err();

    assert!(matches!(err, ScrapeError::ContentFetch { status: 404, .. }), "{err:?}");
    assert!(!err.is_network());
}

#[tokio::test]
async fn rejects_invalid_urls_without_a_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server.mock("GET", mockito::Matcher::Any).expect(0).create_async().await;
    let scraper = scraper_for(&server);

    for url in ["", "example.com", "ftp://example.com"] {
        let err = scraper.scrape(url).await.unwrap_err();
        assert!(matches!(err, ScrapeError::InvalidUrl(_)), "{url:?} gave {err:?}");
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn zero_timeout_is_rejected() {
    let scraper = WebScraper::new(reqwest::Client::new(), "https://r.jina.ai/", Duration::ZERO);
    let err = scraper.scrape("https://example.com").await.unwrap_err();
    assert!(matches!(err, ScrapeError::InvalidTimeout));
}
