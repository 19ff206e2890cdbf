#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use cinesubz_scraper::api::routes::public_routes;
use cinesubz_scraper::application::services::CatalogService;
use cinesubz_scraper::domain::fetcher::{FetchError, FetchedPage, PageFetcher};
use cinesubz_scraper::state::AppState;

pub const TARGET: &str = "https://cinesubz.co";

/// Fetcher returning one canned response and counting calls.
pub struct StubFetcher {
    response: Result<FetchedPage, String>,
    calls: AtomicUsize,
    urls: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn page(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            response: Ok(FetchedPage {
                status,
                body: body.to_string(),
            }),
            calls: AtomicUsize::new(0),
            urls: Mutex::new(Vec::new()),
        })
    }

    pub fn html(body: &str) -> Arc<Self> {
        Self::page(200, body)
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            response: Err(message.to_string()),
            calls: AtomicUsize::new(0),
            urls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for StubFetcher {
    async fn fetch(&self, url: &str, _timeout: Duration) -> Result<FetchedPage, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().unwrap().push(url.to_string());

        match &self.response {
            Ok(page) => Ok(page.clone()),
            Err(message) => Err(FetchError::Transport(message.clone())),
        }
    }
}

pub fn create_test_state(fetcher: Arc<StubFetcher>) -> AppState {
    let catalog = CatalogService::new(fetcher, TARGET, Duration::from_secs(30)).unwrap();
    AppState::new(Arc::new(catalog))
}

pub fn create_test_app(fetcher: Arc<StubFetcher>) -> Router {
    public_routes().with_state(create_test_state(fetcher))
}
