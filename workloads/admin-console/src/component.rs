//! Spin HTTP component glue.

use std::sync::Arc;

use spin_sdk::http::{IntoResponse, Method as HttpMethod, Request, Response};
use spin_sdk::http_component;

use nrnhub_console::ConsoleState;
use nrnhub_core::{RequestId, SiteConfig, StructuredLogger};
use nrnhub_store::{KvStore, PlacementsStore};

use crate::page::render_console;

#[http_component]
async fn handle_admin_console(req: Request) -> anyhow::Result<impl IntoResponse> {
    if *req.method() != HttpMethod::Get {
        return Ok(Response::builder().status(405).body(Vec::new()).build());
    }

    let request_id = RequestId::generate();
    let logger = StructuredLogger::new(request_id.clone())
        .with_component("admin-console")
        .with_route(req.path().to_string());

    let config = SiteConfig::load();

    // Seed the console mirror from the stored document; edits and
    // submission happen in the browser against the API.
    let mut state = ConsoleState::new();
    state.begin_fetch();
    let kv = Arc::new(KvStore::open_default()?);
    match PlacementsStore::new(kv).load() {
        Ok(stored) => state.fetch_succeeded(&stored),
        Err(e) => {
            logger.error_with("failed to load placements", &[("detail", &e.to_string())]);
            state.fetch_failed(e.to_string());
        }
    }

    let html = render_console(&state, &config.base_url);
    logger.info("rendered");

    Ok(Response::builder()
        .status(200)
        .header("content-type", "text/html; charset=utf-8")
        .header("x-request-id", request_id.to_string().as_str())
        .header("cache-control", "no-store")
        .body(html)
        .build())
}
