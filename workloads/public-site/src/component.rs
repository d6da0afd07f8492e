//! Spin HTTP component glue.

use std::sync::Arc;

use spin_sdk::http::{IntoResponse, Method as HttpMethod, Request, Response};
use spin_sdk::http_component;

use nrnhub_ads::AdPlacements;
use nrnhub_core::{RequestId, SiteConfig, StructuredLogger};
use nrnhub_store::{KvStore, PlacementsStore};

use crate::page::{render_advertise, render_home};

#[http_component]
async fn handle_public_site(req: Request) -> anyhow::Result<impl IntoResponse> {
    if *req.method() != HttpMethod::Get {
        return Ok(Response::builder().status(405).body(Vec::new()).build());
    }

    let request_id = RequestId::generate();
    let logger = StructuredLogger::new(request_id.clone())
        .with_component("public-site")
        .with_route(req.path().to_string());

    let config = SiteConfig::load();

    let html = match req.path() {
        "/advertise" => render_advertise(),
        _ => {
            let kv = Arc::new(KvStore::open_default()?);
            let stored = PlacementsStore::new(kv).load()?;
            let placements = AdPlacements::from_payload(&stored);
            render_home(&placements, &config.base_url)
        }
    };

    logger.info("rendered");

    Ok(Response::builder()
        .status(200)
        .header("content-type", "text/html; charset=utf-8")
        .header("x-request-id", request_id.to_string().as_str())
        .header("cache-control", "public, max-age=60, stale-while-revalidate=300")
        .body(html)
        .build())
}
