//! Spin HTTP component glue.

use spin_sdk::http::{IntoResponse, Method as HttpMethod, Request, Response};
use spin_sdk::http_component;

use nrnhub_core::{Method, RequestContext, SiteConfig};

use crate::handlers::AdsApi;

#[http_component]
async fn handle_ads_api(req: Request) -> anyhow::Result<impl IntoResponse> {
    let Some(method) = map_method(req.method()) else {
        return Ok(Response::builder()
            .status(405)
            .header("content-type", "application/json")
            .body(r#"{"error":"method not allowed"}"#)
            .build());
    };

    let raw_path = if req.query().is_empty() {
        req.path().to_string()
    } else {
        format!("{}?{}", req.path(), req.query())
    };
    let mut ctx = RequestContext::new(method, raw_path);
    for (name, value) in req.headers() {
        if let Some(v) = value.as_str() {
            ctx.headers.insert(name.to_string(), v.to_string());
        }
    }

    let api = AdsApi::new(SiteConfig::load())?;
    let response = api.handle(&ctx, req.body());

    Ok(Response::builder()
        .status(response.status)
        .header("content-type", response.content_type.as_str())
        .header("x-request-id", ctx.request_id.to_string().as_str())
        .body(response.body)
        .build())
}

fn map_method(method: &HttpMethod) -> Option<Method> {
    match method {
        HttpMethod::Get => Some(Method::Get),
        HttpMethod::Post => Some(Method::Post),
        HttpMethod::Put => Some(Method::Put),
        HttpMethod::Delete => Some(Method::Delete),
        HttpMethod::Patch => Some(Method::Patch),
        HttpMethod::Head => Some(Method::Head),
        HttpMethod::Options => Some(Method::Options),
        _ => None,
    }
}
