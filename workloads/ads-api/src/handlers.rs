//! Request handling, independent of the HTTP host.

use std::sync::Arc;

use serde_json::json;

use nrnhub_ads::{AdInquiry, AdPlacements, InquiryDraft, PlacementsPayload};
use nrnhub_auth::AuthError;
use nrnhub_core::{Method, RequestContext, SiteConfig, StructuredLogger};
use nrnhub_store::{InquiryStore, KvStore, MediaStore, PlacementsStore, StoreError};

const MEDIA_ROUTE_PREFIX: &str = "/uploads/ads/";

/// A response ready for the HTTP host to emit.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub content_type: String,
    pub body: Vec<u8>,
}

impl ApiResponse {
    fn json(status: u16, value: &serde_json::Value) -> Self {
        Self {
            status,
            content_type: "application/json".to_string(),
            body: serde_json::to_vec(value).unwrap_or_default(),
        }
    }

    fn error(status: u16, message: impl Into<String>) -> Self {
        Self::json(status, &json!({ "error": message.into() }))
    }

    fn bytes(status: u16, content_type: &str, body: Vec<u8>) -> Self {
        Self {
            status,
            content_type: content_type.to_string(),
            body,
        }
    }
}

/// The ad API over its repositories.
pub struct AdsApi {
    config: SiteConfig,
    placements: PlacementsStore,
    inquiries: InquiryStore,
    media: MediaStore,
}

impl AdsApi {
    /// Open the backing store and build the API.
    pub fn new(config: SiteConfig) -> Result<Self, StoreError> {
        let kv = Arc::new(KvStore::open_default()?);
        Ok(Self::with_store(config, kv))
    }

    /// Build the API over an existing store handle.
    pub fn with_store(config: SiteConfig, kv: Arc<KvStore>) -> Self {
        Self {
            config,
            placements: PlacementsStore::new(Arc::clone(&kv)),
            inquiries: InquiryStore::new(Arc::clone(&kv)),
            media: MediaStore::new(kv),
        }
    }

    /// Route one request.
    pub fn handle(&self, ctx: &RequestContext, body: &[u8]) -> ApiResponse {
        let logger = StructuredLogger::new(ctx.request_id.clone())
            .with_component("ads-api")
            .with_route(ctx.path.clone());

        let response = match (ctx.method, ctx.path.as_str()) {
            (Method::Get, "/api/ads") => self.get_placements(&logger),
            (Method::Post, "/api/ads") => self.submit_placements(ctx, body, &logger),
            (Method::Post, "/api/ads/inquiry") => self.submit_inquiry(body, &logger),
            (Method::Get, "/api/ads/inquiries") => self.list_inquiries(ctx, &logger),
            (Method::Post, "/api/ads/upload") => self.upload(ctx, body, &logger),
            (Method::Get, path) if media_name(path).is_some() => {
                self.serve_media(media_name(ctx.path.as_str()).unwrap_or_default(), &logger)
            }
            (_, "/api/ads")
            | (_, "/api/ads/inquiry")
            | (_, "/api/ads/inquiries")
            | (_, "/api/ads/upload") => ApiResponse::error(405, "method not allowed"),
            (_, path) if media_name(path).is_some() => {
                ApiResponse::error(405, "method not allowed")
            }
            _ => ApiResponse::error(404, "not found"),
        };

        logger.info_with("handled", &[("status", &response.status)]);
        response
    }

    /// `GET /api/ads`
    fn get_placements(&self, logger: &StructuredLogger) -> ApiResponse {
        match self.placements.load() {
            Ok(stored) => {
                let placements = AdPlacements::from_payload(&stored);
                let payload = placements.absolutized(&self.config.base_url).to_payload();
                match serde_json::to_value(&payload) {
                    Ok(value) => ApiResponse::json(200, &value),
                    Err(e) => storage_failure(logger, &e.to_string()),
                }
            }
            Err(e) => storage_failure(logger, &e.to_string()),
        }
    }

    /// `POST /api/ads`, whole-document replace.
    fn submit_placements(
        &self,
        ctx: &RequestContext,
        body: &[u8],
        logger: &StructuredLogger,
    ) -> ApiResponse {
        if let Some(response) = self.require_admin(ctx, logger) {
            return response;
        }

        let payload: PlacementsPayload = match serde_json::from_slice(body) {
            Ok(payload) => payload,
            Err(e) => return ApiResponse::error(400, format!("malformed payload: {}", e)),
        };

        let sanitized = AdPlacements::sanitize(&payload);
        if let Err(e) = self.placements.replace(&sanitized) {
            return storage_failure(logger, &e.to_string());
        }

        let echoed = AdPlacements::from_payload(&sanitized)
            .absolutized(&self.config.base_url)
            .to_payload();
        match serde_json::to_value(&echoed) {
            Ok(value) => ApiResponse::json(200, &value),
            Err(e) => storage_failure(logger, &e.to_string()),
        }
    }

    /// `POST /api/ads/inquiry`
    fn submit_inquiry(&self, body: &[u8], logger: &StructuredLogger) -> ApiResponse {
        let draft: InquiryDraft = match serde_json::from_slice(body) {
            Ok(draft) => draft,
            Err(e) => return ApiResponse::error(400, format!("malformed payload: {}", e)),
        };

        let inquiry = match AdInquiry::from_draft(draft) {
            Ok(inquiry) => inquiry,
            Err(e) => return ApiResponse::error(400, e.to_string()),
        };

        match self.inquiries.append(&inquiry) {
            Ok(()) => ApiResponse::json(201, &json!({ "message": "inquiry received" })),
            Err(e) => storage_failure(logger, &e.to_string()),
        }
    }

    /// `GET /api/ads/inquiries?limit=&offset=`
    fn list_inquiries(&self, ctx: &RequestContext, logger: &StructuredLogger) -> ApiResponse {
        if let Some(response) = self.require_admin(ctx, logger) {
            return response;
        }

        let limit = ctx
            .query_param("limit")
            .and_then(|v| v.parse().ok())
            .unwrap_or(self.config.inquiry_page_size);
        let offset = ctx
            .query_param("offset")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);

        match self.inquiries.list(limit, offset) {
            Ok(inquiries) => match serde_json::to_value(&inquiries) {
                Ok(value) => ApiResponse::json(200, &value),
                Err(e) => storage_failure(logger, &e.to_string()),
            },
            Err(e) => storage_failure(logger, &e.to_string()),
        }
    }

    /// `POST /api/ads/upload?filename=`
    fn upload(&self, ctx: &RequestContext, body: &[u8], logger: &StructuredLogger) -> ApiResponse {
        if let Some(response) = self.require_admin(ctx, logger) {
            return response;
        }

        let Some(filename) = ctx.query_param("filename") else {
            return ApiResponse::error(400, "filename query parameter is required");
        };
        let content_type = ctx.header("content-type").unwrap_or("");
        if !content_type.starts_with("image/") {
            return ApiResponse::error(400, "an image body is required");
        }
        if body.is_empty() {
            return ApiResponse::error(400, "empty upload");
        }

        match self.media.store(filename, body) {
            Ok(name) => {
                let url = nrnhub_ads::url::absolutize(
                    &self.config.base_url,
                    &format!("{}/{}", nrnhub_ads::url::UPLOAD_DIR, name),
                );
                logger.info_with("stored creative", &[("name", &name)]);
                ApiResponse::json(200, &json!({ "url": url }))
            }
            Err(StoreError::UnsupportedMedia(name)) => {
                ApiResponse::error(400, format!("unsupported media type: {}", name))
            }
            Err(e) => storage_failure(logger, &e.to_string()),
        }
    }

    /// `GET /Uploads/ads/{file}`
    fn serve_media(&self, name: &str, logger: &StructuredLogger) -> ApiResponse {
        match self.media.get(name) {
            Ok(Some(bytes)) => {
                ApiResponse::bytes(200, MediaStore::content_type_for(name), bytes)
            }
            Ok(None) => ApiResponse::error(404, "no such creative"),
            Err(e) => storage_failure(logger, &e.to_string()),
        }
    }

    /// Gate an admin route. Returns the rejection response, if any.
    fn require_admin(&self, ctx: &RequestContext, logger: &StructuredLogger) -> Option<ApiResponse> {
        match nrnhub_auth::authorize_bearer(ctx.header("authorization"), &self.config.admin_token) {
            Ok(()) => None,
            Err(AuthError::AdminDisabled) => {
                logger.warn("admin route hit with no admin token configured");
                Some(ApiResponse::error(403, "admin access not configured"))
            }
            Err(e) => Some(ApiResponse::error(401, e.to_string())),
        }
    }
}

fn storage_failure(logger: &StructuredLogger, detail: &str) -> ApiResponse {
    logger.error_with("storage failure", &[("detail", &detail)]);
    ApiResponse::error(500, "storage failure")
}

/// Extract the creative name from a media route path.
fn media_name(path: &str) -> Option<&str> {
    let lower = path.to_ascii_lowercase();
    let rest = lower.strip_prefix(MEDIA_ROUTE_PREFIX)?;
    if rest.is_empty() {
        return None;
    }
    Some(&path[path.len() - rest.len()..])
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN: &str = "test-admin-token";

    fn api() -> AdsApi {
        let config = SiteConfig::default()
            .with_base_url("https://nrnhub.com")
            .with_admin_token(TOKEN);
        let kv = Arc::new(KvStore::open_default().unwrap());
        AdsApi::with_store(config, kv)
    }

    fn get(path: &str) -> RequestContext {
        RequestContext::new(Method::Get, path)
    }

    fn post(path: &str) -> RequestContext {
        RequestContext::new(Method::Post, path)
    }

    fn admin(ctx: RequestContext) -> RequestContext {
        ctx.with_header("authorization", format!("Bearer {}", TOKEN))
    }

    fn body_json(response: &ApiResponse) -> serde_json::Value {
        serde_json::from_slice(&response.body).unwrap()
    }

    #[test]
    fn test_get_placements_lazy_default() {
        let api = api();
        let response = api.handle(&get("/api/ads"), &[]);
        assert_eq!(response.status, 200);
        let json = body_json(&response);
        assert_eq!(json["adImages"], serde_json::json!({}));
        assert_eq!(json["adLinks"], serde_json::json!({}));
        assert_eq!(json["visibility"], serde_json::json!({}));
    }

    #[test]
    fn test_submit_requires_auth() {
        let api = api();
        let body = br#"{"adImages":{},"adLinks":{},"visibility":{}}"#;
        let response = api.handle(&post("/api/ads"), body);
        assert_eq!(response.status, 401);

        let bad = post("/api/ads").with_header("authorization", "Bearer wrong");
        assert_eq!(api.handle(&bad, body).status, 401);
    }

    #[test]
    fn test_submit_then_get_round_trip() {
        let api = api();
        let body = br#"{
            "adImages": {"hero": "Uploads/ads/a.png", "bogus": "x.png"},
            "adLinks": {"hero": "https://adv.example"},
            "visibility": {"hero": true, "navbar": false, "bogus": true}
        }"#;
        let submitted = api.handle(&admin(post("/api/ads")), body);
        assert_eq!(submitted.status, 200);

        let fetched = api.handle(&get("/api/ads"), &[]);
        let json = body_json(&fetched);
        // Unknown slots never reach persisted state.
        assert!(json["adImages"].get("bogus").is_none());
        assert!(json["visibility"].get("bogus").is_none());
        // Images come back absolute.
        assert_eq!(
            json["adImages"]["hero"],
            "https://nrnhub.com/Uploads/ads/a.png"
        );
        assert_eq!(json["visibility"]["navbar"], false);
    }

    #[test]
    fn test_submit_echo_matches_follow_up_get() {
        let api = api();
        let body = br#"{
            "adImages": {"bottom": "Uploads/ads/b.png"},
            "adLinks": {},
            "visibility": {"bottom": true}
        }"#;
        let echoed = body_json(&api.handle(&admin(post("/api/ads")), body));
        let fetched = body_json(&api.handle(&get("/api/ads"), &[]));
        assert_eq!(echoed, fetched);
    }

    #[test]
    fn test_resubmit_of_fetch_is_stable() {
        let api = api();
        let body = br#"{
            "adImages": {"hero": "Uploads/ads/a.png"},
            "adLinks": {"hero": "https://adv.example"},
            "visibility": {"hero": true}
        }"#;
        api.handle(&admin(post("/api/ads")), body);

        let first = api.handle(&get("/api/ads"), &[]);
        // Submit exactly what was fetched, no edits.
        let second = api.handle(&admin(post("/api/ads")), &first.body);
        assert_eq!(second.status, 200);
        let third = api.handle(&get("/api/ads"), &[]);
        assert_eq!(first.body, third.body);
    }

    #[test]
    fn test_submit_replaces_whole_document() {
        let api = api();
        let first = br#"{"adImages":{},"adLinks":{},"visibility":{"hero":true,"navbar":true}}"#;
        api.handle(&admin(post("/api/ads")), first);
        let second = br#"{"adImages":{},"adLinks":{},"visibility":{"hero":true}}"#;
        api.handle(&admin(post("/api/ads")), second);

        let json = body_json(&api.handle(&get("/api/ads"), &[]));
        assert!(json["visibility"].get("navbar").is_none());
    }

    #[test]
    fn test_malformed_submit_rejected() {
        let api = api();
        let response = api.handle(&admin(post("/api/ads")), b"{not json");
        assert_eq!(response.status, 400);
    }

    #[test]
    fn test_inquiry_happy_path() {
        let api = api();
        let body = br#"{"name":"Jane","email":"jane@x.com","adType":"Banner"}"#;
        let response = api.handle(&post("/api/ads/inquiry"), body);
        assert_eq!(response.status, 201);
        assert!(body_json(&response).get("message").is_some());

        let listed = api.handle(&admin(get("/api/ads/inquiries")), &[]);
        let json = body_json(&listed);
        let records = json.as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["company"], "");
        assert_eq!(records[0]["message"], "");
        assert!(records[0]["createdAt"].as_i64().unwrap() > 0);
    }

    #[test]
    fn test_inquiry_missing_fields_rejected() {
        let api = api();
        let body = br#"{"name":"Jane","email":"jane@x.com"}"#;
        let response = api.handle(&post("/api/ads/inquiry"), body);
        assert_eq!(response.status, 400);
        assert!(body_json(&response)["error"]
            .as_str()
            .unwrap()
            .contains("adType"));
    }

    #[test]
    fn test_inquiries_listing_requires_auth_and_pages() {
        let api = api();
        for n in 0..3 {
            let body = format!(
                r#"{{"name":"n{0}","email":"n{0}@x.com","adType":"Banner"}}"#,
                n
            );
            api.handle(&post("/api/ads/inquiry"), body.as_bytes());
        }

        assert_eq!(api.handle(&get("/api/ads/inquiries"), &[]).status, 401);

        let page = api.handle(&admin(get("/api/ads/inquiries?limit=2")), &[]);
        let json = body_json(&page);
        assert_eq!(json.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_upload_and_serve() {
        let api = api();
        let ctx = admin(post("/api/ads/upload?filename=banner.png"))
            .with_header("content-type", "image/png");
        let response = api.handle(&ctx, b"png-bytes");
        assert_eq!(response.status, 200);
        let url = body_json(&response)["url"].as_str().unwrap().to_string();
        assert!(url.starts_with("https://nrnhub.com/Uploads/ads/"));
        assert!(url.ends_with(".png"));

        let path = url.strip_prefix("https://nrnhub.com").unwrap().to_string();
        let served = api.handle(&get(&path), &[]);
        assert_eq!(served.status, 200);
        assert_eq!(served.content_type, "image/png");
        assert_eq!(served.body, b"png-bytes");
    }

    #[test]
    fn test_upload_validation() {
        let api = api();
        let no_filename =
            admin(post("/api/ads/upload")).with_header("content-type", "image/png");
        assert_eq!(api.handle(&no_filename, b"x").status, 400);

        let not_image = admin(post("/api/ads/upload?filename=a.png"))
            .with_header("content-type", "text/plain");
        assert_eq!(api.handle(&not_image, b"x").status, 400);

        let empty = admin(post("/api/ads/upload?filename=a.png"))
            .with_header("content-type", "image/png");
        assert_eq!(api.handle(&empty, b"").status, 400);
    }

    #[test]
    fn test_unknown_creative_404() {
        let api = api();
        let response = api.handle(&get("/Uploads/ads/missing.png"), &[]);
        assert_eq!(response.status, 404);
    }

    #[test]
    fn test_unknown_route_404_wrong_method_405() {
        let api = api();
        assert_eq!(api.handle(&get("/api/nope"), &[]).status, 404);
        assert_eq!(api.handle(&get("/api/ads/inquiry"), &[]).status, 405);
        let delete = RequestContext::new(Method::Delete, "/api/ads");
        assert_eq!(api.handle(&delete, &[]).status, 405);
    }

    #[test]
    fn test_visible_slot_without_image_survives_delivery() {
        // The read side decides placeholder-vs-hidden; delivery must not
        // drop a visible-but-empty slot.
        let api = api();
        let body = br#"{"adImages":{},"adLinks":{},"visibility":{"hero":true}}"#;
        api.handle(&admin(post("/api/ads")), body);
        let json = body_json(&api.handle(&get("/api/ads"), &[]));
        assert_eq!(json["visibility"]["hero"], true);
        assert!(json["adImages"].get("hero").is_none());
    }
}
