use super::{configure, cors_headers, CorsPolicy};
use crate::config::{Config, RapidApiCredentials};
use crate::services::LinkRegistry;
use crate::types::{ErrorResponse, HealthResponse};
use actix_web::http::{header, Method, StatusCode};
use actix_web::middleware::from_fn;
use actix_web::web::Data;
use actix_web::{test, App};
use async_trait::async_trait;
use conversion_processors::{
    ConversionProcessor, ConvertResponse, DownloadLink, DownloadRegistryTrait,
    MediaConverterError, MediaConverterTrait, MediaId, MediaSearchError, MediaSearchTrait,
    ProviderTrack,
};
use std::sync::Arc;
use std::time::Duration;

struct MediaConverterMock {
    ready: bool,
}

#[async_trait]
impl MediaConverterTrait for MediaConverterMock {
    fn is_ready(&self) -> bool {
        self.ready
    }

    async fn convert(
        &self,
        media_id: &MediaId,
        _quality: &str,
    ) -> Result<ProviderTrack, MediaConverterError> {
        Ok(ProviderTrack {
            title: format!("Track {}", media_id),
            link: format!("https://cdn.example.com/{}.mp3", media_id),
            duration: None,
            filesize: None,
        })
    }
}

struct MediaSearchMock;

#[async_trait]
impl MediaSearchTrait for MediaSearchMock {
    async fn resolve(&self, _query: &str) -> Result<Option<MediaId>, MediaSearchError> {
        Ok(Some(MediaId::new("3xKmXq9Ls0E")))
    }
}

fn create_config() -> Arc<Config> {
    Arc::new(Config {
        bind_address: "127.0.0.1:0".into(),
        shutdown_timeout: 1,
        rapidapi: RapidApiCredentials {
            key: "secret".into(),
            host: "youtube-mp36.p.rapidapi.com".into(),
        },
        provider_endpoint: "http://localhost".into(),
        search_endpoint: "http://localhost".into(),
        default_quality: "320".into(),
        cors_origins: "http://localhost:5173".into(),
        link_ttl_hours: 24,
        sweep_interval_secs: 3600,
    })
}

fn create_state(ready: bool) -> (Arc<ConversionProcessor>, Arc<LinkRegistry>) {
    let registry = Arc::new(LinkRegistry::new(Duration::from_secs(24 * 3600)));
    let processor = Arc::new(ConversionProcessor::new(
        Arc::new(MediaConverterMock { ready }),
        Arc::new(MediaSearchMock),
        registry.clone(),
    ));

    (processor, registry)
}

macro_rules! init_app {
    ($processor:expr, $registry:expr) => {
        test::init_service(
            App::new()
                .app_data(Data::new($processor.clone()))
                .app_data(Data::new($registry.clone()))
                .app_data(Data::new(create_config()))
                .app_data(Data::new(CorsPolicy::new(vec![
                    "http://localhost:5173".into()
                ])))
                .wrap(from_fn(cors_headers))
                .configure(configure),
        )
        .await
    };
}

#[actix_rt::test]
async fn should_convert_url_and_expose_download_link() {
    let (processor, registry) = create_state(true);
    let app = init_app!(processor, registry);

    let req = test::TestRequest::post()
        .uri("/api/convert")
        .set_json(serde_json::json!({
            "urls": ["https://www.youtube.com/watch?v=dQw4w9WgXcQ"],
            "searchQueries": []
        }))
        .to_request();
    let response: ConvertResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(response.results.len(), 1);
    assert!(response.results[0].success);
    assert_eq!(response.summary.successful, 1);

    let req = test::TestRequest::get()
        .uri(&format!("/api/download/{}", response.results[0].id))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(
        res.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()),
        Some("https://cdn.example.com/dQw4w9WgXcQ.mp3")
    );
}

#[actix_rt::test]
async fn should_reject_malformed_body_with_detail() {
    let (processor, registry) = create_state(true);
    let app = init_app!(processor, registry);

    let req = test::TestRequest::post()
        .uri("/api/convert")
        .set_payload(r#"{"urls":"https://youtu.be/dQw4w9WgXcQ"}"#)
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = test::read_body_json(res).await;
    assert!(body.detail.starts_with("Invalid request body"));
}

#[actix_rt::test]
async fn should_reject_request_without_items() {
    let (processor, registry) = create_state(true);
    let app = init_app!(processor, registry);

    let req = test::TestRequest::post()
        .uri("/api/convert")
        .set_json(serde_json::json!({ "urls": [] }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = test::read_body_json(res).await;
    assert_eq!(
        body.detail,
        "At least one URL or search query must be provided"
    );
}

#[actix_rt::test]
async fn should_fail_whole_request_when_provider_is_missing() {
    let (processor, registry) = create_state(false);
    let app = init_app!(processor, registry);

    let req = test::TestRequest::post()
        .uri("/api/convert")
        .set_json(serde_json::json!({ "urls": ["dQw4w9WgXcQ"], "quality": "320" }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorResponse = test::read_body_json(res).await;
    assert_eq!(
        body.detail,
        "Conversion error: Conversion provider is not configured"
    );
}

#[actix_rt::test]
async fn should_answer_not_found_for_unknown_file() {
    let (processor, registry) = create_state(true);
    let app = init_app!(processor, registry);

    let req = test::TestRequest::get()
        .uri("/api/download/does-not-exist")
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: ErrorResponse = test::read_body_json(res).await;
    assert!(body.detail.contains("24 hours"));
}

#[actix_rt::test]
async fn should_serve_previously_registered_link() {
    let (processor, registry) = create_state(true);
    let file_id = registry.register(DownloadLink {
        link: "https://cdn.example.com/x.mp3".into(),
        filename: "x.mp3".into(),
    });
    let app = init_app!(processor, registry);

    let req = test::TestRequest::get()
        .uri(&format!("/api/download/{}", file_id))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::FOUND);
}

#[actix_rt::test]
async fn should_report_health() {
    let (processor, registry) = create_state(true);
    let app = init_app!(processor, registry);

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: HealthResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.status, "healthy");
    assert!(body.provider_configured);

    let (processor, registry) = create_state(false);
    let app = init_app!(processor, registry);

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: HealthResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.status, "degraded");
}

#[actix_rt::test]
async fn should_answer_preflight_for_allowed_origin() {
    let (processor, registry) = create_state(true);
    let app = init_app!(processor, registry);

    let req = test::TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/api/convert")
        .insert_header((header::ORIGIN, "http://localhost:5173"))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:5173")
    );
}

#[actix_rt::test]
async fn should_list_endpoints_on_root() {
    let (processor, registry) = create_state(true);
    let app = init_app!(processor, registry);

    let req = test::TestRequest::get().uri("/").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["endpoints"]["convert"], "/api/convert");
}
