use super::processor::{ConversionProcessor, ProcessingError, INVALID_URL_FORMAT, NO_SEARCH_RESULTS};
use super::traits::{
    DownloadRegistryTrait, MediaConverterError, MediaConverterTrait, MediaSearchError,
    MediaSearchTrait,
};
use super::types::{ConvertRequest, DownloadLink};
use crate::{FileId, MediaId, ProviderTrack};
use async_trait::async_trait;
use std::collections::HashMap;
use std::io::{Error, ErrorKind};
use std::sync::{Arc, Mutex};

const PANIC_ID: &str = "panicpanic0";

struct MediaConverterMock {
    ready: bool,
    failures: HashMap<String, String>,
    calls: Mutex<Vec<(String, String)>>,
}

impl MediaConverterMock {
    fn new() -> Self {
        Self {
            ready: true,
            failures: HashMap::new(),
            calls: Mutex::new(vec![]),
        }
    }

    fn failing_for(media_id: &str, message: &str) -> Self {
        let mut mock = Self::new();
        mock.failures.insert(media_id.into(), message.into());
        mock
    }
}

#[async_trait]
impl MediaConverterTrait for MediaConverterMock {
    fn is_ready(&self) -> bool {
        self.ready
    }

    async fn convert(
        &self,
        media_id: &MediaId,
        quality: &str,
    ) -> Result<ProviderTrack, MediaConverterError> {
        self.calls
            .lock()
            .unwrap()
            .push((media_id.to_string(), quality.to_string()));

        if &**media_id == PANIC_ID {
            panic!("Provider client blew up");
        }

        if let Some(message) = self.failures.get(&**media_id) {
            return Err(MediaConverterError(Box::new(Error::new(
                ErrorKind::Other,
                message.clone(),
            ))));
        }

        Ok(ProviderTrack {
            title: format!("Title of {}", media_id),
            link: format!("https://cdn.example.com/{}.mp3", media_id),
            duration: Some("3:32".into()),
            filesize: Some(1024),
        })
    }
}

struct MediaSearchMock {
    answers: HashMap<String, MediaId>,
}

impl MediaSearchMock {
    fn new(answers: &[(&str, &str)]) -> Self {
        Self {
            answers: answers
                .iter()
                .map(|(query, id)| (query.to_string(), MediaId::new(*id)))
                .collect(),
        }
    }
}

#[async_trait]
impl MediaSearchTrait for MediaSearchMock {
    async fn resolve(&self, query: &str) -> Result<Option<MediaId>, MediaSearchError> {
        if query == "unreachable search" {
            return Err(MediaSearchError(Box::new(Error::new(
                ErrorKind::ConnectionRefused,
                "connection refused",
            ))));
        }

        Ok(self.answers.get(query).cloned())
    }
}

struct DownloadRegistryMock {
    links: Mutex<Vec<DownloadLink>>,
}

impl DownloadRegistryMock {
    fn new() -> Self {
        Self {
            links: Mutex::new(vec![]),
        }
    }
}

impl DownloadRegistryTrait for DownloadRegistryMock {
    fn register(&self, link: DownloadLink) -> FileId {
        let mut links = self.links.lock().unwrap();
        links.push(link);
        FileId(format!("file-{}", links.len()))
    }
}

fn create_processor(
    converter: MediaConverterMock,
    search: MediaSearchMock,
) -> (ConversionProcessor, Arc<MediaConverterMock>, Arc<DownloadRegistryMock>) {
    let converter = Arc::new(converter);
    let registry = Arc::new(DownloadRegistryMock::new());
    let processor = ConversionProcessor::new(
        converter.clone(),
        Arc::new(search),
        registry.clone(),
    );

    (processor, converter, registry)
}

fn request(urls: &[&str], search_queries: &[&str]) -> ConvertRequest {
    ConvertRequest {
        urls: urls.iter().map(|s| s.to_string()).collect(),
        search_queries: search_queries.iter().map(|s| s.to_string()).collect(),
        quality: None,
    }
}

#[actix_rt::test]
async fn should_convert_single_url() {
    let (processor, converter, registry) =
        create_processor(MediaConverterMock::new(), MediaSearchMock::new(&[]));

    let response = processor
        .process(&request(&["https://www.youtube.com/watch?v=dQw4w9WgXcQ"], &[]))
        .await
        .expect("Expected successful processing");

    assert_eq!(response.results.len(), 1);
    let result = &response.results[0];
    assert!(result.success);
    assert_eq!(result.id, "file-1");
    assert_eq!(result.title, "Title of dQw4w9WgXcQ");
    assert_eq!(result.filename, "Title of dQw4w9WgXcQ.mp3");
    assert_eq!(result.size, Some(1024));
    assert_eq!(result.duration.as_deref(), Some("3:32"));
    assert!(!result.was_search);
    assert_eq!(result.original_input, "https://www.youtube.com/watch?v=dQw4w9WgXcQ");

    assert_eq!(
        *converter.calls.lock().unwrap(),
        vec![("dQw4w9WgXcQ".to_string(), "320".to_string())]
    );
    assert_eq!(
        registry.links.lock().unwrap()[0],
        DownloadLink {
            link: "https://cdn.example.com/dQw4w9WgXcQ.mp3".into(),
            filename: "Title of dQw4w9WgXcQ.mp3".into(),
        }
    );
}

#[actix_rt::test]
async fn should_isolate_invalid_url_from_batch() {
    let (processor, _, _) =
        create_processor(MediaConverterMock::new(), MediaSearchMock::new(&[]));

    let response = processor
        .process(&request(
            &[
                "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
                "http://",
                "https://youtu.be/vz_vU53JvvI",
            ],
            &[],
        ))
        .await
        .expect("Expected successful processing");

    let successes = response.results.iter().map(|r| r.success).collect::<Vec<_>>();
    assert_eq!(successes, vec![true, false, true]);
    assert_eq!(response.results[1].error.as_deref(), Some(INVALID_URL_FORMAT));
    assert_eq!(response.results[1].original_input, "http://");
    assert_eq!(response.summary.total, 3);
    assert_eq!(response.summary.successful, 2);
    assert_eq!(response.summary.failed, 1);
}

#[actix_rt::test]
async fn should_return_urls_before_searches_in_submission_order() {
    let (processor, _, _) = create_processor(
        MediaConverterMock::new(),
        MediaSearchMock::new(&[("Aitana - En El Coche", "3xKmXq9Ls0E"), ("Rosalia", "R0s4l1aVid0")]),
    );

    let response = processor
        .process(&request(
            &["https://youtu.be/vz_vU53JvvI"],
            &["Aitana - En El Coche", "Rosalia"],
        ))
        .await
        .expect("Expected successful processing");

    let inputs = response
        .results
        .iter()
        .map(|r| (r.original_input.as_str(), r.was_search))
        .collect::<Vec<_>>();

    assert_eq!(
        inputs,
        vec![
            ("https://youtu.be/vz_vU53JvvI", false),
            ("Aitana - En El Coche", true),
            ("Rosalia", true),
        ]
    );
    assert_eq!(response.results[1].title, "Title of 3xKmXq9Ls0E");
    assert_eq!(response.summary.urls_processed, 1);
    assert_eq!(response.summary.searches_processed, 2);
}

#[actix_rt::test]
async fn should_report_search_failures_per_item() {
    let (processor, _, _) =
        create_processor(MediaConverterMock::new(), MediaSearchMock::new(&[]));

    let response = processor
        .process(&request(&[], &["nothing matches", "unreachable search"]))
        .await
        .expect("Expected successful processing");

    assert_eq!(response.results[0].error.as_deref(), Some(NO_SEARCH_RESULTS));
    assert_eq!(
        response.results[1].error.as_deref(),
        Some("Search failed: connection refused")
    );
    assert_eq!(response.summary.successful, 0);
    assert_eq!(response.summary.failed, 2);
}

#[actix_rt::test]
async fn should_keep_provider_failure_isolated() {
    let (processor, _, registry) = create_processor(
        MediaConverterMock::failing_for("dQw4w9WgXcQ", "Video not found"),
        MediaSearchMock::new(&[]),
    );

    let response = processor
        .process(&request(&["dQw4w9WgXcQ", "vz_vU53JvvI"], &[]))
        .await
        .expect("Expected successful processing");

    assert!(!response.results[0].success);
    assert_eq!(response.results[0].error.as_deref(), Some("Video not found"));
    assert!(response.results[0].id.is_empty());
    assert!(response.results[1].success);
    assert_eq!(registry.links.lock().unwrap().len(), 1);
}

#[actix_rt::test]
async fn should_turn_panicking_item_into_failure() {
    let (processor, _, _) =
        create_processor(MediaConverterMock::new(), MediaSearchMock::new(&[]));

    let response = processor
        .process(&request(&[PANIC_ID, "vz_vU53JvvI"], &[]))
        .await
        .expect("Expected successful processing");

    assert_eq!(response.results[0].error.as_deref(), Some("Processing failed"));
    assert!(response.results[1].success);
}

#[actix_rt::test]
async fn should_pass_requested_quality_to_provider() {
    let (processor, converter, _) =
        create_processor(MediaConverterMock::new(), MediaSearchMock::new(&[]));
    let processor = processor.with_default_quality("256");

    let mut with_quality = request(&["dQw4w9WgXcQ"], &[]);
    with_quality.quality = Some("128".into());

    processor.process(&with_quality).await.expect("Expected success");
    processor
        .process(&request(&["dQw4w9WgXcQ"], &[]))
        .await
        .expect("Expected success");

    let qualities = converter
        .calls
        .lock()
        .unwrap()
        .iter()
        .map(|(_, quality)| quality.clone())
        .collect::<Vec<_>>();
    assert_eq!(qualities, vec!["128".to_string(), "256".to_string()]);
}

#[actix_rt::test]
async fn should_reject_empty_request() {
    let (processor, converter, _) =
        create_processor(MediaConverterMock::new(), MediaSearchMock::new(&[]));

    let error = processor
        .process(&request(&[], &[]))
        .await
        .expect_err("Expected empty request to be rejected");

    assert!(matches!(error, ProcessingError::EmptyRequest));
    assert!(converter.calls.lock().unwrap().is_empty());
}

#[actix_rt::test]
async fn should_fail_whole_request_when_provider_is_not_configured() {
    let mut converter = MediaConverterMock::new();
    converter.ready = false;
    let (processor, converter, _) = create_processor(converter, MediaSearchMock::new(&[]));

    let error = processor
        .process(&request(&["dQw4w9WgXcQ"], &[]))
        .await
        .expect_err("Expected request to be rejected");

    assert!(matches!(error, ProcessingError::ProviderNotConfigured));
    assert!(converter.calls.lock().unwrap().is_empty());
}
