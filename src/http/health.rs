use crate::config::Config;
use crate::types::HealthResponse;
use crate::VERSION;
use actix_web::web::Data;
use actix_web::{HttpResponse, Responder};
use conversion_processors::ConversionProcessor;
use std::sync::Arc;
use tracing::warn;

pub(crate) async fn health_check(
    processor: Data<Arc<ConversionProcessor>>,
    config: Data<Arc<Config>>,
) -> impl Responder {
    let provider_configured = processor.is_ready();

    if !provider_configured {
        warn!("Health check: conversion provider credential is missing");
    }

    HttpResponse::Ok().json(HealthResponse {
        status: if provider_configured { "healthy" } else { "degraded" }.to_string(),
        version: VERSION.to_string(),
        provider_configured,
        search_available: !config.search_endpoint.trim().is_empty(),
    })
}

pub(crate) async fn service_info() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Video to MP3 Converter API",
        "version": VERSION,
        "endpoints": {
            "health": "/api/health",
            "convert": "/api/convert",
            "download": "/api/download/{file_id}"
        }
    }))
}
