use crate::types::ErrorResponse;
use actix_web::web::{Bytes, Data};
use actix_web::HttpResponse;
use conversion_processors::{ConversionProcessor, ConvertRequest, ProcessingError};
use std::sync::Arc;
use tracing::{error, warn};

pub(crate) async fn convert_media(
    processor: Data<Arc<ConversionProcessor>>,
    body: Bytes,
) -> HttpResponse {
    let request = match serde_json::from_slice::<ConvertRequest>(&body) {
        Ok(request) => request,
        Err(error) => {
            warn!(%error, "Malformed conversion request");
            return HttpResponse::BadRequest()
                .json(ErrorResponse::new(format!("Invalid request body: {}", error)));
        }
    };

    match processor.process(&request).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(error @ ProcessingError::EmptyRequest) => {
            HttpResponse::BadRequest().json(ErrorResponse::new(error.to_string()))
        }
        Err(error) => {
            error!(?error, "Conversion request failed");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new(format!("Conversion error: {}", error)))
        }
    }
}
