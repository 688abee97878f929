use crate::services::LinkRegistry;
use crate::types::ErrorResponse;
use actix_web::http::header;
use actix_web::web::{Data, Path};
use actix_web::HttpResponse;
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn download_file(
    registry: Data<Arc<LinkRegistry>>,
    file_id: Path<String>,
) -> HttpResponse {
    let file_id = file_id.into_inner();

    match registry.resolve(&file_id) {
        Some(link) => {
            info!(%file_id, filename = %link.filename, "Redirecting to converted file");
            HttpResponse::Found()
                .insert_header((header::LOCATION, link.link))
                .finish()
        }
        None => {
            warn!(%file_id, "Requested file is unknown or expired");
            HttpResponse::NotFound().json(ErrorResponse::new(format!(
                "File not found or has been deleted. Files are automatically removed after {} hours.",
                registry.ttl().as_secs() / 3600
            )))
        }
    }
}
