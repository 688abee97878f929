mod convert;
mod cors;
mod download;
mod health;

pub(crate) use convert::convert_media;
pub(crate) use cors::{cors_headers, CorsPolicy};
pub(crate) use download::download_file;
pub(crate) use health::{health_check, service_info};

use actix_web::http::Method;
use actix_web::{web, HttpResponse};

pub(crate) fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(service_info)))
        .service(
            web::resource("/api/health")
                .route(web::get().to(health_check))
                .route(web::method(Method::OPTIONS).to(preflight)),
        )
        .service(
            web::resource("/api/convert")
                .route(web::post().to(convert_media))
                .route(web::method(Method::OPTIONS).to(preflight)),
        )
        .service(
            web::resource("/api/download/{file_id}")
                .route(web::get().to(download_file))
                .route(web::method(Method::OPTIONS).to(preflight)),
        );
}

async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

#[cfg(test)]
mod tests;
