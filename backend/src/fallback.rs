use crate::config::Config;
use actix_web::{web, HttpRequest, HttpResponse};
use shared::ErrorResponse;

/// App-level fallback: unmatched `/api/*` paths get the JSON 404
/// envelope; everything else serves the UI shell so client-side routing
/// can take over.
pub async fn default_handler(
    req: HttpRequest,
    config: web::Data<Config>,
) -> actix_web::Result<HttpResponse> {
    if req.path().starts_with("/api") {
        return Ok(HttpResponse::NotFound().json(ErrorResponse::new("API endpoint not found")));
    }

    let index_path = std::path::Path::new(&config.server.static_dir).join("index.html");
    match actix_files::NamedFile::open_async(&index_path).await {
        Ok(file) => Ok(file.into_response(&req)),
        Err(e) => {
            log::warn!("UI shell not available at {:?}: {}", index_path, e);
            Ok(HttpResponse::NotFound().json(ErrorResponse::new("Not found")))
        }
    }
}
