use actix_web::{get, HttpResponse, Responder};
use shared::BookmarkCollections;

/// Placeholder endpoint: bookmarks live in client-local storage and
/// there is no authentication, so the server always serves empty
/// collections.
#[utoipa::path(
    get,
    path = "/api/bookmarks",
    tag = "bookmarks",
    responses(
        (status = 200, description = "Empty bookmark collections")
    )
)]
#[get("")]
pub async fn list_bookmarks_handler() -> impl Responder {
    HttpResponse::Ok().json(BookmarkCollections::empty())
}
