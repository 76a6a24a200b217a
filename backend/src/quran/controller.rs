use crate::error::ApiError;
use crate::quran::usecase::{QuranUseCase, QuranUseCaseImpl};
use actix_web::{get, web, HttpResponse};

pub async fn list_surahs_handler_impl<U>(usecase: web::Data<U>) -> Result<HttpResponse, ApiError>
where
    U: QuranUseCase + 'static,
{
    let surahs = usecase.list_surahs().await?;
    Ok(HttpResponse::Ok().json(surahs))
}

#[utoipa::path(
    get,
    path = "/api/quran/surahs",
    tag = "quran",
    responses(
        (status = 200, description = "Normalized surah list"),
        (status = 500, description = "Upstream unavailable")
    )
)]
#[get("")]
pub async fn list_surahs_handler(
    usecase: web::Data<QuranUseCaseImpl>,
) -> Result<HttpResponse, ApiError> {
    list_surahs_handler_impl(usecase).await
}

pub async fn get_surah_handler_impl<U>(
    path: web::Path<String>,
    usecase: web::Data<U>,
) -> Result<HttpResponse, ApiError>
where
    U: QuranUseCase + 'static,
{
    // Parse by hand so a non-numeric segment gets the envelope error
    let number: i64 = path
        .into_inner()
        .parse()
        .map_err(|_| ApiError::invalid_argument("Surah number must be between 1 and 114"))?;

    let detail = usecase.get_surah(number).await?;
    Ok(HttpResponse::Ok().json(detail))
}

#[utoipa::path(
    get,
    path = "/api/quran/surahs/{number}",
    tag = "quran",
    params(("number" = u16, Path, description = "Surah number (1-114)")),
    responses(
        (status = 200, description = "Surah detail with normalized ayahs"),
        (status = 400, description = "Surah number outside 1-114"),
        (status = 404, description = "Surah not found upstream"),
        (status = 500, description = "Upstream unavailable")
    )
)]
#[get("/{number}")]
pub async fn get_surah_handler(
    path: web::Path<String>,
    usecase: web::Data<QuranUseCaseImpl>,
) -> Result<HttpResponse, ApiError> {
    get_surah_handler_impl(path, usecase).await
}
