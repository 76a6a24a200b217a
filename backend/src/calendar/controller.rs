use crate::calendar::usecase::{CalendarUseCase, CalendarUseCaseImpl};
use crate::error::ApiError;
use actix_web::{get, web, HttpResponse};
use shared::CalendarQuery;

pub async fn hijri_calendar_handler_impl<U>(
    path: web::Path<(String, String)>,
    query: web::Query<CalendarQuery>,
    usecase: web::Data<U>,
) -> Result<HttpResponse, ApiError>
where
    U: CalendarUseCase + 'static,
{
    let (year_raw, month_raw) = path.into_inner();
    let year: i32 = year_raw
        .parse()
        .map_err(|_| ApiError::invalid_argument("Year must be a number"))?;
    let month: u32 = month_raw
        .parse()
        .map_err(|_| ApiError::invalid_argument("Month must be a number"))?;

    let days = usecase
        .hijri_calendar(year, month, query.latitude, query.longitude)
        .await?;
    Ok(HttpResponse::Ok().json(days))
}

#[utoipa::path(
    get,
    path = "/api/calendar/hijri/{year}/{month}",
    tag = "calendar",
    params(
        ("year" = i32, Path, description = "Year, e.g. 1448"),
        ("month" = u32, Path, description = "Month (1-12)"),
        ("latitude" = Option<f64>, Query, description = "Defaults to Jakarta"),
        ("longitude" = Option<f64>, Query, description = "Defaults to Jakarta")
    ),
    responses(
        (status = 200, description = "Per-day calendar entries"),
        (status = 500, description = "Upstream unavailable")
    )
)]
#[get("/hijri/{year}/{month}")]
pub async fn hijri_calendar_handler(
    path: web::Path<(String, String)>,
    query: web::Query<CalendarQuery>,
    usecase: web::Data<CalendarUseCaseImpl>,
) -> Result<HttpResponse, ApiError> {
    hijri_calendar_handler_impl(path, query, usecase).await
}
