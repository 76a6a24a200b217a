use crate::error::ApiError;
use crate::prayer_times::usecase::{PrayerTimesUseCase, PrayerTimesUseCaseImpl};
use actix_web::{get, web, HttpResponse};
use shared::{CityTimingsQuery, CoordinatesTimingsQuery, LocationSelector};

fn parse_coordinate(raw: &Option<String>) -> Result<Option<f64>, ApiError> {
    match raw {
        None => Ok(None),
        Some(value) => value.trim().parse::<f64>().map(Some).map_err(|_| {
            ApiError::invalid_argument("Latitude and longitude must be valid numbers")
        }),
    }
}

pub async fn timings_by_city_handler_impl<U>(
    query: web::Query<CityTimingsQuery>,
    usecase: web::Data<U>,
) -> Result<HttpResponse, ApiError>
where
    U: PrayerTimesUseCase + 'static,
{
    let query = query.into_inner();
    if query.city.as_deref().map_or(true, |c| c.trim().is_empty()) {
        return Err(ApiError::invalid_argument("City parameter is required"));
    }

    let selector = LocationSelector::from_parts(query.city, query.country, None, None)?;
    let snapshot = usecase.get_prayer_times(selector).await?;
    Ok(HttpResponse::Ok().json(snapshot))
}

#[utoipa::path(
    get,
    path = "/api/prayer-times/city",
    tag = "prayer-times",
    params(
        ("city" = String, Query, description = "City name"),
        ("country" = Option<String>, Query, description = "Country name, defaults to Indonesia")
    ),
    responses(
        (status = 200, description = "Prayer times snapshot"),
        (status = 400, description = "Missing city parameter"),
        (status = 500, description = "Upstream unavailable")
    )
)]
#[get("/city")]
pub async fn timings_by_city_handler(
    query: web::Query<CityTimingsQuery>,
    usecase: web::Data<PrayerTimesUseCaseImpl>,
) -> Result<HttpResponse, ApiError> {
    timings_by_city_handler_impl(query, usecase).await
}

pub async fn timings_by_coordinates_handler_impl<U>(
    query: web::Query<CoordinatesTimingsQuery>,
    usecase: web::Data<U>,
) -> Result<HttpResponse, ApiError>
where
    U: PrayerTimesUseCase + 'static,
{
    let query = query.into_inner();
    if query.latitude.is_none() || query.longitude.is_none() {
        return Err(ApiError::invalid_argument(
            "Latitude and longitude parameters are required",
        ));
    }

    let latitude = parse_coordinate(&query.latitude)?;
    let longitude = parse_coordinate(&query.longitude)?;

    let selector = LocationSelector::from_parts(None, None, latitude, longitude)?;
    let snapshot = usecase.get_prayer_times(selector).await?;
    Ok(HttpResponse::Ok().json(snapshot))
}

#[utoipa::path(
    get,
    path = "/api/prayer-times/coordinates",
    tag = "prayer-times",
    params(
        ("latitude" = f64, Query, description = "Latitude"),
        ("longitude" = f64, Query, description = "Longitude")
    ),
    responses(
        (status = 200, description = "Prayer times snapshot"),
        (status = 400, description = "Missing or malformed coordinates"),
        (status = 500, description = "Upstream unavailable")
    )
)]
#[get("/coordinates")]
pub async fn timings_by_coordinates_handler(
    query: web::Query<CoordinatesTimingsQuery>,
    usecase: web::Data<PrayerTimesUseCaseImpl>,
) -> Result<HttpResponse, ApiError> {
    timings_by_coordinates_handler_impl(query, usecase).await
}

#[cfg(test)]
mod prayer_times_controller_tests {
    use super::*;
    use actix_web::test::{call_service, init_service, read_body_json, TestRequest};
    use actix_web::App;
    use pretty_assertions::assert_eq;
    use shared::PrayerTimesSnapshot;

    struct MockPrayerTimesUseCase;

    fn sample_snapshot() -> PrayerTimesSnapshot {
        serde_json::from_value(serde_json::json!({
            "timings": {
                "Fajr": "04:36", "Sunrise": "05:55", "Dhuhr": "11:54",
                "Asr": "15:15", "Sunset": "17:52", "Maghrib": "17:52", "Isha": "19:04"
            },
            "date": {
                "readable": "07 Aug 2026",
                "timestamp": "1786406400",
                "hijri": {
                    "date": "23-02-1448", "day": "23",
                    "weekday": {"en": "Al Juma'a"},
                    "month": {"number": 2, "en": "Ṣafar"},
                    "year": "1448"
                },
                "gregorian": {
                    "date": "07-08-2026", "day": "07",
                    "weekday": {"en": "Friday"},
                    "month": {"number": 8, "en": "August"},
                    "year": "2026"
                }
            },
            "meta": {
                "latitude": -6.2088, "longitude": 106.8456,
                "timezone": "Asia/Jakarta",
                "method": {"id": 20, "name": "Kementerian Agama Republik Indonesia"}
            }
        }))
        .unwrap()
    }

    #[async_trait::async_trait]
    impl PrayerTimesUseCase for MockPrayerTimesUseCase {
        async fn get_prayer_times(
            &self,
            _selector: shared::LocationSelector,
        ) -> Result<PrayerTimesSnapshot, ApiError> {
            Ok(sample_snapshot())
        }
    }

    macro_rules! test_app {
        () => {
            init_service(
                App::new()
                    .app_data(web::Data::new(MockPrayerTimesUseCase))
                    .service(
                        web::scope("/api/prayer-times")
                            .service(web::resource("/city").route(web::get().to(
                                timings_by_city_handler_impl::<MockPrayerTimesUseCase>,
                            )))
                            .service(web::resource("/coordinates").route(web::get().to(
                                timings_by_coordinates_handler_impl::<MockPrayerTimesUseCase>,
                            ))),
                    ),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_city_missing_parameter_is_400_with_exact_message() {
        let app = test_app!();
        let res = call_service(
            &app,
            TestRequest::get().uri("/api/prayer-times/city").to_request(),
        )
        .await;
        assert_eq!(res.status().as_u16(), 400);

        let body: serde_json::Value = read_body_json(res).await;
        assert_eq!(body["error"], "City parameter is required");
    }

    #[actix_web::test]
    async fn test_city_query_returns_snapshot() {
        let app = test_app!();
        let res = call_service(
            &app,
            TestRequest::get()
                .uri("/api/prayer-times/city?city=Jakarta")
                .to_request(),
        )
        .await;
        assert_eq!(res.status().as_u16(), 200);

        let body: serde_json::Value = read_body_json(res).await;
        assert_eq!(body["timings"]["Fajr"], "04:36");
        assert_eq!(body["meta"]["timezone"], "Asia/Jakarta");
    }

    #[actix_web::test]
    async fn test_coordinates_missing_longitude_is_400() {
        let app = test_app!();
        let res = call_service(
            &app,
            TestRequest::get()
                .uri("/api/prayer-times/coordinates?latitude=-6.2")
                .to_request(),
        )
        .await;
        assert_eq!(res.status().as_u16(), 400);

        let body: serde_json::Value = read_body_json(res).await;
        assert_eq!(body["error"], "Latitude and longitude parameters are required");
    }

    #[actix_web::test]
    async fn test_coordinates_malformed_value_is_400() {
        let app = test_app!();
        let res = call_service(
            &app,
            TestRequest::get()
                .uri("/api/prayer-times/coordinates?latitude=abc&longitude=106.8")
                .to_request(),
        )
        .await;
        assert_eq!(res.status().as_u16(), 400);

        let body: serde_json::Value = read_body_json(res).await;
        assert_eq!(body["error"], "Latitude and longitude must be valid numbers");
    }

    #[actix_web::test]
    async fn test_coordinates_query_returns_snapshot() {
        let app = test_app!();
        let res = call_service(
            &app,
            TestRequest::get()
                .uri("/api/prayer-times/coordinates?latitude=-6.2088&longitude=106.8456")
                .to_request(),
        )
        .await;
        assert_eq!(res.status().as_u16(), 200);
    }
}
