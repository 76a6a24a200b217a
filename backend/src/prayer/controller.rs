use crate::error::ApiError;
use crate::prayer::usecase::{PrayerUseCase, PrayerUseCaseImpl};
use actix_web::{get, web, HttpResponse};
use shared::SearchQuery;

pub async fn list_prayers_handler_impl<U>(usecase: web::Data<U>) -> Result<HttpResponse, ApiError>
where
    U: PrayerUseCase + 'static,
{
    let prayers = usecase.list_prayers().await?;
    Ok(HttpResponse::Ok().json(prayers))
}

#[utoipa::path(
    get,
    path = "/api/prayers",
    tag = "prayers",
    responses(
        (status = 200, description = "Normalized dua list"),
        (status = 500, description = "Upstream unavailable")
    )
)]
#[get("")]
pub async fn list_prayers_handler(
    usecase: web::Data<PrayerUseCaseImpl>,
) -> Result<HttpResponse, ApiError> {
    list_prayers_handler_impl(usecase).await
}

pub async fn search_prayers_handler_impl<U>(
    query: web::Query<SearchQuery>,
    usecase: web::Data<U>,
) -> Result<HttpResponse, ApiError>
where
    U: PrayerUseCase + 'static,
{
    let prayers = usecase.search_prayers(&query.q).await?;
    Ok(HttpResponse::Ok().json(prayers))
}

#[utoipa::path(
    get,
    path = "/api/prayers/search",
    tag = "prayers",
    params(("q" = String, Query, description = "Substring matched against title and translation")),
    responses(
        (status = 200, description = "Matching duas"),
        (status = 500, description = "Upstream unavailable")
    )
)]
#[get("/search")]
pub async fn search_prayers_handler(
    query: web::Query<SearchQuery>,
    usecase: web::Data<PrayerUseCaseImpl>,
) -> Result<HttpResponse, ApiError> {
    search_prayers_handler_impl(query, usecase).await
}

pub async fn get_prayer_handler_impl<U>(
    path: web::Path<String>,
    usecase: web::Data<U>,
) -> Result<HttpResponse, ApiError>
where
    U: PrayerUseCase + 'static,
{
    let prayer = usecase.get_prayer(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(prayer))
}

#[utoipa::path(
    get,
    path = "/api/prayers/{id}",
    tag = "prayers",
    params(("id" = String, Path, description = "Dua id")),
    responses(
        (status = 200, description = "Dua detail"),
        (status = 404, description = "No such dua"),
        (status = 500, description = "Upstream unavailable")
    )
)]
#[get("/{id}")]
pub async fn get_prayer_handler(
    path: web::Path<String>,
    usecase: web::Data<PrayerUseCaseImpl>,
) -> Result<HttpResponse, ApiError> {
    get_prayer_handler_impl(path, usecase).await
}

#[cfg(test)]
mod prayer_controller_tests {
    use super::*;
    use actix_web::test::{call_service, init_service, read_body_json, TestRequest};
    use actix_web::App;
    use pretty_assertions::assert_eq;
    use shared::Prayer;

    // Mock usecase backed by a fixed record set
    struct MockPrayerUseCase;

    fn records() -> Vec<Prayer> {
        vec![
            Prayer {
                id: "1".to_string(),
                title: "Doa Sebelum Makan".to_string(),
                arabic: "اَللّٰهُمَّ".to_string(),
                latin: "Alloohumma".to_string(),
                translation: "Ya Allah, berkahilah kami".to_string(),
            },
            Prayer {
                id: "3".to_string(),
                title: "Doa Masuk Kamar Mandi".to_string(),
                arabic: "اَللّٰهُمَّ".to_string(),
                latin: "Alloohumma innii".to_string(),
                translation: "Ya Allah, aku berlindung pada-Mu".to_string(),
            },
        ]
    }

    #[async_trait::async_trait]
    impl PrayerUseCase for MockPrayerUseCase {
        async fn list_prayers(&self) -> Result<Vec<Prayer>, ApiError> {
            Ok(records())
        }

        async fn search_prayers(&self, query: &str) -> Result<Vec<Prayer>, ApiError> {
            Ok(records().into_iter().filter(|p| p.matches(query)).collect())
        }

        async fn get_prayer(&self, id: &str) -> Result<Prayer, ApiError> {
            records()
                .into_iter()
                .find(|p| p.id == id)
                .ok_or_else(|| ApiError::not_found("Prayer not found"))
        }
    }

    macro_rules! test_app {
        () => {
            init_service(
                App::new()
                    .app_data(web::Data::new(MockPrayerUseCase))
                    .service(
                        web::scope("/api/prayers")
                            .service(web::resource("").route(
                                web::get().to(list_prayers_handler_impl::<MockPrayerUseCase>),
                            ))
                            .service(web::resource("/search").route(
                                web::get().to(search_prayers_handler_impl::<MockPrayerUseCase>),
                            ))
                            .service(web::resource("/{id}").route(
                                web::get().to(get_prayer_handler_impl::<MockPrayerUseCase>),
                            )),
                    ),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_list_prayers() {
        let app = test_app!();
        let res = call_service(&app, TestRequest::get().uri("/api/prayers").to_request()).await;
        assert_eq!(res.status().as_u16(), 200);

        let body: serde_json::Value = read_body_json(res).await;
        assert_eq!(body.as_array().unwrap().len(), 2);
        assert_eq!(body[0]["title"], "Doa Sebelum Makan");
    }

    #[actix_web::test]
    async fn test_search_prayers_is_routed_before_id_lookup() {
        let app = test_app!();
        let res = call_service(
            &app,
            TestRequest::get()
                .uri("/api/prayers/search?q=makan")
                .to_request(),
        )
        .await;
        assert_eq!(res.status().as_u16(), 200);

        let body: serde_json::Value = read_body_json(res).await;
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["id"], "1");
    }

    #[actix_web::test]
    async fn test_search_without_query_returns_all() {
        let app = test_app!();
        let res = call_service(
            &app,
            TestRequest::get().uri("/api/prayers/search").to_request(),
        )
        .await;
        assert_eq!(res.status().as_u16(), 200);

        let body: serde_json::Value = read_body_json(res).await;
        assert_eq!(body.as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_get_prayer_by_id() {
        let app = test_app!();
        let res = call_service(&app, TestRequest::get().uri("/api/prayers/3").to_request()).await;
        assert_eq!(res.status().as_u16(), 200);

        let body: serde_json::Value = read_body_json(res).await;
        assert_eq!(body["title"], "Doa Masuk Kamar Mandi");
    }

    #[actix_web::test]
    async fn test_get_unknown_prayer_is_404() {
        let app = test_app!();
        let res = call_service(&app, TestRequest::get().uri("/api/prayers/99").to_request()).await;
        assert_eq!(res.status().as_u16(), 404);

        let body: serde_json::Value = read_body_json(res).await;
        assert_eq!(body["error"], "Prayer not found");
    }
}
