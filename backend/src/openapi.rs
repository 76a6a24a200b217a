use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::health::health_check,
        crate::metrics::metrics_handler,
        crate::docs::api_docs_handler,
        crate::quran::controller::list_surahs_handler,
        crate::quran::controller::get_surah_handler,
        crate::prayer::controller::list_prayers_handler,
        crate::prayer::controller::search_prayers_handler,
        crate::prayer::controller::get_prayer_handler,
        crate::prayer_times::controller::timings_by_city_handler,
        crate::prayer_times::controller::timings_by_coordinates_handler,
        crate::calendar::controller::hijri_calendar_handler,
        crate::bookmarks::controller::list_bookmarks_handler,
    ),
    components(schemas(
        crate::health::HealthResponse,
    )),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "observability", description = "Metrics exposition"),
        (name = "docs", description = "API self-description"),
        (name = "quran", description = "Normalized Quran text"),
        (name = "prayers", description = "Duas (supplications)"),
        (name = "prayer-times", description = "Daily prayer times"),
        (name = "calendar", description = "Hijri calendar"),
        (name = "bookmarks", description = "Bookmark placeholder"),
    ),
    info(
        title = "IslamApp Normalization Proxy",
        description = "A thin proxy that reshapes upstream Quran, dua, and prayer-times providers into one stable schema.\n\nAll error responses are `{\"error\": string}`.",
        version = "0.3.4",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "http://localhost:3001", description = "Development server"),
    )
)]
pub struct ApiDoc;
