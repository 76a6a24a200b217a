use actix_web::{web, App, HttpServer};
use backend::config::QuranProviderKind;
use backend::quran::provider::QuranProvider;
use backend::third_party::{
    AladhanService, AlquranCloudService, DoaApiService, EquranService, UpstreamClient,
};
use log::error;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Load configuration from environment variables
    let config = match backend::config::Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()));
        }
    };

    // One HTTP helper shared by every upstream adapter
    let upstream_client = UpstreamClient::from_config(&config.upstream);

    // Quran text provider is selected by configuration
    let quran_provider: Arc<dyn QuranProvider> = match config.quran.provider {
        QuranProviderKind::Equran => Arc::new(EquranService::new(
            config.quran.equran_api_url.clone(),
            upstream_client.clone(),
        )),
        QuranProviderKind::AlquranCloud => Arc::new(AlquranCloudService::new(
            config.quran.alquran_cloud_api_url.clone(),
            upstream_client.clone(),
        )),
    };
    let quran_usecase = web::Data::new(backend::quran::QuranUseCaseImpl::new(quran_provider));

    let dua_provider = Arc::new(DoaApiService::new(
        config.dua.api_url.clone(),
        upstream_client.clone(),
    ));
    let prayer_usecase = web::Data::new(backend::prayer::PrayerUseCaseImpl::new(dua_provider));

    let aladhan = Arc::new(AladhanService::new(
        config.aladhan.api_url.clone(),
        config.aladhan.method,
        upstream_client,
    ));
    let prayer_times_usecase = web::Data::new(backend::prayer_times::PrayerTimesUseCaseImpl::new(
        aladhan.clone(),
    ));
    let calendar_usecase = web::Data::new(backend::calendar::CalendarUseCaseImpl::new(aladhan));

    let config_data = web::Data::new(config.clone());

    log::info!(
        "Starting server on {}:{}",
        config.server.host,
        config.server.port
    );

    let workers = config.server.workers;
    let bind_addr = (config.server.host.clone(), config.server.port);

    HttpServer::new(move || {
        App::new()
            .wrap(backend::middleware::Logger)
            .wrap(backend::middleware::cors_middleware())
            .app_data(config_data.clone())
            .app_data(quran_usecase.clone())
            .app_data(prayer_usecase.clone())
            .app_data(prayer_times_usecase.clone())
            .app_data(calendar_usecase.clone())
            .service(backend::health::health_check)
            .service(backend::metrics::metrics_handler)
            .service(backend::docs::api_docs_handler)
            .service(
                web::scope("/api/quran/surahs")
                    .service(backend::quran::controller::list_surahs_handler)
                    .service(backend::quran::controller::get_surah_handler),
            )
            .service(
                web::scope("/api/prayers")
                    .service(backend::prayer::controller::search_prayers_handler)
                    .service(backend::prayer::controller::list_prayers_handler)
                    .service(backend::prayer::controller::get_prayer_handler),
            )
            .service(
                web::scope("/api/prayer-times")
                    .service(backend::prayer_times::controller::timings_by_city_handler)
                    .service(backend::prayer_times::controller::timings_by_coordinates_handler),
            )
            .service(
                web::scope("/api/calendar")
                    .service(backend::calendar::controller::hijri_calendar_handler),
            )
            .service(
                web::scope("/api/bookmarks")
                    .service(backend::bookmarks::controller::list_bookmarks_handler),
            )
            .default_service(web::route().to(backend::fallback::default_handler))
    })
    .workers(workers)
    .bind(bind_addr)?
    .run()
    .await
}
