use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use autoprice::config::{Config, LogFormat};
use autoprice::locations::CityDirectory;
use autoprice::middleware::{self, RequestId};
use autoprice::modules::{health, pricing, rto};
use autoprice::pricing::{OnRoadPriceService, PriceComposer};
use autoprice::rto::RateResolver;
use autoprice::variants::CmsClient;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env()?;
    config.validate()?;

    init_tracing(&config);

    tracing::info!("Starting Autoprice on-road price service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("TCS policy: {}", config.pricing.tcs_policy);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let resolver = RateResolver::standard().with_tcs_policy(config.pricing.tcs_policy);
    let cms = CmsClient::new(&config.cms)?;
    let service = Arc::new(OnRoadPriceService::new(
        Arc::new(cms),
        Arc::new(CityDirectory::new()),
        PriceComposer::new(resolver.clone()),
    ));

    if config.is_production() && config.app.cors_allowed_origin.is_none() {
        tracing::warn!("CORS_ALLOWED_ORIGIN not set, accepting requests from any origin");
    }

    let bind_address = config.server.bind_address();
    let cors_origin = config.app.cors_allowed_origin.clone();
    let server = HttpServer::new(move || {
        let cors = match &cors_origin {
            Some(origin) => Cors::default()
                .allowed_origin(origin)
                .allowed_methods(vec!["GET", "POST"])
                .allow_any_header(),
            None => Cors::permissive(),
        };

        App::new()
            .wrap(cors)
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .app_data(middleware::json_config())
            .app_data(middleware::query_config())
            .app_data(web::Data::new(service.clone()))
            .app_data(web::Data::new(resolver.clone()))
            .configure(health::controllers::configure)
            .configure(pricing::controllers::configure)
            .configure(rto::controllers::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("autoprice={},actix_web=info", config.app.log_level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    match config.app.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
