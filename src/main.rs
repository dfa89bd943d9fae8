use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware, web};
use config::{Config, Environment, File};
use dotenvy::dotenv;
use log::{error, info, warn};

use cosmereview::db::AccessScope;
use cosmereview::models::config::ServerConfig;
use cosmereview::repository::DieselRepository;
use cosmereview::routes::{AppState, configure};

fn load_config() -> Result<ServerConfig, config::ConfigError> {
    let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    Config::builder()
        .add_source(File::with_name("config/default"))
        .add_source(File::with_name(&format!("config/{app_env}")).required(false))
        // APP_PORT=9000, APP_ALLOWED_ORIGINS=http://a,http://b
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("allowed_origins"),
        )
        .build()?
        .try_deserialize()
}

fn cors(allowed_origins: &[String]) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600);

    for origin in allowed_origins {
        cors = cors.allowed_origin(origin.trim());
    }

    cors
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let server_config = match load_config() {
        Ok(server_config) => server_config,
        Err(e) => {
            error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let anonymous =
        match DieselRepository::connect(&server_config.database_url, AccessScope::Anonymous) {
            Ok(repo) => repo,
            Err(e) => {
                error!("Failed to open read-only catalog store: {e}");
                std::process::exit(1);
            }
        };

    let privileged = if server_config.privileged_access {
        match DieselRepository::connect(&server_config.database_url, AccessScope::Privileged) {
            Ok(repo) => repo,
            Err(e) => {
                error!("Failed to open privileged catalog store: {e}");
                std::process::exit(1);
            }
        }
    } else {
        warn!("Privileged store access is disabled. Falling back to the read-only store.");
        anonymous.clone()
    };

    let state = web::Data::new(AppState {
        privileged,
        anonymous,
        product_sort: server_config.product_sort,
    });

    let bind_address = (server_config.address.clone(), server_config.port);
    info!(
        "Starting catalog server on {}:{} (default sort: {})",
        bind_address.0,
        bind_address.1,
        server_config.product_sort
    );

    let allowed_origins = server_config.allowed_origins.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(cors(&allowed_origins))
            .app_data(state.clone())
            .configure(configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
