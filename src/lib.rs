#[cfg(feature = "server")]
use std::sync::Arc;

#[cfg(feature = "server")]
use actix_web::cookie::Key;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};
#[cfg(feature = "server")]
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
#[cfg(feature = "server")]
use tera::Tera;

#[cfg(feature = "server")]
use crate::domain::asset::Asset;
#[cfg(feature = "server")]
use crate::domain::category::Category;
#[cfg(feature = "server")]
use crate::domain::location::Location;
#[cfg(feature = "server")]
use crate::domain::maintenance::MaintenanceRecord;
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::{ApiClient, ListEndpoint};
#[cfg(feature = "server")]
use crate::routes::assets::{delete_asset, show_assets};
#[cfg(feature = "server")]
use crate::routes::categories::{delete_category, show_categories};
#[cfg(feature = "server")]
use crate::routes::locations::{delete_location, show_locations};
#[cfg(feature = "server")]
use crate::routes::main::index;
#[cfg(feature = "server")]
use crate::routes::maintenance::{delete_maintenance, show_maintenance};

pub mod domain;
pub mod dto;
#[cfg(feature = "server")]
pub mod error_conversions;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod models;
pub mod pagination;
#[cfg(feature = "server")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
pub mod search;
#[cfg(feature = "server")]
pub mod services;
#[cfg(feature = "server")]
pub mod session;
pub mod view;

/// List endpoints of every collection served by the application.
#[cfg(feature = "server")]
#[derive(Clone)]
pub struct Endpoints {
    pub assets: web::Data<dyn ListEndpoint<Record = Asset>>,
    pub categories: web::Data<dyn ListEndpoint<Record = Category>>,
    pub locations: web::Data<dyn ListEndpoint<Record = Location>>,
    pub maintenance: web::Data<dyn ListEndpoint<Record = MaintenanceRecord>>,
}

#[cfg(feature = "server")]
impl Endpoints {
    /// Endpoints talking to the inventory API through `api`.
    pub fn http(api: &Arc<ApiClient>) -> Self {
        let assets: Arc<dyn ListEndpoint<Record = Asset>> = Arc::new(api.endpoint::<Asset>());
        let categories: Arc<dyn ListEndpoint<Record = Category>> =
            Arc::new(api.endpoint::<Category>());
        let locations: Arc<dyn ListEndpoint<Record = Location>> =
            Arc::new(api.endpoint::<Location>());
        let maintenance: Arc<dyn ListEndpoint<Record = MaintenanceRecord>> =
            Arc::new(api.endpoint::<MaintenanceRecord>());

        Self {
            assets: web::Data::from(assets),
            categories: web::Data::from(categories),
            locations: web::Data::from(locations),
            maintenance: web::Data::from(maintenance),
        }
    }
}

/// Registers every page and action of the application.
#[cfg(feature = "server")]
pub fn configure(cfg: &mut web::ServiceConfig, endpoints: &Endpoints) {
    cfg.app_data(endpoints.assets.clone())
        .app_data(endpoints.categories.clone())
        .app_data(endpoints.locations.clone())
        .app_data(endpoints.maintenance.clone())
        .service(index)
        .service(show_assets)
        .service(delete_asset)
        .service(show_categories)
        .service(delete_category)
        .service(show_locations)
        .service(delete_location)
        .service(show_maintenance)
        .service(delete_maintenance);
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let api = ApiClient::new(server_config.api_client_config())
        .map_err(|e| std::io::Error::other(format!("Failed to build API client: {e}")))?;
    let endpoints = Endpoints::http(&Arc::new(api));

    // Flash messages are signed with the configured secret.
    let secret_key = Key::try_from(server_config.secret.as_bytes())
        .map_err(|e| std::io::Error::other(format!("Invalid secret key: {e}")))?;

    let message_store = CookieMessageStore::builder(secret_key).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Serving inventory lists from {} on {}:{}",
        server_config.api_base_url,
        bind_address.0,
        bind_address.1
    );

    HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .configure(|cfg| configure(cfg, &endpoints))
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
