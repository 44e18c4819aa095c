use actix_web::{HttpRequest, Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::domain::asset::Asset;
use crate::forms::list::ListQueryForm;
use crate::models::config::ServerConfig;
use crate::repository::ListEndpoint;
use crate::routes::list;

#[get("/assets")]
pub async fn show_assets(
    req: HttpRequest,
    web::Query(form): web::Query<ListQueryForm>,
    endpoint: web::Data<dyn ListEndpoint<Record = Asset>>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    list::show_list(
        &req,
        endpoint.get_ref(),
        &form,
        &flash_messages,
        &tera,
        server_config.per_page,
    )
    .await
}

#[post("/assets/{asset_id}/delete")]
pub async fn delete_asset(
    asset_id: web::Path<i64>,
    endpoint: web::Data<dyn ListEndpoint<Record = Asset>>,
) -> impl Responder {
    list::delete_from_list(endpoint.get_ref(), asset_id.into_inner()).await
}
