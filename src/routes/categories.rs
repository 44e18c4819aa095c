use actix_web::{HttpRequest, Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::domain::category::Category;
use crate::forms::list::ListQueryForm;
use crate::models::config::ServerConfig;
use crate::repository::ListEndpoint;
use crate::routes::list;

#[get("/categories")]
pub async fn show_categories(
    req: HttpRequest,
    web::Query(form): web::Query<ListQueryForm>,
    endpoint: web::Data<dyn ListEndpoint<Record = Category>>,
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

#[post("/categories/{category_id}/delete")]
pub async fn delete_category(
    category_id: web::Path<i64>,
    endpoint: web::Data<dyn ListEndpoint<Record = Category>>,
) -> impl Responder {
    list::delete_from_list(endpoint.get_ref(), category_id.into_inner()).await
}
