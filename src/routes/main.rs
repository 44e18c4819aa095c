use actix_web::{Responder, get};

use crate::routes::redirect;

/// Assets are the landing collection.
#[get("/")]
pub async fn index() -> impl Responder {
    redirect("/assets")
}
