//! Handlers shared by every collection page.

use actix_web::{HttpRequest, HttpResponse};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::Resource;
use crate::dto::table::Tabular;
use crate::forms::list::{ListQueryForm, MAX_SEARCH_LENGTH};
use crate::repository::ListEndpoint;
use crate::repository::errors::RepositoryError;
use crate::routes::{base_context, redirect, render_template, wants_partial};
use crate::services::{ServiceError, records};

const PAGE_TEMPLATE: &str = "resources/index.html";
const PARTIAL_TEMPLATE: &str = "resources/_list.html";

fn list_location<T: Resource>() -> String {
    format!("/{}", T::PATH)
}

/// Renders one page of `T` records, or just the list fragment when the
/// request carries the partial header.
pub async fn show_list<T: Tabular>(
    req: &HttpRequest,
    endpoint: &dyn ListEndpoint<Record = T>,
    form: &ListQueryForm,
    flash_messages: &IncomingFlashMessages,
    tera: &Tera,
    per_page: u32,
) -> HttpResponse {
    match records::load_list_page(endpoint, form, per_page).await {
        Ok(data) => {
            let mut context = base_context(flash_messages, T::PATH);
            context.insert("list", &data);
            context.insert("search_max_length", &MAX_SEARCH_LENGTH);

            let template = if wants_partial(req) {
                PARTIAL_TEMPLATE
            } else {
                PAGE_TEMPLATE
            };
            render_template(tera, template, &context)
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect(&list_location::<T>())
        }
        Err(err) => {
            log::error!("Failed to show {}: {err}", T::PATH);
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Deletes one `T` record and sends the user back to its list.
pub async fn delete_from_list<T: Resource>(
    endpoint: &dyn ListEndpoint<Record = T>,
    id: i64,
) -> HttpResponse {
    match records::delete_record(endpoint, id).await {
        Ok(()) => {
            FlashMessage::success(format!("{} deleted.", T::SINGULAR)).send();
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error(format!("{} not found.", T::SINGULAR)).send();
        }
        Err(ServiceError::TypeConstraint(message)) => {
            FlashMessage::error(message).send();
        }
        Err(ServiceError::Repository(RepositoryError::Rejected { message, .. })) => {
            FlashMessage::error(format!(
                "Failed to delete {}: {message}",
                T::SINGULAR.to_lowercase()
            ))
            .send();
        }
        Err(err) => {
            log::error!("Failed to delete {} {id}: {err}", T::SINGULAR);
            FlashMessage::error(format!(
                "Failed to delete {}.",
                T::SINGULAR.to_lowercase()
            ))
            .send();
        }
    }
    redirect(&list_location::<T>())
}
