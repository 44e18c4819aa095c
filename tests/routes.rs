use actix_web::cookie::Key;
use actix_web::dev::ServiceResponse;
use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use actix_web_flash_messages::storage::CookieMessageStore;
use actix_web_flash_messages::{FlashMessagesFramework, Level};
use tera::Tera;

use asset_inventory::models::config::ServerConfig;
use asset_inventory::routes::alert_level_to_str;
use asset_inventory::routes::assets::{delete_asset, show_assets};
use asset_inventory::routes::main::index;

mod common;

use common::{FakeAssets, PER_PAGE, numbered_assets, shared_endpoint};

fn server_config() -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".to_string(),
        port: 8080,
        templates_dir: "templates/**/*".to_string(),
        secret: "s".repeat(64),
        api_base_url: "http://api.test".to_string(),
        per_page: PER_PAGE,
        connect_timeout_ms: 1000,
        read_timeout_ms: 1000,
    }
}

macro_rules! init_app {
    ($fake:expr) => {{
        let store = CookieMessageStore::builder(Key::generate()).build();
        let tera = Tera::new("templates/**/*").unwrap();

        test::init_service(
            App::new()
                .wrap(FlashMessagesFramework::builder(store).build())
                .app_data(web::Data::from(shared_endpoint($fake)))
                .app_data(web::Data::new(tera))
                .app_data(web::Data::new(server_config()))
                .service(index)
                .service(show_assets)
                .service(delete_asset),
        )
        .await
    }};
}

fn location<B>(resp: &ServiceResponse<B>) -> &str {
    resp.headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
}

#[core::prelude::v1::test]
fn test_alert_level_to_str_mappings() {
    assert_eq!(alert_level_to_str(&Level::Error), "danger");
    assert_eq!(alert_level_to_str(&Level::Warning), "warning");
    assert_eq!(alert_level_to_str(&Level::Success), "success");
    assert_eq!(alert_level_to_str(&Level::Info), "info");
    assert_eq!(alert_level_to_str(&Level::Debug), "info");
}

#[actix_web::test]
async fn root_redirects_to_assets() {
    let fake = FakeAssets::new(Vec::new()).shared();
    let app = init_app!(&fake);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/assets");
}

#[actix_web::test]
async fn list_page_renders_the_first_page() {
    let fake = FakeAssets::new(numbered_assets(40)).shared();
    let app = init_app!(&fake);

    let req = test::TestRequest::get().uri("/assets").to_request();
    let body = test::call_and_read_body(&app, req).await;
    let body = String::from_utf8(body.to_vec()).unwrap();

    assert!(body.contains("<!doctype html>"));
    assert!(body.contains("Asset 15"));
    assert!(!body.contains("Asset 16"));
    assert!(body.contains("Showing 1 to 15 of 40 results"));
    assert_eq!(fake.queries()[0].per_page, Some(PER_PAGE));
}

#[actix_web::test]
async fn partial_header_returns_only_the_list() {
    let fake = FakeAssets::new(numbered_assets(40)).shared();
    let app = init_app!(&fake);

    let req = test::TestRequest::get()
        .uri("/assets?page=2")
        .insert_header(("X-Partial", "list"))
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    let body = String::from_utf8(body.to_vec()).unwrap();

    assert!(!body.contains("<!doctype html>"));
    assert!(body.contains("Asset 16"));
    assert!(body.contains("Showing 16 to 30 of 40 results"));
}

#[actix_web::test]
async fn search_is_normalized_and_kept_in_page_links() {
    let fake = FakeAssets::new(numbered_assets(40)).shared();
    let app = init_app!(&fake);

    let req = test::TestRequest::get()
        .uri("/assets?search=%20asset%20&page=2")
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    let body = String::from_utf8(body.to_vec()).unwrap();

    assert_eq!(fake.searches(), vec![Some("asset".to_string())]);
    assert!(body.contains("page=3&amp;search=asset"));
}

#[actix_web::test]
async fn list_fragment_carries_the_applied_filter() {
    let fake = FakeAssets::new(numbered_assets(40)).shared();
    let app = init_app!(&fake);

    let req = test::TestRequest::get()
        .uri("/assets?search=%20asset%201%20")
        .insert_header(("X-Partial", "list"))
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    let body = String::from_utf8(body.to_vec()).unwrap();
    assert!(body.contains(r#"data-search="asset 1""#));

    let req = test::TestRequest::get().uri("/assets").to_request();
    let body = test::call_and_read_body(&app, req).await;
    let body = String::from_utf8(body.to_vec()).unwrap();
    assert!(body.contains(r#"data-search="""#));
}

#[actix_web::test]
async fn empty_search_result_shows_a_message() {
    let fake = FakeAssets::new(numbered_assets(5)).shared();
    let app = init_app!(&fake);

    let req = test::TestRequest::get()
        .uri("/assets?search=printer")
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    let body = String::from_utf8(body.to_vec()).unwrap();

    assert!(body.contains("No assets match"));
    assert!(body.contains("printer"));
}

#[actix_web::test]
async fn invalid_page_redirects_without_fetching() {
    let fake = FakeAssets::new(numbered_assets(5)).shared();
    let app = init_app!(&fake);

    let req = test::TestRequest::get().uri("/assets?page=0").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/assets");
    assert!(fake.queries().is_empty());
}

#[actix_web::test]
async fn endpoint_failure_is_a_server_error() {
    let fake = FakeAssets::new(numbered_assets(5)).failing().shared();
    let app = init_app!(&fake);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/assets").to_request()).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_web::test]
async fn failed_partial_refresh_is_an_error_status() {
    let fake = FakeAssets::new(numbered_assets(5)).failing().shared();
    let app = init_app!(&fake);

    let req = test::TestRequest::get()
        .uri("/assets?search=laptop")
        .insert_header(("X-Partial", "list"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_server_error());
    let body = test::read_body(resp).await;
    assert!(!String::from_utf8(body.to_vec()).unwrap().contains("<tbody>"));
}

#[actix_web::test]
async fn delete_forwards_the_id_and_redirects_to_the_list() {
    let fake = FakeAssets::new(numbered_assets(5)).shared();
    let app = init_app!(&fake);

    let req = test::TestRequest::post().uri("/assets/3/delete").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/assets");
    assert_eq!(
        fake.deletes().iter().map(|id| id.get()).collect::<Vec<_>>(),
        vec![3]
    );
}

#[actix_web::test]
async fn delete_with_invalid_id_never_reaches_the_api() {
    let fake = FakeAssets::new(numbered_assets(5)).shared();
    let app = init_app!(&fake);

    let req = test::TestRequest::post().uri("/assets/0/delete").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert!(fake.deletes().is_empty());
}

#[actix_web::test]
async fn delete_rejected_by_the_api_flashes_an_error() {
    let fake = FakeAssets::new(numbered_assets(5)).rejecting(4).shared();
    let app = init_app!(&fake);

    let req = test::TestRequest::post().uri("/assets/4/delete").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/assets");
    let cookies: Vec<_> = resp
        .response()
        .cookies()
        .map(|cookie| cookie.into_owned())
        .collect();
    assert!(!cookies.is_empty());

    let mut follow_up = test::TestRequest::get().uri("/assets");
    for cookie in cookies {
        follow_up = follow_up.cookie(cookie);
    }
    let body = test::call_and_read_body(&app, follow_up.to_request()).await;
    let body = String::from_utf8(body.to_vec()).unwrap();

    assert!(body.contains("Asset 4"));
    assert!(body.contains("alert-danger"));
    assert!(body.contains("Failed to delete asset: asset is assigned"));
    assert!(!body.contains("Request rejected with status"));
}
