//! Integration tests for the product catalog endpoints

mod common;

use actix_web::test;
use pc_api::app::create_app;
use pc_shared::config::CorsConfig;
use serde_json::Value;

use common::{
    admin_token, as_refs, bearer, context, context_with_limit, lamp_fields, multipart_body,
    multipart_content_type, token, SECRET,
};

#[actix_web::test]
async fn test_health_check() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::development())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_create_product_with_image() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::development())).await;

    let fields = lamp_fields("Lighting");
    let body = multipart_body(&as_refs(&fields), Some(("lamp.png", &b"\x89PNG-bytes"[..])));
    let req = test::TestRequest::post()
        .uri("/api/v1/products")
        .insert_header(bearer(&admin_token()))
        .insert_header(multipart_content_type())
        .set_payload(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    let product = &body["data"];
    assert_eq!(product["name"], "Desk lamp");
    assert_eq!(product["price"], "24.90");
    assert_eq!(product["stock"], 12);
    assert_eq!(product["category_name"], "Lighting");

    let image = product["image"].as_str().unwrap();
    let file_name = image.strip_prefix("/images/").unwrap();
    assert!(file_name.ends_with("_lamp.png"));
    let stored = std::fs::read(ctx.image_dir.path().join(file_name)).unwrap();
    assert_eq!(stored, b"\x89PNG-bytes");
}

#[actix_web::test]
async fn test_create_then_get_and_list() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::development())).await;

    let fields = lamp_fields("Lighting");
    let req = test::TestRequest::post()
        .uri("/api/v1/products")
        .insert_header(bearer(&admin_token()))
        .insert_header(multipart_content_type())
        .set_payload(multipart_body(&as_refs(&fields), None))
        .to_request();
    let created: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let id = created["data"]["id"].as_i64().unwrap();
    assert!(created["data"].get("image").is_none());

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/products/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let fetched: Value = test::read_body_json(resp).await;
    assert_eq!(fetched["data"], created["data"]);

    let req = test::TestRequest::get().uri("/api/v1/products").to_request();
    let listed: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_list_empty_catalog() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::development())).await;

    let req = test::TestRequest::get().uri("/api/v1/products").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"], serde_json::json!([]));
}

#[actix_web::test]
async fn test_create_requires_token() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::development())).await;

    let fields = lamp_fields("Lighting");
    let req = test::TestRequest::post()
        .uri("/api/v1/products")
        .insert_header(multipart_content_type())
        .set_payload(multipart_body(&as_refs(&fields), None))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_create_requires_admin_role() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::development())).await;

    let customer = token("user@shop.test", Some("CUSTOMER"), 3600, SECRET);
    let fields = lamp_fields("Lighting");
    let req = test::TestRequest::post()
        .uri("/api/v1/products")
        .insert_header(bearer(&customer))
        .insert_header(multipart_content_type())
        .set_payload(multipart_body(&as_refs(&fields), None))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "FORBIDDEN");
}

#[actix_web::test]
async fn test_create_unknown_category_is_not_found() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::development())).await;

    let fields = lamp_fields("Garden");
    let req = test::TestRequest::post()
        .uri("/api/v1/products")
        .insert_header(bearer(&admin_token()))
        .insert_header(multipart_content_type())
        .set_payload(multipart_body(&as_refs(&fields), Some(("lamp.png", &b"bytes"[..]))))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "NOT_FOUND");
    assert!(body["message"].as_str().unwrap().contains("Garden"));

    // Nothing was written for the rejected product
    let entries = std::fs::read_dir(ctx.image_dir.path()).unwrap().count();
    assert_eq!(entries, 0);
}

#[actix_web::test]
async fn test_create_rejects_malformed_numbers() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::development())).await;

    let mut fields = lamp_fields("Lighting");
    fields[2].1 = "twenty".to_string();
    let req = test::TestRequest::post()
        .uri("/api/v1/products")
        .insert_header(bearer(&admin_token()))
        .insert_header(multipart_content_type())
        .set_payload(multipart_body(&as_refs(&fields), None))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_create_rejects_oversized_body() {
    let ctx = context_with_limit(64);
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::development())).await;

    let fields = lamp_fields("Lighting");
    let image = vec![7u8; 1024];
    let req = test::TestRequest::post()
        .uri("/api/v1/products")
        .insert_header(bearer(&admin_token()))
        .insert_header(multipart_content_type())
        .set_payload(multipart_body(&as_refs(&fields), Some(("big.png", image.as_slice()))))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 413);
}

#[actix_web::test]
async fn test_update_keeps_image_when_none_sent() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::development())).await;

    let fields = lamp_fields("Lighting");
    let req = test::TestRequest::post()
        .uri("/api/v1/products")
        .insert_header(bearer(&admin_token()))
        .insert_header(multipart_content_type())
        .set_payload(multipart_body(&as_refs(&fields), Some(("lamp.png", &b"bytes"[..]))))
        .to_request();
    let created: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let mut fields = lamp_fields("Books");
    fields[0].1 = "Reading lamp".to_string();
    fields[3].1 = "0".to_string();
    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/products/{}", id))
        .insert_header(bearer(&admin_token()))
        .insert_header(multipart_content_type())
        .set_payload(multipart_body(&as_refs(&fields), None))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["data"]["name"], "Reading lamp");
    assert_eq!(updated["data"]["stock"], 0);
    assert_eq!(updated["data"]["category_name"], "Books");
    assert_eq!(updated["data"]["image"], created["data"]["image"]);
}

#[actix_web::test]
async fn test_update_missing_product_is_not_found() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::development())).await;

    let fields = lamp_fields("Lighting");
    let req = test::TestRequest::put()
        .uri("/api/v1/products/404")
        .insert_header(bearer(&admin_token()))
        .insert_header(multipart_content_type())
        .set_payload(multipart_body(&as_refs(&fields), None))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_delete_flow() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::development())).await;

    let fields = lamp_fields("Lighting");
    let req = test::TestRequest::post()
        .uri("/api/v1/products")
        .insert_header(bearer(&admin_token()))
        .insert_header(multipart_content_type())
        .set_payload(multipart_body(&as_refs(&fields), None))
        .to_request();
    let created: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let uri = format!("/api/v1/products/{}", created["data"]["id"].as_i64().unwrap());

    let req = test::TestRequest::delete()
        .uri(&uri)
        .insert_header(bearer(&admin_token()))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 204);

    let req = test::TestRequest::get().uri(&uri).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 404);

    let req = test::TestRequest::delete()
        .uri(&uri)
        .insert_header(bearer(&admin_token()))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 404);
}

#[actix_web::test]
async fn test_delete_requires_token() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::development())).await;

    let req = test::TestRequest::delete().uri("/api/v1/products/1").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 401);
}

#[actix_web::test]
async fn test_unknown_route_is_not_found() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::development())).await;

    let req = test::TestRequest::get().uri("/api/v2/anything").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 404);
}
