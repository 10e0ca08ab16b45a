use actix_web::{App, test, web};
use serde_json::{Value, json};

use pharma_catalog::repository::DieselRepository;
use pharma_catalog::routes;

mod common;

macro_rules! init_app {
    ($test_db:expr) => {{
        let repo = DieselRepository::new($test_db.pool());
        test::init_service(
            App::new()
                .app_data(web::Data::new(repo))
                .service(web::scope("/api/v1").configure(routes::configure)),
        )
        .await
    }};
}

#[actix_web::test]
async fn test_family_endpoints() {
    let test_db = common::TestDb::new("test_family_endpoints.db");
    let app = init_app!(&test_db);

    let req = test::TestRequest::post()
        .uri("/api/v1/families")
        .set_json(json!({"name": "Antalgiques", "description": "Douleur"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["name"], "Antalgiques");

    // Duplicate name is a conflict.
    let req = test::TestRequest::post()
        .uri("/api/v1/families")
        .set_json(json!({"name": "Antalgiques"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 409);

    // Blank name fails validation.
    let req = test::TestRequest::post()
        .uri("/api/v1/families")
        .set_json(json!({"name": ""}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 422);

    let req = test::TestRequest::get()
        .uri("/api/v1/families?search=anta")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let page: Value = test::read_body_json(resp).await;
    assert_eq!(page["total"], 1);
    assert_eq!(page["current_page"], 1);
    assert_eq!(page["last_page"], 1);

    // Out-of-range pagination is a bad request.
    let req = test::TestRequest::get()
        .uri("/api/v1/families?page=0")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid value for page");

    let req = test::TestRequest::get()
        .uri("/api/v1/families/9999")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_medicine_endpoints_generate_codes() {
    let test_db = common::TestDb::new("test_medicine_endpoints.db");
    let app = init_app!(&test_db);

    let req = test::TestRequest::post()
        .uri("/api/v1/medicines")
        .set_json(json!({"name": "Paracétamol 500mg"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let first: Value = test::read_body_json(resp).await;
    assert_eq!(first["code"], "PAR001");

    let req = test::TestRequest::post()
        .uri("/api/v1/medicines")
        .set_json(json!({"name": "Paracétamol 1g"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let second: Value = test::read_body_json(resp).await;
    assert_eq!(second["code"], "PAR002");

    // The detail payload carries the packagings list.
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/medicines/{}", first["id"]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let details: Value = test::read_body_json(resp).await;
    assert_eq!(details["code"], "PAR001");
    assert!(details["packagings"].as_array().unwrap().is_empty());

    // Mass destroy refuses the whole batch on an unknown id.
    let req = test::TestRequest::post()
        .uri("/api/v1/medicines/mass-destroy")
        .set_json(json!({"ids": [first["id"], 9999]}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 422);

    let req = test::TestRequest::post()
        .uri("/api/v1/medicines/mass-destroy")
        .set_json(json!({"ids": [first["id"], second["id"]]}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["deleted"], 2);
}

#[actix_web::test]
async fn test_packaging_bulk_creation() {
    let test_db = common::TestDb::new("test_packaging_endpoints.db");
    let app = init_app!(&test_db);

    let medicine: Value = test::read_body_json(
        test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/medicines")
                .set_json(json!({"name": "Amoxicilline"}))
                .to_request(),
        )
        .await,
    )
    .await;
    let form: Value = test::read_body_json(
        test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/dosage-forms")
                .set_json(json!({"name": "Gélule"}))
                .to_request(),
        )
        .await,
    )
    .await;
    let box_unit: Value = test::read_body_json(
        test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/units")
                .set_json(json!({"name": "boîte", "kind": "container"}))
                .to_request(),
        )
        .await,
    )
    .await;
    let capsule_unit: Value = test::read_body_json(
        test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/units")
                .set_json(json!({"name": "gélule", "kind": "primary"}))
                .to_request(),
        )
        .await,
    )
    .await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/medicines/{}/packagings", medicine["id"]))
        .set_json(json!({
            "items": [{
                "form_id": form["id"],
                "packaging_unit_id": box_unit["id"],
                "content_unit_id": capsule_unit["id"],
                "content_quantity": 12.0,
                "price": 4.5
            }]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let packagings: Value = test::read_body_json(resp).await;
    assert_eq!(packagings.as_array().unwrap().len(), 1);
    assert_eq!(packagings[0]["medicine_code"], medicine["code"]);
    assert_eq!(packagings[0]["form_name"], "Gélule");

    // An unknown medicine id is a 404, not a constraint error.
    let req = test::TestRequest::post()
        .uri("/api/v1/medicines/9999/packagings")
        .set_json(json!({
            "items": [{
                "form_id": form["id"],
                "packaging_unit_id": box_unit["id"],
                "content_unit_id": capsule_unit["id"],
                "content_quantity": 12.0,
                "price": 4.5
            }]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}
