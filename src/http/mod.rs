// ============================================================================
// HTTP Transport - actix-web routes for the customer service
// ============================================================================
//
//   GET    /customers                 list
//   GET    /customer/{id}             lookup by id
//   GET    /customer?email=           lookup by email
//   POST   /customer/create           create
//   PUT    /customer/update/{id}      update by id
//   PUT    /customer/update?email=    update by current email
//   DELETE /customer/delete/{id}      delete
//   GET    /health, /metrics          operational endpoints
//
// ============================================================================

mod error;
mod handlers;

use actix_web::web;

use crate::metrics::{health_handler, metrics_handler};

pub use error::ApiError;

/// Register every route. Expects `web::Data<CustomerService>` and
/// `web::Data<Arc<Metrics>>` to be registered on the app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/customers", web::get().to(handlers::list_customers))
        .route("/customer", web::get().to(handlers::get_customer_by_email))
        .route("/customer/create", web::post().to(handlers::create_customer))
        .route("/customer/update", web::put().to(handlers::update_customer_by_email))
        .route("/customer/update/{id}", web::put().to(handlers::update_customer_by_id))
        .route("/customer/delete", web::delete().to(handlers::delete_customer_without_id))
        .route("/customer/delete/{id}", web::delete().to(handlers::delete_customer))
        .route("/customer/{id}", web::get().to(handlers::get_customer_by_id))
        .route("/health", web::get().to(health_handler))
        .route("/metrics", web::get().to(metrics_handler));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::CustomerService;
    use crate::metrics::Metrics;
    use crate::persistence::InMemoryCustomerRepository;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn state() -> (web::Data<CustomerService>, web::Data<Arc<Metrics>>) {
        let metrics = Arc::new(Metrics::new().unwrap());
        let service = CustomerService::new(Arc::new(InMemoryCustomerRepository::new()), metrics.clone());
        (web::Data::new(service), web::Data::new(metrics))
    }

    macro_rules! app {
        () => {{
            let (service, metrics) = state();
            test::init_service(
                App::new()
                    .app_data(service)
                    .app_data(metrics)
                    .configure(configure),
            )
            .await
        }};
    }

    fn gustavo() -> Value {
        json!({ "name": "Gustavo", "email": "gustavo@gmail.com" })
    }

    #[actix_web::test]
    async fn test_create_then_list() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/customer/create")
            .set_json(gustavo())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "success": true, "entity": gustavo(), "messages": [] }));

        let req = test::TestRequest::get().uri("/customers").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!([gustavo()]));
    }

    #[actix_web::test]
    async fn test_create_with_empty_body_is_missing_payload() {
        let app = app!();

        let req = test::TestRequest::post().uri("/customer/create").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["messages"], json!(["O Payload está nulo."]));
    }

    #[actix_web::test]
    async fn test_create_with_malformed_body() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/customer/create")
            .set_payload("{\"name\":")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_create_duplicate_is_conflict() {
        let app = app!();

        for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
            let req = test::TestRequest::post()
                .uri("/customer/create")
                .set_json(gustavo())
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), expected);
        }
    }

    #[actix_web::test]
    async fn test_get_by_id_and_email() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/customer/create")
            .set_json(gustavo())
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get().uri("/customer/1").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["entity"], gustavo());

        let req = test::TestRequest::get()
            .uri("/customer?email=gustavo@gmail.com")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["entity"], gustavo());

        let req = test::TestRequest::get().uri("/customer/2").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["messages"], json!(["Customer not found"]));
    }

    #[actix_web::test]
    async fn test_update_by_id_and_by_email() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/customer/create")
            .set_json(gustavo())
            .to_request();
        test::call_service(&app, req).await;

        let roberto = json!({ "name": "Roberto", "email": "roberto@gmail.com" });
        let req = test::TestRequest::put()
            .uri("/customer/update/1")
            .set_json(roberto.clone())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::put()
            .uri("/customer/update?email=gustavo@gmail.com")
            .set_json(gustavo())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["messages"],
            json!(["Customer with email gustavo@gmail.com not exists"])
        );

        let req = test::TestRequest::put()
            .uri("/customer/update?email=roberto@gmail.com")
            .set_json(gustavo())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_delete() {
        let app = app!();

        let req = test::TestRequest::delete().uri("/customer/delete/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({ "success": true, "entity": null, "messages": ["Customer Deleted with success"] })
        );

        let req = test::TestRequest::delete().uri("/customer/delete").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["messages"], json!(["Customer deletion id is null."]));
    }

    #[actix_web::test]
    async fn test_health_and_metrics() {
        let app = app!();

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/customers").to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get().uri("/metrics").to_request();
        let body = test::call_and_read_body(&app, req).await;
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.contains("customer_operations_total"));
    }
}
