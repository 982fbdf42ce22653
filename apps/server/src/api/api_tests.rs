//! End-to-end tests over the in-process router: auth extraction, role
//! gating, the negotiation flow, and the stable error codes clients key on.

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tower::ServiceExt;

    use crate::api::app_router;
    use crate::config::Config;
    use crate::main_lib::build_state;

    async fn test_app() -> (Router, TempDir) {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = Config {
            listen_addr: "127.0.0.1:0".to_string(),
            db_path: dir
                .path()
                .join("fabriq-test.db")
                .to_string_lossy()
                .to_string(),
            cors_origin: None,
            notify_webhook_url: None,
            accessory_catalog_path: None,
        };
        let state = build_state(&config).await.expect("build state");
        (app_router(state, &config), dir)
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        principal: Option<(&str, &str)>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some((id, role)) = principal {
            builder = builder
                .header("x-principal-id", id)
                .header("x-principal-role", role);
        }
        let request = match body {
            Some(value) => builder
                .header("content-type", "application/json")
                .body(Body::from(value.to_string()))
                .expect("request"),
            None => builder.body(Body::empty()).expect("request"),
        };

        let response = app.clone().oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json body")
        };
        (status, value)
    }

    /// Manual-priced 2x1 item: baseline is easy to read (2 * price/m2).
    fn order_body(price_per_area: i64, days: i64) -> Value {
        json!({
            "kind": "project",
            "days": days,
            "primaryItem": {
                "productType": "door",
                "material": "steel",
                "width": 2.0,
                "height": 1.0,
                "quantity": 1,
                "priceMode": "manual",
                "pricePerArea": price_per_area,
            },
        })
    }

    async fn create_order(app: &Router, owner: &str) -> String {
        let (status, body) = send(
            app,
            Method::POST,
            "/api/orders",
            Some((owner, "customer")),
            Some(order_body(500, 0)),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "create order failed: {}", body);
        assert_eq!(body["total"], 1000);
        body["id"].as_str().expect("order id").to_string()
    }

    fn bid_body(order_id: &str, price: i64, days: i64) -> Value {
        json!({
            "targetKind": "project",
            "targetId": order_id,
            "price": price,
            "days": days,
            "message": "can start monday",
        })
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _dir) = test_app().await;
        let (status, body) = send(&app, Method::GET, "/api/health", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_pricing_is_public_and_matches_reference() {
        let (app, _dir) = test_app().await;
        let item = json!({
            "productType": "door",
            "subtype": "normal",
            "material": "steel",
            "color": "white",
            "width": 2.5,
            "height": 1.2,
            "quantity": 3,
            "accessoryIds": ["handle"],
        });
        let (status, body) =
            send(&app, Method::POST, "/api/pricing/item-total", None, Some(item)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 4560);
        assert_eq!(body["effectivePricePerArea"], 500.0);
        assert_eq!(body["complete"], true);
    }

    #[tokio::test]
    async fn test_orders_require_a_principal() {
        let (app, _dir) = test_app().await;
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/orders",
            None,
            Some(order_body(500, 0)),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "UNAUTHENTICATED");
    }

    #[tokio::test]
    async fn test_vendors_cannot_create_orders() {
        let (app, _dir) = test_app().await;
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/orders",
            Some(("v1", "vendor")),
            Some(order_body(500, 0)),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"]["code"], "FORBIDDEN");
    }

    #[tokio::test]
    async fn test_incomplete_order_is_rejected_with_code() {
        let (app, _dir) = test_app().await;
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/orders",
            Some(("c1", "customer")),
            Some(json!({
                "kind": "project",
                "primaryItem": { "productType": "door", "width": 2.0 },
            })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "INCOMPLETE_ORDER");
    }

    #[tokio::test]
    async fn test_bid_bounds_carry_details() {
        let (app, _dir) = test_app().await;
        let order_id = create_order(&app, "c1").await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/proposals",
            Some(("v1", "vendor")),
            Some(bid_body(&order_id, 999, 5)),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "PRICE_OUT_OF_RANGE");
        assert_eq!(body["error"]["details"]["min"], 1000);
        assert_eq!(body["error"]["details"]["max"], 2000);

        // Both boundary values are accepted.
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/proposals",
            Some(("v1", "vendor")),
            Some(bid_body(&order_id, 2000, 5)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_duplicate_bid_conflicts() {
        let (app, _dir) = test_app().await;
        let order_id = create_order(&app, "c1").await;

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/proposals",
            Some(("v1", "vendor")),
            Some(bid_body(&order_id, 1000, 5)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/proposals",
            Some(("v1", "vendor")),
            Some(bid_body(&order_id, 1500, 5)),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "DUPLICATE_PROPOSAL");
    }

    #[tokio::test]
    async fn test_customers_cannot_bid() {
        let (app, _dir) = test_app().await;
        let order_id = create_order(&app, "c1").await;

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/proposals",
            Some(("c2", "customer")),
            Some(bid_body(&order_id, 1000, 5)),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_negotiation_flow_accept_locks_everything() {
        let (app, _dir) = test_app().await;
        let order_id = create_order(&app, "c1").await;

        let (_, proposal) = send(
            &app,
            Method::POST,
            "/api/proposals",
            Some(("v1", "vendor")),
            Some(bid_body(&order_id, 1200, 5)),
        )
        .await;
        let proposal_id = proposal["id"].as_str().expect("proposal id").to_string();
        assert_eq!(proposal["status"], "pending");

        // Only the owner may resolve.
        let status_uri = format!("/api/proposals/{}/status", proposal_id);
        let (status, _) = send(
            &app,
            Method::POST,
            &status_uri,
            Some(("v1", "vendor")),
            Some(json!({ "status": "accepted" })),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, accepted) = send(
            &app,
            Method::POST,
            &status_uri,
            Some(("c1", "customer")),
            Some(json!({ "status": "accepted" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(accepted["status"], "accepted");

        // Terminal status: repeating or flipping both fail.
        let (status, body) = send(
            &app,
            Method::POST,
            &status_uri,
            Some(("c1", "customer")),
            Some(json!({ "status": "accepted" })),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "INVALID_TRANSITION");

        // The bidder can no longer edit the proposal.
        let (status, body) = send(
            &app,
            Method::PUT,
            &format!("/api/proposals/{}", proposal_id),
            Some(("v1", "vendor")),
            Some(json!({ "price": 1300, "days": 5 })),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "PROPOSAL_LOCKED");

        // And the owner can no longer edit the order.
        let (status, body) = send(
            &app,
            Method::PUT,
            &format!("/api/orders/{}", order_id),
            Some(("c1", "customer")),
            Some(json!({ "days": 30 })),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "ORDER_LOCKED");
    }

    #[tokio::test]
    async fn test_technicians_may_offer_on_projects() {
        let (app, _dir) = test_app().await;
        let order_id = create_order(&app, "c1").await;

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/proposals",
            Some(("t1", "technician")),
            Some(bid_body(&order_id, 1000, 5)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_owner_lists_proposals_for_order() {
        let (app, _dir) = test_app().await;
        let order_id = create_order(&app, "c1").await;
        send(
            &app,
            Method::POST,
            "/api/proposals",
            Some(("v1", "vendor")),
            Some(bid_body(&order_id, 1000, 5)),
        )
        .await;

        let uri = format!("/api/orders/{}/proposals", order_id);
        let (status, body) = send(&app, Method::GET, &uri, Some(("c1", "customer")), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().expect("array").len(), 1);

        // A non-owner gets a 403, not an empty list.
        let (status, _) = send(&app, Method::GET, &uri, Some(("v1", "vendor")), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_delete_order_hides_it_and_drops_pending_proposals() {
        let (app, _dir) = test_app().await;
        let order_id = create_order(&app, "c1").await;
        send(
            &app,
            Method::POST,
            "/api/proposals",
            Some(("v1", "vendor")),
            Some(bid_body(&order_id, 1000, 5)),
        )
        .await;

        let uri = format!("/api/orders/{}", order_id);
        let (status, _) = send(&app, Method::DELETE, &uri, Some(("c1", "customer")), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(&app, Method::GET, &uri, Some(("v1", "vendor")), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "ORDER_NOT_FOUND");

        let (status, body) = send(
            &app,
            Method::GET,
            "/api/proposals",
            Some(("v1", "vendor")),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().expect("array").len(), 0);
    }
}
