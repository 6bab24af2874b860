mod common;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use warehouse_inventory_api::app::build_router;

async fn app() -> anyhow::Result<Router> {
    let state = common::setup_state().await?;
    build_router(state, &common::test_config())
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> anyhow::Result<(StatusCode, String)> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body)?).await?;
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();
    Ok((status, String::from_utf8(bytes.to_vec())?))
}

#[tokio::test]
async fn warehouse_and_item_scenario() -> anyhow::Result<()> {
    let app = app().await?;

    let (status, body) = send(
        &app,
        "POST",
        "/warehouses",
        Some(json!({ "name": "W1", "location": "X", "maximumCapacity": 100 })),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    let warehouse: Value = serde_json::from_str(&body)?;
    let warehouse_id = warehouse["warehouseId"].as_i64().expect("generated id");
    assert_eq!(warehouse["items"], json!([]));

    let (status, body) = send(
        &app,
        "POST",
        &format!("/warehouses/{warehouse_id}/items"),
        Some(json!({
            "name": "Shirt",
            "variants": [
                { "size": "M", "color": "Red", "quantityVariant": 5 },
                { "size": "L", "color": "Blue", "quantityVariant": 3 }
            ]
        })),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    let item: Value = serde_json::from_str(&body)?;
    assert_eq!(item["quantity"], 8);
    assert_eq!(item["warehouseId"], warehouse_id);
    let variants = item["variants"].as_array().expect("variants array");
    assert_eq!(variants.len(), 2);
    for variant in variants {
        assert_eq!(variant["itemId"], item["itemId"]);
    }

    let (status, body) = send(&app, "GET", &format!("/warehouses/{warehouse_id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    let fetched: Value = serde_json::from_str(&body)?;
    assert_eq!(fetched["items"][0]["name"], "Shirt");
    assert_eq!(fetched["items"][0]["variants"][1]["color"], "Blue");
    Ok(())
}

#[tokio::test]
async fn item_update_ignores_client_quantity() -> anyhow::Result<()> {
    let app = app().await?;

    let (_, body) = send(
        &app,
        "POST",
        "/warehouses",
        Some(json!({ "name": "W1", "location": "X", "maximumCapacity": 10 })),
    )
    .await?;
    let warehouse_id = serde_json::from_str::<Value>(&body)?["warehouseId"]
        .as_i64()
        .expect("generated id");

    let (_, body) = send(
        &app,
        "POST",
        &format!("/warehouses/{warehouse_id}/items"),
        Some(json!({ "name": "Mug", "description": "Ceramic", "variants": [] })),
    )
    .await?;
    let item_id = serde_json::from_str::<Value>(&body)?["itemId"].clone();

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/warehouses/{warehouse_id}/items/{item_id}"),
        Some(json!({
            "itemId": 999,
            "name": "Mug",
            "description": "Stoneware",
            "quantity": 500,
            "variants": [{ "size": "12oz", "color": "White", "quantityVariant": 7 }]
        })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    let updated: Value = serde_json::from_str(&body)?;
    assert_eq!(updated["itemId"], item_id);
    assert_eq!(updated["description"], "Stoneware");
    assert_eq!(updated["quantity"], 7);

    let (status, body) = send(
        &app,
        "DELETE",
        &format!("/warehouses/{warehouse_id}/items/{item_id}"),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Item deleted");

    let (_, body) = send(&app, "GET", &format!("/warehouses/{warehouse_id}/items"), None).await?;
    assert_eq!(serde_json::from_str::<Value>(&body)?, json!([]));
    Ok(())
}

#[tokio::test]
async fn missing_records_return_404_and_deletes_return_text() -> anyhow::Result<()> {
    let app = app().await?;

    let (status, body) = send(&app, "GET", "/users/12", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let error: Value = serde_json::from_str(&body)?;
    assert_eq!(error["message"], "User not found with id 12");

    let (status, _) = send(
        &app,
        "POST",
        "/warehouses/12/items",
        Some(json!({ "name": "Nowhere", "variants": [] })),
    )
    .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, "DELETE", "/users/12", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "User not found with id 12");

    let (status, body) = send(&app, "DELETE", "/warehouses/12", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Warehouse not found with id 12");

    let (status, body) = send(&app, "GET", "/nope", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(serde_json::from_str::<Value>(&body)?["data"]["path"], "/nope");
    Ok(())
}

#[tokio::test]
async fn overflowing_variant_quantities_are_rejected() -> anyhow::Result<()> {
    let app = app().await?;

    let (_, body) = send(
        &app,
        "POST",
        "/warehouses",
        Some(json!({ "name": "W1", "location": "X", "maximumCapacity": 10 })),
    )
    .await?;
    let warehouse_id = serde_json::from_str::<Value>(&body)?["warehouseId"]
        .as_i64()
        .expect("generated id");

    let (status, _) = send(
        &app,
        "POST",
        &format!("/warehouses/{warehouse_id}/items"),
        Some(json!({
            "name": "Huge",
            "variants": [
                { "size": "M", "color": "Red", "quantityVariant": i64::MAX },
                { "size": "L", "color": "Red", "quantityVariant": 1 }
            ]
        })),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = send(&app, "GET", &format!("/warehouses/{warehouse_id}/items"), None).await?;
    assert_eq!(serde_json::from_str::<Value>(&body)?, json!([]));
    Ok(())
}

#[tokio::test]
async fn user_crud_over_http() -> anyhow::Result<()> {
    let app = app().await?;

    let (status, body) = send(
        &app,
        "POST",
        "/users",
        Some(json!({ "id": 50, "name": "Dana" })),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    let user: Value = serde_json::from_str(&body)?;
    let user_id = user["id"].as_i64().expect("id");
    assert_ne!(user_id, 50);

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/users/{user_id}"),
        Some(json!({ "name": "Dana S." })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_str::<Value>(&body)?["name"], "Dana S.");

    let (_, body) = send(&app, "GET", "/users", None).await?;
    assert_eq!(
        serde_json::from_str::<Value>(&body)?,
        json!([{ "id": user_id, "name": "Dana S." }])
    );

    let (_, body) = send(&app, "DELETE", &format!("/users/{user_id}"), None).await?;
    assert_eq!(body, format!("User deleted with id {user_id}"));
    Ok(())
}

#[tokio::test]
async fn cors_allows_configured_origin_and_tags_request_id() -> anyhow::Result<()> {
    let app = app().await?;

    let request = Request::builder()
        .method("GET")
        .uri("/warehouses")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())?;
    let response = app.oneshot(request).await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        Some(&header::HeaderValue::from_static("http://localhost:3000"))
    );
    assert!(response.headers().contains_key("x-request-id"));
    Ok(())
}
