use std::sync::Arc;

use brewfather_batch::BatchSize;
use brewfather_client::{BrewfatherClient, Credentials};
use brewfather_mcp::{inventory_overview, server::InventoryResource, BrewfatherServer};
use serde_json::json;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

async fn mount_json(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

async fn brewfather() -> MockServer {
    let server = MockServer::start().await;

    mount_json(
        &server,
        "/inventory/fermentables",
        json!([{ "_id": "f-1", "name": "Pale Ale Malt", "type": "Grain", "inventory": 12.5 }]),
    )
    .await;
    mount_json(
        &server,
        "/inventory/fermentables/f-1",
        json!({
            "_id": "f-1",
            "name": "Pale Ale Malt",
            "type": "Grain",
            "inventory": 12.5,
            "potentialPercentage": 80,
            "lotNumber": "PA-2024-07",
            "bestBeforeDate": 1_735_689_600
        }),
    )
    .await;

    mount_json(
        &server,
        "/inventory/hops",
        json!([
            { "_id": "h-1", "name": "Cascade", "alpha": 5.5, "inventory": 100 },
            { "_id": "h-2", "name": "Centennial", "alpha": 10, "inventory": 50 }
        ]),
    )
    .await;
    mount_json(
        &server,
        "/inventory/hops/h-1",
        json!({ "_id": "h-1", "name": "Cascade", "alpha": 5.5, "inventory": 100, "year": 2024 }),
    )
    .await;
    mount_json(
        &server,
        "/inventory/hops/h-2",
        json!({ "_id": "h-2", "name": "Centennial", "alpha": 10, "inventory": 50, "year": 2023 }),
    )
    .await;

    mount_json(&server, "/inventory/yeasts", json!([])).await;

    server
}

fn client(server: &MockServer) -> BrewfatherClient {
    BrewfatherClient::builder()
        .base_url(server.uri())
        .credentials(Credentials::new("brewer", "api-key"))
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_overview_over_http() {
    let server = brewfather().await;
    let client = client(&server);

    let overview = inventory_overview(&client, BatchSize::new(1).unwrap())
        .await
        .unwrap();

    assert_eq!(overview.fermentables.len(), 1);
    let malt = &overview.fermentables[0];
    assert_eq!(malt.get("Yield"), Some("80%"));
    assert_eq!(malt.get("Lot #"), Some("PA-2024-07"));
    assert_eq!(malt.get("Best Before Date"), Some("2025-01-01T00:00:00"));
    assert_eq!(malt.get("Inventory Amount"), Some("12.5 kg"));

    let hops: Vec<_> = overview
        .hops
        .iter()
        .map(|row| (row.get("Name").unwrap(), row.get("Year").unwrap()))
        .collect();
    assert_eq!(hops, vec![("Cascade", "2024"), ("Centennial", "2023")]);
    assert!(overview.yeasts.is_empty());
}

#[tokio::test]
async fn test_overview_resource_over_http() {
    let server = brewfather().await;
    let mcp = BrewfatherServer::new(Arc::new(client(&server)), BatchSize::DEFAULT);

    let resource = InventoryResource::parse("inventory://overview").unwrap();
    let text = mcp.read(&resource).await.unwrap();

    assert!(text.contains("## Hops\nName: Cascade\nYear: 2024\nAlpha Acid: 5.5%"));
    assert!(text.contains("## Yeasts\nItems: none"));
}

#[tokio::test]
async fn test_detail_failure_surfaces_as_error() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/inventory/hops",
        json!([{ "_id": "h-1", "name": "Cascade" }]),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/inventory/hops/h-1"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let err = brewfather_mcp::inventory::hops_summary(&client(&server), BatchSize::DEFAULT)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("503"), "{err}");
}
