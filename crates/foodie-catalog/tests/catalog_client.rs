//! Integration tests for `CatalogClient`.
//!
//! Uses `wiremock` to stand up a local HTTP server for each test so no real
//! network traffic is made.

use foodie_catalog::{CatalogClient, CatalogError, ShopSource};
use foodie_core::{ProductItem, ShopConfig};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> CatalogClient {
    CatalogClient::new(base_url, 5, "foodie-test/0.1").expect("failed to build test CatalogClient")
}

fn products_json() -> serde_json::Value {
    json!([
        {
            "id": "burger",
            "name": "Burger",
            "price": 5.0,
            "category": "Mains",
            "calories": 650,
            "allergens": ["gluten"],
            "displayOption": "compact"
        },
        {
            "id": "fries",
            "name": "Fries",
            "price": 3.5,
            "category": "Sides"
        }
    ])
}

fn config_json(products_url: &str) -> serde_json::Value {
    json!({
        "SHOP_NAME": "Bambino",
        "SHOP_PRODUCTS_URL": products_url,
        "WHATSAPP_PHONE": "+34 600 000 000",
        "CURRENCY_SIGN": "€",
        "PRICE_DECIMALS": 2,
        "TAX_PERCENTAGE": 21,
        "LANGUAGE": "en",
        "COLLECTION_OPTIONS": [
            { "id": 7, "address": "Calle Mayor 1", "locationURL": "https://maps.example.com/1" }
        ]
    })
}

async fn mount_products(server: &MockServer, route: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(products_json()))
        .expect(1)
        .mount(server)
        .await;
}

// ---------------------------------------------------------------------------
// Default shop
// ---------------------------------------------------------------------------

#[tokio::test]
async fn load_default_shop_uses_embedded_config_and_fetches_products_only() {
    let server = MockServer::start().await;
    mount_products(&server, "/default/products.json").await;

    let default_config = ShopConfig {
        shop_products_url: format!("{}/default/products.json", server.uri()),
        ..ShopConfig::default()
    };
    let client = test_client(&server.uri()).with_default_config(default_config.clone());

    let loaded = client.load_shop(&ShopSource::Default).await;

    assert!(loaded.is_ok(), "expected Ok, got: {loaded:?}");
    let loaded = loaded.unwrap();
    assert_eq!(loaded.config, default_config);
    assert_eq!(loaded.products.len(), 2);
    assert_eq!(loaded.products[0].calories, Some(650));
    assert!(loaded.products[1].allergens.is_empty());
}

// ---------------------------------------------------------------------------
// Named shop
// ---------------------------------------------------------------------------

#[tokio::test]
async fn load_named_shop_fetches_config_then_products() {
    let server = MockServer::start().await;
    let products_url = format!("{}/bambino/products.json", server.uri());

    Mock::given(method("GET"))
        .and(path("/bambino/configuration.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(config_json(&products_url)))
        .expect(1)
        .mount(&server)
        .await;
    mount_products(&server, "/bambino/products.json").await;

    let client = test_client(&server.uri());
    let loaded = client
        .load_shop(&ShopSource::Named("bambino".to_string()))
        .await
        .expect("named shop loads");

    assert_eq!(loaded.config.shop_name, "Bambino");
    assert_eq!(loaded.config.currency_sign, "€");
    assert_eq!(loaded.config.collection_options[0].id, 7);
    // Fields the document leaves out come from the embedded default.
    assert_eq!(
        loaded.config.opening_hours,
        ShopConfig::default().opening_hours
    );
    let ids: Vec<&str> = loaded.products.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["burger", "fries"]);
}

#[tokio::test]
async fn missing_named_shop_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ghost/configuration.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .load_shop(&ShopSource::Named("ghost".to_string()))
        .await
        .unwrap_err();

    assert!(
        matches!(err, CatalogError::NotFound { ref url } if url.ends_with("/ghost/configuration.json")),
        "expected NotFound, got: {err:?}"
    );
}

// ---------------------------------------------------------------------------
// Failure modes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn products_server_error_is_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products.json"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .fetch_products(&format!("{}/products.json", server.uri()))
        .await
        .unwrap_err();

    assert!(
        matches!(err, CatalogError::UnexpectedStatus { status: 503, .. }),
        "expected UnexpectedStatus(503), got: {err:?}"
    );
}

#[tokio::test]
async fn malformed_products_body_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"products\": []}"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .fetch_products(&format!("{}/products.json", server.uri()))
        .await
        .unwrap_err();

    assert!(
        matches!(err, CatalogError::Deserialize { ref context, .. } if context.contains("product catalog")),
        "expected Deserialize, got: {err:?}"
    );
}

#[tokio::test]
async fn duplicate_product_ids_are_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "a", "name": "A", "price": 1, "category": "X" },
            { "id": "a", "name": "A again", "price": 2, "category": "X" }
        ])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .fetch_products(&format!("{}/products.json", server.uri()))
        .await
        .unwrap_err();

    assert!(
        matches!(err, CatalogError::Invalid(_)),
        "expected Invalid, got: {err:?}"
    );
}

#[tokio::test]
async fn negative_tax_in_config_is_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bad/configuration.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "SHOP_PRODUCTS_URL": "https://example.com/products.json",
            "TAX_PERCENTAGE": -5
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch_shop_config("bad").await.unwrap_err();

    assert!(
        matches!(err, CatalogError::Invalid(_)),
        "expected Invalid, got: {err:?}"
    );
}

#[tokio::test]
async fn failed_config_fetch_skips_products() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/broken/configuration.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/products.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client
        .load_shop(&ShopSource::Named("broken".to_string()))
        .await;

    assert!(matches!(
        result,
        Err(CatalogError::UnexpectedStatus { status: 500, .. })
    ));
}

#[tokio::test]
async fn empty_catalog_is_valid() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let products: Vec<ProductItem> = client
        .fetch_products(&format!("{}/products.json", server.uri()))
        .await
        .expect("empty array is a valid catalog");

    assert!(products.is_empty());
}
