//! End-to-end storefront flows against a local `wiremock` backend.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use storefront_app::{
    CatalogStatus, MemoryStorage, OrderComposer, OrderError, Storefront, Timings, CART_KEY,
};
use storefront_client::{ClientError, StorefrontClient};
use storefront_core::OrderForm;

fn test_client(base_url: &str) -> StorefrontClient {
    StorefrontClient::new(base_url, 5, "storefront-test/0.1")
        .expect("failed to build test StorefrontClient")
}

fn fast_timings() -> Timings {
    Timings {
        toast: Duration::from_millis(50),
        success: Duration::from_millis(100),
    }
}

async fn mount_catalog(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/product/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "uuid": "a", "title": "Lamp", "category": "Verlichting", "price": 10 },
            { "uuid": "b", "title": "Mug", "category": "Keuken", "price": "4.50" }
        ])))
        .mount(server)
        .await;
}

fn fill_form(form: &mut OrderForm) {
    form.first_name = "Anna".to_string();
    form.last_name = "de Vries".to_string();
    form.email = "anna@example.nl".to_string();
    form.phone = "0612345678".to_string();
    form.address = "Kerkstraat 1".to_string();
    form.postal_code = "1234 AB".to_string();
    form.city = "Amsterdam".to_string();
    form.terms_accepted = true;
}

async fn ready_storefront(
    server: &MockServer,
    storage: MemoryStorage,
) -> Storefront<MemoryStorage> {
    mount_catalog(server).await;
    let mut store = Storefront::new(test_client(&server.uri()), storage, fast_timings());
    store.load_catalog().await.expect("catalog should load");
    store
}

#[tokio::test]
async fn unaccepted_terms_send_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/order/create"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "orderNumber": "X" })))
        .expect(0)
        .mount(&server)
        .await;

    let mut store = ready_storefront(&server, MemoryStorage::new()).await;
    store.add_to_cart("a").unwrap();
    fill_form(store.form_mut());
    store.form_mut().terms_accepted = false;

    let err = store.submit_order().await.unwrap_err();

    assert!(matches!(err, OrderError::TermsNotAccepted));
    assert_eq!(store.cart().cart().item_count(), 1);
    assert_eq!(store.form().first_name, "Anna");
}

#[tokio::test]
async fn successful_order_clears_cart_and_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/order/create"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "orderNumber": "ORD-2024-0042" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let storage = MemoryStorage::new();
    let mut store = ready_storefront(&server, storage.clone()).await;
    store.add_to_cart("a").unwrap();
    store.add_to_cart("a").unwrap();
    store.begin_checkout().unwrap();
    fill_form(store.form_mut());

    let confirmation = store.submit_order().await.expect("order should be placed");

    assert_eq!(confirmation.order_number, "ORD-2024-0042");
    assert_eq!(confirmation.cart_items, "2x Lamp");
    assert!(store.cart().cart().is_empty());
    assert_eq!(store.form(), &OrderForm::default());
    assert_eq!(store.ui().success(), Some(confirmation));
    assert_eq!(storage.get(CART_KEY).as_deref(), Some("[]"));
}

#[tokio::test]
async fn server_failure_preserves_cart_and_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/order/create"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut store = ready_storefront(&server, MemoryStorage::new()).await;
    store.add_to_cart("b").unwrap();
    fill_form(store.form_mut());
    let form_before = store.form().clone();

    let err = store.submit_order().await.unwrap_err();

    assert!(!err.is_validation());
    assert!(err.to_string().contains("HTTP error! status: 500"), "{err}");
    assert_eq!(store.cart().cart().item_count(), 1);
    assert_eq!(store.form(), &form_before);
    assert!(store.ui().success().is_none());
    assert!(!store.is_submitting());
}

#[tokio::test]
async fn missing_order_number_keeps_cart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/order/create"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let mut store = ready_storefront(&server, MemoryStorage::new()).await;
    store.add_to_cart("a").unwrap();
    fill_form(store.form_mut());

    let err = store.submit_order().await.unwrap_err();

    assert!(matches!(
        err,
        OrderError::Submit(ClientError::MissingOrderNumber { .. })
    ));
    assert!(!store.cart().cart().is_empty());
}

#[tokio::test]
async fn concurrent_submit_sends_one_request() {
    let server = MockServer::start().await;
    mount_catalog(&server).await;
    Mock::given(method("POST"))
        .and(path("/order/create"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "orderNumber": "ORD-1" }))
                .set_delay(Duration::from_millis(300)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let mut catalog = storefront_app::CatalogStore::new();
    catalog.load(&client).await.unwrap();
    let mut cart = storefront_core::Cart::new();
    cart.add(catalog.find("a").unwrap());
    let mut form = OrderForm::default();
    fill_form(&mut form);

    let composer = OrderComposer::new(client);
    let (first, second) = tokio::join!(
        composer.submit(&cart, &form),
        composer.submit(&cart, &form)
    );

    assert_eq!(first.unwrap().order_number, "ORD-1");
    assert!(matches!(second, Err(OrderError::InFlight)));
    assert!(!composer.is_submitting());
}

#[tokio::test]
async fn success_modal_expiry_closes_checkout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/order/create"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "orderNumber": "ORD-7" })))
        .mount(&server)
        .await;

    let mut store = ready_storefront(&server, MemoryStorage::new()).await;
    store.add_to_cart("a").unwrap();
    store.begin_checkout().unwrap();
    fill_form(store.form_mut());
    store.submit_order().await.unwrap();
    assert!(store.ui().views().checkout_open);

    tokio::time::sleep(Duration::from_millis(400)).await;

    assert!(store.ui().success().is_none());
    assert!(!store.ui().views().checkout_open);
}

#[tokio::test]
async fn edits_during_success_modal_are_discarded_at_expiry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/order/create"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "orderNumber": "ORD-8" })))
        .mount(&server)
        .await;

    let mut store = ready_storefront(&server, MemoryStorage::new()).await;
    store.add_to_cart("a").unwrap();
    store.begin_checkout().unwrap();
    fill_form(store.form_mut());
    store.submit_order().await.unwrap();

    store.form_mut().first_name = "Bram".to_string();
    store.form_mut().terms_accepted = true;
    assert_eq!(store.form().first_name, "Bram");

    tokio::time::sleep(Duration::from_millis(400)).await;

    assert_eq!(store.form(), &OrderForm::default());
    store.add_to_cart("b").unwrap();
    store.begin_checkout().unwrap();
    assert_eq!(store.form(), &OrderForm::default());
    assert!(store.form_mut().first_name.is_empty());
}

#[tokio::test]
async fn checkout_needs_items() {
    let server = MockServer::start().await;
    let mut store = ready_storefront(&server, MemoryStorage::new()).await;

    assert!(matches!(store.begin_checkout(), Err(OrderError::EmptyCart)));
    assert!(!store.ui().views().checkout_open);
}

#[tokio::test]
async fn catalog_failure_then_manual_reload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/product/all"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_catalog(&server).await;

    let mut store = Storefront::new(
        test_client(&server.uri()),
        MemoryStorage::new(),
        fast_timings(),
    );

    assert!(store.load_catalog().await.is_err());
    assert!(matches!(store.catalog().status(), CatalogStatus::Failed(_)));
    assert!(store.add_to_cart("a").is_err());

    assert_eq!(store.load_catalog().await.unwrap(), 2);
    assert_eq!(store.catalog().status(), &CatalogStatus::Ready);
    assert_eq!(store.catalog().categories(), ["Verlichting", "Keuken"]);
}

#[tokio::test]
async fn adding_raises_toast_with_quantity() {
    let server = MockServer::start().await;
    let mut store = ready_storefront(&server, MemoryStorage::new()).await;

    store.add_to_cart("b").unwrap();
    let qty = store.add_to_cart("b").unwrap();

    assert_eq!(qty, 2);
    let toast = store.ui().added().expect("toast should be visible");
    assert_eq!(toast.title, "Mug");
    assert_eq!(toast.quantity, 2);

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(store.ui().added().is_none());
}
