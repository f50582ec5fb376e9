//! End-to-end test: the real actix-web server, driven over HTTP with reqwest.
//!
//! Orders come from an in-memory lookup so no external service is needed.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use order_confirmation::domain::errors::{LookupError, NotificationError};
use order_confirmation::domain::notification::OrderDetails;
use order_confirmation::domain::order::{LookupResponse, Order};
use order_confirmation::domain::ports::{Dispatch, NotificationChannel, OrderLookup};
use order_confirmation::infrastructure::whatsapp::WhatsAppChannel;
use order_confirmation::{build_server, AppState};
use reqwest::{redirect, Client, StatusCode};
use serde_json::json;

struct InMemoryLookup {
    orders: HashMap<String, LookupResponse>,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl OrderLookup for InMemoryLookup {
    async fn get_order_by_id(&self, order_id: &str) -> Result<LookupResponse, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.orders
            .get(order_id)
            .cloned()
            .ok_or_else(|| LookupError::Transport("connection refused".to_string()))
    }
}

struct FailingChannel;

impl NotificationChannel for FailingChannel {
    fn dispatch(&self, _details: &OrderDetails) -> Result<Dispatch, NotificationError> {
        Err(NotificationError::NotConfigured)
    }
}

/// Delivers the message itself and remembers which orders it sent.
#[derive(Clone, Default)]
struct DeliveringChannel {
    sent: Arc<std::sync::Mutex<Vec<String>>>,
}

impl NotificationChannel for DeliveringChannel {
    fn dispatch(&self, details: &OrderDetails) -> Result<Dispatch, NotificationError> {
        self.sent.lock().unwrap().push(details.order_id.clone());
        Ok(Dispatch::Delivered)
    }
}

fn order(value: serde_json::Value) -> Order {
    serde_json::from_value(value).expect("valid order json")
}

fn fixtures() -> HashMap<String, LookupResponse> {
    HashMap::from([
        (
            "A1".to_string(),
            LookupResponse::found(order(json!({
                "id": "A1",
                "created_at": "2024-03-05T10:00:00Z",
                "status": "pending",
                "total_price": 19.999,
                "order_items": []
            }))),
        ),
        (
            "A2".to_string(),
            LookupResponse::failed("not permitted"),
        ),
        ("A3".to_string(), LookupResponse::default()),
        (
            "B1".to_string(),
            LookupResponse::found(order(json!({
                "id": "B1",
                "created_at": "2024-03-05T10:00:00Z",
                "status": "pending",
                "total_price": "25.5",
                "customer_first_name": "Lina",
                "customer_phone": "0790000000",
                "order_items": [
                    { "id": "i1", "product_id": "p1", "quantity": 2, "price": "10.25",
                      "products": { "title": "Olive Oil" } },
                    { "id": "i2", "product_id": "p2", "quantity": 1, "price": "5" }
                ]
            }))),
        ),
    ])
}

fn free_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .expect("bind failed")
        .local_addr()
        .expect("addr failed")
        .port()
}

struct TestApp {
    base: String,
    calls: Arc<AtomicUsize>,
    http: Client,
}

async fn spawn_app(notifier: impl NotificationChannel) -> TestApp {
    let calls = Arc::new(AtomicUsize::new(0));
    let lookup = InMemoryLookup {
        orders: fixtures(),
        calls: calls.clone(),
    };
    let port = free_port();
    let server = build_server(AppState::new(lookup, notifier), "127.0.0.1", port)
        .expect("Failed to build server");
    actix_web::rt::spawn(server);

    let base = format!("http://127.0.0.1:{}", port);
    let http = Client::builder()
        .redirect(redirect::Policy::none())
        .timeout(Duration::from_secs(5))
        .build()
        .expect("Failed to build client");

    let deadline = tokio::time::Instant::now() + Duration::from_secs(10);
    while http.get(format!("{}/health", base)).send().await.is_err() {
        if tokio::time::Instant::now() > deadline {
            panic!("server did not become ready");
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    TestApp { base, calls, http }
}

impl TestApp {
    async fn page(&self, path: &str) -> (StatusCode, String) {
        let resp = self
            .http
            .get(format!("{}{}", self.base, path))
            .send()
            .await
            .expect("request failed");
        let status = resp.status();
        (status, resp.text().await.expect("body"))
    }

    async fn notify(&self, path: &str) -> reqwest::Response {
        self.http
            .post(format!("{}{}", self.base, path))
            .send()
            .await
            .expect("request failed")
    }

    fn lookups(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

// ── Page ──────────────────────────────────────────────────────────────────────

#[actix_web::test]
async fn found_order_shows_rounded_total_without_items_section() {
    let app = spawn_app(WhatsAppChannel::new(None)).await;

    let (status, body) = app.page("/en/order-success?orderId=A1").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Order Placed Successfully!"));
    assert!(body.contains(r#"<dd class="order-total">$20.00</dd>"#));
    assert!(!body.contains("order-items"));
    assert_eq!(app.lookups(), 1);
}

#[actix_web::test]
async fn service_error_message_is_shown_verbatim() {
    let app = spawn_app(WhatsAppChannel::new(None)).await;

    let (_, body) = app.page("/en/order-success?orderId=A2").await;

    assert!(body.contains("Something went wrong"));
    assert!(body.contains("not permitted"));
    assert!(body.contains(r#"href="/">Return Home</a>"#));
}

#[actix_web::test]
async fn missing_order_id_never_reaches_the_lookup() {
    let app = spawn_app(WhatsAppChannel::new(None)).await;

    let (_, without) = app.page("/en/order-success").await;
    let (_, empty) = app.page("/en/order-success?orderId=").await;

    assert!(without.contains("Order ID not found"));
    assert!(empty.contains("Order ID not found"));
    assert_eq!(app.lookups(), 0);
}

#[actix_web::test]
async fn null_order_shows_generic_message() {
    let app = spawn_app(WhatsAppChannel::new(None)).await;

    let (_, body) = app.page("/en/order-success?orderId=A3").await;

    assert!(body.contains("Failed to load order"));
}

#[actix_web::test]
async fn lookup_failure_hides_the_cause() {
    let app = spawn_app(WhatsAppChannel::new(None)).await;

    let (_, body) = app.page("/en/order-success?orderId=unknown").await;

    assert!(body.contains("Failed to load order details"));
    assert!(!body.contains("connection refused"));
}

#[actix_web::test]
async fn items_and_customer_are_rendered() {
    let app = spawn_app(WhatsAppChannel::new(None)).await;

    let (_, body) = app.page("/en/order-success?orderId=B1").await;

    assert!(body.contains("Customer Information"));
    assert!(body.contains("Lina"));
    assert!(body.contains("<h4>Olive Oil</h4>"));
    assert!(body.contains("<h4>Product p2</h4>"));
    assert!(body.contains("$20.50"));
    assert!(body.contains(r#"<dd class="order-total">$25.50</dd>"#));
}

#[actix_web::test]
async fn arabic_locale_renders_right_to_left() {
    let app = spawn_app(WhatsAppChannel::new(None)).await;

    let (_, body) = app.page("/ar/order-success").await;

    assert!(body.contains(r#"dir="rtl""#));
    assert!(body.contains("لم يتم العثور على رقم الطلب"));
}

// ── Notification ──────────────────────────────────────────────────────────────

#[actix_web::test]
async fn notify_redirects_to_whatsapp_link() {
    let app = spawn_app(WhatsAppChannel::new(Some("+962790000000".to_string()))).await;

    let resp = app.notify("/en/order-success/notify?orderId=B1").await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let location = resp.headers()["location"].to_str().unwrap();
    assert!(location.starts_with("https://wa.me/962790000000?text="));
    assert!(location.contains("B1"));
}

#[actix_web::test]
async fn failed_dispatch_returns_to_confirmation_page() {
    let app = spawn_app(FailingChannel).await;

    let resp = app.notify("/en/order-success/notify?orderId=B1").await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers()["location"].to_str().unwrap(),
        "/en/order-success?orderId=B1"
    );
}

#[actix_web::test]
async fn notify_for_unloadable_order_returns_to_page() {
    let app = spawn_app(WhatsAppChannel::new(Some("962790000000".to_string()))).await;

    let resp = app.notify("/en/order-success/notify?orderId=A2").await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers()["location"].to_str().unwrap(),
        "/en/order-success?orderId=A2"
    );
}

#[actix_web::test]
async fn delivered_notification_returns_to_confirmation_page() {
    let channel = DeliveringChannel::default();
    let app = spawn_app(channel.clone()).await;

    let resp = app.notify("/en/order-success/notify?orderId=B1").await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers()["location"].to_str().unwrap(),
        "/en/order-success?orderId=B1"
    );
    assert_eq!(*channel.sent.lock().unwrap(), vec!["B1".to_string()]);
}
