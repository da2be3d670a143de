//! End-to-end tests against a live server.
//!
//! # Design
//! Starts the mock server on a random port, then drives `setup` and the
//! search controller over real HTTP using ureq as the host transport. Failure
//! paths use a bare TCP listener that answers with a fixed status line, and a
//! port nobody listens on.

use std::io::{Read, Write};
use std::net::TcpListener;

use catalog_core::{
    setup, CatalogError, Fetcher, HttpRequest, HttpResponse, ProductCard, ProductClient,
    ProductGrid, Transport,
};
use mock_server::{Image, Product};

/// Executes requests with ureq, returning 4xx/5xx responses as data rather
/// than `Err` so the core client interprets the status.
struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, req: &HttpRequest) -> Result<HttpResponse, CatalogError> {
        let mut builder = self.agent.get(&req.path);
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }
        let mut response = builder
            .call()
            .map_err(|e| CatalogError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string().unwrap_or_default();
        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}

fn spawn_mock_server(products: Vec<Product>) -> String {
    let std_listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run_with_catalog(listener, products).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

/// Answer exactly one request with `status_line` and an empty JSON body.
fn spawn_fixed_status(status_line: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut buf = [0u8; 1024];
        let _ = stream.read(&mut buf);
        let body = "oops";
        let reply = format!(
            "HTTP/1.1 {status_line}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(reply.as_bytes()).unwrap();
    });

    format!("http://{addr}")
}

fn fetcher(base_url: &str) -> Fetcher<UreqTransport> {
    Fetcher::new(ProductClient::new(base_url), UreqTransport::new())
}

#[test]
fn setup_and_search_against_live_server() {
    let base_url = spawn_mock_server(vec![
        Product {
            title: "B".to_string(),
            price: 200,
            images: Vec::new(),
        },
        Product {
            title: "A".to_string(),
            price: 100,
            images: vec![Image {
                src: "a.png".to_string(),
            }],
        },
    ]);

    // Step 1: initial render is sorted by price.
    let mut grid = ProductGrid::new();
    let search = setup(&fetcher(&base_url), &mut grid).unwrap();
    assert_eq!(
        grid.cards(),
        [
            ProductCard {
                image_src: Some("a.png".to_string()),
                title: "A".to_string(),
                price: "$1.00".to_string(),
            },
            ProductCard {
                image_src: None,
                title: "B".to_string(),
                price: "$2.00".to_string(),
            },
        ]
    );

    // Step 2: narrowing search.
    assert_eq!(search.handle_input("b", &mut grid), 1);
    assert_eq!(grid.cards()[0].title, "B");

    // Step 3: a different term starts over from the full catalog.
    assert_eq!(search.handle_input("a", &mut grid), 1);
    assert_eq!(grid.cards()[0].title, "A");

    // Step 4: clearing the box shows everything again.
    assert_eq!(search.handle_input("", &mut grid), 2);
}

#[test]
fn seed_catalog_renders_every_product() {
    let base_url = spawn_mock_server(mock_server::seed_catalog());
    let mut grid = ProductGrid::new();
    setup(&fetcher(&base_url), &mut grid).unwrap();

    assert_eq!(grid.len(), mock_server::seed_catalog().len());
    // The 5-cent sticker sorts first and shows the malformed price.
    assert_eq!(grid.cards()[0].price, "$.5");
}

#[test]
fn server_error_fails_setup_without_rendering() {
    let base_url = spawn_fixed_status("500 Internal Server Error");
    let mut grid = ProductGrid::new();

    let err = setup(&fetcher(&base_url), &mut grid).unwrap_err();
    assert!(matches!(err, CatalogError::Status { status: 500, .. }));
    assert!(grid.is_empty());
}

#[test]
fn unreachable_server_is_a_transport_error() {
    // Bind then drop to get a port with nobody listening.
    let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
    let mut grid = ProductGrid::new();

    let err = setup(&fetcher(&format!("http://{addr}")), &mut grid).unwrap_err();
    assert!(matches!(err, CatalogError::Transport(_)));
    assert!(grid.is_empty());
}
