//! Product Catalog REST API Server
//!
//! Serves the in-memory catalog over HTTP. State lives for the lifetime of
//! the process; there is no persistence.
//!
//! ## Usage
//!
//! ```bash
//! # Start the server (optionally pointing at a tax table file)
//! CATALOG_TAX_TABLE=tax_brackets.yaml cargo run --bin catalog_server --features server
//!
//! # Test endpoints
//! curl -X POST http://localhost:3000/api/categories \
//!   -H "Content-Type: application/json" \
//!   -d '{"id": 1, "name": "Electronics", "parent_id": -1}'
//!
//! curl http://localhost:3000/api/products?brand=Acme
//! curl http://localhost:3000/api/health
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use product_catalog::api::create_catalog_router;
use product_catalog::{Catalog, TaxBracketTable};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("🚀 Starting Product Catalog REST API Server");

    let tax = match std::env::var("CATALOG_TAX_TABLE") {
        Ok(path) => {
            println!("📊 Loading tax brackets from {path}");
            TaxBracketTable::from_yaml_str(&std::fs::read_to_string(&path)?)?
        }
        Err(_) => TaxBracketTable::standard(),
    };
    println!("✅ Tax bracket table loaded ({} brackets)", tax.len());

    let catalog = Arc::new(RwLock::new(Catalog::new(tax)));

    // Router with CORS and tracing
    let app = create_catalog_router(catalog)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("\n🌐 Server running on http://{addr}");
    println!("\n📖 Available endpoints:");
    println!("  POST   http://localhost:3000/api/categories");
    println!("  GET    http://localhost:3000/api/categories/:id");
    println!("  DELETE http://localhost:3000/api/categories/:id  (cascades)");
    println!("  GET    http://localhost:3000/api/categories/:id/children");
    println!("  GET    http://localhost:3000/api/categories/:id/products");
    println!("  POST   http://localhost:3000/api/products");
    println!("  GET    http://localhost:3000/api/products?keyword=&brand=&color=&mode=&status=");
    println!("  GET    http://localhost:3000/api/products/:sku/similar");
    println!("  GET    http://localhost:3000/api/health");
    println!("\n✨ Press Ctrl+C to stop\n");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
