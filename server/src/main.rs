mod error;
mod web;

pub use self::error::{Error, Result};

use axum::Router;
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional here: cargo-leptos injects the site env values itself
    let _ = dotenv();

    // create a global subscriber
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .without_time() // only on local deployments
        .with_target(false)
        .init();

    // get leptos config
    let (leptos_option, addr) = web::routes_app::get_leptos_config().await?;

    // region:        --- Axum router

    let routes_all = Router::new().merge(web::routes_app::routes(leptos_option));

    // endregion:     --- Axum router

    // region:        --- Start server

    // Ok to `unwrap` errors here
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    info!("{:<12} - {:?}\n", "LISTENING", listener.local_addr());
    axum::serve(listener, routes_all.into_make_service())
        .await
        .unwrap();

    // endregion:     --- Start server

    Ok(())
}
