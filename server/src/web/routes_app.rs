use crate::web::Result;

use app::App;
use axum::response::Response as AxumResponse;
use axum::Router;
use axum::{
    body::Body,
    extract::State,
    http::{Request, Response, StatusCode, Uri},
    response::IntoResponse,
};
use leptos::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use leptos_config::ConfFile;
use std::net::SocketAddr;
use tower::ServiceExt;
use tower_http::services::ServeDir;

/// Reads the Leptos site options and the address to bind.
///
/// Setting get_configuration(None) means we'll be using cargo-leptos's env values.
/// For deployment these variables are:
/// <https://github.com/leptos-rs/start-axum#executing-a-server-on-a-remote-machine-without-the-toolchain>
/// Alternately a file can be specified such as Some("Cargo.toml"); it would
/// need to ship with the executable when moved to deployment.
pub async fn get_leptos_config() -> Result<(ConfFile, SocketAddr)> {
    let conf = get_configuration(None).await?;
    let addr = conf.leptos_options.site_addr;

    Ok((conf, addr))
}

pub fn routes(config: ConfFile) -> Router {
    let leptos_options = config.leptos_options;
    let routes = generate_route_list(App);

    // every app route is server-rendered; anything else goes through the
    // static-file-then-SSR fallback, which is what lets a hard navigation to
    // an unknown path reach the client wildcard ("Not found") page
    Router::new()
        .leptos_routes(&leptos_options, routes, App)
        .fallback(file_and_error_handler)
        .with_state(leptos_options)
}

pub async fn file_and_error_handler(
    uri: Uri,
    State(options): State<LeptosOptions>,
    req: Request<Body>,
) -> Result<AxumResponse> {
    let root = options.site_root.clone();
    let res = get_static_file(uri.clone(), &root).await?;

    if res.status() == StatusCode::OK {
        Ok(res.into_response())
    } else {
        let handler =
            leptos_axum::render_app_to_stream(options.to_owned(), move || view! { <App/> });
        Ok(handler(req).await.into_response())
    }
}

async fn get_static_file(uri: Uri, root: &str) -> Result<Response<Body>> {
    let req = Request::builder().uri(uri.clone()).body(Body::empty())?;

    // `ServeDir` implements `tower::Service` so we can call it with `tower::ServiceExt::oneshot`
    // This path is relative to the cargo root
    match ServeDir::new(root).oneshot(req).await {
        Ok(res) => Ok(res.map(Body::new)),
        Err(_) => Err(crate::web::Error::ServeDir),
    }
}
