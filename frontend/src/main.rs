//! Frontend application entry point.

use frontend::app::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use axum::{extract::Request, middleware::Next};
        use dioxus::logger::tracing;
        use dioxus::server::axum;

        let config = backend::config::catalog_config();
        tracing::info!("catalog API at {} (timeout {:?})", config.api_url, config.request_timeout);

        Ok(dioxus::server::router(App)
            .layer(axum::middleware::from_fn(
                |request: Request, next: Next| async move {
                    let method = request.method().clone();
                    let path = request.uri().path().to_string();
                    let started = std::time::Instant::now();
                    let res = next.run(request).await;
                    tracing::info!("{} {} -> {} in {:?}", method, path, res.status(), started.elapsed());
                    res
                },
            )))
    });
}
