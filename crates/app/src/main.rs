use dioxus::prelude::*;

pub mod format_helpers;
mod routes;

use routes::Route;

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        server::health::record_start_time();

        let pool = server::db::create_pool();
        server::db::run_migrations(&pool).await;

        tracing::info!("task service started");

        let router = dioxus::server::router(App)
            .merge(server::openapi::api_router(pool))
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}
