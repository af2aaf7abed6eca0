pub mod error;
pub mod routes;

use std::path::Path;

use axum::{
    response::Redirect,
    routing::{get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::database::ActivityRegistry;
use routes::{activities, activity};

/// Builds the full application: JSON API, frontend files and layers.
pub fn app_router(registry: ActivityRegistry, static_dir: impl AsRef<Path>) -> Router {
    let router = Router::new()
        .route("/", get(|| async { Redirect::to("/static/index.html") }))
        .route("/activities", get(activities::activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(activity::activity_signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            post(activity::activity_unregister_handler),
        )
        .nest_service(
            "/static",
            get_service(ServeDir::new(static_dir.as_ref())),
        )
        .with_state(registry);
    with_layers(router)
}

// Header layer wraps the panic catcher so the 500 it produces is also no-store.
fn with_layers(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::new())
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    async fn explode() -> &'static str {
        panic!("handler blew up")
    }

    #[tokio::test]
    async fn panicking_handler_yields_no_store_500() {
        let app = with_layers(Router::new().route("/boom", get(explode)));
        let request = Request::builder().uri("/boom").body(Body::empty()).unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers().get(CACHE_CONTROL).unwrap(),
            "no-store"
        );
    }
}
