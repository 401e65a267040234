use axum::{
    Router,
    http::{HeaderValue, Method, request},
    routing::post,
};
use relay_adapters::{
    config::{AllowedOrigins, LOGIN_ROUTE, RelayConfig},
    http::routes::login,
};
use relay_core::SecurityCheck;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// The credential relay service: a single login route over a shared
/// upstream client and the active configuration.
pub struct RelayService {
    router: Router,
}

impl RelayService {
    /// Create a new RelayService
    ///
    /// # Arguments
    /// * `security_check` - Upstream client implementing the `SecurityCheck`
    ///   port (must be Clone; the reqwest implementation clones cheaply
    ///   around one shared connection pool)
    /// * `config` - Activated configuration handle
    pub fn new<C>(security_check: C, config: RelayConfig) -> Self
    where
        C: SecurityCheck + Clone + 'static,
    {
        let router = Router::new()
            .route(LOGIN_ROUTE, post(login::<C>))
            .with_state((security_check, config));

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the RelayService into a router that can be mounted on
    /// another application
    ///
    /// # Arguments
    /// * `allowed_origins` - Optional list of allowed CORS origins (the
    ///   login form posts from a browser; credentials are included so the
    ///   origin must be echoed, not wildcarded)
    pub fn as_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins {
            let cors = CorsLayer::new()
                .allow_methods([Method::POST])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the relay as a standalone server
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_router(allowed_origins);

        tracing::info!("Credential relay listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
