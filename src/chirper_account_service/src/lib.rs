//! Standalone HTTP service for the account lifecycle: registration with
//! email validation, password reset and change, profile edits, and
//! session login/logout.

pub mod telemetry;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use chirper_axum::routes::{
    change_password, confirm_reset_password, login, logout, register, request_password_reset,
    update_profile, validate_account,
};
use chirper_axum::state::AppState;
use chirper_core::{CredentialStore, EmailClient, TokenStore};

use crate::telemetry::{make_span_with_request_id, on_request, on_response};

/// The assembled account service. Construct with concrete store and
/// email-client implementations, then either mount the router into a
/// larger application or run it standalone.
pub struct AccountService {
    router: Router,
}

impl AccountService {
    /// Stores implement `Clone` via internal sharing (`Arc` or a pool),
    /// so the state clones handed to each route stay cheap.
    pub fn new<C, T, E>(state: AppState<C, T, E>) -> Self
    where
        C: CredentialStore + Clone + 'static,
        T: TokenStore + Clone + 'static,
        E: EmailClient + Clone + 'static,
    {
        let router = Router::new()
            .route("/register", post(register::<C, T, E>))
            .route("/users/validate/{token}", get(validate_account::<C, T, E>))
            .route(
                "/users/reset-password",
                post(request_password_reset::<C, T, E>),
            )
            .route(
                "/users/confirm-reset-password/{token}",
                post(confirm_reset_password::<C, T, E>),
            )
            .route("/users/change-password", post(change_password::<C, T, E>))
            .route("/users/profile", post(update_profile::<C, T, E>))
            .route("/login", post(login::<C, T, E>))
            .route("/logout", post(logout::<C, T, E>))
            .with_state(state);

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

    /// The router with tracing attached, ready to nest into another app.
    pub fn into_router(self) -> Router {
        self.with_trace_layer().router
    }

    /// Serve on the given listener until shutdown.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let router = self.into_router();

        tracing::info!("Account service listening on {}", listener.local_addr()?);

        axum::serve(listener, router.into_make_service()).await
    }
}
