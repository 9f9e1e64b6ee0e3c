use crate::account::inbound::state::AccountState;
use crate::account::outbound::identity::{IdentityProvider, SupabaseIdentity};
use crate::account::outbound::profiles::{ProfileStore, SupabaseProfileTable};
use crate::account::usecase::authn::{AuthnService, AuthnUseCase};
use crate::account::usecase::profile::{ProfileService, ProfileUseCase};
use crate::app::config::Settings;
use crate::app::router;
use crate::app::state::AppState;
use crate::referral::tools::ToolRegistry;
use crate::referral::usecase::{ReferralService, ReferralUseCase};
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    decompression::RequestDecompressionLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod account;
mod app;
mod referral;

/// Initializes all dependencies and starts the web server.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Create a broadcast channel to signal shutdown to all application components.
    // Spawn a task to listen for shutdown signals (Ctrl+C and SIGTERM).
    let (shutdown_tx, _) = broadcast::channel(1);
    spawn_shutdown_listener(shutdown_tx.clone());

    let settings = Arc::new(Settings::load("config/config.yaml")?);

    // One shared HTTP client for every outbound call to the backend.
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(settings.server.timeout_secs))
        .build()?;

    // Initialize the backend gateways. A placeholder endpoint is allowed
    // here; it fails on first use, not at startup.
    let identity: Arc<dyn IdentityProvider> =
        Arc::new(SupabaseIdentity::new(http.clone(), &settings.supabase));
    let profiles: Arc<dyn ProfileStore> =
        Arc::new(SupabaseProfileTable::new(http, &settings.supabase));

    // Initialize the account module.
    let authn_svc: Arc<dyn AuthnUseCase> = Arc::new(AuthnService::new(identity.clone()));
    let profile_svc: Arc<dyn ProfileUseCase> = Arc::new(ProfileService::new(identity, profiles));

    // Initialize the referral module on top of the profile usecase.
    let referral_svc: Arc<dyn ReferralUseCase> = Arc::new(ReferralService::new(
        profile_svc.clone(),
        ToolRegistry::from_settings(&settings.tools),
    ));

    // Assemble the final AppState from the shared resources and module states.
    let app_state = AppState {
        settings: settings.clone(),
        account: AccountState::new(authn_svc, profile_svc),
        referral: referral_svc,
    };

    // Create the Router and Middlewares
    let timeout_secs = Duration::from_secs(settings.server.timeout_secs);
    let app = router::create_router_app(app_state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http()) // Logs requests and responses
            .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any)) // Enables CORS for all origins
            .layer(RequestDecompressionLayer::new()) // Enables request compression
            .layer(CompressionLayer::new()) // Enables response compression
            .layer(TimeoutLayer::new(timeout_secs)), // Adds a request timeout
    );

    let listener = tokio::net::TcpListener::bind(&settings.server.address).await?;

    tracing::info!("🚀 listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_tx.subscribe().recv().await.ok();
            tracing::info!("🛑 Server is shutting down gracefully...");
        })
        .await?;

    Ok(())
}

/// Spawns a background task to listen for system shutdown signals.
fn spawn_shutdown_listener(shutdown_tx: broadcast::Sender<()>) {
    tokio::spawn(async move {
        let ctrl_c = async {
            signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
        };

        #[cfg(unix)]
        let terminate = async {
            signal::unix::signal(signal::unix::SignalKind::terminate())
                .expect("Failed to install SIGTERM handler")
                .recv()
                .await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => { tracing::info!("🔻 Received SIGINT (Ctrl+C)")},
            _ = terminate => { tracing::info!("🔻 Received SIGTERM")},
        }

        // Send the shutdown signal to all parts of the application.
        if shutdown_tx.send(()).is_err() {
            tracing::error!("Failed to send shutdown signal");
        }
    });
}
