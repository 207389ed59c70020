//! Test harness for in-process integration tests.
//!
//! Every test gets a fresh store and router. Nothing is shared between
//! tests except the tracing subscriber.

use std::sync::Once;

use axum::Router;
use server_core::server::{build_app, AppState};
use server_core::Config;
use test_context::AsyncTestContext;

use super::ApiClient;

static TRACING: Once = Once::new();

/// Initialize tracing once per test binary.
/// Run tests with: RUST_LOG=debug cargo test -- --nocapture
fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Test harness holding an application built on an empty store.
///
/// # Example using test-context
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &TestHarness) {
///     let client = ctx.client();
///     // ... test code
/// }
/// ```
pub struct TestHarness {
    /// Shared state, for asserting directly against the store.
    pub state: AppState,
    app: Router,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::new()
    }
}

impl TestHarness {
    /// Harness with default settings, except that data reset is enabled.
    pub fn new() -> Self {
        Self::with_config(Config {
            allow_data_reset: true,
            ..Config::default()
        })
    }

    pub fn with_config(config: Config) -> Self {
        init_tracing();
        let state = AppState::new(config);
        let app = build_app(state.clone());
        Self { state, app }
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.app.clone())
    }
}
