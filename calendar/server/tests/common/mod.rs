use std::sync::Arc;

use calendar_server::event::api::EventState;
use calendar_server::store::EventStore;
use calendar_server::web::create_app;

/// Test context for endpoint tests. Holds the temp dir so the data file
/// outlives the test body.
pub struct TestContext {
    #[allow(dead_code)] // directory is kept to ensure it's not dropped
    pub dir: tempfile::TempDir,
    pub store: EventStore,
    pub app: axum::Router,
}

/// Builds a router backed by a freshly seeded store in a temp directory.
pub async fn setup() -> anyhow::Result<TestContext> {
    // Allow multiple calls to init for tests.
    let _ = tracing_subscriber::fmt().try_init();

    let dir = tempfile::tempdir()?;
    let store = EventStore::new(dir.path().join("events.json"));
    store.ensure_data_file().await?;
    let app = create_app(Arc::new(EventState {
        store: store.clone(),
    }));
    Ok(TestContext { dir, store, app })
}
