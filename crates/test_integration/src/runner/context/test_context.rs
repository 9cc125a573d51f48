use crate::runner::context::context_utils::{create_test_database, force_drop_db};
use crate::runner::context::mock_upstream::spawn_mock_upstream;
use app_state::{AppSettings, load_settings_from_path};
use color_eyre::eyre::{Result, eyre};
use reqwest::Client;
use sqlx::PgPool;
use std::path::PathBuf;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};
use url::Url;

const DB_NAME: &str = "media_catalog_test";

/// The main context for our integration tests.
pub struct TestContext {
    pub pool: PgPool,
    pub settings: AppSettings,
    pub http_client: Client,
    management_pool: PgPool,
    api_handle: JoinHandle<()>,
    upstream_handle: JoinHandle<()>,
}

impl TestContext {
    /// Sets up a dedicated database, a mock upstream and the api server.
    /// Returns `None` when `TEST_DATABASE_URL` isn't set.
    pub async fn new() -> Result<Option<Self>> {
        let Ok(database_url) = std::env::var("TEST_DATABASE_URL") else {
            return Ok(None);
        };
        info!("Setting up test environment...");

        let settings_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("assets/settings.yaml")
            .canonicalize()?;
        let mut settings = load_settings_from_path(&settings_path, false)?;

        // 1. Set up the dedicated test database
        let (pool, management_pool) = create_test_database(&database_url, DB_NAME).await?;

        // 2. Point the upstream client at the mock
        let (upstream_addr, upstream_handle) = spawn_mock_upstream().await?;
        settings.tmdb.base_url = Url::parse(&format!("http://{upstream_addr}/3/"))?;

        // 3. Spawn the api on a free port
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let api_addr = listener.local_addr()?;
        settings.api.port = u32::from(api_addr.port());
        settings.api.public_url = format!("http://{api_addr}");
        let api_handle = Self::spawn_api(listener, &pool, &settings);

        // 4. Wait for the API to be ready to accept traffic
        let http_client = Client::new();
        Self::wait_for_healthy_api(&settings, &http_client).await?;

        info!("Test environment is ready.");
        Ok(Some(Self {
            pool,
            settings,
            http_client,
            management_pool,
            api_handle,
            upstream_handle,
        }))
    }

    fn spawn_api(listener: TcpListener, pool: &PgPool, settings: &AppSettings) -> JoinHandle<()> {
        let api_pool = pool.clone();
        let api_settings = settings.clone();
        tokio::spawn(async move {
            if let Err(e) = api::serve_on(listener, api_pool, api_settings).await {
                error!("API server failed: {}", e);
            }
        })
    }

    /// Polls the `/health` endpoint until it receives a successful response or times out.
    async fn wait_for_healthy_api(settings: &AppSettings, http_client: &Client) -> Result<()> {
        for attempt in 1..=20 {
            info!("Health check attempt {}...", attempt);
            let health_url = format!("{}/health", &settings.api.public_url);
            match http_client.get(&health_url).send().await {
                Ok(response) if response.status().is_success() => {
                    info!("API is healthy!");
                    return Ok(());
                }
                Ok(response) => {
                    warn!(
                        "API health check returned non-success status: {}",
                        response.status()
                    );
                }
                Err(e) => {
                    warn!("API health check failed: {:?}. Retrying...", e);
                }
            }
            tokio::time::sleep(Duration::from_millis(250)).await;
        }
        Err(eyre!(
            "API did not become healthy within the timeout period."
        ))
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.settings.api.public_url)
    }

    /// Stops the background tasks and drops the test database.
    pub async fn teardown(self) -> Result<()> {
        self.api_handle.abort();
        self.upstream_handle.abort();
        self.pool.close().await;
        info!("Dropping test database: {}", DB_NAME);
        force_drop_db(&self.management_pool, DB_NAME).await?;
        info!("Teardown complete.");
        Ok(())
    }
}
