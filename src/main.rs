//! Course Portal terminal client.
//!
//! Wires the REST adapters, the file-backed session store and the shell,
//! then restores the previous session in the background while the first
//! page renders.

use std::error::Error;
use std::sync::Arc;

use tokio::io::BufReader;

use course_portal::adapters::auth::RestAuthApi;
use course_portal::adapters::catalog::RestCourseCatalog;
use course_portal::adapters::rest::{RestClient, RestClientConfig};
use course_portal::adapters::storage::FileKeyValueStore;
use course_portal::adapters::terminal::Shell;
use course_portal::application::{AppContext, SessionService};
use course_portal::config::AppConfig;
use course_portal::telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    telemetry::init(&config.client)?;

    tracing::info!(
        base_url = %config.api.base_url,
        storage = %config.storage.path.display(),
        "Starting course portal"
    );

    let rest = RestClient::new(
        RestClientConfig::new(&config.api.base_url).with_timeout(config.api.timeout()),
    )?;
    let store = Arc::new(FileKeyValueStore::new(&config.storage.path));
    let session = Arc::new(SessionService::new(
        store,
        Arc::new(RestAuthApi::new(rest.clone())),
    ));

    let context = AppContext::builder()
        .session(session.clone())
        .catalog(Arc::new(RestCourseCatalog::new(rest)))
        .build();

    let restore = tokio::spawn(async move { session.restore().await });

    let mut shell = Shell::new(context.navigator()?);
    shell
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await?;

    restore.abort();
    tracing::info!("Course portal stopped");
    Ok(())
}
