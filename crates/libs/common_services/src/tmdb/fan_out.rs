use crate::tmdb::{Leg, TmdbClient};
use serde_json::value::RawValue;
use std::collections::BTreeMap;
use tokio::task::JoinSet;
use tracing::{debug, warn};

/// Upstream sections of one detail request, keyed by section name.
pub type SectionMap = BTreeMap<String, Box<RawValue>>;

/// Runs all legs concurrently and waits for every one of them.
///
/// A leg that fails for any reason is left out of the result. The join loop is the
/// only writer of the map, so the returned map never reflects a partial write.
pub async fn fetch_sections(client: &TmdbClient, legs: Vec<Leg>) -> SectionMap {
    let mut tasks = JoinSet::new();
    for leg in legs {
        let client = client.clone();
        tasks.spawn(async move {
            let outcome = client.fetch_section(leg.url).await;
            (leg.name, outcome)
        });
    }

    let mut sections = SectionMap::new();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((name, Ok(body))) => {
                debug!(section = %name, "Upstream leg succeeded");
                sections.insert(name, body);
            }
            Ok((name, Err(e))) => warn!(section = %name, "Dropping upstream leg: {e}"),
            Err(e) => warn!("Upstream leg task did not complete: {e}"),
        }
    }
    sections
}
