//! Inventory assembly pipeline — fetch, extract, normalize, match,
//! construct.
//!
//! The three source fetches are issued concurrently and the pipeline
//! suspends until all three complete, failing fast on the first rejection:
//! assembly is a single atomic operation, not a partial-success
//! aggregation. Everything after the fetches is pure and cannot fail; a
//! response body that was not JSON extracts to an empty record set, and
//! per-record lookup misses resolve to absent fields.

use std::future::Future;

use carlot_core::config::Config;
use carlot_core::extract::extract_array;
use carlot_core::matcher::match_records;
use carlot_core::normalize::{normalize_body, normalize_engine, normalize_model};
use carlot_core::{Car, Inventory};
use carlot_sources::client::Payload;
use carlot_sources::{CarDataSource, SourceError};

/// Why an assembly was abandoned. Always retryable from the caller's point
/// of view.
#[derive(Debug, thiserror::Error)]
pub enum AssemblyError {
    #[error("fetching {endpoint}: {source}")]
    Fetch {
        endpoint: &'static str,
        #[source]
        source: SourceError,
    },
}

/// Assemble a fresh [`Inventory`] from the three record sources.
///
/// The returned inventory fully replaces any previous one; there is no
/// incremental merge.
pub async fn build_inventory<S: CarDataSource>(
    source: &S,
    cfg: &Config,
) -> Result<Inventory, AssemblyError> {
    let (models_payload, bodies_payload, engines_payload) = tokio::try_join!(
        tag(source.models(), "models"),
        tag(source.bodies(), "bodies"),
        tag(source.engines(), "engines"),
    )?;

    let models: Vec<_> = extract_array(models_payload.into_value())
        .into_iter()
        .map(normalize_model)
        .collect();
    let bodies: Vec<_> = extract_array(bodies_payload.into_value())
        .into_iter()
        .map(normalize_body)
        .collect();
    let engines: Vec<_> = extract_array(engines_payload.into_value())
        .into_iter()
        .map(normalize_engine)
        .collect();
    tracing::info!(
        models = models.len(),
        bodies = bodies.len(),
        engines = engines.len(),
        "fetched record sets"
    );

    let triples = match_records(models, &bodies, &engines);
    let cars: Vec<Car> = triples
        .iter()
        .map(|triple| {
            Car::from_triple(
                triple,
                cfg.api.model_year,
                cfg.inventory.default_stock,
                &cfg.inventory.default_image,
            )
        })
        .collect();
    tracing::info!(cars = cars.len(), "inventory assembled");

    Ok(Inventory::new(cars))
}

/// Attach the endpoint name to a fetch failure.
async fn tag(
    fetch: impl Future<Output = Result<Payload, SourceError>>,
    endpoint: &'static str,
) -> Result<Payload, AssemblyError> {
    fetch
        .await
        .map_err(|source| AssemblyError::Fetch { endpoint, source })
}
