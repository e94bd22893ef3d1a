use metrics_exporter_prometheus::PrometheusHandle;
use placement_registrar::error::AppError;
use placement_registrar::workflows::placement::{
    PlacementPolicy, PlacementRegistrar, PlacementSeedImporter, PlacementService,
};
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Registrar built from the roster at `seed`, or an empty one when no roster is configured.
pub(crate) fn load_registrar(
    seed: Option<&Path>,
    policy: PlacementPolicy,
) -> Result<PlacementRegistrar, AppError> {
    let Some(path) = seed else {
        return Ok(PlacementRegistrar::with_policy(policy));
    };

    let import = PlacementSeedImporter::from_path(path, policy)?;
    for rejected in &import.rejected {
        warn!(error = %rejected, "seeded application skipped");
    }
    info!(
        seed = %path.display(),
        skipped = import.rejected.len(),
        "placement roster imported"
    );
    Ok(import.registrar)
}

pub(crate) fn load_service(
    seed: Option<&Path>,
    policy: PlacementPolicy,
) -> Result<PlacementService, AppError> {
    load_registrar(seed, policy).map(PlacementService::new)
}
