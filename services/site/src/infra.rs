use metrics_exporter_prometheus::PrometheusHandle;
use skillkwiz::flows::Role;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_role(raw: &str) -> Result<Role, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "employee" => Ok(Role::Employee),
        "employer" => Ok(Role::Employer),
        other => Err(format!("unknown role '{other}' (expected employee or employer)")),
    }
}
