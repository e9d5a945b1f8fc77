//! Downstream service health probing and aggregation.

use crate::config::ServicesConfig;
use crate::error::health::HealthError;

use common::HttpStatusCode;

use std::collections::BTreeMap;
use std::time::Duration;

use log::{debug, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

/// Per-probe timeout, so one slow dependency cannot stall the whole check.
const PROBE_TIMEOUT_DURATION: Duration = Duration::from_secs(2);

/// Path probed on each downstream base URL.
const HEALTH_ENDPOINT: &str = "health";

/// Downstream service names, in reporting order.
pub const ASSESSMENT_SERVICE: &str = "assessment";
pub const STUDENT_SERVICE: &str = "student";
pub const CONFIG_SERVICE: &str = "config";
pub const SESSION_SERVICE: &str = "session";

/// Health of a single service, or of the aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HealthStatus {
    Up,
    Degraded,
    Unknown,
    Down,
}

impl HealthStatus {
    /// Fixed severity ranking: Down > Degraded > Unknown > Up.
    fn severity(self) -> u8 {
        match self {
            HealthStatus::Up => 0,
            HealthStatus::Unknown => 1,
            HealthStatus::Degraded => 2,
            HealthStatus::Down => 3,
        }
    }
}

/// Combine statuses worst-status-wins over the fixed severity ranking.
///
/// An empty slice aggregates to Unknown: claiming Up with nothing probed
/// would be a lie.
pub fn aggregate(statuses: &[HealthStatus]) -> HealthStatus {
    statuses
        .iter()
        .copied()
        .max_by_key(|status| status.severity())
        .unwrap_or(HealthStatus::Unknown)
}

/// One combined status plus the per-service breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedHealth {
    pub status: HealthStatus,
    pub services: BTreeMap<String, HealthStatus>,
}

impl AggregatedHealth {
    pub fn is_up(&self) -> bool {
        self.status == HealthStatus::Up
    }
}

/// Probes the four downstream services and reports one ordered result.
#[derive(Debug, Clone)]
pub struct ServicesHealthIndicator {
    client: Client,
    services: ServicesConfig,
}

impl ServicesHealthIndicator {
    /// Build an indicator over already-normalized service URLs.
    pub fn new(services: ServicesConfig) -> Result<Self, HealthError> {
        let client = Client::builder().timeout(PROBE_TIMEOUT_DURATION).build()?;

        Ok(Self { client, services })
    }

    /// Probe all four services concurrently and aggregate the outcome.
    ///
    /// Individual probe failures are mapped to a status, never
    /// propagated; this method cannot fail.
    pub async fn health(&self) -> AggregatedHealth {
        let (assessment, student, config, session) = tokio::join!(
            self.probe(ASSESSMENT_SERVICE, &self.services.assessment_url),
            self.probe(STUDENT_SERVICE, &self.services.student_url),
            self.probe(CONFIG_SERVICE, &self.services.config_url),
            self.probe(SESSION_SERVICE, &self.services.session_url),
        );

        let status = aggregate(&[assessment, student, config, session]);

        let mut services = BTreeMap::new();
        services.insert(String::from(ASSESSMENT_SERVICE), assessment);
        services.insert(String::from(STUDENT_SERVICE), student);
        services.insert(String::from(CONFIG_SERVICE), config);
        services.insert(String::from(SESSION_SERVICE), session);

        AggregatedHealth { status, services }
    }

    /// Probe one service's health endpoint.
    ///
    /// 2xx maps to Up, any other HTTP response to Down, and transport
    /// failures (timeout, refused connection, bad URL) to Unknown.
    async fn probe(&self, name: &str, base_url: &str) -> HealthStatus {
        // Base URLs are normalized to no trailing slash at config load.
        let url = match Url::parse(&format!("{base_url}/{HEALTH_ENDPOINT}")) {
            Ok(url) => url,
            Err(e) => {
                warn!("Health probe for {name} has an invalid URL {base_url}: {e}");
                return HealthStatus::Unknown;
            }
        };

        match self.client.get(url).send().await {
            Ok(response) => {
                let status = HttpStatusCode::from(response.status().as_u16());
                if status.is_success() {
                    debug!("Health probe for {name}: up ({status})");
                    HealthStatus::Up
                } else {
                    warn!("Health probe for {name}: down ({status})");
                    HealthStatus::Down
                }
            }
            Err(e) => {
                warn!("Health probe for {name} failed: {e}");
                HealthStatus::Unknown
            }
        }
    }
}
