use exam_core::config::AppConfig;
use exam_core::error::health::HealthError;
use exam_core::health::ServicesHealthIndicator;
use exam_core::repository::StubExamRepository;
use exam_core::service::ExamService;

/// Shared application state: read-only after construction, cloned per
/// request by axum.
#[derive(Clone)]
pub struct AppState {
    pub exam_service: ExamService<StubExamRepository>,
    pub health_indicator: ServicesHealthIndicator,
}

impl AppState {
    /// Wire the service graph from loaded configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, HealthError> {
        let exam_service = ExamService::new(StubExamRepository);
        let health_indicator = ServicesHealthIndicator::new(config.services.clone())?;

        Ok(Self {
            exam_service,
            health_indicator,
        })
    }
}
