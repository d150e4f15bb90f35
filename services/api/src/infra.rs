use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use people_analytics::config::AppConfig;
use people_analytics::error::AppError;
use people_analytics::workflows::turnover::TurnoverRiskService;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Scoring service pinned to the configured reference date, if any.
pub(crate) fn turnover_service(config: &AppConfig) -> TurnoverRiskService {
    TurnoverRiskService::new().with_reference_date(config.scoring.reference_date)
}

pub(crate) fn configured_turnover_service() -> Result<TurnoverRiskService, AppError> {
    let config = AppConfig::load()?;
    Ok(turnover_service(&config))
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_trims_and_reports_bad_input() {
        assert_eq!(
            parse_date(" 2025-06-30 ").expect("parses"),
            NaiveDate::from_ymd_opt(2025, 6, 30).expect("valid date")
        );
        let err = parse_date("June 2025").expect_err("rejects prose");
        assert!(err.contains("YYYY-MM-DD"));
    }
}
