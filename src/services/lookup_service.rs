//! Phone lookup service.
//!
//! Business logic for normalizing, classifying and formatting numbers.

use crate::config::Config;
use crate::domain::{CallingCode, NormalizedNumber};
use crate::error::{ServiceError, ServiceResult};
use crate::metrics::{LookupTimer, Metrics, MetricsSummary};
use crate::models::{ClassificationResult, FormattedNumber};
use crate::pipeline;
use crate::plan::NumberingPlan;
use std::sync::Arc;

/// Lookup service trait for business operations.
pub trait PhoneLookupService: Send + Sync {
    /// Normalize, parse and classify a raw number.
    ///
    /// `default_code` overrides the configured default calling code.
    fn classify(
        &self,
        number: &str,
        default_code: Option<&str>,
    ) -> ServiceResult<ClassificationResult>;

    /// Normalize a raw number without parsing it.
    fn normalize(&self, number: &str, default_code: Option<&str>)
        -> ServiceResult<NormalizedNumber>;

    /// Parse a raw number and render it in every supported format.
    fn format(&self, number: &str, default_code: Option<&str>) -> ServiceResult<FormattedNumber>;

    /// Snapshot of lookup metrics.
    fn metrics(&self) -> MetricsSummary;

    /// Version of the numbering-plan data in use.
    fn plan_version(&self) -> String;
}

/// Default implementation of PhoneLookupService.
pub struct PhoneLookupServiceImpl {
    plan: Arc<dyn NumberingPlan>,
    default_code: Option<CallingCode>,
    max_input_length: usize,
    metrics: Metrics,
}

/// Validation helper functions.
impl PhoneLookupServiceImpl {
    /// Validate raw number input.
    fn validate_number(&self, number: &str) -> ServiceResult<()> {
        if number.trim().is_empty() {
            return Err(ServiceError::InvalidInput(
                "Phone number cannot be empty".to_string(),
            ));
        }
        if number.len() > self.max_input_length {
            return Err(ServiceError::InvalidInput(format!(
                "Phone number too long (max {} characters)",
                self.max_input_length
            )));
        }
        Ok(())
    }

    /// Explicit code first, then the configured default.
    fn resolve_default_code(&self, explicit: Option<&str>) -> ServiceResult<Option<CallingCode>> {
        match explicit.filter(|code| !code.trim().is_empty()) {
            Some(code) => Ok(Some(code.parse::<CallingCode>()?)),
            None => Ok(self.default_code),
        }
    }
}

impl PhoneLookupServiceImpl {
    /// Create a new lookup service.
    pub fn new(plan: Arc<dyn NumberingPlan>, config: &Config) -> Self {
        Self {
            plan,
            default_code: config.default_country_code,
            max_input_length: config.max_input_length,
            metrics: Metrics::new(),
        }
    }

    fn normalize_checked(
        &self,
        number: &str,
        default_code: Option<&str>,
    ) -> ServiceResult<NormalizedNumber> {
        self.validate_number(number)?;

        match self.resolve_default_code(default_code)? {
            Some(code) => Ok(pipeline::normalize(number, code)),
            None => pipeline::normalize_explicit(number)
                .ok_or_else(|| ServiceError::MissingDefaultCode(number.to_string())),
        }
    }
}

impl PhoneLookupService for PhoneLookupServiceImpl {
    fn classify(
        &self,
        number: &str,
        default_code: Option<&str>,
    ) -> ServiceResult<ClassificationResult> {
        let normalized = self.normalize_checked(number, default_code)?;
        if normalized.default_code_applied() {
            self.metrics.record_default_code_applied();
        }

        let timer = LookupTimer::new(self.metrics.clone());
        match pipeline::classify_normalized(self.plan.as_ref(), normalized) {
            Ok(result) => {
                timer.complete();
                if result.is_valid {
                    self.metrics.record_valid_number();
                }
                tracing::debug!(
                    e164 = %result.formats.e164,
                    valid = result.is_valid,
                    line_type = %result.line_type,
                    "Classified number"
                );
                Ok(result)
            }
            Err(e) => {
                timer.complete_with_error();
                tracing::warn!("Failed to parse phone number: {}", e);
                Err(e.into())
            }
        }
    }

    fn normalize(
        &self,
        number: &str,
        default_code: Option<&str>,
    ) -> ServiceResult<NormalizedNumber> {
        self.normalize_checked(number, default_code)
    }

    fn format(&self, number: &str, default_code: Option<&str>) -> ServiceResult<FormattedNumber> {
        let normalized = self.normalize_checked(number, default_code)?;
        let parsed = pipeline::parse(self.plan.as_ref(), &normalized)?;
        Ok(pipeline::format_all(self.plan.as_ref(), &parsed))
    }

    fn metrics(&self) -> MetricsSummary {
        self.metrics.summary()
    }

    fn plan_version(&self) -> String {
        self.plan.version()
    }
}
