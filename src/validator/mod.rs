pub mod metrics;

#[cfg(test)]
mod test;

use self::metrics::Metrics;
use crate::identity_number::validate_identity_number;
use crate::observability::labels::Labels;
use crate::{IdentityNumber, IdentityNumberError};

/// Validates Swedish personal, coordination and organization numbers.
///
/// A validator holds no state besides its metric handles, so it can be shared
/// between threads and used for any number of inputs.
pub struct IdentityNumberValidator {
    metrics: Metrics,
    labels: Labels,
}

impl IdentityNumberValidator {
    pub fn builder() -> IdentityNumberValidatorBuilder {
        IdentityNumberValidatorBuilder::new()
    }

    /// Validates `identity_number`, reporting why it was rejected.
    pub fn validate(&self, identity_number: &str) -> Result<IdentityNumber, IdentityNumberError> {
        let result = validate_identity_number(identity_number);
        match &result {
            Ok(number) => {
                tracing::trace!(number_type = %number.number_type(), "identity number is valid");
            }
            // The input is personal data and is never logged.
            Err(err) => {
                tracing::debug!(reason = err.reason(), "identity number is invalid: {err}");
            }
        }
        self.metrics.record(&result);
        result
    }

    /// Whether `identity_number` is a valid Swedish identity number.
    pub fn verify(&self, identity_number: &str) -> bool {
        self.validate(identity_number).is_ok()
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }
}

impl Default for IdentityNumberValidator {
    fn default() -> Self {
        IdentityNumberValidator::builder().build()
    }
}

pub struct IdentityNumberValidatorBuilder {
    labels: Labels,
}

impl IdentityNumberValidatorBuilder {
    pub fn new() -> Self {
        IdentityNumberValidatorBuilder {
            labels: Labels::empty(),
        }
    }

    /// Labels added to every metric the validator emits.
    pub fn labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    pub fn build(self) -> IdentityNumberValidator {
        IdentityNumberValidator {
            metrics: Metrics::new(&self.labels),
            labels: self.labels,
        }
    }
}

impl Default for IdentityNumberValidatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Validates `identity_number` with a validator carrying no metric labels.
///
/// Builds a new validator, and registers its counters, on every call so that metrics
/// go to the recorder installed at that time. Share an [`IdentityNumberValidator`]
/// instead when validating many numbers.
pub fn validate(identity_number: &str) -> Result<IdentityNumber, IdentityNumberError> {
    IdentityNumberValidator::default().validate(identity_number)
}

/// Whether `identity_number` is a valid Swedish identity number. Never fails: every
/// rejection reason collapses into `false`.
///
/// Like [`validate`], this builds a new validator on every call.
pub fn verify(identity_number: &str) -> bool {
    IdentityNumberValidator::default().verify(identity_number)
}
