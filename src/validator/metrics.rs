use crate::observability::labels::Labels;
use crate::{IdentityNumber, IdentityNumberError, NumberType};
use metrics::{counter, Counter};

const VALIDATIONS: &str = "identity_number.validations";
const OUTCOME: &str = "outcome";
const TYPE: &str = "type";
const REASON: &str = "reason";

/// Counters of a validator, one per outcome.
pub struct Metrics {
    pub valid_personal: Counter,
    pub valid_coordination: Counter,
    pub valid_organization: Counter,
    pub invalid_format: Counter,
    pub invalid_checksum: Counter,
    pub invalid_date_of_birth: Counter,
}

impl Metrics {
    pub fn new(labels: &Labels) -> Self {
        Metrics {
            valid_personal: valid_counter(labels, NumberType::Personal),
            valid_coordination: valid_counter(labels, NumberType::Coordination),
            valid_organization: valid_counter(labels, NumberType::Organization),
            invalid_format: invalid_counter(labels, IdentityNumberError::InvalidFormat),
            invalid_checksum: invalid_counter(labels, IdentityNumberError::InvalidChecksum),
            invalid_date_of_birth: invalid_counter(labels, IdentityNumberError::InvalidDateOfBirth),
        }
    }

    pub fn record(&self, result: &Result<IdentityNumber, IdentityNumberError>) {
        let counter = match result {
            Ok(number) => match number.number_type() {
                NumberType::Personal => &self.valid_personal,
                NumberType::Coordination => &self.valid_coordination,
                NumberType::Organization => &self.valid_organization,
            },
            Err(IdentityNumberError::InvalidFormat) => &self.invalid_format,
            Err(IdentityNumberError::InvalidChecksum) => &self.invalid_checksum,
            Err(IdentityNumberError::InvalidDateOfBirth) => &self.invalid_date_of_birth,
        };
        counter.increment(1);
    }
}

fn valid_counter(labels: &Labels, number_type: NumberType) -> Counter {
    let number_type: &'static str = number_type.into();
    counter!(
        VALIDATIONS,
        labels.clone_with_labels(&[(OUTCOME, "valid"), (TYPE, number_type)])
    )
}

fn invalid_counter(labels: &Labels, error: IdentityNumberError) -> Counter {
    counter!(
        VALIDATIONS,
        labels.clone_with_labels(&[(OUTCOME, "invalid"), (REASON, error.reason())])
    )
}

impl Default for Metrics {
    fn default() -> Self {
        Metrics::new(&Labels::empty())
    }
}
