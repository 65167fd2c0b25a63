// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod checksum;
mod identity_number;
mod observability;
mod validator;

// This is the public API of the library
pub use checksum::calculate_control_digit;
pub use identity_number::{IdentityNumber, IdentityNumberError, NumberType, Separator};
pub use observability::labels::Labels;
pub use validator::{validate, verify, IdentityNumberValidator, IdentityNumberValidatorBuilder};
