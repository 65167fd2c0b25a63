#[cfg(not(feature = "manual_test"))]
use afl::fuzz;
use swedish_id::{validate, IdentityNumberValidator};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(&IdentityNumberValidator::default(), data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    let validator = IdentityNumberValidator::default();
    run_raw_fuzz(&validator, &input);
}

fn run_raw_fuzz(validator: &IdentityNumberValidator, bytes: &[u8]) -> Option<()> {
    let input = std::str::from_utf8(bytes).ok()?;
    run_fuzz(validator, input);
    Some(())
}

fn run_fuzz(validator: &IdentityNumberValidator, input: &str) {
    let result = validator.validate(input);

    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Result: {:?}", result);
    }

    let first = validator.verify(input);
    let second = validator.verify(input);
    assert_eq!(first, second, "verify is not deterministic");
    assert_eq!(first, result.is_ok(), "verify disagrees with validate");
    assert_eq!(validate(input), result);

    if let Ok(number) = result {
        assert_eq!(number.digits().len(), 10);
        assert_eq!(
            number.date_of_birth().is_some(),
            number.number_type().has_date_of_birth()
        );
        // the 10 digit form of a valid number is valid too
        assert!(validator.verify(&number.normalized()));
    }
}
