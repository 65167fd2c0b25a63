
use crate::{validate, verify, IdentityNumberError, IdentityNumberValidator, NumberType};

const VALID_PERSONAL_NUMBERS: &[&str] = &[
    "201701102384",
    "141206-2380",
    "20080903-2386",
    "7101169295",
    "198107249289",
    "19021214-9819",
    "190910199827",
    "191006089807",
    "192109099180",
    "4607137454",
    "194510168885",
    "900118+9811",
    "189102279800",
    "189912299816",
];

const VALID_ORGANIZATION_NUMBERS: &[&str] = &[
    "556614-3185",
    "16556601-6399",
    "262000-1111",
    "857202-7566",
];

const INVALID_NUMBERS: &[&str] = &[
    "201701272394",
    "190302299813",
    "030229+9813",
    "18900118+9811",
];

#[test]
fn valid_personal_numbers() {
    for number in VALID_PERSONAL_NUMBERS {
        assert!(verify(number), "{number} should be valid");
        assert_eq!(
            validate(number).map(|n| n.number_type()),
            Ok(NumberType::Personal),
            "{number}"
        );
    }
}

#[test]
fn valid_organization_numbers() {
    for number in VALID_ORGANIZATION_NUMBERS {
        assert!(verify(number), "{number} should be valid");
        assert_eq!(
            validate(number).map(|n| n.number_type()),
            Ok(NumberType::Organization),
            "{number}"
        );
    }
}

#[test]
fn valid_coordination_number() {
    let number = validate("190910799824").unwrap();
    assert_eq!(number.number_type(), NumberType::Coordination);
    assert_eq!(
        number.date_of_birth().map(|d| d.to_string()),
        Some("1909-10-19".to_string())
    );
}

#[test]
fn invalid_numbers() {
    for number in INVALID_NUMBERS {
        assert!(!verify(number), "{number} should be invalid");
    }
}

#[test]
fn leap_day_of_centenarians() {
    // 1904 was a leap year, 1903 and 1900 were not
    assert!(verify("040229+9812"));
    assert_eq!(
        validate("030229+9813"),
        Err(IdentityNumberError::InvalidDateOfBirth)
    );
    assert_eq!(
        validate("000229+9816"),
        Err(IdentityNumberError::InvalidDateOfBirth)
    );
    assert!(verify("000229-9816"));
    assert!(verify("20000229-9816"));
    assert!(!verify("19000229-9816"));
}

#[test]
fn short_and_long_forms_agree() {
    let pairs = vec![
        ("850709-9805", "198507099805"),
        ("850769-9802", "198507699802"),
        ("811218-9876", "19811218-9876"),
        ("170110-2384", "201701102384"),
    ];
    for (short, long) in pairs {
        let short_number = validate(short).unwrap();
        let long_number = validate(long).unwrap();
        assert_eq!(short_number.number_type(), long_number.number_type());
        assert_eq!(short_number.date_of_birth(), long_number.date_of_birth());
        assert_eq!(short_number.digits(), long_number.digits());
    }
}

#[test]
fn verify_is_idempotent() {
    let validator = IdentityNumberValidator::default();
    let inputs = VALID_PERSONAL_NUMBERS
        .iter()
        .chain(VALID_ORGANIZATION_NUMBERS)
        .chain(INVALID_NUMBERS)
        .chain(&["", "not a number", "0402299810"]);
    for input in inputs {
        assert_eq!(validator.verify(input), validator.verify(input), "{input}");
        assert_eq!(
            validator.validate(input),
            validator.validate(input),
            "{input}"
        );
    }
}

#[test]
fn one_invalid_number_does_not_affect_the_next() {
    let validator = IdentityNumberValidator::default();
    let results: Vec<bool> = ["201701272394", "201701102384", "garbage", "556614-3185"]
        .iter()
        .map(|n| validator.verify(n))
        .collect();
    assert_eq!(results, vec![false, true, false, true]);
}
