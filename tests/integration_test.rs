use swedish_id::{
    calculate_control_digit, validate, verify, IdentityNumberError, IdentityNumberValidator,
    Labels, NumberType, Separator,
};

#[test]
fn end_to_end_scenarios() {
    let scenarios = vec![
        ("201701102384", Ok(NumberType::Personal)),
        ("556614-3185", Ok(NumberType::Organization)),
        ("190910799824", Ok(NumberType::Coordination)),
        ("201701272394", Err(IdentityNumberError::InvalidChecksum)),
        ("030229+9813", Err(IdentityNumberError::InvalidDateOfBirth)),
        ("18900118+9811", Err(IdentityNumberError::InvalidFormat)),
    ];
    for (input, expected) in scenarios {
        assert_eq!(
            validate(input).map(|number| number.number_type()),
            expected,
            "{input}"
        );
        assert_eq!(verify(input), expected.is_ok(), "{input}");
    }
}

#[test]
fn control_digit_of_reference_number() {
    let number = "8112189876";
    assert_eq!(calculate_control_digit(&number[..9]), Some(6));
    assert!(verify(number));
    assert_eq!(
        validate("8112189875"),
        Err(IdentityNumberError::InvalidChecksum)
    );
}

#[test]
fn coordination_numbers() {
    let valid = vec!["7010632391", "150882+2390", "210268+2396", "850769-9802"];
    for input in valid {
        let number = validate(input).unwrap();
        assert_eq!(number.number_type(), NumberType::Coordination, "{input}");
    }

    // right control digit, but 90 - 60 is not a day of February
    assert_eq!(
        validate("220090+2399"),
        Err(IdentityNumberError::InvalidDateOfBirth)
    );
    assert_eq!(
        validate("150882+2392"),
        Err(IdentityNumberError::InvalidChecksum)
    );
}

#[test]
fn validated_number_details() {
    let number = validate("150882+2390").unwrap();
    assert_eq!(number.separator(), Separator::Plus);
    assert!(number.century_marker());
    assert_eq!(
        number.date_of_birth().map(|date| date.to_string()),
        Some("1915-08-22".to_string())
    );
    assert_eq!(number.to_string(), "150882+2390");

    let number = validate("16556601-6399").unwrap();
    assert_eq!(number.digits(), "5566016399");
    assert_eq!(number.normalized(), "556601-6399");
    assert_eq!(number.date_of_birth(), None);
}

#[test]
fn serialize_validated_number() {
    let number = validate("20080903-2386").unwrap();
    let json = serde_json::to_value(&number).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "digits": "0809032386",
            "number_type": "personal",
            "separator": "hyphen",
            "date_of_birth": "2008-09-03",
        })
    );
}

#[test]
fn labelled_validator() {
    let validator = IdentityNumberValidator::builder()
        .labels(Labels::new(&[("source", "integration_test")]))
        .build();
    assert_eq!(
        validator.labels(),
        &Labels::new(&[("source", "integration_test")])
    );
    assert!(validator.verify("4607137454"));
    assert!(!validator.verify("4607137455"));
}

#[test]
fn arbitrary_inputs_never_panic() {
    let inputs = vec![
        "",
        "-",
        "+",
        "0000000000",
        "000000-0000",
        "9999999999",
        "00000000-0000",
        "19999999-9999",
        "🎅🎅🎅🎅🎅🎅-🎅🎅🎅🎅",
        "556614-3185556614-3185",
    ];
    for input in inputs {
        let _ = validate(input);
        let _ = verify(input);
    }
}
