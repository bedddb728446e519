//! Property tests: validation is deterministic and order-preserving.

use proptest::prelude::*;
use tagcheck_validator::prelude::*;

#[derive(Debug, Record)]
struct Credentials {
    #[validate("required,min=3,max=12,en=Username")]
    username: String,
    #[validate("required,min=8,uppercase,lowercase,special")]
    password: String,
    #[validate("email")]
    email: String,
    #[validate("date")]
    joined: String,
}

fn credentials() -> impl Strategy<Value = Credentials> {
    (".{0,16}", ".{0,16}", "[a-z@.]{0,16}", "[0-9-]{0,12}").prop_map(
        |(username, password, email, joined)| Credentials {
            username,
            password,
            email,
            joined,
        },
    )
}

proptest! {
    #[test]
    fn validation_is_idempotent(record in credentials(), lang in prop::sample::select(vec!["en", "tr", "", "xx"])) {
        let validator = Validator::new();

        let first = validator.validate_with_lang(&record, lang).map_err(|e| e.to_string());
        let second = validator.validate_with_lang(&record, lang).map_err(|e| e.to_string());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn valid_records_always_pass(
        username in "[a-z]{3,12}",
        digits in "[0-9]{1,4}",
        day in 1u32..=28,
    ) {
        let record = Credentials {
            username: username.clone(),
            password: format!("Aa!{digits}xyzw"),
            email: format!("{username}@example.com"),
            joined: format!("2024-02-{day:02}"),
        };
        let validator = Validator::new();

        prop_assert!(validator.validate(&record).is_ok());
        prop_assert!(validator.validate(&record).is_ok());
    }

    #[test]
    fn errors_follow_field_order(record in credentials()) {
        let validator = Validator::new();
        if let Err(ValidateError::Invalid(errors)) = validator.validate(&record) {
            let order = ["username", "password", "email", "joined"];
            let positions: Vec<usize> = errors
                .errors()
                .iter()
                .filter_map(|e| order.iter().position(|f| *f == e.field))
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] <= w[1]));
        }
    }
}
