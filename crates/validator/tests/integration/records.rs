//! Derived records against the built-in rules.

use std::collections::HashMap;

use pretty_assertions::assert_eq;
use rstest::rstest;
use tagcheck_validator::prelude::*;

#[derive(Record, Default)]
struct User {
    #[validate("required,min=3,max=20")]
    username: String,
    #[validate("required,email")]
    email: String,
    #[validate("required,min=8")]
    password: String,
    // not validated
    #[allow(dead_code)]
    notes: Vec<u8>,
}

fn user(username: &str, email: &str, password: &str) -> User {
    User {
        username: username.into(),
        email: email.into(),
        password: password.into(),
        notes: Vec::new(),
    }
}

fn kinds(result: Result<(), ValidateError>) -> Vec<ViolationKind> {
    match result {
        Ok(()) => Vec::new(),
        Err(ValidateError::Invalid(errors)) => errors.errors().iter().map(|e| e.kind).collect(),
        Err(other) => panic!("unexpected structural error: {other}"),
    }
}

#[test]
fn test_valid_user_passes() {
    let validator = Validator::new();
    assert!(validator
        .validate(&user("john_doe", "john@example.com", "12345678"))
        .is_ok());
}

#[test]
fn test_empty_user_reports_every_clause() {
    let validator = Validator::new();
    let err = validator.validate(&User::default()).unwrap_err();

    assert_eq!(
        err.to_string(),
        "username is required;\n\
         username must be at least 3 characters long;\n\
         email is required;\n\
         email cannot be empty;\n\
         password is required;\n\
         password must be at least 8 characters long"
    );
}

#[test]
fn test_structured_errors() {
    let validator = Validator::new();
    let err = validator
        .validate(&user("al", "not-an-email", "12345678"))
        .unwrap_err();
    let errors = err.violations().unwrap();

    assert_eq!(errors.len(), 2);

    let username: Vec<_> = errors.by_field("username").collect();
    assert_eq!(username.len(), 1);
    assert_eq!(username[0].rule, "min");
    assert_eq!(username[0].kind, ViolationKind::BelowMinimum);
    assert_eq!(username[0].display_name, "username");

    let email: Vec<_> = errors.by_field("email").collect();
    assert_eq!(email[0].rule, "email");
    assert_eq!(email[0].kind, ViolationKind::InvalidFormat);
}

#[rstest]
#[case::at_min("abc", true)]
#[case::below_min("ab", false)]
#[case::at_max("abcdefghijklmnopqrst", true)]
#[case::above_max("abcdefghijklmnopqrstu", false)]
fn test_length_bounds_are_inclusive(#[case] username: &str, #[case] passes: bool) {
    let validator = Validator::new();
    let result = validator.validate(&user(username, "a@b.co", "12345678"));
    assert_eq!(result.is_ok(), passes);
}

#[derive(Record, Default)]
struct Presence {
    #[validate("required")]
    tags: Vec<String>,
    #[validate("required")]
    attributes: HashMap<String, String>,
    #[validate("required")]
    count: i32,
    #[validate("required")]
    ratio: f64,
    #[validate("required")]
    active: bool,
    #[validate("required")]
    nickname: Option<String>,
}

#[test]
fn test_presence_on_zero_values() {
    let validator = Validator::new();
    assert_eq!(
        kinds(validator.validate(&Presence::default())),
        vec![ViolationKind::EmptyValue; 6]
    );
}

#[test]
fn test_presence_on_filled_values() {
    let validator = Validator::new();
    let presence = Presence {
        tags: vec!["a".into()],
        attributes: HashMap::from([("k".to_string(), "v".to_string())]),
        count: -1,
        ratio: 0.5,
        active: true,
        nickname: Some(String::new()),
    };
    assert!(validator.validate(&presence).is_ok());
}

#[derive(Record)]
struct Contact {
    #[validate("email")]
    email: String,
}

#[rstest]
#[case::empty("", Some(ViolationKind::EmptyValue))]
#[case::no_at("invalidemail", Some(ViolationKind::InvalidFormat))]
#[case::valid("test@example.com", None)]
#[case::named("Test User <test@example.com>", None)]
#[case::trailing_comment("asjo@example.com (Adam)", None)]
#[case::comment_in_name("John (x) <john@example.com>", None)]
#[case::unclosed_comment("asjo@example.com (Adam", Some(ViolationKind::InvalidFormat))]
fn test_email(#[case] email: &str, #[case] expected: Option<ViolationKind>) {
    let validator = Validator::new();
    let result = validator.validate(&Contact {
        email: email.into(),
    });
    assert_eq!(kinds(result).first().copied(), expected);
}

#[test]
fn test_email_too_long() {
    let validator = Validator::new();
    let result = validator.validate(&Contact {
        email: format!("{}@example.com", "a".repeat(255)),
    });
    assert_eq!(kinds(result), [ViolationKind::TooLong]);
}

#[derive(Record)]
struct Event {
    #[validate("date")]
    day: String,
}

#[rstest]
#[case::valid("2024-04-27", None)]
#[case::leap_day("2024-02-29", None)]
#[case::day_overflow("2024-02-30", Some(ViolationKind::InvalidFormat))]
#[case::timestamp("2024-04-27T12:00:00", Some(ViolationKind::TooLong))]
fn test_date(#[case] day: &str, #[case] expected: Option<ViolationKind>) {
    let validator = Validator::new();
    let result = validator.validate(&Event { day: day.into() });
    assert_eq!(kinds(result).first().copied(), expected);
}

#[derive(Record)]
struct Password {
    #[validate("uppercase,lowercase,special")]
    value: String,
}

#[test]
fn test_empty_password_fails_every_character_class() {
    let validator = Validator::new();
    assert_eq!(
        kinds(validator.validate(&Password {
            value: String::new()
        })),
        [
            ViolationKind::MissingUppercase,
            ViolationKind::MissingLowercase,
            ViolationKind::MissingSpecialCharacter,
        ]
    );
    assert!(validator
        .validate(&Password {
            value: "Str0ng!pass".into()
        })
        .is_ok());
}

#[derive(Record)]
struct Profile {
    #[validate("min=18,max=130")]
    age: u8,
    #[validate("max=4")]
    score: f64,
    #[validate("min=1")]
    tags: Vec<String>,
    #[validate("email,min=5")]
    backup_email: Option<String>,
}

#[test]
fn test_numeric_length_proxy_and_unsupported_types() {
    let validator = Validator::new();
    let profile = Profile {
        age: 17,
        score: 12.25,
        tags: vec!["x".into()],
        backup_email: None,
    };

    assert_eq!(
        kinds(validator.validate(&profile)),
        [
            ViolationKind::BelowMinimum,
            ViolationKind::AboveMaximum,
            ViolationKind::UnsupportedType,
        ]
    );
}

#[test]
fn test_present_optional_is_checked() {
    let validator = Validator::new();
    let profile = Profile {
        age: 30,
        score: 1.5,
        tags: Vec::new(),
        backup_email: Some("bad".into()),
    };

    let err = validator.validate(&profile).unwrap_err();
    assert_eq!(
        err.violations().unwrap().messages(),
        [
            "tags: type list is not supported by this rule",
            "backup_email is not a valid email address",
            "backup_email must be at least 5 characters long",
        ]
    );
}

#[test]
fn test_display_name_override() {
    #[derive(Record)]
    struct Signup {
        #[validate("required,en=Username")]
        username: String,
    }

    let validator = Validator::new();
    let err = validator
        .validate_with_lang(
            &Signup {
                username: String::new(),
            },
            "en",
        )
        .unwrap_err();
    assert_eq!(err.to_string(), "Username is required");
}

#[test]
fn test_raw_identifier_and_generic_records() {
    #[derive(Record)]
    struct Tagged<T> {
        #[validate("required")]
        r#type: T,
        #[validate("required")]
        #[validate("en=Label")]
        label: String,
    }

    let validator = Validator::new();
    let err = validator
        .validate(&Tagged {
            r#type: 0_u32,
            label: String::new(),
        })
        .unwrap_err();

    let errors = err.violations().unwrap();
    assert_eq!(errors.errors()[0].field, "type");
    assert_eq!(errors.messages(), ["type is required", "Label is required"]);
}
