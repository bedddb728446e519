//! JSON documents validated against hand-built schemas.

use pretty_assertions::assert_eq;
use serde_json::json;
use tagcheck_validator::prelude::*;

fn signup() -> Schema {
    Schema::new("Signup")
        .field("username", "required,min=3,max=20,en=Username")
        .field("email", "required,email")
        .field("birthday", "date")
}

#[test]
fn test_valid_document() {
    let validator = Validator::new();
    let body = json!({
        "username": "ferris",
        "email": "ferris@example.com",
        "birthday": "2015-05-15",
    });

    assert!(validator.validate_json(&signup(), &body).is_ok());
}

#[test]
fn test_invalid_document() {
    let validator = Validator::new();
    let body = json!({
        "username": "al",
        "email": "not-an-email",
        "birthday": "2015-02-30",
    });

    let err = validator.validate_json(&signup(), &body).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Username must be at least 3 characters long;\n\
         email is not a valid email address;\n\
         birthday is not a valid date (expected YYYY-MM-DD)"
    );
}

#[test]
fn test_missing_members() {
    let validator = Validator::new();
    let err = validator
        .validate_json(&signup(), &json!({ "username": "ferris" }))
        .unwrap_err();

    // the absent optional birthday is skipped by `date`
    let errors = err.violations().unwrap();
    assert_eq!(errors.messages(), ["email is required"]);
    assert_eq!(errors.errors()[0].kind, ViolationKind::EmptyValue);
}

#[test]
fn test_null_member_is_absent() {
    let validator = Validator::new();
    let body = json!({ "username": null, "email": "a@b.co", "birthday": null });

    let err = validator.validate_json(&signup(), &body).unwrap_err();
    assert_eq!(err.violations().unwrap().messages(), ["Username is required"]);
}

#[test]
fn test_number_uses_numeric_proxy() {
    let validator = Validator::new();
    let schema = Schema::new("Order").field("quantity", "min=1,max=10");

    assert!(validator.validate_json(&schema, &json!({ "quantity": 5 })).is_ok());
    let err = validator
        .validate_json(&schema, &json!({ "quantity": 11 }))
        .unwrap_err();
    assert_eq!(
        err.violations().unwrap().messages(),
        ["quantity must be at most 10 characters long"]
    );
}

#[test]
fn test_null_document_is_nil_input() {
    let validator = Validator::new();
    let err = validator.validate_json(&signup(), &json!(null)).unwrap_err();
    assert!(matches!(err, ValidateError::NilInput));
}

#[test]
fn test_non_object_document() {
    let validator = Validator::new();

    let err = validator.validate_json(&signup(), &json!([1, 2])).unwrap_err();
    assert!(matches!(err, ValidateError::NotAStruct { kind: "array" }));

    let err = validator.validate_json(&signup(), &json!("text")).unwrap_err();
    assert!(matches!(err, ValidateError::NotAStruct { kind: "string" }));
}

#[test]
fn test_json_record_with_explicit_language() {
    let validator = Validator::new();
    let schema = signup();
    let body = json!({ "username": "", "email": "a@b.co" });

    let err = validator
        .validate_with_lang(&JsonRecord::new(&schema, &body), "tr")
        .unwrap_err();
    assert_eq!(
        err.violations().unwrap().messages(),
        [
            "username alanı zorunludur",
            "username en az 3 karakter uzunluğunda olmalıdır",
        ]
    );
}
