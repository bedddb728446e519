//! Language selection, fallback and display names.

use pretty_assertions::assert_eq;
use tagcheck_validator::prelude::*;

use crate::init_tracing;

#[derive(Record)]
struct Signup {
    #[validate("required,min=3,en=Username,tr=Kullanıcı adı")]
    username: String,
    #[validate("required,email,tr=E-posta")]
    email: String,
}

fn empty_signup() -> Signup {
    Signup {
        username: String::new(),
        email: String::new(),
    }
}

#[test]
fn test_english() {
    let validator = Validator::new();
    let err = validator.validate(&empty_signup()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Username is required;\n\
         Username must be at least 3 characters long;\n\
         email is required;\n\
         email cannot be empty"
    );
}

#[test]
fn test_turkish() {
    let validator = Validator::new();
    let err = validator
        .validate_with_lang(&empty_signup(), "tr")
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Kullanıcı adı alanı zorunludur;\n\
         Kullanıcı adı en az 3 karakter uzunluğunda olmalıdır;\n\
         E-posta alanı zorunludur;\n\
         E-posta boş olamaz"
    );
}

#[test]
fn test_default_language_and_set_lang() {
    let mut validator = Validator::with_lang("tr");
    let turkish = validator.validate(&empty_signup()).unwrap_err().to_string();
    assert!(turkish.starts_with("Kullanıcı adı alanı zorunludur"));

    validator.set_lang("en");
    let english = validator.validate(&empty_signup()).unwrap_err().to_string();
    assert!(english.starts_with("Username is required"));
}

#[test]
fn test_unknown_language_falls_back_to_english_messages() {
    init_tracing();
    let validator = Validator::new();
    let err = validator
        .validate_with_lang(&empty_signup(), "invalid_lang")
        .unwrap_err();

    // no override for "invalid_lang": the field name is used
    assert_eq!(
        err.violations().unwrap().messages()[0],
        "username is required"
    );
}

#[test]
fn test_empty_language_uses_fallback() {
    let validator = Validator::with_lang("tr");
    let err = validator.validate_with_lang(&empty_signup(), "").unwrap_err();
    assert!(err.to_string().starts_with("Username is required"));
}

#[test]
fn test_missing_key_uses_english_text() {
    let source = LayeredSource::new()
        .with_layer(InMemorySource::new().with_templates("de", [("required", "{0} fehlt")]))
        .with_layer(EmbeddedSource);
    let validator = Validator::builder().lang("de").message_source(source).build();

    let err = validator
        .validate(&Signup {
            username: "al".into(),
            email: String::new(),
        })
        .unwrap_err();

    assert_eq!(
        err.violations().unwrap().messages(),
        [
            "username must be at least 3 characters long",
            "email fehlt",
            "email cannot be empty",
        ]
    );
}

#[test]
fn test_templates_are_cached_per_language() {
    let validator = Validator::new();
    let _ = validator.validate_with_lang(&empty_signup(), "tr");
    let _ = validator.validate_with_lang(&empty_signup(), "en");

    assert_eq!(validator.messages().cached_languages(), ["en", "tr"]);
}
