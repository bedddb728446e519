//! Basic usage of tagcheck-validator.
//!
//! Run with `cargo run --example basic_usage -p tagcheck-validator`.

use serde_json::json;
use tagcheck_validator::prelude::*;

#[derive(Record)]
struct User {
    #[validate("required,min=3,max=20,en=Username,tr=Kullanıcı adı")]
    username: String,
    #[validate("required,email,tr=E-posta")]
    email: String,
    #[validate("required,min=8,uppercase,lowercase,special,tr=Parola")]
    password: String,
    #[validate("date,en=Birthday,tr=Doğum tarihi")]
    birthday: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let validator = Validator::new();

    println!("=== Valid record ===");
    let user = User {
        username: "ferris".into(),
        email: "ferris@example.com".into(),
        password: "Cr4b!Rave".into(),
        birthday: Some("2015-05-15".into()),
    };
    match validator.validate(&user) {
        Ok(()) => println!("ok"),
        Err(e) => println!("unexpected: {e}"),
    }

    println!("\n=== Invalid record, English ===");
    let user = User {
        username: "al".into(),
        email: "not-an-email".into(),
        password: "password".into(),
        birthday: Some("2015-02-30".into()),
    };
    if let Err(e) = validator.validate(&user) {
        println!("{e}");
    }

    println!("\n=== Invalid record, Turkish ===");
    if let Err(e) = validator.validate_with_lang(&user, "tr") {
        println!("{e}");
    }

    println!("\n=== Structured errors ===");
    if let Err(ValidateError::Invalid(errors)) = validator.validate(&user) {
        for error in &errors {
            println!("{:<10} {:<10} {:?}", error.field, error.rule, error.kind);
        }
    }

    println!("\n=== Custom rule ===");
    validator.register_fn("even", |value, ctx| match value.as_str() {
        Some(text) if text.chars().count() % 2 == 0 => Ok(()),
        Some(_) => Err(RuleFailure::custom(format!(
            "{} must have an even number of characters",
            ctx.display_name()
        ))),
        None => Err(ctx.unsupported(value)),
    });
    let schema = Schema::new("Code").field("code", "required,even");
    match validator.validate_json(&schema, &json!({ "code": "abc" })) {
        Ok(()) => println!("ok"),
        Err(e) => println!("{e}"),
    }

    println!("\n=== Structural errors ===");
    if let Err(e) = validator.validate(&None::<User>) {
        println!("{e}");
    }
    if let Err(e) = validator.validate(&42_u32) {
        println!("{e}");
    }
}
