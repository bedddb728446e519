//! Custom rule registration and the unknown-rule policy.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use pretty_assertions::assert_eq;
use tagcheck_validator::prelude::*;

#[derive(Record)]
struct Account {
    #[validate("required,counted")]
    handle: String,
}

#[test]
fn test_custom_rule_runs_once_per_call() {
    let validator = Validator::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    validator.register_fn("counted", move |_, _| {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(())
    });

    let account = Account {
        handle: "ferris".into(),
    };
    assert!(validator.validate(&account).is_ok());
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    assert!(validator.validate(&account).is_ok());
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

/// Rejects text containing whitespace.
struct NoWhitespace;

impl Rule for NoWhitespace {
    fn check(&self, value: &FieldValue<'_>, ctx: &RuleContext<'_>) -> Result<(), RuleFailure> {
        match value.as_str() {
            Some(text) if text.chars().any(char::is_whitespace) => Err(RuleFailure::custom(
                format!("{} must not contain whitespace", ctx.display_name()),
            )),
            Some(_) => Ok(()),
            None => Err(ctx.unsupported(value)),
        }
    }
}

#[derive(Record)]
struct Slug {
    #[validate("nowhitespace,prefix=app-,en=Slug")]
    value: String,
}

fn with_slug_rules() -> Validator {
    let validator = Validator::new();
    validator.register_rule("nowhitespace", NoWhitespace);
    validator.register_fn("prefix", |value, ctx| {
        let prefix = ctx.argument().ok_or_else(|| ctx.invalid_argument())?;
        match value.as_str() {
            Some(text) if text.starts_with(prefix) => Ok(()),
            Some(_) => Err(RuleFailure::custom(format!(
                "{} must start with '{prefix}'",
                ctx.display_name()
            ))),
            None => Err(ctx.unsupported(value)),
        }
    });
    validator
}

#[test]
fn test_rule_struct_and_closure_with_argument() {
    let validator = with_slug_rules();

    assert!(validator
        .validate(&Slug {
            value: "app-store".into()
        })
        .is_ok());

    let err = validator
        .validate(&Slug {
            value: "my store".into(),
        })
        .unwrap_err();
    let errors = err.violations().unwrap();
    assert_eq!(
        errors.messages(),
        ["Slug must not contain whitespace", "Slug must start with 'app-'"]
    );
    assert!(errors.errors().iter().all(|e| e.kind == ViolationKind::Custom));
}

#[test]
fn test_reregistration_replaces_builtin() {
    let validator = Validator::new();
    validator.register_fn("required", |_, _| Ok(()));
    validator.register_fn("counted", |_, _| Ok(()));

    assert!(validator
        .validate(&Account {
            handle: String::new()
        })
        .is_ok());
}

#[test]
fn test_unregistered_rules_are_skipped_by_default() {
    let validator = Validator::new();
    // "counted" is not registered here
    assert!(validator
        .validate(&Account {
            handle: "x".into()
        })
        .is_ok());
}

#[derive(Record)]
struct Typo {
    #[validate("requird,min=2,tr=Ad,zz=Name")]
    name: String,
}

#[test]
fn test_strict_mode_reports_unknown_rules() {
    let validator = Validator::builder().strict().build();
    let err = validator
        .validate(&Typo {
            name: "ok".into()
        })
        .unwrap_err();

    let errors = err.violations().unwrap();
    assert_eq!(
        errors.messages(),
        [
            "name: unknown validation rule 'requird'",
            "name: unknown validation rule 'zz'",
        ]
    );
    assert!(errors.errors().iter().all(|e| e.kind == ViolationKind::UnknownRule));
}

#[test]
fn test_shared_registry_between_validators() {
    let registry = Arc::new(RuleRegistry::with_defaults());
    let english = Validator::builder().registry(Arc::clone(&registry)).build();
    let turkish = Validator::builder()
        .lang("tr")
        .registry(Arc::clone(&registry))
        .build();

    english.register_fn("counted", |_, _| Err(RuleFailure::custom("nope")));

    let account = Account {
        handle: "x".into(),
    };
    assert!(english.validate(&account).is_err());
    assert!(turkish.validate(&account).is_err());
}
