//! Constraint declaration parsing
//!
//! A constraint declaration is the text attached to a field, for example
//! `"required,min=3,max=20,en=Username"`. It is split on `,` into ordered
//! [`Clause`]s; each clause is either a bare rule name or a
//! `token=argument` pair. A pair whose token equals the active language code
//! is a display-name override rather than a rule invocation.
//!
//! Declarations are parsed once when a [`Schema`](crate::schema::Schema) is
//! built and reused for every validation call.

use std::fmt;
use std::str::FromStr;

/// Separator between clauses of one declaration.
pub const CLAUSE_SEPARATOR: char = ',';

/// Separator between a clause token and its argument.
pub const ARGUMENT_SEPARATOR: char = '=';

// ============================================================================
// CLAUSE
// ============================================================================

/// One parsed clause of a constraint declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clause {
    raw: String,
    token: String,
    argument: Option<String>,
    malformed: bool,
}

impl Clause {
    /// Parses a single clause.
    ///
    /// Leading and trailing whitespace is ignored. A clause holding more
    /// than one `=` is kept but flagged as malformed; its token is the text
    /// before the first `=`.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let mut parts = raw.split(ARGUMENT_SEPARATOR);
        let token = parts.next().unwrap_or_default().to_string();
        let argument = parts.next().map(str::to_string);
        let malformed = parts.next().is_some();

        Self {
            raw: raw.to_string(),
            token,
            argument,
            malformed,
        }
    }

    /// The clause exactly as declared.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The rule name or language code.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The text after `=`, if any.
    pub fn argument(&self) -> Option<&str> {
        self.argument.as_deref()
    }

    /// `true` when the clause contains more than one `=`.
    pub fn is_malformed(&self) -> bool {
        self.malformed
    }

    /// `true` when this clause is a `<lang>=<name>` override for `lang`.
    ///
    /// Such clauses are never dispatched to the rule registry.
    pub fn is_language_override(&self, lang: &str) -> bool {
        !self.malformed && self.argument.is_some() && self.token == lang
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

// ============================================================================
// DECLARATION
// ============================================================================

/// An ordered list of clauses attached to one field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ConstraintDeclaration {
    clauses: Vec<Clause>,
}

impl ConstraintDeclaration {
    /// Parses a declaration. Empty segments (`"required,,min=3"`) are dropped.
    pub fn parse(declaration: &str) -> Self {
        let clauses = declaration
            .split(CLAUSE_SEPARATOR)
            .filter(|segment| !segment.trim().is_empty())
            .map(Clause::parse)
            .collect();

        Self { clauses }
    }

    /// Clauses in declaration order.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Returns `true` if the declaration has no clauses.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Returns the number of clauses.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// The display-name override for `lang`, if the declaration has one.
    ///
    /// When several overrides target the same language the last one wins.
    /// An empty override (`en=`) is kept and yields an empty name.
    pub fn display_name(&self, lang: &str) -> Option<&str> {
        self.clauses
            .iter()
            .filter(|clause| clause.is_language_override(lang))
            .filter_map(Clause::argument)
            .next_back()
    }
}

impl FromStr for ConstraintDeclaration {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for ConstraintDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                write!(f, "{CLAUSE_SEPARATOR}")?;
            }
            write!(f, "{clause}")?;
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
