// used for date and datetime literal values
use chrono::{NaiveDate, NaiveDateTime};
// used for decimal numbers
use bigdecimal::BigDecimal;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

// used to print out readable forms of a literal
use std::fmt;
// literals take part in hashed collections
use std::hash::{Hash, Hasher};

/// A literal held by a property/value pair. Plain literals carry only a
/// lexical form; typed literals add a datatype URI and a materialized value.
/// Literals are immutable value objects with no identity of their own.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Literal {
    Plain { lexical: String },
    Typed(TypedLiteral),
}

impl Literal {
    pub fn plain(lexical: impl Into<String>) -> Self {
        Literal::Plain {
            lexical: lexical.into(),
        }
    }
    pub fn lexical(&self) -> &str {
        match self {
            Literal::Plain { lexical } => lexical,
            Literal::Typed(typed) => typed.lexical(),
        }
    }
    pub fn datatype(&self) -> Option<&str> {
        match self {
            Literal::Plain { .. } => None,
            Literal::Typed(typed) => Some(typed.datatype()),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.lexical())
    }
}

/// A literal with a datatype URI and the value its lexical form maps to.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypedLiteral {
    lexical: String,
    datatype: String,
    value: LiteralValue,
}

impl TypedLiteral {
    pub fn new(
        lexical: impl Into<String>,
        datatype: impl Into<String>,
        value: LiteralValue,
    ) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: datatype.into(),
            value,
        }
    }
    pub fn lexical(&self) -> &str {
        &self.lexical
    }
    pub fn datatype(&self) -> &str {
        &self.datatype
    }
    pub fn value(&self) -> &LiteralValue {
        &self.value
    }
}

impl fmt::Display for TypedLiteral {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\"{}\"^^<{}>", self.lexical, self.datatype)
    }
}

/// The materialized value of a typed literal.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum LiteralValue {
    String(String),
    Boolean(bool),
    Integer(i64),
    Double(f64),
    Decimal(BigDecimal),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Xml(XmlValue),
}

impl LiteralValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            LiteralValue::String(s) => Some(s),
            _ => None,
        }
    }
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            LiteralValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            LiteralValue::Integer(i) => Some(*i),
            _ => None,
        }
    }
    pub fn as_double(&self) -> Option<f64> {
        match self {
            LiteralValue::Double(d) => Some(*d),
            _ => None,
        }
    }
}

impl PartialEq for LiteralValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (LiteralValue::String(a), LiteralValue::String(b)) => a == b,
            (LiteralValue::Boolean(a), LiteralValue::Boolean(b)) => a == b,
            (LiteralValue::Integer(a), LiteralValue::Integer(b)) => a == b,
            // bitwise, so NaN values still compare consistently with hashing
            (LiteralValue::Double(a), LiteralValue::Double(b)) => a.to_bits() == b.to_bits(),
            (LiteralValue::Decimal(a), LiteralValue::Decimal(b)) => a == b,
            (LiteralValue::Date(a), LiteralValue::Date(b)) => a == b,
            (LiteralValue::DateTime(a), LiteralValue::DateTime(b)) => a == b,
            (LiteralValue::Xml(a), LiteralValue::Xml(b)) => a == b,
            _ => false,
        }
    }
}
impl Eq for LiteralValue {}

impl Hash for LiteralValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            LiteralValue::String(s) => s.hash(state),
            LiteralValue::Boolean(b) => b.hash(state),
            LiteralValue::Integer(i) => i.hash(state),
            LiteralValue::Double(d) => d.to_bits().hash(state),
            LiteralValue::Decimal(d) => d.hash(state),
            LiteralValue::Date(d) => d.hash(state),
            LiteralValue::DateTime(d) => d.hash(state),
            LiteralValue::Xml(x) => x.hash(state),
        }
    }
}

lazy_static! {
    // whitespace runs between element markup carry no meaning
    static ref BETWEEN_MARKUP: Regex = Regex::new(r">\s+<").unwrap();
}

/// An XML literal value. The markup is stored in normalized form, so
/// equality and hashing ignore whitespace between elements and two
/// serializations of the same element tree compare equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct XmlValue {
    normalized: String,
}

impl XmlValue {
    pub fn new(lexical: &str) -> Self {
        Self {
            normalized: BETWEEN_MARKUP
                .replace_all(lexical.trim(), "><")
                .into_owned(),
        }
    }
    pub fn as_str(&self) -> &str {
        &self.normalized
    }
}

impl fmt::Display for XmlValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.normalized)
    }
}
