//! XML Schema datatype support for typed literals.

use std::str::FromStr;
use std::sync::Arc;

use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};

use crate::construct::Model;
use crate::datatype::{LiteralValue, TypedLiteral};
use crate::factory::TypedLiteralFactory;
use crate::vocab::{self, xsd, xsd_names};

/// Materializes XML Schema lexical forms. Unknown local names and
/// unparseable forms keep the lexical form verbatim as a string value.
pub struct XsdDatatypeFactory;

impl XsdDatatypeFactory {
    fn materialize(lexical: &str, local_name: &str) -> LiteralValue {
        match local_name {
            xsd_names::BOOLEAN => match lexical {
                "true" | "1" => LiteralValue::Boolean(true),
                "false" | "0" => LiteralValue::Boolean(false),
                _ => LiteralValue::String(lexical.to_owned()),
            },
            xsd_names::INTEGER
            | xsd_names::INT
            | xsd_names::LONG
            | xsd_names::SHORT
            | xsd_names::BYTE => lexical
                .parse::<i64>()
                .map(LiteralValue::Integer)
                .unwrap_or_else(|_| LiteralValue::String(lexical.to_owned())),
            xsd_names::DECIMAL => BigDecimal::from_str(lexical)
                .map(LiteralValue::Decimal)
                .unwrap_or_else(|_| LiteralValue::String(lexical.to_owned())),
            xsd_names::FLOAT | xsd_names::DOUBLE => lexical
                .parse::<f64>()
                .map(LiteralValue::Double)
                .unwrap_or_else(|_| LiteralValue::String(lexical.to_owned())),
            xsd_names::DATE => NaiveDate::from_str(lexical)
                .map(LiteralValue::Date)
                .unwrap_or_else(|_| LiteralValue::String(lexical.to_owned())),
            xsd_names::DATE_TIME => NaiveDateTime::from_str(lexical)
                .map(LiteralValue::DateTime)
                .unwrap_or_else(|_| LiteralValue::String(lexical.to_owned())),
            _ => LiteralValue::String(lexical.to_owned()),
        }
    }
}

impl TypedLiteralFactory for XsdDatatypeFactory {
    fn create_typed_literal(&self, lexical: &str, datatype: &str) -> TypedLiteral {
        let (_, local_name) = vocab::split_uri(datatype);
        TypedLiteral::new(lexical, datatype, Self::materialize(lexical, local_name))
    }
}

/// One-time setup registration for the XML Schema namespace, done before
/// any document is turned into resources.
pub fn register_xsd_datatypes(model: &mut Model) {
    model.register_typed_literal_factory(xsd::NS, Arc::new(XsdDatatypeFactory));
}
