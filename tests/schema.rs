use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};

use referent::construct::Model;
use referent::datatype::LiteralValue;
use referent::schema::register_xsd_datatypes;
use referent::vocab::xsd;

fn setup() -> Model {
    let mut model = Model::new();
    register_xsd_datatypes(&mut model);
    model
}

#[test]
fn integers_materialize() {
    let model = setup();
    let literal = model.create_typed_literal("42", Some(xsd::INTEGER)).unwrap();
    assert_eq!(literal.value().as_integer(), Some(42));
    let long = model.create_typed_literal("-7", Some(xsd::LONG)).unwrap();
    assert_eq!(long.value().as_integer(), Some(-7));
}

#[test]
fn booleans_materialize() {
    let model = setup();
    for form in ["true", "1"] {
        let literal = model.create_typed_literal(form, Some(xsd::BOOLEAN)).unwrap();
        assert_eq!(literal.value().as_bool(), Some(true));
    }
    for form in ["false", "0"] {
        let literal = model.create_typed_literal(form, Some(xsd::BOOLEAN)).unwrap();
        assert_eq!(literal.value().as_bool(), Some(false));
    }
}

#[test]
fn dates_materialize() {
    let model = setup();
    let literal = model
        .create_typed_literal("2021-03-04", Some(xsd::DATE))
        .unwrap();
    match literal.value() {
        LiteralValue::Date(date) => {
            assert_eq!(*date, NaiveDate::from_ymd_opt(2021, 3, 4).unwrap())
        }
        other => panic!("expected a date value, got {other:?}"),
    }
    let literal = model
        .create_typed_literal("2021-03-04T05:06:07", Some(xsd::DATE_TIME))
        .unwrap();
    match literal.value() {
        LiteralValue::DateTime(moment) => {
            assert_eq!(
                *moment,
                NaiveDateTime::from_str("2021-03-04T05:06:07").unwrap()
            )
        }
        other => panic!("expected a datetime value, got {other:?}"),
    }
}

#[test]
fn decimals_materialize() {
    let model = setup();
    let literal = model
        .create_typed_literal("1.50", Some(xsd::DECIMAL))
        .unwrap();
    match literal.value() {
        LiteralValue::Decimal(decimal) => {
            assert_eq!(*decimal, BigDecimal::from_str("1.50").unwrap())
        }
        other => panic!("expected a decimal value, got {other:?}"),
    }
}

#[test]
fn doubles_materialize() {
    let model = setup();
    let literal = model.create_typed_literal("2.5", Some(xsd::DOUBLE)).unwrap();
    assert_eq!(literal.value().as_double(), Some(2.5));
}

#[test]
fn unparseable_forms_fall_back_to_strings() {
    let model = setup();
    let literal = model
        .create_typed_literal("forty-two", Some(xsd::INTEGER))
        .unwrap();
    assert_eq!(literal.value().as_str(), Some("forty-two"));
    assert_eq!(literal.lexical(), "forty-two");
}

#[test]
fn unknown_local_names_fall_back_to_strings() {
    let model = setup();
    let literal = model
        .create_typed_literal("P1Y", Some("http://www.w3.org/2001/XMLSchema#duration"))
        .unwrap();
    assert_eq!(literal.value().as_str(), Some("P1Y"));
}

#[test]
fn without_registration_the_lexical_form_is_kept_verbatim() {
    let model = Model::new();
    let literal = model.create_typed_literal("42", Some(xsd::INTEGER)).unwrap();
    assert_eq!(literal.value().as_str(), Some("42"));
}

#[test]
fn unregistration_reverts_to_verbatim() {
    let mut model = setup();
    model.unregister_typed_literal_factory(xsd::NS);
    let literal = model.create_typed_literal("42", Some(xsd::INTEGER)).unwrap();
    assert_eq!(literal.value().as_str(), Some("42"));
}
