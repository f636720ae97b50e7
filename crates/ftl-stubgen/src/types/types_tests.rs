#![allow(non_snake_case)]

use super::*;
use ftl_schema::ErrorKind;
use test_case::test_case;

#[test_case(Type::Int, kotlin_types::LONG ; "int")]
#[test_case(Type::Float, kotlin_types::FLOAT ; "float")]
#[test_case(Type::String, kotlin_types::STRING ; "string")]
#[test_case(Type::Bool, kotlin_types::BOOLEAN ; "bool")]
#[test_case(Type::Time, kotlin_types::OFFSET_DATE_TIME ; "time")]
fn map_type___leaf___maps_to_fixed_class(ty: Type, expected: ClassName) {
    let expr = map_type(&ty).unwrap();

    assert_eq!(expr, TypeExpr::Class(expected));
}

#[test]
fn map_type___array___parameterizes_array_list() {
    let expr = map_type(&Type::array(Type::String)).unwrap();

    assert_eq!(
        expr,
        TypeExpr::Generic {
            raw: kotlin_types::ARRAY_LIST,
            args: vec![TypeExpr::Class(kotlin_types::STRING)],
        }
    );
}

#[test]
fn map_type___map___parameterizes_key_and_value() {
    let expr = map_type(&Type::map(Type::String, Type::Int)).unwrap();

    assert_eq!(
        expr,
        TypeExpr::Generic {
            raw: kotlin_types::MAP,
            args: vec![
                TypeExpr::Class(kotlin_types::STRING),
                TypeExpr::Class(kotlin_types::LONG),
            ],
        }
    );
}

#[test]
fn map_type___nested_containers___recurse() {
    let ty = Type::map(Type::String, Type::array(Type::array(Type::Bool)));

    let expr = map_type(&ty).unwrap();

    let TypeExpr::Generic { args, .. } = expr else {
        panic!("expected generic map");
    };
    assert_eq!(
        args[1],
        TypeExpr::Generic {
            raw: kotlin_types::ARRAY_LIST,
            args: vec![TypeExpr::Generic {
                raw: kotlin_types::ARRAY_LIST,
                args: vec![TypeExpr::Class(kotlin_types::BOOLEAN)],
            }],
        }
    );
}

#[test]
fn map_type___data_ref___stays_a_qualified_reference() {
    let expr = map_type(&Type::data_ref("payments", "ChargeRequest")).unwrap();

    assert_eq!(expr, TypeExpr::Data(Ref::new("payments", "ChargeRequest")));
}

#[test]
fn map_type___verb_ref___stays_a_qualified_reference() {
    let expr = map_type(&Type::verb_ref("payments", "charge")).unwrap();

    assert_eq!(expr, TypeExpr::Verb(Ref::new("payments", "charge")));
}

#[test]
fn map_type___array_without_element___returns_missing_array_element() {
    let err = map_type(&Type::Array { element: None }).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::MissingArrayElement);
}

#[test]
fn map_type___map_without_value___returns_missing_map_value() {
    let ty = Type::Map {
        key: Some(Box::new(Type::String)),
        value: None,
    };

    let err = map_type(&ty).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::MissingMapValue);
}

#[test]
fn map_type___map_without_key___returns_missing_map_key() {
    let ty = Type::Map {
        key: None,
        value: Some(Box::new(Type::String)),
    };

    let err = map_type(&ty).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::MissingMapKey);
}

#[test]
fn map_type___map_without_key_or_value___reports_key_first() {
    let err = map_type(&Type::Map {
        key: None,
        value: None,
    })
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::MissingMapKey);
}

#[test]
fn map_type_at___nested_error___reports_full_path() {
    let path = SchemaPath::module("m").join(PathSegment::Field("f".into()));
    let ty = Type::array(Type::Map {
        key: Some(Box::new(Type::String)),
        value: Some(Box::new(Type::Array { element: None })),
    });

    let err = map_type_at(&ty, &path).unwrap_err();

    assert_eq!(
        err,
        SchemaError::MissingArrayElement {
            path: path
                .join(PathSegment::ArrayElement)
                .join(PathSegment::MapValue),
        }
    );
}

#[test]
fn TypeExpr___references___collects_nested_refs_in_order() {
    let ty = Type::map(
        Type::String,
        Type::array(Type::data_ref("ledger", "Entry")),
    );
    let expr = map_type(&ty).unwrap();

    let refs = expr.references();

    assert_eq!(refs, vec![&Ref::new("ledger", "Entry")]);
}

#[test]
fn TypeExpr___verb_references___skips_data_refs() {
    let ty = Type::map(
        Type::verb_ref("ledger", "record"),
        Type::array(Type::data_ref("ledger", "Entry")),
    );
    let expr = map_type(&ty).unwrap();

    let refs = expr.verb_references();

    assert_eq!(refs, vec![&Ref::new("ledger", "record")]);
}
