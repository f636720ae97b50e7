//! Property-based tests for type mapping and generation
//!
//! Type trees are generated with arbitrary nesting and with container
//! children randomly left out, so both the success and the failure side of
//! the mapper are exercised.

use ftl_stubgen::prelude::*;
use ftl_stubgen::{ErrorKind, TypeExpr, map_type};
use proptest::prelude::*;

// Strategy: module and declaration names from a small pool so references collide
fn arb_name() -> impl Strategy<Value = String> {
    prop_oneof![Just("alpha"), Just("beta"), Just("gamma")].prop_map(str::to_string)
}

// Strategy: type trees, complete or not
fn arb_type() -> impl Strategy<Value = Type> {
    let leaf = prop_oneof![
        Just(Type::Int),
        Just(Type::Float),
        Just(Type::String),
        Just(Type::Bool),
        Just(Type::Time),
        (arb_name(), arb_name()).prop_map(|(m, n)| Type::data_ref(m, n)),
        (arb_name(), arb_name()).prop_map(|(m, n)| Type::verb_ref(m, n)),
    ];
    leaf.prop_recursive(6, 64, 2, |inner| {
        prop_oneof![
            proptest::option::weighted(0.9, inner.clone())
                .prop_map(|element| Type::Array { element: element.map(Box::new) }),
            (
                proptest::option::weighted(0.9, inner.clone()),
                proptest::option::weighted(0.9, inner)
            )
                .prop_map(|(key, value)| Type::Map {
                    key: key.map(Box::new),
                    value: value.map(Box::new),
                }),
        ]
    })
}

fn is_complete(ty: &Type) -> bool {
    match ty {
        Type::Array { element } => element.as_deref().is_some_and(is_complete),
        Type::Map { key, value } => {
            key.as_deref().is_some_and(is_complete) && value.as_deref().is_some_and(is_complete)
        }
        _ => true,
    }
}

fn count_refs(ty: &Type) -> usize {
    match ty {
        Type::Array { element } => element.as_deref().map_or(0, count_refs),
        Type::Map { key, value } => {
            key.as_deref().map_or(0, count_refs) + value.as_deref().map_or(0, count_refs)
        }
        Type::DataRef(_) | Type::VerbRef(_) => 1,
        _ => 0,
    }
}

fn arb_module() -> impl Strategy<Value = Module> {
    (arb_name(), proptest::collection::vec(arb_type(), 0..4)).prop_map(|(name, types)| {
        let data = types
            .iter()
            .enumerate()
            .fold(DataDecl::new("Record"), |data, (i, ty)| {
                data.with_field(format!("f{i}"), ty.clone())
            });
        let verb = VerbDecl::new("call").with_request(Type::data_ref(name.clone(), "Record"));
        Module::new(name).with_decl(data).with_decl(verb)
    })
}

proptest! {
    /// Property: mapping never panics and fails only for incomplete containers
    #[test]
    fn proptest_map_type_total(ty in arb_type()) {
        match map_type(&ty) {
            Ok(expr) => {
                prop_assert!(is_complete(&ty));
                prop_assert_eq!(expr.references().len(), count_refs(&ty));
            }
            Err(err) => {
                prop_assert!(!is_complete(&ty));
                prop_assert!(matches!(
                    err.kind(),
                    ErrorKind::MissingArrayElement | ErrorKind::MissingMapKey | ErrorKind::MissingMapValue
                ));
            }
        }
    }

    /// Property: leaves map to plain classes
    #[test]
    fn proptest_leaf_maps_to_class(
        ty in prop_oneof![
            Just(Type::Int),
            Just(Type::Float),
            Just(Type::String),
            Just(Type::Bool),
            Just(Type::Time),
        ]
    ) {
        let expr = map_type(&ty).unwrap();
        prop_assert!(matches!(expr, TypeExpr::Class(_)));
    }

    /// Property: generating twice yields identical units
    #[test]
    fn proptest_generate_deterministic(
        modules in proptest::collection::vec(arb_module(), 0..4),
        home in arb_name()
    ) {
        // Module names must be unique within a schema
        let mut seen = std::collections::HashSet::new();
        let modules: Vec<Module> = modules.into_iter().filter(|m| seen.insert(m.name.clone())).collect();
        let schema = Schema::new(modules);

        let first = generate(&schema, &home);
        let second = generate(&schema, &home);

        prop_assert_eq!(&first, &second);
        if let Ok(units) = first {
            let expected: Vec<&str> = schema
                .modules
                .iter()
                .map(|m| m.name.as_str())
                .filter(|name| *name != home)
                .collect();
            let actual: Vec<&str> = units.iter().map(|u| u.module.as_str()).collect();
            prop_assert_eq!(actual, expected);
        }
    }

    /// Property: field order survives into the generated record
    #[test]
    fn proptest_field_order_preserved(count in 1usize..12) {
        let data = (0..count)
            .rev()
            .fold(DataDecl::new("Record"), |data, i| data.with_field(format!("f{i}"), Type::Int));
        let schema = Schema::new(vec![Module::new("m").with_decl(data)]);

        let units = generate(&schema, "home").unwrap();

        let positions: Vec<usize> = (0..count)
            .rev()
            .map(|i| units[0].source.find(&format!("public val f{i}: Long,")).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
