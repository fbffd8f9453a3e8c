use crate::fixtures::{decl, lit, style, style_field};
use proptest::prelude::*;
use stylegen_schema::{
    build::{MemberIndex, build_all},
    node::{Declaration, Descriptor, StyleableArgs},
    report::Diagnostics,
    resolve::{ResolveError, ResourceResolver},
    types::{DeclarationKind, ResourceId},
};
use syn::parse_quote;

// Pure function of the symbol, so identical rounds resolve identically.
struct HashResolver;

impl ResourceResolver for HashResolver {
    fn resolve(
        &self,
        _owner: &Descriptor,
        _kind: DeclarationKind,
        symbol: &str,
    ) -> Result<ResourceId, ResolveError> {
        let raw = symbol
            .bytes()
            .fold(0x7f00_0000_u32, |acc, b| acc.wrapping_mul(31).wrapping_add(u32::from(b)));

        Ok(ResourceId::from_raw(raw))
    }
}

const DEPENDENCY_POOL: [&str; 3] = ["Image", "Text", "Badge"];

#[derive(Clone, Debug)]
struct Shape {
    value: Option<String>,
    with_field: bool,
    dependencies: Vec<usize>,
    styles: Vec<String>,
}

fn arb_shape() -> impl Strategy<Value = Shape> {
    (
        prop_oneof![Just(None), "[a-z][a-z0-9_]{0,8}".prop_map(Some)],
        any::<bool>(),
        prop::collection::vec(0..DEPENDENCY_POOL.len(), 0..4),
        prop::collection::vec("[A-Z][a-z]{0,6}", 0..3),
    )
        .prop_map(|(value, with_field, dependencies, styles)| Shape {
            value,
            with_field,
            dependencies,
            styles,
        })
}

fn declaration(shape: &Shape) -> Declaration {
    let dependencies = shape
        .dependencies
        .iter()
        .map(|&i| {
            let ident = crate::fixtures::ident(DEPENDENCY_POOL[i]);
            parse_quote!(crate::widgets::#ident)
        })
        .collect();

    let args = StyleableArgs {
        value: shape.value.as_deref().map(lit),
        dependencies,
        styles: shape
            .styles
            .iter()
            .map(|name| style(name, &format!("style/{name}")))
            .collect(),
    };

    decl(parse_quote!(crate::widgets), "Subject", args)
}

fn members(shape: &Shape) -> MemberIndex {
    let mut members = MemberIndex::new();
    if shape.with_field {
        members.insert_fields(
            &parse_quote!(crate::widgets::Subject),
            vec![style_field("corner_radius", "attr/cornerRadius")],
        );
    }

    members
}

fn run_round(shape: &Shape) -> (serde_json::Value, usize) {
    let decls = vec![declaration(shape)];
    let mut diags = Diagnostics::new();
    let set = build_all(&decls, &members(shape), &HashResolver, &mut diags);

    (serde_json::to_value(&set).unwrap(), diags.len())
}

proptest! {
    /// Identical inputs always produce a structurally identical round.
    #[test]
    fn build_is_pure(shape in arb_shape()) {
        let (first, first_errors) = run_round(&shape);
        let (second, second_errors) = run_round(&shape);

        prop_assert_eq!(first, second);
        prop_assert_eq!(first_errors, second_errors);
    }

    /// Every record that survives the round satisfies both invariants,
    /// and a record exists exactly when no error was reported.
    #[test]
    fn output_invariants_hold(shape in arb_shape()) {
        let decls = vec![declaration(&shape)];
        let mut diags = Diagnostics::new();
        let set = build_all(&decls, &members(&shape), &HashResolver, &mut diags);

        prop_assert_eq!(set.len() + diags.len(), 1);

        for info in &set {
            let has_resource = !info.resource_name().is_empty();
            prop_assert!(
                has_resource || !info.dependencies.is_empty() || !info.styles.is_empty()
            );
            if has_resource {
                prop_assert!(!info.fields.is_empty() || !info.attrs.is_empty());
            }
        }
    }

    /// Styles come back in declaration order with dependencies deduped in
    /// first-occurrence order.
    #[test]
    fn declaration_order_is_preserved(shape in arb_shape()) {
        let decls = vec![declaration(&shape)];
        let mut diags = Diagnostics::new();
        let set = build_all(&decls, &members(&shape), &HashResolver, &mut diags);

        for info in &set {
            let got: Vec<&str> = info.styles.iter().map(|s| s.name.as_str()).collect();
            let declared: Vec<&str> = shape.styles.iter().map(String::as_str).collect();
            prop_assert_eq!(got, declared);

            let mut expected_deps: Vec<&str> = Vec::new();
            for &i in &shape.dependencies {
                if !expected_deps.contains(&DEPENDENCY_POOL[i]) {
                    expected_deps.push(DEPENDENCY_POOL[i]);
                }
            }
            let got_deps: Vec<String> = info
                .dependencies
                .iter()
                .map(|p| p.segments.last().unwrap().ident.to_string())
                .collect();
            prop_assert_eq!(got_deps, expected_deps);
        }
    }
}
