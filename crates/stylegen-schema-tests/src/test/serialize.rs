use crate::fixtures::{TableResolver, decl, style, style_field};
use serde_json::json;
use stylegen_schema::{
    build::{MemberIndex, build_all},
    node::StyleableArgs,
    report::Diagnostics,
};
use syn::parse_quote;

fn build_round() -> serde_json::Value {
    let args = StyleableArgs {
        value: Some(crate::fixtures::lit("title_view")),
        dependencies: vec![parse_quote!(crate::widgets::Image)],
        styles: vec![style("Primary", "style/Primary")],
    };
    let decls = vec![decl(parse_quote!(crate::widgets), "Title", args)];

    let mut members = MemberIndex::new();
    members.insert_fields(
        &parse_quote!(crate::widgets::Title),
        vec![style_field("corner_radius", "attr/cornerRadius")],
    );

    let resolver = TableResolver::with(&[("style/Primary", 0x7f01_0001)]);
    let mut diags = Diagnostics::new();
    let set = build_all(&decls, &members, &resolver, &mut diags);

    assert!(diags.is_empty());

    serde_json::to_value(&set).unwrap()
}

#[test]
fn canonical_record_serializes_with_symbolic_paths() {
    let value = build_round();
    let record = &value["styleables"][0];

    assert_eq!(record["descriptor"]["namespace"], json!("crate::widgets"));
    assert_eq!(record["descriptor"]["ident"], json!("Title"));
    assert_eq!(record["descriptor"]["ty"], json!("crate::widgets::Title"));
    assert_eq!(record["descriptor"]["resource_name"], json!("title_view"));
    assert_eq!(record["dependencies"], json!(["crate::widgets::Image"]));
    assert_eq!(record["fields"][0]["ident"], json!("corner_radius"));
    assert_eq!(record["styles"][0]["name"], json!("Primary"));
    assert_eq!(record["styles"][0]["resource"], json!(0x7f01_0001_u32));
}

#[test]
fn serialization_is_deterministic() {
    assert_eq!(
        serde_json::to_string(&build_round()).unwrap(),
        serde_json::to_string(&build_round()).unwrap()
    );
}
