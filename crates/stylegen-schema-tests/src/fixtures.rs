//! Shared fixture declarations and a deterministic table-backed resolver.

use proc_macro2::Span;
use std::collections::HashMap;
use stylegen_schema::{
    node::{Attr, Declaration, Descriptor, StyleArg, StyleField, StyleableArgs},
    resolve::{ResolveError, ResourceResolver},
    types::{DeclarationKind, ResourceId},
};
use syn::{Ident, LitStr, Path};

///
/// TableResolver
///

#[derive(Debug, Default)]
pub struct TableResolver {
    table: HashMap<String, ResourceId>,
}

impl TableResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(entries: &[(&str, u32)]) -> Self {
        Self {
            table: entries
                .iter()
                .map(|(symbol, raw)| ((*symbol).to_string(), ResourceId::from_raw(*raw)))
                .collect(),
        }
    }
}

impl ResourceResolver for TableResolver {
    fn resolve(
        &self,
        _owner: &Descriptor,
        kind: DeclarationKind,
        symbol: &str,
    ) -> Result<ResourceId, ResolveError> {
        self.table
            .get(symbol)
            .copied()
            .ok_or_else(|| ResolveError::NotFound {
                kind,
                symbol: symbol.to_string(),
            })
    }
}

//
// declaration builders
//

#[must_use]
pub fn lit(s: &str) -> LitStr {
    LitStr::new(s, Span::call_site())
}

#[must_use]
pub fn ident(s: &str) -> Ident {
    Ident::new(s, Span::call_site())
}

#[must_use]
pub fn decl(namespace: Path, name: &str, args: StyleableArgs) -> Declaration {
    Declaration::new(namespace, ident(name), args)
}

#[must_use]
pub fn style(name: &str, id: &str) -> StyleArg {
    StyleArg {
        name: lit(name),
        id: lit(id),
    }
}

#[must_use]
pub fn style_field(member: &str, attr: &str) -> StyleField {
    StyleField {
        ident: ident(member),
        attr: attr.to_string(),
        span: Span::call_site(),
    }
}

#[must_use]
pub fn attr(member: &str, symbol: &str, default: Option<&str>) -> Attr {
    Attr {
        ident: ident(member),
        attr: symbol.to_string(),
        default: default.map(ToString::to_string),
        span: Span::call_site(),
    }
}
