use crate::prelude::*;
use derive_more::{Deref, IntoIterator};

///
/// FieldList
///

#[derive(Clone, Debug, Default, Deref, IntoIterator, Serialize)]
pub struct FieldList(#[into_iterator(owned, ref)] Vec<StyleField>);

impl FieldList {
    #[must_use]
    pub const fn new(fields: Vec<StyleField>) -> Self {
        Self(fields)
    }

    #[must_use]
    pub fn get(&self, ident: &str) -> Option<&StyleField> {
        self.0.iter().find(|f| f.ident == ident)
    }
}

impl ValidateNode for FieldList {}

impl VisitableNode for FieldList {
    fn drive<V: Visitor>(&self, v: &mut V) {
        for node in self {
            node.accept(v);
        }
    }
}

///
/// StyleField
///
/// A pre-scanned style-able member: a field or setter eligible to
/// receive a styled value, bound to a symbolic attribute.
///

#[derive(Clone, Debug, Serialize)]
pub struct StyleField {
    #[serde(serialize_with = "crate::node::ser_ident")]
    pub ident: Ident,

    pub attr: String,

    #[serde(skip)]
    pub span: Span,
}

impl ValidateNode for StyleField {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if self.attr.is_empty() {
            errs.add_spanned(
                self.span,
                format!("member '{}' must bind a non-empty attr symbol", self.ident),
            );
        }

        errs.result()
    }
}

impl VisitableNode for StyleField {
    fn route_key(&self) -> String {
        self.ident.to_string()
    }
}
