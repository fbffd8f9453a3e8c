use crate::prelude::*;
use derive_more::{Deref, IntoIterator};

///
/// AttrList
///

#[derive(Clone, Debug, Default, Deref, IntoIterator, Serialize)]
pub struct AttrList(#[into_iterator(owned, ref)] Vec<Attr>);

impl AttrList {
    #[must_use]
    pub const fn new(attrs: Vec<Attr>) -> Self {
        Self(attrs)
    }

    #[must_use]
    pub fn get(&self, ident: &str) -> Option<&Attr> {
        self.0.iter().find(|a| a.ident == ident)
    }
}

impl ValidateNode for AttrList {}

impl VisitableNode for AttrList {
    fn drive<V: Visitor>(&self, v: &mut V) {
        for node in self {
            node.accept(v);
        }
    }
}

///
/// Attr
///
/// One stylable attribute source applicable to the owning type, with an
/// optional symbolic default value.
///

#[derive(Clone, Debug, Serialize)]
pub struct Attr {
    #[serde(serialize_with = "crate::node::ser_ident")]
    pub ident: Ident,

    pub attr: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    #[serde(skip)]
    pub span: Span,
}

impl ValidateNode for Attr {
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

impl VisitableNode for Attr {
    fn route_key(&self) -> String {
        self.ident.to_string()
    }
}
