use crate::prelude::*;
use derive_more::{Deref, IntoIterator};

///
/// StyleList
///

#[derive(Clone, Debug, Default, Deref, IntoIterator, Serialize)]
pub struct StyleList(#[into_iterator(owned, ref)] Vec<Style>);

impl StyleList {
    #[must_use]
    pub const fn new(styles: Vec<Style>) -> Self {
        Self(styles)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Style> {
        self.0.iter().find(|s| s.name == name)
    }
}

impl ValidateNode for StyleList {}

impl VisitableNode for StyleList {
    fn drive<V: Visitor>(&self, v: &mut V) {
        for node in self {
            node.accept(v);
        }
    }
}

///
/// Style
///
/// A named preset resolved to a stable resource handle. Declaration
/// order is preserved for reproducible generated output.
///

#[derive(Clone, Debug, Serialize)]
pub struct Style {
    pub name: String,

    pub resource: ResourceId,

    #[serde(skip)]
    pub span: Span,
}

impl ValidateNode for Style {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if self.name.is_empty() {
            errs.add_spanned(self.span, "style name must not be empty");
        }

        errs.result()
    }
}

impl VisitableNode for Style {
    fn route_key(&self) -> String {
        self.name.clone()
    }
}
