use crate::prelude::*;
use syn::PathSegment;

///
/// Declaration
///
/// One annotated type as supplied by the symbol scanner: the enclosing
/// module path, the type's ident, and its parsed annotation payload.
/// Raw input; nothing here is validated.
///

#[derive(Clone, Debug)]
pub struct Declaration {
    pub namespace: Path,
    pub ident: Ident,
    pub args: StyleableArgs,
}

impl Declaration {
    #[must_use]
    pub const fn new(namespace: Path, ident: Ident, args: StyleableArgs) -> Self {
        Self {
            namespace,
            ident,
            args,
        }
    }

    /// Symbolic handle of the declared type.
    #[must_use]
    pub fn path(&self) -> Path {
        let mut path = self.namespace.clone();
        path.segments.push(PathSegment::from(self.ident.clone()));

        path
    }
}
