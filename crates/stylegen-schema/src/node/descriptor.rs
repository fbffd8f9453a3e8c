use crate::{prelude::*, validate::naming};

///
/// Descriptor
///
/// Identity of one styleable declaration: where it lives, what it is
/// called, and the styleable resource name it maps to. Pure projection
/// of scanner data; construction cannot fail.
///

#[derive(Clone, Debug, Serialize)]
pub struct Descriptor {
    pub namespace: String,

    #[serde(serialize_with = "crate::node::ser_ident")]
    pub ident: Ident,

    #[serde(serialize_with = "crate::node::ser_path")]
    pub ty: Path,

    pub resource_name: String,
}

impl Descriptor {
    #[must_use]
    pub fn from_decl(decl: &Declaration) -> Self {
        Self {
            namespace: crate::node::path_text(&decl.namespace),
            ident: decl.ident.clone(),
            ty: decl.path(),
            resource_name: decl.args.resource_name(),
        }
    }

    /// Stable textual key for this declaration's type handle.
    #[must_use]
    pub fn route(&self) -> String {
        crate::node::path_text(&self.ty)
    }
}

impl ValidateNode for Descriptor {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();
        let ident = self.ident.to_string();

        if ident.len() > MAX_TYPE_NAME_LEN {
            err!(errs, "type name '{ident}' exceeds max length {MAX_TYPE_NAME_LEN}");
        }
        if !ident.is_ascii() {
            err!(errs, "type name '{ident}' must be ASCII");
        }
        if !self.resource_name.is_empty() {
            naming::validate_resource_name(&mut errs, &self.resource_name);
        }

        errs.result()
    }
}

impl VisitableNode for Descriptor {}

///
/// TESTS
///
