use crate::prelude::*;
use quote::format_ident;
use syn::PathSegment;

///
/// Styleable
///
/// Canonical styling surface of one annotated type: the style-able
/// members and attrs the scanner found, the styleable resource name, the
/// symbolic dependencies whose appliers must also run, and the declared
/// named styles. Constructed once per valid declaration per round by the
/// builder; immutable afterwards.
///
/// If `resource_name` is non-empty then at least one of `fields` or
/// `attrs` is non-empty as well.
///

#[derive(Clone, Debug, Serialize)]
pub struct Styleable {
    pub descriptor: Descriptor,

    pub fields: FieldList,
    pub attrs: AttrList,

    #[serde(serialize_with = "crate::node::ser_paths")]
    pub dependencies: Vec<Path>,

    pub styles: StyleList,
}

impl Styleable {
    pub(crate) const fn new(
        descriptor: Descriptor,
        fields: FieldList,
        attrs: AttrList,
        dependencies: Vec<Path>,
        styles: StyleList,
    ) -> Self {
        Self {
            descriptor,
            fields,
            attrs,
            dependencies,
            styles,
        }
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.descriptor.namespace
    }

    #[must_use]
    pub const fn ident(&self) -> &Ident {
        &self.descriptor.ident
    }

    #[must_use]
    pub const fn ty(&self) -> &Path {
        &self.descriptor.ty
    }

    #[must_use]
    pub fn resource_name(&self) -> &str {
        &self.descriptor.resource_name
    }

    /// Name of the generated applier artifact for this type. Pure and
    /// referentially transparent: the same record always names the same
    /// artifact.
    #[must_use]
    pub fn applier_name(&self) -> String {
        format!("{}{STYLE_APPLIER_SUFFIX}", self.descriptor.ident)
    }

    #[must_use]
    pub fn applier_ident(&self) -> Ident {
        format_ident!("{}{}", self.descriptor.ident, STYLE_APPLIER_SUFFIX)
    }

    /// Fully qualified path of the generated applier, rooted in the
    /// declaring namespace.
    #[must_use]
    pub fn applier_path(&self) -> Path {
        let mut path = self.descriptor.ty.clone();
        path.segments.pop();
        path.segments.push(PathSegment::from(self.applier_ident()));

        path
    }
}

impl ValidateNode for Styleable {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();
        let resource_name = self.resource_name();

        // A record with nothing to declare would generate an applier with
        // nothing to do.
        if resource_name.is_empty() && self.dependencies.is_empty() && self.styles.is_empty() {
            err!(
                errs,
                "styleable declaration must have a value, a dependency, or a style"
            );
        }

        // A resource with no members to apply it to is a silently-unused
        // declaration.
        if !resource_name.is_empty() && self.fields.is_empty() && self.attrs.is_empty() {
            err!(
                errs,
                "value '{resource_name}' is declared but no members are style-able"
            );
        }

        errs.result()
    }
}

impl VisitableNode for Styleable {
    fn drive<V: Visitor>(&self, v: &mut V) {
        self.descriptor.accept(v);
        self.fields.accept(v);
        self.attrs.accept(v);
        self.styles.accept(v);
    }
}

///
/// TESTS
///
