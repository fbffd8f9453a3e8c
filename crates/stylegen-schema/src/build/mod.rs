use crate::{
    error::ErrorTree,
    node::{
        Attr, AttrList, Declaration, Descriptor, FieldList, NodeError, Style, StyleField,
        StyleList, Styleable, VisitableNode, path_text,
    },
    report::Diagnostics,
    resolve::{ResolveError, ResourceResolver},
    types::DeclarationKind,
    validate::validate_round,
    visit::ValidateVisitor,
};
use proc_macro2::Span;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use syn::Path;
use thiserror::Error as ThisError;

///
/// BuildError
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum BuildError {
    #[error("failed to resolve style '{style}': {source}")]
    Resolution {
        style: String,
        span: Span,
        source: ResolveError,
    },

    #[error("validation failed: {0}")]
    Validation(ErrorTree),
}

impl BuildError {
    /// Best-available span for diagnostic positioning.
    #[must_use]
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::Resolution { span, .. } => Some(*span),
            Self::Validation(tree) => tree.iter().find_map(|e| e.span),
        }
    }
}

///
/// MemberIndex
///
/// Pre-scanned member records, keyed by declared type. Passed into the
/// builder explicitly per round; a type with no scanned members reads as
/// empty lists.
///

#[derive(Debug, Default)]
pub struct MemberIndex {
    fields: HashMap<String, FieldList>,
    attrs: HashMap<String, AttrList>,
}

impl MemberIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_fields(&mut self, ty: &Path, fields: Vec<StyleField>) {
        self.fields.insert(path_text(ty), FieldList::new(fields));
    }

    pub fn insert_attrs(&mut self, ty: &Path, attrs: Vec<Attr>) {
        self.attrs.insert(path_text(ty), AttrList::new(attrs));
    }

    #[must_use]
    pub fn fields_for(&self, ty: &Path) -> FieldList {
        self.fields.get(&path_text(ty)).cloned().unwrap_or_default()
    }

    #[must_use]
    pub fn attrs_for(&self, ty: &Path) -> AttrList {
        self.attrs.get(&path_text(ty)).cloned().unwrap_or_default()
    }
}

///
/// StyleableSet
///
/// Round output: every record that survived validation, in declaration
/// order. Lookup is by symbolic type path so the generator can resolve
/// dependency references after the whole round is built.
///

#[derive(Debug, Default, Serialize)]
pub struct StyleableSet {
    styleables: Vec<Styleable>,
}

impl StyleableSet {
    fn insert(&mut self, info: Styleable) {
        self.styleables.push(info);
    }

    pub(crate) fn retain<F: FnMut(&Styleable) -> bool>(&mut self, f: F) {
        self.styleables.retain(f);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.styleables.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.styleables.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Styleable> {
        self.styleables.iter()
    }

    #[must_use]
    pub fn get(&self, ty: &Path) -> Option<&Styleable> {
        let key = path_text(ty);

        self.styleables.iter().find(|s| s.descriptor.route() == key)
    }

    /// Deferred dependency lookup for the generator.
    pub fn require(&self, ty: &Path) -> Result<&Styleable, NodeError> {
        self.get(ty).ok_or_else(|| NodeError::NotFound {
            path: path_text(ty),
        })
    }
}

impl<'a> IntoIterator for &'a StyleableSet {
    type Item = &'a Styleable;
    type IntoIter = std::slice::Iter<'a, Styleable>;

    fn into_iter(self) -> Self::IntoIter {
        self.styleables.iter()
    }
}

/// Build the canonical record for every declaration in the round.
///
/// Declarations are extracted independently and in input order; a failed
/// declaration is reported to the sink and does not abort the batch.
pub fn build_all(
    decls: &[Declaration],
    members: &MemberIndex,
    resolver: &dyn ResourceResolver,
    diags: &mut Diagnostics,
) -> StyleableSet {
    let mut set = StyleableSet::default();

    for decl in decls {
        let ty = decl.path();
        let fields = members.fields_for(&ty);
        let attrs = members.attrs_for(&ty);

        match build(decl, fields, attrs, resolver) {
            Ok(info) => set.insert(info),
            Err(e) => diags.report(&ty, e),
        }
    }

    validate_round(&mut set, diags);

    set
}

/// Build one canonical record. Fails fast for this declaration only:
/// the first resolver failure or the accumulated validation failures
/// abort this record, never the round.
pub fn build(
    decl: &Declaration,
    fields: FieldList,
    attrs: AttrList,
    resolver: &dyn ResourceResolver,
) -> Result<Styleable, BuildError> {
    let descriptor = Descriptor::from_decl(decl);

    // Dependencies stay symbolic; the referenced types may be generated
    // later in the same round.
    let dependencies = dedup_paths(&decl.args.dependencies);

    let mut styles = Vec::with_capacity(decl.args.styles.len());
    for arg in &decl.args.styles {
        let resource = resolver
            .resolve(&descriptor, DeclarationKind::Style, &arg.id.value())
            .map_err(|source| BuildError::Resolution {
                style: arg.name.value(),
                span: arg.id.span(),
                source,
            })?;

        styles.push(Style {
            name: arg.name.value(),
            resource,
            span: arg.name.span(),
        });
    }

    let styleable = Styleable::new(descriptor, fields, attrs, dependencies, StyleList::new(styles));

    let mut visitor = ValidateVisitor::new();
    styleable.accept(&mut visitor);
    visitor.errors.result().map_err(BuildError::Validation)?;

    Ok(styleable)
}

// First occurrence wins; later repeats of the same symbolic path drop
// out, preserving declaration order.
fn dedup_paths(paths: &[Path]) -> Vec<Path> {
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(paths.len());

    for path in paths {
        if seen.insert(path_text(path)) {
            out.push(path.clone());
        }
    }

    out
}

///
/// TESTS
///
