use crate::{build::BuildError, node::path_text};
use proc_macro2::{Span, TokenStream};
use std::fmt;
use syn::Path;

///
/// Diagnostic
///
/// One reported failure, attached to the offending type.
///

#[derive(Debug)]
pub struct Diagnostic {
    pub ty: Path,
    pub error: BuildError,
}

impl Diagnostic {
    /// Render as a compiler error at the best-available span.
    #[must_use]
    pub fn to_syn_error(&self) -> syn::Error {
        let span = self.error.span().unwrap_or_else(Span::call_site);

        syn::Error::new(span, self.to_string())
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "styleable '{}': {}", path_text(&self.ty), self.error)
    }
}

///
/// Diagnostics
///
/// Accumulating, non-fatal error sink for one processing round. A type
/// that fails reports here and drops out of the output set; unrelated
/// types are unaffected. The surrounding tool drains the sink once per
/// round and fails the round when anything accumulated.
///

#[derive(Debug, Default)]
pub struct Diagnostics {
    diags: Vec<Diagnostic>,
}

impl Diagnostics {
    #[must_use]
    pub const fn new() -> Self {
        Self { diags: Vec::new() }
    }

    pub fn report(&mut self, ty: &Path, error: BuildError) {
        self.diags.push(Diagnostic {
            ty: ty.clone(),
            error,
        });
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.diags.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.diags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diags.iter()
    }

    /// Compile-error tokens for every accumulated diagnostic, for the
    /// surrounding tool to splice into its output.
    #[must_use]
    pub fn to_compile_errors(&self) -> TokenStream {
        self.diags
            .iter()
            .map(|d| d.to_syn_error().to_compile_error())
            .collect()
    }

    /// Round outcome: `Err` exactly when anything was reported.
    pub fn into_result(self) -> Result<(), Self> {
        if self.diags.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for d in &self.diags {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{d}")?;
            first = false;
        }

        Ok(())
    }
}

///
/// TESTS
///
