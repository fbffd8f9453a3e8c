pub mod build;
pub mod error;
pub mod node;
pub mod report;
pub mod resolve;
pub mod types;
pub mod validate;
pub mod visit;

/// Maximum length for styleable type identifiers.
pub const MAX_TYPE_NAME_LEN: usize = 64;

/// Maximum length for styleable resource identifiers.
pub const MAX_RESOURCE_NAME_LEN: usize = 128;

/// Suffix appended to a styleable type's name to form the name of its
/// generated applier artifact.
pub const STYLE_APPLIER_SUFFIX: &str = "StyleApplier";

use crate::{build::BuildError, node::NodeError};
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        MAX_RESOURCE_NAME_LEN, MAX_TYPE_NAME_LEN, STYLE_APPLIER_SUFFIX, err,
        error::ErrorTree,
        node::*,
        types::{DeclarationKind, ResourceId},
        visit::Visitor,
    };
    pub use proc_macro2::Span;
    pub use serde::Serialize;
    pub use syn::{Ident, LitStr, Path};
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    BuildError(#[from] BuildError),

    #[error(transparent)]
    NodeError(#[from] NodeError),
}
