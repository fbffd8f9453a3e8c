use crate::{
    node::Descriptor,
    types::{DeclarationKind, ResourceId},
};
use thiserror::Error as ThisError;

///
/// ResolveError
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum ResolveError {
    #[error("no {kind} resource found for symbol '{symbol}'")]
    NotFound {
        kind: DeclarationKind,
        symbol: String,
    },

    #[error("{kind} resources cannot be resolved for this declaration")]
    Unsupported { kind: DeclarationKind },
}

///
/// ResourceResolver
///
/// Maps a symbolic resource identifier to a stable handle for one
/// (owner, declaration) pair. Implementations are supplied by the
/// surrounding tool; lookups are synchronous and must be deterministic
/// within a processing round.
///

pub trait ResourceResolver {
    fn resolve(
        &self,
        owner: &Descriptor,
        kind: DeclarationKind,
        symbol: &str,
    ) -> Result<ResourceId, ResolveError>;
}
