mod attr;
mod declaration;
mod descriptor;
mod field;
mod payload;
mod style;
mod styleable;

mod traits;

pub use self::attr::*;
pub use self::declaration::*;
pub use self::descriptor::*;
pub use self::field::*;
pub use self::payload::*;
pub use self::style::*;
pub use self::styleable::*;

pub use traits::*;

use serde::{Serializer, ser::SerializeSeq};
use syn::{Ident, Path};
use thiserror::Error as ThisError;

///
/// NodeError
///

#[derive(Debug, ThisError)]
pub enum NodeError {
    #[error("styleable type '{path}' was not built this round")]
    NotFound { path: String },
}

/// Stable textual rendering of a symbolic type path, used for identity,
/// route keys, and serialization.
#[must_use]
pub fn path_text(path: &Path) -> String {
    let mut out = String::new();
    if path.leading_colon.is_some() {
        out.push_str("::");
    }
    for (i, segment) in path.segments.iter().enumerate() {
        if i > 0 {
            out.push_str("::");
        }
        out.push_str(&segment.ident.to_string());
    }

    out
}

// Spans carry no stable value across rounds; syn handles serialize as
// their rendered text.
pub(crate) fn ser_path<S: Serializer>(path: &Path, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&path_text(path))
}

pub(crate) fn ser_paths<S: Serializer>(paths: &[Path], s: S) -> Result<S::Ok, S::Error> {
    let mut seq = s.serialize_seq(Some(paths.len()))?;
    for path in paths {
        seq.serialize_element(&path_text(path))?;
    }

    seq.end()
}

pub(crate) fn ser_ident<S: Serializer>(ident: &Ident, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(ident)
}

#[cfg(test)]
mod tests {
    use super::path_text;
    use syn::{Path, parse_quote};

    #[test]
    fn path_text_joins_segments() {
        let path: Path = parse_quote!(crate::widgets::Title);
        assert_eq!(path_text(&path), "crate::widgets::Title");

        let rooted: Path = parse_quote!(::app::View);
        assert_eq!(path_text(&rooted), "::app::View");
    }
}
