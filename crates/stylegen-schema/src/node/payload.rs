use crate::prelude::*;
use darling::FromMeta;

///
/// StyleableArgs
///
/// Parsed `#[styleable(...)]` annotation payload. `value` names the
/// styleable resource the type's attrs map to; `dependency` entries are
/// symbolic type references (the referenced types may be generated later
/// in the same round, so they are never required to exist yet); `style`
/// entries declare named presets.
///

#[derive(Clone, Debug, Default, FromMeta)]
pub struct StyleableArgs {
    #[darling(default)]
    pub value: Option<LitStr>,

    #[darling(default, multiple, rename = "dependency")]
    pub dependencies: Vec<Path>,

    #[darling(default, multiple, rename = "style")]
    pub styles: Vec<StyleArg>,
}

impl StyleableArgs {
    /// Declared resource name, empty when absent.
    #[must_use]
    pub fn resource_name(&self) -> String {
        self.value.as_ref().map(LitStr::value).unwrap_or_default()
    }
}

///
/// StyleArg
///
/// One declared `(name, symbolic id)` style pair, unresolved.
///

#[derive(Clone, Debug, FromMeta)]
pub struct StyleArg {
    pub name: LitStr,
    pub id: LitStr,
}

///
/// TESTS
///
