use crate::prelude::*;
use darling::FromMeta;
use derive_more::Display;
use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use std::{fmt, num::ParseIntError};

///
/// DeclarationKind
///
/// Which declaration site a symbolic resource lookup originates from.
/// The resolver scopes its search per kind.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum DeclarationKind {
    Attr,
    Style,
    Styleable,
}

///
/// ResourceId
///
/// Opaque resolved resource handle. Stable for one processing round and
/// never inspected by the builder beyond identity; formatted as the
/// conventional eight-digit hex literal.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct ResourceId(u32);

impl ResourceId {
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn as_raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}

impl std::str::FromStr for ResourceId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);

        u32::from_str_radix(digits, 16).map(Self)
    }
}

impl FromMeta for ResourceId {
    fn from_string(s: &str) -> Result<Self, darling::Error> {
        s.parse::<Self>()
            .map_err(|_| darling::Error::unknown_value(s))
    }
}

impl ToTokens for ResourceId {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let raw = self.0;

        tokens.extend(quote!(::stylegen_schema::types::ResourceId::from_raw(#raw)));
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_id_round_trips_hex() {
        let id: ResourceId = "0x7f010001".parse().unwrap();

        assert_eq!(id.as_raw(), 0x7f01_0001);
        assert_eq!(id.to_string(), "0x7f010001");
    }

    #[test]
    fn resource_id_rejects_garbage() {
        assert!("style/Primary".parse::<ResourceId>().is_err());
    }

    #[test]
    fn declaration_kind_displays_variant_name() {
        assert_eq!(DeclarationKind::Style.to_string(), "Style");
    }
}
