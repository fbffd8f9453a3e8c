//! Round-wide validation passes over the built record set.

pub mod naming;

use crate::{build::StyleableSet, report::Diagnostics};

/// Run whole-round validation after per-type builds. Offending records
/// are reported to the sink and withheld from the output set.
pub(crate) fn validate_round(set: &mut StyleableSet, diags: &mut Diagnostics) {
    naming::validate_applier_names(set, diags);
}
