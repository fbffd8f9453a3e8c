use crate::{
    MAX_RESOURCE_NAME_LEN,
    build::{BuildError, StyleableSet},
    err,
    error::ErrorTree,
    report::Diagnostics,
};
use std::collections::HashMap;

/// Applier artifact names must be unique within a round: the generator
/// emits every applier of a round into one module. Collisions are
/// reported on every participant and all of them are withheld.
pub(crate) fn validate_applier_names(set: &mut StyleableSet, diags: &mut Diagnostics) {
    let mut counts: HashMap<String, u32> = HashMap::new();
    for info in set.iter() {
        *counts.entry(info.applier_name()).or_insert(0) += 1;
    }

    if counts.values().all(|&n| n <= 1) {
        return;
    }

    set.retain(|info| {
        let name = info.applier_name();
        if counts.get(&name).copied().unwrap_or(0) > 1 {
            let mut errs = ErrorTree::new();
            err!(
                errs,
                "generated applier '{name}' collides with another styleable declaration"
            );
            diags.report(info.ty(), BuildError::Validation(errs));

            false
        } else {
            true
        }
    });
}

// Resource identifiers mirror the constraints of the underlying resource
// table: dot-separated words of [A-Za-z0-9_].
pub(crate) fn validate_resource_name(errs: &mut ErrorTree, name: &str) {
    if name.len() > MAX_RESOURCE_NAME_LEN {
        err!(
            errs,
            "resource name '{name}' exceeds max length {MAX_RESOURCE_NAME_LEN}"
        );
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
    {
        err!(errs, "resource name '{name}' contains invalid characters");
    }
}

#[cfg(test)]
mod tests {
    use super::validate_resource_name;
    use crate::error::ErrorTree;

    #[test]
    fn accepts_plain_resource_names() {
        let mut errs = ErrorTree::new();
        validate_resource_name(&mut errs, "title_view.Large");

        assert!(errs.is_empty());
    }

    #[test]
    fn rejects_whitespace_and_length() {
        let mut errs = ErrorTree::new();
        validate_resource_name(&mut errs, "title view");
        validate_resource_name(&mut errs, &"x".repeat(200));

        assert_eq!(errs.len(), 2);
    }
}
