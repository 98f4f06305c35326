//! Product type labels offered by the form.

pub const PRODUCT_TYPES: [&str; 18] = [
    "PENEIRA ATC 1045",
    "PENEIRA ATC 1050",
    "PENEIRA ATC 1065",
    "PENEIRA ATC 1065 AUTOLIMPANTE VENO",
    "PENEIRA ATC 1065 AUTOLIMPANTE SERPA",
    "PENEIRA ATC 1065 HARPA III",
    "PENEIRA GALVANIZADO",
    "PENEIRA INOX AISI 304",
    "PENEIRA INOX AISI 316",
    "TELA PV ATC 1045",
    "TELA PV ATC 1050",
    "TELA PV ATC 1065",
    "TELA PV ATC 1065 AUTOLIMPANTE VENO",
    "TELA PV ATC 1065 AUTOLIMPANTE SERPA",
    "TELA PV ATC 1065 HARPA III",
    "TELA PV GALVANIZADO",
    "TELA PV INOX AISI 304",
    "TELA PV INOX AISI 316",
];

pub fn is_catalog_product(label: &str) -> bool {
    catalog_product(label).is_some()
}

/// Canonical catalog spelling for `label`, if it names a catalog product.
pub fn catalog_product(label: &str) -> Option<&'static str> {
    let normalized = label.trim();
    if normalized.is_empty() {
        return None;
    }

    PRODUCT_TYPES
        .iter()
        .copied()
        .find(|candidate| candidate.eq_ignore_ascii_case(normalized))
}

#[cfg(test)]
mod tests {
    use super::{PRODUCT_TYPES, catalog_product, is_catalog_product};
    use std::collections::HashSet;

    #[test]
    fn catalog_labels_are_unique_and_upper_case() {
        let unique: HashSet<_> = PRODUCT_TYPES.iter().collect();
        assert_eq!(unique.len(), PRODUCT_TYPES.len());
        assert!(
            PRODUCT_TYPES
                .iter()
                .all(|label| label.to_uppercase() == *label)
        );
    }

    #[test]
    fn lookup_is_trimmed_and_case_insensitive() {
        assert_eq!(
            catalog_product("  tela pv inox aisi 316 "),
            Some("TELA PV INOX AISI 316")
        );
        assert!(is_catalog_product("PENEIRA GALVANIZADO"));
        assert!(!is_catalog_product(""));
        assert!(!is_catalog_product("TELA PV ATC 2000"));
    }
}
