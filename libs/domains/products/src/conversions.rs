//! Mapping between the stored [`Product`] and the wire-level [`ProductView`].
//!
//! Both shapes carry the same four fields, so each direction is a
//! field-by-field copy with no failure case.

use crate::models::{Product, ProductView};

// ============================================================================
// Stored → wire
// ============================================================================

pub fn to_external(product: Product) -> ProductView {
    ProductView {
        id: product.id,
        name: product.name,
        quantity: product.quantity,
        price: product.price,
    }
}

impl From<Product> for ProductView {
    fn from(product: Product) -> Self {
        to_external(product)
    }
}

// ============================================================================
// Wire → stored
// ============================================================================

pub fn to_internal(view: ProductView) -> Product {
    Product {
        id: view.id,
        name: view.name,
        quantity: view.quantity,
        price: view.price,
    }
}

impl From<ProductView> for Product {
    fn from(view: ProductView) -> Self {
        to_internal(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pencil() -> Product {
        Product {
            id: "101".to_string(),
            name: "pencil".to_string(),
            quantity: 15,
            price: 20000.0,
        }
    }

    #[test]
    fn test_to_external_copies_every_field() {
        let view = to_external(pencil());
        assert_eq!(view.id, "101");
        assert_eq!(view.name, "pencil");
        assert_eq!(view.quantity, 15);
        assert_eq!(view.price, 20000.0);
    }

    #[test]
    fn test_stored_record_survives_both_directions() {
        assert_eq!(to_internal(to_external(pencil())), pencil());
    }

    #[test]
    fn test_wire_record_survives_both_directions() {
        let view = ProductView {
            id: String::new(),
            name: "game".to_string(),
            quantity: 7,
            price: 110000.0,
        };
        assert_eq!(to_external(to_internal(view.clone())), view);
    }

    #[test]
    fn test_from_impls_match_functions() {
        let view: ProductView = pencil().into();
        let back: Product = view.into();
        assert_eq!(back, pencil());
    }
}
