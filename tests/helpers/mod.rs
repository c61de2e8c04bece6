//! Shared fixtures for the integration suites
#![allow(dead_code)] // not every suite uses every fixture

use std::collections::BTreeSet;

use rust_decimal::Decimal;

use product_catalog::{
    Catalog, CategoryDraft, CategoryId, ModeOfSale, ProductDraft, ProductStatus, TaxBracketTable,
};

pub fn category(id: CategoryId, name: &str, parent_id: Option<CategoryId>) -> CategoryDraft {
    CategoryDraft {
        id,
        name: name.to_string(),
        parent_id,
    }
}

#[allow(clippy::too_many_arguments)]
pub fn product(
    sku: &str,
    category_id: CategoryId,
    brand: &str,
    color: Option<&str>,
    keywords: &[&str],
    mode: ModeOfSale,
    status: ProductStatus,
) -> ProductDraft {
    ProductDraft {
        sku: sku.to_string(),
        name: format!("Product {sku}"),
        category_id,
        keywords: keywords.iter().map(|k| k.to_string()).collect::<BTreeSet<_>>(),
        brand: brand.to_string(),
        color: color.map(|c| c.to_string()),
        mode_of_sale: mode,
        base_price: Decimal::new(1999, 2),
        tax_category_id: 2,
        image_urls: vec![format!("https://img.example/{sku}.png")],
        stock: 10,
        status,
    }
}

/// A small shop:
///
/// categories: 1 Electronics ── 2 Phones ── 3 Smartphones
///                          └── 4 Audio
///             99 Clearance
/// products:   A (cat 3), B (cat 1), C (cat 99), D (cat 4)
pub fn seeded_catalog() -> Catalog {
    let mut catalog = Catalog::new(TaxBracketTable::standard());

    for draft in [
        category(1, "Electronics", None),
        category(2, "Phones", Some(1)),
        category(3, "Smartphones", Some(2)),
        category(4, "Audio", Some(1)),
        category(99, "Clearance", None),
    ] {
        catalog.create_category(draft).expect("seed category");
    }

    for draft in [
        product(
            "A",
            3,
            "Acme",
            Some("black"),
            &["phone", "android"],
            ModeOfSale::Online,
            ProductStatus::Live,
        ),
        product(
            "B",
            1,
            "Bolt",
            Some("silver"),
            &["charger"],
            ModeOfSale::Both,
            ProductStatus::Live,
        ),
        product(
            "C",
            99,
            "Acme",
            None,
            &["outlet"],
            ModeOfSale::Offline,
            ProductStatus::Draft,
        ),
        product(
            "D",
            4,
            "Clang",
            Some("black"),
            &["speaker"],
            ModeOfSale::Online,
            ProductStatus::Live,
        ),
    ] {
        catalog.create_product(draft).expect("seed product");
    }

    catalog
}
