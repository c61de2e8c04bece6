//! Query engine and derived views through the public facade

mod helpers;

use product_catalog::{CatalogError, ModeOfSale, ProductPatch, ProductStatus};

use helpers::seeded_catalog;

fn skus(products: &[&product_catalog::Product]) -> Vec<String> {
    products.iter().map(|p| p.sku.clone()).collect()
}

#[test]
fn brand_filter_returns_exact_subset_in_store_order() {
    let catalog = seeded_catalog();
    let hits = catalog.products_by_brand(&["Acme".to_string()]);
    assert_eq!(skus(&hits), vec!["A", "C"]);

    // Empty match is an empty sequence, never an error.
    assert!(catalog.products_by_brand(&["Nobody".to_string()]).is_empty());
}

#[test]
fn keyword_filter_matches_any_requested_keyword() {
    let catalog = seeded_catalog();
    let hits = catalog.products_by_keyword(&["phone".to_string(), "speaker".to_string()]);
    assert_eq!(skus(&hits), vec!["A", "D"]);
}

#[test]
fn color_filter_never_matches_colorless_products() {
    let catalog = seeded_catalog();
    let hits = catalog.products_by_color(&["black".to_string()]);
    assert_eq!(skus(&hits), vec!["A", "D"]);

    // C has no color; even a wildcard-ish big set cannot match it.
    let all_colors = ["black", "silver", "red", "blue"]
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>();
    assert!(!skus(&catalog.products_by_color(&all_colors)).contains(&"C".to_string()));
}

#[test]
fn mode_and_status_filters_are_strict_equality() {
    let catalog = seeded_catalog();
    assert_eq!(skus(&catalog.products_by_mode(ModeOfSale::Online)), vec!["A", "D"]);
    assert_eq!(skus(&catalog.products_by_mode(ModeOfSale::Both)), vec!["B"]);
    assert_eq!(
        skus(&catalog.products_by_status(ProductStatus::Draft)),
        vec!["C"]
    );
}

#[test]
fn similar_products_share_at_least_one_field() {
    let catalog = seeded_catalog();
    // A shares brand Acme with C and color black with D.
    let hits = catalog.similar_products("A").expect("known sku");
    assert_eq!(skus(&hits), vec!["C", "D"]);

    let err = catalog.similar_products("GHOST").unwrap_err();
    assert!(matches!(err, CatalogError::ProductNotFound { .. }));
}

#[test]
fn derived_views_walk_the_tree() {
    let catalog = seeded_catalog();

    let roots: Vec<u32> = catalog.root_categories().iter().map(|c| c.id).collect();
    assert_eq!(roots, vec![1, 99]);

    let subs: Vec<u32> = catalog
        .sub_categories(1)
        .expect("known category")
        .iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(subs, vec![2, 4]);

    let in_root = catalog.products_in_category(1).expect("known category");
    assert_eq!(skus(&in_root), vec!["B"]);

    assert!(matches!(
        catalog.sub_categories(404),
        Err(CatalogError::CategoryNotFound { id: 404 })
    ));
}

#[test]
fn reads_are_idempotent() {
    let catalog = seeded_catalog();

    let snapshot: Vec<product_catalog::Product> = catalog.products().cloned().collect();
    let _ = catalog.products_by_brand(&["Acme".to_string()]);
    let _ = catalog.products_by_mode(ModeOfSale::Offline);
    let _ = catalog.similar_products("B");
    let _ = catalog.sub_categories(1);
    let after: Vec<product_catalog::Product> = catalog.products().cloned().collect();

    assert_eq!(snapshot, after);
    assert_eq!(catalog.audit_log().len(), 9);
}

#[test]
fn failed_update_leaves_record_untouched_via_facade() {
    let mut catalog = seeded_catalog();
    let before = catalog.product("A").expect("present").clone();

    let err = catalog
        .update_product(
            "A",
            ProductPatch {
                name: Some("Renamed".to_string()),
                tax_category_id: Some(77),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert_eq!(
        err,
        CatalogError::InvalidTaxBracket {
            tax_category_id: 77
        }
    );
    assert_eq!(catalog.product("A").expect("present"), &before);
}
