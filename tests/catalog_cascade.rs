//! End-to-end cascade behavior through the public facade

mod helpers;

use product_catalog::{
    CatalogError, CategoryPatch, ModeOfSale, ParentPatch, ProductStatus,
};

use helpers::{category, product, seeded_catalog};

#[test]
fn cascade_deletes_subtree_and_assigned_products() {
    let mut catalog = seeded_catalog();

    let outcome = catalog.delete_category_cascade(1).expect("cascade");
    // Target first, then BFS order over the descendants.
    assert_eq!(outcome.deleted_categories, vec![1, 2, 4, 3]);
    assert_eq!(
        outcome.deleted_products,
        vec!["A".to_string(), "B".to_string(), "D".to_string()]
    );

    for id in [1, 2, 3, 4] {
        assert!(catalog.category(id).is_none());
    }
    for sku in ["A", "B", "D"] {
        assert!(catalog.product(sku).is_none());
    }

    // Frame condition: the unrelated root and its product survive.
    assert!(catalog.category(99).is_some());
    assert_eq!(catalog.product("C").expect("untouched").category_id, 99);
}

#[test]
fn cascade_worked_example_from_three_level_chain() {
    // categories {1 root, 2 under 1, 3 under 2}, products {A on 3, B on 1},
    // plus unrelated C on 99.
    let mut catalog = seeded_catalog();

    let outcome = catalog.delete_category_cascade(2).expect("cascade");
    assert_eq!(outcome.deleted_categories, vec![2, 3]);
    assert_eq!(outcome.deleted_products, vec!["A".to_string()]);

    assert!(matches!(
        catalog.similar_products("A"),
        Err(CatalogError::ProductNotFound { .. })
    ));
    assert!(catalog.category(1).is_some());
    assert!(catalog.product("B").is_some());
}

#[test]
fn cascade_on_unknown_category_changes_nothing() {
    let mut catalog = seeded_catalog();
    let categories_before = catalog.categories().count();
    let products_before = catalog.products().count();

    let err = catalog.delete_category_cascade(404).unwrap_err();
    assert_eq!(err, CatalogError::CategoryNotFound { id: 404 });
    assert_eq!(catalog.categories().count(), categories_before);
    assert_eq!(catalog.products().count(), products_before);
}

#[test]
fn reparenting_moves_a_subtree_out_of_the_blast_radius() {
    let mut catalog = seeded_catalog();

    // Move Audio (4) out from under Electronics (1) to the Clearance root.
    catalog
        .update_category(
            4,
            CategoryPatch {
                name: None,
                parent: Some(ParentPatch::Set(99)),
            },
        )
        .expect("reparent");

    let outcome = catalog.delete_category_cascade(1).expect("cascade");
    assert_eq!(outcome.deleted_categories, vec![1, 2, 3]);
    // D now lives under Clearance and survives the cascade.
    assert!(outcome.deleted_products.iter().all(|sku| sku != "D"));
    assert!(catalog.product("D").is_some());
}

#[test]
fn create_with_missing_parent_leaves_no_trace() {
    let mut catalog = seeded_catalog();

    let err = catalog
        .create_category(category(5, "Orphan", Some(999)))
        .unwrap_err();
    assert_eq!(err, CatalogError::InvalidParent { parent_id: 999 });
    assert!(catalog.category(5).is_none());
}

#[test]
fn cleared_parent_becomes_a_root_and_escapes_cascade() {
    let mut catalog = seeded_catalog();

    catalog
        .update_category(
            2,
            CategoryPatch {
                name: None,
                parent: Some(ParentPatch::Clear),
            },
        )
        .expect("clear parent");

    let roots: Vec<u32> = catalog.root_categories().iter().map(|c| c.id).collect();
    assert_eq!(roots, vec![1, 2, 99]);

    let outcome = catalog.delete_category_cascade(1).expect("cascade");
    // Phones (2) and Smartphones (3) are no longer descendants of 1.
    assert_eq!(outcome.deleted_categories, vec![1, 4]);
    assert!(catalog.category(2).is_some());
    assert!(catalog.product("A").is_some());
}

#[test]
fn every_successful_mutation_is_audited_once() {
    let mut catalog = seeded_catalog();
    let seeded = catalog.audit_log().len();
    assert_eq!(seeded, 9); // 5 categories + 4 products

    catalog
        .create_product(product(
            "E",
            4,
            "Clang",
            None,
            &["cable"],
            ModeOfSale::Online,
            ProductStatus::Draft,
        ))
        .expect("create");
    catalog.delete_category_cascade(99).expect("cascade");
    assert_eq!(catalog.audit_log().len(), seeded + 2);

    // A failed mutation appends nothing.
    let _ = catalog.delete_category_cascade(404);
    assert_eq!(catalog.audit_log().len(), seeded + 2);
}
