use contracts::dashboards::d400_inventory_summary::total_value;
use contracts::domain::a001_product::{Product, ProductDto, ProductId, ProductStore};
use contracts::domain::a002_category::CategoryCatalog;
use contracts::projections::p900_product_list::{
    filter_products, paginate, sort_products, total_pages, FilterCriteria, SortCriteria,
    SortDirection, SortField, Sortable,
};
use proptest::prelude::*;
use proptest::test_runner::Config;
use std::cmp::Ordering;
use std::collections::BTreeSet;

const CATEGORIES: [&str; 4] = ["Electronics", "Books", "Toys", "Home & Kitchen"];

fn arb_product(index: usize) -> impl Strategy<Value = Product> {
    (
        "[A-Za-z ]{1,12}",
        0usize..CATEGORIES.len(),
        1u32..50_000u32,
        0u32..40u32,
    )
        .prop_map(move |(name, cat, cents, stock)| Product {
            id: ProductId::new(index.to_string()),
            name,
            category: CATEGORIES[cat].to_string(),
            price: f64::from(cents) / 100.0,
            stock,
        })
}

fn arb_products() -> impl Strategy<Value = Vec<Product>> {
    (0usize..30).prop_flat_map(|len| (0..len).map(arb_product).collect::<Vec<_>>())
}

fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
    (
        proptest::collection::btree_set(0usize..CATEGORIES.len(), 0..3),
        any::<bool>(),
        "[a-z9. ]{0,3}",
    )
        .prop_map(|(cats, in_stock_only, search_term)| FilterCriteria {
            selected_categories: cats
                .into_iter()
                .map(|i| CATEGORIES[i].to_string())
                .collect::<BTreeSet<_>>(),
            in_stock_only,
            search_term,
        })
}

fn arb_sort() -> impl Strategy<Value = SortCriteria> {
    (0usize..4, any::<bool>()).prop_map(|(f, asc)| {
        SortCriteria::new(
            SortField::ALL[f],
            if asc {
                SortDirection::Asc
            } else {
                SortDirection::Desc
            },
        )
    })
}

fn index(product: &Product) -> usize {
    product.id.value().parse().unwrap()
}

fn ids(products: &[Product]) -> Vec<ProductId> {
    products.iter().map(|p| p.id.clone()).collect()
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn filter_returns_matching_subsequence(products in arb_products(), criteria in arb_criteria()) {
        let filtered = filter_products(&products, &criteria);

        // subsequence: walk the input once
        let mut source = products.iter();
        for item in &filtered {
            prop_assert!(source.any(|p| p == item));
        }
        for item in &filtered {
            prop_assert!(criteria.matches(item));
        }
        // nothing that matches was dropped
        prop_assert_eq!(filtered.len(), products.iter().filter(|p| criteria.matches(p)).count());
    }

    #[test]
    fn empty_filter_is_identity(products in arb_products()) {
        prop_assert_eq!(filter_products(&products, &FilterCriteria::default()), products);
    }

    #[test]
    fn sort_is_stable_permutation(products in arb_products(), sort in arb_sort()) {
        let sorted = sort_products(&products, sort);
        prop_assert_eq!(sorted.len(), products.len());

        let mut a = ids(&sorted);
        let mut b = ids(&products);
        a.sort();
        b.sort();
        prop_assert_eq!(a, b);

        // equal keys keep input order (ids are the input index)
        for pair in sorted.windows(2) {
            if pair[0].compare_by_field(&pair[1], sort.field) == Ordering::Equal {
                prop_assert!(index(&pair[0]) < index(&pair[1]));
            }
        }
    }

    #[test]
    fn resorting_reverses_distinct_keys_only(products in arb_products(), field in 0usize..4) {
        let field = SortField::ALL[field];
        let asc = sort_products(&products, SortCriteria::new(field, SortDirection::Asc));
        let desc = sort_products(&asc, SortCriteria::new(field, SortDirection::Desc));
        prop_assert_eq!(desc, sort_products(&products, SortCriteria::new(field, SortDirection::Desc)));
    }

    #[test]
    fn pages_reconstruct_sorted(products in arb_products(), sort in arb_sort(), page_size in 1usize..10) {
        let sorted = sort_products(&products, sort);
        let pages = total_pages(sorted.len(), page_size);

        let mut joined = Vec::new();
        for page in 1..=pages {
            let slice = paginate(&sorted, page_size, page);
            prop_assert!(slice.len() <= page_size);
            prop_assert!(!slice.is_empty());
            joined.extend_from_slice(slice);
        }
        prop_assert!(paginate(&sorted, page_size, pages + 1).is_empty());
        prop_assert_eq!(joined, sorted);
    }

    #[test]
    fn delete_removes_exactly_requested(products in arb_products(), mask in proptest::collection::vec(any::<(bool, bool)>(), 30)) {
        let catalog = CategoryCatalog::new(CATEGORIES);
        let mut store = ProductStore::new(products.clone(), catalog);

        let mut to_delete = Vec::new();
        let mut selected = Vec::new();
        for (product, (delete, select)) in products.iter().zip(mask.iter()) {
            if *delete {
                to_delete.push(product.id.clone());
            }
            if *select {
                selected.push(product.id.clone());
            }
        }
        store.select_page(&selected, true);
        let removed = store.delete_products(&to_delete);

        prop_assert_eq!(removed, to_delete.len());
        let expected: Vec<Product> = products.iter().filter(|p| !to_delete.contains(&p.id)).cloned().collect();
        prop_assert_eq!(store.products(), expected.as_slice());

        let expected_selection: Vec<ProductId> = {
            let mut s: Vec<ProductId> = selected.into_iter().filter(|id| !to_delete.contains(id)).collect();
            s.sort();
            s
        };
        prop_assert_eq!(store.selection().ids(), expected_selection);
    }

    #[test]
    fn total_value_is_additive(products in arb_products(), cents in 1u32..100_000u32, stock in 0i64..500) {
        let catalog = CategoryCatalog::new(CATEGORIES);
        let mut store = ProductStore::new(products, catalog);
        let before = total_value(store.products());

        let price = f64::from(cents) / 100.0;
        store.add_product(&ProductDto {
            id: None,
            name: "Extra".into(),
            category: "Toys".into(),
            price,
            stock,
        }).unwrap();

        let after = total_value(store.products());
        let added = price * stock as f64;
        prop_assert!((after - before - added).abs() < 1e-6 * (1.0 + before.abs() + added));
    }
}
