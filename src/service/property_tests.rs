//! Property-Based Tests for the Product Service
//!
//! Each case builds a fresh service over an in-memory repository and drives
//! it on a current-thread runtime.

use std::collections::BTreeSet;
use std::sync::Arc;

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

use crate::cache::shared_cache;
use crate::error::ProductError;
use crate::models::Product;
use crate::persistence::{InMemoryProductRepository, ProductEntity, ProductRepository};
use crate::service::ProductService;

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(future)
}

fn product_strategy() -> impl Strategy<Value = Product> {
    (0i64..1000, "[a-zA-Z ]{1,16}", "[a-zA-Z ]{1,32}")
        .prop_map(|(id, name, description)| Product::new(id, name, description))
}

fn stored_ids_strategy() -> impl Strategy<Value = BTreeSet<i64>> {
    prop::collection::btree_set(0i64..1000, 0..20)
}

fn build(ids: &BTreeSet<i64>) -> (ProductService, Arc<InMemoryProductRepository>) {
    let repo = Arc::new(InMemoryProductRepository::with_rows(
        ids.iter()
            .map(|&id| ProductEntity::new(id, format!("name-{id}"), format!("desc-{id}"))),
    ));
    let service = ProductService::new(repo.clone(), shared_cache(), true);
    (service, repo)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // Reads, updates and deletes of an absent id all fail with NotFound.
    #[test]
    fn prop_absent_ids_not_found(ids in stored_ids_strategy(), probe in product_strategy()) {
        prop_assume!(!ids.contains(&probe.id));
        let (service, _) = build(&ids);

        block_on(async {
            prop_assert!(matches!(service.find_by_id(probe.id).await, Err(ProductError::NotFound(_))));
            prop_assert!(matches!(service.update(probe.clone()).await, Err(ProductError::NotFound(_))));
            prop_assert!(matches!(service.delete_by_id(probe.id).await, Err(ProductError::NotFound(_))));
            Ok::<(), TestCaseError>(())
        })?;
    }

    // Creating over an existing id conflicts and leaves the row as it was.
    #[test]
    fn prop_create_existing_conflicts(ids in stored_ids_strategy(), probe in product_strategy()) {
        prop_assume!(!ids.is_empty());
        let id = *ids.iter().next().unwrap();
        let (service, repo) = build(&ids);
        let before = block_on(repo.find_by_id(id)).unwrap();

        let result = block_on(service.create(Product { id, ..probe }));

        prop_assert!(matches!(result, Err(ProductError::Conflict(_))));
        prop_assert_eq!(block_on(repo.find_by_id(id)).unwrap(), before);
    }

    // create then find_by_id returns exactly what was created.
    #[test]
    fn prop_create_then_find(ids in stored_ids_strategy(), probe in product_strategy()) {
        prop_assume!(!ids.contains(&probe.id));
        let (service, _) = build(&ids);

        let created = block_on(service.create(probe.clone())).unwrap();
        let found = block_on(service.find_by_id(probe.id)).unwrap();

        prop_assert_eq!(&created, &probe);
        prop_assert_eq!(found, probe);
    }

    // A second delete fails and leaves the store as the first delete left it.
    #[test]
    fn prop_delete_twice(ids in stored_ids_strategy()) {
        prop_assume!(!ids.is_empty());
        let id = *ids.iter().next_back().unwrap();
        let (service, repo) = build(&ids);

        prop_assert!(block_on(service.delete_by_id(id)).is_ok());
        let remaining = block_on(repo.len());

        prop_assert!(matches!(block_on(service.delete_by_id(id)), Err(ProductError::NotFound(_))));
        prop_assert_eq!(block_on(repo.len()), remaining);
        prop_assert_eq!(remaining, ids.len() - 1);
    }

    // Updates replace name and description and never move the row.
    #[test]
    fn prop_update_keeps_id(ids in stored_ids_strategy(), probe in product_strategy()) {
        prop_assume!(!ids.is_empty());
        let id = *ids.iter().next().unwrap();
        let (service, repo) = build(&ids);

        let updated = block_on(service.update(Product { id, ..probe.clone() })).unwrap();

        prop_assert_eq!(updated.id, id);
        prop_assert_eq!(&updated.name, &probe.name);
        prop_assert_eq!(&updated.description, &probe.description);
        prop_assert_eq!(block_on(repo.len()), ids.len());
    }
}
