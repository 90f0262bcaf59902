use uuid::Uuid;

use modshelf_api::error::ApiError;
use modshelf_api::usecase::modlist::CopyPublicModListUseCase;

use crate::helpers::{MockModListRepo, new_store, test_entry, test_list};

// ── CopyPublicModListUseCase ─────────────────────────────────────────────────

#[tokio::test]
async fn should_copy_public_list_as_private_with_fresh_entries() {
    let store = new_store();
    let owner = Uuid::now_v7();
    let copier = Uuid::now_v7();
    let source = test_list(owner, "Optimization pack", true);
    let source_id = source.id;
    let sodium = test_entry(source_id, "sodium");
    let lithium = test_entry(source_id, "lithium");
    let source_entry_ids = [sodium.id, lithium.id];
    {
        let mut s = store.lock().unwrap();
        s.lists.push(source);
        s.entries.push(sodium);
        s.entries.push(lithium);
    }

    let usecase = CopyPublicModListUseCase {
        repo: MockModListRepo {
            store: store.clone(),
        },
    };
    let copy = usecase.execute(source_id, copier).await.unwrap();

    assert_eq!(copy.list.name, "Optimization pack (Copy)");
    assert_eq!(copy.list.user_id, copier);
    assert!(!copy.list.is_public, "copies are always private");
    assert_ne!(copy.list.id, source_id);

    assert_eq!(copy.mods.len(), 2);
    let slugs: Vec<&str> = copy.mods.iter().map(|m| m.mod_slug.as_str()).collect();
    assert!(slugs.contains(&"sodium") && slugs.contains(&"lithium"));
    for entry in &copy.mods {
        assert_eq!(entry.mod_list_id, copy.list.id);
        assert!(
            !source_entry_ids.contains(&entry.id),
            "copied entries must get fresh ids"
        );
    }

    // Source list untouched.
    let s = store.lock().unwrap();
    assert_eq!(s.lists.len(), 2);
    assert_eq!(s.entries.len(), 4);
}

#[tokio::test]
async fn should_not_copy_private_list() {
    let store = new_store();
    let owner = Uuid::now_v7();
    let source = test_list(owner, "Private", false);
    let source_id = source.id;
    store.lock().unwrap().lists.push(source);

    let usecase = CopyPublicModListUseCase {
        repo: MockModListRepo {
            store: store.clone(),
        },
    };
    let result = usecase.execute(source_id, Uuid::now_v7()).await;

    assert!(
        matches!(result, Err(ApiError::ModListNotFound)),
        "expected ModListNotFound, got {result:?}"
    );
    // Nothing created.
    assert_eq!(store.lock().unwrap().lists.len(), 1);
}

#[tokio::test]
async fn should_not_copy_missing_list() {
    let store = new_store();
    let usecase = CopyPublicModListUseCase {
        repo: MockModListRepo {
            store: store.clone(),
        },
    };

    let result = usecase.execute(Uuid::now_v7(), Uuid::now_v7()).await;

    assert!(
        matches!(result, Err(ApiError::ModListNotFound)),
        "expected ModListNotFound, got {result:?}"
    );
    assert!(store.lock().unwrap().lists.is_empty());
}

#[tokio::test]
async fn should_copy_empty_public_list() {
    let store = new_store();
    let owner = Uuid::now_v7();
    let copier = Uuid::now_v7();
    let source = test_list(owner, "Empty", true);
    let source_id = source.id;
    store.lock().unwrap().lists.push(source);

    let usecase = CopyPublicModListUseCase {
        repo: MockModListRepo { store },
    };
    let copy = usecase.execute(source_id, copier).await.unwrap();

    assert_eq!(copy.list.name, "Empty (Copy)");
    assert!(copy.mods.is_empty());
}
