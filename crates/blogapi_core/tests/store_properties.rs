//! Property tests for the entity store invariants.

use blogapi_core::{EntityStore, NewPost, NewUser, PostId, PostPatch, UserId, UserPatch};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    CreateUser(String),
    CreatePost { author: u64, published: bool },
    DeleteUser(u64),
    DeletePost(u64),
    PublishPost(u64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[a-z]{2,8}".prop_map(Op::CreateUser),
        (1u64..8, any::<bool>()).prop_map(|(author, published)| Op::CreatePost { author, published }),
        (1u64..8).prop_map(Op::DeleteUser),
        (1u64..12).prop_map(Op::DeletePost),
        (1u64..12).prop_map(Op::PublishPost),
    ]
}

fn apply(store: &mut EntityStore, op: &Op) {
    match op {
        Op::CreateUser(name) => {
            let email = format!("{name}{}@x.com", store.user_count());
            store.create_user(NewUser {
                name: name.clone(),
                email,
                password: None,
            });
        }
        Op::CreatePost { author, published } => {
            // Only live authors get posts.
            if store.find_user_by_id(UserId::new(*author)).is_some() {
                store.create_post(NewPost {
                    title: "t".into(),
                    content: "c".into(),
                    author_id: UserId::new(*author),
                    published: *published,
                });
            }
        }
        Op::DeleteUser(id) => {
            store.delete_user(UserId::new(*id));
        }
        Op::DeletePost(id) => {
            store.delete_post(PostId::new(*id));
        }
        Op::PublishPost(id) => {
            store.update_post(
                PostId::new(*id),
                PostPatch {
                    published: Some(true),
                    ..PostPatch::default()
                },
            );
        }
    }
}

proptest! {
    #[test]
    fn new_user_ids_exceed_all_previous(names in prop::collection::vec("[a-z]{2,8}", 1..20)) {
        let mut store = EntityStore::seeded();
        let mut max_seen = 2u64;
        for (i, name) in names.iter().enumerate() {
            let user = store.create_user(NewUser {
                name: name.clone(),
                email: format!("{name}{i}@x.com"),
                password: Some("p".into()),
            });
            prop_assert!(user.id.as_u64() > max_seen);
            max_seen = user.id.as_u64();

            let json = serde_json::to_value(&user).unwrap();
            prop_assert!(json.get("password").is_none());
        }
    }

    #[test]
    fn every_live_post_has_a_live_author(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut store = EntityStore::seeded();
        for op in &ops {
            apply(&mut store, op);
        }
        for post in store.find_all_posts() {
            prop_assert!(store.find_user_by_id(post.author_id).is_some());
            prop_assert!(post.author.is_some());
        }
    }

    #[test]
    fn delete_user_leaves_other_authors_untouched(ops in prop::collection::vec(op_strategy(), 0..40), victim in 1u64..8) {
        let mut store = EntityStore::seeded();
        for op in &ops {
            apply(&mut store, op);
        }
        let victim = UserId::new(victim);
        let others_before: Vec<_> = store
            .find_all_posts()
            .into_iter()
            .filter(|p| p.author_id != victim)
            .map(|p| p.id)
            .collect();

        store.delete_user(victim);

        let after: Vec<_> = store.find_all_posts().into_iter().map(|p| p.id).collect();
        prop_assert_eq!(after, others_before);
    }

    #[test]
    fn never_issued_ids_are_not_found(extra in 0u64..1000) {
        let mut store = EntityStore::seeded();
        let user = store.create_user(NewUser {
            name: "Ana".into(),
            email: "ana@x.com".into(),
            password: None,
        });
        let unknown = UserId::new(user.id.as_u64() + 1 + extra);
        prop_assert!(store.find_user_by_id(unknown).is_none());
        prop_assert!(store.update_user(unknown, UserPatch::default()).is_none());
        prop_assert!(store.find_post_by_id(PostId::new(3 + extra)).is_none());
    }
}
