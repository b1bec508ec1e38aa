//! Favorites store backed by localStorage, one list per user

use contracts::domain::common::VenueId;
use contracts::shared::favorites::{storage_key, FavoriteSet};
use leptos::prelude::*;

use crate::system::auth::context::use_auth;
use crate::system::auth::storage;

#[derive(Clone, Copy)]
pub struct FavoritesStore {
    pub set: RwSignal<FavoriteSet>,
    key: RwSignal<String>,
}

fn load(key: &str) -> FavoriteSet {
    storage::get_json::<FavoriteSet>(key).unwrap_or_default()
}

impl FavoritesStore {
    pub fn contains(&self, id: &VenueId) -> bool {
        self.set.with(|s| s.contains(id))
    }

    pub fn count(&self) -> usize {
        self.set.with(|s| s.len())
    }

    /// Toggle and persist; returns whether the venue is now a favorite
    pub fn toggle(&self, id: VenueId) -> bool {
        let mut now_favorite = false;
        self.set.update(|s| now_favorite = s.toggle(id));
        self.persist();
        log::debug!("Favorite {} -> {}", id, now_favorite);
        now_favorite
    }

    fn persist(&self) {
        let key = self.key.get_untracked();
        self.set.with_untracked(|s| storage::set_json(&key, s));
    }
}

#[component]
pub fn FavoritesProvider(children: Children) -> impl IntoView {
    let (auth_state, _) = use_auth();

    let initial_key = storage_key(auth_state.get_untracked().user_name().as_deref());
    let store = FavoritesStore {
        set: RwSignal::new(load(&initial_key)),
        key: RwSignal::new(initial_key),
    };

    // Switch lists when somebody logs in or out
    Effect::new(move |_| {
        let key = storage_key(auth_state.get().user_name().as_deref());
        if key != store.key.get_untracked() {
            store.set.set(load(&key));
            store.key.set(key);
        }
    });

    provide_context(store);

    children()
}

pub fn use_favorites() -> FavoritesStore {
    use_context::<FavoritesStore>().expect("FavoritesProvider not found in component tree")
}
