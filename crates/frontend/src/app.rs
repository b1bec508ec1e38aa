use crate::routes::routes::AppRoutes;
use crate::shared::favorites::FavoritesProvider;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <AuthProvider>
                <FavoritesProvider>
                    <AppRoutes />
                </FavoritesProvider>
            </AuthProvider>
        </ConfigProvider>
    }
}
