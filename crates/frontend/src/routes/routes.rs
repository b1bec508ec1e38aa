use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::domain::a001_venue::ui::{VenueDetailPage, VenueListPage};
use crate::domain::a003_profile::ui::AccountPage;
use crate::layout::Shell;
use crate::system::pages::home::HomePage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFound;
use crate::system::pages::register::RegisterPage;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/venues") view=VenueListPage />
                    <Route path=path!("/venues/:id") view=VenueDetailPage />
                    <Route path=path!("/account") view=AccountPage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/register") view=RegisterPage />
                </Routes>
            </Shell>
        </Router>
    }
}
