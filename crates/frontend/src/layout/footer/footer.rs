use chrono::Datelike;
use leptos::prelude::*;

use crate::shared::date_utils::today;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer data-zone="footer" class="footer">
            <span>{format!("© {} Holidaze", today().year())}</span>
        </footer>
    }
}
