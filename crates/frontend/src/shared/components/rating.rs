use crate::shared::format::format_rating;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Star rating badge, hidden for unrated venues unless `show_zero` is set
#[component]
pub fn Rating(
    value: f64,
    #[prop(optional)]
    show_zero: bool,
) -> impl IntoView {
    if value <= 0.0 && !show_zero {
        return view! { <span class="rating rating--new">"New"</span> }.into_any();
    }

    view! {
        <span class="rating" title=format!("Rated {} out of 5", format_rating(value))>
            {icon("star")}
            <span>{format_rating(value)}</span>
        </span>
    }
    .into_any()
}
