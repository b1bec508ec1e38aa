use crate::shared::icons::icon;
use contracts::domain::a001_venue::{Amenity, VenueMeta};
use leptos::prelude::*;

/// Icons with labels for each amenity a venue offers
#[component]
pub fn AmenityList(
    meta: VenueMeta,
    /// Icons only, for cards
    #[prop(optional)]
    compact: bool,
) -> impl IntoView {
    let amenities = meta.amenities();
    if amenities.is_empty() {
        return view! { <p class="amenity-list__empty">"No amenities listed"</p> }.into_any();
    }

    let class = if compact {
        "amenity-list amenity-list--compact"
    } else {
        "amenity-list"
    };

    view! {
        <ul class=class>
            {amenities
                .into_iter()
                .map(|a: Amenity| view! {
                    <li class="amenity-list__item" title=a.label()>
                        {icon(a.icon_name())}
                        {(!compact).then(|| view! { <span>{a.label()}</span> })}
                    </li>
                })
                .collect_view()}
        </ul>
    }
    .into_any()
}
