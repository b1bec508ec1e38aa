use super::view_model::VenueFormViewModel;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a001_venue::aggregate::MAX_MEDIA;
use contracts::domain::a001_venue::{Amenity, Venue, VenueLocation};
use leptos::prelude::*;
use thaw::*;

#[component]
fn FieldError(vm: VenueFormViewModel, field: &'static str) -> impl IntoView {
    move || {
        vm.field_error(field)
            .map(|e| view! { <span class="form-error">{e}</span> })
    }
}

#[component]
fn LocationInput(
    vm: VenueFormViewModel,
    id: &'static str,
    label: &'static str,
    field: fn(&mut VenueLocation) -> &mut Option<String>,
    read: fn(&VenueLocation) -> Option<String>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                type="text"
                id=id
                prop:value=move || vm.form.with(|f| read(&f.location)).unwrap_or_default()
                on:input=move |ev| vm.set_location_field(event_target_value(&ev), field)
            />
        </div>
    }
}

#[component]
pub fn VenueForm(
    /// Venue being edited; `None` creates a new one
    #[prop(optional)]
    venue: Option<Venue>,
    on_saved: Callback<Venue>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = VenueFormViewModel::new(venue.as_ref());
    let title = if vm.is_edit_mode() {
        "Edit venue"
    } else {
        "New venue"
    };

    view! {
        <Modal title=title.to_string() on_close=on_close class="modal--wide".to_string()>
            <form
                class="details-form venue-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    vm.save_command(on_saved);
                }
            >
                {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

                <div class="form-group">
                    <label for="venue-name">"Name"</label>
                    <input
                        type="text"
                        id="venue-name"
                        prop:value=move || vm.form.get().name
                        on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                        placeholder="Cosy cabin by the lake"
                    />
                    <FieldError vm=vm field="name"/>
                </div>

                <div class="form-group">
                    <label for="venue-description">"Description"</label>
                    <textarea
                        id="venue-description"
                        rows="4"
                        prop:value=move || vm.form.get().description
                        on:input=move |ev| vm.form.update(|f| f.description = event_target_value(&ev))
                    />
                    <FieldError vm=vm field="description"/>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="venue-price">"Price per night"</label>
                        <input
                            type="number"
                            id="venue-price"
                            min="0"
                            step="any"
                            prop:value=move || vm.price.get()
                            on:input=move |ev| vm.price.set(event_target_value(&ev))
                        />
                        <FieldError vm=vm field="price"/>
                    </div>
                    <div class="form-group">
                        <label for="venue-guests">"Max guests"</label>
                        <input
                            type="number"
                            id="venue-guests"
                            min="1"
                            step="1"
                            prop:value=move || vm.max_guests.get()
                            on:input=move |ev| vm.max_guests.set(event_target_value(&ev))
                        />
                        <FieldError vm=vm field="maxGuests"/>
                    </div>
                    <div class="form-group">
                        <label for="venue-rating">"Rating"</label>
                        <input
                            type="number"
                            id="venue-rating"
                            min="0"
                            max="5"
                            step="0.5"
                            prop:value=move || vm.rating.get()
                            on:input=move |ev| vm.rating.set(event_target_value(&ev))
                        />
                        <FieldError vm=vm field="rating"/>
                    </div>
                </div>

                <fieldset class="form-fieldset">
                    <legend>"Amenities"</legend>
                    {Amenity::ALL
                        .into_iter()
                        .map(|amenity| view! {
                            <label class="form-check">
                                <input
                                    type="checkbox"
                                    prop:checked=move || vm.form.with(|f| f.meta.has(amenity))
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        vm.form.update(|f| f.meta.set(amenity, checked));
                                    }
                                />
                                {icon(amenity.icon_name())}
                                <span>{amenity.label()}</span>
                            </label>
                        })
                        .collect_view()}
                </fieldset>

                <fieldset class="form-fieldset">
                    <legend>"Location"</legend>
                    <LocationInput vm=vm id="venue-address" label="Address"
                        field=|l| &mut l.address read=|l| l.address.clone()/>
                    <div class="form-row">
                        <LocationInput vm=vm id="venue-city" label="City"
                            field=|l| &mut l.city read=|l| l.city.clone()/>
                        <LocationInput vm=vm id="venue-zip" label="Zip"
                            field=|l| &mut l.zip read=|l| l.zip.clone()/>
                    </div>
                    <div class="form-row">
                        <LocationInput vm=vm id="venue-country" label="Country"
                            field=|l| &mut l.country read=|l| l.country.clone()/>
                        <LocationInput vm=vm id="venue-continent" label="Continent"
                            field=|l| &mut l.continent read=|l| l.continent.clone()/>
                    </div>
                </fieldset>

                <fieldset class="form-fieldset">
                    <legend>{format!("Images (up to {})", MAX_MEDIA)}</legend>
                    {move || {
                        let count = vm.form.with(|f| f.media.len());
                        (0..count)
                            .map(|index| view! {
                                <div class="form-row media-row">
                                    <input
                                        type="url"
                                        placeholder="https://..."
                                        prop:value=move || vm.form.with(|f| {
                                            f.media.get(index).map(|m| m.url.clone()).unwrap_or_default()
                                        })
                                        on:input=move |ev| {
                                            let url = event_target_value(&ev);
                                            vm.update_media(index, |m| m.url = url);
                                        }
                                    />
                                    <input
                                        type="text"
                                        placeholder="Description"
                                        prop:value=move || vm.form.with(|f| {
                                            f.media.get(index).map(|m| m.alt.clone()).unwrap_or_default()
                                        })
                                        on:input=move |ev| {
                                            let alt = event_target_value(&ev);
                                            vm.update_media(index, |m| m.alt = alt);
                                        }
                                    />
                                    <button
                                        type="button"
                                        class="button button--icon"
                                        aria-label="Remove image"
                                        on:click=move |_| vm.remove_media_row(index)
                                    >
                                        {icon("delete")}
                                    </button>
                                </div>
                            })
                            .collect_view()
                    }}
                    <FieldError vm=vm field="media"/>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        size=ButtonSize::Small
                        disabled=Signal::derive(move || !vm.can_add_media())
                        on_click=move |_| vm.add_media_row()
                    >
                        {icon("plus")}
                        "Add image"
                    </Button>
                </fieldset>

                <div class="details-actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        button_type=ButtonType::Submit
                        disabled=Signal::derive(move || vm.is_saving.get())
                    >
                        {move || match (vm.is_saving.get(), vm.is_edit_mode()) {
                            (true, _) => "Saving...",
                            (false, true) => "Save changes",
                            (false, false) => "Create venue",
                        }}
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        "Cancel"
                    </Button>
                </div>
            </form>
        </Modal>
    }
}
