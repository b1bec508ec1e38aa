use super::view_model::ProfileFormViewModel;
use contracts::domain::a003_profile::aggregate::MAX_BIO_LEN;
use contracts::domain::a003_profile::Profile;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ProfileForm(profile: Profile, on_saved: Callback<Profile>) -> impl IntoView {
    let vm = ProfileFormViewModel::new(&profile);
    let name = profile.name.clone();

    let field_error = move |field: &'static str| {
        move || vm.field_error(field).map(|e| view! { <span class="form-error">{e}</span> })
    };

    view! {
        <form
            class="details-form profile-form"
            on:submit=move |ev| {
                ev.prevent_default();
                vm.save_command(name.clone(), on_saved);
            }
        >
            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}
            {move || vm.saved.get().then(|| view! { <div class="success">"Profile updated"</div> })}

            <div class="form-group">
                <label for="profile-bio">"Bio"</label>
                <textarea
                    id="profile-bio"
                    rows="3"
                    maxlength=MAX_BIO_LEN.to_string()
                    prop:value=move || vm.form.get().bio
                    on:input=move |ev| vm.form.update(|f| f.bio = event_target_value(&ev))
                />
                <span class="form-hint">
                    {move || format!("{}/{}", vm.form.with(|f| f.bio.chars().count()), MAX_BIO_LEN)}
                </span>
                {field_error("bio")}
            </div>

            <div class="form-group">
                <label for="profile-avatar">"Avatar URL"</label>
                <input
                    type="url"
                    id="profile-avatar"
                    placeholder="https://..."
                    prop:value=move || vm.form.get().avatar_url
                    on:input=move |ev| vm.form.update(|f| f.avatar_url = event_target_value(&ev))
                />
                {field_error("avatar")}
            </div>

            <div class="form-group">
                <label for="profile-banner">"Banner URL"</label>
                <input
                    type="url"
                    id="profile-banner"
                    placeholder="https://..."
                    prop:value=move || vm.form.get().banner_url
                    on:input=move |ev| vm.form.update(|f| f.banner_url = event_target_value(&ev))
                />
                {field_error("banner")}
            </div>

            <label class="form-check">
                <input
                    type="checkbox"
                    prop:checked=move || vm.form.get().venue_manager
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        vm.form.update(|f| f.venue_manager = checked);
                    }
                />
                <span>"I want to rent out venues (venue manager)"</span>
            </label>
            {field_error("form")}

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    button_type=ButtonType::Submit
                    disabled=Signal::derive(move || vm.is_saving.get())
                >
                    {move || if vm.is_saving.get() { "Saving..." } else { "Save profile" }}
                </Button>
            </div>
        </form>
    }
}
