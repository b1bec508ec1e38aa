use contracts::shared::media::Media;
use contracts::shared::validation::ValidationErrors;
use contracts::system::auth::{LoginRequest, RegisterRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Redirect, A};
use thaw::*;

use crate::system::auth::api;
use crate::system::auth::context::{do_login, use_auth};

/// Registration payload from the raw form fields
pub fn build_request(
    name: &str,
    email: &str,
    password: &str,
    avatar_url: &str,
    venue_manager: bool,
) -> RegisterRequest {
    let name = name.trim().to_string();
    let avatar_url = avatar_url.trim();
    RegisterRequest {
        avatar: (!avatar_url.is_empty())
            .then(|| Media::new(avatar_url, format!("Avatar of {}", name))),
        name,
        email: email.trim().to_string(),
        password: password.to_string(),
        bio: None,
        banner: None,
        venue_manager,
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let avatar_url = RwSignal::new(String::new());
    let venue_manager = RwSignal::new(false);
    let field_errors = RwSignal::new(ValidationErrors::default());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (auth_state, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = build_request(
            &name.get(),
            &email.get(),
            &password.get(),
            &avatar_url.get(),
            venue_manager.get(),
        );
        if let Err(errors) = request.validate() {
            field_errors.set(errors);
            return;
        }
        field_errors.set(ValidationErrors::default());
        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            let login = LoginRequest {
                email: request.email.clone(),
                password: request.password.clone(),
            };
            let result = match api::register(&request).await {
                Ok(_) => do_login(login, set_auth_state).await.map(|_| ()),
                Err(e) => Err(e),
            };
            if let Err(e) = result {
                log::warn!("Registration failed: {}", e);
                set_error_message.set(Some(format!("Registration failed: {}", e)));
            }
            set_is_loading.set(false);
        });
    };

    let field_error = move |field: &'static str| {
        move || {
            field_errors
                .with(|e| e.get(field).map(str::to_string))
                .map(|e| view! { <span class="form-error">{e}</span> })
        }
    };
    let disabled = Signal::derive(move || is_loading.get());

    view! {
        <Show
            when=move || !auth_state.get().is_authenticated()
            fallback=|| view! { <Redirect path="/account"/> }
        >
            <div class="login-container">
                <div class="login-box">
                    <h1>"Create an account"</h1>
                    <p>"Registration is open to Noroff students."</p>

                    <Show when=move || error_message.get().is_some()>
                        <div class="error-message">
                            {move || error_message.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <form on:submit=on_submit>
                        <div class="form-group">
                            <label for="name">"Username"</label>
                            <Input value=name placeholder="kari_nordmann" attr:id="name" disabled=disabled/>
                            {field_error("name")}
                        </div>

                        <div class="form-group">
                            <label for="email">"Email"</label>
                            <Input
                                input_type=InputType::Email
                                value=email
                                placeholder="you@stud.noroff.no"
                                attr:id="email"
                                disabled=disabled
                            />
                            {field_error("email")}
                        </div>

                        <div class="form-group">
                            <label for="password">"Password"</label>
                            <Input
                                input_type=InputType::Password
                                value=password
                                placeholder="At least 8 characters"
                                attr:id="password"
                                disabled=disabled
                            />
                            {field_error("password")}
                        </div>

                        <div class="form-group">
                            <label for="avatar">"Avatar URL (optional)"</label>
                            <Input
                                input_type=InputType::Url
                                value=avatar_url
                                placeholder="https://..."
                                attr:id="avatar"
                                disabled=disabled
                            />
                            {field_error("avatar")}
                        </div>

                        <Checkbox checked=venue_manager label="I want to rent out venues"/>

                        <Button
                            appearance=ButtonAppearance::Primary
                            button_type=ButtonType::Submit
                            disabled=disabled
                        >
                            {move || if is_loading.get() { "Creating account..." } else { "Register" }}
                        </Button>
                    </form>

                    <p class="login-info">
                        "Already registered? "
                        <A href="/login">"Log in"</A>
                    </p>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_request_trims_and_sets_avatar() {
        let req = build_request(" kari ", " kari@stud.noroff.no ", "secret123", " https://img.example.com/a.png ", true);
        assert_eq!(req.name, "kari");
        assert_eq!(req.email, "kari@stud.noroff.no");
        assert_eq!(req.avatar.as_ref().map(|m| m.url.as_str()), Some("https://img.example.com/a.png"));
        assert!(req.venue_manager);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_build_request_without_avatar() {
        let req = build_request("kari", "kari@stud.noroff.no", "secret123", "  ", false);
        assert!(req.avatar.is_none());
    }
}
