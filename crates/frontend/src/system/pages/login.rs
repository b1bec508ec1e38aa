use contracts::shared::validation::ValidationErrors;
use contracts::system::auth::LoginRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Redirect, A};
use thaw::*;

use crate::system::auth::context::{do_login, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let field_errors = RwSignal::new(ValidationErrors::default());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (auth_state, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = LoginRequest {
            email: email.get().trim().to_string(),
            password: password.get(),
        };
        if let Err(errors) = request.validate() {
            field_errors.set(errors);
            return;
        }
        field_errors.set(ValidationErrors::default());
        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            // A successful login flips the auth state, which redirects below
            if let Err(e) = do_login(request, set_auth_state).await {
                log::warn!("Login failed: {}", e);
                set_error_message.set(Some(format!("Login failed: {}", e)));
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

    view! {
        <Show
            when=move || !auth_state.get().is_authenticated()
            fallback=|| view! { <Redirect path="/account"/> }
        >
            <div class="login-container">
                <div class="login-box">
                    <h1>"Welcome back"</h1>
                    <p>"Log in to book stays and manage your venues."</p>

                    <Show when=move || error_message.get().is_some()>
                        <div class="error-message">
                            {move || error_message.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <form on:submit=on_submit>
                        <div class="form-group">
                            <label for="email">"Email"</label>
                            <Input
                                input_type=InputType::Email
                                value=email
                                placeholder="you@stud.noroff.no"
                                attr:id="email"
                                disabled=Signal::derive(move || is_loading.get())
                            />
                            {field_error("email")}
                        </div>

                        <div class="form-group">
                            <label for="password">"Password"</label>
                            <Input
                                input_type=InputType::Password
                                value=password
                                attr:id="password"
                                disabled=Signal::derive(move || is_loading.get())
                            />
                            {field_error("password")}
                        </div>

                        <Button
                            appearance=ButtonAppearance::Primary
                            button_type=ButtonType::Submit
                            disabled=Signal::derive(move || is_loading.get())
                        >
                            {move || if is_loading.get() { "Logging in..." } else { "Log in" }}
                        </Button>
                    </form>

                    <p class="login-info">
                        "No account yet? "
                        <A href="/register">"Register"</A>
                    </p>
                </div>
            </div>
        </Show>
    }
}
