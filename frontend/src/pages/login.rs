//! Admin login page.
//!
//! The credential check itself is instant and local (see `common::auth`);
//! a short artificial delay keeps the submit button from flickering.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::app::Route;
use crate::services::session::session;
use crate::toast::show_toast;

#[derive(Properties, PartialEq, Clone)]
pub struct LoginProps {
    pub navigate: Callback<Route>,
}

pub enum Msg {
    SetEmail(String),
    SetPassword(String),
    ToggleShowPassword,
    Submit,
    Finished(bool),
}

pub struct LoginPage {
    email: String,
    password: String,
    show_password: bool,
    loading: bool,
}

impl Component for LoginPage {
    type Message = Msg;
    type Properties = LoginProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            show_password: false,
            loading: false,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        // Already logged in: skip straight to the dashboard.
        if first_render && session().is_authenticated() {
            ctx.props().navigate.emit(Route::AdminDashboard);
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetEmail(email) => {
                self.email = email;
                false
            }
            Msg::SetPassword(password) => {
                self.password = password;
                false
            }
            Msg::ToggleShowPassword => {
                self.show_password = !self.show_password;
                true
            }
            Msg::Submit => {
                if self.loading {
                    return false;
                }
                self.loading = true;
                let email = self.email.clone();
                let password = self.password.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(1000).await;
                    link.send_message(Msg::Finished(session().login(&email, &password)));
                });
                true
            }
            Msg::Finished(success) => {
                self.loading = false;
                if success {
                    show_toast("Login successful!");
                    ctx.props().navigate.emit(Route::AdminDashboard);
                } else {
                    show_toast("Invalid credentials. Please try again.");
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let oninput_email = ctx.link().callback(|e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            Msg::SetEmail(input.value())
        });
        let oninput_password = ctx.link().callback(|e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            Msg::SetPassword(input.value())
        });
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <div class="page centered">
                <div class="card login-card">
                    <div class="login-header">
                        <h1 class="brand">
                            <span class="brand-accent">{ "UN" }</span>
                            <span>{ "WEAR" }</span>
                            <span class="brand-accent">{ "BLE" }</span>
                        </h1>
                        <p class="muted">{ "Admin Login" }</p>
                    </div>
                    <form {onsubmit}>
                        <label for="email">{ "Email" }</label>
                        <input
                            id="email"
                            type="email"
                            value={self.email.clone()}
                            oninput={oninput_email}
                            placeholder="Enter your email"
                            required=true
                        />
                        <label for="password">{ "Password" }</label>
                        <div class="password-field">
                            <input
                                id="password"
                                type={ if self.show_password { "text" } else { "password" } }
                                value={self.password.clone()}
                                oninput={oninput_password}
                                placeholder="Enter your password"
                                required=true
                            />
                            <button
                                type="button"
                                class="link-button"
                                onclick={ctx.link().callback(|_| Msg::ToggleShowPassword)}
                            >
                                { if self.show_password { "Hide" } else { "Show" } }
                            </button>
                        </div>
                        <button type="submit" class="btn btn-primary" disabled={self.loading}>
                            { if self.loading { "Logging in..." } else { "Login" } }
                        </button>
                    </form>
                    <div class="login-footer">
                        <a href="/">{ "Back to Homepage" }</a>
                    </div>
                </div>
            </div>
        }
    }
}
