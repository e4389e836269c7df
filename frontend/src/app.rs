//! Root component: minimal pathname-based routing between the public
//! showcase and the admin area.
//!
//! Pages that navigate programmatically (login redirect, dashboard guard,
//! logout) get a `navigate` callback; everything else uses plain anchors,
//! which the embedding server answers with the SPA shell.

use wasm_bindgen::JsValue;
use yew::{html, Component, Context, Html};

use crate::pages::dashboard::DashboardPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Route {
    Home,
    AdminLogin,
    AdminDashboard,
    NotFound,
}

impl Route {
    /// Maps a pathname to a route. Unknown paths land on the 404 page.
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" => Route::Home,
            "/admin/login" => Route::AdminLogin,
            "/admin/dashboard" => Route::AdminDashboard,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::AdminLogin => "/admin/login",
            Route::AdminDashboard => "/admin/dashboard",
            Route::NotFound => "/404",
        }
    }
}

pub enum AppMsg {
    Navigate(Route),
}

pub struct App {
    route: Route,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let route = web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .map(|p| Route::from_path(&p))
            .unwrap_or(Route::Home);
        Self { route }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::Navigate(route) => {
                if route == self.route {
                    return false;
                }
                if let Some(window) = web_sys::window() {
                    if let Ok(history) = window.history() {
                        let _ = history.push_state_with_url(
                            &JsValue::NULL,
                            "",
                            Some(route.path()),
                        );
                    }
                }
                self.route = route;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let navigate = ctx.link().callback(AppMsg::Navigate);
        match self.route {
            Route::Home => html! { <HomePage /> },
            Route::AdminLogin => html! { <LoginPage navigate={navigate} /> },
            Route::AdminDashboard => html! { <DashboardPage navigate={navigate} /> },
            Route::NotFound => html! { <NotFoundPage /> },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Route;

    #[test]
    fn known_paths_resolve() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/admin/login"), Route::AdminLogin);
        assert_eq!(Route::from_path("/admin/login/"), Route::AdminLogin);
        assert_eq!(Route::from_path("/admin/dashboard"), Route::AdminDashboard);
    }

    #[test]
    fn unknown_paths_fall_through_to_404() {
        assert_eq!(Route::from_path("/nope"), Route::NotFound);
        assert_eq!(Route::from_path("/admin"), Route::NotFound);
    }
}
