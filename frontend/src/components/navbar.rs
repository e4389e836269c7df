//! Fixed top navigation of the public pages. Shows an "Admin" link, or
//! "Dashboard" when a session token is present.

use yew::{html, Component, Context, Html};

use crate::services::session::session;

pub enum Msg {
    ToggleMenu,
}

pub struct Navbar {
    menu_open: bool,
    is_admin: bool,
}

impl Component for Navbar {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            menu_open: false,
            is_admin: session().is_authenticated(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToggleMenu => {
                self.menu_open = !self.menu_open;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let admin_link = if self.is_admin {
            html! { <a class="nav-link nav-link-accent" href="/admin/dashboard">{ "Dashboard" }</a> }
        } else {
            html! { <a class="nav-link" href="/admin/login">{ "Admin" }</a> }
        };

        html! {
            <header class="navbar">
                <div class="navbar-inner">
                    <a href="/" class="brand">
                        <span class="brand-accent">{ "UN" }</span>
                        <span>{ "WEAR" }</span>
                        <span class="brand-accent">{ "BLE" }</span>
                    </a>
                    <nav class={ if self.menu_open { "nav-links open" } else { "nav-links" } }>
                        <a class="nav-link" href="/">{ "Home" }</a>
                        <a class="nav-link" href="/#products">{ "Products" }</a>
                        <a class="nav-link" href="/#about">{ "About" }</a>
                        { admin_link }
                    </nav>
                    <button
                        class="menu-toggle"
                        aria-label="Toggle menu"
                        onclick={ctx.link().callback(|_| Msg::ToggleMenu)}
                    >
                        { if self.menu_open { "✕" } else { "☰" } }
                    </button>
                </div>
            </header>
        }
    }
}
