//! Admin dashboard: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export the component type and its messages.
//! - Bounce unauthenticated visitors back to the login page.
//! - On first render, probe storage reachability, then load the product
//!   table. Every outcome the user should know about becomes a toast.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::app::Route;
use crate::services::remote::repository;
use crate::services::session::session;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::DashboardProps;
pub use state::DashboardPage;

impl Component for DashboardPage {
    type Message = Msg;
    type Properties = DashboardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        DashboardPage::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.initialized {
            self.initialized = true;

            if !session().is_authenticated() {
                ctx.props().navigate.emit(Route::AdminLogin);
                return;
            }

            let link = ctx.link().clone();
            spawn_local(async move {
                let repo = repository();
                if !repo.probe_storage().await {
                    link.send_message(Msg::StorageUnavailable);
                    return;
                }
                link.send_message(Msg::ProductsLoaded(repo.list_products().await));
            });
        }
    }
}
