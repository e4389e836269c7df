//! Update function for the admin dashboard.
//!
//! Elm-style: receives the current `DashboardPage` state, the `Context`,
//! and a `Msg`, mutates the state and returns whether the view should
//! re-render.
//!
//! Key behaviors
//! - Validation runs on submit, before any repository call; a form that
//!   fails validation only produces a toast.
//! - Writes go through the repository on `spawn_local`; success reloads
//!   the table, failure becomes a generic toast. No error escapes.
//! - Delete asks for confirmation first.

use common::model::product::Product;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::helpers::{confirm, read_picked_image};
use super::messages::Msg;
use super::state::DashboardPage;
use crate::app::Route;
use crate::services::remote::repository;
use crate::services::session::session;
use crate::toast::show_toast;

pub fn update(component: &mut DashboardPage, ctx: &Context<DashboardPage>, msg: Msg) -> bool {
    match msg {
        Msg::StorageUnavailable => {
            component.loading = false;
            show_toast("Storage access failed. Please check the service configuration.");
            true
        }
        Msg::ProductsLoaded(products) => {
            component.products = products;
            component.loading = false;
            true
        }
        Msg::OpenModal(product) => {
            component.fill_form(product);
            component.modal_open = true;
            true
        }
        Msg::CloseModal => {
            component.modal_open = false;
            component.fill_form(None);
            true
        }
        Msg::SetName(value) => {
            component.form.name = value;
            false
        }
        Msg::SetDescription(value) => {
            component.form.description = value;
            false
        }
        Msg::SetPrice(value) => {
            component.form.price = value;
            false
        }
        Msg::SetExternalLink(value) => {
            component.form.external_link = value;
            false
        }
        Msg::FileSelected(file) => {
            read_picked_image(ctx.link().clone(), file);
            false
        }
        Msg::ImageLoaded(data_url) => {
            component.form.image = data_url;
            true
        }
        Msg::Submit => submit(component, ctx),
        Msg::Saved(message) => {
            component.loading = true;
            component.modal_open = false;
            component.fill_form(None);
            show_toast(message);
            reload(ctx.link().clone());
            true
        }
        Msg::OperationFailed(cause) => {
            component.loading = false;
            gloo_console::error!(cause);
            show_toast("Something went wrong. Please try again.");
            true
        }
        Msg::Delete(id) => {
            if !confirm("Are you sure you want to delete this product?") {
                return false;
            }
            component.loading = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                match repository().delete_product(&id).await {
                    Ok(()) => link.send_message(Msg::Saved("Product deleted successfully")),
                    Err(e) => link.send_message(Msg::OperationFailed(e.to_string())),
                }
            });
            true
        }
        Msg::Logout => {
            session().logout();
            show_toast("Logged out successfully");
            ctx.props().navigate.emit(Route::Home);
            false
        }
    }
}

fn submit(component: &mut DashboardPage, ctx: &Context<DashboardPage>) -> bool {
    if component.loading {
        return false;
    }
    let draft = match component.form.validate() {
        Ok(draft) => draft,
        Err(e) => {
            show_toast(&e.to_string());
            return false;
        }
    };

    component.loading = true;
    let link = ctx.link().clone();

    match &component.editing {
        Some(existing) => {
            // Keep the immutable fields; the form only edits the rest. The
            // image is either the untouched public URL or a fresh data URL.
            let edited = Product {
                id: existing.id.clone(),
                created_at: existing.created_at.clone(),
                updated_at: existing.updated_at.clone(),
                name: draft.name,
                description: draft.description,
                price: draft.price,
                image: draft.image,
                external_link: draft.external_link,
            };
            spawn_local(async move {
                match repository().update_product(edited).await {
                    Ok(_) => link.send_message(Msg::Saved("Product updated successfully")),
                    Err(e) => link.send_message(Msg::OperationFailed(e.to_string())),
                }
            });
        }
        None => {
            spawn_local(async move {
                match repository().create_product(draft).await {
                    Ok(_) => link.send_message(Msg::Saved("Product added successfully")),
                    Err(e) => link.send_message(Msg::OperationFailed(e.to_string())),
                }
            });
        }
    }
    true
}

fn reload(link: Scope<DashboardPage>) {
    spawn_local(async move {
        link.send_message(Msg::ProductsLoaded(repository().list_products().await));
    });
}
