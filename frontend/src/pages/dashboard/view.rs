//! View rendering for the admin dashboard: header, product table, and the
//! add/edit modal.

use yew::prelude::*;

use super::messages::Msg;
use super::state::DashboardPage;
use common::model::product::Product;

pub fn view(component: &DashboardPage, ctx: &Context<DashboardPage>) -> Html {
    html! {
        <div class="page admin">
            { header(ctx) }
            <main class="admin-main">
                <div class="admin-toolbar">
                    <h2>{ "Product Management" }</h2>
                    <button
                        class="btn btn-primary"
                        disabled={component.loading}
                        onclick={ctx.link().callback(|_| Msg::OpenModal(None))}
                    >
                        { "Add Product" }
                    </button>
                </div>
                { table(component, ctx) }
            </main>
            { if component.modal_open { modal(component, ctx) } else { html! {} } }
        </div>
    }
}

fn header(ctx: &Context<DashboardPage>) -> Html {
    html! {
        <header class="admin-header">
            <h1 class="brand">
                <span class="brand-accent">{ "UN" }</span>
                <span>{ "WEAR" }</span>
                <span class="brand-accent">{ "BLE" }</span>
                <span class="muted">{ " Admin" }</span>
            </h1>
            <div class="admin-header-actions">
                <a
                    class="btn btn-outline"
                    href="https://unwearble.blinkstore.in"
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    { "Visit Store" }
                </a>
                <button class="link-button" onclick={ctx.link().callback(|_| Msg::Logout)}>
                    { "Logout" }
                </button>
            </div>
        </header>
    }
}

fn table(component: &DashboardPage, ctx: &Context<DashboardPage>) -> Html {
    let body = if component.loading {
        html! { <tr><td colspan="4" class="muted">{ "Loading..." }</td></tr> }
    } else if component.products.is_empty() {
        html! {
            <tr><td colspan="4" class="muted">
                { "No products found. Click \"Add Product\" to create your first product." }
            </td></tr>
        }
    } else {
        component
            .products
            .iter()
            .map(|product| row(product, ctx, component.loading))
            .collect::<Html>()
    };

    html! {
        <table class="product-table">
            <thead>
                <tr>
                    <th>{ "Image" }</th>
                    <th>{ "Name" }</th>
                    <th>{ "Price" }</th>
                    <th>{ "Actions" }</th>
                </tr>
            </thead>
            <tbody>{ body }</tbody>
        </table>
    }
}

fn row(product: &Product, ctx: &Context<DashboardPage>, disabled: bool) -> Html {
    let edit = {
        let product = product.clone();
        ctx.link()
            .callback(move |_| Msg::OpenModal(Some(product.clone())))
    };
    let delete = {
        let id = product.id.clone();
        ctx.link().callback(move |_| Msg::Delete(id.clone()))
    };

    html! {
        <tr key={product.id.clone()}>
            <td>
                <img class="thumb" src={product.image.clone()} alt={product.name.clone()} />
            </td>
            <td>{ &product.name }</td>
            <td>{ format!("₹{:.2}", product.price) }</td>
            <td class="row-actions">
                <button class="link-button" onclick={edit} disabled={disabled}>
                    { "Edit" }
                </button>
                <button class="link-button danger" onclick={delete} disabled={disabled}>
                    { "Delete" }
                </button>
            </td>
        </tr>
    }
}

fn modal(component: &DashboardPage, ctx: &Context<DashboardPage>) -> Html {
    let title = if component.editing.is_some() {
        "Edit Product"
    } else {
        "Add New Product"
    };
    let submit_label = if component.loading {
        "Saving..."
    } else if component.editing.is_some() {
        "Update Product"
    } else {
        "Add Product"
    };

    let oninput = |to_msg: fn(String) -> Msg| {
        ctx.link().callback(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            to_msg(input.value())
        })
    };
    let oninput_description = ctx.link().callback(|e: InputEvent| {
        let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
        Msg::SetDescription(input.value())
    });
    let onchange_file = ctx.link().batch_callback(|e: Event| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        input
            .files()
            .and_then(|files| files.get(0))
            .map(Msg::FileSelected)
    });
    let onsubmit = ctx.link().callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <div class="modal-backdrop">
            <div class="modal">
                <div class="modal-header">
                    <h3>{ title }</h3>
                    <button
                        class="link-button"
                        aria-label="Close modal"
                        disabled={component.loading}
                        onclick={ctx.link().callback(|_| Msg::CloseModal)}
                    >
                        { "✕" }
                    </button>
                </div>
                <form onsubmit={onsubmit}>
                    <label for="name">{ "Product Name" }</label>
                    <input
                        id="name"
                        type="text"
                        value={component.form.name.clone()}
                        oninput={oninput(Msg::SetName)}
                        placeholder="Enter product name"
                        disabled={component.loading}
                    />

                    <label for="description">{ "Description" }</label>
                    <textarea
                        id="description"
                        value={component.form.description.clone()}
                        oninput={oninput_description}
                        placeholder="Enter product description"
                        disabled={component.loading}
                    />

                    <label for="price">{ "Price (₹)" }</label>
                    <input
                        id="price"
                        type="number"
                        step="0.01"
                        min="0.01"
                        value={component.form.price.clone()}
                        oninput={oninput(Msg::SetPrice)}
                        placeholder="Enter price"
                        disabled={component.loading}
                    />

                    <label for="image-upload">{ "Product Image" }</label>
                    <input
                        id="image-upload"
                        type="file"
                        accept="image/*"
                        onchange={onchange_file}
                        disabled={component.loading}
                    />
                    <p class="muted small">
                        { "Maximum file size: 2MB. Supported formats: JPG, PNG, WebP" }
                    </p>
                    { if component.form.image.is_empty() {
                        html! {}
                    } else {
                        html! { <img class="preview" src={component.form.image.clone()} alt="Preview" /> }
                    } }

                    <label for="external-link">{ "External Link (Blinkstore)" }</label>
                    <input
                        id="external-link"
                        type="url"
                        value={component.form.external_link.clone()}
                        oninput={oninput(Msg::SetExternalLink)}
                        placeholder="https://unwearble.blinkstore.in/product/..."
                        disabled={component.loading}
                    />

                    <div class="modal-actions">
                        <button
                            type="button"
                            class="btn btn-outline"
                            disabled={component.loading}
                            onclick={ctx.link().callback(|_| Msg::CloseModal)}
                        >
                            { "Cancel" }
                        </button>
                        <button type="submit" class="btn btn-primary" disabled={component.loading}>
                            { submit_label }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
