//! Public showcase page: hero section plus the four most recent products.

use common::model::product::Product;
use yew::platform::spawn_local;
use yew::{html, Component, Context, Html};

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::product_card::ProductCard;
use crate::services::remote::repository;

/// How many products the featured grid shows.
const FEATURED_COUNT: usize = 4;

pub enum Msg {
    Loaded(Vec<Product>),
}

pub struct HomePage {
    products: Vec<Product>,
    loading: bool,
}

impl Component for HomePage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            products: Vec::new(),
            loading: true,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(products) => {
                self.products = products;
                self.loading = false;
                true
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            spawn_local(async move {
                let mut products = repository().list_products().await;
                products.truncate(FEATURED_COUNT);
                link.send_message(Msg::Loaded(products));
            });
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let grid = if self.loading {
            html! { <p class="muted">{ "Loading products..." }</p> }
        } else if self.products.is_empty() {
            html! { <p class="muted">{ "No products yet. Check back soon." }</p> }
        } else {
            html! {
                <div class="product-grid">
                    { for self.products.iter().cloned().map(|product| html! {
                        <ProductCard key={product.id.clone()} product={product.clone()} />
                    }) }
                </div>
            }
        };

        html! {
            <div class="page">
                <Navbar />
                <section class="hero">
                    <h1 class="brand brand-hero">
                        <span class="brand-accent">{ "UN" }</span>
                        <span>{ "WEAR" }</span>
                        <span class="brand-accent">{ "BLE" }</span>
                    </h1>
                    <p class="hero-copy">
                        { "Graphic tees that bite back, made for those who like their \
                           humor a little darker and their style a little louder." }
                    </p>
                    <div class="hero-actions">
                        <a class="btn btn-primary" href="#products">{ "Explore Collection" }</a>
                        <a
                            class="btn btn-outline"
                            href="https://unwearble.blinkstore.in"
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            { "Visit Store" }
                        </a>
                    </div>
                </section>
                <section class="featured" id="products">
                    <h2><span class="brand-accent">{ "Featured" }</span>{ " Collection" }</h2>
                    { grid }
                </section>
                <Footer />
            </div>
        }
    }
}
