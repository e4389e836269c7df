use common::model::product::Product;
use yew::{html, Component, Context, Html, Properties};

#[derive(Properties, PartialEq, Clone)]
pub struct ProductCardProps {
    pub product: Product,
}

/// One tile of the showcase grid. The buy button goes straight to the
/// product's external checkout page.
pub struct ProductCard;

impl Component for ProductCard {
    type Message = ();
    type Properties = ProductCardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let product = &ctx.props().product;
        html! {
            <div class="card product-card">
                <div class="product-image">
                    <img src={product.image.clone()} alt={product.name.clone()} />
                </div>
                <h3>{ &product.name }</h3>
                <p class="product-description">{ &product.description }</p>
                <div class="product-footer">
                    <span class="product-price">{ format!("₹{:.2}", product.price) }</span>
                    <a
                        class="btn btn-primary"
                        href={product.external_link.clone()}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        { "Buy Now" }
                    </a>
                </div>
            </div>
        }
    }
}
