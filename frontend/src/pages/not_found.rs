use yew::{html, Component, Context, Html};

pub struct NotFoundPage;

impl Component for NotFoundPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="page centered">
                <div class="not-found">
                    <h1 class="brand brand-hero">
                        <span class="brand-accent">{ "4" }</span>
                        <span>{ "0" }</span>
                        <span class="brand-accent">{ "4" }</span>
                    </h1>
                    <p>{ "Page not found" }</p>
                    <a class="btn btn-outline" href="/">{ "Back to Home" }</a>
                </div>
            </div>
        }
    }
}
