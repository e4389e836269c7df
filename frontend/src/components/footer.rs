use js_sys::Date;
use yew::{html, Component, Context, Html};

pub struct Footer;

impl Component for Footer {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let year = Date::new_0().get_full_year();
        html! {
            <footer class="footer" id="about">
                <div class="footer-inner">
                    <div class="footer-brand">
                        <h3 class="brand">
                            <span class="brand-accent">{ "UN" }</span>
                            <span>{ "WEAR" }</span>
                            <span class="brand-accent">{ "BLE" }</span>
                        </h3>
                        <p>
                            { "The T-shirt store made for those who aren't afraid to wear \
                               thoughts most people wouldn't say out loud. These aren't just \
                               T-shirts — they're conversations, confessions, or maybe even \
                               cautions." }
                        </p>
                    </div>
                    <div class="footer-contact">
                        <h4>{ "Contact Us" }</h4>
                        <p>{ "info@unwearble.com" }</p>
                        <p>{ "69 fashion street near Awnmyd District" }</p>
                    </div>
                </div>
                <div class="footer-copyright">
                    <p>{ format!("© {} UNWEARBLE. All rights reserved.", year) }</p>
                </div>
            </footer>
        }
    }
}
