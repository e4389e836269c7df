use crate::app::App;

mod app;
mod components;
mod pages;
mod services;
mod toast;

fn main() {
    yew::Renderer::<App>::new().render();
}
