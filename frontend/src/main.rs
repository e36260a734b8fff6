use crate::app::App;

mod app;
mod components;
mod gateways;
mod helpers;

fn main() {
    yew::Renderer::<App>::new().render();
}
