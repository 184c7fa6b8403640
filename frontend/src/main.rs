use crate::app::App;

mod api;
mod app;
mod components;
mod locale;
mod pages;
mod routes;
mod store;
mod tables;

fn main() {
    yew::Renderer::<App>::new().render();
}
