use crate::app::App;

mod api;
mod app;
mod components;
mod config;
mod pages;
mod routes;
mod store;

fn main() {
    yew::Renderer::<App>::new().render();
}
