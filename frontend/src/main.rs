use crate::app::App;

mod app;
mod components;
mod data;
mod pages;
mod routes;
mod storage;
mod store;
mod toast;

fn main() {
    yew::Renderer::<App>::new().render();
}
