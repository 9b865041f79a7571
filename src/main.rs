mod app;
mod monitoring;
mod pages;

use crate::app::App;

fn main() {
    monitoring::init();
    dioxus::launch(App);
}
