use yew::prelude::*;
use log::info;

mod config;
mod counter;
mod components {
    pub mod animated_counter;
    pub mod reveal;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <Landing />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting Crunch Gym landing page");
    yew::Renderer::<App>::new().render();
}
