use log::{debug, info};
use wasm_bindgen::prelude::*;
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::pages::landing::Landing;

pub mod components;
pub mod config;
pub mod countdown;
pub mod csv;
pub mod pages {
    pub mod landing;
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    let config = use_memo((), |_| SiteConfig::default());

    html! {
        <Landing config={(*config).clone()} />
    }
}

#[wasm_bindgen]
pub fn run_app() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    info!("Logger initialized");

    console_error_panic_hook::set_once();

    info!("Mounting landing page");
    yew::Renderer::<App>::new().render();

    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    run_app()
}
