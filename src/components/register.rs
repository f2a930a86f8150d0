use log::{debug, error};
use yew::prelude::*;

/// Substring guard only. The page never probes the network; a URL the
/// organizers forgot to fill in simply fails this check.
pub fn looks_like_link(url: &str) -> bool {
    url.contains("http")
}

/// Opens the registration form in a new tab, or nags the maintainer if
/// the configured URL is not a link yet.
pub fn open_registration(url: &str) {
    if looks_like_link(url) {
        debug!("Opening registration form: {}", url);
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.open_with_url_and_target(url, "_blank") {
                error!("Failed to open registration window: {:?}", err);
            }
        }
    } else {
        gloo::dialogs::alert(
            "Set the registration URL in the site configuration to your Google Form.",
        );
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct RegisterButtonProps {
    pub url: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Primary registration control. Enter triggers the same dispatch as a
/// click so keyboard users are not stranded on the hero section.
#[function_component(RegisterButton)]
pub fn register_button(props: &RegisterButtonProps) -> Html {
    let onclick = {
        let url = props.url.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            open_registration(&url);
        })
    };

    let onkeydown = {
        let url = props.url.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                open_registration(&url);
            }
        })
    };

    html! {
        <button {onclick} {onkeydown} class={props.class.clone()}>
            { props.children.clone() }
        </button>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct RegisterLinkProps {
    pub url: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Secondary control next to the QR image; same dispatch, anchor markup.
#[function_component(RegisterLink)]
pub fn register_link(props: &RegisterLinkProps) -> Html {
    let onclick = {
        let url = props.url.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            open_registration(&url);
        })
    };

    html! {
        <a href="#" {onclick} class={props.class.clone()}>
            { props.children.clone() }
        </a>
    }
}
