use log::error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Fraction of the section that must be visible before it fades in.
const REVEAL_THRESHOLD: f64 = 0.12;

#[derive(Properties, Clone, PartialEq)]
pub struct RevealSectionProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Page section that gains the `in-view` class once it has been at
/// least 12% visible. One-directional: the class is never removed, so
/// scrolling back up does not re-hide content.
#[function_component(RevealSection)]
pub fn reveal_section(props: &RevealSectionProps) -> Html {
    let node = use_node_ref();

    {
        let node = node.clone();
        use_effect_with((), move |_| {
            let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                |entries: js_sys::Array, _observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        if entry.is_intersecting() {
                            let _ = entry.target().class_list().add_1("in-view");
                        }
                    }
                },
            );

            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from(REVEAL_THRESHOLD));
            let observer = IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &options,
            );

            let observer = match observer {
                Ok(observer) => {
                    if let Some(el) = node.cast::<Element>() {
                        observer.observe(&el);
                    }
                    Some(observer)
                }
                Err(err) => {
                    error!("IntersectionObserver unavailable: {:?}", err);
                    None
                }
            };

            // The closure must outlive the observer's callbacks.
            move || {
                if let Some(observer) = observer {
                    observer.disconnect();
                }
                drop(callback);
            }
        });
    }

    html! {
        <section ref={node} id={props.id.clone()} class={classes!("section", props.class.clone())}>
            { props.children.clone() }
        </section>
    }
}
