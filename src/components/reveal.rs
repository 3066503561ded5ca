use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::SiteConfig;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Staggers sibling reveals via `transition-delay`.
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub on_reveal: Option<Callback<()>>,
    /// Overrides the site-wide visibility threshold.
    #[prop_or_default]
    pub threshold: Option<f64>,
}

/// Fades its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default().reveal;
    let threshold = props.threshold.unwrap_or(config.threshold);
    let root_margin = config.root_margin;
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        let on_reveal = props.on_reveal.clone();
        use_effect_with_deps(
            move |_| {
                let show = move || {
                    visible.set(true);
                    if let Some(cb) = &on_reveal {
                        cb.emit(());
                    }
                };

                let observed = node
                    .cast::<Element>()
                    .and_then(|element| observe_once(&element, threshold, &root_margin, show.clone()));

                let destructor: Box<dyn FnOnce()> = match observed {
                    Some((observer, callback)) => Box::new(move || {
                        observer.disconnect();
                        drop(callback);
                    }),
                    None => {
                        // No observer support, don't leave content hidden.
                        debug!("IntersectionObserver unavailable, revealing immediately");
                        show();
                        Box::new(|| ())
                    }
                };
                move || destructor()
            },
            (),
        );
    }

    let style = (props.delay_ms > 0).then(|| format!("transition-delay: {}ms;", props.delay_ms));

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.class.clone(), (*visible).then(|| "visible"))}
            style={style}
        >
            { for props.children.iter() }
            <style>
                {r#"
                .reveal {
                    opacity: 0;
                    transform: translateY(24px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }
                .reveal.visible {
                    opacity: 1;
                    transform: none;
                }
                "#}
            </style>
        </div>
    }
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe_once<F>(
    element: &Element,
    threshold: f64,
    root_margin: &str,
    show: F,
) -> Option<(IntersectionObserver, ObserverCallback)>
where
    F: Fn() + 'static,
{
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    observer.unobserve(&entry.target());
                    show();
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    options.set_root_margin(root_margin);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    observer.observe(element);
    Some((observer, callback))
}
