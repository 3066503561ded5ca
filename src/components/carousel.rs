use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, trace};
use web_sys::{Event, HtmlElement, MouseEvent, PointerEvent, TouchEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::autoplay::{hover_gesture, Autoplay, Gesture, IntervalTicker};
use crate::components::carousel_state::{CarouselAction, CarouselState, Viewport};
use crate::components::frame::{BrowserFrames, FrameCoalescer};
use crate::config::{CarouselConfig, SiteConfig};

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub children: Children,
    #[prop_or(true)]
    pub show_controls: bool,
    #[prop_or(true)]
    pub show_indicators: bool,
    #[prop_or(true)]
    pub autoplay: bool,
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

type SharedAutoplay = Rc<RefCell<Autoplay<IntervalTicker>>>;

fn window_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// Falls back to the window width until the wrapper has been laid out.
fn measure(wrapper: &NodeRef) -> Option<Viewport> {
    let window_width = window_width()?;
    let wrapper_width = wrapper
        .cast::<HtmlElement>()
        .map(|el| el.client_width() as f64)
        .filter(|width| *width > 0.0)
        .unwrap_or(window_width);
    Some(Viewport {
        window_width,
        wrapper_width,
    })
}

fn schedule_relayout(
    coalescer: &FrameCoalescer,
    wrapper: &NodeRef,
    dispatcher: &UseReducerDispatcher<CarouselState>,
) {
    let wrapper = wrapper.clone();
    let dispatcher = dispatcher.clone();
    let scheduled = coalescer.request(move || {
        if let Some(viewport) = measure(&wrapper) {
            debug!("Carousel relayout at {:?}", viewport);
            dispatcher.dispatch(CarouselAction::Resize(viewport));
        }
    });
    if !scheduled {
        trace!("Resize folded into pending frame");
    }
}

fn touch_x(e: &TouchEvent) -> Option<f64> {
    e.changed_touches().get(0).map(|touch| touch.client_x() as f64)
}

fn start_autoplay(autoplay: &SharedAutoplay, dispatcher: UseReducerDispatcher<CarouselState>) {
    autoplay
        .borrow_mut()
        .start(move || dispatcher.dispatch(CarouselAction::Tick));
}

fn on_gesture(
    autoplay: &SharedAutoplay,
    dispatcher: UseReducerDispatcher<CarouselState>,
    gesture: Gesture,
    enabled: bool,
) {
    autoplay
        .borrow_mut()
        .on_gesture(gesture, enabled, move || dispatcher.dispatch(CarouselAction::Tick));
}

#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let site = use_context::<SiteConfig>().unwrap_or_default();
    let config: CarouselConfig = site.carousel;
    let card_count = props.children.len();
    let wrapper = use_node_ref();
    let enabled = props.autoplay;

    let state = {
        let config = config.clone();
        use_reducer(move || {
            let width = window_width().unwrap_or(0.0);
            CarouselState::new(config, card_count, Viewport::uniform(width))
        })
    };
    let autoplay = use_mut_ref(|| Autoplay::new(IntervalTicker, config.autoplay_interval_ms));
    let coalescer = use_memo(|_| FrameCoalescer::new(BrowserFrames), ());

    // Cards are fixed after the first render, but keep the range honest if
    // the parent ever hands over a different list.
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |count| {
                dispatcher.dispatch(CarouselAction::SetCardCount(*count));
                || ()
            },
            card_count,
        );
    }

    // Layout: measure one frame after mount, then on every resize.
    {
        let dispatcher = state.dispatcher();
        let wrapper = wrapper.clone();
        let coalescer = coalescer.clone();
        use_effect_with_deps(
            move |_| {
                schedule_relayout(&coalescer, &wrapper, &dispatcher);
                || ()
            },
            (),
        );
    }
    {
        let dispatcher = state.dispatcher();
        let wrapper = wrapper.clone();
        let coalescer = coalescer.clone();
        use_event_with_window("resize", move |_: Event| {
            schedule_relayout(&coalescer, &wrapper, &dispatcher);
        });
    }

    {
        let dispatcher = state.dispatcher();
        let autoplay = autoplay.clone();
        let period = config.autoplay_interval_ms;
        use_effect_with_deps(
            move |_| {
                autoplay.borrow_mut().set_period(period);
                if enabled {
                    start_autoplay(&autoplay, dispatcher);
                }
                move || autoplay.borrow_mut().stop()
            },
            (enabled, period),
        );
    }

    let on_pointer = |entering: bool| {
        let autoplay = autoplay.clone();
        let dispatcher = state.dispatcher();
        Callback::from(move |e: PointerEvent| {
            if let Some(gesture) = hover_gesture(&e.pointer_type(), entering) {
                on_gesture(&autoplay, dispatcher.clone(), gesture, enabled);
            }
        })
    };

    let on_touch_start = {
        let autoplay = autoplay.clone();
        let dispatcher = state.dispatcher();
        Callback::from(move |e: TouchEvent| {
            on_gesture(&autoplay, dispatcher.clone(), Gesture::TouchStart, enabled);
            if let Some(x) = touch_x(&e) {
                dispatcher.dispatch(CarouselAction::SwipeStart(x));
            }
        })
    };

    let on_touch_end = {
        let autoplay = autoplay.clone();
        let dispatcher = state.dispatcher();
        Callback::from(move |e: TouchEvent| {
            match touch_x(&e) {
                Some(x) => dispatcher.dispatch(CarouselAction::SwipeEnd(x)),
                None => dispatcher.dispatch(CarouselAction::SwipeCancel),
            }
            on_gesture(&autoplay, dispatcher.clone(), Gesture::TouchEnd, enabled);
        })
    };

    let on_touch_cancel = {
        let autoplay = autoplay.clone();
        let dispatcher = state.dispatcher();
        Callback::from(move |_: TouchEvent| {
            dispatcher.dispatch(CarouselAction::SwipeCancel);
            on_gesture(&autoplay, dispatcher.clone(), Gesture::TouchEnd, enabled);
        })
    };

    let go = |action: CarouselAction| {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dispatcher.dispatch(action);
        })
    };

    let track_style = format!(
        "transform: translateX(-{}px); gap: {}px;",
        state.offset(),
        state.gap()
    );
    let card_style = format!("flex: 0 0 {}px; width: {}px;", state.card_width(), state.card_width());
    let current = state.current();
    let max_index = state.max_index();

    html! {
        <div class="carousel"
            aria-label={props.label.clone()}
            data-visible={state.visible_count().to_string()}
            onpointerenter={on_pointer(true)}
            onpointerleave={on_pointer(false)}
            ontouchstart={on_touch_start}
            ontouchend={on_touch_end}
            ontouchcancel={on_touch_cancel}
        >
            {
                if props.show_controls {
                    html! {
                        <button class="carousel-control carousel-prev"
                            aria-label="Previous"
                            disabled={current == 0}
                            onclick={go(CarouselAction::Prev)}
                        >
                            {"‹"}
                        </button>
                    }
                } else {
                    html! {}
                }
            }
            <div class="carousel-viewport" ref={wrapper}>
                <div class={classes!("carousel-track", state.is_swiping().then(|| "swiping"))} style={track_style}>
                    { for props.children.iter().map(|card| html! {
                        <div class="carousel-card" style={card_style.clone()}>{card}</div>
                    }) }
                </div>
            </div>
            {
                if props.show_controls {
                    html! {
                        <button class="carousel-control carousel-next"
                            aria-label="Next"
                            disabled={current >= max_index}
                            onclick={go(CarouselAction::Next)}
                        >
                            {"›"}
                        </button>
                    }
                } else {
                    html! {}
                }
            }
            {
                if props.show_indicators {
                    html! {
                        <div class="carousel-indicators">
                            { for state.indicators().into_iter().enumerate().map(|(i, active)| html! {
                                <button
                                    key={i}
                                    class={classes!("carousel-dot", active.then(|| "active"))}
                                    aria-label={format!("Go to slide {}", i + 1)}
                                    onclick={go(CarouselAction::GoTo(i as i64))}
                                />
                            }) }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .carousel {
                    position: relative;
                    padding: 0 3rem 2.5rem;
                }
                .carousel-viewport {
                    overflow: hidden;
                    width: 100%;
                }
                .carousel-track {
                    display: flex;
                    transition: transform 0.5s ease;
                    will-change: transform;
                    touch-action: pan-y;
                }
                .carousel-track.swiping {
                    transition: none;
                }
                .carousel-card {
                    box-sizing: border-box;
                }
                .carousel-control {
                    position: absolute;
                    top: calc(50% - 1.25rem);
                    transform: translateY(-50%);
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    border: 1px solid rgba(245, 185, 66, 0.4);
                    background: rgba(18, 22, 33, 0.8);
                    color: #f5b942;
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                .carousel-control:disabled {
                    opacity: 0.3;
                    cursor: default;
                }
                .carousel-prev { left: 0; }
                .carousel-next { right: 0; }
                .carousel-indicators {
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    right: 0;
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                }
                .carousel-dot {
                    width: 10px;
                    height: 10px;
                    padding: 0;
                    border-radius: 50%;
                    border: none;
                    background: rgba(255, 255, 255, 0.25);
                    cursor: pointer;
                    transition: background 0.2s ease, transform 0.2s ease;
                }
                .carousel-dot.active {
                    background: #f5b942;
                    transform: scale(1.3);
                }
                @media (max-width: 600px) {
                    .carousel { padding: 0 0 2.5rem; }
                    .carousel-control { display: none; }
                }
                "#}
            </style>
        </div>
    }
}
