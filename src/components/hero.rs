use web_sys::{Element, Event, HtmlElement, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::frame::{BrowserFrames, FrameCoalescer};
use crate::components::hero_cursor::HeroCursor;
use crate::components::smooth_scroll::scroll_to_section;
use crate::config::SiteConfig;

/// Background shift for the current scroll position. Stops growing once
/// the hero has scrolled out of view.
pub fn parallax_offset(scroll_y: f64, hero_height: f64, factor: f64) -> f64 {
    scroll_y.clamp(0.0, hero_height.max(0.0)) * factor
}

/// Pointer position inside a box as percentages, clamped to the box.
pub fn pointer_percent(x: f64, y: f64, left: f64, top: f64, width: f64, height: f64) -> (f64, f64) {
    let ratio = |offset: f64, size: f64| {
        if size <= 0.0 {
            50.0
        } else {
            (offset / size * 100.0).clamp(0.0, 100.0)
        }
    };
    (ratio(x - left, width), ratio(y - top, height))
}

/// Background shift that follows the pointer: zero at the centre of the
/// box, `±max` at its edges.
pub fn pointer_tilt((x, y): (f64, f64), rect: &DomBox, (max_x, max_y): (f64, f64)) -> (f64, f64) {
    let (px, py) = pointer_percent(x, y, rect.left, rect.top, rect.width, rect.height);
    ((px / 50.0 - 1.0) * max_x, (py / 50.0 - 1.0) * max_y)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DomBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl DomBox {
    fn of(element: &Element) -> Self {
        let rect = element.get_bounding_client_rect();
        Self {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }
}

/// No hover, a coarse pointer, or a narrow viewport.
pub fn is_touch_like(coarse_pointer: bool, viewport_width: f64, max_width: f64) -> bool {
    coarse_pointer || viewport_width <= max_width
}

fn is_touch_device(max_width: f64) -> bool {
    let Some(window) = web_sys::window() else {
        return true;
    };
    let coarse = window
        .match_media("(hover: none), (pointer: coarse)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false);
    let width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0);
    is_touch_like(coarse, width, max_width)
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let section = use_node_ref();
    let shift = use_state(|| 0.0_f64);
    let tilt = use_state(|| (0.0_f64, 0.0_f64));
    let glow = use_state(|| (50.0_f64, 50.0_f64));
    let touch = use_memo(|max_width| is_touch_device(*max_width), config.hero.touch_max_width_px);
    let scroll_frames = use_memo(|_| FrameCoalescer::new(BrowserFrames), ());
    let pointer_frames = use_memo(|_| FrameCoalescer::new(BrowserFrames), ());

    {
        let section = section.clone();
        let shift = shift.clone();
        let factor = config.hero.parallax_factor;
        use_event_with_window("scroll", move |_: Event| {
            let section = section.clone();
            let shift = shift.clone();
            scroll_frames.request(move || {
                let scroll_y = web_sys::window()
                    .and_then(|w| w.scroll_y().ok())
                    .unwrap_or(0.0);
                let height = section
                    .cast::<HtmlElement>()
                    .map(|el| el.offset_height() as f64)
                    .unwrap_or(0.0);
                let next = parallax_offset(scroll_y, height, factor);
                if (next - *shift).abs() > 0.5 {
                    shift.set(next);
                }
            });
        });
    }

    let on_mouse_move = {
        let section = section.clone();
        let glow = glow.clone();
        let tilt = tilt.clone();
        let touch = *touch;
        let max_tilt = (config.hero.tilt_x_px, config.hero.tilt_y_px);
        Callback::from(move |e: MouseEvent| {
            let pointer = (e.client_x() as f64, e.client_y() as f64);
            let section = section.clone();
            let glow = glow.clone();
            let tilt = tilt.clone();
            pointer_frames.request(move || {
                let Some(el) = section.cast::<Element>() else {
                    return;
                };
                let rect = DomBox::of(&el);
                glow.set(pointer_percent(pointer.0, pointer.1, rect.left, rect.top, rect.width, rect.height));
                if !touch {
                    tilt.set(pointer_tilt(pointer, &rect, max_tilt));
                }
            });
        })
    };

    let on_mouse_leave = {
        let tilt = tilt.clone();
        Callback::from(move |_: MouseEvent| tilt.set((0.0, 0.0)))
    };

    let to_contact = {
        let offset = config.header.scroll_offset_px;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_section("contact", offset);
        })
    };

    let (glow_x, glow_y) = *glow;
    let (tilt_x, tilt_y) = *tilt;
    let style = format!("--glow-x: {:.1}%; --glow-y: {:.1}%;", glow_x, glow_y);
    let background_style = format!(
        "transform: translate3d({:.1}px, {:.1}px, 0);",
        tilt_x,
        *shift + tilt_y
    );

    html! {
        <section
            class={classes!("hero", (!*touch).then(|| "custom-cursor"))}
            id="top"
            ref={section.clone()}
            style={style}
            onmousemove={on_mouse_move}
            onmouseleave={on_mouse_leave}
        >
            <div class="hero-background" style={background_style}></div>
            <div class="hero-glow"></div>
            {
                if *touch {
                    html! {}
                } else {
                    html! { <HeroCursor host={section} /> }
                }
            }
            <div class="hero-content">
                <h1>{"Bookkeeping that keeps up with you"}</h1>
                <p class="hero-subtitle">
                    {"Brightside reconciles your accounts overnight, flags what needs a human, and hands your accountant a tidy ledger every month."}
                </p>
                <a href="#contact" class="hero-cta" onclick={to_contact}>
                    {"Book a demo"}
                </a>
            </div>
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    overflow: hidden;
                    padding: 0 2rem;
                }
                .hero.custom-cursor, .hero.custom-cursor a { cursor: none; }
                .hero-background {
                    position: absolute;
                    inset: -10% -24px 0 -24px;
                    background: linear-gradient(160deg, #1b2336 0%, #121621 60%);
                    will-change: transform;
                    z-index: 0;
                }
                .hero-glow {
                    position: absolute;
                    inset: 0;
                    background: radial-gradient(
                        600px circle at var(--glow-x, 50%) var(--glow-y, 50%),
                        rgba(245, 185, 66, 0.18),
                        transparent 60%
                    );
                    pointer-events: none;
                    z-index: 1;
                }
                .hero-content {
                    position: relative;
                    z-index: 2;
                    max-width: 760px;
                }
                .hero h1 {
                    font-size: 3.6rem;
                    line-height: 1.1;
                    margin-bottom: 1.5rem;
                }
                .hero-subtitle {
                    font-size: 1.25rem;
                    color: #9aa3b5;
                    margin-bottom: 2.5rem;
                }
                .hero-cta {
                    display: inline-block;
                    padding: 1rem 2.2rem;
                    border-radius: 999px;
                    background: #f5b942;
                    color: #121621;
                    font-weight: 600;
                    text-decoration: none;
                    transition: transform 0.2s ease, box-shadow 0.2s ease;
                }
                .hero-cta:hover {
                    transform: translateY(-2px);
                    box-shadow: 0 8px 24px rgba(245, 185, 66, 0.3);
                }
                @media (max-width: 768px) {
                    .hero h1 { font-size: 2.4rem; }
                }
                "#}
            </style>
        </section>
    }
}
