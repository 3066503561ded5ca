use log::{info, warn};
use web_sys::{Event, KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

mod config;
mod components {
    pub mod autoplay;
    pub mod carousel;
    pub mod carousel_state;
    pub mod category_filter;
    pub mod contact_form;
    pub mod counter;
    pub mod faq;
    pub mod frame;
    pub mod hero;
    pub mod hero_cursor;
    pub mod parallax_banner;
    pub mod reveal;
    pub mod smooth_scroll;
}
mod pages {
    pub mod faq;
    pub mod home;
    pub mod updates;
}

use components::frame::{BrowserFrames, FrameCoalescer};
use components::smooth_scroll::scroll_to_section;
use config::SiteConfig;
use pages::{faq::FaqPage, home::Home, updates::UpdatesPage};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/faq")]
    Faq,
    #[at("/updates")]
    Updates,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <FaqPage /> }
        }
        Route::Updates => {
            info!("Rendering Updates page");
            html! { <UpdatesPage /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home} classes="forward-link">
                        {"Back to the home page"}
                    </Link<Route>>
                </div>
            }
        }
    }
}

/// In-page sections reachable from the header.
const NAV_SECTIONS: &[(&str, &str)] = &[
    ("features", "Features"),
    ("testimonials", "Customers"),
    ("faq", "FAQ"),
    ("contact", "Contact"),
];

/// Pages of their own, marked `active` while they are showing.
const NAV_PAGES: &[(Route, &str)] = &[(Route::Updates, "Updates"), (Route::Faq, "All questions")];

fn is_active(current: Option<&Route>, link: &Route) -> bool {
    current == Some(link)
}

fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Value for `body.style.overflow`: the page behind an open menu stays put.
fn body_overflow(menu_open: bool) -> &'static str {
    if menu_open {
        "hidden"
    } else {
        ""
    }
}

fn lock_body_scroll(menu_open: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.body())
    else {
        return;
    };
    if let Err(e) = body.style().set_property("overflow", body_overflow(menu_open)) {
        warn!("Could not set body overflow: {:?}", e);
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default().header;
    let route = use_route::<Route>();
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| scroll_y() > config.scrolled_after_px);
    let frames = use_memo(|_| FrameCoalescer::new(BrowserFrames), ());

    {
        let is_scrolled = is_scrolled.clone();
        let threshold = config.scrolled_after_px;
        use_event_with_window("scroll", move |_: Event| {
            let is_scrolled = is_scrolled.clone();
            frames.request(move || {
                let scrolled = scroll_y() > threshold;
                if scrolled != *is_scrolled {
                    is_scrolled.set(scrolled);
                }
            });
        });
    }

    {
        let menu_open = menu_open.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" && *menu_open {
                menu_open.set(false);
            }
        });
    }

    // Every way of closing the menu goes through `menu_open`, so the lock
    // follows it here and is released on unmount.
    use_effect_with_deps(
        move |open: &bool| {
            let open = *open;
            lock_body_scroll(open);
            move || {
                if open {
                    lock_body_scroll(false);
                }
            }
        },
        *menu_open,
    );

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let section_link = |id: &'static str, label: &'static str| {
        let menu_open = menu_open.clone();
        let offset = config.scroll_offset_px;
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to_section(id, offset);
        });
        html! {
            <a key={id} href={format!("/#{}", id)} class="nav-link" onclick={onclick}>
                {label}
            </a>
        }
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let page_link = |target: &Route, label: &'static str| {
        let active = is_active(route.as_ref(), target);
        html! {
            <div key={label} onclick={close_menu.clone()}>
                <Link<Route> to={target.clone()} classes={classes!("nav-cta", active.then(|| "active"))}>
                    {label}
                </Link<Route>>
            </div>
        }
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"brightside"}
                </Link<Route>>

                <button
                    class={classes!("burger-menu", (*menu_open).then(|| "open"))}
                    aria-label="Menu"
                    aria-expanded={(*menu_open).to_string()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!("nav-right", (*menu_open).then(|| "mobile-menu-open"))}>
                    { for NAV_SECTIONS.iter().map(|&(id, label)| section_link(id, label)) }
                    { for NAV_PAGES.iter().map(|(target, label)| page_link(target, *label)) }
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    padding: 1.25rem 2rem;
                    background: transparent;
                    transition: background 0.3s ease, padding 0.3s ease, box-shadow 0.3s ease;
                }
                .top-nav.scrolled {
                    padding: 0.75rem 2rem;
                    background: rgba(18, 22, 33, 0.92);
                    backdrop-filter: blur(8px);
                    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.25);
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #fff;
                    text-decoration: none;
                }
                .nav-right {
                    display: flex;
                    gap: 1.5rem;
                    align-items: center;
                }
                .nav-link, .nav-cta {
                    color: #cfd6e6;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .nav-link:hover { color: #fff; }
                .nav-cta.active {
                    background: #f5b942;
                    color: #121621;
                }
                .nav-cta {
                    padding: 0.5rem 1.1rem;
                    border-radius: 999px;
                    border: 1px solid #f5b942;
                    color: #f5b942;
                }
                .burger-menu {
                    display: none;
                    position: relative;
                    z-index: 2;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #fff;
                    transition: transform 0.3s ease, opacity 0.3s ease;
                }
                .burger-menu.open span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
                .burger-menu.open span:nth-child(2) { opacity: 0; }
                .burger-menu.open span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }

                @media (max-width: 768px) {
                    .burger-menu { display: flex; }
                    .nav-right {
                        position: fixed;
                        top: 0;
                        right: -100%;
                        height: 100vh;
                        width: 70%;
                        flex-direction: column;
                        justify-content: center;
                        background: rgba(18, 22, 33, 0.98);
                        transition: right 0.3s ease;
                    }
                    .nav-right.mobile-menu-open { right: 0; }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let site_config = use_memo(|_| config::load(), ());

    html! {
        <ContextProvider<SiteConfig> context={(*site_config).clone()}>
            <BrowserRouter>
                <Nav />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<SiteConfig>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_current_page_is_active() {
        assert!(is_active(Some(&Route::Faq), &Route::Faq));
        assert!(!is_active(Some(&Route::Home), &Route::Faq));
        assert!(!is_active(None, &Route::Updates));
    }

    #[test]
    fn open_menu_locks_the_page() {
        assert_eq!(body_overflow(true), "hidden");
        assert_eq!(body_overflow(false), "");
    }
}
