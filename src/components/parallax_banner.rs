use web_sys::{Element, Event};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::frame::{BrowserFrames, FrameCoalescer};
use crate::config::SiteConfig;

/// Background offset for a banner at `top` (viewport coordinates) with the
/// given height: `-travel` when its centre sits a full viewport below the
/// middle of the screen, `0` when centred, `+travel` a viewport above.
/// `None` while the banner is off screen.
pub fn banner_offset(top: f64, height: f64, viewport_height: f64, travel: f64) -> Option<f64> {
    if viewport_height <= 0.0 || top + height < 0.0 || top > viewport_height {
        return None;
    }
    let progress = (viewport_height / 2.0 - top - height / 2.0) / viewport_height;
    Some(progress * travel)
}

fn measure_offset(banner: &NodeRef, travel: f64) -> Option<f64> {
    let viewport_height = web_sys::window()?.inner_height().ok()?.as_f64()?;
    let rect = banner.cast::<Element>()?.get_bounding_client_rect();
    banner_offset(rect.top(), rect.height(), viewport_height, travel)
}

#[derive(Properties, PartialEq)]
pub struct ParallaxBannerProps {
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub id: Option<AttrValue>,
}

/// A full-width band whose background drifts against the scroll.
#[function_component(ParallaxBanner)]
pub fn parallax_banner(props: &ParallaxBannerProps) -> Html {
    let travel = use_context::<SiteConfig>().unwrap_or_default().banner.travel_px;
    let banner = use_node_ref();
    let offset = use_state(|| 0.0_f64);
    let frames = use_memo(|_| FrameCoalescer::new(BrowserFrames), ());

    let update = {
        let banner = banner.clone();
        let offset = offset.clone();
        move || {
            let banner = banner.clone();
            let offset = offset.clone();
            frames.request(move || {
                // Off screen: leave the last offset in place.
                if let Some(next) = measure_offset(&banner, travel) {
                    if (next - *offset).abs() > 0.5 {
                        offset.set(next);
                    }
                }
            });
        }
    };

    {
        let update = update.clone();
        use_effect_with_deps(
            move |_| {
                update();
                || ()
            },
            (),
        );
    }
    use_event_with_window("scroll", move |_: Event| update());

    let background_style = format!("transform: translate3d(0, {:.1}px, 0);", *offset);

    html! {
        <section class={classes!("parallax-banner", props.class.clone())} id={props.id.clone()} ref={banner}>
            <div class="parallax-banner-bg" style={background_style}></div>
            <div class="parallax-banner-content">
                { for props.children.iter() }
            </div>
            <style>
                {r#"
                .parallax-banner {
                    position: relative;
                    overflow: hidden;
                    text-align: center;
                }
                .parallax-banner-bg {
                    position: absolute;
                    inset: -80px 0;
                    background:
                        radial-gradient(circle at 20% 30%, rgba(245, 185, 66, 0.18), transparent 45%),
                        linear-gradient(135deg, #1b2336 0%, #0d1018 100%);
                    will-change: transform;
                    z-index: 0;
                }
                .parallax-banner-content {
                    position: relative;
                    z-index: 1;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centred_banner_does_not_move() {
        // 200 px band centred in an 800 px viewport.
        assert_eq!(banner_offset(300.0, 200.0, 800.0, 60.0), Some(0.0));
    }

    #[test]
    fn offset_follows_scroll_direction() {
        let below = banner_offset(600.0, 200.0, 800.0, 60.0).unwrap();
        let above = banner_offset(0.0, 200.0, 800.0, 60.0).unwrap();
        assert!(below < 0.0);
        assert!(above > 0.0);
        assert!((below - -22.5).abs() < 1e-9);
    }

    #[test]
    fn off_screen_banners_are_skipped() {
        assert_eq!(banner_offset(801.0, 200.0, 800.0, 60.0), None);
        assert_eq!(banner_offset(-201.0, 200.0, 800.0, 60.0), None);
        assert_eq!(banner_offset(0.0, 200.0, 0.0, 60.0), None);
    }
}
