use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use gloo_render::{request_animation_frame, AnimationFrame};
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement, HtmlElement, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{CursorConfig, SiteConfig};

/// Frames a point survives once the pointer stops drawing.
const IDLE_MAX_AGE: u32 = 30;
const MAX_AGE: u32 = 40;

#[derive(Clone, Copy, Debug, PartialEq)]
struct TrailPoint {
    x: f64,
    y: f64,
    age: u32,
}

/// One stroke of the light trail, in hero-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub alpha: f64,
    pub width: f64,
}

/// Pointer dot, lagging ring and fading trail. Advanced once per frame.
pub struct CursorTrail {
    config: CursorConfig,
    points: VecDeque<TrailPoint>,
    pointer: (f64, f64),
    ring: (f64, f64),
    inside: bool,
    ring_placed: bool,
}

impl CursorTrail {
    pub fn new(config: CursorConfig) -> Self {
        Self {
            config,
            points: VecDeque::new(),
            pointer: (0.0, 0.0),
            ring: (0.0, 0.0),
            inside: false,
            ring_placed: false,
        }
    }

    pub fn enter(&mut self) {
        self.inside = true;
    }

    pub fn leave(&mut self) {
        self.inside = false;
        self.ring_placed = false;
    }

    pub fn is_inside(&self) -> bool {
        self.inside
    }

    /// `client` positions the dot and ring; `local` (relative to the hero)
    /// feeds the trail.
    pub fn pointer_moved(&mut self, client: (f64, f64), local: (f64, f64)) {
        self.pointer = client;
        if !self.ring_placed {
            self.ring = client;
            self.ring_placed = true;
        }

        let far_enough = self.points.back().map_or(true, |last| {
            (local.0 - last.x).hypot(local.1 - last.y) > self.config.trail_spacing_px
        });
        if far_enough {
            self.points.push_back(TrailPoint {
                x: local.0,
                y: local.1,
                age: 0,
            });
            while self.points.len() > self.config.trail_points {
                self.points.pop_front();
            }
        }
    }

    pub fn dot(&self) -> (f64, f64) {
        self.pointer
    }

    pub fn ring(&self) -> (f64, f64) {
        self.ring
    }

    /// Moves the ring one step towards the pointer, returns the strokes to
    /// draw this frame and ages the trail.
    pub fn advance(&mut self) -> Vec<Segment> {
        if self.inside {
            let lerp = self.config.ring_lerp;
            self.ring.0 += (self.pointer.0 - self.ring.0) * lerp;
            self.ring.1 += (self.pointer.1 - self.ring.1) * lerp;
        }

        if !self.inside || self.points.len() < 2 {
            for point in self.points.iter_mut() {
                point.age += 1;
            }
            self.points.retain(|point| point.age <= IDLE_MAX_AGE);
            return Vec::new();
        }

        // Faint and thin at the tail, bright and wide at the head.
        let count = self.points.len();
        let segments = (1..count)
            .map(|i| {
                let t = i as f64 / count as f64;
                let (a, b) = (self.points[i - 1], self.points[i]);
                Segment {
                    from: (a.x, a.y),
                    to: (b.x, b.y),
                    alpha: t * 0.5,
                    width: t * 4.0 + 0.5,
                }
            })
            .collect();

        for point in self.points.iter_mut().take(count - 1) {
            point.age += 1;
        }
        self.points.retain(|point| point.age <= MAX_AGE);
        segments
    }
}

fn place(node: &NodeRef, (x, y): (f64, f64)) {
    if let Some(el) = node.cast::<HtmlElement>() {
        let transform = format!("translate(calc({:.1}px - 50%), calc({:.1}px - 50%))", x, y);
        let _ = el.style().set_property("transform", &transform);
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas.get_context("2d").ok()??.dyn_into().ok()
}

fn draw_trail(canvas: &NodeRef, host: &NodeRef, segments: &[Segment]) {
    let (Some(canvas), Some(host)) = (canvas.cast::<HtmlCanvasElement>(), host.cast::<HtmlElement>()) else {
        return;
    };
    let (width, height) = (host.offset_width().max(0) as u32, host.offset_height().max(0) as u32);
    if canvas.width() != width || canvas.height() != height {
        canvas.set_width(width);
        canvas.set_height(height);
    }
    let Some(ctx) = context_2d(&canvas) else {
        return;
    };

    ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    ctx.set_line_cap("round");
    for segment in segments {
        ctx.begin_path();
        ctx.move_to(segment.from.0, segment.from.1);
        ctx.line_to(segment.to.0, segment.to.1);
        ctx.set_stroke_style_str(&format!("rgba(245, 185, 66, {:.3})", segment.alpha));
        ctx.set_line_width(segment.width);
        ctx.set_shadow_color("rgba(245, 185, 66, 0.6)");
        ctx.set_shadow_blur(8.0);
        ctx.stroke();
        ctx.set_shadow_blur(0.0);
    }
}

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

/// Runs `draw` every frame until `slot` is emptied or dropped.
fn run_every_frame(slot: &FrameSlot, draw: Rc<dyn Fn()>) {
    let weak: Weak<RefCell<Option<AnimationFrame>>> = Rc::downgrade(slot);
    let handle = request_animation_frame(move |_| {
        draw();
        if let Some(slot) = weak.upgrade() {
            run_every_frame(&slot, draw);
        }
    });
    *slot.borrow_mut() = Some(handle);
}

#[derive(Properties, PartialEq)]
pub struct HeroCursorProps {
    /// The element the cursor is scoped to.
    pub host: NodeRef,
}

/// Replaces the pointer inside the hero with a dot, a ring that lags
/// behind it and a light trail.
#[function_component(HeroCursor)]
pub fn hero_cursor(props: &HeroCursorProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default().cursor;
    let trail = use_mut_ref(|| CursorTrail::new(config));
    let visible = use_state(|| false);
    let hovering = use_state(|| false);
    let dot = use_node_ref();
    let ring = use_node_ref();
    let canvas = use_node_ref();

    {
        let trail = trail.clone();
        let visible = visible.clone();
        use_event(props.host.clone(), "mouseenter", move |_: MouseEvent| {
            trail.borrow_mut().enter();
            visible.set(true);
        });
    }
    {
        let trail = trail.clone();
        let visible = visible.clone();
        let hovering = hovering.clone();
        use_event(props.host.clone(), "mouseleave", move |_: MouseEvent| {
            trail.borrow_mut().leave();
            visible.set(false);
            hovering.set(false);
        });
    }
    {
        let trail = trail.clone();
        let host = props.host.clone();
        use_event(props.host.clone(), "mousemove", move |e: MouseEvent| {
            let Some(el) = host.cast::<Element>() else {
                return;
            };
            let rect = el.get_bounding_client_rect();
            let (x, y) = (e.client_x() as f64, e.client_y() as f64);
            trail
                .borrow_mut()
                .pointer_moved((x, y), (x - rect.left(), y - rect.top()));
        });
    }
    {
        let hovering = hovering.clone();
        use_event(props.host.clone(), "mouseover", move |e: MouseEvent| {
            let over_control = e
                .target_dyn_into::<Element>()
                .and_then(|el| el.closest("a, button").ok().flatten())
                .is_some();
            if over_control != *hovering {
                hovering.set(over_control);
            }
        });
    }

    {
        let trail = trail.clone();
        let host = props.host.clone();
        let (dot, ring, canvas) = (dot.clone(), ring.clone(), canvas.clone());
        use_effect_with_deps(
            move |_| {
                debug!("Hero cursor animation started");
                let draw: Rc<dyn Fn()> = Rc::new(move || {
                    let mut trail = trail.borrow_mut();
                    let segments = trail.advance();
                    if trail.is_inside() {
                        place(&dot, trail.dot());
                        place(&ring, trail.ring());
                    }
                    draw_trail(&canvas, &host, &segments);
                });
                let slot: FrameSlot = Rc::new(RefCell::new(None));
                run_every_frame(&slot, draw);
                move || {
                    slot.borrow_mut().take();
                }
            },
            (),
        );
    }

    let visible = (*visible).then(|| "visible");
    let hover = (*hovering).then(|| "hover");

    html! {
        <>
            <canvas class="hero-trail" ref={canvas}></canvas>
            <div class={classes!("hero-cursor-dot", visible, hover)} ref={dot}></div>
            <div class={classes!("hero-cursor-ring", visible, hover)} ref={ring}></div>
            <style>
                {r#"
                .hero-trail {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                    z-index: 1;
                }
                .hero-cursor-dot, .hero-cursor-ring {
                    position: fixed;
                    top: 0;
                    left: 0;
                    pointer-events: none;
                    border-radius: 50%;
                    opacity: 0;
                    z-index: 50;
                    transition: opacity 0.2s ease, width 0.2s ease, height 0.2s ease;
                }
                .hero-cursor-dot {
                    width: 8px;
                    height: 8px;
                    background: #f5b942;
                }
                .hero-cursor-ring {
                    width: 36px;
                    height: 36px;
                    border: 1.5px solid rgba(245, 185, 66, 0.6);
                }
                .hero-cursor-dot.visible, .hero-cursor-ring.visible { opacity: 1; }
                .hero-cursor-dot.hover { width: 4px; height: 4px; }
                .hero-cursor-ring.hover {
                    width: 56px;
                    height: 56px;
                    background: rgba(245, 185, 66, 0.08);
                }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trail() -> CursorTrail {
        CursorTrail::new(CursorConfig::default())
    }

    /// Moves along a horizontal line, `step` px at a time.
    fn sweep(trail: &mut CursorTrail, moves: usize, step: f64) {
        for i in 0..moves {
            let x = i as f64 * step;
            trail.pointer_moved((x, 100.0), (x, 100.0));
        }
    }

    #[test]
    fn small_moves_do_not_add_points() {
        let mut trail = trail();
        trail.enter();
        // 1 px steps up to 6 px: never further than the spacing.
        sweep(&mut trail, 7, 1.0);
        assert_eq!(trail.points.len(), 1);
        sweep(&mut trail, 3, 10.0);
        assert!(trail.points.len() > 1);
    }

    #[test]
    fn trail_is_capped() {
        let mut trail = trail();
        trail.enter();
        sweep(&mut trail, 100, 10.0);
        assert_eq!(trail.points.len(), 28);
        // Oldest points were dropped, the newest kept.
        assert_eq!(trail.points.back().map(|p| p.x), Some(990.0));
    }

    #[test]
    fn segments_brighten_towards_the_head() {
        let mut trail = trail();
        trail.enter();
        sweep(&mut trail, 5, 10.0);
        let segments = trail.advance();
        assert_eq!(segments.len(), 4);
        assert!(segments.windows(2).all(|w| w[0].alpha < w[1].alpha && w[0].width < w[1].width));
        assert!(segments.iter().all(|s| s.alpha <= 0.5));
    }

    #[test]
    fn ring_lags_behind_the_dot() {
        let mut trail = trail();
        trail.enter();
        trail.pointer_moved((0.0, 0.0), (0.0, 0.0));
        trail.pointer_moved((100.0, 0.0), (100.0, 0.0));
        trail.advance();
        assert_eq!(trail.dot(), (100.0, 0.0));
        assert!((trail.ring().0 - 10.0).abs() < 1e-9);
        for _ in 0..200 {
            trail.advance();
        }
        assert!((trail.ring().0 - 100.0).abs() < 0.01);
    }

    #[test]
    fn ring_starts_on_the_pointer_after_entering() {
        let mut trail = trail();
        trail.enter();
        trail.pointer_moved((300.0, 200.0), (300.0, 200.0));
        assert_eq!(trail.ring(), (300.0, 200.0));
    }

    #[test]
    fn trail_fades_out_after_leaving() {
        let mut trail = trail();
        trail.enter();
        sweep(&mut trail, 10, 10.0);
        trail.leave();
        assert!(trail.advance().is_empty());
        for _ in 0..IDLE_MAX_AGE {
            trail.advance();
        }
        assert!(trail.points.is_empty());
    }

    #[test]
    fn resting_pointer_wears_the_trail_down() {
        let mut trail = trail();
        trail.enter();
        sweep(&mut trail, 10, 10.0);
        for _ in 0..=MAX_AGE {
            trail.advance();
        }
        // Only the head is never aged while it is drawn.
        assert_eq!(trail.points.len(), 1);
    }
}
