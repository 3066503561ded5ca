use std::rc::Rc;

use yew::prelude::*;

use crate::config::CarouselConfig;

/// Widths measured from the page. Breakpoints look at the window, card
/// sizing at the wrapper the cards actually live in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub window_width: f64,
    pub wrapper_width: f64,
}

impl Viewport {
    pub fn uniform(width: f64) -> Self {
        Self {
            window_width: width,
            wrapper_width: width,
        }
    }
}

pub fn max_index(card_count: usize, visible_count: usize) -> usize {
    card_count.saturating_sub(visible_count)
}

/// Equal-width cards that exactly fill the wrapper, gaps included.
/// Clamped at zero for wrappers narrower than the gaps.
pub fn card_width(viewport_width: f64, visible_count: usize, gap: f64) -> f64 {
    let visible = visible_count.max(1) as f64;
    ((viewport_width - gap * (visible - 1.0)) / visible).max(0.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CarouselAction {
    Next,
    Prev,
    /// Any index is accepted; it is clamped into range.
    GoTo(i64),
    /// Autoplay advance, wrapping back to the start.
    Tick,
    Resize(Viewport),
    SetCardCount(usize),
    SwipeStart(f64),
    SwipeEnd(f64),
    SwipeCancel,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CarouselState {
    config: CarouselConfig,
    card_count: usize,
    visible_count: usize,
    card_width: f64,
    current: usize,
    swipe_start: Option<f64>,
}

impl CarouselState {
    pub fn new(config: CarouselConfig, card_count: usize, viewport: Viewport) -> Self {
        let mut state = Self {
            config,
            card_count,
            visible_count: 1,
            card_width: 0.0,
            current: 0,
            swipe_start: None,
        };
        state.resize(viewport);
        state
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn card_width(&self) -> f64 {
        self.card_width
    }

    pub fn gap(&self) -> f64 {
        self.config.gap_px
    }

    pub fn max_index(&self) -> usize {
        max_index(self.card_count, self.visible_count)
    }

    pub fn is_swiping(&self) -> bool {
        self.swipe_start.is_some()
    }

    pub fn go_to(&mut self, index: i64) {
        let max = self.max_index() as i64;
        self.current = index.clamp(0, max) as usize;
    }

    pub fn next(&mut self) {
        self.go_to(self.current as i64 + 1);
    }

    pub fn prev(&mut self) {
        self.go_to(self.current as i64 - 1);
    }

    pub fn tick(&mut self) {
        self.current = if self.current >= self.max_index() {
            0
        } else {
            self.current + 1
        };
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.visible_count = self.config.visible_count(viewport.window_width);
        self.card_width = card_width(viewport.wrapper_width, self.visible_count, self.config.gap_px);
        self.go_to(self.current as i64);
    }

    pub fn set_card_count(&mut self, card_count: usize) {
        self.card_count = card_count;
        self.go_to(self.current as i64);
    }

    pub fn swipe_start(&mut self, x: f64) {
        self.swipe_start = Some(x);
    }

    /// Finishes a gesture. Only a displacement strictly past the threshold
    /// navigates; a leftward swipe moves forward.
    pub fn swipe_end(&mut self, x: f64) {
        let Some(start) = self.swipe_start.take() else {
            return;
        };
        let delta = x - start;
        let threshold = self.config.swipe_threshold_px;
        if delta < -threshold {
            self.next();
        } else if delta > threshold {
            self.prev();
        }
    }

    pub fn swipe_cancel(&mut self) {
        self.swipe_start = None;
    }

    /// Horizontal translation of the card track, in pixels.
    pub fn offset(&self) -> f64 {
        self.current as f64 * (self.card_width + self.config.gap_px)
    }

    /// One flag per valid position; only the current one is set.
    pub fn indicators(&self) -> Vec<bool> {
        (0..=self.max_index()).map(|i| i == self.current).collect()
    }

    pub fn apply(&mut self, action: CarouselAction) {
        match action {
            CarouselAction::Next => self.next(),
            CarouselAction::Prev => self.prev(),
            CarouselAction::GoTo(index) => self.go_to(index),
            CarouselAction::Tick => self.tick(),
            CarouselAction::Resize(viewport) => self.resize(viewport),
            CarouselAction::SetCardCount(count) => self.set_card_count(count),
            CarouselAction::SwipeStart(x) => self.swipe_start(x),
            CarouselAction::SwipeEnd(x) => self.swipe_end(x),
            CarouselAction::SwipeCancel => self.swipe_cancel(),
        }
    }
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desktop(cards: usize) -> CarouselState {
        CarouselState::new(CarouselConfig::default(), cards, Viewport::uniform(1200.0))
    }

    #[test]
    fn max_index_never_underflows() {
        assert_eq!(max_index(7, 3), 4);
        assert_eq!(max_index(3, 3), 0);
        assert_eq!(max_index(2, 3), 0);
        assert_eq!(max_index(0, 1), 0);
        assert_eq!(max_index(10, 1), 9);
    }

    #[test]
    fn card_width_fills_wrapper_with_gaps() {
        let width = card_width(1000.0, 3, 20.0);
        assert!((width - 320.0).abs() < f64::EPSILON);
        assert!((width * 3.0 + 20.0 * 2.0 - 1000.0).abs() < 1e-9);
        assert_eq!(card_width(500.0, 1, 20.0), 500.0);
    }

    #[test]
    fn card_width_clamps_at_zero() {
        assert_eq!(card_width(10.0, 3, 20.0), 0.0);
    }

    #[test]
    fn go_to_clamps_any_index() {
        let mut state = desktop(7);
        for index in [-100, -1, 0, 2, 4, 5, 1000, i64::MAX, i64::MIN] {
            state.go_to(index);
            assert!(state.current() <= state.max_index(), "index {index}");
        }
        state.go_to(-5);
        assert_eq!(state.current(), 0);
        state.go_to(99);
        assert_eq!(state.current(), 4);
    }

    #[test]
    fn next_stops_at_the_last_position() {
        let mut state = desktop(7);
        assert_eq!(state.visible_count(), 3);
        assert_eq!(state.max_index(), 4);
        assert_eq!(state.current(), 0);
        for _ in 0..4 {
            state.next();
        }
        assert_eq!(state.current(), 4);
        state.next();
        assert_eq!(state.current(), 4);
    }

    #[test]
    fn prev_stops_at_zero() {
        let mut state = desktop(7);
        state.prev();
        assert_eq!(state.current(), 0);
        state.go_to(2);
        state.prev();
        assert_eq!(state.current(), 1);
    }

    #[test]
    fn fewer_cards_than_visible_is_a_single_position() {
        let mut state = desktop(2);
        assert_eq!(state.max_index(), 0);
        state.next();
        state.prev();
        state.go_to(3);
        state.tick();
        assert_eq!(state.current(), 0);
        assert_eq!(state.indicators(), vec![true]);
    }

    #[test]
    fn zero_cards_still_has_one_indicator() {
        let mut state = desktop(0);
        state.next();
        assert_eq!(state.max_index(), 0);
        assert_eq!(state.indicators().len(), 1);
        assert_eq!(state.offset(), 0.0);
    }

    #[test]
    fn tick_wraps_to_the_start() {
        let mut state = desktop(7);
        state.go_to(4);
        state.tick();
        assert_eq!(state.current(), 0);
        assert_eq!(state.indicators(), vec![true, false, false, false, false]);
        state.tick();
        assert_eq!(state.current(), 1);
    }

    #[test]
    fn offset_accounts_for_gap() {
        let mut state = CarouselState::new(CarouselConfig::default(), 7, Viewport::uniform(1040.0));
        assert!((state.card_width() - 1000.0 / 3.0).abs() < 1e-9);
        state.go_to(2);
        assert!((state.offset() - 2.0 * (state.card_width() + 20.0)).abs() < 1e-9);
    }

    #[test]
    fn rendering_twice_is_stable() {
        let mut state = desktop(7);
        state.go_to(3);
        let first = (state.offset(), state.indicators());
        let second = (state.offset(), state.indicators());
        assert_eq!(first, second);
    }

    #[test]
    fn resize_reclamps_and_rebuilds_indicators() {
        let mut state = CarouselState::new(CarouselConfig::default(), 7, Viewport::uniform(400.0));
        assert_eq!(state.visible_count(), 1);
        assert_eq!(state.max_index(), 6);
        state.go_to(6);

        state.resize(Viewport::uniform(800.0));
        assert_eq!(state.visible_count(), 2);
        assert_eq!(state.current(), 5);
        assert_eq!(state.indicators().len(), 6);

        state.resize(Viewport::uniform(1400.0));
        assert_eq!(state.current(), 4);
        let indicators = state.indicators();
        assert_eq!(indicators.len(), state.max_index() + 1);
        assert_eq!(indicators.iter().filter(|active| **active).count(), 1);
    }

    #[test]
    fn resize_sizes_cards_from_wrapper() {
        let state = CarouselState::new(
            CarouselConfig::default(),
            7,
            Viewport {
                window_width: 1280.0,
                wrapper_width: 1100.0,
            },
        );
        assert_eq!(state.visible_count(), 3);
        assert!((state.card_width() - 353.3333333333333).abs() < 1e-9);
    }

    #[test]
    fn swipe_needs_to_exceed_threshold() {
        let mut state = desktop(7);
        state.swipe_start(300.0);
        state.swipe_end(260.0);
        assert_eq!(state.current(), 0);

        state.swipe_start(300.0);
        state.swipe_end(259.0);
        assert_eq!(state.current(), 1);
        assert!(!state.is_swiping());
    }

    #[test]
    fn rightward_swipe_goes_back() {
        let mut state = desktop(7);
        state.go_to(2);
        state.swipe_start(100.0);
        state.swipe_end(140.0);
        assert_eq!(state.current(), 2);
        state.swipe_start(100.0);
        state.swipe_end(141.0);
        assert_eq!(state.current(), 1);
    }

    #[test]
    fn swipe_end_without_start_is_ignored() {
        let mut state = desktop(7);
        state.swipe_end(0.0);
        state.swipe_start(500.0);
        state.swipe_cancel();
        state.swipe_end(0.0);
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn shrinking_card_count_reclamps() {
        let mut state = desktop(7);
        state.go_to(4);
        state.apply(CarouselAction::SetCardCount(5));
        assert_eq!(state.current(), 2);
    }

    #[test]
    fn reduce_keeps_rc_when_nothing_changes() {
        let state = Rc::new(desktop(2));
        let reduced = state.clone().reduce(CarouselAction::Next);
        assert!(Rc::ptr_eq(&state, &reduced));

        let state = Rc::new(desktop(7));
        let reduced = state.clone().reduce(CarouselAction::Next);
        assert_eq!(reduced.current(), 1);
        assert_eq!(state.current(), 0);
    }
}
