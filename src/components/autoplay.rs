use gloo_timers::callback::Interval;
use log::debug;

/// Something that can run a callback on a fixed period. The returned
/// handle cancels the timer when dropped.
pub trait Ticker {
    type Handle;

    fn every(&self, period_ms: u32, tick: Box<dyn Fn()>) -> Self::Handle;
}

/// Browser timers via `gloo_timers`.
#[derive(Clone, Copy, Default)]
pub struct IntervalTicker;

impl Ticker for IntervalTicker {
    type Handle = Interval;

    fn every(&self, period_ms: u32, tick: Box<dyn Fn()>) -> Interval {
        Interval::new(period_ms, move || tick())
    }
}

/// Owns at most one running timer.
pub struct Autoplay<T: Ticker = IntervalTicker> {
    ticker: T,
    period_ms: u32,
    timer: Option<T::Handle>,
}

impl<T: Ticker> Autoplay<T> {
    pub fn new(ticker: T, period_ms: u32) -> Self {
        Self {
            ticker,
            period_ms,
            timer: None,
        }
    }

    /// Replaces any running timer, so repeated starts never stack.
    pub fn start<F>(&mut self, tick: F)
    where
        F: Fn() + 'static,
    {
        self.stop();
        debug!("Autoplay started ({} ms)", self.period_ms);
        self.timer = Some(self.ticker.every(self.period_ms, Box::new(tick)));
    }

    pub fn stop(&mut self) {
        if self.timer.take().is_some() {
            debug!("Autoplay stopped");
        }
    }

    pub fn set_period(&mut self, period_ms: u32) {
        self.period_ms = period_ms;
    }

    /// Pauses while a pointer hovers or a finger is down, and resumes
    /// when either leaves. A widget with autoplay off never starts.
    pub fn on_gesture<F>(&mut self, gesture: Gesture, enabled: bool, tick: F)
    where
        F: Fn() + 'static,
    {
        match gesture {
            Gesture::HoverStart | Gesture::TouchStart => self.stop(),
            Gesture::HoverEnd | Gesture::TouchEnd => {
                if enabled {
                    self.start(tick);
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    HoverStart,
    HoverEnd,
    TouchStart,
    TouchEnd,
}

/// Maps a pointer enter/leave to a hover gesture. Touch pointers are left
/// to the touch handlers; a tap also fires pointer and compatibility mouse
/// events that would otherwise pause autoplay with no leave to follow.
pub fn hover_gesture(pointer_type: &str, entering: bool) -> Option<Gesture> {
    if pointer_type == "touch" {
        return None;
    }
    Some(if entering {
        Gesture::HoverStart
    } else {
        Gesture::HoverEnd
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Keeps every live timer's callback so a test can fire them by hand.
    #[derive(Clone, Default)]
    struct FakeTicker {
        live: Rc<Cell<usize>>,
        ticks: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
    }

    struct FakeHandle {
        live: Rc<Cell<usize>>,
        ticks: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
        tick: Rc<dyn Fn()>,
    }

    impl Drop for FakeHandle {
        fn drop(&mut self) {
            self.live.set(self.live.get() - 1);
            self.ticks.borrow_mut().retain(|t| !Rc::ptr_eq(t, &self.tick));
        }
    }

    impl Ticker for FakeTicker {
        type Handle = FakeHandle;

        fn every(&self, _period_ms: u32, tick: Box<dyn Fn()>) -> FakeHandle {
            let tick: Rc<dyn Fn()> = Rc::from(tick);
            self.live.set(self.live.get() + 1);
            self.ticks.borrow_mut().push(tick.clone());
            FakeHandle {
                live: self.live.clone(),
                ticks: self.ticks.clone(),
                tick,
            }
        }
    }

    impl FakeTicker {
        fn fire_all(&self) {
            let ticks: Vec<_> = self.ticks.borrow().clone();
            for tick in ticks {
                tick();
            }
        }
    }

    #[test]
    fn restarting_never_leaves_two_timers() {
        let ticker = FakeTicker::default();
        let mut autoplay = Autoplay::new(ticker.clone(), 5000);
        let fired = Rc::new(Cell::new(0));

        for _ in 0..3 {
            let fired = fired.clone();
            autoplay.start(move || fired.set(fired.get() + 1));
            assert_eq!(ticker.live.get(), 1);
        }

        ticker.fire_all();
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn stop_cancels_the_timer() {
        let ticker = FakeTicker::default();
        let mut autoplay = Autoplay::new(ticker.clone(), 5000);
        autoplay.start(|| {});
        assert_eq!(ticker.live.get(), 1);

        autoplay.stop();
        assert_eq!(ticker.live.get(), 0);

        autoplay.stop();
        assert_eq!(ticker.live.get(), 0);
    }

    fn play(autoplay: &mut Autoplay<FakeTicker>, gesture: Gesture, enabled: bool) {
        autoplay.on_gesture(gesture, enabled, || {});
    }

    #[test]
    fn hover_pauses_and_leave_resumes() {
        let ticker = FakeTicker::default();
        let mut autoplay = Autoplay::new(ticker.clone(), 5000);
        autoplay.start(|| {});

        play(&mut autoplay, Gesture::HoverStart, true);
        assert_eq!(ticker.live.get(), 0);
        play(&mut autoplay, Gesture::HoverEnd, true);
        assert_eq!(ticker.live.get(), 1);
    }

    #[test]
    fn touch_end_resumes_whether_or_not_it_navigated() {
        let ticker = FakeTicker::default();
        let mut autoplay = Autoplay::new(ticker.clone(), 5000);
        autoplay.start(|| {});

        // A tap on an indicator and a short drag look the same here.
        for _ in 0..2 {
            play(&mut autoplay, Gesture::TouchStart, true);
            assert_eq!(ticker.live.get(), 0);
            play(&mut autoplay, Gesture::TouchEnd, true);
            assert_eq!(ticker.live.get(), 1);
        }
    }

    #[test]
    fn tap_is_not_mistaken_for_hover() {
        let ticker = FakeTicker::default();
        let mut autoplay = Autoplay::new(ticker.clone(), 5000);
        autoplay.start(|| {});

        play(&mut autoplay, Gesture::TouchStart, true);
        play(&mut autoplay, Gesture::TouchEnd, true);
        // The pointerenter a tap produces afterwards.
        if let Some(gesture) = hover_gesture("touch", true) {
            play(&mut autoplay, gesture, true);
        }
        assert_eq!(ticker.live.get(), 1);
    }

    #[test]
    fn hover_gesture_ignores_touch_pointers() {
        assert_eq!(hover_gesture("touch", true), None);
        assert_eq!(hover_gesture("touch", false), None);
        assert_eq!(hover_gesture("mouse", true), Some(Gesture::HoverStart));
        assert_eq!(hover_gesture("pen", false), Some(Gesture::HoverEnd));
    }

    #[test]
    fn disabled_autoplay_never_starts() {
        let ticker = FakeTicker::default();
        let mut autoplay = Autoplay::new(ticker.clone(), 5000);
        for gesture in [Gesture::HoverStart, Gesture::HoverEnd, Gesture::TouchStart, Gesture::TouchEnd] {
            play(&mut autoplay, gesture, false);
            assert_eq!(ticker.live.get(), 0);
        }
    }

    #[test]
    fn mixed_gestures_keep_at_most_one_timer() {
        use Gesture::*;
        let ticker = FakeTicker::default();
        let mut autoplay = Autoplay::new(ticker.clone(), 5000);
        autoplay.start(|| {});

        let sequence = [
            HoverEnd, HoverEnd, HoverStart, TouchStart, TouchEnd, HoverEnd, TouchEnd, HoverStart,
            HoverEnd, TouchStart, HoverEnd, TouchEnd, TouchEnd,
        ];
        for gesture in sequence {
            play(&mut autoplay, gesture, true);
            assert!(ticker.live.get() <= 1);
        }
        assert_eq!(ticker.live.get(), 1);
    }

    #[test]
    fn resumed_timer_drives_the_new_tick() {
        let ticker = FakeTicker::default();
        let mut autoplay = Autoplay::new(ticker.clone(), 5000);
        let fired = Rc::new(Cell::new(0));

        autoplay.start(|| {});
        play(&mut autoplay, Gesture::TouchStart, true);
        let counter = fired.clone();
        autoplay.on_gesture(Gesture::TouchEnd, true, move || counter.set(counter.get() + 1));
        ticker.fire_all();
        ticker.fire_all();
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn dropping_autoplay_cancels_the_timer() {
        let ticker = FakeTicker::default();
        {
            let mut autoplay = Autoplay::new(ticker.clone(), 5000);
            autoplay.start(|| {});
            assert_eq!(ticker.live.get(), 1);
        }
        assert_eq!(ticker.live.get(), 0);
    }
}
