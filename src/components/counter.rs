use gloo_timers::callback::{Interval, Timeout};
use web_sys::js_sys::Date;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config::SiteConfig;

fn ease_out_cubic(t: f64) -> f64 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// Value shown `elapsed_ms` into an animation towards `target`.
pub fn counter_value(target: u64, elapsed_ms: f64, duration_ms: f64) -> u64 {
    if duration_ms <= 0.0 || elapsed_ms >= duration_ms {
        return target;
    }
    let progress = ease_out_cubic(elapsed_ms / duration_ms);
    ((target as f64) * progress).floor() as u64
}

/// 1234567 -> "1,234,567"
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub target: u64,
    pub label: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
}

/// A statistic that counts up once it scrolls into view.
#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default().counter;
    let threshold = config.threshold;
    let value = use_state(|| 0u64);
    let started = use_state(|| false);
    let timer = use_mut_ref(|| None::<Interval>);

    {
        let value = value.clone();
        let timer = timer.clone();
        let target = props.target;
        use_effect_with_deps(
            move |started| {
                if *started {
                    let begin = Date::now();
                    let duration = config.duration_ms as f64;
                    let stop = timer.clone();
                    *timer.borrow_mut() = Some(Interval::new(config.frame_ms, move || {
                        let current = counter_value(target, Date::now() - begin, duration);
                        value.set(current);
                        if current >= target {
                            // Can't drop the interval from inside its own tick
                            let stop = stop.clone();
                            Timeout::new(0, move || {
                                stop.borrow_mut().take();
                            })
                            .forget();
                        }
                    }));
                }
                move || {
                    timer.borrow_mut().take();
                }
            },
            *started,
        );
    }

    let on_reveal = {
        let started = started.clone();
        Callback::from(move |_: ()| started.set(true))
    };

    html! {
        <Reveal class="stat" on_reveal={on_reveal} threshold={Some(threshold)}>
            <span class="stat-value">{format_count(*value)}{props.suffix.clone()}</span>
            <span class="stat-label">{props.label.clone()}</span>
        </Reveal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_and_lands_on_target() {
        assert_eq!(counter_value(500, 0.0, 1600.0), 0);
        assert_eq!(counter_value(500, 1600.0, 1600.0), 500);
        assert_eq!(counter_value(500, 9000.0, 1600.0), 500);
    }

    #[test]
    fn never_decreases_and_never_overshoots() {
        let mut last = 0;
        for step in 0..=200 {
            let v = counter_value(12_345, step as f64 * 10.0, 2000.0);
            assert!(v >= last);
            assert!(v <= 12_345);
            last = v;
        }
        assert_eq!(last, 12_345);
    }

    #[test]
    fn eases_out() {
        // More than half the distance is covered in the first half.
        assert!(counter_value(1000, 1000.0, 2000.0) > 500);
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        assert_eq!(counter_value(42, 0.0, 0.0), 42);
    }

    #[test]
    fn formats_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
        assert_eq!(format_count(100000), "100,000");
    }
}
