use gloo::timers::callback::Interval;
use yew::prelude::*;

/// Fire `on_tick` every `interval_ms` while the component is mounted.
///
/// Used to rotate the insights carousel. A zero interval disables rotation.
#[hook]
pub fn use_insight_rotation(interval_ms: u32, on_tick: Callback<()>) {
    use_effect_with(interval_ms, move |interval_ms| {
        let interval = (*interval_ms > 0).then(|| {
            log::debug!("Insight rotation every {}ms", interval_ms);
            Interval::new(*interval_ms, move || on_tick.emit(()))
        });

        move || drop(interval)
    });
}
