use std::sync::{Arc, Mutex};

use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::stats::{RevealLatch, StatAnimation, StatCounters, REVEAL_THRESHOLD, STATS};

/// Clears the interval if it is still running. Used both when the count-up
/// completes and when the section is torn down mid-animation.
fn clear_timer(timer: &Mutex<Option<IntervalHandle>>) {
    let handle = timer
        .lock()
        .expect("should be able to lock stats timer")
        .take();
    if let Some(handle) = handle {
        handle.clear();
    }
}

#[component]
pub fn StatsSection() -> impl IntoView {
    let animation = StatAnimation::default();
    let section_ref = NodeRef::<html::Section>::new();
    let counters = RwSignal::new(StatCounters::default());
    let timer = Arc::new(Mutex::new(None::<IntervalHandle>));

    let start = {
        let timer = Arc::clone(&timer);
        move || {
            log::debug!("stats section revealed, starting count-up");
            let tick_timer = Arc::clone(&timer);
            let handle = set_interval_with_handle(
                move || {
                    let done = counters
                        .try_update(|c| c.tick(&animation))
                        .unwrap_or(true);
                    if done {
                        clear_timer(&tick_timer);
                    }
                },
                animation.interval(),
            );
            match handle {
                Ok(handle) => {
                    *timer.lock().expect("should be able to lock stats timer") = Some(handle)
                }
                Err(e) => {
                    log::warn!("couldn't start stats timer: {e:?}");
                    counters.update(|c| while !c.tick(&animation) {});
                }
            }
        }
    };

    let mut latch = RevealLatch::default();
    use_intersection_observer_with_options(
        section_ref,
        move |entries, observer| {
            let revealed = entries
                .iter()
                .any(|entry| latch.observe(entry.is_intersecting(), entry.intersection_ratio()));
            if revealed {
                observer.disconnect();
                start();
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![REVEAL_THRESHOLD]),
    );

    on_cleanup(move || clear_timer(&timer));

    view! {
        <section
            id="stats-section"
            node_ref=section_ref
            class="py-16 px-6 bg-gradient-to-r from-blue-600 via-purple-600 to-pink-600 relative overflow-hidden"
        >
            <div class="absolute inset-0 bg-grid-pattern opacity-10"></div>
            <div class="max-w-6xl mx-auto relative z-10">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8 text-center">
                    {STATS
                        .into_iter()
                        .enumerate()
                        .map(|(i, stat)| {
                            view! {
                                <div class="group">
                                    <div class="bg-white/10 backdrop-blur-sm rounded-xl p-8 hover:bg-white/20 transition-all duration-300 hover:scale-105 border border-white/20">
                                        <div class="text-5xl font-bold text-white mb-2 transition-transform group-hover:scale-110">
                                            {move || counters.with(|c| c.values()[i])}
                                            {stat.suffix}
                                        </div>
                                        <div class="text-white/90 text-lg font-medium">
                                            {stat.label}
                                        </div>
                                        <div class="text-white/70 text-sm mt-2">{stat.caption}</div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
