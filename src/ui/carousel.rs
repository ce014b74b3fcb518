//! Testimonial carousel component
//!
//! Renders [`Carousel`] state and carries out its timer commands with
//! `gloo_timers`. Each live timer is owned by [`CarouselTimers`]; replacing
//! or clearing a slot drops the handle, which cancels the browser timer.

use leptos::prelude::*;

use crate::core::carousel::{Carousel, CarouselCommand, CarouselStatus, FALLBACK_MESSAGE};
use crate::ui::icon::{Icon, icons};

#[cfg(not(feature = "ssr"))]
use crate::core::carousel::{TimerId, TransitionToken};
#[cfg(not(feature = "ssr"))]
use gloo_timers::callback::{Interval, Timeout};

/// Live browser timers, at most one per slot
#[cfg(not(feature = "ssr"))]
#[derive(Default)]
struct CarouselTimers {
    rotation: Option<(TimerId, Interval)>,
    transition: Option<(TransitionToken, Timeout)>,
}

/// Couples the controller with the timers executing its commands
#[derive(Clone, Copy)]
struct CarouselDriver {
    carousel: RwSignal<Carousel>,
    #[cfg(not(feature = "ssr"))]
    timers: StoredValue<CarouselTimers, LocalStorage>,
}

impl CarouselDriver {
    fn new() -> Self {
        Self {
            carousel: RwSignal::new(Carousel::new()),
            #[cfg(not(feature = "ssr"))]
            timers: StoredValue::new_local(CarouselTimers::default()),
        }
    }

    /// Apply an event to the controller, then run the commands it produced
    fn dispatch(self, event: impl FnOnce(&mut Carousel) -> Vec<CarouselCommand>) {
        let commands = self.carousel.try_update(event).unwrap_or_default();
        self.run(commands);
    }

    #[cfg(not(feature = "ssr"))]
    fn run(self, commands: Vec<CarouselCommand>) {
        for command in commands {
            match command {
                CarouselCommand::StartRotation { timer, period } => {
                    let interval = Interval::new(period.as_millis() as u32, move || {
                        self.dispatch(move |c| c.rotation_tick(timer));
                    });
                    self.timers
                        .update_value(|t| t.rotation = Some((timer, interval)));
                }
                CarouselCommand::CancelRotation { timer } => {
                    self.timers.update_value(|t| {
                        if t.rotation.as_ref().is_some_and(|(id, _)| *id == timer) {
                            t.rotation = None;
                        }
                    });
                }
                CarouselCommand::ScheduleTransition { token, delay } => {
                    let timeout = Timeout::new(delay.as_millis() as u32, move || {
                        self.dispatch(move |c| c.transition_elapsed(token));
                    });
                    self.timers
                        .update_value(|t| t.transition = Some((token, timeout)));
                }
                CarouselCommand::CancelTransition { token } => {
                    self.timers.update_value(|t| {
                        if t.transition.as_ref().is_some_and(|(live, _)| *live == token) {
                            t.transition = None;
                        }
                    });
                }
            }
        }
    }

    // Timers only exist in the browser
    #[cfg(feature = "ssr")]
    fn run(self, commands: Vec<CarouselCommand>) {
        let _ = commands;
    }

    fn stop(self) {
        #[cfg(not(feature = "ssr"))]
        self.timers.try_update_value(|t| *t = CarouselTimers::default());
    }
}

/// Self-rotating testimonial carousel with prev/next buttons and dots
#[component]
pub fn TestimonialCarousel() -> impl IntoView {
    let driver = CarouselDriver::new();
    let carousel = driver.carousel;

    #[cfg(not(feature = "ssr"))]
    {
        use crate::ui::site_client::fetch_testimonials;
        use leptos::task::spawn_local;

        // No tracked reads: runs once after hydration
        Effect::new(move |_| {
            spawn_local(async move {
                let result = fetch_testimonials().await;
                if let Err(e) = &result {
                    leptos::logging::warn!("Testimonials unavailable: {}", e);
                }
                driver.dispatch(move |c| c.load(result));
            });
        });
    }

    on_cleanup(move || driver.stop());

    let status = move || carousel.with(Carousel::status);
    let is_active = move || status() == CarouselStatus::Active;

    view! {
        <div
            id="testimonialCarousel"
            class="testimonials__carousel"
            on:mouseenter=move |_| driver.dispatch(Carousel::pause)
            on:mouseleave=move |_| driver.dispatch(Carousel::resume)
        >
            {move || match status() {
                CarouselStatus::Failed => view! {
                    <p class="testimonials__fallback">{FALLBACK_MESSAGE}</p>
                }
                .into_any(),
                CarouselStatus::Uninitialized => view! {
                    <p class="testimonials__loading">"Loading testimonials..."</p>
                }
                .into_any(),
                CarouselStatus::Active => ().into_any(),
            }}

            <Show when=is_active>
                <blockquote class=move || {
                    if carousel.with(Carousel::is_content_hidden) {
                        "testimonials__content testimonials__content--hidden"
                    } else {
                        "testimonials__content"
                    }
                }>
                    <p id="testimonialText" class="testimonials__text">
                        {move || carousel.with(|c| c.displayed().map(|t| t.text.clone()).unwrap_or_default())}
                    </p>
                    <cite id="testimonialAuthor" class="testimonials__author">
                        {move || carousel.with(|c| c.displayed().map(|t| t.name.clone()).unwrap_or_default())}
                    </cite>
                </blockquote>

                <div class="testimonials__controls">
                    <button
                        id="prevBtn"
                        class="testimonials__arrow"
                        aria-label="Previous testimonial"
                        on:click=move |_| driver.dispatch(Carousel::previous)
                    >
                        <Icon name=icons::CHEVRON_LEFT/>
                    </button>

                    <div id="testimonialDots" class="testimonials__dots">
                        {move || {
                            carousel
                                .with(Carousel::dots)
                                .into_iter()
                                .enumerate()
                                .map(|(index, active)| view! {
                                    <button
                                        class="testimonials__dot"
                                        class:active=active
                                        aria-label=format!("Show testimonial {}", index + 1)
                                        on:click=move |_| driver.dispatch(move |c| c.select(index))
                                    ></button>
                                })
                                .collect_view()
                        }}
                    </div>

                    <button
                        id="nextBtn"
                        class="testimonials__arrow"
                        aria-label="Next testimonial"
                        on:click=move |_| driver.dispatch(Carousel::next)
                    >
                        <Icon name=icons::CHEVRON_RIGHT/>
                    </button>
                </div>
            </Show>
        </div>
    }
}
