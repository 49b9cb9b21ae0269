// Testimonials carousel.
//
// The carousel auto-advances while mounted and wraps in both directions.
// Manual navigation writes the index directly; the interval keeps its
// cadence and advances from wherever the index is. The interval handle
// belongs to this component instance and is cleared on teardown, so
// re-renders never leak a timer.

use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;

use coverleaf::content::Testimonial;
use coverleaf::state::Carousel;

use crate::client::ActiveClient;

/// Time between automatic slide advances.
const AUTO_ADVANCE: Duration = Duration::from_secs(6);

#[component]
pub fn Testimonials() -> impl IntoView {
    let client = expect_context::<ActiveClient>();
    let (items, set_items) = signal(Vec::<Testimonial>::new());
    spawn_local(async move {
        set_items.set(client.source.testimonials(&client.id).await);
    });

    view! {
        {move || {
            let items = items.get();
            // Empty list: no carousel at all - no timer, no index math.
            (!items.is_empty()).then(|| view! {
                <section class="testimonials">
                    <div class="container">
                        <h2 class="section-title">"What our clients say"</h2>
                        <TestimonialCarousel items=items.clone() />
                    </div>
                </section>
            })
        }}
    }
}

#[component]
fn TestimonialCarousel(items: Vec<Testimonial>) -> impl IntoView {
    let len = items.len();
    let (carousel, set_carousel) = signal(Carousel::new(len));

    let handle = set_interval_with_handle(
        move || set_carousel.update(|c| c.advance()),
        AUTO_ADVANCE,
    )
    .ok();
    on_cleanup(move || {
        if let Some(handle) = handle {
            handle.clear();
        }
    });

    view! {
        <div class="carousel">
            <div class="carousel-track">
                {items
                    .into_iter()
                    .enumerate()
                    .map(|(i, t)| {
                        let stars = t.stars();
                        view! {
                            <figure class=move || {
                                if carousel.get().index() == i {
                                    "carousel-slide active"
                                } else {
                                    "carousel-slide"
                                }
                            }>
                                <blockquote class="testimonial-content">{t.content}</blockquote>
                                {stars.map(|s| view! { <Stars stars=s /> })}
                                <figcaption class="testimonial-author">
                                    <span class="testimonial-name">{t.author}</span>
                                    {t.title.map(|title| view! {
                                        <span class="testimonial-title">{title}</span>
                                    })}
                                </figcaption>
                            </figure>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <div class="carousel-controls">
                <button
                    class="carousel-prev"
                    on:click=move |_| set_carousel.update(|c| c.retreat())
                >
                    "‹"
                </button>
                <div class="carousel-dots">
                    {(0..len)
                        .map(|i| {
                            view! {
                                <button
                                    class=move || {
                                        if carousel.get().index() == i {
                                            "carousel-dot active"
                                        } else {
                                            "carousel-dot"
                                        }
                                    }
                                    on:click=move |_| set_carousel.update(|c| c.select(i))
                                ></button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <button
                    class="carousel-next"
                    on:click=move |_| set_carousel.update(|c| c.advance())
                >
                    "›"
                </button>
            </div>
        </div>
    }
}

#[component]
fn Stars(stars: u8) -> impl IntoView {
    let stars = stars.min(5);
    view! {
        <span class="stars">
            {(0..5u8)
                .map(|i| {
                    let class = if i < stars { "star filled" } else { "star empty" };
                    view! { <span class=class>"★"</span> }
                })
                .collect::<Vec<_>>()}
        </span>
    }
}
