use std::rc::Rc;

use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{Portfolio, Recommendation};
use crate::engine::{now_ms, CarouselConfig, CarouselPhase, Direction};
use crate::hooks::{use_carousel, use_is_mobile, CarouselAction, UseCarouselHandle};

#[derive(Properties, PartialEq)]
pub struct RecommendationsSectionProps {
    pub portfolio: Rc<Portfolio>,
}

fn read_more_button(carousel: &UseCarouselHandle, key: String, expanded: bool) -> Html {
    let onclick = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            carousel.dispatch(CarouselAction::ToggleExpanded(key.clone(), now_ms()));
        })
    };
    html! {
        <button class={classes!("read-more", expanded.then(|| "expanded"))} {onclick}>
            { if expanded { "Read less" } else { "Read more" } }
            <span class="chevron" aria-hidden="true">{"›"}</span>
        </button>
    }
}

fn card(carousel: &UseCarouselHandle, recommendation: &Recommendation, key: String) -> Html {
    let expanded = carousel.controller().is_expanded(&key);
    html! {
        <div class="recommendation-card">
            <span class="quote-mark" aria-hidden="true">{"“"}</span>
            <div class={classes!("text-content", expanded.then(|| "expanded"))}>
                <p>{format!("\"{}\"", recommendation.content)}</p>
            </div>
            { read_more_button(carousel, key, expanded) }
            <div class="recommendation-author">
                <span class="author-name">{&recommendation.name}</span>
                <span class="author-role">{format!("{}, {}", recommendation.role, recommendation.company)}</span>
            </div>
        </div>
    }
}

/// Testimonials: a hover-pausable marquee on desktop, a swipeable
/// single-card carousel on small screens.
#[function_component(RecommendationsSection)]
pub fn recommendations_section(props: &RecommendationsSectionProps) -> Html {
    let recommendations = &props.portfolio.recommendations;
    let is_mobile = use_is_mobile();
    let carousel = use_carousel(props.portfolio.recommendation_keys(), CarouselConfig::default());
    let controller = carousel.controller();

    let on_enter = {
        let carousel = carousel.clone();
        Callback::from(move |_: ()| carousel.dispatch(CarouselAction::HoverEnter))
    };
    let on_leave = {
        let carousel = carousel.clone();
        Callback::from(move |_: ()| carousel.dispatch(CarouselAction::HoverLeave(now_ms())))
    };

    let body = if !is_mobile {
        let paused = controller.phase() == CarouselPhase::Paused;
        html! {
            <div
                class="marquee-viewport"
                onmouseenter={on_enter.reform(|_: MouseEvent| ())}
                onmouseleave={on_leave.reform(|_: MouseEvent| ())}
                onfocusin={on_enter.reform(|_: FocusEvent| ())}
                onfocusout={on_leave.reform(|_: FocusEvent| ())}
            >
                <div class={classes!("marquee-track", paused.then(|| "paused"))}>
                    // Rendered twice so the loop has no visible seam
                    { for recommendations.iter().chain(recommendations.iter()).enumerate().map(|(index, r)| html! {
                        <div key={format!("desktop-{}", index)} class="marquee-item">
                            { card(&carousel, r, format!("desktop-{}", index)) }
                        </div>
                    }) }
                </div>
            </div>
        }
    } else {
        let ontouchstart = {
            let carousel = carousel.clone();
            Callback::from(move |e: TouchEvent| {
                if let Some(touch) = e.target_touches().get(0) {
                    carousel.dispatch(CarouselAction::TouchStart(touch.client_x() as f64));
                }
            })
        };
        let ontouchmove = {
            let carousel = carousel.clone();
            Callback::from(move |e: TouchEvent| {
                if let Some(touch) = e.target_touches().get(0) {
                    carousel.dispatch(CarouselAction::TouchMove(touch.client_x() as f64));
                }
            })
        };
        let ontouchend = {
            let carousel = carousel.clone();
            Callback::from(move |_: TouchEvent| carousel.dispatch(CarouselAction::TouchEnd(now_ms())))
        };
        let onkeydown = {
            let carousel = carousel.clone();
            Callback::from(move |e: KeyboardEvent| {
                let key = e.key();
                if key == "ArrowLeft" || key == "ArrowRight" {
                    e.prevent_default();
                    carousel.dispatch(CarouselAction::Key(key, now_ms()));
                }
            })
        };
        let on_prev = {
            let carousel = carousel.clone();
            Callback::from(move |_: MouseEvent| carousel.prev())
        };
        let on_next = {
            let carousel = carousel.clone();
            Callback::from(move |_: MouseEvent| carousel.next())
        };

        let disabled = !controller.can_navigate();
        let slide = match controller.direction() {
            Direction::Forward => "slide-from-right",
            Direction::Backward => "slide-from-left",
        };
        let current = recommendations.get(controller.index());

        html! {
            <div
                class="carousel"
                tabindex="0"
                aria-roledescription="carousel"
                {ontouchstart}
                {ontouchmove}
                {ontouchend}
                {onkeydown}
            >
                <button class="carousel-prev" aria-label="Previous" onclick={on_prev} {disabled}>{"‹"}</button>
                <button class="carousel-next" aria-label="Next" onclick={on_next} {disabled}>{"›"}</button>
                {
                    match (current, controller.current_key()) {
                        (Some(r), Some(key)) => html! {
                            <div key={key.to_string()} class={classes!("carousel-slide", slide)}>
                                { card(&carousel, r, key.to_string()) }
                            </div>
                        },
                        _ => html! {},
                    }
                }
                if let Some(next) = controller.next_ordinal().filter(|_| controller.can_navigate()) {
                    <p class="carousel-position">
                        {format!("{} / {} · next {}", controller.index() + 1, controller.len(), next)}
                    </p>
                }
            </div>
        }
    };

    html! {
        <section id="recommendations" class="recommendations-section">
            <Reveal class="recommendations-header">
                <h2>{"What People Say"}</h2>
                <p>{"Testimonials from colleagues, clients, and partners."}</p>
            </Reveal>
            { body }
        </section>
    }
}
