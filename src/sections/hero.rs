use std::rc::Rc;

use yew::prelude::*;

use crate::components::animated_image::AnimatedImage;
use crate::components::reveal::Reveal;
use crate::content::Portfolio;
use crate::navigation::handle_anchor_click;

const PROFILE_IMAGE: &str = "/assets/profile.jpg";

#[derive(Properties, PartialEq)]
pub struct HeroSectionProps {
    pub portfolio: Rc<Portfolio>,
}

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroSectionProps) -> Html {
    let personal = &props.portfolio.personal;
    let hero = &props.portfolio.hero;

    let on_cta = {
        let href = hero.cta_href.clone();
        Callback::from(move |e: MouseEvent| handle_anchor_click(&e, &href, false))
    };

    html! {
        <section class="hero-section">
            <div class="hero-grid">
                <div class="hero-text">
                    <Reveal>
                        <p class="hero-tagline">{&personal.role}</p>
                        <h1>
                            {&hero.headline}<br />
                            <span class="hero-italic">{&hero.headline_italic}</span>
                        </h1>
                        <p class="hero-description">{&personal.description}</p>
                        <a href={hero.cta_href.clone()} class="hero-cta" onclick={on_cta}>
                            {&hero.cta_text}
                            <span aria-hidden="true">{" ↘"}</span>
                        </a>
                    </Reveal>
                </div>
                <div class="hero-visual">
                    <Reveal delay={200}>
                        <AnimatedImage
                            src={PROFILE_IMAGE}
                            alt="Profile"
                            location={personal.location.clone()}
                            experience={personal.experience.clone()}
                        />
                    </Reveal>
                </div>
            </div>
            <div class="scroll-indicator" aria-hidden="true">{"↓"}</div>
        </section>
    }
}
