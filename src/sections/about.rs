use std::rc::Rc;

use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::Portfolio;

#[derive(Properties, PartialEq)]
pub struct AboutSectionProps {
    pub portfolio: Rc<Portfolio>,
}

/// Philosophy text, the quote card and the principles grid.
#[function_component(AboutSection)]
pub fn about_section(props: &AboutSectionProps) -> Html {
    let philosophy = &props.portfolio.philosophy;

    html! {
        <section id="about" class="about-section">
            <div class="about-grid">
                <div class="about-header">
                    <Reveal>
                        <h2>{&philosophy.title}</h2>
                        <div class="accent-rule" aria-hidden="true"></div>
                        <p class="section-label">{&philosophy.subtitle}</p>
                    </Reveal>
                </div>
                <div class="about-content">
                    <Reveal delay={100}>
                        { for philosophy.content.iter().enumerate().map(|(index, item)| html! {
                            <p class={classes!((index > 0).then(|| "spaced"))}>
                                if item.has_emphasis() {
                                    <><span class="emphasis">{&item.emphasis}</span>{" "}</>
                                }
                                {&item.paragraph}
                            </p>
                        }) }
                    </Reveal>
                    <Reveal delay={200} class="quote-card">
                        <div class="quote-card-border" aria-hidden="true"></div>
                        <blockquote>
                            <span class="quote-badge">{"My approach"}</span>
                            <p>{&philosophy.quote}</p>
                            <footer>{format!("— {}", props.portfolio.personal.name)}</footer>
                        </blockquote>
                    </Reveal>
                    <div class="principles">
                        { for philosophy.principles.iter().enumerate().map(|(index, principle)| html! {
                            <Reveal key={principle.title.clone()} delay={300 + index as u32 * 100} class="principle">
                                <h4>{&principle.title}</h4>
                                <p>{&principle.subtitle}</p>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
