use std::rc::Rc;

use yew::prelude::*;

use crate::components::experience_card::ExperienceCard;
use crate::components::reveal::Reveal;
use crate::content::Portfolio;

#[derive(Properties, PartialEq)]
pub struct ExperienceSectionProps {
    pub portfolio: Rc<Portfolio>,
}

#[function_component(ExperienceSection)]
pub fn experience_section(props: &ExperienceSectionProps) -> Html {
    html! {
        <section id="experience" class="experience-section">
            <div class="experience-grid">
                <Reveal>
                    <h2>{"Experience"}</h2>
                </Reveal>
                <div class="timeline">
                    { for props.portfolio.experience.iter().enumerate().map(|(index, experience)| html! {
                        <Reveal key={experience.id.clone()} delay={index as u32 * 100}>
                            <ExperienceCard experience={experience.clone()} />
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}
