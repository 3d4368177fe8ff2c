use yew::prelude::*;

use crate::content::Experience;

#[derive(Properties, PartialEq)]
pub struct ExperienceCardProps {
    pub experience: Experience,
}

#[function_component(ExperienceCard)]
pub fn experience_card(props: &ExperienceCardProps) -> Html {
    let experience = &props.experience;
    let dot = if experience.highlighted { "timeline-dot highlighted" } else { "timeline-dot" };

    html! {
        <div class="experience-card">
            <div class={dot} aria-hidden="true"></div>
            <div class="experience-header">
                <h4>{&experience.role}</h4>
                <span class="experience-time">{&experience.time}</span>
            </div>
            <p class="experience-company">{&experience.company}</p>
            <p class="experience-description">{&experience.description}</p>
        </div>
    }
}
