use std::rc::Rc;

use yew::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::components::reveal::Reveal;
use crate::content::Portfolio;

#[derive(Properties, PartialEq)]
pub struct WorkSectionProps {
    pub portfolio: Rc<Portfolio>,
}

#[function_component(WorkSection)]
pub fn work_section(props: &WorkSectionProps) -> Html {
    html! {
        <section id="work" class="work-section">
            <Reveal class="work-header">
                <span class="section-label">{"Portfolio"}</span>
                <h2>{"Selected Works"}</h2>
                <p>{"A collection of complex problems simplified into intuitive experiences through Agile methodologies and strategic thinking."}</p>
            </Reveal>
            <div class="work-list">
                { for props.portfolio.projects.iter().enumerate().map(|(index, project)| html! {
                    <ProjectCard
                        key={project.id.clone()}
                        project={project.clone()}
                        {index}
                        reversed={index % 2 != 0}
                    />
                }) }
            </div>
        </section>
    }
}
