use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::Project;
use crate::Route;

const GLOWS: [&str; 3] = [
    "radial-gradient(ellipse at center, rgba(234,88,12,0.15) 0%, transparent 70%)",
    "radial-gradient(ellipse at center, rgba(168,85,247,0.15) 0%, transparent 70%)",
    "radial-gradient(ellipse at center, rgba(16,185,129,0.15) 0%, transparent 70%)",
];

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
    pub index: usize,
    #[prop_or_default]
    pub reversed: bool,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;
    let glow = GLOWS[props.index.min(GLOWS.len() - 1)];

    let visual = match &project.image {
        Some(src) => html! { <img src={src.clone()} alt={project.title.clone()} loading="lazy" /> },
        None => html! {
            <div class="project-visual-abstract">
                <span class="project-visual-number">{format!("{:02}", props.index + 1)}</span>
                <span class="project-visual-category">{&project.category}</span>
            </div>
        },
    };

    html! {
        <Reveal class={classes!("project-card", props.reversed.then(|| "reversed"))}>
            <div class="project-visual">
                <div class="project-glow" style={format!("background: {};", glow)}></div>
                { visual }
            </div>
            <div class="project-details">
                <Reveal delay={200} class="project-category">
                    <span>{&project.category}</span>
                </Reveal>
                <Reveal delay={300}>
                    <h3>{&project.title}</h3>
                </Reveal>
                <Reveal delay={400}>
                    <p class="project-description">{&project.description}</p>
                </Reveal>
                <Reveal delay={500}>
                    <ul class="project-facts">
                        <li><span class="fact-label">{"Role:"}</span><span>{&project.role}</span></li>
                        <li><span class="fact-label">{"Focus:"}</span><span>{&project.focus}</span></li>
                        <li><span class="fact-label">{"Outcome:"}</span><span>{&project.outcome}</span></li>
                    </ul>
                </Reveal>
                <Reveal delay={600}>
                    <Link<Route> to={Route::CaseStudy { id: project.id.clone() }} classes="case-study-link">
                        {"Read Case Study →"}
                    </Link<Route>>
                </Reveal>
            </div>
        </Reveal>
    }
}
