use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::parallax_section::ParallaxSection;
use crate::content::{Portfolio, Project};
use crate::engine::{hero_fade, ParallaxDirection};
use crate::hooks::use_scroll_y;
use crate::Route;

const CHALLENGES: [&str; 3] = ["User Research", "Design Strategy", "Implementation"];

const PROCESS_STEPS: [&str; 3] = [
    "User research and persona development",
    "Wireframing and prototyping",
    "Usability testing and iteration",
];

/// First run of digits in an outcome line, shown as the headline figure.
fn headline_figure(outcome: &str) -> &str {
    let Some(start) = outcome.find(|c: char| c.is_ascii_digit()) else {
        return "100";
    };
    let rest = &outcome[start..];
    let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    &rest[..end]
}

const MISSING_TITLE: &str = "Case Study Not Found";
const MISSING_BACK_HREF: &str = "/#work";

/// What the detail route shows for a project id.
#[derive(Debug, PartialEq)]
enum CaseStudyView<'a> {
    Found {
        project: &'a Project,
        /// Ordinal and project of the following case study, absent when it would be the same one.
        next: Option<(usize, &'a Project)>,
    },
    Missing,
}

fn resolve<'a>(portfolio: &'a Portfolio, id: &str) -> CaseStudyView<'a> {
    match portfolio.find_project(id) {
        Some(project) => CaseStudyView::Found {
            project,
            next: portfolio.next_project(id).filter(|(_, next)| next.id != project.id),
        },
        None => CaseStudyView::Missing,
    }
}

fn entrance_style(loaded: bool, distance_px: u32) -> String {
    if loaded {
        "opacity: 1; transform: translateY(0);".to_string()
    } else {
        format!("opacity: 0; transform: translateY({}px);", distance_px)
    }
}

#[derive(Properties, PartialEq)]
pub struct CaseStudyProps {
    pub id: String,
}

#[function_component(CaseStudy)]
pub fn case_study(props: &CaseStudyProps) -> Html {
    let scroll_y = use_scroll_y();
    let loaded = use_state_eq(|| false);

    {
        let loaded = loaded.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                loaded.set(true);
                || ()
            },
            props.id.clone(),
        );
    }

    let portfolio = use_context::<Rc<Portfolio>>();
    let Some(portfolio) = portfolio else {
        log::error!("Case study rendered without portfolio content");
        return html! {};
    };

    let (project, next) = match resolve(&portfolio, &props.id) {
        CaseStudyView::Found { project, next } => (project, next),
        CaseStudyView::Missing => {
            log::warn!("No case study for project id {}", props.id);
            return html! {
                <div class="not-found">
                    <h1>{MISSING_TITLE}</h1>
                    <a href={MISSING_BACK_HREF}>{"Return to Work"}</a>
                </div>
            };
        }
    };

    let fade = hero_fade(scroll_y);
    let loaded = *loaded;
    let [back, middle, front] = fade.layer_offsets;

    html! {
        <div class="case-study">
            <section class="case-hero">
                <div
                    class="case-hero-layer gradient"
                    style={format!("transform: translateY({}px) scale({});", back, fade.backdrop_scale)}
                />
                <div class="case-hero-layer glow-warm" style={format!("transform: translateY({}px);", middle)} />
                <div class="case-hero-layer glow-cool" style={format!("transform: translateY({}px);", front)} />

                <div
                    class="case-hero-content"
                    style={format!(
                        "opacity: {}; transform: scale({}) translateY({}px);",
                        fade.opacity, fade.scale, fade.content_offset
                    )}
                >
                    <span class="case-category" style={entrance_style(loaded, 20)}>{&project.category}</span>
                    <h1 style={entrance_style(loaded, 30)}>{&project.title}</h1>
                    <p class="case-description" style={entrance_style(loaded, 30)}>{&project.description}</p>
                    <div class="case-meta" style={entrance_style(loaded, 30)}>
                        <div><span>{"Role:"}</span>{" "}{&project.role}</div>
                        <div><span>{"Focus:"}</span>{" "}{&project.focus}</div>
                    </div>
                </div>

                <div class="scroll-indicator" style={format!("opacity: {};", fade.opacity)}>
                    {"Scroll to explore"}
                </div>
            </section>

            <section id="overview" class="case-overview">
                <div class="overview-grid">
                    <div>
                        <h2>{"Overview"}</h2>
                        <p>{&project.description}</p>
                        <dl class="overview-facts">
                            <dt>{"Role"}</dt><dd>{&project.role}</dd>
                            <dt>{"Focus"}</dt><dd>{&project.focus}</dd>
                            <dt>{"Outcome"}</dt><dd>{&project.outcome}</dd>
                        </dl>
                    </div>
                    <ParallaxSection speed={0.2} direction={ParallaxDirection::Down}>
                        <div class="headline-figure">
                            <span>{format!("{}%", headline_figure(&project.outcome))}</span>
                            <p>{"Success Rate"}</p>
                        </div>
                    </ParallaxSection>
                </div>
            </section>

            <section id="challenges" class="case-challenges">
                <h2>{"The Challenge"}</h2>
                <div class="challenge-grid">
                    { for CHALLENGES.iter().enumerate().map(|(index, item)| html! {
                        <ParallaxSection key={*item} speed={0.1 + index as f64 * 0.05} class="challenge-card">
                            <span class="challenge-number">{(index + 1).to_string()}</span>
                            <h3>{*item}</h3>
                            <p>{"Detailed analysis and strategic approach to solving complex user experience challenges through data-driven decisions."}</p>
                        </ParallaxSection>
                    }) }
                </div>
            </section>

            <section id="solution" class="case-solution">
                <ParallaxSection speed={0.8} class="floating-shape top-right"><div /></ParallaxSection>
                <ParallaxSection speed={0.6} class="floating-shape bottom-left"><div /></ParallaxSection>

                <ParallaxSection speed={0.25}>
                    <h2>{"The Solution"}</h2>
                    <p>{"A comprehensive approach combining user research, iterative design, and data-driven decision making to create an intuitive experience that exceeded business goals."}</p>
                </ParallaxSection>

                <div class="solution-grid">
                    <ParallaxSection speed={0.35}>
                        <div class="solution-card">
                            <h3>{"Design Process"}</h3>
                            <ul>
                                { for PROCESS_STEPS.iter().map(|step| html! { <li key={*step}>{*step}</li> }) }
                            </ul>
                        </div>
                    </ParallaxSection>
                    <ParallaxSection speed={0.45}>
                        <div class="solution-card results">
                            <h3>{"Key Results"}</h3>
                            <p>{&project.outcome}</p>
                            <a href="/#contact" class="discuss-button">{"Discuss Your Project"}</a>
                        </div>
                    </ParallaxSection>
                </div>
            </section>

            <section class="case-more">
                <ParallaxSection speed={0.2}>
                    <h3>{"More Work"}</h3>
                    if let Some((ordinal, next)) = next {
                        <Link<Route> to={Route::CaseStudy { id: next.id.clone() }} classes="next-project">
                            <span class="next-ordinal">{format!("{:02}", ordinal)}</span>
                            {format!("Next: {}", next.title)}
                        </Link<Route>>
                    }
                    <a href="/#work" class="all-projects">{"Explore All Projects"}</a>
                </ParallaxSection>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_id_resolves_to_the_fallback() {
        let portfolio = Portfolio::embedded().expect("embedded portfolio");
        assert_eq!(resolve(&portfolio, "z"), CaseStudyView::Missing);
        assert_eq!(resolve(&portfolio, ""), CaseStudyView::Missing);
        assert_eq!(MISSING_BACK_HREF, "/#work");
    }

    #[test]
    fn known_id_resolves_with_the_next_project() {
        let portfolio = Portfolio::embedded().expect("embedded portfolio");
        let last = portfolio.projects.last().expect("projects");
        match resolve(&portfolio, &last.id) {
            CaseStudyView::Found { project, next } => {
                assert_eq!(project.id, last.id);
                let (ordinal, next) = next.expect("next project");
                assert_eq!(ordinal, 1);
                assert_eq!(next.id, portfolio.projects[0].id);
            }
            CaseStudyView::Missing => panic!("{} should resolve", last.id),
        }
    }

    #[test]
    fn lone_project_has_no_next_link() {
        let mut portfolio = Portfolio::embedded().expect("embedded portfolio");
        portfolio.projects.truncate(1);
        let id = portfolio.projects[0].id.clone();
        assert!(matches!(resolve(&portfolio, &id), CaseStudyView::Found { next: None, .. }));
    }

    #[test]
    fn headline_figure_takes_first_number() {
        assert_eq!(headline_figure("Completion rate up from 41% to 78%"), "41");
        assert_eq!(headline_figure("Cut booking time by 60%"), "60");
    }

    #[test]
    fn headline_figure_defaults_without_digits() {
        assert_eq!(headline_figure("Happier users"), "100");
        assert_eq!(headline_figure(""), "100");
    }
}
