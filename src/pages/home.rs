use std::rc::Rc;

use yew::prelude::*;

use crate::content::Portfolio;
use crate::layout::footer::Footer;
use crate::navigation::smooth_scroll_to;
use crate::sections::{
    about::AboutSection, experience::ExperienceSection, hero::HeroSection,
    recommendations::RecommendationsSection, toolkit::ToolkitSection, work::WorkSection,
};

#[function_component(Home)]
pub fn home() -> Html {
    // Arriving from another page with a fragment, e.g. `/#work`.
    use_effect_with_deps(
        |_| {
            let hash = web_sys::window()
                .and_then(|w| w.location().hash().ok())
                .unwrap_or_default();
            if let Some(id) = hash.strip_prefix('#').filter(|id| !id.is_empty()) {
                smooth_scroll_to(id, false);
            }
            || ()
        },
        (),
    );

    let portfolio = use_context::<Rc<Portfolio>>();
    let Some(portfolio) = portfolio else {
        log::error!("Home rendered without portfolio content");
        return html! {};
    };

    html! {
        <>
            <HeroSection portfolio={portfolio.clone()} />
            <AboutSection portfolio={portfolio.clone()} />
            <WorkSection portfolio={portfolio.clone()} />
            <ToolkitSection portfolio={portfolio.clone()} />
            <ExperienceSection portfolio={portfolio.clone()} />
            <RecommendationsSection portfolio={portfolio.clone()} />
            <Footer {portfolio} />
        </>
    }
}
