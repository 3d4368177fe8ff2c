use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod engine;
mod hooks;
mod navigation;
mod components {
    pub mod animated_image;
    pub mod experience_card;
    pub mod mobile_menu;
    pub mod parallax_section;
    pub mod project_card;
    pub mod reveal;
}
mod sections {
    pub mod about;
    pub mod experience;
    pub mod hero;
    pub mod recommendations;
    pub mod toolkit;
    pub mod work;
}
mod layout {
    pub mod footer;
    pub mod header;
}
mod pages {
    pub mod case_study;
    pub mod home;
    pub mod not_found;
}

use content::Portfolio;
use layout::header::Header;
use pages::{case_study::CaseStudy, home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/case-study/:id")]
    CaseStudy { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::CaseStudy { id } => {
            info!("Rendering Case Study page for {}", id);
            html! { <CaseStudy {id} /> }
        }
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! { <NotFound /> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub content: Result<Rc<Portfolio>, String>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    match &props.content {
        Ok(portfolio) => html! {
            <ContextProvider<Rc<Portfolio>> context={portfolio.clone()}>
                <BrowserRouter>
                    <Header portfolio={portfolio.clone()} />
                    <main>
                        <Switch<Route> render={switch} />
                    </main>
                </BrowserRouter>
            </ContextProvider<Rc<Portfolio>>>
        },
        Err(message) => html! {
            <div class="content-error">
                <h1>{"Something went wrong"}</h1>
                <p>{message}</p>
            </div>
        },
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting portfolio");
    let content = match Portfolio::embedded() {
        Ok(portfolio) => {
            info!(
                "Loaded {} projects and {} recommendations",
                portfolio.projects.len(),
                portfolio.recommendations.len()
            );
            document_title(&portfolio.seo.title);
            Ok(Rc::new(portfolio))
        }
        Err(e) => {
            error!("Failed to load portfolio content: {}", e);
            Err(e.to_string())
        }
    };

    yew::Renderer::<App>::with_props(AppProps { content }).render();
}

fn document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}
