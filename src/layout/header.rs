use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::mobile_menu::MobileMenu;
use crate::config::HEADER_SCROLL_THRESHOLD;
use crate::content::{NavLink, Portfolio, CASE_NAV_LINKS, MOBILE_NAV_LINKS, NAV_LINKS};
use crate::hooks::{use_body_scroll_lock, use_scrolled_past};
use crate::navigation::{handle_anchor_click, scroll_to_top};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub portfolio: Rc<Portfolio>,
}

fn nav_link(link: &'static NavLink) -> Html {
    let onclick = Callback::from(move |e: MouseEvent| handle_anchor_click(&e, link.href, false));
    html! {
        <a key={link.href} href={link.href} class="nav-link" {onclick}>{link.label}</a>
    }
}

/// Target and label of the header call to action. The contact block only
/// exists on the home page, so case studies send visitors back there.
fn contact_target(on_case_study: bool) -> (&'static str, &'static str) {
    if on_case_study {
        ("/#work", "Back to Home")
    } else {
        ("#contact", "Get in touch")
    }
}

fn contact_button(on_case_study: bool, on_contact: Callback<MouseEvent>) -> Html {
    let (href, label) = contact_target(on_case_study);
    if on_case_study {
        html! { <a href={href} class="contact-button">{label}</a> }
    } else {
        html! { <a href={href} class="contact-button" onclick={on_contact}>{label}</a> }
    }
}

/// Fixed top bar. Turns opaque after a little scrolling and swaps its links
/// when showing a case study.
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let scrolled = use_scrolled_past(HEADER_SCROLL_THRESHOLD);
    let menu_open = use_state_eq(|| false);
    let route = use_route::<Route>();
    use_body_scroll_lock(*menu_open);

    let on_case_study = matches!(route, Some(Route::CaseStudy { .. }));

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };

    let on_brand = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to_top();
        })
    };

    let on_contact = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            menu_open.set(false);
            handle_anchor_click(&e, contact_target(false).0, true);
        })
    };

    let brand_name = props.portfolio.personal.brand_name.clone();
    let links = if on_case_study { CASE_NAV_LINKS } else { NAV_LINKS };

    html! {
        <>
            <header class={classes!("site-header", scrolled.then(|| "scrolled"))}>
                <div class="header-content">
                    if on_case_study {
                        <Link<Route> to={Route::Home} classes="brand">{brand_name}</Link<Route>>
                    } else {
                        <a href="/" class="brand" onclick={on_brand}>{brand_name}</a>
                    }

                    <nav class="desktop-nav">
                        { for links.iter().map(nav_link) }
                    </nav>

                    { contact_button(on_case_study, on_contact) }

                    <button
                        class={classes!("burger-menu", (*menu_open).then(|| "open"))}
                        aria-label={if *menu_open { "Close menu" } else { "Open menu" }}
                        aria-expanded={(*menu_open).to_string()}
                        aria-controls="mobile-menu"
                        onclick={toggle_menu}
                    >
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </header>
            <MobileMenu
                open={*menu_open}
                links={if on_case_study { CASE_NAV_LINKS } else { MOBILE_NAV_LINKS }}
                on_link_click={close_menu}
            />
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_study_call_to_action_leaves_the_page() {
        let (href, label) = contact_target(true);
        assert_eq!(href, "/#work");
        assert_eq!(label, "Back to Home");
        assert!(!href.starts_with('#'));
    }

    #[test]
    fn home_call_to_action_scrolls_to_contact() {
        assert_eq!(contact_target(false), ("#contact", "Get in touch"));
    }
}
