use yew::prelude::*;

use crate::content::NavLink;
use crate::navigation::handle_anchor_click;

#[derive(Properties, PartialEq)]
pub struct MobileMenuProps {
    pub open: bool,
    pub links: &'static [NavLink],
    pub on_link_click: Callback<()>,
}

/// Full-screen navigation overlay for small screens.
#[function_component(MobileMenu)]
pub fn mobile_menu(props: &MobileMenuProps) -> Html {
    let tab_index = if props.open { "0" } else { "-1" };

    html! {
        <div
            id="mobile-menu"
            class={classes!("mobile-menu", props.open.then(|| "open"))}
            aria-hidden={(!props.open).to_string()}
        >
            <nav role="navigation">
                { for props.links.iter().map(|link| {
                    let on_link_click = props.on_link_click.clone();
                    let href = link.href;
                    let onclick = Callback::from(move |e: MouseEvent| {
                        handle_anchor_click(&e, href, false);
                        on_link_click.emit(());
                    });
                    html! {
                        <a key={link.href} href={link.href} {onclick} tabindex={tab_index}>
                            {link.label}
                        </a>
                    }
                }) }
            </nav>
        </div>
    }
}
