use yew::prelude::*;

use crate::engine::RevealConfig;
use crate::hooks::use_reveal;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Extra wait before the entrance transition starts, in ms.
    #[prop_or_default]
    pub delay: u32,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let reveal = use_reveal(RevealConfig {
        delay_ms: props.delay,
        ..RevealConfig::default()
    });

    if !reveal.animates {
        return html! {
            <div ref={reveal.node} class={props.class.clone()}>
                { for props.children.iter() }
            </div>
        };
    }

    let state = if reveal.visible { "reveal-visible" } else { "reveal-hidden" };

    html! {
        <div
            ref={reveal.node}
            class={classes!(props.class.clone(), "reveal", state)}
            style={format!("transition-delay: {}ms;", reveal.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}
