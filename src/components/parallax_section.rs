use yew::prelude::*;

use crate::config::PARALLAX_SPEED;
use crate::engine::parallax::translate_y;
use crate::engine::{ParallaxConfig, ParallaxDirection};
use crate::hooks::use_parallax;

#[derive(Properties, PartialEq)]
pub struct ParallaxSectionProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or(PARALLAX_SPEED)]
    pub speed: f64,
    #[prop_or_default]
    pub direction: ParallaxDirection,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ParallaxSection)]
pub fn parallax_section(props: &ParallaxSectionProps) -> Html {
    let (node, offset) = use_parallax(ParallaxConfig {
        speed: props.speed,
        direction: props.direction,
    });

    html! {
        <div ref={node} class={props.class.clone()}>
            <div style={format!("transform: {}; transition: transform 0.1s ease-out;", translate_y(offset))}>
                { for props.children.iter() }
            </div>
        </div>
    }
}
