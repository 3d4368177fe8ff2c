use std::rc::Rc;

use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::Portfolio;

#[derive(Properties, PartialEq)]
pub struct ToolkitSectionProps {
    pub portfolio: Rc<Portfolio>,
}

#[function_component(ToolkitSection)]
pub fn toolkit_section(props: &ToolkitSectionProps) -> Html {
    html! {
        <section id="process" class="toolkit-section">
            <div class="toolkit-grid">
                <Reveal>
                    <h3>{"The Toolkit"}</h3>
                    <p>{"Tools are just a means to an end, but I am proficient in the modern product stack."}</p>
                </Reveal>
                <div class="tools">
                    { for props.portfolio.tools.iter().enumerate().map(|(index, tool)| html! {
                        <Reveal key={tool.name.clone()} delay={index as u32 * 50}>
                            <div class="tool">
                                <span class="tool-name">{&tool.name}</span>
                                <span class="tool-category">{&tool.category}</span>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}
