use web_sys::Element;
use yew::prelude::*;

use crate::engine::{float_offset, BrowserViewport, TiltState, ViewportContext};
use crate::hooks::{use_animation_elapsed, use_prefers_reduced_motion};

#[derive(Properties, PartialEq)]
pub struct AnimatedImageProps {
    pub src: String,
    pub alt: String,
    pub location: String,
    pub experience: String,
}

/// Hero portrait with pointer tilt, magnetic pull and an idle float.
#[function_component(AnimatedImage)]
pub fn animated_image(props: &AnimatedImageProps) -> Html {
    let node = use_node_ref();
    let tilt = use_state_eq(TiltState::default);
    let reduced = use_prefers_reduced_motion();
    let elapsed = use_animation_elapsed(!reduced);

    let onmousemove = {
        let node = node.clone();
        let tilt = tilt.clone();
        Callback::from(move |e: MouseEvent| {
            let rect = node
                .cast::<Element>()
                .zip(BrowserViewport::current())
                .and_then(|(element, viewport)| viewport.element_rect(&element));
            if let Some(rect) = rect {
                let mut next = *tilt;
                next.pointer_move(e.client_x() as f64, e.client_y() as f64, rect);
                tilt.set(next);
            }
        })
    };

    let onmouseenter = {
        let tilt = tilt.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *tilt;
            next.pointer_enter();
            tilt.set(next);
        })
    };

    let onmouseleave = {
        let tilt = tilt.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *tilt;
            next.pointer_leave();
            tilt.set(next);
        })
    };

    let state = if reduced { TiltState::default() } else { *tilt };
    let float = if reduced { 0.0 } else { float_offset(elapsed) };
    let transform = state.transform(float);
    let (back_x, back_y) = state.layer_shift(-5.0);
    let (mid_x, mid_y) = state.layer_shift(10.0);
    let (shine_x, shine_y) = state.layer_shift(50.0);

    html! {
        <div
            ref={node}
            class="animated-image"
            style="perspective: 1000px;"
            {onmousemove}
            {onmouseenter}
            {onmouseleave}
        >
            <div class="animated-image-frame" style={transform.css()}>
                <div
                    class="animated-image-glow"
                    style={format!("opacity: {}; transform: translateZ(-50px);", if state.hovering { 0.6 } else { 0.0 })}
                />
                <div class="animated-image-layers">
                    <div
                        class="animated-image-back"
                        style={format!("transform: translateZ(-30px) scale(1.1) translateX({:.2}px) translateY({:.2}px);", back_x, back_y)}
                    />
                    <div
                        class="animated-image-mid"
                        style={format!("transform: translateZ(-15px) translateX({:.2}px) translateY({:.2}px);", mid_x, mid_y)}
                    />
                    <div class="animated-image-photo" style="transform: translateZ(20px);">
                        <img
                            src={props.src.clone()}
                            alt={props.alt.clone()}
                            style={if state.hovering { "filter: brightness(1.1) contrast(1.05);" } else { "filter: none;" }}
                        />
                    </div>
                    <div
                        class="animated-image-shine"
                        style={format!(
                            "opacity: {}; transform: translateX({:.1}%) translateY({:.1}%);",
                            if state.hovering { 0.3 } else { 0.0 },
                            shine_x,
                            shine_y,
                        )}
                    />
                    <div class="animated-image-info" style="transform: translateZ(40px);">
                        <span>{format!("Loc: {}", props.location)}</span>
                        <span>{format!("Exp: {}", props.experience)}</span>
                    </div>
                </div>
                <div class="animated-image-border" style="transform: translateZ(30px);" />
            </div>
        </div>
    }
}
