use std::rc::Rc;

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::parallax_section::ParallaxSection;
use crate::components::reveal::Reveal;
use crate::content::Portfolio;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub portfolio: Rc<Portfolio>,
}

fn social_glyph(label: &str) -> &'static str {
    match label {
        "LinkedIn" => "in",
        "GitHub" | "Github" => "gh",
        "Medium" | "Blog" => "✎",
        "Twitter" => "𝕏",
        _ => "↗",
    }
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let contact = &props.portfolio.contact;
    let email = use_state(String::new);
    let hovered_social = use_state_eq(|| None::<usize>);

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // No mailing list backend yet; the signup is only recorded in the console.
            log::info!("Newsletter signup: {}", *email);
            email.set(String::new());
        })
    };

    html! {
        <footer id="contact" class="site-footer">
            <div class="footer-content">
                <div class="footer-cta">
                    <ParallaxSection speed={0.3}>
                        <Reveal>
                            <span class="badge">{"Let's Connect"}</span>
                            <h2>
                                {"Ready to create"}<br />
                                <span class="italic">{"something amazing?"}</span>
                            </h2>
                            <p>{"Let's turn your vision into reality. Reach out and let's discuss how we can work together."}</p>
                        </Reveal>
                    </ParallaxSection>
                </div>

                <div class="footer-grid">
                    <div class="contact-cards">
                        <Reveal>
                            <a href={format!("mailto:{}", contact.email)} class="contact-card email">
                                <h3>{"Email Me"}</h3>
                                <p>{"Drop me a line anytime"}</p>
                                <span>{&contact.email}</span>
                            </a>
                        </Reveal>
                        <Reveal delay={100}>
                            <a
                                href={format!("https://{}", contact.linkedin)}
                                target="_blank"
                                rel="noopener noreferrer"
                                class="contact-card linkedin"
                            >
                                <h3>{"LinkedIn"}</h3>
                                <p>{"Let's connect professionally"}</p>
                                <span>{"View Profile"}</span>
                            </a>
                        </Reveal>
                        <Reveal delay={200} class="wide">
                            <div class="contact-card location">
                                <h3>{"Based in"}</h3>
                                <p>{&props.portfolio.personal.location}</p>
                            </div>
                        </Reveal>
                    </div>

                    <div class="status-column">
                        <Reveal delay={150}>
                            <div class="status-card">
                                <h3><span class="status-dot"></span>{"Current Status"}</h3>
                                <p>{&contact.status}</p>
                            </div>
                        </Reveal>
                        <Reveal delay={200}>
                            <div class="newsletter-card">
                                <h3>{"Stay Updated"}</h3>
                                <p>{"Get notified about new projects and insights"}</p>
                                <form {onsubmit}>
                                    <input
                                        type="email"
                                        placeholder="your@email.com"
                                        value={(*email).clone()}
                                        {oninput}
                                    />
                                    <button type="submit" aria-label="Subscribe">{"→"}</button>
                                </form>
                            </div>
                        </Reveal>
                    </div>
                </div>

                <Reveal delay={250}>
                    <div class="social-links">
                        <p>{"Connect With Me"}</p>
                        <div class="social-row">
                            { for props.portfolio.social.iter().enumerate().map(|(index, link)| {
                                let onmouseenter = {
                                    let hovered_social = hovered_social.clone();
                                    Callback::from(move |_: MouseEvent| hovered_social.set(Some(index)))
                                };
                                let onmouseleave = {
                                    let hovered_social = hovered_social.clone();
                                    Callback::from(move |_: MouseEvent| hovered_social.set(None))
                                };
                                let hovered = *hovered_social == Some(index);
                                html! {
                                    <a
                                        key={format!("{}-{}", link.label, index)}
                                        href={link.href.clone()}
                                        target={link.external.then(|| "_blank")}
                                        rel={link.external.then(|| "noopener noreferrer")}
                                        aria-label={link.label.clone()}
                                        class={classes!("social-link", hovered.then(|| "hovered"))}
                                        {onmouseenter}
                                        {onmouseleave}
                                    >
                                        <span class="social-icon">{social_glyph(&link.label)}</span>
                                        <span class="social-label">{&link.label}</span>
                                    </a>
                                }
                            }) }
                        </div>
                    </div>
                </Reveal>

                <div class="footer-bottom">
                    <Reveal delay={300}>
                        <p>
                            {format!(
                                "© {} {}. Crafted with passion.",
                                props.portfolio.footer.copyright_year,
                                props.portfolio.footer.copyright_name
                            )}
                        </p>
                    </Reveal>
                </div>
            </div>
        </footer>
    }
}
