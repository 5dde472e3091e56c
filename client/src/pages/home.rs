//! Single-page portfolio: hero, about, skills, projects, services, contact.
//!
//! Installs the page-wide listeners once hydrated: scroll (navbar state,
//! active link, settled-scroll debounce), delegated in-page anchor clicks
//! for smooth scrolling, and the scroll-in reveal observer.

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::navbar::Navbar;
use crate::components::profile_image::ProfileImage;
use crate::components::project_card::ProjectCard;
use crate::content::{PROFILE, PROJECTS, SERVICES, SKILLS};
use crate::state::ui::UiState;
use crate::util::dom;
use crate::util::reveal;
use crate::util::scroll::{nav_href, scroll_y, section_spans};

fn sync_scroll(ui: RwSignal<UiState>) {
    let y = scroll_y();
    let spans = section_spans();
    ui.update(|s| s.apply_scroll(y, &spans));
}

#[cfg(feature = "hydrate")]
fn install_listeners(ui: RwSignal<UiState>) {
    use wasm_bindgen::JsCast;

    use crate::util::debounce::Debounced;
    use crate::util::scroll::{SCROLL_SETTLE_MS, anchor_target, scroll_to_section};

    let settled = Debounced::new(SCROLL_SETTLE_MS, || {
        log::debug!("scroll settled at {}px", scroll_y());
    });
    let scroll_handle = window_event_listener(leptos::ev::scroll, move |_| {
        sync_scroll(ui);
        settled.trigger();
    });

    let click_handle = window_event_listener(leptos::ev::click, move |ev| {
        let Some(link) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest("a[href^=\"#\"]").ok().flatten())
        else {
            return;
        };
        let Some(href) = link.get_attribute("href") else {
            return;
        };
        let Some(id) = anchor_target(&href) else {
            return;
        };
        ev.prevent_default();
        scroll_to_section(id);
    });

    on_cleanup(move || {
        scroll_handle.remove();
        click_handle.remove();
    });
}

#[component]
pub fn HomePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    #[cfg(feature = "hydrate")]
    install_listeners(ui);

    Effect::new(move || {
        sync_scroll(ui);
        reveal::install();
        dom::mark_body_loaded();
    });

    view! {
        <Navbar/>
        <main>
            <section class="hero" id="home">
                <div class="hero-content">
                    <p class="hero-greeting">"Hi, I'm"</p>
                    <h1 class="hero-title">{PROFILE.name}</h1>
                    <h2 class="hero-subtitle">{PROFILE.role}</h2>
                    <p class="hero-description">{PROFILE.tagline}</p>
                    <div class="hero-buttons">
                        <a href=nav_href("projects") class="btn btn-primary">"View My Work"</a>
                        <a href=nav_href("contact") class="btn btn-secondary">"Get In Touch"</a>
                    </div>
                </div>
            </section>

            <section class="about" id="about">
                <h2 class="section-title">"About Me"</h2>
                <div class="about-content">
                    <div class="about-image">
                        <ProfileImage src=PROFILE.photo name=PROFILE.name/>
                    </div>
                    <div class="about-text">
                        <p>{PROFILE.about}</p>
                        <p>{format!("Based in {}.", PROFILE.location)}</p>
                    </div>
                </div>
            </section>

            <section class="skills" id="skills">
                <h2 class="section-title">"Skills"</h2>
                <div class="skills-grid">
                    {SKILLS
                        .iter()
                        .map(|category| {
                            view! {
                                <div class="skill-category">
                                    <h3>
                                        <i class=category.icon></i>
                                        " "
                                        {category.title}
                                    </h3>
                                    <ul class="skill-list">
                                        {category
                                            .skills
                                            .iter()
                                            .map(|skill| view! { <li>{*skill}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="projects" id="projects">
                <h2 class="section-title">"Projects"</h2>
                <div class="projects-grid">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard project=project index=index/> })
                        .collect_view()}
                </div>
            </section>

            <section class="services" id="services">
                <h2 class="section-title">"Services"</h2>
                <div class="services-grid">
                    {SERVICES
                        .iter()
                        .map(|service| {
                            view! {
                                <div class="service-card">
                                    <i class=service.icon></i>
                                    <h3>{service.title}</h3>
                                    <p>{service.summary}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="contact" id="contact">
                <h2 class="section-title">"Get In Touch"</h2>
                <div class="contact-content">
                    <div class="contact-info">
                        <p>
                            <i class="fas fa-envelope"></i>
                            " "
                            <a href=format!("mailto:{}", PROFILE.email)>{PROFILE.email}</a>
                        </p>
                        <p>
                            <i class="fab fa-whatsapp"></i>
                            " "
                            {PROFILE.phone}
                        </p>
                        <p>
                            <i class="fas fa-map-marker-alt"></i>
                            " "
                            {PROFILE.location}
                        </p>
                    </div>
                    <ContactForm/>
                </div>
            </section>
        </main>
        <footer class="footer">
            <p>{format!("© {} · Built with Rust and Leptos", PROFILE.name)}</p>
        </footer>
    }
}
