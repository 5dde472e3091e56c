//! Project card with a gradient placeholder for broken screenshots.

use leptos::prelude::*;

use crate::content::Project;
use crate::util::image_fallback::{ImageFallback, PROJECT_ICON_CLASS, project_gradient};
#[cfg(feature = "hydrate")]
use crate::util::image_fallback::failed_at_mount;

const ICON_STYLE: &str = "font-size: 4rem; color: white; position: absolute; top: 50%; left: 50%; \
                          transform: translate(-50%, -50%);";

/// `index` is the card's position on the page and picks the placeholder
/// gradient.
#[component]
pub fn ProjectCard(project: &'static Project, index: usize) -> impl IntoView {
    let fallback = RwSignal::new(ImageFallback::default());
    let failed = move || fallback.with(|f| f.failed());
    let img_style = move || if failed() { "display: none;" } else { "" };

    let img_ref = NodeRef::<leptos::html::Img>::new();
    let show_placeholder = move || {
        if fallback.try_update(ImageFallback::fail) == Some(true) {
            log::debug!("project image {} failed to load; using gradient {index}", project.image);
        }
    };
    let on_error = move |_| show_placeholder();

    // The error event may have fired before hydration attached the listener.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(img) = img_ref.get()
            && failed_at_mount(img.complete(), img.natural_width())
        {
            show_placeholder();
        }
    });

    let frame_style = move || {
        if failed() {
            format!("background: {}; position: relative;", project_gradient(index))
        } else {
            String::new()
        }
    };

    view! {
        <article class="project-card">
            <div class="project-image" style=frame_style>
                <img
                    src=project.image
                    alt=project.title
                    style=img_style
                    node_ref=img_ref
                    on:error=on_error
                />
                <Show when=failed>
                    <i class=PROJECT_ICON_CLASS style=ICON_STYLE></i>
                </Show>
            </div>
            <div class="project-content">
                <h3 class="project-title">{project.title}</h3>
                <p class="project-description">{project.summary}</p>
                <div class="project-tags">
                    {project.tags.iter().map(|tag| view! { <span class="tag">{*tag}</span> }).collect_view()}
                </div>
                <a href=project.link class="project-link">
                    "View Project "
                    <i class="fas fa-arrow-right"></i>
                </a>
            </div>
        </article>
    }
}
