//! Profile photo with an initials placeholder when the image fails to load.

use leptos::prelude::*;

use crate::util::image_fallback::{ImageFallback, PROFILE_GRADIENT, initials};
#[cfg(feature = "hydrate")]
use crate::util::image_fallback::failed_at_mount;

#[component]
pub fn ProfileImage(src: &'static str, name: &'static str) -> impl IntoView {
    let fallback = RwSignal::new(ImageFallback::default());
    let failed = move || fallback.with(|f| f.failed());
    let img_style = move || if failed() { "display: none;" } else { "" };

    let img_ref = NodeRef::<leptos::html::Img>::new();
    let show_initials = move || {
        if fallback.try_update(ImageFallback::fail) == Some(true) {
            log::debug!("profile image {src} failed to load; showing initials");
        }
    };
    let on_error = move |_| show_initials();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(img) = img_ref.get()
            && failed_at_mount(img.complete(), img.natural_width())
        {
            show_initials();
        }
    });

    let placeholder_style = format!(
        "width: 100%; height: 100%; background: {PROFILE_GRADIENT}; display: flex; \
         align-items: center; justify-content: center; font-size: 4rem; font-weight: 700; \
         color: white; border-radius: inherit;"
    );

    view! {
        <div class="profile-frame">
            <img
                src=src
                alt=name
                style=img_style
                node_ref=img_ref
                on:error=on_error
            />
            <Show when=failed>
                <div class="profile-fallback" style=placeholder_style.clone()>
                    {initials(name)}
                </div>
            </Show>
        </div>
    }
}
