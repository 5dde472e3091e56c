//! Root application component and server-rendered HTML shell.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, MetaTags, Stylesheet, Title, provide_meta_context};

use crate::content::PROFILE;
use crate::pages::home::HomePage;
use crate::state::contact::ContactFormState;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts and renders the single portfolio page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let contact = RwSignal::new(ContactFormState::default());

    provide_context(ui);
    provide_context(contact);

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Link
            rel="stylesheet"
            href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css"
        />
        <Title text=format!("{} | {}", PROFILE.name, PROFILE.role)/>
        <Meta name="description" content=PROFILE.tagline/>

        <HomePage/>
    }
}
