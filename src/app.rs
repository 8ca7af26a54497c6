//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Redirect, Route, Router, Routes};

use crate::pages::{
    auth_callback::AuthCallbackPage, home::HomePage, landing::LandingPage, login::LoginPage,
    register::RegisterPage, select_user_type::SelectUserTypePage, upload::UploadPage,
};
use crate::state::session::Session;

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
/// Restores any persisted session before the router evaluates route guards,
/// provides it as context, and sets up client-side routing. Unmatched paths
/// redirect to the public landing page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::restore();
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/jetswitch.css"/>
        <Title text="JetSwitch"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path="/"/> }>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("home") view=HomePage/>
                <Route path=StaticSegment("upload") view=UploadPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route
                    path=(StaticSegment("auth"), StaticSegment("callback"))
                    view=AuthCallbackPage
                />
                <Route path=StaticSegment("select-user-type") view=SelectUserTypePage/>
            </Routes>
        </Router>
    }
}
