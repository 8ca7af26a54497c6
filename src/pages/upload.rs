//! Track upload and similarity results page.
//!
//! Submits a track reference for analysis, renders the similar-song list in
//! the server's order, and forwards thumbs up/down votes as best-effort
//! feedback.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::song_item::SongItem;
#[cfg(feature = "hydrate")]
use crate::net::types::FeedbackRequest;
use crate::net::types::{AnalyzeRequest, AnalyzeResponse};
use crate::state::session::use_session;
use crate::util::auth::install_unauth_redirect;

/// Require all three fields before submitting.
fn validate_track_input(
    url: &str,
    title: &str,
    artist: &str,
) -> Result<(String, String, String), &'static str> {
    let url = url.trim();
    let title = title.trim();
    let artist = artist.trim();
    if url.is_empty() || title.is_empty() || artist.is_empty() {
        return Err("Enter a track URL, title, and artist.");
    }
    Ok((url.to_owned(), title.to_owned(), artist.to_owned()))
}

/// Build the analyze request body. Tracks are referenced by platform URL;
/// YouTube is the only supported source today.
fn analyze_request(url: String, title: String, artist_name: String, added_by: i64) -> AnalyzeRequest {
    AnalyzeRequest {
        url,
        title,
        artist_name,
        source_platform: "youtube".to_owned(),
        added_by,
    }
}

/// Upload page — redirects to the landing page when not authenticated.
#[component]
pub fn UploadPage() -> impl IntoView {
    let session = use_session();
    install_unauth_redirect(session, use_navigate());

    let url = RwSignal::new(String::new());
    let title = RwSignal::new(String::new());
    let artist = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let result = RwSignal::new(None::<AnalyzeResponse>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get() {
            return;
        }
        let (url_value, title_value, artist_value) =
            match validate_track_input(&url.get(), &title.get(), &artist.get()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
        let added_by = session.user().map_or(0, |user| user.id);
        let request = analyze_request(url_value, title_value, artist_value, added_by);
        loading.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::analyze(&request).await {
                Ok(response) => result.set(Some(response)),
                Err(message) => error.set(message),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    let on_reset = move |_| {
        result.set(None);
        error.set(String::new());
    };

    // Fire-and-forget: feedback rides on an already-successful analysis, so
    // failures are logged and never shown.
    let on_vote = Callback::new(move |(suggested_song_id, vote): (i64, i32)| {
        #[cfg(feature = "hydrate")]
        {
            let Some(token) = session.token() else {
                log::error!("no token, cannot send feedback");
                return;
            };
            let Some(query_song_id) = result.get_untracked().map(|r| r.song.id) else {
                return;
            };
            let request = FeedbackRequest {
                query_song_id,
                suggested_song_id,
                vote,
            };
            leptos::task::spawn_local(async move {
                if let Err(message) = crate::net::api::send_feedback(&token, request).await {
                    log::error!("failed to send feedback: {message}");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (suggested_song_id, vote, session, result);
    });

    view! {
        <div class="upload-page">
            <header class="upload-page__header">
                <h1>"Find Your Vibe"</h1>
                <p>"Discover similar music powered by AI"</p>
            </header>

            <Show when=move || !error.get().is_empty() && !loading.get()>
                <div class="auth-error">{move || error.get()}</div>
            </Show>

            <Show when=move || loading.get()>
                <div class="upload-page__loading">
                    <h2>"Extracting..."</h2>
                    <p>"Analyzing your track's audio features"</p>
                </div>
            </Show>

            <Show when=move || !loading.get() && result.get().is_none()>
                <form class="upload-form" on:submit=on_submit>
                    <h2>"Upload Seed Track"</h2>
                    <label class="auth-label">
                        "Track URL:"
                        <input
                            class="auth-input"
                            type="url"
                            required=true
                            placeholder="https://youtube.com/watch?v=..."
                            prop:value=move || url.get()
                            on:input=move |ev| url.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-label">
                        "Title:"
                        <input
                            class="auth-input"
                            type="text"
                            required=true
                            placeholder="Enter song title"
                            prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-label">
                        "Artist:"
                        <input
                            class="auth-input"
                            type="text"
                            required=true
                            placeholder="Enter artist name"
                            prop:value=move || artist.get()
                            on:input=move |ev| artist.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || loading.get()>
                        "Find Similar Songs"
                    </button>
                </form>
            </Show>

            {move || {
                result
                    .get()
                    .map(|response| {
                        view! {
                            <div class="upload-results">
                                <div class="upload-results__seed">
                                    <div class="upload-results__seed-header">
                                        <h2>"Your Track"</h2>
                                        <button class="btn" type="button" on:click=on_reset>
                                            "Back"
                                        </button>
                                    </div>
                                    <h3>{response.song.title.clone()}</h3>
                                    <p>{response.song.artist_name.clone()}</p>
                                    <span class="upload-results__platform">
                                        {response.song.source_platform.clone()}
                                    </span>
                                </div>

                                <div class="upload-results__matches">
                                    <h2>"Matching Results"</h2>
                                    {if response.similar_songs.is_empty() {
                                        view! { <p class="upload-results__empty">"No similar songs found"</p> }
                                            .into_any()
                                    } else {
                                        response
                                            .similar_songs
                                            .iter()
                                            .map(|song| {
                                                view! { <SongItem song=song.clone() on_vote=on_vote/> }
                                            })
                                            .collect::<Vec<_>>()
                                            .into_any()
                                    }}
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
