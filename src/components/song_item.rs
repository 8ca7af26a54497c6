//! One similar-song row in the results list.

#[cfg(test)]
#[path = "song_item_test.rs"]
mod song_item_test;

use leptos::prelude::*;

use crate::net::api::{VOTE_DOWN, VOTE_UP};
use crate::net::types::SimilarSong;

/// Similarity score rendered as a whole percentage.
fn match_percent(score: f64) -> String {
    format!("{:.0}% match", score * 100.0)
}

/// Song row with inline audio playback and thumbs up/down voting.
/// `on_vote` receives the song id and the vote value.
#[component]
pub fn SongItem(song: SimilarSong, on_vote: Callback<(i64, i32)>) -> impl IntoView {
    let song_id = song.id;

    view! {
        <div class="song-item">
            <div class="song-item__meta">
                <h3 class="song-item__title">{song.title.clone()}</h3>
                <p class="song-item__artist">{song.artist_name.clone()}</p>
                <span class="song-item__score">{match_percent(song.score)}</span>
            </div>
            {song
                .url
                .clone()
                .map(|url| view! { <audio class="song-item__audio" controls=true src=url></audio> })}
            <div class="song-item__votes">
                <button
                    class="song-item__vote"
                    type="button"
                    title="More like this"
                    on:click=move |_| on_vote.run((song_id, VOTE_UP))
                >
                    "+"
                </button>
                <button
                    class="song-item__vote"
                    type="button"
                    title="Less like this"
                    on:click=move |_| on_vote.run((song_id, VOTE_DOWN))
                >
                    "-"
                </button>
            </div>
        </div>
    }
}
