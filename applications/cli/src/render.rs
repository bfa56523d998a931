//! Plain-text rendering of controller state.

use ammora_state::{AlbumDetailState, AlbumListState, Failure, ViewState};
use std::io::{self, Write};

pub fn render_list<W: Write>(out: &mut W, state: &AlbumListState) -> io::Result<()> {
    match state {
        ViewState::Idle => Ok(()),
        ViewState::Loading => writeln!(out, "Loading albums..."),
        ViewState::Loaded(albums) if albums.is_empty() => {
            writeln!(out, "No albums available yet.")
        }
        ViewState::Loaded(albums) => {
            writeln!(out, "Albums")?;
            for (index, album) in albums.iter().enumerate() {
                writeln!(
                    out,
                    "{:>3}. {} - {}  [{}]",
                    index + 1,
                    album.title,
                    album.artist,
                    album.id
                )?;
            }
            Ok(())
        }
        ViewState::Failed(failure) => render_failure(out, failure),
    }
}

pub fn render_detail<W: Write>(out: &mut W, state: &AlbumDetailState) -> io::Result<()> {
    match state {
        ViewState::Idle => Ok(()),
        ViewState::Loading => writeln!(out, "Loading album..."),
        ViewState::Loaded(album) => {
            writeln!(out, "{}", album.title)?;
            writeln!(out, "by {}", album.artist)?;
            writeln!(out)?;
            if album.description.trim().is_empty() {
                writeln!(out, "No description.")?;
            } else {
                writeln!(out, "{}", album.description)?;
            }
            if album.has_artwork() {
                writeln!(out, "Artwork: {}", album.image)?;
            }
            Ok(())
        }
        ViewState::Failed(failure) => render_failure(out, failure),
    }
}

fn render_failure<W: Write>(out: &mut W, failure: &Failure) -> io::Result<()> {
    writeln!(out, "{}", failure)
}
