use std::fmt::Write;

use catalog_core::{AppViewModel, GenresUiState, MoviesUiState};

/// Renders a view as plain text for the terminal.
pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();

    let genres: Vec<String> = view
        .genres
        .genres()
        .iter()
        .map(|genre| {
            let marker = if genre.same_selection(&view.selected_genre) {
                "*"
            } else {
                ""
            };
            format!("{marker}{} ({})", genre.name, genre.count)
        })
        .collect();
    let _ = writeln!(out, "Genres: {}", genres.join(" | "));
    if matches!(view.genres, GenresUiState::Error { .. }) {
        let _ = writeln!(out, "  (genre list unavailable, showing defaults)");
    }

    match &view.movies {
        MoviesUiState::Loading => {
            let _ = writeln!(out, "Loading...");
        }
        MoviesUiState::Error { message } => {
            let _ = writeln!(out, "{message}");
        }
        MoviesUiState::Content {
            rows,
            loading_more,
            has_more,
        } => {
            for row in rows {
                let _ = writeln!(
                    out,
                    "  #{:<6} {} ({}) [{}]",
                    row.id,
                    row.title,
                    row.release_date,
                    row.genres.join(", ")
                );
            }
            if *loading_more {
                let _ = writeln!(out, "  ... loading more");
            } else if !*has_more {
                let _ = writeln!(out, "  (end of list)");
            }
        }
    }
    out
}
