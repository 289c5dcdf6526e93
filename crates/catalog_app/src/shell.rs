use std::io::BufRead;

use catalog_core::Genre;
use catalog_engine::CatalogSession;
use catalog_logging::catalog_debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Genre(String),
    More,
    Retry,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };
        match head.to_ascii_lowercase().as_str() {
            "genre" | "g" if !rest.is_empty() => Some(Command::Genre(rest.to_string())),
            "more" | "m" => Some(Command::More),
            "retry" | "r" => Some(Command::Retry),
            "help" | "h" | "?" => Some(Command::Help),
            "quit" | "q" | "exit" => Some(Command::Quit),
            _ => None,
        }
    }
}

pub const HELP: &str = "commands: genre <name> | more | retry | help | quit";

/// Feeds line commands into the session until `quit` or end of input.
pub fn run(session: &CatalogSession, input: impl BufRead) -> std::io::Result<()> {
    println!("{HELP}");
    for line in input.lines() {
        let line = line?;
        match Command::parse(&line) {
            Some(Command::Genre(name)) => session.select_genre(resolve_genre(session, &name)),
            Some(Command::More) => session.request_next_page(),
            Some(Command::Retry) => session.retry(),
            Some(Command::Help) => println!("{HELP}"),
            Some(Command::Quit) => break,
            None if line.trim().is_empty() => {}
            None => {
                catalog_debug!("unrecognised command {:?}", line);
                println!("{HELP}");
            }
        }
    }
    Ok(())
}

/// Matches `name` case-insensitively against the offered genres.
fn resolve_genre(session: &CatalogSession, name: &str) -> Genre {
    session
        .view()
        .genres
        .genres()
        .iter()
        .find(|genre| genre.name.eq_ignore_ascii_case(name))
        .cloned()
        .unwrap_or_else(|| Genre::new(name, 0))
}
