use time::Month;

/// One line typed at the dashboard prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Month(Month),
    Search(String),
    ClearSearch,
    Next,
    Previous,
    Refresh,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  month <1-12>    select month
  search <text>   filter by title, description or price
  clear           clear the search
  next | prev     change page
  refresh         fetch again
  quit";

impl std::str::FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((line, ""));
        match word.to_ascii_lowercase().as_str() {
            "month" | "m" => rest
                .parse::<u8>()
                .ok()
                .and_then(|n| Month::try_from(n).ok())
                .map(Command::Month)
                .ok_or_else(|| format!("month must be 1-12, got {rest:?}")),
            "search" | "s" => Ok(Command::Search(rest.to_string())),
            "clear" => Ok(Command::ClearSearch),
            "next" | "n" => Ok(Command::Next),
            "prev" | "previous" | "p" => Ok(Command::Previous),
            "refresh" | "r" | "" => Ok(Command::Refresh),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(format!("unknown command {other:?}, type help")),
        }
    }
}
