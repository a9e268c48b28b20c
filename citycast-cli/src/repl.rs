//! Line-oriented stand-in for the search bar.
//!
//! Every plain line is an input-change event. The input is recorded before the
//! next line is read; only the catalog fetch runs on its own task, so slow
//! responses can overlap exactly as keystrokes do in a browser.

use std::sync::Arc;

use citycast_core::WeatherWidget;
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    task::JoinHandle,
};
use tracing::debug;

const HELP: &str = "\
Type a city prefix to see suggestions.
  :pick <n>   use suggestion n
  :submit     look up the weather for the current input
  :quit       exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Type(String),
    Pick(usize),
    Submit,
    Quit,
    Invalid(String),
}

impl ReplCommand {
    pub fn parse(line: &str) -> Self {
        let Some(rest) = line.strip_prefix(':') else {
            return ReplCommand::Type(line.to_string());
        };

        let mut parts = rest.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some("submit"), None, None) => ReplCommand::Submit,
            (Some("quit" | "q"), None, None) => ReplCommand::Quit,
            (Some("pick"), Some(n), None) => match n.parse::<usize>() {
                Ok(n) if n > 0 => ReplCommand::Pick(n),
                _ => ReplCommand::Invalid(format!("not a suggestion number: {n}")),
            },
            _ => ReplCommand::Invalid(format!("unknown command: {line}")),
        }
    }
}

pub async fn run(widget: Arc<WeatherWidget>) -> anyhow::Result<()> {
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match ReplCommand::parse(&line) {
            ReplCommand::Type(text) => {
                keystroke(&widget, &text).await;
            }
            ReplCommand::Pick(n) => match pick_nth(&widget, n).await {
                Some(city) => println!("> {city}"),
                None => println!("No suggestion #{n}."),
            },
            ReplCommand::Submit => {
                if let Err(err) = widget.submit().await {
                    debug!(error = %err, "submission produced no weather");
                }
            }
            ReplCommand::Quit => break,
            ReplCommand::Invalid(msg) => println!("{msg}\n{HELP}"),
        }
    }

    Ok(())
}

/// Record `text` as the current input, then fetch the catalog in the background.
async fn keystroke(widget: &Arc<WeatherWidget>, text: &str) -> Option<JoinHandle<()>> {
    let query = widget.begin_input(text).await?;
    let widget = Arc::clone(widget);
    Some(tokio::spawn(async move { widget.finish_query(query).await }))
}

/// Pick the `n`th (1-based) visible suggestion. `None` when nothing was applied.
async fn pick_nth(widget: &WeatherWidget, n: usize) -> Option<String> {
    let city = widget.suggestions().await.into_iter().nth(n.checked_sub(1)?)?;
    widget.pick_suggestion(&city).await.then_some(city)
}
