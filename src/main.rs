use std::future::Future;
use std::io::Write;
use std::pin::Pin;

use askama::Template;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

use crate::session::{RequestState, Session};
use crate::translate::{MyMemoryTranslate, TargetLanguage, TranslationError};
use crate::views::SavedTranslations;

mod envs;
mod history;
mod session;
mod translate;
mod views;

#[derive(Debug, PartialEq)]
enum Command<'a> {
    Translate(&'a str),
    Language(&'a str),
    History,
    Quit,
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Self {
        let trimmed = line.trim();
        let (word, rest) = trimmed
            .split_once(char::is_whitespace)
            .map(|(word, rest)| (word, rest.trim()))
            .unwrap_or((trimmed, ""));
        match (word, rest) {
            (":quit" | ":q", "") => Command::Quit,
            (":history" | ":h", "") => Command::History,
            (":lang", choice) => Command::Language(choice),
            _ => Command::Translate(line),
        }
    }
}

/// Runs `work` unless `interrupt` fires first. The interrupt future is reused
/// across calls, so a signal is never missed between them.
async fn until_interrupted<T, I>(
    work: impl Future<Output = T>,
    interrupt: Pin<&mut I>,
) -> Option<T>
where
    I: Future,
{
    tokio::select! {
        output = work => Some(output),
        _ = interrupt => None,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // logs go to stderr so they don't interleave with translations
    let (writer, _guard) = tracing_appender::non_blocking(std::io::stderr());
    let subscriber = FmtSubscriber::builder()
        .with_max_level(*envs::LOG_LEVEL)
        .with_writer(writer)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let translator = MyMemoryTranslate::new(&envs::API_URL);
    let mut session = Session::new(translator);
    let mut language = *envs::LANGUAGE;
    info!("Translate Me started, target {}", language);

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("[en -> {}] ", language.code());
        std::io::stdout().flush()?;

        let line = match until_interrupted(lines.next_line(), ctrl_c.as_mut()).await {
            Some(line) => line?,
            None => {
                info!("Interrupted");
                break;
            }
        };
        let Some(line) = line else {
            break;
        };

        match Command::parse(&line) {
            Command::Quit => break,
            Command::History => {
                let view = SavedTranslations {
                    records: session.history_snapshot(),
                };
                println!("{}", view.render()?);
            }
            Command::Language(choice) => {
                language = TargetLanguage::from_choice(choice);
                println!("Translating to {}", language);
            }
            Command::Translate(text) => {
                let Some(result) =
                    until_interrupted(session.translate(text, language), ctrl_c.as_mut()).await
                else {
                    info!("Interrupted while translating");
                    break;
                };
                match result {
                    Ok(_) => {}
                    Err(TranslationError::EmptyInput) => continue,
                    Err(e) if session.state() == RequestState::Failed => {
                        println!("Translation failed: {}", e);
                    }
                    Err(e) => {
                        warn!("Not submitted: {}", e);
                        continue;
                    }
                }
                if !session.translated_text().is_empty() {
                    println!("{}", session.translated_text());
                }
                session.acknowledge();
            }
        }
    }

    info!("Translate Me stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::future::{pending, ready};

    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(Command::parse(":q"), Command::Quit);
        assert_eq!(Command::parse(" :history "), Command::History);
        assert_eq!(Command::parse(":lang es"), Command::Language("es"));
        assert_eq!(Command::parse(":lang"), Command::Language(""));
    }

    #[test]
    fn longer_words_are_not_commands() {
        assert_eq!(Command::parse(":language es"), Command::Translate(":language es"));
        assert_eq!(Command::parse(":langoustine"), Command::Translate(":langoustine"));
        assert_eq!(Command::parse(":quit now"), Command::Translate(":quit now"));
    }

    #[test]
    fn other_lines_are_translated_verbatim() {
        assert_eq!(Command::parse(" Hello, world "), Command::Translate(" Hello, world "));
    }

    #[tokio::test]
    async fn interrupt_cancels_stalled_work() {
        let interrupt = ready(());
        tokio::pin!(interrupt);

        let output = until_interrupted(pending::<()>(), interrupt.as_mut()).await;

        assert!(output.is_none());
    }

    #[tokio::test]
    async fn pending_interrupt_survives_across_calls() {
        let interrupt = pending::<()>();
        tokio::pin!(interrupt);

        for n in 0..3 {
            let output = until_interrupted(ready(n), interrupt.as_mut()).await;
            assert_eq!(output, Some(n));
        }
    }
}
