use chrono::Utc;
use tokio::sync::mpsc;
use tracing::{error, info};

use crate::history::{HistoryStore, TranslationRecord};
use crate::translate::{MyMemoryTranslate, TargetLanguage, TranslationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    Idle,
    InFlight,
    Completed,
    Failed,
}

#[derive(Debug)]
struct Completion {
    original_text: String,
    result: Result<String, TranslationError>,
}

/// Owns everything the front-end renders. Requests run on a spawned task and
/// report back over a channel, so all mutation happens here.
pub struct Session {
    translator: MyMemoryTranslate,
    history: HistoryStore,
    state: RequestState,
    translated_text: String,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,
}

impl Session {
    pub fn new(translator: MyMemoryTranslate) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            translator,
            history: HistoryStore::new(),
            state: RequestState::Idle,
            translated_text: String::new(),
            completions_tx,
            completions_rx,
        }
    }

    pub fn state(&self) -> RequestState {
        self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state == RequestState::InFlight
    }

    pub fn translated_text(&self) -> &str {
        &self.translated_text
    }

    pub fn history_snapshot(&self) -> &[TranslationRecord] {
        self.history.all()
    }

    /// Returns to `Idle` once a completed or failed outcome has been seen.
    pub fn acknowledge(&mut self) {
        if matches!(self.state, RequestState::Completed | RequestState::Failed) {
            self.state = RequestState::Idle;
        }
    }

    /// Starts a translation. Must be called from within a tokio runtime.
    pub fn submit(&mut self, text: &str, to: TargetLanguage) -> Result<(), TranslationError> {
        if self.is_busy() {
            return Err(TranslationError::Busy);
        }
        if text.trim().is_empty() {
            return Err(TranslationError::EmptyInput);
        }
        self.acknowledge();

        self.state = RequestState::InFlight;
        let translator = self.translator.clone();
        let completions_tx = self.completions_tx.clone();
        let original_text = text.to_string();
        tokio::spawn(async move {
            let result = translator.translate(&original_text, to).await;
            // the receiver lives as long as the session
            let _ = completions_tx.send(Completion {
                original_text,
                result,
            });
        });
        Ok(())
    }

    /// Waits for the in-flight request to settle. `None` if nothing is in flight.
    pub async fn next_completion(&mut self) -> Option<Result<String, TranslationError>> {
        if !self.is_busy() {
            return None;
        }
        let completion = self.completions_rx.recv().await?;
        Some(self.settle(completion))
    }

    pub async fn translate(
        &mut self,
        text: &str,
        to: TargetLanguage,
    ) -> Result<String, TranslationError> {
        self.submit(text, to)?;
        match self.next_completion().await {
            Some(result) => result,
            None => Err(TranslationError::Busy),
        }
    }

    fn settle(&mut self, completion: Completion) -> Result<String, TranslationError> {
        match completion.result {
            Ok(translated) => {
                self.state = RequestState::Completed;
                let record =
                    TranslationRecord::new(&completion.original_text, &translated, Utc::now());
                info!(
                    "Translated {:?} -> {:?} ({})",
                    record.original_text(),
                    record.translated_text(),
                    record.id()
                );
                self.history.append(record);
                self.translated_text = translated.clone();
                Ok(translated)
            }
            Err(e) => {
                self.state = RequestState::Failed;
                error!("Failed to translate {:?}: {:?}", completion.original_text, e);
                Err(e)
            }
        }
    }
}
