//! Command session use case
//!
//! The session resolves user-typed command tokens against the signal store,
//! starting from a persistent scope, and drives the device accordingly.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::command::CommandToken;
use crate::domain::scope::Scope;

use super::ports::{DeviceClient, DeviceError, SignalStore, StoreError};

/// Errors from `execute`.
///
/// Unknown commands are not errors; these are environment faults only.
#[derive(Debug, Error)]
pub enum ExecuteError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Device(#[from] DeviceError),
}

/// Errors from `save`
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("No data received from device")]
    NoData,

    #[error("A signal name is required")]
    EmptyPath,

    #[error(transparent)]
    Device(#[from] DeviceError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A signal transmission performed for one token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentSignal {
    /// Leaf file that was sent
    pub path: PathBuf,
    /// How many times it was sent
    pub times: u32,
}

/// What `execute` did for a single token.
///
/// A leaf match and a directory match can both fire for the same token when
/// a signal and a sub-namespace share a name; neither means "not found".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    /// The raw token as typed
    pub token: String,
    /// The signal sent, if a leaf matched
    pub sent: Option<SentSignal>,
    /// The new scope segments, if a directory matched
    pub entered: Option<Vec<String>>,
}

impl CommandOutcome {
    fn not_found(token: &str) -> Self {
        Self {
            token: token.to_string(),
            sent: None,
            entered: None,
        }
    }

    /// Whether the token matched anything in the scope chain
    pub fn matched(&self) -> bool {
        self.sent.is_some() || self.entered.is_some()
    }
}

/// Scoped command resolution over a signal store and a device.
///
/// Holds the current scope: commands resolve against the scope directory
/// first and fall back through its ancestors up to the store root. Matching
/// a sub-namespace moves the scope there, and the caller persists the final
/// scope for the next run.
pub struct CommandSession<S, C>
where
    S: SignalStore,
    C: DeviceClient,
{
    store: S,
    client: C,
    scope: Scope,
}

impl<S, C> CommandSession<S, C>
where
    S: SignalStore,
    C: DeviceClient,
{
    /// Create a session scoped at the store root
    pub fn new(store: S, client: C) -> Self {
        let scope = Scope::new(store.root());
        Self {
            store,
            client,
            scope,
        }
    }

    /// Current scope as segments relative to the store root
    pub fn scope(&self) -> Vec<String> {
        self.scope.segments()
    }

    /// Reposition the scope, typically from persisted settings.
    ///
    /// The segments are trusted without an existence check; if the directory
    /// is gone, resolution falls back through whichever ancestors remain.
    pub fn set_scope(&mut self, segments: &[String]) {
        self.scope.set_segments(segments);
    }

    /// Resolve and run each token, left to right.
    ///
    /// Per token: strip an optional `*<N>` repeat suffix, then walk the
    /// scope chain. A leaf blob is sent N times as independent submissions;
    /// a sub-namespace becomes the new scope and ends the walk (also ending
    /// it for a leaf matched at the same level); a leaf-only match ends the
    /// walk without changing scope. A token matching nothing yields a
    /// not-found outcome and resolution continues with the next token, so
    /// scope changes from earlier tokens affect later ones.
    pub async fn execute(&mut self, commands: &[String]) -> Result<Vec<CommandOutcome>, ExecuteError> {
        let mut outcomes = Vec::with_capacity(commands.len());

        for raw in commands {
            let token = CommandToken::parse(raw);
            let mut outcome = CommandOutcome::not_found(raw);

            for dir in self.scope.chain() {
                let mut leaf_matched = false;

                if let Some(leaf) = self.store.find_leaf(&dir, token.base()) {
                    let signal = self.store.read(&leaf).await?;
                    for _ in 0..token.repeat() {
                        self.client.send(&signal).await?;
                    }
                    outcome.sent = Some(SentSignal {
                        path: leaf,
                        times: token.repeat(),
                    });
                    leaf_matched = true;
                }

                if let Some(subdir) = self.store.find_dir(&dir, token.base()) {
                    self.scope.enter(subdir);
                    outcome.entered = Some(self.scope.segments());
                    break;
                }

                if leaf_matched {
                    break;
                }
            }

            outcomes.push(outcome);
        }

        Ok(outcomes)
    }

    /// Capture the device's latest signal and store it under `segments`.
    ///
    /// Always resolves from the store root with the literal path given; the
    /// current scope is neither consulted nor changed. Nothing is written
    /// when the device has no signal to hand out.
    pub async fn save(&self, segments: &[String]) -> Result<PathBuf, SaveError> {
        let Some((name, dir_segments)) = segments.split_last() else {
            return Err(SaveError::EmptyPath);
        };

        let signal = self.client.fetch_latest().await?;
        if signal.is_empty() {
            return Err(SaveError::NoData);
        }

        let path = self.store.write(dir_segments, name, &signal).await?;
        Ok(path)
    }
}
