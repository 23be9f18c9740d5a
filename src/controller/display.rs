//! Display state and the UI surfaces the controller writes to.
//!
//! The controller never looks these up ambiently; both surfaces are
//! injected, which keeps it testable without a document tree.

use crate::controller::render::{render_error, render_pokemon};
use crate::models::{OutputFormat, Pokemon};
use tokio::sync::watch;

/// What the output region currently shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DisplayState {
    /// Nothing has been displayed yet
    #[default]
    Empty,
    /// A successful lookup
    Rendered(Pokemon),
    /// A failed lookup, with the message shown to the user
    Errored(String),
}

impl DisplayState {
    /// Full region contents for this state.
    pub fn render(&self, format: OutputFormat) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Rendered(pokemon) => render_pokemon(pokemon, format),
            Self::Errored(message) => render_error(message, format),
        }
    }

    pub fn is_errored(&self) -> bool {
        matches!(self, Self::Errored(_))
    }
}

/// The region lookups are rendered into.
pub trait OutputRegion: Send + Sync {
    /// Replace the whole contents in one step.
    fn replace(&self, contents: String);

    /// Current contents.
    fn contents(&self) -> String;
}

/// The text field the identifier is typed into.
pub trait InputField: Send + Sync {
    fn value(&self) -> String;

    fn set_value(&self, value: String);

    fn clear(&self) {
        self.set_value(String::new());
    }
}

/// In-memory output region.
///
/// Backed by a watch channel so a front end can subscribe to changes.
#[derive(Debug)]
pub struct MemoryRegion {
    tx: watch::Sender<String>,
}

impl MemoryRegion {
    pub fn new() -> Self {
        Self {
            tx: watch::Sender::new(String::new()),
        }
    }

    /// Receiver notified on every replacement.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.tx.subscribe()
    }
}

impl Default for MemoryRegion {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputRegion for MemoryRegion {
    fn replace(&self, contents: String) {
        self.tx.send_replace(contents);
    }

    fn contents(&self) -> String {
        self.tx.borrow().clone()
    }
}

/// In-memory input field.
#[derive(Debug)]
pub struct MemoryInput {
    tx: watch::Sender<String>,
}

impl MemoryInput {
    pub fn new() -> Self {
        Self {
            tx: watch::Sender::new(String::new()),
        }
    }
}

impl Default for MemoryInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputField for MemoryInput {
    fn value(&self) -> String {
        self.tx.borrow().clone()
    }

    fn set_value(&self, value: String) {
        self.tx.send_replace(value);
    }
}
