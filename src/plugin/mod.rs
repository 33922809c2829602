//! Command registration.
//!
//! The host's extension loader calls [`plugin_init`] once per process; the
//! registry then owns the command for the process lifetime. No teardown.

use tracing::error;

use crate::error::{Result, StackCharsError};
use crate::host::interaction::FormInput;
use crate::host::view::AnalysisView;

pub mod reveal_chars;

pub use reveal_chars::{annotate_range, RevealStackChars};

/// A user-invoked command operating on an address range within a view.
pub trait RangeCommand<V: AnalysisView> {
    /// Name shown in the host's command palette
    fn name(&self) -> &'static str;

    /// One-line description shown next to the name
    fn description(&self) -> &'static str;

    /// Execute against the given view, prompting through `form`.
    fn run(&self, view: &mut V, form: &mut dyn FormInput) -> Result<()>;
}

/// Ordered set of registered range commands
pub struct CommandRegistry<V: AnalysisView> {
    commands: Vec<Box<dyn RangeCommand<V>>>,
}

impl<V: AnalysisView> CommandRegistry<V> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Register a command. Registration order is palette order.
    pub fn register(&mut self, command: Box<dyn RangeCommand<V>>) {
        self.commands.push(command);
    }

    /// Look up a command by its palette name.
    pub fn find(&self, name: &str) -> Option<&dyn RangeCommand<V>> {
        self.commands
            .iter()
            .find(|cmd| cmd.name() == name)
            .map(|cmd| cmd.as_ref())
    }

    /// Registered command names, in palette order.
    pub fn names(&self) -> Vec<&'static str> {
        self.commands.iter().map(|cmd| cmd.name()).collect()
    }

    /// Run a command by name.
    pub fn run(&self, name: &str, view: &mut V, form: &mut dyn FormInput) -> Result<()> {
        let command = self
            .find(name)
            .ok_or_else(|| StackCharsError::UnknownCommand(name.to_string()))?;
        command.run(view, form)
    }

    /// Run a command the way the host's invocation harness does: failures
    /// that escape the command are logged, nothing is returned.
    pub fn invoke(&self, name: &str, view: &mut V, form: &mut dyn FormInput) {
        if let Err(err) = self.run(name, view, form) {
            error!(command = name, error = %err, "command failed");
        }
    }
}

impl<V: AnalysisView> Default for CommandRegistry<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Plugin entry point: register every command this crate provides.
///
/// Invoked once by the host's extension loader.
pub fn plugin_init<V: AnalysisView>(registry: &mut CommandRegistry<V>) {
    registry.register(Box::new(RevealStackChars));
}
