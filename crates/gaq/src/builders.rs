//! Call builder for the fluent API.

use crate::command::Command;
use crate::types::{Invocation, Value};
use crate::GoogleAnalytics;

/// A command call being assembled. Nothing is queued until [`Call::send`].
///
/// ```
/// let mut ga = gaq::GoogleAnalytics::builder("UA-1234-1").build()?;
/// ga.track_event()
///     .arg("Videos")
///     .arg("Play")
///     .arg("intro.mp4")
///     .send();
/// assert_eq!(ga.pending_count(), 2); // _setAccount + _trackEvent
/// # Ok::<(), gaq::Error>(())
/// ```
#[must_use = "a call is only queued once `send` is called"]
#[derive(Debug)]
pub struct Call<'a> {
    command: Command,
    args: Vec<Value>,
    client: &'a mut GoogleAnalytics,
}

impl<'a> Call<'a> {
    pub(crate) fn new(client: &'a mut GoogleAnalytics, command: Command) -> Self {
        Self {
            command,
            args: Vec::new(),
            client,
        }
    }

    /// Append one positional argument.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.args.push(value.into());
        self
    }

    /// Append several positional arguments.
    pub fn args<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.args.extend(values.into_iter().map(Into::into));
        self
    }

    /// The command being called.
    pub fn command(&self) -> Command {
        self.command
    }

    /// Queue the call.
    pub fn send(self) {
        self.client.enqueue(Invocation::new(self.command, self.args));
    }
}
