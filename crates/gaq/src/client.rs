//! The analytics component.

use crate::account::AccountId;
use crate::builders::Call;
use crate::command::Command;
use crate::config::{Config, GoogleAnalyticsBuilder, Settings};
use crate::queue::CommandQueue;
use crate::registrar::{ScriptPosition, ScriptRegistrar, SCRIPT_ID};
use crate::render;
use crate::types::{Invocation, Value};
use crate::Error;
use tracing::{debug, info, instrument, warn};

/// Google Analytics snippet builder for one page render.
///
/// Built once per request (or cloned from a configured template), fed
/// commands while the page is assembled, then rendered.
///
/// # Example
///
/// ```rust
/// use gaq::GoogleAnalytics;
///
/// let mut ga = GoogleAnalytics::builder("UA-1234-1").build()?;
///
/// ga.set_custom_var().args(["1", "plan", "gold"]).arg(1).send();
/// ga.record("trackEvent", ["Videos", "Play"]);
///
/// let js = ga.render();
/// assert!(js.contains("_gaq.push(['_setAccount','UA-1234-1']);"));
/// assert!(js.contains("_gaq.push(['_trackPageview']);"));
/// # Ok::<(), gaq::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct GoogleAnalytics {
    config: Config,
    queue: CommandQueue,
}

impl GoogleAnalytics {
    /// Create a new builder with the given account ID.
    pub fn builder(account: impl Into<String>) -> GoogleAnalyticsBuilder {
        GoogleAnalyticsBuilder::new(account)
    }

    /// Create a component from deserialized settings.
    pub fn from_settings(settings: Settings) -> Result<Self, Error> {
        settings.into_builder().build()
    }

    /// Create a new component from config, queueing `_setAccount` when the
    /// account is valid.
    pub(crate) fn from_config(config: Config) -> Self {
        let mut client = Self {
            config,
            queue: CommandQueue::new(),
        };

        if let Some(account) = client.config.account().cloned() {
            client.push(Command::SetAccount, [String::from(account)]);
        }

        client
    }

    /// Get the component configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the validated account, if any.
    pub fn account(&self) -> Option<&AccountId> {
        self.config.account()
    }

    /// Queued invocations, oldest first.
    pub fn invocations(&self) -> &[Invocation] {
        self.queue.as_slice()
    }

    /// Get the number of queued invocations.
    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    /// Check whether `command` has been queued.
    pub fn has_command(&self, command: Command) -> bool {
        self.queue.contains(command)
    }

    // ============================================
    // RECORDING
    // ============================================

    /// Queue a command by name.
    ///
    /// The leading `_` is optional. Returns `false`, queueing nothing, when
    /// the name is not an allow-listed `_gaq` command. Arguments are never
    /// inspected.
    pub fn record<I>(&mut self, name: &str, args: I) -> bool
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        match Command::from_name(name) {
            Some(command) => {
                self.push(command, args);
                true
            }
            None => {
                if self.config.debug_mode() {
                    warn!(command = name, "ignoring unknown _gaq command");
                } else {
                    debug!(command = name, "ignoring unknown _gaq command");
                }
                false
            }
        }
    }

    /// Queue a command.
    pub fn push<I>(&mut self, command: Command, args: I)
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let args = args.into_iter().map(Into::into).collect();
        self.enqueue(Invocation::new(command, args));
    }

    /// Start building a call to `command`.
    pub fn call(&mut self, command: Command) -> Call<'_> {
        Call::new(self, command)
    }

    pub(crate) fn enqueue(&mut self, invocation: Invocation) {
        debug!(
            command = %invocation.command,
            args = invocation.args.len(),
            "queued command"
        );
        self.queue.enqueue(invocation);
    }

    // ============================================
    // OUTPUT
    // ============================================

    /// Render the script body.
    ///
    /// Repeated renders of the same queue give identical output.
    #[instrument(skip(self), fields(pending = self.queue.len()))]
    pub fn render(&self) -> String {
        render::render(self.queue.as_slice(), &self.config.render_options())
    }

    /// Render and deliver the script according to `auto_render`.
    ///
    /// With `auto_render` on, the script is registered with `registrar` under
    /// [`SCRIPT_ID`] for the page head and `None` is returned. Otherwise the
    /// registrar is left alone and the script is returned.
    #[instrument(skip(self, registrar))]
    pub fn emit<R>(&self, registrar: &mut R) -> Option<String>
    where
        R: ScriptRegistrar + ?Sized,
    {
        let script = self.render();

        if self.config.auto_render() {
            info!(id = SCRIPT_ID, "registering analytics script");
            registrar.register_script(SCRIPT_ID, script, ScriptPosition::Head);
            None
        } else {
            Some(script)
        }
    }
}
