//! Component configuration.

use crate::account::AccountId;
use crate::render::RenderOptions;
use crate::Error;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Default tracker prefix (the unnamed default tracker).
pub const DEFAULT_PREFIX: &str = "";

/// Default for registering the script instead of returning it.
pub const DEFAULT_AUTO_RENDER: bool = false;

/// Default for appending `_trackPageview` when none was queued.
pub const DEFAULT_AUTO_PAGEVIEW: bool = true;

/// Default for emitting the `ga.js` loader bootstrap.
pub const DEFAULT_INCLUDE_LOADER: bool = true;

/// Default for loading `ga_debug.js`.
pub const DEFAULT_DEBUG_MODE: bool = false;

/// What to do with an account ID that fails validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountPolicy {
    /// Log a warning and render without `_setAccount`.
    #[default]
    Warn,
    /// Fail the build with [`Error::InvalidAccount`].
    Reject,
}

/// Validated component configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) account: Option<AccountId>,
    pub(crate) prefix: String,
    pub(crate) auto_render: bool,
    pub(crate) auto_pageview: bool,
    pub(crate) include_loader: bool,
    pub(crate) debug_mode: bool,
    pub(crate) account_policy: AccountPolicy,
}

impl Config {
    /// Get the validated account, if the configured one was valid.
    pub fn account(&self) -> Option<&AccountId> {
        self.account.as_ref()
    }

    /// Get the tracker prefix, as configured.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Check whether the script is registered instead of returned.
    pub fn auto_render(&self) -> bool {
        self.auto_render
    }

    /// Check whether `_trackPageview` is added when none was queued.
    pub fn auto_pageview(&self) -> bool {
        self.auto_pageview
    }

    /// Check whether the loader bootstrap is emitted.
    pub fn include_loader(&self) -> bool {
        self.include_loader
    }

    /// Check whether `ga_debug.js` is loaded.
    pub fn debug_mode(&self) -> bool {
        self.debug_mode
    }

    /// Get the invalid-account policy.
    pub fn account_policy(&self) -> AccountPolicy {
        self.account_policy
    }

    /// Options handed to the renderer.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            prefix: self.prefix.clone(),
            auto_pageview: self.auto_pageview,
            include_loader: self.include_loader,
            debug_mode: self.debug_mode,
        }
    }
}

/// Builder for the analytics component.
#[derive(Debug)]
pub struct GoogleAnalyticsBuilder {
    account: String,
    prefix: Option<String>,
    auto_render: Option<bool>,
    auto_pageview: Option<bool>,
    include_loader: Option<bool>,
    debug_mode: Option<bool>,
    account_policy: Option<AccountPolicy>,
}

impl GoogleAnalyticsBuilder {
    /// Create a new builder with the given account ID.
    pub fn new(account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            prefix: None,
            auto_render: None,
            auto_pageview: None,
            include_loader: None,
            debug_mode: None,
            account_policy: None,
        }
    }

    /// Set the tracker name prefix (e.g. `t2` for `_gat._createTracker(..., 't2')`).
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Register the script through a [`ScriptRegistrar`](crate::ScriptRegistrar)
    /// instead of returning it.
    pub fn auto_render(mut self, enabled: bool) -> Self {
        self.auto_render = Some(enabled);
        self
    }

    /// Append `_trackPageview` at render time when none was queued.
    pub fn auto_pageview(mut self, enabled: bool) -> Self {
        self.auto_pageview = Some(enabled);
        self
    }

    /// Emit the loader bootstrap.
    pub fn include_loader(mut self, enabled: bool) -> Self {
        self.include_loader = Some(enabled);
        self
    }

    /// Load the debug build of `ga.js`.
    pub fn debug_mode(mut self, enabled: bool) -> Self {
        self.debug_mode = Some(enabled);
        self
    }

    /// Choose how an invalid account ID is handled.
    pub fn account_policy(mut self, policy: AccountPolicy) -> Self {
        self.account_policy = Some(policy);
        self
    }

    /// Build the configuration.
    pub(crate) fn build_config(self) -> Result<Config, Error> {
        let prefix = self.prefix.unwrap_or_else(|| DEFAULT_PREFIX.into());
        if prefix.contains(['\'', '\\']) {
            return Err(Error::Config(format!(
                "prefix {prefix:?} must not contain quotes or backslashes"
            )));
        }

        let account_policy = self.account_policy.unwrap_or_default();
        let account = match AccountId::parse(&self.account) {
            Some(id) => Some(id),
            None if account_policy == AccountPolicy::Reject => {
                return Err(Error::InvalidAccount(self.account));
            }
            None => {
                warn!(account = %self.account, "invalid Google Analytics account ID");
                None
            }
        };

        Ok(Config {
            account,
            prefix,
            auto_render: self.auto_render.unwrap_or(DEFAULT_AUTO_RENDER),
            auto_pageview: self.auto_pageview.unwrap_or(DEFAULT_AUTO_PAGEVIEW),
            include_loader: self.include_loader.unwrap_or(DEFAULT_INCLUDE_LOADER),
            debug_mode: self.debug_mode.unwrap_or(DEFAULT_DEBUG_MODE),
            account_policy,
        })
    }
}

/// Configuration as read from a settings file.
///
/// ```
/// let settings = gaq::Settings::from_json(r#"{"account": "UA-1234-1", "prefix": "t2"}"#)?;
/// assert_eq!(settings.prefix.as_deref(), Some("t2"));
/// # Ok::<(), gaq::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub account: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_render: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_pageview: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_loader: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_policy: Option<AccountPolicy>,
}

impl Settings {
    /// Parse settings from JSON.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert into a builder, leaving unset fields at their defaults.
    pub fn into_builder(self) -> GoogleAnalyticsBuilder {
        GoogleAnalyticsBuilder {
            account: self.account,
            prefix: self.prefix,
            auto_render: self.auto_render,
            auto_pageview: self.auto_pageview,
            include_loader: self.include_loader,
            debug_mode: self.debug_mode,
            account_policy: self.account_policy,
        }
    }
}
