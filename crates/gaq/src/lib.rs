//! Google Analytics (`ga.js`) snippet builder for Rust.
//!
//! Queue `_gaq` commands while a page is assembled, then render them into
//! the script block that loads `ga.js`.
//!
//! # Example
//!
//! ```rust
//! use gaq::{GoogleAnalytics, ScriptBuffer};
//!
//! # fn main() -> Result<(), gaq::Error> {
//! let mut ga = GoogleAnalytics::builder("UA-1234-1")
//!     .prefix("t2")
//!     .build()?;
//!
//! ga.track_event()
//!     .args(["Videos", "Play", "intro.mp4"])
//!     .send();
//!
//! // Unknown commands are dropped
//! assert!(!ga.record("trackEverything", ["now"]));
//!
//! let mut head = ScriptBuffer::new();
//! let js = ga.emit(&mut head).unwrap_or_default();
//! assert!(js.starts_with("var _gaq = _gaq || [];"));
//! # Ok(())
//! # }
//! ```

mod account;
mod builders;
mod client;
mod command;
mod config;
mod error;
mod queue;
mod registrar;
pub mod render;
mod types;

pub use account::AccountId;
pub use builders::Call;
pub use client::GoogleAnalytics;
pub use command::{Command, COMMAND_MARKER};
pub use config::{AccountPolicy, Config, GoogleAnalyticsBuilder, Settings};
pub use error::Error;
pub use registrar::{
    RegisteredScript, ScriptBuffer, ScriptPosition, ScriptRegistrar, SCRIPT_ID,
};
pub use render::RenderOptions;
pub use types::{Invocation, Value};

impl GoogleAnalyticsBuilder {
    /// Build the component.
    ///
    /// Fails only for an invalid prefix, or for an invalid account under
    /// [`AccountPolicy::Reject`].
    pub fn build(self) -> Result<GoogleAnalytics, Error> {
        let config = self.build_config()?;
        Ok(GoogleAnalytics::from_config(config))
    }
}
