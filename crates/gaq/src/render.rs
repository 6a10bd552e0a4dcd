//! Serialization of queued commands into a `_gaq` script block.

use crate::command::Command;
use crate::config::{DEFAULT_AUTO_PAGEVIEW, DEFAULT_DEBUG_MODE, DEFAULT_INCLUDE_LOADER};
use crate::types::{Invocation, Value};
use tracing::debug;

/// First line of every snippet.
pub const QUEUE_HEADER: &str = "var _gaq = _gaq || [];";

/// Separator between a tracker name prefix and the value it prefixes.
pub const PREFIX_SEPARATOR: char = '.';

/// Production loader script.
pub const LOADER_SCRIPT: &str = "ga.js";

/// Loader script with console debugging output.
pub const DEBUG_LOADER_SCRIPT: &str = "u/ga_debug.js";

/// Attribution appended to every snippet.
pub const BANNER: &str = "// Google Analytics tracking code rendered by gaq\n\
// Copyright 2026, the gaq authors. Licensed under Apache-2.0.";

const QUOTE: char = '\'';
const ESCAPE: char = '\\';

/// Options that shape the rendered script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Tracker name, with or without the trailing `.`.
    pub prefix: String,
    /// Append `_trackPageview` when none was queued.
    pub auto_pageview: bool,
    /// Emit the loader bootstrap after the push statements.
    pub include_loader: bool,
    /// Load `ga_debug.js` instead of `ga.js`.
    pub debug_mode: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            auto_pageview: DEFAULT_AUTO_PAGEVIEW,
            include_loader: DEFAULT_INCLUDE_LOADER,
            debug_mode: DEFAULT_DEBUG_MODE,
        }
    }
}

/// Ensure a non-empty prefix ends with `.`.
pub fn normalize_prefix(prefix: &str) -> String {
    if prefix.is_empty() || prefix.ends_with(PREFIX_SEPARATOR) {
        prefix.to_string()
    } else {
        format!("{prefix}{PREFIX_SEPARATOR}")
    }
}

/// Render queued invocations into a script body.
///
/// `invocations` is only read; the automatic page view is added to the
/// output, never to the caller's queue, so rendering is repeatable.
pub fn render(invocations: &[Invocation], options: &RenderOptions) -> String {
    let prefix = normalize_prefix(&options.prefix);
    let needs_pageview = options.auto_pageview
        && !invocations
            .iter()
            .any(|i| i.command == Command::TrackPageview);

    let mut lines = Vec::with_capacity(invocations.len() + 4);
    lines.push(QUEUE_HEADER.to_string());

    for invocation in invocations {
        lines.push(push_statement(invocation.command, &invocation.args, &prefix));
    }
    if needs_pageview {
        lines.push(push_statement(Command::TrackPageview, &[], &prefix));
    }

    if options.include_loader {
        lines.push(loader(options.debug_mode));
    }
    lines.push(BANNER.to_string());

    debug!(
        statements = invocations.len() + usize::from(needs_pageview),
        auto_pageview = needs_pageview,
        "rendered snippet"
    );

    lines.join("\n")
}

/// Build `_gaq.push([...]);` for one command.
fn push_statement(command: Command, args: &[Value], prefix: &str) -> String {
    let mut items = Vec::with_capacity(args.len() + 1);
    items.push(quote(command.as_str(), "", ""));

    for (index, arg) in args.iter().enumerate() {
        // The first argument is never prefixed.
        let prefix = if index == 0 { "" } else { prefix };
        items.push(match arg {
            Value::String(s) => quote(s, prefix, prefix),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => format_number(*n),
        });
    }

    format!("_gaq.push([{}]);", items.join(","))
}

/// Single-quote `value`, inserting `prefix` after the opening quote.
///
/// Quotes not already preceded by a backslash become `\<escape_prefix>'`.
fn quote(value: &str, prefix: &str, escape_prefix: &str) -> String {
    let mut out = String::with_capacity(value.len() + prefix.len() + 2);
    out.push(QUOTE);
    out.push_str(prefix);

    let mut previous = None;
    for c in value.chars() {
        if c == QUOTE && previous != Some(ESCAPE) {
            out.push(ESCAPE);
            out.push_str(escape_prefix);
        }
        out.push(c);
        previous = Some(c);
    }

    out.push(QUOTE);
    out
}

/// Format a number as a JavaScript literal.
fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".into()
    } else if n == f64::INFINITY {
        "Infinity".into()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".into()
    } else {
        n.to_string()
    }
}

fn loader(debug_mode: bool) -> String {
    let script = if debug_mode {
        DEBUG_LOADER_SCRIPT
    } else {
        LOADER_SCRIPT
    };

    [
        "(function() {".to_string(),
        "    var ga = document.createElement('script'); ga.type = 'text/javascript'; ga.async = true;"
            .to_string(),
        format!(
            "    ga.src = ('https:' == document.location.protocol ? 'https://ssl' : 'http://www') + '.google-analytics.com/{script}';"
        ),
        "    var s = document.getElementsByTagName('script')[0]; s.parentNode.insertBefore(ga, s);"
            .to_string(),
        "})();".to_string(),
    ]
    .join("\n")
}
