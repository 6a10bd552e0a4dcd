//! Integration tests for the gaq public API.

use gaq::{
    AccountPolicy, Command, Error, GoogleAnalytics, ScriptBuffer, ScriptPosition,
    ScriptRegistrar, Settings, Value, SCRIPT_ID,
};
use std::io::Write;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

fn push_lines(js: &str) -> Vec<&str> {
    js.lines().filter(|l| l.starts_with("_gaq.push")).collect()
}

#[test]
fn test_full_page_flow() {
    let mut ga = GoogleAnalytics::builder("ua-1234-1")
        .prefix("t2")
        .build()
        .unwrap();

    ga.set_domain_name().arg("example.com").send();
    ga.track_pageview().arg("/checkout").send();
    ga.add_trans()
        .args(["1234", "Acme", "11.99", "1.29", "5", "San Jose", "California", "USA"])
        .send();
    ga.add_item()
        .args(["1234", "DD44", "T-Shirt", "Green Medium"])
        .arg(11.99)
        .arg(1)
        .send();
    ga.track_trans().send();

    let js = ga.render();

    assert_eq!(
        push_lines(&js),
        vec![
            "_gaq.push(['_setAccount','UA-1234-1']);",
            "_gaq.push(['_setDomainName','example.com']);",
            "_gaq.push(['_trackPageview','/checkout']);",
            "_gaq.push(['_addTrans','1234','t2.Acme','t2.11.99','t2.1.29','t2.5','t2.San Jose','t2.California','t2.USA']);",
            "_gaq.push(['_addItem','1234','t2.DD44','t2.T-Shirt','t2.Green Medium',11.99,1]);",
            "_gaq.push(['_trackTrans']);",
        ]
    );
}

#[test]
fn test_record_appends_in_call_order() {
    let mut ga = GoogleAnalytics::builder("UA-1234-1").build().unwrap();

    for (i, name) in ["trackEvent", "_trackSocial", "trackTiming"].iter().enumerate() {
        assert!(ga.record(name, [i as i64]));
        assert_eq!(ga.pending_count(), i + 2);
    }

    let commands: Vec<_> = ga.invocations().iter().map(|i| i.command).collect();
    assert_eq!(
        commands,
        vec![
            Command::SetAccount,
            Command::TrackEvent,
            Command::TrackSocial,
            Command::TrackTiming,
        ]
    );
}

#[test]
fn test_unknown_commands_never_change_queue() {
    let mut ga = GoogleAnalytics::builder("UA-1234-1").build().unwrap();
    let before = ga.pending_count();

    for name in ["", "_", "trackpageview", "link", "_linkByPost", "render", "__setAccount"] {
        assert!(!ga.record(name, ["x"]), "accepted {name:?}");
    }

    assert_eq!(ga.pending_count(), before);
}

#[test]
fn test_every_allow_listed_name_is_recorded() {
    let mut ga = GoogleAnalytics::builder("UA-1234-1").build().unwrap();

    for command in Command::ALL {
        let bare = command.as_str().trim_start_matches('_');
        assert!(ga.record(bare, Vec::<Value>::new()), "rejected {bare}");
    }

    assert_eq!(ga.pending_count(), 1 + Command::ALL.len());
}

#[test]
fn test_render_is_idempotent() {
    let mut ga = GoogleAnalytics::builder("UA-1234-1").build().unwrap();
    ga.track_event().args(["a", "b"]).send();

    let first = ga.render();
    let second = ga.render();

    assert_eq!(first, second);
    assert_eq!(push_lines(&first).len(), 3);
}

#[test]
fn test_permissive_invalid_account_still_renders() {
    let mut ga = GoogleAnalytics::builder("XX-1234-1").build().unwrap();
    ga.track_event().args(["Videos", "Play"]).send();

    let js = ga.render();

    assert!(!js.contains("_setAccount"));
    assert_eq!(
        push_lines(&js),
        vec![
            "_gaq.push(['_trackEvent','Videos','Play']);",
            "_gaq.push(['_trackPageview']);",
        ]
    );
}

#[test]
fn test_strict_invalid_account_fails_build() {
    let result = GoogleAnalytics::builder("UA-12-1")
        .account_policy(AccountPolicy::Reject)
        .build();

    assert!(matches!(result, Err(Error::InvalidAccount(_))));
}

#[test]
fn test_from_settings() {
    let settings = Settings::from_json(
        r#"{"account": "MO-55555-2", "autoRender": true, "includeLoader": false}"#,
    )
    .unwrap();
    let ga = GoogleAnalytics::from_settings(settings).unwrap();

    let mut head = ScriptBuffer::new();
    assert!(ga.emit(&mut head).is_none());

    let registered = head.get(SCRIPT_ID).unwrap();
    assert_eq!(registered.position, ScriptPosition::Head);
    assert!(registered.script.contains("_gaq.push(['_setAccount','MO-55555-2']);"));
    assert!(!registered.script.contains("document.createElement"));
}

#[test]
fn test_from_settings_strict_rejects() {
    let settings =
        Settings::from_json(r#"{"account": "nope", "accountPolicy": "reject"}"#).unwrap();

    assert!(matches!(
        GoogleAnalytics::from_settings(settings),
        Err(Error::InvalidAccount(_))
    ));
}

/// Registrar that records every call, to check emit touches it exactly once.
#[derive(Default)]
struct CountingRegistrar {
    calls: Vec<(String, ScriptPosition)>,
}

impl ScriptRegistrar for CountingRegistrar {
    fn register_script(&mut self, id: &str, _script: String, position: ScriptPosition) {
        self.calls.push((id.to_string(), position));
    }
}

#[test]
fn test_emit_with_custom_registrar() {
    let ga = GoogleAnalytics::builder("UA-1234-1")
        .auto_render(true)
        .build()
        .unwrap();
    let mut registrar = CountingRegistrar::default();

    ga.emit(&mut registrar);

    assert_eq!(
        registrar.calls,
        vec![(SCRIPT_ID.to_string(), ScriptPosition::Head)]
    );
}

#[test]
fn test_emit_through_trait_object() {
    let ga = GoogleAnalytics::builder("UA-1234-1")
        .auto_render(true)
        .build()
        .unwrap();
    let mut buffer = ScriptBuffer::new();
    let registrar: &mut dyn ScriptRegistrar = &mut buffer;

    assert!(ga.emit(registrar).is_none());
    assert_eq!(buffer.len(), 1);
}

// ============================================
// DIAGNOSTICS
// ============================================

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn with_captured_logs(f: impl FnOnce()) -> String {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    logs.contents()
}

#[test]
fn test_invalid_account_logs_warning() {
    let output = with_captured_logs(|| {
        let ga = GoogleAnalytics::builder("bogus").build().unwrap();
        assert!(ga.account().is_none());
    });

    assert!(output.contains("WARN"));
    assert!(output.contains("invalid Google Analytics account ID"));
    assert!(output.contains("bogus"));
}

#[test]
fn test_unknown_command_warns_only_in_debug_mode() {
    let quiet = with_captured_logs(|| {
        let mut ga = GoogleAnalytics::builder("UA-1234-1").build().unwrap();
        ga.record("trackEverything", ["x"]);
    });
    assert!(!quiet.contains("trackEverything"));

    let loud = with_captured_logs(|| {
        let mut ga = GoogleAnalytics::builder("UA-1234-1")
            .debug_mode(true)
            .build()
            .unwrap();
        ga.record("trackEverything", ["x"]);
    });
    assert!(loud.contains("ignoring unknown _gaq command"));
    assert!(loud.contains("trackEverything"));
}
