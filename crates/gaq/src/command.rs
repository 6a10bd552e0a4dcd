//! The allow-list of `_gaq` commands.

use crate::builders::Call;
use crate::GoogleAnalytics;
use serde::{Serialize, Serializer};
use std::fmt;

/// Leading marker every `_gaq` command name carries.
pub const COMMAND_MARKER: char = '_';

macro_rules! commands {
    ($( $(#[$doc:meta])* $variant:ident => $name:literal, $method:ident; )+) => {
        /// A `ga.js` command accepted by the `_gaq` queue.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Command {
            $( $(#[$doc])* $variant, )+
        }

        impl Command {
            /// Every allow-listed command, sorted by wire name.
            pub const ALL: &'static [Command] = &[ $( Command::$variant, )+ ];

            /// Wire name, including the leading `_`.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Command::$variant => $name, )+
                }
            }

            fn from_marked(name: &str) -> Option<Self> {
                match name {
                    $( $name => Some(Command::$variant), )+
                    _ => None,
                }
            }
        }

        impl GoogleAnalytics {
            $(
                #[doc = concat!("Start a `", $name, "` call.")]
                pub fn $method(&mut self) -> Call<'_> {
                    self.call(Command::$variant)
                }
            )+
        }
    };
}

commands! {
    AddIgnoredOrganic => "_addIgnoredOrganic", add_ignored_organic;
    AddIgnoredRef => "_addIgnoredRef", add_ignored_ref;
    /// E-commerce line item: order id, sku, name, category, price, quantity.
    AddItem => "_addItem", add_item;
    AddOrganic => "_addOrganic", add_organic;
    /// E-commerce transaction header.
    AddTrans => "_addTrans", add_trans;
    AnonymizeIp => "_anonymizeIp", anonymize_ip;
    ClearIgnoredOrganic => "_clearIgnoredOrganic", clear_ignored_organic;
    ClearIgnoredRef => "_clearIgnoredRef", clear_ignored_ref;
    ClearOrganic => "_clearOrganic", clear_organic;
    CookiePathCopy => "_cookiePathCopy", cookie_path_copy;
    CreateTracker => "_createTracker", create_tracker;
    DeleteCustomVar => "_deleteCustomVar", delete_custom_var;
    /// Queued automatically when the component is built with a valid account.
    SetAccount => "_setAccount", set_account;
    SetAllowAnchor => "_setAllowAnchor", set_allow_anchor;
    SetAllowLinker => "_setAllowLinker", set_allow_linker;
    SetCampContentKey => "_setCampContentKey", set_camp_content_key;
    SetCampMediumKey => "_setCampMediumKey", set_camp_medium_key;
    SetCampNOKey => "_setCampNOKey", set_camp_no_key;
    SetCampNameKey => "_setCampNameKey", set_camp_name_key;
    SetCampSourceKey => "_setCampSourceKey", set_camp_source_key;
    SetCampTermKey => "_setCampTermKey", set_camp_term_key;
    SetCampaignCookieTimeout => "_setCampaignCookieTimeout", set_campaign_cookie_timeout;
    SetCampaignTrack => "_setCampaignTrack", set_campaign_track;
    SetClientInfo => "_setClientInfo", set_client_info;
    SetCookiePath => "_setCookiePath", set_cookie_path;
    /// Slot, name, value and optional scope.
    SetCustomVar => "_setCustomVar", set_custom_var;
    SetDetectFlash => "_setDetectFlash", set_detect_flash;
    SetDetectTitle => "_setDetectTitle", set_detect_title;
    SetDomainName => "_setDomainName", set_domain_name;
    SetLocalGifPath => "_setLocalGifPath", set_local_gif_path;
    SetLocalRemoteServerMode => "_setLocalRemoteServerMode", set_local_remote_server_mode;
    SetLocalServerMode => "_setLocalServerMode", set_local_server_mode;
    SetReferrerOverride => "_setReferrerOverride", set_referrer_override;
    SetRemoteServerMode => "_setRemoteServerMode", set_remote_server_mode;
    SetSampleRate => "_setSampleRate", set_sample_rate;
    SetSessionCookieTimeout => "_setSessionCookieTimeout", set_session_cookie_timeout;
    SetSiteSpeedSampleRate => "_setSiteSpeedSampleRate", set_site_speed_sample_rate;
    SetVisitorCookieTimeout => "_setVisitorCookieTimeout", set_visitor_cookie_timeout;
    /// Category, action and optional label, value and non-interaction flag.
    TrackEvent => "_trackEvent", track_event;
    /// Optional virtual page path.
    TrackPageview => "_trackPageview", track_pageview;
    TrackSocial => "_trackSocial", track_social;
    TrackTiming => "_trackTiming", track_timing;
    TrackTrans => "_trackTrans", track_trans;
}

impl Command {
    /// Look up a command by name.
    ///
    /// The leading `_` is optional (`trackPageview` and `_trackPageview`
    /// both resolve); otherwise matching is exact and case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.starts_with(COMMAND_MARKER) {
            Self::from_marked(name)
        } else {
            Self::from_marked(&format!("{COMMAND_MARKER}{name}"))
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Command {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
