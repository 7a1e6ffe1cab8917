//! Static markup for the banner block.
//!
//! The template carries the shipped default credentials; live values are
//! written over the two line elements as plain text, never as HTML.

/// Class on the injected banner `<div>`, styled by the homepage CSS.
pub const BANNER_CLASS: &str = "wifi-info-banner";

/// Id of the element holding the SSID line.
pub const SSID_ELEMENT_ID: &str = "wifi-ssid";

/// Id of the element holding the password line.
pub const PASSWORD_ELEMENT_ID: &str = "wifi-password";

/// Inner HTML of the banner: title, the two credential lines, and the
/// security indicator.
pub const BANNER_HTML: &str = r#"
        <h2>📡 Prepper Pi Network</h2>
        <div class="wifi-details">
            <div class="wifi-ssid" id="wifi-ssid">SSID: Prepper Pi</div>
            <div class="wifi-password" id="wifi-password">Password: ChangeMeNow!</div>
        </div>
        <div style="margin-top: 10px; font-size: 14px; opacity: 0.9;">
            <span class="wifi-pulse">🔒</span> WPA2-PSK Secured Network
        </div>
    "#;
