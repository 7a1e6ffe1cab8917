//! Banner display state and the update rule for fetched credentials.

use crate::credentials::CredentialsResponse;

/// Network name shown until the credentials endpoint supplies a real one.
pub const DEFAULT_SSID: &str = "Prepper Pi";

/// Placeholder password shipped with the image.
pub const DEFAULT_PASSWORD: &str = "ChangeMeNow!";

pub(crate) const SSID_LABEL: &str = "SSID: ";
pub(crate) const PASSWORD_LABEL: &str = "Password: ";

/// The two strings the banner displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerState {
    pub ssid: String,
    pub password: String,
}

impl Default for BannerState {
    fn default() -> Self {
        Self {
            ssid: DEFAULT_SSID.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
        }
    }
}

impl BannerState {
    /// Fold a fetched payload into the currently displayed state.
    ///
    /// A field moves only when the payload carries a non-empty value for it;
    /// anything else keeps what is already shown.
    pub fn apply(&self, response: &CredentialsResponse) -> BannerState {
        BannerState {
            ssid: pick(&self.ssid, response.ssid.as_deref()),
            password: pick(&self.password, response.password.as_deref()),
        }
    }

    /// Rendered SSID line, e.g. `SSID: Prepper Pi`.
    pub fn ssid_line(&self) -> String {
        format!("{SSID_LABEL}{}", self.ssid)
    }

    /// Rendered password line, e.g. `Password: ChangeMeNow!`.
    pub fn password_line(&self) -> String {
        format!("{PASSWORD_LABEL}{}", self.password)
    }

    /// Inverse of [`BannerState::ssid_line`] / [`BannerState::password_line`]:
    /// rebuild the state from the rendered line texts. Unlabeled text is taken
    /// verbatim.
    pub fn from_lines(ssid_line: &str, password_line: &str) -> BannerState {
        BannerState {
            ssid: strip_label(ssid_line, SSID_LABEL),
            password: strip_label(password_line, PASSWORD_LABEL),
        }
    }
}

fn pick(current: &str, provided: Option<&str>) -> String {
    match provided {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => current.to_string(),
    }
}

fn strip_label(line: &str, label: &str) -> String {
    line.strip_prefix(label).unwrap_or(line).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_shipped_literals() {
        let state = BannerState::default();
        assert_eq!(state.ssid_line(), "SSID: Prepper Pi");
        assert_eq!(state.password_line(), "Password: ChangeMeNow!");
    }

    #[test]
    fn full_payload_replaces_both_fields() {
        let next = BannerState::default().apply(&CredentialsResponse {
            ssid: Some("Net1".to_string()),
            password: Some("pw1".to_string()),
        });
        assert_eq!(next.ssid_line(), "SSID: Net1");
        assert_eq!(next.password_line(), "Password: pw1");
    }

    #[test]
    fn omitted_password_keeps_previous_value() {
        let previous = BannerState {
            ssid: "Old".to_string(),
            password: "old-pw".to_string(),
        };
        let next = previous.apply(&CredentialsResponse {
            ssid: Some("Net1".to_string()),
            password: None,
        });
        assert_eq!(next.ssid, "Net1");
        assert_eq!(next.password, "old-pw");
    }

    #[test]
    fn empty_strings_count_as_absent() {
        let previous = BannerState::default();
        let next = previous.apply(&CredentialsResponse {
            ssid: Some(String::new()),
            password: Some(String::new()),
        });
        assert_eq!(next, previous);
    }

    #[test]
    fn empty_payload_changes_nothing() {
        let previous = BannerState {
            ssid: "Net1".to_string(),
            password: "pw1".to_string(),
        };
        assert_eq!(previous.apply(&CredentialsResponse::default()), previous);
    }

    #[test]
    fn from_lines_round_trips_rendered_text() {
        let state = BannerState {
            ssid: "Net1".to_string(),
            password: "pw1".to_string(),
        };
        let rebuilt = BannerState::from_lines(&state.ssid_line(), &state.password_line());
        assert_eq!(rebuilt, state);
    }

    #[test]
    fn from_lines_takes_unlabeled_text_verbatim() {
        let rebuilt = BannerState::from_lines("Net1", "pw1");
        assert_eq!(rebuilt.ssid, "Net1");
        assert_eq!(rebuilt.password, "pw1");
    }
}
