//! Payload served by the local credentials endpoint.

use serde::Deserialize;

/// JSON body of `GET /api/system/wifi-info`.
///
/// Both fields are optional; hosts without the RaspAP API installed return
/// nothing at all, and partial payloads are valid. Unknown fields are
/// ignored, any non-object body is a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CredentialsResponse {
    pub ssid: Option<String>,
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_full_payload() {
        let response: CredentialsResponse =
            serde_json::from_str(r#"{"ssid":"Net1","password":"pw1"}"#).expect("valid payload");
        assert_eq!(response.ssid.as_deref(), Some("Net1"));
        assert_eq!(response.password.as_deref(), Some("pw1"));
    }

    #[test]
    fn parses_partial_payload() {
        let response: CredentialsResponse =
            serde_json::from_str(r#"{"ssid":"Net1"}"#).expect("valid payload");
        assert_eq!(response.ssid.as_deref(), Some("Net1"));
        assert_eq!(response.password, None);
    }

    #[test]
    fn ignores_unknown_fields() {
        let response: CredentialsResponse =
            serde_json::from_str(r#"{"ssid":"Net1","channel":6,"band":"2.4GHz"}"#)
                .expect("valid payload");
        assert_eq!(response.ssid.as_deref(), Some("Net1"));
    }

    #[test]
    fn rejects_non_object_bodies() {
        assert!(serde_json::from_str::<CredentialsResponse>("[1,2,3]").is_err());
        assert!(serde_json::from_str::<CredentialsResponse>(r#""ssid""#).is_err());
        assert!(serde_json::from_str::<CredentialsResponse>("null").is_err());
    }

    #[test]
    fn rejects_wrongly_typed_fields() {
        assert!(serde_json::from_str::<CredentialsResponse>(r#"{"ssid":42}"#).is_err());
    }
}
