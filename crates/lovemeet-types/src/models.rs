use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Colombo city centre, used whenever a plan carries no coordinates.
pub const DEFAULT_LATITUDE: f64 = 6.9271;
pub const DEFAULT_LONGITUDE: f64 = 80.7789;

/// There is no identity system, so every RSVP is recorded under this label.
pub const RESPONDENT_PLACEHOLDER: &str = "Anonymous";

fn default_latitude() -> f64 {
    DEFAULT_LATITUDE
}

fn default_longitude() -> f64 {
    DEFAULT_LONGITUDE
}

// -- RSVP --

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RsvpResponse {
    Yes,
    No,
    Maybe,
}

impl RsvpResponse {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::Maybe => "maybe",
        }
    }
}

impl fmt::Display for RsvpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RsvpResponse {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" => Ok(Self::Yes),
            "no" => Ok(Self::No),
            "maybe" => Ok(Self::Maybe),
            other => Err(format!("unknown RSVP response: {other}")),
        }
    }
}

/// One viewer's answer to a plan, stored per plan id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpRecord {
    pub response: RsvpResponse,
    pub response_received_at: i64,
    pub respondent: String,
}

impl RsvpRecord {
    pub fn new(response: RsvpResponse, response_received_at: i64) -> Self {
        Self {
            response,
            response_received_at,
            respondent: RESPONDENT_PLACEHOLDER.to_string(),
        }
    }
}

// -- Plans --

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub name: String,
    pub address: String,
    pub rating: f64,
    pub url: String,
}

/// A planned outing. The serialized form is what travels inside share tokens,
/// so field names follow the camelCase payloads older links were built with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatePlan {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator_message: Option<String>,
    pub date: String,
    pub time: String,
    pub address_line1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    pub country: String,
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,
    #[serde(default)]
    pub venues: Vec<Venue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<RsvpResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_received_at: Option<i64>,
    pub created_at: i64,
}

impl Default for DatePlan {
    /// A blank planner draft, centred on Colombo.
    fn default() -> Self {
        Self {
            id: String::new(),
            creator_name: None,
            creator_message: None,
            date: String::new(),
            time: String::new(),
            address_line1: String::new(),
            address_line2: None,
            city: "Colombo".to_string(),
            district: None,
            postal_code: None,
            country: "Sri Lanka".to_string(),
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
            venues: Vec::new(),
            recipient_phone: None,
            response: None,
            response_received_at: None,
            created_at: 0,
        }
    }
}

impl DatePlan {
    /// Overlay a locally recorded RSVP. The record always wins over whatever
    /// the plan already carried.
    pub fn with_rsvp(mut self, record: &RsvpRecord) -> Self {
        self.response = Some(record.response);
        self.response_received_at = Some(record.response_received_at);
        self
    }

    /// Parsed calendar date, if the stored string is a valid `YYYY-MM-DD`.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()
    }
}

/// Registry entry for a plan the local user created and shared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareLink {
    pub unique_id: String,
    pub plan_data: DatePlan,
    pub created_at: i64,
}

// -- Countdown --

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountdownPrefs {
    pub event_name: String,
    pub target_date: NaiveDate,
}

// -- Quotes --

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Tamil,
    Sinhala,
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(Self::English),
            "tamil" | "ta" => Ok(Self::Tamil),
            "sinhala" | "si" => Ok(Self::Sinhala),
            other => Err(format!("unknown language: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub id: &'static str,
    pub quote: &'static str,
    pub language: Language,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_coordinates_default_to_colombo() {
        let json = r#"{
            "id": "share_1",
            "date": "2026-02-14",
            "time": "19:30",
            "addressLine1": "12 Galle Road",
            "city": "Colombo",
            "country": "Sri Lanka",
            "createdAt": 1
        }"#;
        let plan: DatePlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.latitude, DEFAULT_LATITUDE);
        assert_eq!(plan.longitude, DEFAULT_LONGITUDE);
        assert!(plan.venues.is_empty());
        assert!(plan.response.is_none());
    }

    #[test]
    fn serializes_camel_case_and_skips_absent_fields() {
        let plan = DatePlan {
            id: "share_x".into(),
            address_line1: "1 Marine Drive".into(),
            ..DatePlan::default()
        };
        let value = serde_json::to_value(&plan).unwrap();
        assert_eq!(value["addressLine1"], "1 Marine Drive");
        assert!(value.get("creatorName").is_none());
        assert!(value.get("response").is_none());
    }

    #[test]
    fn rsvp_overlay_replaces_embedded_response() {
        let plan = DatePlan {
            response: Some(RsvpResponse::No),
            response_received_at: Some(5),
            ..DatePlan::default()
        };
        let record = RsvpRecord::new(RsvpResponse::Yes, 10);
        let plan = plan.with_rsvp(&record);
        assert_eq!(plan.response, Some(RsvpResponse::Yes));
        assert_eq!(plan.response_received_at, Some(10));
        assert_eq!(record.respondent, RESPONDENT_PLACEHOLDER);
    }

    #[test]
    fn rsvp_response_parses_case_insensitively() {
        assert_eq!("Maybe".parse::<RsvpResponse>(), Ok(RsvpResponse::Maybe));
        assert!("perhaps".parse::<RsvpResponse>().is_err());
        assert_eq!(
            serde_json::to_string(&RsvpResponse::Yes).unwrap(),
            "\"yes\""
        );
    }
}
