use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::RsvpResponse;

/// Visual theme of a proposal card. Closed set; renderers match on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Cute,
    Romantic,
    Funny,
    Minimal,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cute => "cute",
            Self::Romantic => "romantic",
            Self::Funny => "funny",
            Self::Minimal => "minimal",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cute" => Ok(Self::Cute),
            "romantic" => Ok(Self::Romantic),
            "funny" => Ok(Self::Funny),
            "minimal" => Ok(Self::Minimal),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}

/// When the sender's name is revealed to the recipient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealPolicy {
    AfterYes,
    Never,
    Countdown,
}

impl FromStr for RevealPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "after_yes" => Ok(Self::AfterYes),
            "never" => Ok(Self::Never),
            "countdown" => Ok(Self::Countdown),
            other => Err(format!("unknown reveal policy: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crush_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
    pub message: String,
    pub theme: Theme,
    #[serde(rename = "revealOption")]
    pub reveal: RevealPolicy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub countdown_date: Option<String>,
    #[serde(default)]
    pub response: Option<RsvpResponse>,
    pub created_at: i64,
}

/// Composer input before an id and timestamp are assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct ProposalDraft {
    pub crush_name: Option<String>,
    pub sender_name: Option<String>,
    pub message: String,
    pub theme: Theme,
    pub reveal: RevealPolicy,
    pub countdown_date: Option<String>,
}

impl Default for ProposalDraft {
    fn default() -> Self {
        Self {
            crush_name: None,
            sender_name: None,
            message: String::new(),
            theme: Theme::Romantic,
            reveal: RevealPolicy::AfterYes,
            countdown_date: None,
        }
    }
}

impl ProposalDraft {
    pub fn into_proposal(self, id: String, created_at: i64) -> Proposal {
        Proposal {
            id,
            crush_name: self.crush_name,
            sender_name: self.sender_name,
            message: self.message,
            theme: self.theme,
            reveal: self.reveal,
            countdown_date: self.countdown_date,
            response: None,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_policy_uses_snake_case_on_the_wire() {
        let json = serde_json::to_string(&RevealPolicy::AfterYes).unwrap();
        assert_eq!(json, "\"after_yes\"");
        assert_eq!("after-yes".parse::<RevealPolicy>(), Ok(RevealPolicy::AfterYes));
    }

    #[test]
    fn proposal_reads_stored_archive_entry() {
        let json = r#"{
            "id": "k3j9x0a1b",
            "crushName": "Nila",
            "message": "Will you be mine?",
            "theme": "cute",
            "revealOption": "never",
            "response": null,
            "createdAt": 1739500000000
        }"#;
        let proposal: Proposal = serde_json::from_str(json).unwrap();
        assert_eq!(proposal.theme, Theme::Cute);
        assert_eq!(proposal.reveal, RevealPolicy::Never);
        assert_eq!(proposal.crush_name.as_deref(), Some("Nila"));
        assert!(proposal.response.is_none());
    }
}
