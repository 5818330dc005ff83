pub mod models;
pub mod proposal;

pub use models::{
    CountdownPrefs, DatePlan, Language, Quote, RsvpRecord, RsvpResponse, ShareLink, Venue,
    DEFAULT_LATITUDE, DEFAULT_LONGITUDE, RESPONDENT_PLACEHOLDER,
};
pub use proposal::{Proposal, ProposalDraft, RevealPolicy, Theme};
