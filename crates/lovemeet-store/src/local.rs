use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use lovemeet_types::{Proposal, RsvpRecord, ShareLink};

use crate::error::{Result, StoreError};
use crate::kv::{KeyValueStore, MemoryStore, Namespace};

const EVENT_NAME_KEY: &str = "event_name";
const TARGET_DATE_KEY: &str = "target_date";

/// Typed view over an injected [`KeyValueStore`]. Values are stored as JSON.
#[derive(Clone)]
pub struct LocalStore {
    kv: Arc<dyn KeyValueStore>,
}

impl LocalStore {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Raw access for callers that need the untyped contract.
    pub fn backend(&self) -> &dyn KeyValueStore {
        self.kv.as_ref()
    }

    // -- JSON helpers --

    fn put_json<T: Serialize>(&self, ns: Namespace, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value).map_err(|source| StoreError::Serialize {
            namespace: ns,
            key: key.to_string(),
            source,
        })?;
        self.kv.put(ns, key, &json)
    }

    fn insert_json<T: Serialize>(&self, ns: Namespace, key: &str, value: &T) -> Result<bool> {
        let json = serde_json::to_string(value).map_err(|source| StoreError::Serialize {
            namespace: ns,
            key: key.to_string(),
            source,
        })?;
        self.kv.insert(ns, key, &json)
    }

    fn get_json<T: DeserializeOwned>(&self, ns: Namespace, key: &str) -> Result<Option<T>> {
        match self.kv.get(ns, key)? {
            Some(raw) => parse(ns, key, &raw).map(Some),
            None => Ok(None),
        }
    }

    fn list_json<T: DeserializeOwned>(&self, ns: Namespace) -> Result<Vec<T>> {
        self.kv
            .list(ns)?
            .iter()
            .map(|(key, raw)| parse(ns, key, raw))
            .collect()
    }

    // -- Share links --

    pub fn save_share_link(&self, link: &ShareLink) -> Result<()> {
        debug!(id = %link.unique_id, "Saving share link");
        self.put_json(Namespace::Plans, &link.unique_id, link)
    }

    pub fn share_link(&self, id: &str) -> Result<Option<ShareLink>> {
        self.get_json(Namespace::Plans, id)
    }

    pub fn share_links(&self) -> Result<Vec<ShareLink>> {
        self.list_json(Namespace::Plans)
    }

    pub fn delete_share_link(&self, id: &str) -> Result<bool> {
        self.kv.remove(Namespace::Plans, id)
    }

    // -- Proposals --

    /// Append to the archive. Returns `false`, leaving the archive untouched,
    /// when the id is already taken.
    pub fn append_proposal(&self, proposal: &Proposal) -> Result<bool> {
        self.insert_json(Namespace::Proposals, &proposal.id, proposal)
    }

    pub fn proposals(&self) -> Result<Vec<Proposal>> {
        self.list_json(Namespace::Proposals)
    }

    pub fn proposal(&self, id: &str) -> Result<Option<Proposal>> {
        self.get_json(Namespace::Proposals, id)
    }

    // -- RSVP --

    pub fn save_rsvp(&self, plan_id: &str, record: &RsvpRecord) -> Result<()> {
        self.put_json(Namespace::Rsvp, plan_id, record)
    }

    pub fn rsvp(&self, plan_id: &str) -> Result<Option<RsvpRecord>> {
        self.get_json(Namespace::Rsvp, plan_id)
    }

    // -- Countdown --

    pub fn countdown_event_name(&self) -> Result<Option<String>> {
        self.get_json(Namespace::EventCountdown, EVENT_NAME_KEY)
    }

    pub fn countdown_target_date(&self) -> Result<Option<NaiveDate>> {
        self.get_json(Namespace::EventCountdown, TARGET_DATE_KEY)
    }

    pub fn save_countdown(&self, event_name: &str, target_date: NaiveDate) -> Result<()> {
        self.put_json(Namespace::EventCountdown, EVENT_NAME_KEY, &event_name)?;
        self.put_json(Namespace::EventCountdown, TARGET_DATE_KEY, &target_date)
    }

    // -- Settings --

    pub fn setting(&self, key: &str) -> Result<Option<serde_json::Value>> {
        self.get_json(Namespace::Settings, key)
    }

    pub fn put_setting(&self, key: &str, value: &serde_json::Value) -> Result<()> {
        self.put_json(Namespace::Settings, key, value)
    }
}

fn parse<T: DeserializeOwned>(ns: Namespace, key: &str, raw: &str) -> Result<T> {
    serde_json::from_str(raw).map_err(|source| StoreError::Corrupt {
        namespace: ns,
        key: key.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lovemeet_types::{DatePlan, ProposalDraft, RsvpResponse, Theme};

    fn link(id: &str) -> ShareLink {
        ShareLink {
            unique_id: id.to_string(),
            plan_data: DatePlan {
                id: id.to_string(),
                address_line1: "1 Temple Road".into(),
                ..DatePlan::default()
            },
            created_at: 42,
        }
    }

    #[test]
    fn share_link_registry_roundtrip() {
        let store = LocalStore::in_memory();
        store.save_share_link(&link("share_a")).unwrap();
        store.save_share_link(&link("share_b")).unwrap();

        assert_eq!(store.share_link("share_a").unwrap(), Some(link("share_a")));
        assert_eq!(store.share_link("share_missing").unwrap(), None);
        assert_eq!(store.share_links().unwrap().len(), 2);

        assert!(store.delete_share_link("share_a").unwrap());
        assert!(!store.delete_share_link("share_a").unwrap());
        assert_eq!(store.share_links().unwrap(), vec![link("share_b")]);
    }

    #[test]
    fn proposals_list_in_append_order() {
        let store = LocalStore::in_memory();
        for (i, name) in ["A", "B", "C"].iter().enumerate() {
            let draft = ProposalDraft {
                crush_name: Some(name.to_string()),
                message: format!("message {name}"),
                theme: Theme::Funny,
                ..ProposalDraft::default()
            };
            assert!(store
                .append_proposal(&draft.into_proposal(format!("id{i}"), i as i64))
                .unwrap());
        }

        let names: Vec<String> = store
            .proposals()
            .unwrap()
            .into_iter()
            .filter_map(|p| p.crush_name)
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(store.proposal("id1").unwrap().unwrap().message, "message B");
    }

    #[test]
    fn taken_proposal_id_is_refused() {
        let store = LocalStore::in_memory();
        let first = ProposalDraft {
            message: "first".into(),
            ..ProposalDraft::default()
        }
        .into_proposal("k3j9x0a1b".into(), 1);
        let clash = ProposalDraft {
            message: "second".into(),
            ..ProposalDraft::default()
        }
        .into_proposal("k3j9x0a1b".into(), 2);

        assert!(store.append_proposal(&first).unwrap());
        assert!(!store.append_proposal(&clash).unwrap());
        assert_eq!(store.proposals().unwrap(), vec![first]);
    }

    #[test]
    fn rsvp_overwrites() {
        let store = LocalStore::in_memory();
        store
            .save_rsvp("share_x", &RsvpRecord::new(RsvpResponse::Maybe, 1))
            .unwrap();
        store
            .save_rsvp("share_x", &RsvpRecord::new(RsvpResponse::No, 2))
            .unwrap();

        let record = store.rsvp("share_x").unwrap().unwrap();
        assert_eq!(record.response, RsvpResponse::No);
        assert_eq!(record.response_received_at, 2);
        assert_eq!(store.rsvp("share_y").unwrap(), None);
    }

    #[test]
    fn countdown_prefs_persist_as_two_keys() {
        let store = LocalStore::in_memory();
        assert_eq!(store.countdown_event_name().unwrap(), None);

        let date = NaiveDate::from_ymd_opt(2027, 2, 14).unwrap();
        store.save_countdown("Anniversary", date).unwrap();

        assert_eq!(
            store.countdown_event_name().unwrap().as_deref(),
            Some("Anniversary")
        );
        assert_eq!(store.countdown_target_date().unwrap(), Some(date));
        assert_eq!(store.backend().list(Namespace::EventCountdown).unwrap().len(), 2);
    }

    #[test]
    fn corrupt_value_is_reported_not_swallowed() {
        let store = LocalStore::in_memory();
        store
            .backend()
            .put(Namespace::Rsvp, "share_bad", "{not json")
            .unwrap();

        let err = store.rsvp("share_bad").unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { namespace: Namespace::Rsvp, .. }));
    }

    #[test]
    fn settings_hold_arbitrary_json() {
        let store = LocalStore::in_memory();
        let value = serde_json::json!({ "language": "tamil", "muted": true });
        store.put_setting("ui", &value).unwrap();
        assert_eq!(store.setting("ui").unwrap(), Some(value));
        assert_eq!(store.setting("missing").unwrap(), None);
    }
}
