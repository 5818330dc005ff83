//! End-to-end: a creator shares a plan from one device, a recipient opens the
//! link on another, and each keeps its own RSVP state.

use std::sync::Arc;

use lovemeet_api::proposals::{create_proposal, proposals};
use lovemeet_api::shares::{create_share_link, share_url};
use lovemeet_api::{PlanSource, RecipientResolver, Resolution};
use lovemeet_store::{Database, LocalStore};
use lovemeet_types::{DatePlan, ProposalDraft, RsvpResponse, Theme};

const BASE: &str = "http://localhost:3000";

fn sqlite_store(dir: &tempfile::TempDir, name: &str) -> LocalStore {
    let db = Database::open(&dir.path().join(name)).unwrap();
    LocalStore::new(Arc::new(db))
}

fn draft() -> DatePlan {
    DatePlan {
        creator_name: Some("Tharushi".into()),
        creator_message: Some("ඔබ මගේ ලෝකයේ එකම තරුවයි. 🌹".into()),
        date: "2027-02-14".into(),
        time: "19:30".into(),
        address_line1: "Ministry of Crab, Old Dutch Hospital".into(),
        district: Some("Western".into()),
        created_at: 1,
        ..DatePlan::default()
    }
}

#[test]
fn recipient_on_another_device_sees_embedded_plan() {
    let dir = tempfile::tempdir().unwrap();
    let creator = sqlite_store(&dir, "creator.db");
    let recipient = sqlite_store(&dir, "recipient.db");

    let link = create_share_link(&creator, &draft()).unwrap();
    let url = share_url(BASE, &link.unique_id, Some(&link.plan_data));

    let resolution = RecipientResolver::new(recipient).resolve_url(&url).unwrap();
    assert_eq!(
        resolution,
        Resolution::Found {
            plan: link.plan_data,
            source: PlanSource::Url,
        }
    );
}

#[test]
fn id_only_link_resolves_on_creator_device_only() {
    let dir = tempfile::tempdir().unwrap();
    let creator = sqlite_store(&dir, "creator.db");
    let recipient = sqlite_store(&dir, "recipient.db");

    let link = create_share_link(&creator, &draft()).unwrap();
    let url = share_url(BASE, &link.unique_id, None);

    let on_creator = RecipientResolver::new(creator).resolve_url(&url).unwrap();
    assert!(matches!(
        on_creator,
        Resolution::Found {
            source: PlanSource::LocalRegistry,
            ..
        }
    ));

    let on_recipient = RecipientResolver::new(recipient).resolve_url(&url).unwrap();
    assert_eq!(on_recipient, Resolution::NotFound);
}

#[test]
fn rsvp_sticks_across_reopen_and_stays_per_device() {
    let dir = tempfile::tempdir().unwrap();
    let creator = sqlite_store(&dir, "creator.db");

    let link = create_share_link(&creator, &draft()).unwrap();
    let url = share_url(BASE, &link.unique_id, Some(&link.plan_data));

    {
        let resolver = RecipientResolver::new(sqlite_store(&dir, "recipient.db"));
        resolver
            .submit_rsvp_at(&link.unique_id, RsvpResponse::Maybe, 1_000)
            .unwrap();
        resolver
            .submit_rsvp_at(&link.unique_id, RsvpResponse::Yes, 2_000)
            .unwrap();
    }

    // Same device, fresh session
    let reopened = RecipientResolver::new(sqlite_store(&dir, "recipient.db"));
    let plan = reopened.resolve_url(&url).unwrap().into_plan().unwrap();
    assert_eq!(plan.response, Some(RsvpResponse::Yes));
    assert_eq!(plan.response_received_at, Some(2_000));

    // A third device with the same link has no answer yet
    let other = RecipientResolver::new(sqlite_store(&dir, "other.db"));
    let plan = other.resolve_url(&url).unwrap().into_plan().unwrap();
    assert_eq!(plan.response, None);
}

#[test]
fn proposal_archive_keeps_creation_order_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let store = sqlite_store(&dir, "proposals.db");

    let created: Vec<String> = ["A", "B", "C"]
        .into_iter()
        .map(|name| {
            create_proposal(
                &store,
                ProposalDraft {
                    crush_name: Some(name.into()),
                    message: "Will you be mine?".into(),
                    theme: Theme::Cute,
                    ..ProposalDraft::default()
                },
            )
            .unwrap()
            .id
        })
        .collect();

    let reopened = sqlite_store(&dir, "proposals.db");
    let listed: Vec<String> = proposals(&reopened)
        .unwrap()
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(listed, created);
}
