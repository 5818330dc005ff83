use tracing::{info, warn};

use lovemeet_codec::generate_proposal_id;
use lovemeet_store::{LocalStore, Namespace, Result, StoreError};
use lovemeet_types::{Proposal, ProposalDraft};

use crate::now_millis;

const MAX_ID_ATTEMPTS: u32 = 5;

/// Assign an id and timestamp to a composed proposal and append it to the
/// archive. An existing proposal is never replaced; a clashing id is redrawn.
pub fn create_proposal(store: &LocalStore, draft: ProposalDraft) -> Result<Proposal> {
    create_proposal_with(store, draft, generate_proposal_id)
}

pub(crate) fn create_proposal_with(
    store: &LocalStore,
    draft: ProposalDraft,
    mut next_id: impl FnMut() -> String,
) -> Result<Proposal> {
    let mut proposal = draft.into_proposal(next_id(), now_millis());
    for attempt in 1..=MAX_ID_ATTEMPTS {
        if attempt > 1 {
            proposal.id = next_id();
        }
        if store.append_proposal(&proposal)? {
            info!(id = %proposal.id, theme = %proposal.theme, "Proposal created");
            return Ok(proposal);
        }
        warn!(id = %proposal.id, attempt, "Proposal id already taken");
    }
    Err(StoreError::KeyTaken {
        namespace: Namespace::Proposals,
        attempts: MAX_ID_ATTEMPTS,
    })
}

/// Every proposal created on this device, oldest first.
pub fn proposals(store: &LocalStore) -> Result<Vec<Proposal>> {
    store.proposals()
}

pub fn proposal(store: &LocalStore, id: &str) -> Result<Option<Proposal>> {
    store.proposal(id)
}
