use tracing::{debug, info};

use lovemeet_codec::decode;
use lovemeet_store::LocalStore;
use lovemeet_types::{DatePlan, RsvpRecord, RsvpResponse};

use crate::error::ApiError;
use crate::now_millis;
use crate::routes::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanSource {
    /// Decoded from the link's `data` parameter.
    Url,
    /// Found in this device's share registry.
    LocalRegistry,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Found { plan: DatePlan, source: PlanSource },
    /// Neither the link nor the registry had the plan. A normal outcome.
    NotFound,
}

impl Resolution {
    pub fn plan(&self) -> Option<&DatePlan> {
        match self {
            Resolution::Found { plan, .. } => Some(plan),
            Resolution::NotFound => None,
        }
    }

    pub fn into_plan(self) -> Option<DatePlan> {
        match self {
            Resolution::Found { plan, .. } => Some(plan),
            Resolution::NotFound => None,
        }
    }
}

/// Decides what a recipient sees for a link and records their RSVP.
///
/// Each viewer's RSVP lives in their own store only; two devices opening the
/// same link keep independent answers.
#[derive(Clone)]
pub struct RecipientResolver {
    store: LocalStore,
}

impl RecipientResolver {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    /// Resolve a plan id plus optional embedded token.
    ///
    /// The token wins over the registry; a locally recorded RSVP is then
    /// laid over whichever plan was found, since the token is a snapshot from
    /// creation time.
    pub fn resolve(&self, id: &str, data: Option<&str>) -> Result<Resolution, ApiError> {
        let found = match data.and_then(decode) {
            Some(plan) => Some((plan, PlanSource::Url)),
            None => self
                .store
                .share_link(id)?
                .map(|link| (link.plan_data, PlanSource::LocalRegistry)),
        };

        let Some((mut plan, source)) = found else {
            debug!(id, "Plan not found");
            return Ok(Resolution::NotFound);
        };

        if let Some(record) = self.store.rsvp(id)? {
            plan = plan.with_rsvp(&record);
        }

        debug!(id, ?source, "Plan resolved");
        Ok(Resolution::Found { plan, source })
    }

    /// Resolve a full share or proposal URL.
    pub fn resolve_url(&self, url: &str) -> Result<Resolution, ApiError> {
        let route = Route::parse(url).ok_or_else(|| ApiError::NotAShareLink(url.to_string()))?;
        let (id, data) = route
            .recipient_target()
            .ok_or_else(|| ApiError::NotAShareLink(url.to_string()))?;
        self.resolve(id, data)
    }

    /// Record this viewer's answer, replacing any earlier one.
    pub fn submit_rsvp(&self, id: &str, response: RsvpResponse) -> Result<RsvpRecord, ApiError> {
        self.submit_rsvp_at(id, response, now_millis())
    }

    pub fn submit_rsvp_at(
        &self,
        id: &str,
        response: RsvpResponse,
        now: i64,
    ) -> Result<RsvpRecord, ApiError> {
        let record = RsvpRecord::new(response, now);
        self.store.save_rsvp(id, &record)?;
        info!(id, %response, "RSVP recorded");
        Ok(record)
    }

    /// Record an answer and return the plan as it should now be displayed.
    pub fn respond(
        &self,
        id: &str,
        plan: DatePlan,
        response: RsvpResponse,
    ) -> Result<DatePlan, ApiError> {
        let record = self.submit_rsvp(id, response)?;
        Ok(plan.with_rsvp(&record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lovemeet_codec::encode;
    use lovemeet_types::ShareLink;

    fn plan(id: &str, line1: &str) -> DatePlan {
        DatePlan {
            id: id.into(),
            date: "2026-02-14".into(),
            time: "19:00".into(),
            address_line1: line1.into(),
            created_at: 1,
            ..DatePlan::default()
        }
    }

    fn register(store: &LocalStore, plan: &DatePlan) {
        store
            .save_share_link(&ShareLink {
                unique_id: plan.id.clone(),
                plan_data: plan.clone(),
                created_at: plan.created_at,
            })
            .unwrap();
    }

    #[test]
    fn url_payload_beats_registry() {
        let store = LocalStore::in_memory();
        let local = plan("share_1", "Local Street");
        let shared = plan("share_1", "Token Avenue");
        register(&store, &local);

        let resolver = RecipientResolver::new(store);
        let resolution = resolver.resolve("share_1", Some(&encode(&shared))).unwrap();
        assert_eq!(
            resolution,
            Resolution::Found {
                plan: shared,
                source: PlanSource::Url,
            }
        );
    }

    #[test]
    fn bad_token_falls_back_to_registry() {
        let store = LocalStore::in_memory();
        let local = plan("share_1", "Local Street");
        register(&store, &local);

        let resolver = RecipientResolver::new(store);
        let resolution = resolver.resolve("share_1", Some("%%garbage%%")).unwrap();
        assert_eq!(
            resolution,
            Resolution::Found {
                plan: local,
                source: PlanSource::LocalRegistry,
            }
        );
    }

    #[test]
    fn unknown_id_without_token_is_not_found() {
        let resolver = RecipientResolver::new(LocalStore::in_memory());
        assert_eq!(resolver.resolve("share_none", None).unwrap(), Resolution::NotFound);
        assert_eq!(
            resolver.resolve("share_none", Some("")).unwrap(),
            Resolution::NotFound
        );
    }

    #[test]
    fn local_rsvp_overrides_embedded_response() {
        let resolver = RecipientResolver::new(LocalStore::in_memory());
        let shared = DatePlan {
            response: Some(RsvpResponse::No),
            response_received_at: Some(3),
            ..plan("share_1", "Token Avenue")
        };
        let token = encode(&shared);

        resolver.submit_rsvp("share_1", RsvpResponse::Yes).unwrap();

        let resolved = resolver.resolve("share_1", Some(&token)).unwrap().into_plan().unwrap();
        assert_eq!(resolved.response, Some(RsvpResponse::Yes));
        assert_ne!(resolved.response_received_at, Some(3));
    }

    #[test]
    fn later_rsvp_wins() {
        let resolver = RecipientResolver::new(LocalStore::in_memory());
        resolver.submit_rsvp_at("share_1", RsvpResponse::Maybe, 100).unwrap();
        let second = resolver.submit_rsvp_at("share_1", RsvpResponse::No, 200).unwrap();

        assert_eq!(second.response, RsvpResponse::No);
        assert_eq!(second.response_received_at, 200);

        let stored = resolver.store.rsvp("share_1").unwrap().unwrap();
        assert_eq!(stored, second);
    }

    #[test]
    fn respond_returns_overlay() {
        let resolver = RecipientResolver::new(LocalStore::in_memory());
        let shown = resolver
            .respond("share_1", plan("share_1", "Anywhere"), RsvpResponse::Maybe)
            .unwrap();
        assert_eq!(shown.response, Some(RsvpResponse::Maybe));
        assert!(shown.response_received_at.is_some());
    }

    #[test]
    fn resolve_url_rejects_non_recipient_routes() {
        let resolver = RecipientResolver::new(LocalStore::in_memory());
        assert!(matches!(
            resolver.resolve_url("http://localhost:3000/#/history"),
            Err(ApiError::NotAShareLink(_))
        ));
        assert!(matches!(
            resolver.resolve_url("http://localhost:3000/#/proposal/abc"),
            Ok(Resolution::NotFound)
        ));
    }
}
