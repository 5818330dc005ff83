use serde::Serialize;
use tracing::{info, warn};

use lovemeet_codec::{encode, generate_share_id};
use lovemeet_store::{LocalStore, Result};
use lovemeet_types::{DatePlan, ShareLink};

use crate::now_millis;
use crate::routes::Route;

const INVITE_SUBJECT: &str = "✨ You've Been Invited to a Special Date! ✨";

// -- Registry --

/// Snapshot `plan` under a fresh identifier in the creator's registry.
///
/// The stored copy gets the new id and the creation time; the caller's plan
/// is left untouched.
pub fn create_share_link(store: &LocalStore, plan: &DatePlan) -> Result<ShareLink> {
    let unique_id = generate_share_id();
    let now = now_millis();
    let link = ShareLink {
        unique_id: unique_id.clone(),
        plan_data: DatePlan {
            id: unique_id,
            created_at: now,
            ..plan.clone()
        },
        created_at: now,
    };

    store.save_share_link(&link)?;
    info!(id = %link.unique_id, "Share link created");
    Ok(link)
}

/// The plan behind a link created on this device, if any.
pub fn share_link_data(store: &LocalStore, id: &str) -> Result<Option<DatePlan>> {
    Ok(store.share_link(id)?.map(|link| link.plan_data))
}

pub fn all_share_links(store: &LocalStore) -> Result<Vec<ShareLink>> {
    store.share_links()
}

pub fn delete_share_link(store: &LocalStore, id: &str) -> Result<bool> {
    let removed = store.delete_share_link(id)?;
    if removed {
        info!(id, "Share link deleted");
    }
    Ok(removed)
}

// -- URLs --

/// Recipient URL for a plan. With a plan the URL carries the encoded plan in
/// `data`, so it opens on any device; without one it only resolves on the
/// creator's own device.
pub fn share_url(base: &str, id: &str, plan: Option<&DatePlan>) -> String {
    let data = plan.map(encode).filter(|token| {
        if token.is_empty() {
            warn!(id, "Plan could not be embedded; falling back to a local-only link");
        }
        !token.is_empty()
    });
    Route::Share {
        id: id.to_string(),
        data,
    }
    .to_url(base)
}

pub fn proposal_url(base: &str, id: &str) -> String {
    Route::Proposal {
        id: id.to_string(),
        data: None,
    }
    .to_url(base)
}

// -- Outbound targets --

pub fn invite_message(share_url: &str) -> String {
    format!(
        "✨ Someone Special Has a Date Planned for You! ✨\n\n💌 View your special plan on LoveMeet!\n🔗 {share_url}"
    )
}

/// WhatsApp deep link. Non-digits are stripped from the phone number; an
/// empty number lets the user pick the chat.
pub fn whatsapp_link(phone: Option<&str>, message: &str) -> String {
    let digits: String = phone
        .unwrap_or("")
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    format!("https://wa.me/{digits}?text={}", urlencoding::encode(message))
}

pub fn email_invite_link(share_url: &str) -> String {
    let body = format!(
        "Someone special has planned a date for you!\n\nView your special plan on LoveMeet:\n{share_url}"
    );
    mailto_link(INVITE_SUBJECT, &body)
}

pub fn mailto_link(subject: &str, body: &str) -> String {
    format!(
        "mailto:?subject={}&body={}",
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLinks {
    pub whatsapp: String,
    pub twitter: String,
    pub facebook: String,
    pub linkedin: String,
    pub email: String,
}

pub fn social_links(text: &str, url: Option<&str>) -> SocialLinks {
    let text = urlencoding::encode(text);
    let url = urlencoding::encode(url.unwrap_or(""));
    SocialLinks {
        whatsapp: format!("https://wa.me/?text={text}"),
        twitter: format!("https://twitter.com/intent/tweet?text={text}"),
        facebook: format!("https://www.facebook.com/sharer/sharer.php?quote={text}"),
        linkedin: format!("https://www.linkedin.com/sharing/share-offsite/?url={url}"),
        email: format!(
            "mailto:?subject={}&body={text}",
            urlencoding::encode("Check this out!")
        ),
    }
}

// -- Native share --

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativeShareError {
    /// The user dismissed the share sheet.
    Cancelled,
    Failed(String),
}

/// The host platform's share sheet, when it has one.
pub trait NativeShare {
    fn share(&self, title: &str, text: &str, url: &str) -> std::result::Result<(), NativeShareError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Cancelled,
    /// No usable native share; open this link instead.
    Fallback(String),
}

/// Share through the native sheet when available, otherwise hand back a
/// WhatsApp link carrying the text and URL.
pub fn dispatch_share(native: Option<&dyn NativeShare>, text: &str, url: &str) -> ShareOutcome {
    if let Some(native) = native {
        match native.share("Share", text, url) {
            Ok(()) => return ShareOutcome::Shared,
            Err(NativeShareError::Cancelled) => return ShareOutcome::Cancelled,
            Err(NativeShareError::Failed(e)) => {
                warn!("Native share failed, falling back to WhatsApp: {}", e);
            }
        }
    }
    ShareOutcome::Fallback(whatsapp_link(None, &format!("{text}\n\n{url}")))
}
