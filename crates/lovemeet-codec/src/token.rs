use base64::{
    Engine as _,
    engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD},
};
use lovemeet_types::DatePlan;
use tracing::{debug, error};

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("plan serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("plan field {0} is not a finite number")]
    NonFiniteNumber(&'static str),
    #[error("token is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("token payload is not UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("token payload is not a plan: {0}")]
    Json(#[source] serde_json::Error),
}

/// Serialize a plan into a URL-safe share token.
pub fn try_encode(plan: &DatePlan) -> Result<String, CodecError> {
    check_finite(plan)?;
    let json = serde_json::to_string(plan).map_err(CodecError::Serialize)?;
    Ok(URL_SAFE_NO_PAD.encode(json.as_bytes()))
}

/// serde_json writes NaN and infinities as `null`, which never decodes back
/// into an `f64`.
fn check_finite(plan: &DatePlan) -> Result<(), CodecError> {
    if !plan.latitude.is_finite() {
        return Err(CodecError::NonFiniteNumber("latitude"));
    }
    if !plan.longitude.is_finite() {
        return Err(CodecError::NonFiniteNumber("longitude"));
    }
    if plan.venues.iter().any(|v| !v.rating.is_finite()) {
        return Err(CodecError::NonFiniteNumber("venues.rating"));
    }
    Ok(())
}

/// Serialize a plan into a share token, returning an empty token on failure.
///
/// The failure is logged and callers treat the empty token as "no embedded
/// data".
pub fn encode(plan: &DatePlan) -> String {
    match try_encode(plan) {
        Ok(token) => token,
        Err(e) => {
            error!(plan_id = %plan.id, "Error encoding plan: {}", e);
            String::new()
        }
    }
}

/// Reconstruct a plan from a share token. Any malformed input yields `None`.
pub fn decode(token: &str) -> Option<DatePlan> {
    match try_decode(token) {
        Ok(plan) => Some(plan),
        Err(e) => {
            debug!("Error decoding share token: {}", e);
            None
        }
    }
}

fn try_decode(token: &str) -> Result<DatePlan, CodecError> {
    let bytes = URL_SAFE.decode(normalize(token))?;
    let json = String::from_utf8(bytes)?;
    serde_json::from_str(&json).map_err(CodecError::Json)
}

/// Map any base64 flavour onto the padded URL-safe alphabet.
///
/// Older links used the standard alphabet, and query-string decoding may
/// have turned `+` into a space along the way.
fn normalize(token: &str) -> String {
    let mut out: String = token
        .trim()
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' | ' ' => '-',
            '/' => '_',
            other => other,
        })
        .collect();
    // A remainder of 1 can never be valid base64; leave it for the decoder to reject.
    match out.len() % 4 {
        2 => out.push_str("=="),
        3 => out.push('='),
        _ => {}
    }
    out
}
