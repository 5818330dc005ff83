use rand::Rng;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of the random suffix used for proposal ids.
const PROPOSAL_ID_LEN: usize = 9;

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::with_capacity(13);
    while n > 0 {
        digits.push(BASE36[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    // digits are drawn from an ASCII table
    digits.into_iter().map(char::from).collect()
}

/// Generate an identifier for a shared date plan:
/// `share_` + base36 epoch millis + base36 random 64-bit value.
pub fn generate_share_id() -> String {
    let millis = chrono::Utc::now().timestamp_millis().max(0) as u64;
    let salt: u64 = rand::rng().random();
    format!("share_{}{}", to_base36(millis), to_base36(salt))
}

/// Generate a short random identifier for a proposal.
pub fn generate_proposal_id() -> String {
    let mut rng = rand::rng();
    (0..PROPOSAL_ID_LEN)
        .map(|_| char::from(BASE36[rng.random_range(0..BASE36.len())]))
        .collect()
}
