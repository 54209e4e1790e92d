// Certificate renewal urgency from days left until expiry.

use crate::models::UrgencyTier;

/// More than this many days left is Ok.
pub const RENEW_SOON_DAYS: i64 = 30;
/// This many days or fewer (including negative, already expired) is Expiring.
pub const EXPIRING_DAYS: i64 = 15;

pub fn classify_certificate_expiry(days_left: i64) -> UrgencyTier {
    if days_left > RENEW_SOON_DAYS {
        UrgencyTier::Ok
    } else if days_left > EXPIRING_DAYS {
        UrgencyTier::RenewSoon
    } else {
        UrgencyTier::Expiring
    }
}
