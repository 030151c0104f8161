use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use time::{Duration, OffsetDateTime};

pub const TRIAL_DAYS: i64 = 30;

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SubscriptionTier {
    #[default]
    Free,
    Paid,
}

/// A household's billing standing, evaluated against an explicit clock.
///
/// A `paid` tier with no expiry is a legacy permanent plan and stays
/// premium forever; an expiry in the past demotes the household even if the
/// stored tier still says `paid`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SubscriptionStatus {
    pub tier: SubscriptionTier,
    pub premium_until: Option<OffsetDateTime>,
}

impl SubscriptionStatus {
    pub fn is_premium(&self, now: OffsetDateTime) -> bool {
        if self.tier != SubscriptionTier::Paid {
            return false;
        }
        match self.premium_until {
            Some(expiry) => now < expiry,
            None => true,
        }
    }

    /// Status granted to a trial household: paid access for [`TRIAL_DAYS`]
    /// from `now`.
    pub fn trial(now: OffsetDateTime) -> Self {
        Self {
            tier: SubscriptionTier::Paid,
            premium_until: Some(now + Duration::days(TRIAL_DAYS)),
        }
    }
}
