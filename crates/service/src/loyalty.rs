//! Loyalty card manager.
//!
//! Cards are addressed by email (case-insensitive) or by numeric id; see
//! [`CardKey::parse`] for how a path segment is resolved.

use chrono::{DateTime, Utc};
use models::{Dataset, LoyaltyCard, LoyaltyCardUpdate, NewLoyaltyCard};
use tracing::info;

use crate::errors::ServiceError;

/// How a card is looked up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardKey {
    Email(String),
    Id(u64),
}

impl CardKey {
    /// A segment containing `@` is always an email. Otherwise it must be a
    /// numeric id; anything else cannot name a card.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.contains('@') {
            return Some(CardKey::Email(raw.to_string()));
        }
        raw.parse::<u64>().ok().map(CardKey::Id)
    }

    fn matches(&self, card: &LoyaltyCard) -> bool {
        match self {
            CardKey::Email(email) => card.has_email(email),
            CardKey::Id(id) => card.id == *id,
        }
    }
}

pub fn list(ds: &Dataset) -> Vec<LoyaltyCard> {
    ds.loyalty_cards.clone()
}

pub fn get(ds: &Dataset, key: &CardKey) -> Result<LoyaltyCard, ServiceError> {
    ds.loyalty_cards
        .iter()
        .find(|c| key.matches(c))
        .cloned()
        .ok_or_else(|| ServiceError::not_found("Loyalty card"))
}

pub fn get_by_email(ds: &Dataset, email: &str) -> Result<LoyaltyCard, ServiceError> {
    get(ds, &CardKey::Email(email.to_string()))
}

pub fn get_by_id(ds: &Dataset, id: u64) -> Result<LoyaltyCard, ServiceError> {
    get(ds, &CardKey::Id(id))
}

pub fn create(ds: &mut Dataset, input: NewLoyaltyCard, now: DateTime<Utc>) -> Result<LoyaltyCard, ServiceError> {
    input.validate()?;
    if ds.loyalty_cards.iter().any(|c| c.has_email(&input.email)) {
        return Err(ServiceError::Conflict("Loyalty card already exists for this email".into()));
    }
    let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
    let card = input.into_card(ds.next_card_id(millis), now);
    info!(id = card.id, "loyalty card created");
    ds.loyalty_cards.push(card.clone());
    Ok(card)
}

/// Apply deltas (and optional contact fields), re-derive the tier and stamp
/// `lastUpdated`.
pub fn accrue(
    ds: &mut Dataset,
    key: &CardKey,
    update: LoyaltyCardUpdate,
    now: DateTime<Utc>,
) -> Result<LoyaltyCard, ServiceError> {
    update.validate()?;
    let card = ds
        .loyalty_cards
        .iter_mut()
        .find(|c| key.matches(c))
        .ok_or_else(|| ServiceError::not_found("Loyalty card"))?;
    if let Some(s) = update.add_spent {
        // an infinite total would be written as null and make the file unreadable
        if !(card.total_spent + s).is_finite() {
            return Err(ServiceError::Validation("totalSpent would overflow".into()));
        }
    }
    let before = card.tier;
    card.accrue(&update, now);
    info!(id = card.id, points = card.points, tier = card.tier.as_str(), promoted = card.tier != before, "loyalty card accrued");
    Ok(card.clone())
}
