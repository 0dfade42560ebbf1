use serde::{Deserialize, Serialize};

use crate::{LoyaltyCard, Service, Tier};

/// Everything the data file holds. Loaded whole, mutated, written whole.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub loyalty_cards: Vec<LoyaltyCard>,
}

impl Dataset {
    /// Next service id: one past the current maximum, 1 for an empty catalog.
    pub fn next_service_id(&self) -> u64 {
        self.services.iter().map(|s| s.id).max().map_or(1, |m| m + 1)
    }

    /// Card ids start from the creation time in milliseconds but must stay
    /// unique when two cards are created within the same millisecond.
    pub fn next_card_id(&self, now_millis: u64) -> u64 {
        let floor = self.loyalty_cards.iter().map(|c| c.id).max().map_or(0, |m| m + 1);
        now_millis.max(floor)
    }

    /// Tiers are derived from points; a stored tier is never trusted.
    pub fn rederive_tiers(&mut self) {
        for card in &mut self.loyalty_cards {
            card.tier = Tier::from_points(card.points);
        }
    }

    /// First money field that JSON cannot represent, if any.
    pub fn first_non_finite(&self) -> Option<String> {
        if let Some(s) = self.services.iter().find(|s| !s.price.is_finite()) {
            return Some(format!("service {} price", s.id));
        }
        self.loyalty_cards
            .iter()
            .find(|c| !c.total_spent.is_finite())
            .map(|c| format!("loyalty card {} totalSpent", c.id))
    }
}
