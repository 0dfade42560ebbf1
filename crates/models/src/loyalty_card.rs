use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Status band of a card, derived from accumulated points only.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    #[default]
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl Tier {
    pub const SILVER_POINTS: u64 = 200;
    pub const GOLD_POINTS: u64 = 500;
    pub const PLATINUM_POINTS: u64 = 1000;

    pub fn from_points(points: u64) -> Self {
        if points >= Self::PLATINUM_POINTS {
            Tier::Platinum
        } else if points >= Self::GOLD_POINTS {
            Tier::Gold
        } else if points >= Self::SILVER_POINTS {
            Tier::Silver
        } else {
            Tier::Bronze
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Bronze => "Bronze",
            Tier::Silver => "Silver",
            Tier::Gold => "Gold",
            Tier::Platinum => "Platinum",
        }
    }
}

/// One card per customer; `email` is the case-insensitive natural key.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoyaltyCard {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub points: u64,
    #[serde(default)]
    pub visits: u64,
    #[serde(default)]
    pub total_spent: f64,
    #[serde(default)]
    pub tier: Tier,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

impl LoyaltyCard {
    pub fn has_email(&self, email: &str) -> bool {
        self.email.trim().to_lowercase() == email.trim().to_lowercase()
    }

    /// Add the provided deltas and re-derive the tier. Counters saturate
    /// instead of wrapping.
    pub fn accrue(&mut self, update: &LoyaltyCardUpdate, now: DateTime<Utc>) {
        if let Some(p) = update.add_points {
            self.points = self.points.saturating_add(p);
        }
        if let Some(v) = update.add_visits {
            self.visits = self.visits.saturating_add(v);
        }
        if let Some(s) = update.add_spent {
            self.total_spent += s;
        }
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(phone) = &update.phone {
            self.phone = phone.clone();
        }
        self.tier = Tier::from_points(self.points);
        self.last_updated = Some(now);
    }
}

/// Create input. Counters, tier and timestamps are server-controlled.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct NewLoyaltyCard {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

impl NewLoyaltyCard {
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.name.trim().is_empty() {
            return Err(ModelError::Validation("name required".into()));
        }
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(ModelError::Validation("invalid email".into()));
        }
        Ok(())
    }

    pub fn into_card(self, id: u64, now: DateTime<Utc>) -> LoyaltyCard {
        LoyaltyCard {
            id,
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            points: 0,
            visits: 0,
            total_spent: 0.0,
            tier: Tier::Bronze,
            created_at: now,
            last_updated: None,
        }
    }
}

/// Accrual body for `PUT /api/loyalty-cards/:key`.
///
/// Deltas are unsigned so negative values fail to deserialize; `add_spent`
/// is checked in [`LoyaltyCardUpdate::validate`]. `name`/`phone` allow the
/// admin console to correct contact details in the same call.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoyaltyCardUpdate {
    #[serde(default)]
    pub add_points: Option<u64>,
    #[serde(default)]
    pub add_visits: Option<u64>,
    #[serde(default)]
    pub add_spent: Option<f64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl LoyaltyCardUpdate {
    pub fn validate(&self) -> Result<(), ModelError> {
        if let Some(s) = self.add_spent {
            if !s.is_finite() || s < 0.0 {
                return Err(ModelError::Validation("addSpent must be a non-negative number".into()));
            }
        }
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(ModelError::Validation("name must not be blank".into()));
            }
        }
        Ok(())
    }
}
