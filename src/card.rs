use crate::error::CardError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStatus {
    Active,
    Inactive,
    Expired,
    Blocked,
}

impl CardStatus {
    /// Maps the external numeric status codes (0..=3) to a status.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Active),
            1 => Some(Self::Inactive),
            2 => Some(Self::Expired),
            3 => Some(Self::Blocked),
            _ => None,
        }
    }
}

impl fmt::Display for CardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Expired => "Expired",
            Self::Blocked => "Blocked",
        };
        f.write_str(name)
    }
}

/// A single gift card. The entity enforces its own structural invariants
/// (no negative balance, no mutation through an invalid card); business
/// policy such as load limits lives in the dispatcher.
///
/// Note that `status` and `expires_at` are independent: a card can be
/// time-expired while its status is still `Active`, or carry an explicit
/// `Expired` status before its date has passed.
#[derive(Debug, Clone, PartialEq)]
pub struct GiftCard {
    code: String,
    balance: Decimal,
    status: CardStatus,
    expires_at: DateTime<Utc>,
}

impl GiftCard {
    pub fn new(
        code: impl Into<String>,
        balance: Decimal,
        status: CardStatus,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            code: code.into(),
            balance,
            status,
            expires_at,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn status(&self) -> CardStatus {
        self.status
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// A card accepts loads and redemptions only while it is `Active` and
    /// its expiry date has not passed.
    pub fn is_valid(&self) -> bool {
        self.status == CardStatus::Active && Utc::now() <= self.expires_at
    }

    /// Whether the expiry date has passed, regardless of status.
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Adds funds and returns the new balance. No upper bound here; the
    /// maximum-load policy belongs to the dispatcher.
    pub fn load(&mut self, amount: Decimal) -> Result<Decimal, CardError> {
        if !self.is_valid() {
            return Err(CardError::InvalidState);
        }
        self.balance += amount;
        Ok(self.balance)
    }

    /// Deducts funds and returns the new balance.
    pub fn redeem(&mut self, amount: Decimal) -> Result<Decimal, CardError> {
        if !self.is_valid() {
            return Err(CardError::InvalidState);
        }
        if amount > self.balance {
            return Err(CardError::InsufficientFunds);
        }
        self.balance -= amount;
        Ok(self.balance)
    }

    /// Unconditional overwrite; status changes are always allowed.
    pub fn set_status(&mut self, status: CardStatus) {
        self.status = status;
    }
}
