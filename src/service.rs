use crate::card::{CardStatus, GiftCard};
use crate::error::CardError;
use crate::request::Action;
use chrono::{Months, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;

/// Maximum amount accepted by a single load.
const MAX_LOAD_AMOUNT: Decimal = dec!(500);
/// Redemptions are only accepted in multiples of this step. Loads have no
/// such restriction; the asymmetry is intentional business policy.
const REDEEM_STEP: Decimal = dec!(5);

/// In-memory card registry and request dispatcher.
///
/// `handle` is the single entry point: it validates the code format,
/// locates the card, routes the action, and converts every outcome
/// (including entity-level errors) into a fixed response string. Callers
/// only ever see strings; there is no structured error surface.
pub struct GiftCardService {
    cards: Vec<GiftCard>,
}

impl GiftCardService {
    /// Creates a service over an explicit seed of cards.
    pub fn new(cards: Vec<GiftCard>) -> Self {
        Self { cards }
    }

    /// The stock demo registry: one active card with a year of validity.
    pub fn demo() -> Self {
        Self::new(vec![GiftCard::new(
            "GC-1234-5678",
            dec!(150.00),
            CardStatus::Active,
            Utc::now() + Months::new(12),
        )])
    }

    /// Registers an additional card. Codes are assumed unique; lookup is
    /// first-match.
    pub fn add_card(&mut self, card: GiftCard) {
        self.cards.push(card);
    }

    /// Handles one request. Checks short-circuit in order: code format,
    /// lookup, action, then per-action validation.
    pub fn handle(&mut self, code: &str, action: &str, amount: Option<Decimal>) -> String {
        if !is_valid_code(code) {
            return "Invalid code".to_string();
        }

        let Some(card) = self.cards.iter_mut().find(|c| c.code() == code) else {
            return "Card not found".to_string();
        };

        match Action::parse(action) {
            Some(Action::Balance) => format!(
                "Balance: {} EUR, Status: {}, Expires: {}",
                fmt_eur(card.balance()),
                card.status(),
                card.expires_at().format("%Y-%m-%d"),
            ),
            Some(Action::Redeem) => Self::redeem(card, amount),
            Some(Action::Load) => Self::load(card, amount),
            Some(Action::Status) => Self::update_status(card, amount),
            None => "Invalid action".to_string(),
        }
    }

    fn redeem(card: &mut GiftCard, amount: Option<Decimal>) -> String {
        let Some(amount) = amount.filter(|a| *a > Decimal::ZERO) else {
            return "Invalid amount".to_string();
        };
        if amount % REDEEM_STEP != Decimal::ZERO {
            return "Amount must be multiple of 5".to_string();
        }
        if let Some(response) = check_validity(card) {
            return response;
        }
        match card.redeem(amount) {
            Ok(balance) => format!(
                "Success: Redeemed {} EUR. New balance: {} EUR",
                fmt_eur(amount),
                fmt_eur(balance),
            ),
            Err(CardError::InsufficientFunds) => "Insufficient funds".to_string(),
            // Not reachable after check_validity; kept so new entity
            // failure modes degrade to a generic message.
            Err(CardError::InvalidState) => "Card invalid".to_string(),
        }
    }

    fn load(card: &mut GiftCard, amount: Option<Decimal>) -> String {
        let Some(amount) = amount.filter(|a| *a > Decimal::ZERO) else {
            return "Invalid amount".to_string();
        };
        if amount > MAX_LOAD_AMOUNT {
            return "Amount exceeds maximum load limit".to_string();
        }
        if let Some(response) = check_validity(card) {
            return response;
        }
        match card.load(amount) {
            Ok(balance) => format!(
                "Success: Loaded {} EUR. New balance: {} EUR",
                fmt_eur(amount),
                fmt_eur(balance),
            ),
            Err(_) => "Card invalid".to_string(),
        }
    }

    fn update_status(card: &mut GiftCard, amount: Option<Decimal>) -> String {
        let Some(code) = amount else {
            return "Status parameter required (0=Active, 1=Inactive, 2=Expired, 3=Blocked)"
                .to_string();
        };
        // The parameter arrives as a decimal; fractional codes truncate.
        let status = code.trunc().to_i64().and_then(CardStatus::from_code);
        let Some(status) = status else {
            return "Invalid status".to_string();
        };
        card.set_status(status);
        format!("Status updated to: {status}")
    }
}

/// Pre-flight validity check for load/redeem. Expiry by date wins over a
/// non-active status when both apply.
fn check_validity(card: &GiftCard) -> Option<String> {
    if card.is_valid() {
        None
    } else if card.is_expired() {
        Some("Card expired".to_string())
    } else {
        Some("Card inactive".to_string())
    }
}

/// Card codes are `GC-` followed by two hyphen-separated groups of four
/// digits, e.g. `GC-1234-5678`.
fn is_valid_code(code: &str) -> bool {
    let bytes = code.as_bytes();
    bytes.len() == 12
        && bytes.starts_with(b"GC-")
        && bytes[3..7].iter().all(u8::is_ascii_digit)
        && bytes[7] == b'-'
        && bytes[8..12].iter().all(u8::is_ascii_digit)
}

/// Renders a monetary value with two decimals and a comma separator, the
/// wire format expected by consumers ("150,00").
fn fmt_eur(value: Decimal) -> String {
    format!("{value:.2}").replace('.', ",")
}
