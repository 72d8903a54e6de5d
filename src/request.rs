use rust_decimal::Decimal;
use serde::Deserialize;

/// The closed action vocabulary of the service. The external string is
/// parsed case-insensitively at the boundary; unknown strings stay
/// unparsed so the dispatcher can answer "Invalid action".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Balance,
    Redeem,
    Load,
    Status,
}

impl Action {
    pub fn parse(action: &str) -> Option<Self> {
        match action.to_ascii_lowercase().as_str() {
            "balance" => Some(Self::Balance),
            "redeem" => Some(Self::Redeem),
            "load" => Some(Self::Load),
            "status" => Some(Self::Status),
            _ => None,
        }
    }
}

/// One row of the request stream: `code,action,amount`. The amount column
/// is optional; for `status` it carries the numeric status code.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Request {
    pub code: String,
    pub action: String,
    pub amount: Option<Decimal>,
}
