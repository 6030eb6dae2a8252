//! # Money Helpers
//!
//! Currency defaults and minor-unit conversion for charge amounts.
//!
//! Clients send decimal major units (`12.34` dollars); the gateway wire
//! wants integer minor units (`1234` cents). Currencies stay plain
//! strings end to end: the caller's casing is echoed back in responses
//! and only lowercased on the wire.

/// Currency assumed when a request omits one
pub const DEFAULT_CURRENCY: &str = "USD";

/// Currencies the service accepts (ISO 4217)
pub const SUPPORTED_CURRENCIES: &[&str] = &["USD"];

/// Case-insensitive membership test against `SUPPORTED_CURRENCIES`
pub fn is_currency_supported(currency: &str) -> bool {
    SUPPORTED_CURRENCIES
        .iter()
        .any(|supported| supported.eq_ignore_ascii_case(currency))
}

/// Currency code as the gateway wire expects it (lowercase)
pub fn gateway_currency(currency: &str) -> String {
    currency.to_lowercase()
}

/// Convert a decimal major-unit amount to integer minor units.
///
/// Rounds half away from zero: `12.345` scales to exactly `1234.5` in
/// binary and becomes `1235`, and `-12.345` becomes `-1235`.
pub fn to_minor_units(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}
