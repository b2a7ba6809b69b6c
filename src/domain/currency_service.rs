//! Currency display lookups.
//!
//! The ledger itself is currency-agnostic and performs no conversion;
//! this service only resolves the user's preferred currency code to a
//! display symbol. Lookups memoize the stored profile read in an
//! explicit cache owned by the service (never a module-level global),
//! with an invalidation hook that must run whenever the currency
//! preference changes.

use std::sync::{Arc, Mutex, PoisonError};

use anyhow::Result;
use log::info;

use crate::config::LedgerConfig;
use crate::storage::json::{JsonConnection, ProfileRepository};
use crate::storage::traits::{Connection, ProfileStorage};

use super::models::person::Person;

/// Currency used when the profile has no preference.
pub const DEFAULT_CURRENCY: &str = "USD";

const CURRENCY_SYMBOLS: &[(&str, &str)] = &[
    ("USD", "$"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("INR", "₹"),
    ("JPY", "¥"),
    ("CNY", "¥"),
    ("AUD", "A$"),
    ("CAD", "C$"),
    ("CHF", "CHF"),
    ("SEK", "kr"),
    ("NZD", "NZ$"),
    ("SGD", "S$"),
];

/// Symbol for a currency code, falling back to `$` for codes outside
/// the table.
pub fn symbol_for(code: &str) -> &'static str {
    CURRENCY_SYMBOLS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, s)| *s)
        .unwrap_or("$")
}

#[derive(Debug, Clone)]
struct CachedCurrency {
    code: String,
    symbol: &'static str,
}

pub struct CurrencyService {
    profile_repository: ProfileRepository,
    current_user_id: String,
    cache: Mutex<Option<CachedCurrency>>,
}

impl CurrencyService {
    pub fn new(connection: Arc<JsonConnection>, config: &LedgerConfig) -> Self {
        Self {
            profile_repository: connection.create_profile_repository(),
            current_user_id: config.current_user_id.clone(),
            cache: Mutex::new(None),
        }
    }

    fn cached(&self) -> Result<CachedCurrency> {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(entry) = cache.as_ref() {
            return Ok(entry.clone());
        }

        let code = self
            .profile_repository
            .get_user()?
            .and_then(|user| user.currency)
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
        let entry = CachedCurrency {
            symbol: symbol_for(&code),
            code,
        };
        *cache = Some(entry.clone());
        Ok(entry)
    }

    /// The user's currency code (`"USD"` when unset).
    pub fn code(&self) -> Result<String> {
        Ok(self.cached()?.code)
    }

    /// Display symbol for the user's currency.
    pub fn symbol(&self) -> Result<&'static str> {
        Ok(self.cached()?.symbol)
    }

    /// Format an amount with the user's currency symbol, two decimals.
    pub fn format(&self, amount: f64) -> Result<String> {
        Ok(format!("{}{:.2}", self.symbol()?, amount))
    }

    /// Drop the memoized profile read. Must be called whenever the
    /// currency preference changes.
    pub fn invalidate(&self) {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        *cache = None;
    }

    /// Persist a new currency preference and invalidate immediately.
    pub fn set_currency(&self, code: &str) -> Result<()> {
        let mut user = self.profile_repository.get_user()?.unwrap_or_else(|| Person {
            id: self.current_user_id.clone(),
            name: "You".to_string(),
            email: "you@example.com".to_string(),
            avatar: None,
            currency: None,
        });
        user.currency = Some(code.to_string());
        self.profile_repository.set_user(&user)?;
        self.invalidate();

        info!("Currency preference set to {}", code);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (CurrencyService, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let connection = Arc::new(JsonConnection::new(temp_dir.path()).unwrap());
        let config = LedgerConfig::default();
        (CurrencyService::new(connection, &config), temp_dir)
    }

    #[test]
    fn defaults_to_usd() {
        let (service, _tmp) = setup();
        assert_eq!(service.code().unwrap(), "USD");
        assert_eq!(service.symbol().unwrap(), "$");
        assert_eq!(service.format(12.5).unwrap(), "$12.50");
    }

    #[test]
    fn unknown_code_falls_back_to_dollar_symbol() {
        assert_eq!(symbol_for("XXX"), "$");
        assert_eq!(symbol_for("EUR"), "€");
    }

    #[test]
    fn set_currency_takes_effect_immediately() {
        let (service, _tmp) = setup();

        // Prime the cache with the default first
        assert_eq!(service.symbol().unwrap(), "$");

        service.set_currency("GBP").unwrap();
        assert_eq!(service.code().unwrap(), "GBP");
        assert_eq!(service.format(3.0).unwrap(), "£3.00");
    }

    #[test]
    fn invalidate_rereads_the_profile() {
        let (service, tmp) = setup();
        assert_eq!(service.code().unwrap(), "USD");

        // Another handle to the same storage changes the preference
        let connection = Arc::new(JsonConnection::new(tmp.path()).unwrap());
        let other = CurrencyService::new(connection, &LedgerConfig::default());
        other.set_currency("SEK").unwrap();

        // Stale until told otherwise, fresh after invalidation
        assert_eq!(service.code().unwrap(), "USD");
        service.invalidate();
        assert_eq!(service.code().unwrap(), "SEK");
        assert_eq!(service.format(9.0).unwrap(), "kr9.00");
    }
}
