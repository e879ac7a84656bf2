//! Persistent store: in-memory state plus the durable-storage boundary.

use storefront_cache::{Cache, Storage};
use storefront_observability::StructuredLogger;

use crate::cart::{Cart, CartLine};
use crate::i18n::Locale;
use crate::money::Currency;
use crate::state::{AppState, StateKey, StateUpdate};

/// Default namespace for storage slots.
pub const DEFAULT_STORAGE_PREFIX: &str = "storefront";

/// Owns the [`AppState`] and mirrors its persisted subset (`cart`, `lang`,
/// `currency`) into durable storage.
///
/// Storage failures never reach the caller; they are logged and the
/// in-memory state stays authoritative.
pub struct Store<S> {
    state: AppState,
    cache: Cache<S>,
    logger: StructuredLogger,
}

impl<S: Storage> Store<S> {
    /// Create a store with default state over `storage`.
    pub fn new(storage: S, prefix: impl Into<String>, logger: &StructuredLogger) -> Self {
        Self {
            state: AppState::default(),
            cache: Cache::new(storage, prefix),
            logger: logger.for_component("store"),
        }
    }

    /// Read access to the whole state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Write one field. Never fails and does not persist.
    pub fn set(&mut self, update: StateUpdate) -> StateKey {
        let key = update.key();
        update.apply(&mut self.state);
        key
    }

    /// Overlay persisted fields onto the current state.
    ///
    /// Absent slots keep their defaults. A malformed cart or an unknown
    /// locale or currency code is ignored.
    pub fn load_persisted(&mut self) {
        match self.cache.get::<Vec<CartLine>>("cart") {
            Ok(Some(lines)) => self.state.cart = Cart::from_lines(lines),
            Ok(None) => {}
            Err(e) => self
                .logger
                .warn_builder("ignoring malformed persisted cart")
                .field("key", self.cache.key("cart"))
                .error(&e)
                .emit(),
        }

        if let Some(code) = self.read_slot("lang") {
            match Locale::from_code(&code) {
                Some(locale) => self.state.locale = locale,
                None => self.warn_unknown("lang", &code),
            }
        }

        if let Some(code) = self.read_slot("currency") {
            match Currency::from_code(&code) {
                Some(currency) => self.state.currency = currency,
                None => self.warn_unknown("currency", &code),
            }
        }
    }

    /// Write `key` to durable storage. No-op for non-persisted keys.
    pub fn persist(&self, key: StateKey) {
        let Some(slot) = key.slot() else {
            return;
        };

        let result = match key {
            StateKey::Cart => self.cache.set(slot, &self.state.cart),
            StateKey::Locale => self.cache.set_str(slot, self.state.locale.code()),
            StateKey::Currency => self.cache.set_str(slot, self.state.currency.code()),
            _ => Ok(()),
        };

        if let Err(e) = result {
            self.logger
                .warn_builder("storage write failed")
                .field("key", self.cache.key(slot))
                .error(&e)
                .emit();
        }
    }

    /// Set a persisted field and write it through.
    pub fn set_and_persist(&mut self, update: StateUpdate) -> StateKey {
        let key = self.set(update);
        self.persist(key);
        key
    }

    pub(crate) fn cart_mut(&mut self) -> &mut Cart {
        &mut self.state.cart
    }

    pub(crate) fn logger(&self) -> &StructuredLogger {
        &self.logger
    }

    /// The underlying storage.
    pub fn storage(&self) -> &S {
        self.cache.storage()
    }

    fn read_slot(&self, slot: &str) -> Option<String> {
        match self.cache.get_str(slot) {
            Ok(value) => value,
            Err(e) => {
                self.logger
                    .warn_builder("storage read failed")
                    .field("key", self.cache.key(slot))
                    .error(&e)
                    .emit();
                None
            }
        }
    }

    fn warn_unknown(&self, slot: &str, code: &str) {
        self.logger
            .warn_builder("ignoring unknown persisted code")
            .field("key", self.cache.key(slot))
            .field("value", code)
            .emit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::money::Money;
    use storefront_cache::MemoryStorage;
    use storefront_observability::{LogLevel, MemoryLog};

    fn store(storage: &MemoryStorage, log: &MemoryLog) -> Store<MemoryStorage> {
        Store::new(
            storage.clone(),
            DEFAULT_STORAGE_PREFIX,
            &StructuredLogger::in_memory(log),
        )
    }

    #[test]
    fn test_absent_slots_keep_defaults() {
        let log = MemoryLog::new();
        let mut store = store(&MemoryStorage::new(), &log);
        store.load_persisted();
        assert_eq!(*store.state(), AppState::default());
        assert!(log.entries().is_empty());
    }

    #[test]
    fn test_locale_and_currency_round_trip() {
        let storage = MemoryStorage::new();
        let log = MemoryLog::new();
        let mut first = store(&storage, &log);
        first.set_and_persist(StateUpdate::Locale(Locale::Ar));
        first.set_and_persist(StateUpdate::Currency(Currency::EGP));
        assert_eq!(storage.raw("storefront:lang").as_deref(), Some("ar"));
        assert_eq!(storage.raw("storefront:currency").as_deref(), Some("EGP"));

        let mut reloaded = store(&storage, &log);
        reloaded.load_persisted();
        assert_eq!(reloaded.state().locale, Locale::Ar);
        assert_eq!(reloaded.state().currency, Currency::EGP);
    }

    #[test]
    fn test_malformed_cart_is_absent() {
        let storage = MemoryStorage::new();
        storage.set_item("storefront:cart", "[{\"id\": oops").unwrap();
        storage.set_item("storefront:currency", "EUR").unwrap();
        let log = MemoryLog::new();
        let mut store = store(&storage, &log);
        store.load_persisted();

        assert!(store.state().cart.is_empty());
        assert_eq!(store.state().currency, Currency::EUR);
        assert!(log.contains("malformed persisted cart"));
    }

    #[test]
    fn test_unknown_codes_ignored() {
        let storage = MemoryStorage::new();
        storage.set_item("storefront:lang", "fr").unwrap();
        storage.set_item("storefront:currency", "XYZ").unwrap();
        let log = MemoryLog::new();
        let mut store = store(&storage, &log);
        store.load_persisted();

        assert_eq!(store.state().locale, Locale::En);
        assert_eq!(store.state().currency, Currency::USD);
        assert_eq!(log.at_level(LogLevel::Warn).len(), 2);
    }

    #[test]
    fn test_persist_non_persisted_key_is_noop() {
        let storage = MemoryStorage::new();
        let log = MemoryLog::new();
        let mut store = store(&storage, &log);
        let key = store.set(StateUpdate::Search("lamp".into()));
        store.persist(key);
        store.persist(StateKey::Products);
        assert!(storage.keys().is_empty());
    }

    #[test]
    fn test_write_failure_is_logged_not_raised() {
        let storage = MemoryStorage::new();
        storage.set_fail_writes(true);
        let log = MemoryLog::new();
        let mut store = store(&storage, &log);
        store.set_and_persist(StateUpdate::Currency(Currency::GBP));

        assert_eq!(store.state().currency, Currency::GBP);
        assert!(log.contains("storage write failed"));
    }

    #[test]
    fn test_set_products() {
        let log = MemoryLog::new();
        let mut store = store(&MemoryStorage::new(), &log);
        let key = store.set(StateUpdate::Products(vec![Product::new(
            1,
            "Lamp",
            Money::new(100, Currency::USD),
        )]));
        assert_eq!(key, StateKey::Products);
        assert_eq!(store.state().products.len(), 1);
    }
}
