//! LocalStorage persistence

use crate::error::StorageError;
use crate::models::CartLineItem;

/// Per-origin string key/value store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl BrowserStore {
    fn storage(&self) -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        // local_storage() throws when storage is disabled, returns None when absent
        window
            .local_storage()
            .map_err(|e| StorageError::Read(format!("{:?}", e)))?
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read(format!("{:?}", e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        // QuotaExceededError ends up here
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

/// Writes the whole line-item list as a JSON array
pub fn save_cart<S: KeyValueStore>(
    store: &mut S,
    key: &str,
    items: &[CartLineItem],
) -> Result<(), StorageError> {
    let json = serde_json::to_string(items).map_err(StorageError::Encode)?;
    store.set(key, &json)
}

/// `Ok(None)` when nothing has been stored yet
pub fn load_cart<S: KeyValueStore>(
    store: &S,
    key: &str,
) -> Result<Option<Vec<CartLineItem>>, StorageError> {
    match store.get(key)? {
        Some(json) => serde_json::from_str(&json)
            .map(Some)
            .map_err(StorageError::Corrupt),
        None => Ok(None),
    }
}


#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::testing::MemoryStore;
    use super::*;

    #[test]
    fn round_trip_keeps_order() {
        let items = vec![
            CartLineItem { name: "Screen Repair".into(), unit_price: Decimal::new(1500, 0), quantity: 2 },
            CartLineItem { name: "Battery".into(), unit_price: Decimal::new(800, 0), quantity: 1 },
            CartLineItem { name: "Case".into(), unit_price: Decimal::new(1250, 2), quantity: 4 },
        ];
        let mut store = MemoryStore::default();
        save_cart(&mut store, "cart", &items).unwrap();
        assert_eq!(load_cart(&store, "cart").unwrap(), Some(items));
    }

    #[test]
    fn missing_key_is_not_an_error() {
        let store = MemoryStore::default();
        assert_eq!(load_cart(&store, "cart").unwrap(), None);
    }

    #[test]
    fn garbage_snapshot_is_corrupt() {
        let mut store = MemoryStore::default();
        store.set("cart", "{not json").unwrap();
        assert!(matches!(load_cart(&store, "cart"), Err(StorageError::Corrupt(_))));
    }

    #[test]
    fn negative_quantity_is_corrupt() {
        let mut store = MemoryStore::default();
        store
            .set("cart", r#"[{"name":"Battery","price":800,"quantity":-1}]"#)
            .unwrap();
        assert!(matches!(load_cart(&store, "cart"), Err(StorageError::Corrupt(_))));
    }
}
