//! Cart controller
//!
//! Owns the cart and its store. UI handlers never touch the cart directly:
//! they dispatch a [`CartAction`] and react to the returned [`CartEvent`].

use rust_decimal::Decimal;

use crate::cart::Cart;
use crate::config::SiteConfig;
use crate::error::StorageError;
use crate::forms::FormFields;
use crate::utils::order::{order_summary, whatsapp_link};
use crate::utils::storage::{load_cart, save_cart, KeyValueStore};

/// User actions on the cart
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    Add { name: String, unit_price: Decimal },
    ChangeQuantity { index: usize, delta: i32 },
    Checkout(FormFields),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    Updated,
    /// Out-of-range index; nothing changed
    Ignored,
    /// Form invalid, cart untouched
    CheckoutRejected { invalid: Vec<&'static str> },
    /// Cart cleared; `link` should be opened in a new tab
    CheckedOut { link: String },
}

pub struct CartController<S: KeyValueStore> {
    cart: Cart,
    store: S,
    config: SiteConfig,
}

impl<S: KeyValueStore> CartController<S> {
    pub fn new(store: S, config: SiteConfig) -> Self {
        CartController {
            cart: Cart::new(),
            store,
            config,
        }
    }

    /// Seeds the cart from the stored snapshot. A missing, unreadable or
    /// corrupt snapshot leaves the cart empty.
    pub fn restore(store: S, config: SiteConfig) -> Self {
        let mut controller = CartController::new(store, config);
        match load_cart(&controller.store, config.cart_key) {
            Ok(Some(items)) => {
                controller.cart = Cart::from_items(items);
                log::debug!("restored cart with {} line(s)", controller.cart.len());
            }
            Ok(None) => {}
            Err(e) => log::warn!("discarding stored cart: {}", e),
        }
        controller
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn dispatch(&mut self, action: CartAction) -> CartEvent {
        match action {
            CartAction::Add { name, unit_price } => {
                log::debug!("add to cart: {}", name);
                self.cart.add_item(&name, unit_price);
                self.persist_or_log();
                CartEvent::Updated
            }
            CartAction::ChangeQuantity { index, delta } => {
                if self.cart.change_quantity(index, delta) {
                    self.persist_or_log();
                    CartEvent::Updated
                } else {
                    log::debug!("ignoring quantity change for missing line {}", index);
                    CartEvent::Ignored
                }
            }
            CartAction::Checkout(form) => self.checkout(&form),
        }
    }

    fn checkout(&mut self, form: &FormFields) -> CartEvent {
        let invalid = form.invalid_keys();
        if !invalid.is_empty() {
            log::debug!("checkout rejected, invalid fields: {:?}", invalid);
            return CartEvent::CheckoutRejected { invalid };
        }

        if self.cart.is_empty() {
            log::debug!("checking out an empty cart");
        }
        let summary = order_summary(&self.cart, form, self.config.currency);
        let link = whatsapp_link(self.config.whatsapp_number, &summary);
        log::info!(
            "checkout: {} line(s), total {}",
            self.cart.len(),
            self.cart.total_display()
        );

        self.cart.clear();
        self.persist_or_log();
        CartEvent::CheckedOut { link }
    }

    /// Writes the current snapshot
    pub fn persist(&mut self) -> Result<(), StorageError> {
        save_cart(&mut self.store, self.config.cart_key, self.cart.items())
    }

    fn persist_or_log(&mut self) {
        if let Err(e) = self.persist() {
            log::warn!("cart not saved: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CartLineItem;
    use crate::utils::storage::testing::{FailingStore, MemoryStore};

    fn add(name: &str, price: i64) -> CartAction {
        CartAction::Add {
            name: name.to_string(),
            unit_price: Decimal::new(price, 0),
        }
    }

    fn filled_form() -> FormFields {
        let mut form = FormFields::checkout();
        form.set("name", "Ali Khan");
        form.set("phone", "03001234567");
        form.set("address", "Main Bazaar");
        form
    }

    fn controller() -> CartController<MemoryStore> {
        CartController::new(MemoryStore::default(), SiteConfig::default())
    }

    #[test]
    fn every_mutation_is_persisted() {
        let mut c = controller();
        assert_eq!(c.dispatch(add("Screen Repair", 1500)), CartEvent::Updated);
        assert_eq!(c.dispatch(add("Battery", 800)), CartEvent::Updated);
        assert_eq!(
            c.dispatch(CartAction::ChangeQuantity { index: 0, delta: 1 }),
            CartEvent::Updated
        );

        let stored = load_cart(&c.store, "cart").unwrap().unwrap();
        assert_eq!(stored, c.cart().items());
        assert_eq!(stored[0].quantity, 2);
    }

    #[test]
    fn restore_rebuilds_identical_cart() {
        let mut c = controller();
        c.dispatch(add("Screen Repair", 1500));
        c.dispatch(add("Screen Repair", 1500));
        c.dispatch(add("Battery", 800));
        let before = c.cart().clone();

        let restored = CartController::restore(c.store, SiteConfig::default());
        assert_eq!(restored.cart(), &before);
        assert_eq!(restored.cart().total_display(), "3800.00");
    }

    #[test]
    fn corrupt_snapshot_restores_empty() {
        let mut store = MemoryStore::default();
        store.set("cart", "[{\"name\":").unwrap();
        let c = CartController::restore(store, SiteConfig::default());
        assert!(c.cart().is_empty());
    }

    #[test]
    fn snapshot_with_overflowing_price_restores_safely() {
        let mut store = MemoryStore::default();
        store
            .set("cart", r#"[{"name":"A","price":5e28,"quantity":2},{"name":"Battery","price":800,"quantity":1}]"#)
            .unwrap();
        let c = CartController::restore(store, SiteConfig::default());
        assert_eq!(c.cart().len(), 1);
        assert_eq!(c.cart().items()[0].name, "Battery");
        assert_eq!(c.cart().total_display(), "800.00");
    }

    #[test]
    fn adding_past_decimal_range_does_not_panic() {
        let mut c = controller();
        c.dispatch(CartAction::Add { name: "A".into(), unit_price: Decimal::MAX });
        c.dispatch(CartAction::Add { name: "A".into(), unit_price: Decimal::MAX });
        assert_eq!(c.cart().items()[0].quantity, 2);
        assert_eq!(c.cart().total(), Decimal::MAX);
        assert!(matches!(
            c.dispatch(CartAction::Checkout(filled_form())),
            CartEvent::CheckedOut { .. }
        ));
    }

    #[test]
    fn out_of_range_change_does_not_write() {
        let mut c = controller();
        assert_eq!(
            c.dispatch(CartAction::ChangeQuantity { index: 3, delta: -1 }),
            CartEvent::Ignored
        );
        assert!(c.store.entries.is_empty());
    }

    #[test]
    fn removal_shrinks_stored_snapshot() {
        let mut c = controller();
        c.dispatch(add("Battery", 800));
        c.dispatch(add("Charging Port", 600));
        c.dispatch(CartAction::ChangeQuantity { index: 0, delta: -1 });

        assert_eq!(c.cart().len(), 1);
        let stored = load_cart(&c.store, "cart").unwrap().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].name, "Charging Port");
    }

    #[test]
    fn storage_failure_keeps_memory_state() {
        let mut c = CartController::new(FailingStore::default(), SiteConfig::default());
        c.dispatch(add("Battery", 800));
        c.dispatch(add("Battery", 800));
        assert_eq!(c.cart().items()[0].quantity, 2);
        assert!(matches!(c.persist(), Err(StorageError::Write(_))));
    }

    #[test]
    fn checkout_clears_cart_and_snapshot() {
        let mut c = controller();
        c.dispatch(add("Screen Repair", 1500));
        c.dispatch(add("Battery", 800));

        let link = match c.dispatch(CartAction::Checkout(filled_form())) {
            CartEvent::CheckedOut { link } => link,
            other => panic!("expected checkout, got {:?}", other),
        };
        assert!(link.starts_with("https://wa.me/923466523823?text=Order%20Details%3A%0A"));
        assert!(link.contains("Total%3A%20PKR%202300.00"));
        assert!(link.contains("name%3A%20Ali%20Khan"));

        assert!(c.cart().is_empty());
        assert_eq!(load_cart(&c.store, "cart").unwrap(), Some(Vec::new()));
    }

    #[test]
    fn checkout_with_missing_field_keeps_cart() {
        let mut c = controller();
        c.dispatch(add("Screen Repair", 1500));
        let before = c.cart().clone();

        let mut form = filled_form();
        form.set("phone", "");
        assert_eq!(
            c.dispatch(CartAction::Checkout(form)),
            CartEvent::CheckoutRejected { invalid: vec!["phone"] }
        );
        assert_eq!(c.cart(), &before);
        assert_eq!(
            load_cart(&c.store, "cart").unwrap().unwrap(),
            vec![CartLineItem::new("Screen Repair", Decimal::new(1500, 0))]
        );
    }

    #[test]
    fn empty_cart_can_check_out() {
        let mut c = controller();
        let event = c.dispatch(CartAction::Checkout(filled_form()));
        assert!(matches!(event, CartEvent::CheckedOut { ref link } if link.contains("Total%3A%20PKR%200.00")));
    }

    #[test]
    fn checkout_uses_configured_number_and_currency() {
        let config = SiteConfig {
            whatsapp_number: "15550001111",
            currency: "USD",
            ..SiteConfig::default()
        };
        let mut c = CartController::new(MemoryStore::default(), config);
        c.dispatch(add("Battery", 25));
        let CartEvent::CheckedOut { link } = c.dispatch(CartAction::Checkout(filled_form())) else {
            panic!("expected checkout");
        };
        assert!(link.starts_with("https://wa.me/15550001111?text="));
        assert!(link.contains("Battery%20-%20USD%2025%20x%201"));
    }
}
