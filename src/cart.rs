//! Cart state

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{saturated, CartLineItem};

/// Render model for the cart list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub rows: Vec<String>,
    pub total: String,
    pub item_count: u32,
}

/// Ordered line items, at most one per name, every quantity >= 1
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Cart::default()
    }

    /// Builds a cart from a stored snapshot, merging duplicate names and
    /// dropping zero quantities. Rows that would push the total out of
    /// `Decimal` range are dropped.
    pub fn from_items(items: Vec<CartLineItem>) -> Self {
        let mut cart = Cart::new();
        for item in items.into_iter().filter(|i| i.quantity > 0) {
            let mut merged = cart.clone();
            match merged.items.iter_mut().find(|i| i.name == item.name) {
                Some(existing) => existing.quantity = existing.quantity.saturating_add(item.quantity),
                None => merged.items.push(item),
            }
            if merged.checked_total().is_some() {
                cart = merged;
            } else {
                log::warn!("dropping stored cart row whose total overflows");
            }
        }
        cart
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn add_item(&mut self, name: &str, unit_price: Decimal) {
        match self.items.iter_mut().find(|i| i.name == name) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(1),
            None => self.items.push(CartLineItem::new(name, unit_price)),
        }
    }

    /// Adds `delta` to the quantity at `index`, removing the line once it
    /// reaches zero. Returns false (and leaves the cart alone) for an
    /// out-of-range index.
    pub fn change_quantity(&mut self, index: usize, delta: i32) -> bool {
        let Some(item) = self.items.get_mut(index) else {
            return false;
        };
        let quantity = i64::from(item.quantity) + i64::from(delta);
        if quantity <= 0 {
            self.items.remove(index);
        } else {
            item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
        true
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// `None` if any line or the running sum overflows
    pub fn checked_total(&self) -> Option<Decimal> {
        self.items.iter().try_fold(Decimal::ZERO, |sum, item| {
            sum.checked_add(item.checked_line_total()?)
        })
    }

    /// Saturating sum; never panics on absurd prices
    pub fn total(&self) -> Decimal {
        self.items.iter().fold(Decimal::ZERO, |sum, item| {
            let line = item.line_total();
            sum.checked_add(line).unwrap_or_else(|| saturated(line))
        })
    }

    /// Total rounded half away from zero, always two decimals ("3800.00")
    pub fn total_display(&self) -> String {
        let rounded = self
            .total()
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{:.2}", rounded)
    }

    pub fn item_count(&self) -> u32 {
        self.items.iter().fold(0u32, |n, i| n.saturating_add(i.quantity))
    }

    pub fn view(&self, currency: &str) -> CartView {
        CartView {
            rows: self.items.iter().map(|i| i.label(currency)).collect(),
            total: self.total_display(),
            item_count: self.item_count(),
        }
    }
}
