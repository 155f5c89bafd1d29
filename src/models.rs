//! Data structures

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ============================================
// Cart
// ============================================

/// One distinct product entry in the cart.
///
/// Serialized as `{"name", "price", "quantity"}` with `price` as a JSON number,
/// the layout already sitting in visitors' local storage. Prices go through
/// `f64` on the way to storage, so only about 15 significant digits survive a
/// save and restore; whole-rupee and two-decimal prices are exact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub name: String,
    #[serde(rename = "price", with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    pub quantity: u32,
}

impl CartLineItem {
    pub fn new(name: impl Into<String>, unit_price: Decimal) -> Self {
        CartLineItem {
            name: name.into(),
            unit_price,
            quantity: 1,
        }
    }

    /// `None` when price x quantity does not fit in a `Decimal`
    pub fn checked_line_total(&self) -> Option<Decimal> {
        self.unit_price.checked_mul(Decimal::from(self.quantity))
    }

    /// Saturates at `Decimal::MAX` / `Decimal::MIN` instead of panicking
    pub fn line_total(&self) -> Decimal {
        self.checked_line_total().unwrap_or_else(|| saturated(self.unit_price))
    }

    /// "Screen Repair - PKR 1500 x 2"
    pub fn label(&self, currency: &str) -> String {
        format!(
            "{} - {} {} x {}",
            self.name,
            currency,
            self.unit_price.normalize(),
            self.quantity
        )
    }
}

/// Bound a result overflowed towards, following the sign of `towards`
pub fn saturated(towards: Decimal) -> Decimal {
    if towards.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    }
}

// ============================================
// Service catalog
// ============================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceOffer {
    pub name: &'static str,
    pub description: &'static str,
    /// Whole rupees
    pub price: i64,
}

impl ServiceOffer {
    pub fn unit_price(&self) -> Decimal {
        Decimal::new(self.price, 0)
    }
}

pub const SERVICES: &[ServiceOffer] = &[
    ServiceOffer {
        name: "Screen Repair",
        description: "Cracked or unresponsive display replaced with a tested panel.",
        price: 1500,
    },
    ServiceOffer {
        name: "Battery",
        description: "Battery replacement for fast drain, swelling or random shutdowns.",
        price: 800,
    },
    ServiceOffer {
        name: "Charging Port",
        description: "Loose or dead charging port cleaned or replaced.",
        price: 600,
    },
    ServiceOffer {
        name: "Software Flashing",
        description: "Firmware reinstall for boot loops, hangs and failed updates.",
        price: 1000,
    },
    ServiceOffer {
        name: "Water Damage Service",
        description: "Board cleaning and drying with component-level diagnosis.",
        price: 2000,
    },
];

// ============================================
// UI state
// ============================================

/// Contact form alert state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
}

impl SubmitStatus {
    /// Bootstrap alert classes; `d-none` hides the alert while idle
    pub fn alert_class(&self) -> &'static str {
        match self {
            SubmitStatus::Idle => "alert d-none",
            SubmitStatus::Sending => "alert alert-info",
            SubmitStatus::Sent => "alert alert-success",
            SubmitStatus::Failed => "alert alert-danger",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            SubmitStatus::Idle => "",
            SubmitStatus::Sending => "Sending...",
            SubmitStatus::Sent => "Message sent. We will contact you shortly.",
            SubmitStatus::Failed => "Unable to send message. Please try WhatsApp or call directly.",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, SubmitStatus::Sending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_drops_trailing_zero_scale() {
        let item = CartLineItem {
            name: "Screen Repair".to_string(),
            unit_price: Decimal::new(150000, 2),
            quantity: 2,
        };
        assert_eq!(item.label("PKR"), "Screen Repair - PKR 1500 x 2");
        assert_eq!(item.line_total(), Decimal::new(3000, 0));
    }

    #[test]
    fn huge_line_total_saturates() {
        let item = CartLineItem {
            name: "A".to_string(),
            unit_price: Decimal::MAX,
            quantity: 2,
        };
        assert_eq!(item.checked_line_total(), None);
        assert_eq!(item.line_total(), Decimal::MAX);
    }

    #[test]
    fn two_decimal_price_survives_snapshot() {
        let item = CartLineItem::new("Tablet Screen", Decimal::new(12345699, 2));
        let json = serde_json::to_string(&item).unwrap();
        let back: CartLineItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back.unit_price, Decimal::new(12345699, 2));
    }

    #[test]
    fn snapshot_uses_numeric_price() {
        let item = CartLineItem::new("Battery", Decimal::new(800, 0));
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["name"], "Battery");
        assert_eq!(json["quantity"], 1);
        assert!(json["price"].is_number());
        assert_eq!(json["price"].as_f64(), Some(800.0));
    }

    #[test]
    fn reads_snapshot_written_by_old_script() {
        let item: CartLineItem =
            serde_json::from_str(r#"{"name":"Charging Port","price":600,"quantity":3}"#).unwrap();
        assert_eq!(item.unit_price, Decimal::new(600, 0));
        assert_eq!(item.quantity, 3);
    }

    #[test]
    fn catalog_prices_are_whole_rupees() {
        assert!(SERVICES.iter().all(|s| s.unit_price().scale() == 0 && s.price > 0));
    }

    #[test]
    fn failed_alert_suggests_another_channel() {
        assert!(SubmitStatus::Failed.message().contains("WhatsApp"));
        assert_eq!(SubmitStatus::Idle.alert_class(), "alert d-none");
        assert!(SubmitStatus::Sending.is_pending());
    }
}
