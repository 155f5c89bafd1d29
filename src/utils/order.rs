//! Order summary and WhatsApp hand-off link

use crate::cart::Cart;
use crate::forms::FormFields;

/// Plain-text order: one line per item, the total, then every form field
pub fn order_summary(cart: &Cart, form: &FormFields, currency: &str) -> String {
    let mut text = String::from("Order Details:\n");
    for item in cart.items() {
        text.push_str(&item.label(currency));
        text.push('\n');
    }
    text.push_str(&format!("Total: {} {}\n", currency, cart.total_display()));
    for (key, value) in form.entries() {
        text.push_str(&format!("{}: {}\n", key, value));
    }
    text
}

/// `https://wa.me/<number>?text=<percent-encoded message>`
pub fn whatsapp_link(number: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", number, urlencoding::encode(message))
}
