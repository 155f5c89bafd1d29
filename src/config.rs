//! Site settings embedded at build time

/// Shop's WhatsApp number (international format, digits only)
pub const DEFAULT_WHATSAPP_NUMBER: &str = "923466523823";
pub const DEFAULT_CURRENCY: &str = "PKR";

pub const CART_STORAGE_KEY: &str = "cart";
pub const CONTACT_API_ENDPOINT: &str = "/api/contact";
pub const CONTACT_FALLBACK_ENDPOINT: &str = "/contact.php";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteConfig {
    pub whatsapp_number: &'static str,
    pub currency: &'static str,
    pub cart_key: &'static str,
    pub contact_api: &'static str,
    pub contact_fallback: &'static str,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER,
            currency: DEFAULT_CURRENCY,
            cart_key: CART_STORAGE_KEY,
            contact_api: CONTACT_API_ENDPOINT,
            contact_fallback: CONTACT_FALLBACK_ENDPOINT,
        }
    }
}

impl SiteConfig {
    /// Defaults, overridden by `LINKS_WHATSAPP_NUMBER` / `LINKS_CURRENCY` at build time
    pub fn from_build_env() -> Self {
        SiteConfig {
            whatsapp_number: option_env!("LINKS_WHATSAPP_NUMBER")
                .filter(|n| !n.is_empty())
                .unwrap_or(DEFAULT_WHATSAPP_NUMBER),
            currency: option_env!("LINKS_CURRENCY")
                .filter(|c| !c.is_empty())
                .unwrap_or(DEFAULT_CURRENCY),
            ..SiteConfig::default()
        }
    }

    /// `/api/contact` when the page advertises it, `/contact.php` otherwise
    pub fn contact_endpoint(&self, api_available: bool) -> &'static str {
        if api_available {
            self.contact_api
        } else {
            self.contact_fallback
        }
    }
}
