fn main() {
    // WhatsApp number override must be digits only (wa.me rejects anything else)
    if let Ok(number) = std::env::var("LINKS_WHATSAPP_NUMBER") {
        if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
            println!(
                "cargo:warning=LINKS_WHATSAPP_NUMBER should contain digits only, got {:?}",
                number
            );
        } else {
            println!("cargo:warning=WhatsApp number set to {}", number);
        }
    }

    // Rebuild when the embedded settings change
    println!("cargo:rerun-if-env-changed=LINKS_WHATSAPP_NUMBER");
    println!("cargo:rerun-if-env-changed=LINKS_CURRENCY");
}
