use leptos::*;

mod cart;
mod components;
mod config;
mod controller;
mod error;
mod forms;
mod models;
mod utils;
mod views;

use config::SiteConfig;
use controller::{CartAction, CartController, CartEvent};
use utils::storage::BrowserStore;
use views::{ContactView, ShopView};

// ============================================
// Shared context
// ============================================

/// Cart controller and site settings shared by every section
#[derive(Clone, Copy)]
pub struct ShopContext {
    pub controller: RwSignal<CartController<BrowserStore>>,
    pub config: SiteConfig,
}

impl ShopContext {
    /// Runs `action` against the cart and notifies the views.
    /// `None` only if the controller has been disposed.
    pub fn dispatch(&self, action: CartAction) -> Option<CartEvent> {
        self.controller.try_update(|c| c.dispatch(action))
    }
}

// ============================================
// App
// ============================================

#[component]
fn App() -> impl IntoView {
    let config = SiteConfig::from_build_env();
    // Restore the saved cart once on load
    let controller = create_rw_signal(CartController::restore(BrowserStore, config));
    provide_context(ShopContext { controller, config });

    view! {
        <main class="links-mobile">
            <ShopView />
            <ContactView />
        </main>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    utils::init_logging();
    mount_to_body(App);
}
