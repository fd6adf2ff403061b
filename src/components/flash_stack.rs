//! Flash Stack Component
//!
//! Renders the flash board and drives its one-shot dismissal sweep:
//! 5 seconds after load every message then on the board starts its exit
//! animation and is removed 300ms later. The sweep never re-arms, so
//! messages pushed afterwards stay until closed by hand.

use std::time::Duration;

use dioxus::prelude::*;
use showreel_core::flash::{DISMISS_DELAY_MS, EXIT_DURATION_MS};
use showreel_ui::FlashBanner;

use crate::context::{use_epoch, use_flash};

/// Flash message stack with auto-dismissal
#[component]
pub fn FlashStack() -> Element {
    let mut flash = use_flash();
    let epoch = use_epoch();

    // One-shot sweep; the board itself decides what each tick removes.
    use_effect(move || {
        spawn(async move {
            tokio::time::sleep(Duration::from_millis(DISMISS_DELAY_MS)).await;
            flash.write().tick(epoch.now_ms());

            tokio::time::sleep(Duration::from_millis(EXIT_DURATION_MS)).await;
            flash.write().tick(epoch.now_ms());
            tracing::debug!("flash sweep complete");
        });
    });

    let messages = flash.read().messages().to_vec();

    rsx! {
        div { class: "flash-stack",
            for message in messages {
                FlashBanner {
                    key: "{message.id}",
                    message,
                    on_dismiss: move |id| flash.write().dismiss(id),
                }
            }
        }
    }
}
