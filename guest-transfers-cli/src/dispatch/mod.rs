//! Sending a confirmation to one guest
//!
//! Dispatch validates the phone, builds the message, opens the deep link and
//! records the outcome on the guest. Opening is fire-and-forget: the guest is
//! marked `done` as soon as the link has been handed off, even if the opener
//! reported a failure.

pub mod message;
pub mod opener;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::guests::{sanitize_phone, GuestStatus, GuestStore, SnapshotStorage};

pub use message::{build_link, build_message};
pub use opener::{BrowserOpener, LinkOpener, PrintOpener};

/// What happened to the guest
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Link was handed to the opener
    Sent { url: String },
    /// Phone was missing or too short; nothing was sent
    NoWhatsapp { phone: String },
}

/// Send the confirmation for the guest at `index`
pub fn dispatch<S: SnapshotStorage>(
    store: &mut GuestStore<S>,
    index: usize,
    config: &Config,
    opener: &dyn LinkOpener,
) -> Result<DispatchOutcome> {
    let guest = store
        .get(index)
        .with_context(|| format!("No guest at index {} ({} loaded)", index, store.len()))?;

    let phone = sanitize_phone(guest.get("Phone"));
    if phone.is_empty() || phone.len() < config.min_phone_digits {
        log::info!(
            "Guest {} has no usable phone ({} digits), marking no-whatsapp",
            index,
            phone.len()
        );
        store.set_status(index, GuestStatus::NoWhatsapp)?;
        return Ok(DispatchOutcome::NoWhatsapp { phone });
    }

    let text = build_message(guest, config);
    let url = build_link(&config.messaging_host, &phone, &text);

    if let Err(e) = opener.open(&url) {
        log::warn!("Could not open messaging link for guest {}: {:#}", index, e);
    }

    store.set_status(index, GuestStatus::Done)?;
    Ok(DispatchOutcome::Sent { url })
}
