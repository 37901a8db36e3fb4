//! Same-instant collision resolution
//!
//! Backtesting engines evaluate whole bars, so two events can land on the
//! same minute: an entry stopped out within the bar, or a crossover
//! strategy flipping side. Resolution is direction dependent:
//!
//! - a flat entry (weight `0`) supersedes everything already kept at its
//!   instant, taking over that slot
//! - any other repeated entry is dropped; the first writer keeps the slot
//!
//! Distinct instants are never merged and slots keep the order of first
//! appearance.

use log::{debug, warn};
use signalfeed_core::SignalEntry;
use std::collections::HashMap;

/// Collapse entries sharing a `signal_at` key
pub fn resolve_collisions(entries: Vec<SignalEntry>) -> Vec<SignalEntry> {
    let mut resolved: Vec<SignalEntry> = Vec::with_capacity(entries.len());
    let mut slots: HashMap<String, usize> = HashMap::with_capacity(entries.len());

    for entry in entries {
        match slots.get(&entry.signal_at).copied() {
            None => {
                slots.insert(entry.signal_at.clone(), resolved.len());
                resolved.push(entry);
            }
            Some(slot) if entry.is_flat() => {
                debug!(
                    "Flat signal supersedes {:?} at {}",
                    resolved[slot].weight(),
                    entry.signal_at
                );
                resolved[slot] = entry;
            }
            Some(slot) => {
                warn!(
                    "Dropping {:?} at {}: instant already holds {:?}",
                    entry.weight(),
                    entry.signal_at,
                    resolved[slot].weight()
                );
            }
        }
    }

    resolved
}
