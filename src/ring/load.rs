use std::collections::HashMap;

#[cfg(feature = "derive")]
use serde::{Deserialize, Serialize};

use super::Ring;

/// LoadReport is an owned snapshot of the current load distribution
///
/// * `requests_per_server` - total number of requests owned by each member server
/// * `load_factor` - requests on the most loaded server divided by the average, 0.0 if there is no server or no request yet
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "derive", derive(Serialize, Deserialize))]
pub struct LoadReport {
    pub requests_per_server: HashMap<String, u64>,
    pub load_factor: f64,
}

impl<S> Ring<S> {
    /// Count the requests owned by the virtual node at `slot`.
    ///
    /// A virtual node owns its own slot plus the arc of slots strictly between
    /// the previous occupied slot (walking backward, wrapping past 0) and
    /// itself: the classic rule that a request is served by the first server
    /// found walking clockwise from its hashed position. If `slot` is the only
    /// occupied slot, the walk covers the full ring exactly once.
    ///
    /// Costs O(slots) in the worst case. Good enough for a simulation, a
    /// production router would keep an ordered structure over the occupied
    /// slots and find the predecessor in O(log vnodes) instead.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is not a valid ring index.
    pub fn requests_owned_by(&self, slot: usize) -> u64 {
        let mut owned = self.slots[slot].requests;
        let mut index = (slot + self.slots.len() - 1) % self.slots.len();

        while index != slot && !self.slots[index].server {
            owned += self.slots[index].requests;
            index = (index + self.slots.len() - 1) % self.slots.len();
        }

        owned
    }

    /// Calculate for each member server the total number of requests it owns,
    /// summed over all of its virtual nodes.
    ///
    /// Read only and deterministic for a given ring state.
    pub fn get_load(&self) -> HashMap<String, u64> {
        let mut load = HashMap::with_capacity(self.servers.len());

        for (server, indexes) in &self.servers {
            let owned = indexes
                .iter()
                .map(|&slot| self.requests_owned_by(slot))
                .sum();

            load.insert(server.clone(), owned);
        }

        load
    }

    /// Calculate the overall load factor: requests on the most loaded server
    /// divided by the average across all member servers.
    ///
    /// Returns 0.0 if no server joined yet, and 0.0 if servers exist but no
    /// request was placed so far (instead of dividing by zero).
    pub fn load_factor(&self) -> f64 {
        let load = self.get_load();

        if load.is_empty() {
            return 0.0;
        }

        let total: u64 = load.values().sum();
        let max = load.values().copied().max().unwrap_or(0);
        let average = total as f64 / load.len() as f64;

        if average > 0.0 { max as f64 / average } else { 0.0 }
    }

    /// Take a [`LoadReport`] snapshot of the current distribution.
    pub fn load_report(&self) -> LoadReport {
        LoadReport {
            requests_per_server: self.get_load(),
            load_factor: self.load_factor(),
        }
    }
}
