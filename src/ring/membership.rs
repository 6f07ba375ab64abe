use std::hash::{BuildHasher, Hasher};

use super::{Error, Ring};

impl<S> Ring<S>
where
    S: BuildHasher,
{
    /// Place a request on the ring: hash the raw `key` and increment the
    /// request counter of the resulting slot.
    ///
    /// Requests may accumulate before any server joined, they become
    /// attributable once a virtual node claims the arc containing their slot.
    pub fn add_request(&mut self, key: &str) {
        let slot = self.slot_for(key);
        self.slots[slot].requests += 1;
        self.requests += 1;
    }

    /// Join `server` to the ring.
    ///
    /// For each replica index `i` the salted key `"{server}|{i}"` is hashed
    /// onto the ring; if the candidate slot is already occupied, the next free
    /// slot is found by probing forward. After a successful join the server
    /// owns exactly `vnodes` distinct occupied slots.
    ///
    /// # Errors
    ///
    /// * `Error::ServerAlreadyJoined` - `server` is already a member; a second
    ///   join would leave it owning more than `vnodes` slots
    /// * `Error::RingSaturated` - no free slot is left for a virtual node.
    ///   Slots claimed by this call are released again, so a failed join
    ///   leaves the ring unchanged
    pub fn add_server(&mut self, server: &str) -> Result<(), Error> {
        if self.servers.contains_key(server) {
            return Err(Error::ServerAlreadyJoined(server.to_string()));
        }

        let mut indexes = Vec::with_capacity(self.vnodes);

        for id in 0..self.vnodes {
            if self.occupied == self.slots.len() {
                self.release(&indexes);
                return Err(Error::RingSaturated);
            }

            let mut slot = self.slot_for(&format!("{server}|{id}"));

            // local linear probing, not rehashing: can cluster virtual nodes
            // under heavy collision but terminates while a free slot exists
            while self.slots[slot].server {
                slot = (slot + 1) % self.slots.len();
            }

            self.slots[slot].server = true;
            self.occupied += 1;
            indexes.push(slot);
        }

        self.servers.insert(server.to_string(), indexes);

        Ok(())
    }

    /// Remove `server` from the ring, releasing all of its virtual nodes.
    /// Removing a server that never joined is a no-op.
    pub fn remove_server(&mut self, server: &str) {
        // remove() instead of a lookup so an unknown id cannot fabricate
        // an empty membership entry
        if let Some(indexes) = self.servers.remove(server) {
            self.release(&indexes);
        }
    }

    fn release(&mut self, indexes: &[usize]) {
        for &slot in indexes {
            self.slots[slot].server = false;
            self.occupied -= 1;
        }
    }

    // An internal function for converting a key into a slot index. The key's
    // raw bytes are fed to the hasher directly (no salting, no terminator) and
    // the 64 bit hash is reduced modulo the ring size.
    pub fn slot_for(&self, key: &str) -> usize {
        let mut hasher = self.hash_builder.build_hasher();
        hasher.write(key.as_bytes());

        (hasher.finish() % self.slots.len() as u64) as usize
    }
}
