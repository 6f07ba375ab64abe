use std::collections::HashMap;
use std::fmt::Display;
use std::hash::{BuildHasher, Hasher};

pub mod load;
mod membership;

/// FNV-1a 64 bit offset basis.
const FNV_OFFSET: u64 = 14695981039346656037;
/// FNV-1a 64 bit prime.
const FNV_PRIME: u64 = 1099511628211;

/// Number of virtual nodes each server places on the ring, unless configured otherwise.
pub const DEFAULT_VNODES: usize = 200;

#[derive(Clone, PartialEq, Debug)]
pub struct DefaultHashBuilder;

impl BuildHasher for DefaultHashBuilder {
    type Hasher = FnvHasher;

    fn build_hasher(&self) -> Self::Hasher {
        FnvHasher { hash: FNV_OFFSET }
    }
}

/// Rolling FNV-1a hash: XOR each byte into the accumulator, then multiply by the prime.
/// Pure and reproducible across runs, which keeps the whole simulation deterministic.
#[derive(Clone, Debug)]
pub struct FnvHasher {
    hash: u64,
}

impl Hasher for FnvHasher {
    fn finish(&self) -> u64 {
        self.hash
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.hash ^= u64::from(*byte);
            self.hash = self.hash.wrapping_mul(FNV_PRIME);
        }
    }
}

// Slot is an internal struct used for one addressable position on the ring:
// how many requests hashed onto exactly this index and whether a server
// currently owns a virtual node here.
#[derive(Clone, Default, PartialEq, Debug)]
struct Slot {
    requests: u64,
    server: bool,
}

#[derive(Debug, PartialEq)]
pub enum Error {
    /// every slot of the ring is occupied, there is no room for another virtual node
    RingSaturated,
    /// the server identifier is already a member of the ring
    ServerAlreadyJoined(String),
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::RingSaturated => {
                write!(f, "ring is saturated, no free slot left for a virtual node")
            }
            Error::ServerAlreadyJoined(server) => {
                write!(f, "server '{server}' already joined the ring")
            }
        }
    }
}

/// Ring represents a fixed size circular index space used for consistent hashing
/// Ring provides methods to place requests and to add and remove servers (each backed by virtual nodes)
/// Ring can calculate how many requests each server currently owns and how uneven that distribution is
///
/// # Examples
///
/// ```
/// use hashring_simulator::Ring;
///
/// let mut ring = Ring::new(10_000);
///
/// ring.add_request("req_1");
/// ring.add_request("req_2");
///
/// ring.add_server("alpha").unwrap();
///
/// assert_eq!(ring.get_load()["alpha"], 2);
/// assert_eq!(ring.load_factor(), 1.0);
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct Ring<S = DefaultHashBuilder> {
    hash_builder: S,
    slots: Vec<Slot>,
    servers: HashMap<String, Vec<usize>>,
    vnodes: usize,
    occupied: usize,
    requests: u64,
}

impl Ring {
    /// Create a new `Ring` with `slots` positions and the default number of
    /// virtual nodes per server.
    ///
    /// # Arguments
    ///
    /// * `slots` - size of the circular index space, fixed for the lifetime of the ring
    pub fn new(slots: usize) -> Ring {
        Self::with_vnodes(slots, DEFAULT_VNODES)
    }

    /// Create a new `Ring` with a custom virtual node count.
    ///
    /// # Arguments
    ///
    /// * `slots` - size of the circular index space, fixed for the lifetime of the ring
    /// * `vnodes` - number of virtual nodes per server (higher number means more even distribution of requests across all servers, but higher processing effort)
    pub fn with_vnodes(slots: usize, vnodes: usize) -> Ring {
        Self::with_hasher(slots, vnodes, DefaultHashBuilder)
    }
}

impl<S> Ring<S> {
    /// Creates an empty `Ring` which will use the given hash builder instead of
    /// the default FNV-1a one.
    ///
    /// # Arguments
    ///
    /// * `slots` - size of the circular index space, fixed for the lifetime of the ring
    /// * `vnodes` - number of virtual nodes per server
    /// * `hash_builder` - implementation of BuildHasher to provide a Hasher for the Ring
    pub fn with_hasher(slots: usize, vnodes: usize, hash_builder: S) -> Ring<S> {
        Ring {
            hash_builder,
            slots: vec![Slot::default(); slots.max(1)],
            servers: HashMap::new(),
            vnodes: vnodes.max(1),
            occupied: 0,
            requests: 0,
        }
    }

    /// Get the number of servers currently on the ring.
    pub fn server_count(&self) -> usize {
        self.servers.len()
    }

    /// Get the number of occupied slots (virtual nodes) on the ring.
    pub fn vnode_count(&self) -> usize {
        self.occupied
    }

    /// Get the size of the circular index space.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if no server is a member of the ring.
    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    /// Get the total number of requests ever placed on the ring.
    pub fn request_total(&self) -> u64 {
        self.requests
    }

    /// Iterate over the identifiers of all member servers, in no particular order.
    pub fn servers(&self) -> impl Iterator<Item = &str> {
        self.servers.keys().map(String::as_str)
    }

    /// Get the slot indices of the virtual nodes owned by `server`,
    /// or None if the server is not a member of the ring.
    pub fn virtual_nodes(&self, server: &str) -> Option<&[usize]> {
        self.servers.get(server).map(Vec::as_slice)
    }
}
