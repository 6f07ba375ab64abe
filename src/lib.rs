//! A minimal simulation of a consistent hashing ring used to distribute incoming requests across a dynamic set of servers
//! The ring is a fixed circular index space of slots, each slot counts the requests hashed onto it
//! Each server joins the ring with a fixed number of virtual nodes to smooth the distribution of keys
//! A virtual node owns all requests hashed into the arc between the previous occupied slot and itself
//!
//! The simulation answers two questions while servers join and leave:
//!     How many requests does each server own right now?
//!     How uneven is the distribution (load factor = most loaded server / average load)?
//!
//! Prerequisites:
//! The ring size needs to exceed servers * virtual nodes by a safe margin, otherwise joining
//! a server fails with Error::RingSaturated once every slot is occupied.
//!
//! There is no network transport, no request forwarding and no persistence; everything is an
//! in memory computation over one owned Ring value, thread safety is left to the caller.

pub mod ring;

pub use ring::load::LoadReport;
pub use ring::{DEFAULT_VNODES, DefaultHashBuilder, Error, Ring};
