//! the default hash is FNV-1a, but the builder seam accepts any BuildHasher;
//! plug in SipHasher and check that the ring behaves the same way

use std::collections::HashMap;
use std::hash::BuildHasher;

use hashring_simulator::Ring;
use siphasher::sip::SipHasher;

#[derive(Clone, Debug)]
struct SipHashBuilder;

impl BuildHasher for SipHashBuilder {
    type Hasher = SipHasher;

    fn build_hasher(&self) -> Self::Hasher {
        SipHasher::new()
    }
}

#[test]
fn ring_works_with_a_custom_hasher() {
    let mut ring = Ring::with_hasher(1_000, 50, SipHashBuilder);

    for x in 0..200 {
        ring.add_request(&format!("req_{x}"));
    }

    ring.add_server("alpha").expect("ring has free slots");
    assert_eq!(ring.virtual_nodes("alpha").map(<[usize]>::len), Some(50));

    let expected: HashMap<String, u64> = [("alpha".to_string(), 200)].into();
    assert_eq!(ring.get_load(), expected);
}

#[test]
fn custom_hasher_is_deterministic_and_in_range() {
    let first = Ring::with_hasher(777, 10, SipHashBuilder);
    let second = Ring::with_hasher(777, 10, SipHashBuilder);

    for x in 0..1_000 {
        let key = format!("req_{x}");
        let slot = first.slot_for(&key);

        assert!(slot < first.slot_count());
        assert_eq!(slot, second.slot_for(&key));
    }
}
