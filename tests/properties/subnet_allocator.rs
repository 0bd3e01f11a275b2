//! Property tests for subnet allocation.

use std::collections::BTreeSet;

use proptest::prelude::*;

use bootapp::domain::services::SubnetAllocator;
use bootapp::domain::value_objects::{Subnet, SubnetPool};

fn pool() -> impl Strategy<Value = SubnetPool> {
    (0u8..=250, 0u8..=20).prop_map(|(start, len)| {
        SubnetPool::new(start, start.saturating_add(len)).unwrap()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: allocation returns the lowest slot of the pool not in use.
    #[test]
    fn property_allocates_lowest_free_slot(
        pool in pool(),
        used in proptest::collection::btree_set(any::<u8>(), 0..40)
    ) {
        let allocator = SubnetAllocator::new(pool);
        let expected = pool.slots().find(|slot| !used.contains(slot));

        match allocator.allocate(&used) {
            Ok(subnet) => {
                prop_assert_eq!(Some(subnet.slot()), expected);
                prop_assert!(pool.contains(subnet.slot()));
                prop_assert!(!used.contains(&subnet.slot()));
            }
            Err(exhausted) => {
                prop_assert_eq!(expected, None);
                prop_assert_eq!((exhausted.start, exhausted.end), (pool.start(), pool.end()));
            }
        }
    }

    /// PROPERTY: allocating repeatedly never hands out a slot twice and
    /// fills exactly the pool's capacity.
    #[test]
    fn property_repeated_allocation_is_injective(pool in pool()) {
        let allocator = SubnetAllocator::new(pool);
        let mut used = BTreeSet::new();

        while let Ok(subnet) = allocator.allocate(&used) {
            prop_assert!(used.insert(subnet.slot()));
        }
        prop_assert_eq!(used.len(), pool.capacity());
    }

    /// PROPERTY: the CIDR string parses back to the same subnet.
    #[test]
    fn property_subnet_display_parses_back(slot in any::<u8>()) {
        let subnet = Subnet::from_slot(slot);
        let parsed: Subnet = subnet.to_string().parse().unwrap();
        prop_assert_eq!(parsed, subnet);
        prop_assert_eq!(subnet.default_address(), format!("172.{slot}.0.2"));
    }
}
