//! Subnet Allocator Domain Service
//!
//! Hands out the lowest free slot of a fixed pool, so a slot freed by
//! removing a project is the next one reused.

use std::collections::BTreeSet;

use crate::domain::value_objects::{Subnet, SubnetPool};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no available subnets (all {start}-{end} in use)")]
pub struct SubnetExhausted {
    pub start: u8,
    pub end: u8,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SubnetAllocator {
    pool: SubnetPool,
}

impl SubnetAllocator {
    pub fn new(pool: SubnetPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> SubnetPool {
        self.pool
    }

    /// Smallest slot of the pool not in `used`. Slots outside the pool are
    /// ignored.
    pub fn allocate(&self, used: &BTreeSet<u8>) -> Result<Subnet, SubnetExhausted> {
        self.pool
            .slots()
            .find(|slot| !used.contains(slot))
            .map(Subnet::from_slot)
            .ok_or(SubnetExhausted {
                start: self.pool.start(),
                end: self.pool.end(),
            })
    }
}
