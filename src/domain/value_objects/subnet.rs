//! Subnet value objects
//!
//! A project owns one `/16` range `172.<slot>.0.0/16`. The slot (second
//! octet) is what the allocator hands out; the CIDR string is what gets
//! persisted and passed to the container runtime.

use std::fmt;
use std::str::FromStr;

/// First octet shared by every allocated range.
const FIRST_OCTET: u8 = 172;

/// A project's `/16` address range, identified by its slot number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Subnet {
    slot: u8,
}

impl Subnet {
    pub const fn from_slot(slot: u8) -> Self {
        Self { slot }
    }

    pub const fn slot(&self) -> u8 {
        self.slot
    }

    /// Address conventionally given to the project's main container (`x.y.0.2`).
    pub fn default_address(&self) -> String {
        self.container_address(0)
    }

    /// Address for the container at `index`, counting from `x.y.0.2`.
    pub fn container_address(&self, index: u8) -> String {
        format!(
            "{}.{}.0.{}",
            FIRST_OCTET,
            self.slot,
            u16::from(index) + 2
        )
    }
}

impl fmt::Display for Subnet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.0.0/16", FIRST_OCTET, self.slot)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid subnet '{0}': expected 172.<n>.0.0/16")]
pub struct SubnetParseError(pub String);

impl FromStr for Subnet {
    type Err = SubnetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SubnetParseError(s.to_string());

        let (address, prefix) = s.trim().split_once('/').ok_or_else(invalid)?;
        if prefix != "16" {
            return Err(invalid());
        }

        let octets: Vec<&str> = address.split('.').collect();
        if octets.len() != 4 || octets[0] != FIRST_OCTET.to_string() {
            return Err(invalid());
        }
        if octets[2] != "0" || octets[3] != "0" {
            return Err(invalid());
        }

        let slot = octets[1].parse::<u8>().map_err(|_| invalid())?;
        Ok(Self { slot })
    }
}

/// Closed interval of slots the allocator may hand out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubnetPool {
    start: u8,
    end: u8,
}

impl SubnetPool {
    /// 172.18.0.0/16 through 172.31.0.0/16.
    pub const DEFAULT: SubnetPool = SubnetPool { start: 18, end: 31 };

    /// Returns `None` when `start > end`.
    pub fn new(start: u8, end: u8) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    pub const fn start(&self) -> u8 {
        self.start
    }

    pub const fn end(&self) -> u8 {
        self.end
    }

    pub fn contains(&self, slot: u8) -> bool {
        (self.start..=self.end).contains(&slot)
    }

    pub fn capacity(&self) -> usize {
        usize::from(self.end - self.start) + 1
    }

    pub fn slots(&self) -> impl Iterator<Item = u8> {
        self.start..=self.end
    }
}

impl Default for SubnetPool {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subnet_display_is_cidr() {
        assert_eq!(Subnet::from_slot(18).to_string(), "172.18.0.0/16");
    }

    #[test]
    fn subnet_parses_its_own_display() {
        let subnet: Subnet = "172.24.0.0/16".parse().unwrap();
        assert_eq!(subnet.slot(), 24);
    }

    #[test]
    fn subnet_rejects_foreign_ranges() {
        assert!("10.0.0.0/8".parse::<Subnet>().is_err());
        assert!("172.18.0.0/24".parse::<Subnet>().is_err());
        assert!("172.18.1.0/16".parse::<Subnet>().is_err());
        assert!("172.300.0.0/16".parse::<Subnet>().is_err());
        assert!("".parse::<Subnet>().is_err());
    }

    #[test]
    fn container_addresses_start_at_dot_two() {
        let subnet = Subnet::from_slot(19);
        assert_eq!(subnet.default_address(), "172.19.0.2");
        assert_eq!(subnet.container_address(3), "172.19.0.5");
    }

    #[test]
    fn pool_rejects_inverted_bounds() {
        assert!(SubnetPool::new(31, 18).is_none());
        assert_eq!(SubnetPool::new(20, 20).unwrap().capacity(), 1);
    }

    #[test]
    fn default_pool_has_fourteen_slots() {
        let pool = SubnetPool::default();
        assert_eq!(pool.capacity(), 14);
        assert!(pool.contains(18));
        assert!(pool.contains(31));
        assert!(!pool.contains(32));
    }
}
