//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4`] for representing an IPv4 network in CIDR notation,
//! used to walk the candidate pool one block at a time.

use std::error::Error;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
fn get_cidr_mask(len: u8) -> Result<u32, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Returns the network address following the given subnet.
fn ip_after_subnet(addr: Ipv4Addr, cidr: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    if cidr > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        let subnet_size: u64 = 1 << (MAX_LENGTH - cidr);
        let network_bits = (u32::from(addr) & get_cidr_mask(cidr)?) as u64;
        let next_subnet_bits = network_bits + subnet_size;
        if next_subnet_bits > u32::MAX as u64 {
            return Err("Next subnet calculation overflowed".into());
        }
        Ok(Ipv4Addr::from(next_subnet_bits as u32))
    }
}

/// IPv4 network with CIDR notation support.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl Ipv4 {
    /// The block of the same size directly after this one.
    pub fn next_subnet(&self) -> Result<Ipv4, Box<dyn Error>> {
        Ok(Ipv4 {
            addr: ip_after_subnet(self.addr, self.mask)?,
            mask: self.mask,
        })
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
