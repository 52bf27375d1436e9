//! IP address validators
//!
//! Parsing is delegated to [`std::net::IpAddr`]: dotted-decimal IPv4 with no
//! leading zeros, and RFC 4291 IPv6 text including `::` compression and a
//! dotted IPv4 tail. Zone identifiers (`%eth0`), CIDR suffixes and brackets
//! are rejected.

use std::net::{IpAddr, Ipv6Addr};

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates an IPv4 or IPv6 address.
    ///
    /// ```
    /// use strcheck_validator::foundation::Validate;
    /// use strcheck_validator::validators::ip_address;
    ///
    /// assert!(ip_address().is_valid("255.255.255.255"));
    /// assert!(ip_address().is_valid("2001:db8:0000:1:1:1:1:1"));
    /// assert!(!ip_address().is_valid("256.0.0.0"));
    /// ```
    pub IpAddress for str;
    rule(input) { input.parse::<IpAddr>().is_ok() }
    error(input) { ValidationError::invalid_format("ip") }
    fn ip_address();
}

crate::validator! {
    /// Validates an address with a 4-byte representation.
    ///
    /// Plain IPv4 passes, and so does an IPv4-mapped IPv6 address such as
    /// `::ffff:192.0.2.1`, since it denotes an IPv4 host.
    pub Ipv4 for str;
    rule(input) { as_ipv4(input).is_some() }
    error(input) { ValidationError::invalid_format("ipv4") }
    fn ipv4();
}

crate::validator! {
    /// Validates IPv6 address text.
    pub Ipv6 for str;
    rule(input) { input.parse::<Ipv6Addr>().is_ok() }
    error(input) { ValidationError::invalid_format("ipv6") }
    fn ipv6();
}

fn as_ipv4(input: &str) -> Option<std::net::Ipv4Addr> {
    match input.parse::<IpAddr>().ok()? {
        IpAddr::V4(v4) => Some(v4),
        IpAddr::V6(v6) => v6.to_ipv4_mapped(),
    }
}
