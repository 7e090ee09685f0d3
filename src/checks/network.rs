//! DNS resolution and public-routability check.
//!
//! Resolves the FQDN and classifies every returned address. Connections are
//! only considered safe when all resolved addresses are publicly routable:
//! one internal address disqualifies the URL even if other records are
//! public, closing SSRF vectors through DNS rebinding to internal addresses.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use hickory_resolver::TokioAsyncResolver;

use crate::config::EvalOptions;
use crate::error_handling::{ErrorKind, ValidationError};

/// Resolves an FQDN and requires every returned address to be publicly
/// routable.
///
/// Reserved, link-local, unspecified, multicast, documentation, benchmark,
/// and shared-address-space addresses always disqualify; loopback and
/// private-range addresses disqualify unless the corresponding option is
/// set. `localhost` bypasses the check entirely when `allow_localhost` is
/// set (it resolves to loopback by definition).
///
/// # Errors
///
/// `ResolutionError` when the lookup fails or returns no addresses,
/// `RoutabilityError` when any address is disqualified.
pub async fn is_resolvable_and_public_routable(
    fqdn: &str,
    options: &EvalOptions,
    resolver: &TokioAsyncResolver,
) -> Result<(), ValidationError> {
    if options.allow_localhost && fqdn.eq_ignore_ascii_case("localhost") {
        return Ok(());
    }

    let lookup = resolver.lookup_ip(fqdn).await.map_err(|e| {
        ValidationError::new(ErrorKind::ResolutionError, format!("error resolving FQDN: {e}"))
    })?;

    let mut found_any = false;
    for ip in lookup.iter() {
        found_any = true;
        if let Some(reason) = disqualify_ip(ip, options) {
            return Err(ValidationError::new(
                ErrorKind::RoutabilityError,
                format!("{fqdn} resolves to {ip} which is {reason}"),
            ));
        }
    }
    if !found_any {
        return Err(ValidationError::new(
            ErrorKind::ResolutionError,
            format!("{fqdn} resolved to no addresses"),
        ));
    }
    Ok(())
}

/// Classifies an address against the routability policy.
///
/// Returns the disqualification reason, or `None` when the address is
/// acceptable under the given options.
pub(crate) fn disqualify_ip(ip: IpAddr, options: &EvalOptions) -> Option<&'static str> {
    match ip {
        IpAddr::V4(v4) => disqualify_ipv4(v4, options),
        IpAddr::V6(v6) => disqualify_ipv6(v6, options),
    }
}

fn disqualify_ipv4(ip: Ipv4Addr, options: &EvalOptions) -> Option<&'static str> {
    let o = ip.octets();
    // This-network 0.0.0.0/8
    if o[0] == 0 {
        return Some("unspecified");
    }
    // Loopback 127.0.0.0/8
    if o[0] == 127 {
        return (!options.allow_loopback_ip).then_some("loopback");
    }
    // Link-local 169.254.0.0/16
    if o[0] == 169 && o[1] == 254 {
        return Some("link-local");
    }
    // Private 10.0.0.0/8, 172.16.0.0/12, 192.168.0.0/16
    if o[0] == 10 || (o[0] == 172 && (16..=31).contains(&o[1])) || (o[0] == 192 && o[1] == 168) {
        return (!options.allow_private_ip).then_some("private-range");
    }
    // Shared address space (CGN) 100.64.0.0/10
    if o[0] == 100 && (64..=127).contains(&o[1]) {
        return Some("shared-address-space");
    }
    // IETF protocol assignments 192.0.0.0/24
    if o[0] == 192 && o[1] == 0 && o[2] == 0 {
        return Some("reserved");
    }
    // Documentation 192.0.2.0/24, 198.51.100.0/24, 203.0.113.0/24
    if (o[0] == 192 && o[1] == 0 && o[2] == 2)
        || (o[0] == 198 && o[1] == 51 && o[2] == 100)
        || (o[0] == 203 && o[1] == 0 && o[2] == 113)
    {
        return Some("documentation");
    }
    // Benchmarking 198.18.0.0/15
    if o[0] == 198 && (o[1] == 18 || o[1] == 19) {
        return Some("benchmark");
    }
    // Multicast 224.0.0.0/4
    if (224..=239).contains(&o[0]) {
        return Some("multicast");
    }
    // Reserved 240.0.0.0/4
    if o[0] >= 240 {
        return Some("reserved");
    }
    None
}

fn disqualify_ipv6(ip: Ipv6Addr, options: &EvalOptions) -> Option<&'static str> {
    let s = ip.segments();
    // :: unspecified
    if s == [0; 8] {
        return Some("unspecified");
    }
    // ::1 loopback
    if s == [0, 0, 0, 0, 0, 0, 0, 1] {
        return (!options.allow_loopback_ip).then_some("loopback");
    }
    // IPv4-mapped ::ffff:0:0/96 and IPv4-compatible ::/96 addresses carry
    // the embedded IPv4 address's classification, so ::ffff:127.0.0.1
    // cannot slip past the loopback rejection.
    if s[..5] == [0; 5] && (s[5] == 0xffff || s[5] == 0) {
        let v4 = Ipv4Addr::new(
            (s[6] >> 8) as u8,
            s[6] as u8,
            (s[7] >> 8) as u8,
            s[7] as u8,
        );
        return disqualify_ipv4(v4, options);
    }
    // fe80::/10 link-local
    if (s[0] & 0xffc0) == 0xfe80 {
        return Some("link-local");
    }
    // fc00::/7 unique-local
    if (s[0] & 0xfe00) == 0xfc00 {
        return (!options.allow_private_ip).then_some("private-range");
    }
    // ff00::/8 multicast
    if s[0] & 0xff00 == 0xff00 {
        return Some("multicast");
    }
    None
}
