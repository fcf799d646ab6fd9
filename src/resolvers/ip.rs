use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::query::types::QueryDescriptor;
use crate::resolvers::{Answer, ResolveError, Resolver, ResultItem};

/// Recognizes IPv4/IPv6 literals, and `ip` as "my address".
pub struct IpAddressResolver;

impl Resolver for IpAddressResolver {
    fn name(&self) -> &str {
        "ip_address"
    }

    fn resolve(&self, query: &QueryDescriptor) -> Result<Vec<ResultItem>, ResolveError> {
        let text = query.text().trim();

        if text.eq_ignore_ascii_case("ip") {
            let Some(addr) = query.context().and_then(|ctx| ctx.client_addr) else {
                return Ok(Vec::new());
            };
            return Ok(vec![ResultItem::new(Answer::section(
                "Your IP address",
                vec![describe(addr)],
            ))]);
        }

        match text.parse::<IpAddr>() {
            Ok(addr) => {
                let title = match addr {
                    IpAddr::V4(_) => "IPv4 address",
                    IpAddr::V6(_) => "IPv6 address",
                };
                Ok(vec![ResultItem::new(Answer::section(
                    title,
                    vec![describe(addr)],
                ))])
            }
            Err(_) => Ok(Vec::new()),
        }
    }
}

fn describe(addr: IpAddr) -> Answer {
    match addr {
        IpAddr::V4(v4) => {
            let value = u32::from(v4);
            Answer::pairs([
                ("Address", v4.to_string()),
                ("Classification", classify_v4(&v4).to_string()),
                ("Integer", value.to_string()),
                ("Hex", format!("0x{value:08X}")),
                ("IPv4-mapped IPv6", v4.to_ipv6_mapped().to_string()),
            ])
        }
        IpAddr::V6(v6) => {
            let mut rows = vec![
                ("Address", v6.to_string()),
                ("Expanded", expand_v6(&v6)),
                ("Classification", classify_v6(&v6).to_string()),
            ];
            if let Some(v4) = v6.to_ipv4_mapped() {
                rows.push(("Embedded IPv4", v4.to_string()));
            }
            Answer::pairs(rows)
        }
    }
}

pub fn classify_v4(addr: &Ipv4Addr) -> &'static str {
    if addr.is_unspecified() {
        "unspecified"
    } else if addr.is_loopback() {
        "loopback"
    } else if addr.is_private() {
        "private"
    } else if addr.is_link_local() {
        "link-local"
    } else if addr.is_multicast() {
        "multicast"
    } else if addr.is_broadcast() {
        "broadcast"
    } else if addr.is_documentation() {
        "documentation"
    } else {
        "global"
    }
}

pub fn classify_v6(addr: &Ipv6Addr) -> &'static str {
    let segments = addr.segments();
    if addr.is_unspecified() {
        "unspecified"
    } else if addr.is_loopback() {
        "loopback"
    } else if addr.is_multicast() {
        "multicast"
    } else if addr.is_unique_local() {
        "unique local"
    } else if addr.is_unicast_link_local() {
        "link-local"
    } else if segments[0] == 0x2001 && segments[1] == 0x0db8 {
        "documentation"
    } else if addr.to_ipv4_mapped().is_some() {
        "IPv4-mapped"
    } else {
        "global"
    }
}

fn expand_v6(addr: &Ipv6Addr) -> String {
    addr.segments()
        .iter()
        .map(|s| format!("{s:04x}"))
        .collect::<Vec<_>>()
        .join(":")
}
