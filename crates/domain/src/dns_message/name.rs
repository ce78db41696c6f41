//! Domain name label sequences (RFC 1035 §3.1).
//!
//! A name is written as length-prefixed labels followed by a zero byte.
//! Compression pointers are neither produced nor understood.

use crate::DomainError;
use bytes::BufMut;

/// Encodes a single domain as a label sequence.
///
/// `""` and `"."` are the root name, which is just the terminator. A single
/// trailing dot is accepted. Label lengths are not checked: a label of 64
/// bytes or more is written with a length byte that collides with the
/// pointer/extended-label prefixes, so callers must not pass one.
pub fn encode_name(domain: &str) -> Vec<u8> {
    let domain = domain.strip_suffix('.').unwrap_or(domain);
    let mut out = Vec::with_capacity(domain.len() + 2);
    if !domain.is_empty() {
        for label in domain.split('.') {
            out.put_u8(label.len() as u8);
            out.put_slice(label.as_bytes());
        }
    }
    out.put_u8(0);
    out
}

/// List form of [`encode_name`]: no domain gives the root name, one domain
/// is encoded as usual. Several domains cannot share one name field.
pub fn encode_domains<S: AsRef<str>>(domains: &[S]) -> Result<Vec<u8>, DomainError> {
    match domains {
        [] => Ok(vec![0]),
        [domain] => Ok(encode_name(domain.as_ref())),
        _ => Err(DomainError::MultipleDomainsInName(domains.len())),
    }
}

/// Renders a wire name as dotted text for logs.
///
/// Never fails: a length byte that runs past the end, or bytes after a
/// missing terminator, are rendered as far as they go.
pub fn name_to_string(wire: &[u8]) -> String {
    let mut labels: Vec<String> = Vec::new();
    let mut pos = 0;

    while let Some(&len) = wire.get(pos) {
        if len == 0 {
            break;
        }
        let start = pos + 1;
        let end = (start + len as usize).min(wire.len());
        labels.push(String::from_utf8_lossy(&wire[start..end]).into_owned());
        pos = end;
    }

    if labels.is_empty() {
        ".".to_string()
    } else {
        labels.join(".")
    }
}
