//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A fully qualified host name without trailing dot (e.g., ns1.example.com).
pub type Fqdn = String;

/// A zone apex name (e.g., example.com).
pub type ZoneName = String;

/// The name of a host or client allowed to send dynamic updates.
///
/// Combined with the zone name it forms the TSIG key name.
pub type RequesterName = String;

/// A resource-record type mnemonic (e.g., A, AAAA, TXT, ANY).
pub type RecordType = String;

/// Serialize any `Display` value as a string.
///
/// Used for addresses so templates always see their textual form.
pub fn as_display<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: std::fmt::Display,
    S: serde::Serializer,
{
    serializer.collect_str(value)
}
