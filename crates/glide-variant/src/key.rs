use std::fmt;

/// Identifier of one compiled flavor of the native module,
/// e.g. `linux-musl-x64` or `darwin-arm64`.
///
/// Keys produced from the variant table are always one of
/// [`supported_variants`](crate::supported_variants); override keys are
/// arbitrary and carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariantKey(String);

impl VariantKey {
    pub fn new(key: impl Into<String>) -> Self { Self(key.into()) }

    pub fn as_str(&self) -> &str { &self.0 }

    pub fn into_string(self) -> String { self.0 }
}

impl fmt::Display for VariantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

impl From<&str> for VariantKey {
    fn from(key: &str) -> Self { Self(key.to_string()) }
}

impl From<String> for VariantKey {
    fn from(key: String) -> Self { Self(key) }
}

impl AsRef<str> for VariantKey {
    fn as_ref(&self) -> &str { &self.0 }
}

impl PartialEq<str> for VariantKey {
    fn eq(&self, other: &str) -> bool { self.0 == other }
}

impl PartialEq<&str> for VariantKey {
    fn eq(&self, other: &&str) -> bool { self.0 == *other }
}
