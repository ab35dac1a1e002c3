use crate::types::alloc_type::String;
use crate::types::error_node::ErrorNode;
use core::fmt::Write;

/// Configuration builder for customizing fingerprint generation.
///
/// Synthesized layers never contribute, so two chains that differ only by
/// purely structural wraps share a fingerprint.
pub struct FingerprintConfig<'a> {
    pub(crate) node: &'a ErrorNode,
    pub(crate) include_kinds: bool,
    pub(crate) include_templates: bool,
    pub(crate) include_fields: bool,
    pub(crate) include_leaf_text: bool,
    pub(crate) include_keys: Option<&'a [&'a str]>,
    pub(crate) exclude_keys: Option<&'a [&'a str]>,
}

impl<'a> FingerprintConfig<'a> {
    pub(crate) fn new(node: &'a ErrorNode) -> Self {
        Self {
            node,
            include_kinds: true,
            include_templates: true,
            include_fields: false,
            include_leaf_text: false,
            include_keys: None,
            exclude_keys: None,
        }
    }

    /// Whether to include kind tags in the fingerprint (default: true).
    #[must_use]
    pub fn include_kinds(mut self, include: bool) -> Self {
        self.include_kinds = include;
        self
    }

    /// Whether to include layer templates in the fingerprint (default: true).
    ///
    /// Templates are hashed before substitution, so the same call site with
    /// different field values produces the same fingerprint.
    #[must_use]
    pub fn include_templates(mut self, include: bool) -> Self {
        self.include_templates = include;
        self
    }

    /// Whether to include field facts in the fingerprint (default: false).
    #[must_use]
    pub fn include_fields(mut self, include: bool) -> Self {
        self.include_fields = include;
        self
    }

    /// Whether to include the display text of opaque leaf errors (default: false).
    #[must_use]
    pub fn include_leaf_text(mut self, include: bool) -> Self {
        self.include_leaf_text = include;
        self
    }

    /// Explicitly include only these field keys in the fingerprint.
    #[must_use]
    pub fn include_field_keys(mut self, keys: &'a [&'a str]) -> Self {
        self.include_fields = true;
        self.include_keys = Some(keys);
        self
    }

    /// Exclude these field keys from the fingerprint.
    #[must_use]
    pub fn exclude_field_keys(mut self, keys: &'a [&'a str]) -> Self {
        self.include_fields = true;
        self.exclude_keys = Some(keys);
        self
    }

    fn key_selected(&self, key: &str) -> bool {
        let included = self.include_keys.map_or(true, |keys| keys.iter().any(|k| *k == key));
        let excluded = self.exclude_keys.is_some_and(|keys| keys.iter().any(|k| *k == key));
        included && !excluded
    }

    /// Computes the fingerprint using the configured options.
    #[must_use]
    pub fn compute(&self) -> u64 {
        const FNV_OFFSET: u64 = 0xcbf29ce484222325;
        let mut hash = FNV_OFFSET;

        for node in self.node.chain().filter(|node| !node.is_synthesized()) {
            hash_bytes(&mut hash, b"node:");

            if self.include_kinds {
                if let Some(kind) = node.kind() {
                    hash_bytes(&mut hash, b"kind:");
                    hash_bytes(&mut hash, kind.as_bytes());
                }
            }

            if self.include_templates && (!node.literal || self.include_leaf_text) {
                hash_bytes(&mut hash, b"tpl:");
                hash_bytes(&mut hash, node.template().as_bytes());
            }

            if self.include_fields {
                for field in node.fields().iter().filter(|f| self.key_selected(f.key())) {
                    hash_bytes(&mut hash, b"field:");
                    hash_bytes(&mut hash, field.key().as_bytes());
                    hash_bytes(&mut hash, b"=");
                    let mut hasher = DisplayHasher::new(&mut hash);
                    let _ = write!(hasher, "{}", field.value());
                }
            }
        }

        hash
    }

    /// Computes the fingerprint and returns it as a hex string.
    #[must_use]
    pub fn compute_hex(&self) -> String {
        let mut result = String::with_capacity(16);
        let fp = self.compute();
        let _ = write!(result, "{:016x}", fp);
        result
    }
}

/// FNV-1a prime constant for 64-bit hash.
const FNV_PRIME: u64 = 0x100000001b3;

#[inline(always)]
fn hash_bytes(hash: &mut u64, bytes: &[u8]) {
    for &byte in bytes {
        *hash ^= byte as u64;
        *hash = hash.wrapping_mul(FNV_PRIME);
    }
}

struct DisplayHasher<'a> {
    hash: &'a mut u64,
}

impl<'a> DisplayHasher<'a> {
    #[inline(always)]
    fn new(hash: &'a mut u64) -> Self {
        Self { hash }
    }
}

impl Write for DisplayHasher<'_> {
    #[inline]
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        hash_bytes(self.hash, s.as_bytes());
        Ok(())
    }
}
