//! Scanner lifecycle for tree-sitter style hosts.

use crate::{scan, ScanCursor, TokenKind, ValidKinds};

/// The scanner as a host-managed object.
///
/// Scanning is a pure function of the cursor position and the requested
/// kinds, so there is no payload: creation and destruction do nothing and
/// the serialized state is always empty. Incremental reparsing can resume
/// at any token boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExternalScanner;

impl ExternalScanner {
    pub fn create() -> Self {
        ExternalScanner
    }

    /// Scan one token at the cursor. See [`scan`].
    #[inline]
    #[allow(
        clippy::unused_self,
        reason = "hosts call scan through the scanner object"
    )]
    pub fn scan<C: ScanCursor + ?Sized>(
        &mut self,
        cursor: &mut C,
        valid: ValidKinds,
    ) -> Option<TokenKind> {
        scan(cursor, valid)
    }

    /// Bytes a host stores alongside a parse state. Always empty.
    #[allow(clippy::unused_self, reason = "no state to serialize")]
    pub fn serialize(&self) -> Vec<u8> {
        Vec::new()
    }

    /// Restore state saved by [`serialize`](Self::serialize). Any input,
    /// including state from another scanner version, is accepted and ignored.
    #[allow(clippy::unused_self, reason = "no state to restore")]
    pub fn deserialize(&mut self, _state: &[u8]) {}

    #[allow(clippy::needless_pass_by_value, reason = "consumes the scanner")]
    pub fn destroy(self) {}
}
