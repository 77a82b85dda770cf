//! In-memory overlay renderer the host's render loop reads each frame.

use rustc_hash::FxHashMap;

use super::{OverlayError, OverlayHandle, OverlayRenderer, OverlayRequest};

/// Running totals of overlay calls, for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlayStats {
    /// Successful creates.
    pub created: u64,
    /// Successful destroys.
    pub destroyed: u64,
    /// Rejected calls of either kind.
    pub rejected: u64,
}

/// Keeps every live overlay request keyed by handle.
///
/// Handles are never reused. The layer can be switched into a rejecting
/// mode where every call fails, mirroring a renderer that lost its device.
#[derive(Debug, Default)]
pub struct SubsetOverlayLayer {
    overlays: FxHashMap<OverlayHandle, OverlayRequest>,
    next_handle: u64,
    rejecting: bool,
    stats: OverlayStats,
}

impl SubsetOverlayLayer {
    /// Create an empty layer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent create/destroy fail (or succeed again).
    pub fn set_rejecting(&mut self, rejecting: bool) {
        self.rejecting = rejecting;
    }

    /// Number of live overlays.
    #[must_use]
    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    /// Whether no overlay is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }

    /// Request behind a live handle.
    #[must_use]
    pub fn get(&self, handle: OverlayHandle) -> Option<&OverlayRequest> {
        self.overlays.get(&handle)
    }

    /// Every live overlay.
    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (OverlayHandle, &OverlayRequest)> + '_ {
        self.overlays.iter().map(|(handle, req)| (*handle, req))
    }

    /// Call totals so far.
    #[must_use]
    pub fn stats(&self) -> OverlayStats {
        self.stats
    }

    fn reject(&mut self, reason: &str) -> OverlayError {
        self.stats.rejected += 1;
        OverlayError::Rejected(reason.to_owned())
    }
}

impl OverlayRenderer for SubsetOverlayLayer {
    fn create_overlay(
        &mut self,
        request: OverlayRequest,
    ) -> Result<OverlayHandle, OverlayError> {
        if self.rejecting {
            return Err(self.reject("layer is rejecting requests"));
        }
        if request.subset.is_empty() {
            return Err(self.reject("empty subset"));
        }
        let handle = OverlayHandle(self.next_handle);
        self.next_handle += 1;
        let _ = self.overlays.insert(handle, request);
        self.stats.created += 1;
        Ok(handle)
    }

    fn destroy_overlay(
        &mut self,
        handle: OverlayHandle,
    ) -> Result<(), OverlayError> {
        if self.rejecting {
            return Err(self.reject("layer is rejecting requests"));
        }
        if self.overlays.remove(&handle).is_none() {
            self.stats.rejected += 1;
            return Err(OverlayError::UnknownHandle(handle));
        }
        self.stats.destroyed += 1;
        Ok(())
    }
}
