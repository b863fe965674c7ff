//! Full/available notification receivers.

use std::sync::Arc;

use parkade_core::LotId;

/// The two edge transitions of a lot's full flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LotSignal {
    /// The last free slot was taken.
    Full,
    /// A slot was freed on a full lot.
    Available,
}

impl LotSignal {
    /// Stable name (e.g. "lot.full"), used as a log field.
    pub fn as_str(self) -> &'static str {
        match self {
            LotSignal::Full => "lot.full",
            LotSignal::Available => "lot.available",
        }
    }
}

/// Passive receiver of lot notifications.
///
/// Callbacks are fire-and-forget: they return nothing and cannot influence the
/// park/unpark that triggered them. They run while the lot is locked, so an
/// implementation must not call back into the same lot.
pub trait LotObserver: Send + Sync {
    fn on_full(&self, lot: LotId);

    fn on_available(&self, lot: LotId);

    /// Dispatch a signal to the matching callback.
    fn notify(&self, lot: LotId, signal: LotSignal) {
        match signal {
            LotSignal::Full => self.on_full(lot),
            LotSignal::Available => self.on_available(lot),
        }
    }
}

impl<O> LotObserver for Arc<O>
where
    O: LotObserver + ?Sized,
{
    fn on_full(&self, lot: LotId) {
        (**self).on_full(lot)
    }

    fn on_available(&self, lot: LotId) {
        (**self).on_available(lot)
    }
}
