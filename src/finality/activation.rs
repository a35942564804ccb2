// Runtime toggle and no-disable latch for the finality gates
use std::sync::atomic::{AtomicI32, Ordering};

use tracing::{info, warn};

use super::ArtificialFinality;

impl ArtificialFinality {
    /// Enable or disable the finality gates for this chain instance.
    ///
    /// Works below the chain configuration: if the ECBP-1100 transition has
    /// not been crossed at the current head, the setting is stored but the
    /// gates stay dormant and nothing is logged. When the no-disable latch
    /// holds 1, a request to disable while enabled is suppressed.
    /// Idempotent.
    pub fn enable(&self, enable: bool, context: &str) {
        if let Some(latch) = self.no_disable.get() {
            if latch.load(Ordering::SeqCst) == 1 && self.is_enabled() && !enable {
                warn!(
                    "Preventing disable artificial finality: enabled=true nodisable=true {}",
                    context
                );
                return;
            }
        }

        // Store the setting regardless of config activation.
        self.enabled
            .store(if enable { 1 } else { 0 }, Ordering::SeqCst);

        if !self.spec.is_ecbp1100(self.headers.head_number()) {
            // The config hasn't activated the feature yet; stay quiet.
            return;
        }
        if enable {
            info!(
                "Enabled artificial finality features: network={} {}",
                self.spec.network, context
            );
        } else {
            warn!(
                "Disabled artificial finality features: network={} {}",
                self.spec.network, context
            );
        }
    }

    /// Current enable setting, agnostic of config activation.
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst) == 1
    }

    /// Install the no-disable latch. `n == 1` forces the gates on; any
    /// other value releases the latch. The cell is allocated on first use.
    pub fn set_no_disable(&self, n: i32) {
        warn!(
            "Deactivating artificial finality disablers: always_on={}",
            n == 1
        );
        self.no_disable
            .get_or_init(|| AtomicI32::new(0))
            .store(n, Ordering::SeqCst);
    }
}
