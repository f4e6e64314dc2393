//! Opaque identifiers for transactions.

use uuid::Uuid;

/// Returns a fresh random identifier in UUID v4 simple (32 hex digits) form.
pub fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}
