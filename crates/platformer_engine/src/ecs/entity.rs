//! Entity implementation

pub use crate::foundation::collections::EntityId;

/// Short human-readable form of a handle for log lines, e.g. `3v1`
pub fn display_id(id: EntityId) -> String {
    use slotmap::Key;
    let raw = id.data().as_ffi();
    // Low 32 bits are the slot index, high 32 bits the version
    format!("{}v{}", raw & 0xFFFF_FFFF, raw >> 32)
}
