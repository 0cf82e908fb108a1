// file: src/topology/units.rs
// version: 1.0.0
// guid: 8b1e4d27-c6a3-4f90-b2d5-19e7a0c3f648

//! Capacity unit conversion

/// Bytes in one (binary) gigabyte, the unit libvirt and QEMU use for a `G` suffix
pub const BYTES_PER_GB: u64 = 1 << 30;

/// Convert a size in gigabytes to the byte count stored in a memory capacity
pub fn gb(n: u64) -> u64 {
    n * BYTES_PER_GB
}

/// [`gb`] without wrapping; `None` when the byte count does not fit in a `u64`
pub fn checked_gb(n: u64) -> Option<u64> {
    n.checked_mul(BYTES_PER_GB)
}

/// Format a disk size in gigabytes the way disk specs carry it (e.g. `64G`)
pub fn disk_size(n: u64) -> String {
    format!("{}G", n)
}
