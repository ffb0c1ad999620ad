//! Fixed-width hexadecimal address tokens.

use crate::metadata::customattributes::VirtualAddressRange;

/// Render an address as `0xXXXXXXXX`, or `0xXXXXXXXXXXXXXXXX` when it does not fit 32 bits
///
/// # Examples
///
/// ```rust
/// use attrscope::render::format_address;
///
/// assert_eq!(format_address(0x1000), "0x00001000");
/// assert_eq!(format_address(0x1_0000_0000), "0x0000000100000000");
/// ```
#[must_use]
pub fn format_address(address: u64) -> String {
    if u32::try_from(address).is_ok() {
        format!("0x{address:08X}")
    } else {
        format!("0x{address:016X}")
    }
}

/// Render a signed address, reinterpreting it as unsigned first
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub fn format_signed_address(address: i64) -> String {
    format_address(address as u64)
}

/// Render a range as `<start>-<end>`; a missing range renders both bounds as zero
#[must_use]
pub fn format_address_range(range: Option<VirtualAddressRange>) -> String {
    let range = range.unwrap_or_default();
    format!(
        "{}-{}",
        format_address(range.start),
        format_address(range.end)
    )
}
