//! Significance labelling at the fixed 99% confidence level.

use crate::core::domain::HotspotLabel;

/// Critical |z| for 99% two-tailed confidence.
pub const CRITICAL_Z_99: f64 = 2.58;

/// Labels a z-score: above `+2.58` is a hotspot, below `-2.58` a coldspot.
///
/// Scores exactly at the critical value are not significant.
///
/// # Examples
///
/// ```
/// use geo_hotspot::algorithms::classification::classify;
/// use geo_hotspot::core::domain::HotspotLabel;
///
/// assert_eq!(classify(3.1), HotspotLabel::Hotspot);
/// assert_eq!(classify(-2.6), HotspotLabel::Coldspot);
/// assert_eq!(classify(2.58), HotspotLabel::NotSignificant);
/// ```
pub fn classify(z_score: f64) -> HotspotLabel {
    if z_score > CRITICAL_Z_99 {
        HotspotLabel::Hotspot
    } else if z_score < -CRITICAL_Z_99 {
        HotspotLabel::Coldspot
    } else {
        HotspotLabel::NotSignificant
    }
}
