//! Ellipsoidal (WGS-84) distances for single point pairs.
//!
//! The Gi* pipeline measures on a sphere (see [`super::distance`]); this
//! module serves the point-to-point distance tool, which reports the geodesic
//! on the WGS-84 ellipsoid using Vincenty's inverse formula.

use qtty::{Meters, Radian};

use crate::algorithms::distance::haversine;
use crate::core::domain::GeoPoint;

/// WGS-84 semi-major axis.
pub const WGS84_SEMI_MAJOR: Meters = Meters::new(6_378_137.0);
/// WGS-84 flattening.
pub const WGS84_FLATTENING: f64 = 1.0 / 298.257_223_563;

const MAX_ITERATIONS: usize = 200;
const CONVERGENCE: f64 = 1e-12;

/// Reference ellipsoid for the inverse geodesic problem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    pub semi_major: Meters,
    pub flattening: f64,
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self {
            semi_major: WGS84_SEMI_MAJOR,
            flattening: WGS84_FLATTENING,
        }
    }
}

impl Ellipsoid {
    pub fn semi_minor(&self) -> Meters {
        self.semi_major * (1.0 - self.flattening)
    }

    /// Geodesic distance between two points (Vincenty inverse).
    ///
    /// Returns `None` when the iteration does not converge, which only
    /// happens for nearly antipodal points.
    pub fn vincenty(&self, p1: &GeoPoint, p2: &GeoPoint) -> Option<Meters> {
        let a = self.semi_major.value();
        let f = self.flattening;
        let b = self.semi_minor().value();

        let lat1 = p1.latitude.to::<Radian>().value();
        let lat2 = p2.latitude.to::<Radian>().value();
        let l = p2.longitude.to::<Radian>().value() - p1.longitude.to::<Radian>().value();

        let u1 = ((1.0 - f) * lat1.tan()).atan();
        let u2 = ((1.0 - f) * lat2.tan()).atan();
        let (sin_u1, cos_u1) = u1.sin_cos();
        let (sin_u2, cos_u2) = u2.sin_cos();

        let mut lambda = l;
        for _ in 0..MAX_ITERATIONS {
            let (sin_lambda, cos_lambda) = lambda.sin_cos();

            let sin_sigma = ((cos_u2 * sin_lambda).powi(2)
                + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2))
            .sqrt();
            if sin_sigma < 1e-15 {
                // coincident points
                return Some(Meters::new(0.0));
            }

            let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
            let sigma = sin_sigma.atan2(cos_sigma);

            let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
            let cos2_alpha = 1.0 - sin_alpha * sin_alpha;
            // equatorial line: cos2_alpha == 0
            let cos_2sigma_m = if cos2_alpha > 1e-15 {
                cos_sigma - 2.0 * sin_u1 * sin_u2 / cos2_alpha
            } else {
                0.0
            };

            let c = f / 16.0 * cos2_alpha * (4.0 + f * (4.0 - 3.0 * cos2_alpha));
            let lambda_prev = lambda;
            lambda = l
                + (1.0 - c)
                    * f
                    * sin_alpha
                    * (sigma
                        + c * sin_sigma
                            * (cos_2sigma_m
                                + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));

            if (lambda - lambda_prev).abs() < CONVERGENCE {
                let u_sq = cos2_alpha * (a * a - b * b) / (b * b);
                let big_a =
                    1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
                let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
                let delta_sigma = big_b
                    * sin_sigma
                    * (cos_2sigma_m
                        + big_b / 4.0
                            * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)
                                - big_b / 6.0
                                    * cos_2sigma_m
                                    * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                                    * (-3.0 + 4.0 * cos_2sigma_m * cos_2sigma_m)));

                return Some(Meters::new(b * big_a * (sigma - delta_sigma)));
            }
        }

        None
    }
}

/// WGS-84 geodesic distance between two points.
///
/// Nearly antipodal pairs, where Vincenty's iteration does not converge, fall
/// back to the spherical haversine distance.
///
/// # Examples
///
/// ```
/// use geo_hotspot::algorithms::geodesic::geodesic_distance;
/// use geo_hotspot::core::domain::GeoPoint;
///
/// // 0.001° along the equatorial meridian is shorter than on the sphere
/// let d = geodesic_distance(&GeoPoint::new(0.0, 0.0), &GeoPoint::new(0.001, 0.0));
/// assert!((d.value() - 110.574).abs() < 1e-3);
/// ```
pub fn geodesic_distance(p1: &GeoPoint, p2: &GeoPoint) -> Meters {
    Ellipsoid::default().vincenty(p1, p2).unwrap_or_else(|| {
        log::debug!("Vincenty did not converge, using haversine distance");
        haversine(p1, p2)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dms(deg: f64, min: f64, sec: f64) -> f64 {
        deg + min / 60.0 + sec / 3600.0
    }

    #[test]
    fn test_flinders_peak_to_buninyong() {
        // Vincenty's published test line: 54 972.271 m
        let flinders = GeoPoint::new(-dms(37.0, 57.0, 3.72030), dms(144.0, 25.0, 29.52440));
        let buninyong = GeoPoint::new(-dms(37.0, 39.0, 10.15610), dms(143.0, 55.0, 35.38390));

        let d = Ellipsoid::default().vincenty(&flinders, &buninyong).unwrap();
        assert!((d.value() - 54_972.271).abs() < 1e-3, "got {} m", d.value());
    }

    #[test]
    fn test_equatorial_meridian_arc() {
        let d = geodesic_distance(&GeoPoint::new(0.0, 0.0), &GeoPoint::new(0.001, 0.0));
        assert!((d.value() - 110.574_28).abs() < 1e-4, "got {} m", d.value());
    }

    #[test]
    fn test_along_equator() {
        // cos²α == 0 path: one degree of longitude on the equator is a / rad
        let d = geodesic_distance(&GeoPoint::new(0.0, 0.0), &GeoPoint::new(0.0, 1.0));
        let expected = WGS84_SEMI_MAJOR.value() * 1.0_f64.to_radians();
        assert!((d.value() - expected).abs() < 1e-6);
    }

    #[test]
    fn test_coincident_points() {
        let p = GeoPoint::new(45.0, 10.0);
        assert_eq!(geodesic_distance(&p, &p).value(), 0.0);
    }

    #[test]
    fn test_nearly_antipodal_falls_back_to_sphere() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.5, 179.7);
        assert!(Ellipsoid::default().vincenty(&a, &b).is_none());
        assert_eq!(geodesic_distance(&a, &b), haversine(&a, &b));
    }
}
