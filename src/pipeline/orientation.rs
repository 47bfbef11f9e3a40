use std::f64::consts::PI;

use crate::{
    error::{Error, Result},
    types::{FaceOrientation, Quaternion},
};

pub const DEFAULT_STEP_DEGREES: f64 = 5.0;
pub const DEFAULT_UNIT_TOLERANCE: f64 = 1e-3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientationDecoder {
    step: f64,
    unit_tolerance: f64,
}

impl Default for OrientationDecoder {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP_DEGREES,
            unit_tolerance: DEFAULT_UNIT_TOLERANCE,
        }
    }
}

impl OrientationDecoder {
    pub fn new(step: f64, unit_tolerance: f64) -> Self {
        Self {
            step,
            unit_tolerance,
        }
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn decode(&self, q: Quaternion) -> Result<FaceOrientation> {
        self.check_unit(q)?;
        let (pitch, yaw, roll) = euler_degrees(q);
        Ok(FaceOrientation {
            pitch: quantize_angle(pitch, self.step),
            yaw: quantize_angle(yaw, self.step),
            roll: quantize_angle(roll, self.step),
        })
    }

    fn check_unit(&self, q: Quaternion) -> Result<()> {
        let components = [q.x, q.y, q.z, q.w];
        let finite = components.iter().all(|c| c.is_finite());
        let norm = components
            .iter()
            .map(|&c| f64::from(c) * f64::from(c))
            .sum::<f64>()
            .sqrt();

        if finite && (norm - 1.0).abs() <= self.unit_tolerance {
            Ok(())
        } else {
            Err(Error::UndecodableQuaternion {
                x: q.x,
                y: q.y,
                z: q.z,
                w: q.w,
            })
        }
    }
}

/// Raw (pitch, yaw, roll) in degrees: rotation about X, Y and Z.
pub fn euler_degrees(q: Quaternion) -> (f64, f64, f64) {
    let (x, y, z, w) = (
        f64::from(q.x),
        f64::from(q.y),
        f64::from(q.z),
        f64::from(q.w),
    );

    let pitch = (2.0 * (y * z + w * x)).atan2(w * w - x * x - y * y + z * z);
    // Clamp so a quaternion a hair off unit length cannot produce NaN.
    let yaw = (2.0 * (w * y - x * z)).clamp(-1.0, 1.0).asin();
    let roll = (2.0 * (x * y + w * z)).atan2(w * w + x * x - y * y - z * z);

    (pitch * 180.0 / PI, yaw * 180.0 / PI, roll * 180.0 / PI)
}

/// Snaps `raw` to a multiple of `step`.
///
/// Half a step is added in the direction of the sign (zero goes negative), then
/// the quotient is truncated toward zero.
pub fn quantize_angle(raw: f64, step: f64) -> i32 {
    let nudge = if raw > 0.0 { step / 2.0 } else { -step / 2.0 };
    (((raw + nudge) / step).trunc() * step) as i32
}

/// Builds a unit quaternion from angles in the same convention `euler_degrees` reads.
pub fn quaternion_from_degrees(pitch: f64, yaw: f64, roll: f64) -> Quaternion {
    let half = |deg: f64| deg * PI / 360.0;
    let (sp, cp) = half(pitch).sin_cos();
    let (sy, cy) = half(yaw).sin_cos();
    let (sr, cr) = half(roll).sin_cos();

    Quaternion {
        x: (sp * cy * cr - cp * sy * sr) as f32,
        y: (cp * sy * cr + sp * cy * sr) as f32,
        z: (cp * cy * sr - sp * sy * cr) as f32,
        w: (cp * cy * cr + sp * sy * sr) as f32,
    }
}
