//! Capture orientation: where it comes from and how it maps to the stream.
//!
//! The orientation used for a capture is a snapshot taken when the shutter
//! fires. It comes from the last accelerometer sample if there is one,
//! otherwise from the UI-reported device orientation.
//!
//! # Stream rotation
//!
//! Sensor mounting is mirrored relative to the device's reported landscape
//! direction, so the two landscape orientations swap when mapped onto the
//! capture stream:
//!
//! ```text
//! Portrait            -> Portrait
//! PortraitUpsideDown  -> PortraitUpsideDown
//! LandscapeLeft       -> LandscapeRight
//! LandscapeRight      -> LandscapeLeft
//! ```

use serde::{Deserialize, Serialize};

/// Orientation of the device at capture time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CaptureOrientation {
    /// Held upright.
    #[default]
    Portrait,
    /// Held upside down.
    PortraitUpsideDown,
    /// Rotated with the home edge on the right.
    LandscapeLeft,
    /// Rotated with the home edge on the left.
    LandscapeRight,
}

/// Rotation applied to the capture stream's connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StreamRotation {
    Portrait,
    PortraitUpsideDown,
    LandscapeLeft,
    LandscapeRight,
}

/// Orientation as reported by the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DeviceOrientation {
    #[default]
    Unknown,
    Portrait,
    PortraitUpsideDown,
    LandscapeLeft,
    LandscapeRight,
    FaceUp,
    FaceDown,
}

impl CaptureOrientation {
    /// Returns true for the two landscape orientations.
    #[inline]
    pub fn is_landscape(self) -> bool {
        matches!(
            self,
            CaptureOrientation::LandscapeLeft | CaptureOrientation::LandscapeRight
        )
    }

    /// Rotation to set on the capture stream for this orientation.
    pub fn stream_rotation(self) -> StreamRotation {
        match self {
            CaptureOrientation::Portrait => StreamRotation::Portrait,
            CaptureOrientation::PortraitUpsideDown => StreamRotation::PortraitUpsideDown,
            CaptureOrientation::LandscapeLeft => StreamRotation::LandscapeRight,
            CaptureOrientation::LandscapeRight => StreamRotation::LandscapeLeft,
        }
    }

    /// Classify an accelerometer reading.
    ///
    /// Whichever of the x/y axes carries more gravity decides between
    /// landscape and portrait; its sign picks the direction.
    pub fn from_acceleration(x: f64, y: f64) -> Self {
        if y.abs() < x.abs() {
            if x > 0.0 {
                CaptureOrientation::LandscapeRight
            } else {
                CaptureOrientation::LandscapeLeft
            }
        } else if y > 0.0 {
            CaptureOrientation::PortraitUpsideDown
        } else {
            CaptureOrientation::Portrait
        }
    }
}

impl From<DeviceOrientation> for CaptureOrientation {
    fn from(value: DeviceOrientation) -> Self {
        match value {
            DeviceOrientation::PortraitUpsideDown => CaptureOrientation::PortraitUpsideDown,
            DeviceOrientation::LandscapeLeft => CaptureOrientation::LandscapeLeft,
            DeviceOrientation::LandscapeRight => CaptureOrientation::LandscapeRight,
            DeviceOrientation::Portrait
            | DeviceOrientation::Unknown
            | DeviceOrientation::FaceUp
            | DeviceOrientation::FaceDown => CaptureOrientation::Portrait,
        }
    }
}

/// One accelerometer reading, in g.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TiltSample {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl TiltSample {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Orientation implied by this reading.
    pub fn orientation(&self) -> CaptureOrientation {
        CaptureOrientation::from_acceleration(self.x, self.y)
    }
}

/// Keeps the orientation implied by the most recent tilt sample.
///
/// The sensor pushes samples in; captures only ever read a [`snapshot`].
///
/// [`snapshot`]: TiltTracker::snapshot
#[derive(Debug, Clone, Default)]
pub struct TiltTracker {
    last: Option<CaptureOrientation>,
}

impl TiltTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new sample, replacing the previous reading.
    pub fn record(&mut self, sample: TiltSample) {
        self.last = Some(sample.orientation());
    }

    /// Orientation of the last sample, if any arrived since the last reset.
    pub fn last(&self) -> Option<CaptureOrientation> {
        self.last
    }

    /// Orientation to capture with: the last sample, or the device fallback.
    pub fn snapshot(&self, fallback: DeviceOrientation) -> CaptureOrientation {
        self.last.unwrap_or_else(|| fallback.into())
    }

    /// Forget the last sample (the sensor was stopped).
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_rotation_swaps_landscape() {
        assert_eq!(
            CaptureOrientation::Portrait.stream_rotation(),
            StreamRotation::Portrait
        );
        assert_eq!(
            CaptureOrientation::PortraitUpsideDown.stream_rotation(),
            StreamRotation::PortraitUpsideDown
        );
        assert_eq!(
            CaptureOrientation::LandscapeLeft.stream_rotation(),
            StreamRotation::LandscapeRight
        );
        assert_eq!(
            CaptureOrientation::LandscapeRight.stream_rotation(),
            StreamRotation::LandscapeLeft
        );
    }

    #[test]
    fn test_unknown_device_orientation_defaults_to_portrait() {
        for device in [
            DeviceOrientation::Unknown,
            DeviceOrientation::FaceUp,
            DeviceOrientation::FaceDown,
        ] {
            let orientation = CaptureOrientation::from(device);
            assert_eq!(orientation, CaptureOrientation::Portrait);
            assert_eq!(orientation.stream_rotation(), StreamRotation::Portrait);
        }
    }

    #[test]
    fn test_device_orientation_maps_directly() {
        assert_eq!(
            CaptureOrientation::from(DeviceOrientation::LandscapeLeft),
            CaptureOrientation::LandscapeLeft
        );
        assert_eq!(
            CaptureOrientation::from(DeviceOrientation::PortraitUpsideDown),
            CaptureOrientation::PortraitUpsideDown
        );
    }

    #[test]
    fn test_acceleration_classification() {
        // Upright: gravity pulls along -y
        assert_eq!(
            CaptureOrientation::from_acceleration(0.0, -1.0),
            CaptureOrientation::Portrait
        );
        assert_eq!(
            CaptureOrientation::from_acceleration(0.1, 0.9),
            CaptureOrientation::PortraitUpsideDown
        );
        assert_eq!(
            CaptureOrientation::from_acceleration(0.9, 0.2),
            CaptureOrientation::LandscapeRight
        );
        assert_eq!(
            CaptureOrientation::from_acceleration(-0.9, -0.2),
            CaptureOrientation::LandscapeLeft
        );
    }

    #[test]
    fn test_acceleration_tie_is_portrait() {
        // |y| == |x| is not landscape
        assert_eq!(
            CaptureOrientation::from_acceleration(0.5, -0.5),
            CaptureOrientation::Portrait
        );
        // Lying flat reads as portrait
        assert_eq!(
            CaptureOrientation::from_acceleration(0.0, 0.0),
            CaptureOrientation::Portrait
        );
    }

    #[test]
    fn test_tracker_falls_back_without_sample() {
        let tracker = TiltTracker::new();
        assert_eq!(tracker.last(), None);
        assert_eq!(
            tracker.snapshot(DeviceOrientation::LandscapeRight),
            CaptureOrientation::LandscapeRight
        );
    }

    #[test]
    fn test_tracker_prefers_last_sample() {
        let mut tracker = TiltTracker::new();
        tracker.record(TiltSample::new(-0.8, 0.1, 0.0));
        tracker.record(TiltSample::new(0.0, 0.95, 0.1));

        assert_eq!(
            tracker.snapshot(DeviceOrientation::LandscapeLeft),
            CaptureOrientation::PortraitUpsideDown
        );
    }

    #[test]
    fn test_tracker_reset_clears_sample() {
        let mut tracker = TiltTracker::new();
        tracker.record(TiltSample::new(0.9, 0.0, 0.0));
        tracker.reset();

        assert_eq!(
            tracker.snapshot(DeviceOrientation::Unknown),
            CaptureOrientation::Portrait
        );
    }
}
