//! Camera controls: which sensor is active, flash state and focus mapping.
//!
//! These hold the state behind the flip/flash buttons. Touching real
//! hardware is the capture session's job; the controls only decide what
//! the next state should be.

use serde::{Deserialize, Serialize};

/// Which way the active sensor faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CameraPosition {
    /// Faces the user. Captures are mirrored.
    Front,
    /// Faces away from the user.
    #[default]
    Back,
}

impl CameraPosition {
    /// The other sensor.
    pub fn flipped(self) -> Self {
        match self {
            CameraPosition::Front => CameraPosition::Back,
            CameraPosition::Back => CameraPosition::Front,
        }
    }

    /// Front-facing captures must be flipped to match the preview.
    pub fn is_mirrored(self) -> bool {
        self == CameraPosition::Front
    }
}

/// Flash setting of the active device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FlashMode {
    #[default]
    Off,
    On,
    Auto,
}

/// Camera access as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Authorization {
    #[default]
    NotDetermined,
    Authorized,
    Denied,
    Restricted,
}

impl Authorization {
    pub fn is_authorized(self) -> bool {
        self == Authorization::Authorized
    }
}

/// State behind the flip and flash buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraControls {
    position: CameraPosition,
    flash: FlashMode,
    has_flash: bool,
    authorization: Authorization,
}

impl CameraControls {
    /// Controls for a freshly configured device; the flash starts off.
    pub fn new(position: CameraPosition, has_flash: bool, authorization: Authorization) -> Self {
        Self {
            position,
            flash: FlashMode::Off,
            has_flash,
            authorization,
        }
    }

    pub fn position(&self) -> CameraPosition {
        self.position
    }

    pub fn flash(&self) -> FlashMode {
        self.flash
    }

    /// Whether the flash button should be shown at all.
    pub fn has_flash(&self) -> bool {
        self.has_flash
    }

    pub fn authorization(&self) -> Authorization {
        self.authorization
    }

    pub fn set_authorization(&mut self, authorization: Authorization) {
        self.authorization = authorization;
    }

    /// Toggle the flash between off and on.
    ///
    /// Does nothing without camera access or a flash; `Auto` is left as is.
    /// Returns the mode after the toggle.
    pub fn toggle_flash(&mut self) -> FlashMode {
        if !self.authorization.is_authorized() || !self.has_flash {
            return self.flash;
        }

        self.flash = match self.flash {
            FlashMode::Off => FlashMode::On,
            FlashMode::On => FlashMode::Off,
            FlashMode::Auto => FlashMode::Auto,
        };
        self.flash
    }

    /// Switch to the other sensor.
    ///
    /// `other_has_flash` describes the sensor being switched to. The new
    /// device starts with its flash off. Does nothing without camera access.
    /// Returns the new position.
    pub fn flip(&mut self, other_has_flash: bool) -> CameraPosition {
        if !self.authorization.is_authorized() {
            return self.position;
        }

        self.position = self.position.flipped();
        self.has_flash = other_has_flash;
        self.flash = FlashMode::Off;
        self.position
    }
}

/// Map a tap in the preview to the sensor's point of interest.
///
/// The point drives both autofocus and auto-exposure.
///
/// The preview is portrait while the sensor is landscape-native, so the tap
/// is rotated into sensor space: `(tap_y / height, 1 - tap_x / width)`.
/// Both output coordinates are in `0.0..=1.0` for taps inside the view.
pub fn focus_point_of_interest(tap: (f64, f64), view_size: (f64, f64)) -> Option<(f64, f64)> {
    let (tap_x, tap_y) = tap;
    let (width, height) = view_size;

    if width <= 0.0 || height <= 0.0 {
        return None;
    }

    Some((tap_y / height, 1.0 - tap_x / width))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authorized(position: CameraPosition, has_flash: bool) -> CameraControls {
        CameraControls::new(position, has_flash, Authorization::Authorized)
    }

    #[test]
    fn test_position_flip_and_mirroring() {
        assert_eq!(CameraPosition::Front.flipped(), CameraPosition::Back);
        assert_eq!(CameraPosition::Back.flipped(), CameraPosition::Front);
        assert!(CameraPosition::Front.is_mirrored());
        assert!(!CameraPosition::Back.is_mirrored());
    }

    #[test]
    fn test_flash_starts_off() {
        let controls = authorized(CameraPosition::Back, true);
        assert_eq!(controls.flash(), FlashMode::Off);
    }

    #[test]
    fn test_toggle_flash() {
        let mut controls = authorized(CameraPosition::Back, true);
        assert_eq!(controls.toggle_flash(), FlashMode::On);
        assert_eq!(controls.toggle_flash(), FlashMode::Off);
    }

    #[test]
    fn test_toggle_flash_without_flash() {
        let mut controls = authorized(CameraPosition::Front, false);
        assert_eq!(controls.toggle_flash(), FlashMode::Off);
    }

    #[test]
    fn test_toggle_flash_requires_authorization() {
        let mut controls = CameraControls::new(CameraPosition::Back, true, Authorization::Denied);
        assert_eq!(controls.toggle_flash(), FlashMode::Off);

        controls.set_authorization(Authorization::Authorized);
        assert_eq!(controls.toggle_flash(), FlashMode::On);
    }

    #[test]
    fn test_toggle_leaves_auto_alone() {
        let mut controls = authorized(CameraPosition::Back, true);
        controls.flash = FlashMode::Auto;
        assert_eq!(controls.toggle_flash(), FlashMode::Auto);
    }

    #[test]
    fn test_flip_to_sensor_without_flash_resets_flash() {
        let mut controls = authorized(CameraPosition::Back, true);
        controls.toggle_flash();

        assert_eq!(controls.flip(false), CameraPosition::Front);
        assert!(!controls.has_flash());
        assert_eq!(controls.flash(), FlashMode::Off);
    }

    #[test]
    fn test_flip_resets_flash_on_sensor_with_flash() {
        let mut controls = authorized(CameraPosition::Front, true);
        controls.toggle_flash();

        assert_eq!(controls.flip(true), CameraPosition::Back);
        assert!(controls.has_flash());
        assert_eq!(controls.flash(), FlashMode::Off);
    }

    #[test]
    fn test_flip_resets_auto_flash() {
        let mut controls = authorized(CameraPosition::Back, true);
        controls.flash = FlashMode::Auto;

        controls.flip(true);
        assert_eq!(controls.flash(), FlashMode::Off);
    }

    #[test]
    fn test_flip_requires_authorization() {
        let mut controls = CameraControls::new(CameraPosition::Back, true, Authorization::Restricted);
        assert_eq!(controls.flip(true), CameraPosition::Back);
    }

    #[test]
    fn test_focus_point_rotates_into_sensor_space() {
        assert_eq!(
            focus_point_of_interest((0.0, 0.0), (320.0, 480.0)),
            Some((0.0, 1.0))
        );
        assert_eq!(
            focus_point_of_interest((160.0, 240.0), (320.0, 480.0)),
            Some((0.5, 0.5))
        );
        assert_eq!(
            focus_point_of_interest((320.0, 120.0), (320.0, 480.0)),
            Some((0.25, 0.0))
        );
    }

    #[test]
    fn test_focus_point_rejects_empty_view() {
        assert_eq!(focus_point_of_interest((1.0, 1.0), (0.0, 480.0)), None);
    }
}
