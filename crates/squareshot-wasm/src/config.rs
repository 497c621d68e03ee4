//! WASM bindings for camera configuration.

use wasm_bindgen::prelude::*;

/// Camera configuration wrapper for JavaScript
///
/// `from_json` accepts partial objects: missing fields take their defaults,
/// so `{ saves_image: true }` is a valid configuration.
#[wasm_bindgen]
#[derive(Default)]
pub struct CameraConfig {
    inner: squareshot_core::CameraConfig,
}

#[wasm_bindgen]
impl CameraConfig {
    /// Create a configuration with default values
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: squareshot_core::CameraConfig::new(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn crop_image(&self) -> bool {
        self.inner.crop_image
    }

    #[wasm_bindgen(setter)]
    pub fn set_crop_image(&mut self, value: bool) {
        self.inner.crop_image = value;
    }

    #[wasm_bindgen(getter)]
    pub fn saves_image(&self) -> bool {
        self.inner.saves_image
    }

    #[wasm_bindgen(setter)]
    pub fn set_saves_image(&mut self, value: bool) {
        self.inner.saves_image = value;
    }

    /// Whether the user-facing camera opens first.
    #[wasm_bindgen(getter)]
    pub fn front_camera_first(&self) -> bool {
        self.inner.default_position.is_mirrored()
    }

    #[wasm_bindgen(getter)]
    pub fn tilt_interval_ms(&self) -> u32 {
        self.inner.tilt_interval_ms.min(u32::MAX as u64) as u32
    }

    #[wasm_bindgen(getter)]
    pub fn jpeg_quality(&self) -> u8 {
        self.inner.jpeg_quality
    }

    #[wasm_bindgen(setter)]
    pub fn set_jpeg_quality(&mut self, value: u8) {
        self.inner.jpeg_quality = value.clamp(1, 100);
    }

    /// Serialize to a JS object.
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Deserialize from a JS object; missing fields use defaults.
    pub fn from_json(value: JsValue) -> Result<CameraConfig, JsValue> {
        let inner: squareshot_core::CameraConfig =
            serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(CameraConfig { inner })
    }
}


/// WASM-specific tests that require JsValue.
///
/// These tests can only run on wasm32 targets. Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use js_sys::{Object, Reflect};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_from_json_partial_object() {
        let value = Object::new();
        Reflect::set(&value, &"saves_image".into(), &JsValue::TRUE).unwrap();

        let config = CameraConfig::from_json(value.into()).unwrap();
        assert!(config.saves_image());
        assert!(config.crop_image());
        assert_eq!(config.tilt_interval_ms(), 200);
        assert_eq!(config.jpeg_quality(), 90);
    }

    #[wasm_bindgen_test]
    fn test_json_round_trip_keeps_changes() {
        let mut config = CameraConfig::new();
        config.set_jpeg_quality(60);
        config.set_crop_image(false);

        let restored = CameraConfig::from_json(config.to_json().unwrap()).unwrap();
        assert_eq!(restored.jpeg_quality(), 60);
        assert!(!restored.crop_image());
    }

    #[wasm_bindgen_test]
    fn test_from_json_rejects_wrong_types() {
        let value = Object::new();
        Reflect::set(&value, &"jpeg_quality".into(), &"high".into()).unwrap();
        assert!(CameraConfig::from_json(value.into()).is_err());
    }
}
