#![cfg(target_arch = "wasm32")]

use flamelamp_engine::Lamp;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn lamp_renders_into_pixel_buffer() {
    let mut lamp = Lamp::new();
    lamp.set_brightness(1023);
    assert!(lamp.update(0.0));
    assert_eq!(lamp.pixels_len(), 225 * 3);
    assert!(!lamp.pixels_ptr().is_null());
    assert_eq!(lamp.mode_name(), "fire");
    assert_eq!(lamp.mode_count(), 2);
}

#[wasm_bindgen_test]
fn click_then_rotate_changes_hue() {
    let mut lamp = Lamp::new();
    lamp.button(4);
    lamp.update(0.0);
    assert_eq!(lamp.mode_name(), "lamp");
    lamp.rotate(-5);
    lamp.update(1.0);
    assert!(lamp.status().contains("hue: 246"));
}

#[wasm_bindgen_test]
fn bad_json_is_an_error() {
    assert!(Lamp::from_json("{ \"modes\": [] }").is_err());
}
