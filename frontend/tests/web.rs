//! Browser smoke tests. Run with `wasm-pack test --headless --firefox frontend`.
#![cfg(target_arch = "wasm32")]

use lifeplan_domain::theme::{Mode, ThemeConfig};
use lifeplan_domain::AppConfig;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_bundled_config_loads_in_browser() {
    let config = AppConfig::embedded().expect("bundled config");
    assert_eq!(config.mode(), Mode::Simple);
    assert!(!config.categories.is_empty());
}

#[wasm_bindgen_test]
fn test_current_year_is_plausible() {
    let year = js_sys::Date::new_0().get_full_year() as i32;
    assert!(year >= 2024);
}

#[wasm_bindgen_test]
fn test_theme_lookup_in_browser() {
    let theme = ThemeConfig::for_name("cute");
    assert_eq!(theme.mode, Mode::Cute);
}
