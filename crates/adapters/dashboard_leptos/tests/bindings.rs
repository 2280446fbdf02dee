//! Browser tests for the functions defined on `window`.

use countdash_dashboard::bindings::{LOAD_HISTORY, REFRESH_LIVE_STATS, install_globals};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

wasm_bindgen_test_configure!(run_in_browser);

fn global(name: &str) -> JsValue {
    let window = web_sys::window().unwrap();
    js_sys::Reflect::get(&window, &JsValue::from_str(name)).unwrap()
}

#[wasm_bindgen_test]
fn should_define_callable_functions_on_window() {
    install_globals();

    for name in [REFRESH_LIVE_STATS, LOAD_HISTORY] {
        let value = global(name);
        assert!(value.is_function(), "window.{name} is not a function");
        let function: js_sys::Function = value.dyn_into().unwrap();
        assert!(function.call0(&JsValue::NULL).is_ok());
    }
}

#[wasm_bindgen_test]
fn should_install_only_once() {
    install_globals();
    let first = global(REFRESH_LIVE_STATS);
    install_globals();
    assert_eq!(global(REFRESH_LIVE_STATS), first);
}
