//! countdash dashboard entry point.
//!
//! Client-side rendered Leptos application compiled to WebAssembly. It talks
//! to the counting backend over HTTP only.

use countdash_dashboard::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
