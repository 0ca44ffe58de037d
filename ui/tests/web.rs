#![cfg(target_arch = "wasm32")]

//! Browser-only tests
//!
//! Run with `wasm-pack test --headless --chrome ui`. These cover the
//! local-storage paths the native unit tests cannot reach.

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use chrono::{TimeZone, Utc};
use taskdeck_ui::client::auth::{self, Session};
use taskdeck_ui::state::{load_ui_preferences, save_ui_preferences, ColorMode, UiPreferences};

#[wasm_bindgen_test]
fn ui_preferences_round_trip() {
    save_ui_preferences(&UiPreferences {
        color_mode: ColorMode::Dark,
    });
    assert_eq!(load_ui_preferences().color_mode, ColorMode::Dark);
}

#[wasm_bindgen_test]
fn session_store_load_and_clear() {
    let now = Utc.timestamp_opt(0, 0).single().unwrap();
    let session = Session {
        id_token: "a.b.c".to_string(),
        access_token: None,
        display_name: "demo".to_string(),
        expires_at: None,
    };

    auth::store_session(&session);
    assert_eq!(auth::load_session(now), Some(session));

    auth::clear_session();
    assert!(auth::load_session(now).is_none());
}
