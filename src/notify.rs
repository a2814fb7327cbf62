//! Parent-frame game-over notification
//!
//! Pages are embedded in a hub that wants to know how a run ended. The report
//! is fire-and-forget: posted at most once per session, no acknowledgment,
//! and silently dropped when there is no parent to hear it.

use serde::Serialize;

/// The message posted to the embedding frame
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameReport {
    pub game_name: &'static str,
    pub final_score: u64,
}

impl GameReport {
    pub fn new(game_name: &'static str, final_score: u64) -> Self {
        Self {
            game_name,
            final_score,
        }
    }
}

/// Post the report to the embedding frame (wasm only)
#[cfg(target_arch = "wasm32")]
pub fn post_to_parent(report: &GameReport) {
    use wasm_bindgen::JsValue;

    let Ok(json) = serde_json::to_string(report) else {
        return;
    };
    let parent = web_sys::window().and_then(|w| w.parent().ok()).flatten();
    if let Some(parent) = parent {
        match parent.post_message(&JsValue::from_str(&json), "*") {
            Ok(()) => log::info!("Posted game-over report for {}", report.game_name),
            Err(err) => log::warn!("Game-over report dropped: {:?}", err),
        }
    }
}
