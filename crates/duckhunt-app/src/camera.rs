//! Camera acquisition through `getUserMedia`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlVideoElement, MediaStream, MediaStreamConstraints};

use crate::canvas::element_by_id;
use crate::errors::{describe_js, SessionError};
use crate::hud::set_status;

/// Ask for the camera and attach the stream to the `<video>` with `video_id`.
///
/// On failure the reason is written to the status line and returned; the
/// game stays in the menu and the player can retry.
#[wasm_bindgen]
pub async fn request_camera(video_id: String) -> Result<(), JsValue> {
    match attach_camera(&video_id).await {
        Ok(()) => {
            tracing::info!(video_id = %video_id, "camera attached");
            Ok(())
        }
        Err(err) => {
            tracing::warn!(error = %err, "camera request failed");
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                set_status(&document, &err.to_string());
            }
            Err(err.into())
        }
    }
}

async fn attach_camera(video_id: &str) -> Result<(), SessionError> {
    let window = web_sys::window().ok_or(SessionError::NoWindow)?;
    let document = window.document().ok_or(SessionError::NoDocument)?;
    let video: HtmlVideoElement = element_by_id(&document, video_id)?;
    let devices = window
        .navigator()
        .media_devices()
        .map_err(|_| SessionError::NoMediaDevices)?;

    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&JsValue::TRUE);
    constraints.set_audio(&JsValue::FALSE);

    let request = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|e| SessionError::CameraDenied(describe_js(&e)))?;
    let stream: MediaStream = JsFuture::from(request)
        .await
        .map_err(|e| SessionError::CameraDenied(describe_js(&e)))?
        .dyn_into()
        .map_err(|_| SessionError::CameraDenied("unexpected getUserMedia result".into()))?;

    video.set_src_object(Some(&stream));
    // Autoplay may be refused until the user interacts; the stream is
    // attached either way.
    if let Ok(playing) = video.play() {
        if let Err(e) = JsFuture::from(playing).await {
            tracing::debug!(error = %describe_js(&e), "video play deferred");
        }
    }
    Ok(())
}
