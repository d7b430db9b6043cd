use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlVideoElement, MediaStream, MediaStreamConstraints, MediaStreamTrack};
use yew::NodeRef;

/// Asks for the rear camera.
pub async fn open() -> Result<MediaStream, String> {
    let window = web_sys::window().ok_or_else(|| "No window".to_string())?;
    let devices = window.navigator().media_devices().map_err(describe)?;

    let video = js_sys::Object::new();
    js_sys::Reflect::set(
        &video,
        &JsValue::from_str("facingMode"),
        &JsValue::from_str("environment"),
    )
    .map_err(describe)?;
    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&video.into());

    let request = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(describe)?;
    let stream = JsFuture::from(request).await.map_err(describe)?;
    stream.dyn_into::<MediaStream>().map_err(describe)
}

pub fn attach(stream: &MediaStream, video_ref: &NodeRef) {
    let Some(video) = video_ref.cast::<HtmlVideoElement>() else {
        log::warn!("Camera stream ready but no video element is mounted");
        return;
    };
    video.set_src_object(Some(stream));
    if video.play().is_err() {
        log::warn!("Camera preview did not start");
    }
}

pub fn stop(stream: &MediaStream, video_ref: &NodeRef) {
    for track in stream.get_tracks().iter() {
        track.unchecked_into::<MediaStreamTrack>().stop();
    }
    if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
        video.set_src_object(None);
    }
}

fn describe(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
