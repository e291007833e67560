use js_sys::Promise;
use shared::Coordinates;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeolocationError {
    #[error("geolocation is not available in this browser")]
    Unsupported,
    #[error("position request rejected: {0}")]
    Denied(String),
}

/// Resolves the device position once, bridging the callback API into a future.
pub async fn current_position() -> Result<Coordinates, GeolocationError> {
    let geolocation = seed::window()
        .navigator()
        .geolocation()
        .map_err(|_| GeolocationError::Unsupported)?;

    let promise = Promise::new(&mut |resolve, reject| {
        if let Err(err) =
            geolocation.get_current_position_with_error_callback(&resolve, Some(&reject))
        {
            // Settle the promise so the await below cannot hang.
            let _ = reject.call1(&JsValue::NULL, &err);
        }
    });

    let position = JsFuture::from(promise)
        .await
        .map_err(|err| GeolocationError::Denied(format!("{err:?}")))?;
    let coords = position.unchecked_into::<web_sys::Position>().coords();

    Ok(Coordinates::new(coords.latitude(), coords.longitude()))
}
