//! `deviceorientation` access for `OrientationSource`.
//!
//! iOS Safari hides the event behind a static
//! `DeviceOrientationEvent.requestPermission()`; it is not in the standard
//! bindings, so it is looked up by reflection.

use std::cell::RefCell;

use futures::future::{self, FutureExt, LocalBoxFuture};
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{DeviceOrientationEvent, Window};

use crate::domain::orientation::OrientationReading;
use crate::systems::orientation::{OrientationError, PermissionState, ReadingSink, SensorPlatform};

const EVENT_NAME: &str = "deviceorientation";

pub struct WebSensor {
    window: Window,
    listener: RefCell<Option<Closure<dyn FnMut(DeviceOrientationEvent)>>>,
}

impl WebSensor {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            listener: RefCell::new(None),
        }
    }

    /// `window.DeviceOrientationEvent`, when the browser has it
    fn event_class(&self) -> Option<JsValue> {
        let class = Reflect::get(&self.window, &JsValue::from_str("DeviceOrientationEvent")).ok()?;
        if class.is_undefined() || class.is_null() {
            None
        } else {
            Some(class)
        }
    }

    /// `DeviceOrientationEvent.requestPermission`, with its receiver
    fn permission_request(&self) -> Option<(JsValue, Function)> {
        let class = self.event_class()?;
        let request = Reflect::get(&class, &JsValue::from_str("requestPermission")).ok()?;
        let request = request.dyn_into::<Function>().ok()?;
        Some((class, request))
    }
}

fn permission_from(answer: &JsValue) -> PermissionState {
    match answer.as_string().as_deref() {
        Some("granted") => PermissionState::Granted,
        _ => PermissionState::Denied,
    }
}

fn describe(err: &JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Some(err) = err.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{:?}", err)
}

impl SensorPlatform for WebSensor {
    fn is_supported(&self) -> bool {
        self.event_class().is_some()
    }

    fn requires_permission(&self) -> bool {
        self.permission_request().is_some()
    }

    fn request_permission(&self) -> LocalBoxFuture<'static, Result<PermissionState, OrientationError>> {
        let Some((class, request)) = self.permission_request() else {
            return future::ready(Ok(PermissionState::Granted)).boxed_local();
        };

        let answer = match request.call0(&class) {
            Ok(answer) => answer,
            Err(err) => {
                return future::ready(Err(OrientationError::PermissionRequestFailed(describe(&err)))).boxed_local();
            }
        };

        let promise = match answer.dyn_into::<Promise>() {
            Ok(promise) => promise,
            Err(answer) => return future::ready(Ok(permission_from(&answer))).boxed_local(),
        };

        async move {
            JsFuture::from(promise)
                .await
                .map(|answer| permission_from(&answer))
                .map_err(|err| OrientationError::PermissionRequestFailed(describe(&err)))
        }
        .boxed_local()
    }

    fn subscribe(&self, sink: ReadingSink) -> Result<(), OrientationError> {
        let callback = Closure::<dyn FnMut(DeviceOrientationEvent)>::new(move |event: DeviceOrientationEvent| {
            sink.push(OrientationReading::new(event.alpha(), event.beta(), event.gamma()));
        });

        self.window
            .add_event_listener_with_callback(EVENT_NAME, callback.as_ref().unchecked_ref())
            .map_err(|err| OrientationError::SubscribeFailed(describe(&err)))?;

        if let Some(previous) = self.listener.replace(Some(callback)) {
            let _ = self
                .window
                .remove_event_listener_with_callback(EVENT_NAME, previous.as_ref().unchecked_ref());
        }
        Ok(())
    }

    fn unsubscribe(&self) {
        if let Some(callback) = self.listener.borrow_mut().take() {
            let _ = self
                .window
                .remove_event_listener_with_callback(EVENT_NAME, callback.as_ref().unchecked_ref());
        }
    }
}
