use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

struct LoopState {
    window: Window,
    running: Cell<bool>,
    pending: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl LoopState {
    fn schedule(&self) -> Result<(), JsValue> {
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return Ok(());
        };
        let id = self.window.request_animation_frame(callback.as_ref().unchecked_ref())?;
        self.pending.set(Some(id));
        Ok(())
    }
}

/// `requestAnimationFrame` loop. One tick in flight at a time; stops on drop.
pub struct FrameLoop {
    state: Rc<LoopState>,
}

impl FrameLoop {
    /// Start calling `tick(timestamp_ms)` once per display frame.
    pub fn start<F>(window: Window, mut tick: F) -> Result<Self, JsValue>
    where
        F: FnMut(f64) + 'static,
    {
        let state = Rc::new(LoopState {
            window,
            running: Cell::new(true),
            pending: Cell::new(None),
            callback: RefCell::new(None),
        });

        let weak: Weak<LoopState> = Rc::downgrade(&state);
        let callback = Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
            let Some(state) = weak.upgrade() else {
                return;
            };
            state.pending.set(None);
            if !state.running.get() {
                return;
            }
            // Next frame is booked before this one runs, so a failing tick
            // does not end the loop.
            if let Err(err) = state.schedule() {
                console_error!("requestAnimationFrame failed: {:?}", err);
                state.running.set(false);
            }
            tick(timestamp);
        });

        *state.callback.borrow_mut() = Some(callback);
        state.schedule()?;
        Ok(Self { state })
    }

    pub fn is_running(&self) -> bool {
        self.state.running.get()
    }

    pub fn stop(&self) {
        self.state.running.set(false);
        if let Some(id) = self.state.pending.take() {
            let _ = self.state.window.cancel_animation_frame(id);
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
