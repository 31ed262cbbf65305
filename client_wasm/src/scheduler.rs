//! Fixed-period tick driver on top of `setInterval`

use wasm_bindgen::prelude::*;
use web_sys::Window;

/// A running interval. Cleared on `stop` or when dropped.
pub struct Interval {
    window: Window,
    handle: Option<i32>,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn start(
        window: Window,
        period_ms: u64,
        callback: impl FnMut() + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut()>::new(callback);
        let handle = window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            period_ms as i32,
        )?;
        Ok(Self {
            window,
            handle: Some(handle),
            _callback: callback,
        })
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.window.clear_interval_with_handle(handle);
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use js_sys::Promise;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_futures::JsFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    async fn sleep(ms: i32) {
        let promise = Promise::new(&mut |resolve, _reject| {
            web_sys::window()
                .unwrap()
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
                .unwrap();
        });
        JsFuture::from(promise).await.unwrap();
    }

    fn counting_interval(count: &Rc<Cell<u32>>) -> Interval {
        let count = Rc::clone(count);
        Interval::start(web_sys::window().unwrap(), 5, move || {
            count.set(count.get() + 1);
        })
        .unwrap()
    }

    #[wasm_bindgen_test]
    fn test_stop_clears_handle() {
        let mut interval = Interval::start(web_sys::window().unwrap(), 20, || {}).unwrap();
        assert!(interval.is_running());
        interval.stop();
        assert!(!interval.is_running());
        interval.stop();
        assert!(!interval.is_running());
    }

    #[wasm_bindgen_test]
    async fn test_no_ticks_after_stop() {
        let count = Rc::new(Cell::new(0));
        let mut interval = counting_interval(&count);
        sleep(60).await;
        assert!(count.get() > 0);

        interval.stop();
        let stopped_at = count.get();
        sleep(60).await;
        assert_eq!(count.get(), stopped_at);
    }

    #[wasm_bindgen_test]
    async fn test_no_ticks_after_drop() {
        let count = Rc::new(Cell::new(0));
        let interval = counting_interval(&count);
        sleep(60).await;
        assert!(count.get() > 0);

        drop(interval);
        let dropped_at = count.get();
        sleep(60).await;
        assert_eq!(count.get(), dropped_at);
    }
}
