//! Browser host for the Pong game
//!
//! Canvas 2D rendering, keyboard and hand-tracking input, and a
//! `setInterval` driven tick. The simulation itself lives in `game_core`.
//! Browser glue is only compiled for the wasm32 target.

pub mod input;

#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod motion;
#[cfg(target_arch = "wasm32")]
mod scheduler;

#[cfg(target_arch = "wasm32")]
pub use client::*;

#[cfg(target_arch = "wasm32")]
mod client {
    use crate::canvas::{measure_canvas, CanvasTarget};
    use crate::input::{default_bindings, get_key_from_event, ControllerKind};
    use crate::motion::parse_frame;
    use crate::scheduler::Interval;
    use game_core::*;
    use js_sys::Date;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent};

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = console)]
        fn log(s: &str);
    }

    macro_rules! console_log {
        ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
    }

    /// Browser clock and console logging
    pub struct WasmEnv;

    impl Environment for WasmEnv {
        fn now(&self) -> u64 {
            Date::now() as u64
        }

        fn log(&self, msg: String) {
            console_log!("{}", msg);
        }
    }

    /// Called automatically when WASM module loads
    #[wasm_bindgen(start)]
    pub fn init_panic_hook() {
        console_error_panic_hook::set_once();
    }

    type Game = Rc<RefCell<Pong<CanvasTarget>>>;

    /// Main client state
    #[wasm_bindgen]
    pub struct PongClient {
        game: Game,
        document: Document,
        keys: Vec<KeyboardHandle>,
        hands: Vec<MotionHandle>,
        key_listener: Option<Closure<dyn FnMut(KeyboardEvent)>>,
        interval: Option<Interval>,
    }

    #[wasm_bindgen]
    impl PongClient {
        /// Build a game on the canvas with the given id. Controller kinds are
        /// "keyboard", "motion" or "ai".
        #[wasm_bindgen(constructor)]
        pub fn new(canvas_id: &str, left: &str, right: &str) -> Result<PongClient, JsValue> {
            let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
            let document = window
                .document()
                .ok_or_else(|| JsValue::from_str("No document"))?;
            let canvas = document
                .get_element_by_id(canvas_id)
                .ok_or_else(|| JsValue::from_str(&format!("No element #{canvas_id}")))?
                .dyn_into::<HtmlCanvasElement>()
                .map_err(|_| JsValue::from_str(&format!("#{canvas_id} is not a canvas")))?;

            let config = Config::new();
            let (width, height) = measure_canvas(&canvas);
            let court = Court::new(width, height, config.background, config.foreground);
            let surface = Surface::new(court, CanvasTarget::new(&canvas)?);

            let mut keys = Vec::new();
            let mut hands = Vec::new();
            let left = build_controller(left, Side::Left, &config, &mut keys, &mut hands)?;
            let right = build_controller(right, Side::Right, &config, &mut keys, &mut hands)?;

            let game = Pong::new(Box::new(WasmEnv), config, surface, left, right);

            let mut client = PongClient {
                game: Rc::new(RefCell::new(game)),
                document,
                keys,
                hands,
                key_listener: None,
                interval: None,
            };
            client.install_key_listener()?;
            Ok(client)
        }

        /// Start ticking at the configured frame period
        pub fn start(&mut self) -> Result<bool, JsValue> {
            let started = self.game.borrow_mut().start().success;
            if started {
                self.spawn_interval()?;
            }
            Ok(started)
        }

        pub fn pause(&mut self) -> bool {
            self.game.borrow_mut().pause().success
        }

        pub fn resume(&mut self) -> bool {
            self.game.borrow_mut().resume().success
        }

        /// Stop for good: the interval and the key listener are released
        pub fn stop(&mut self) -> bool {
            let stopped = self.game.borrow_mut().stop().success;
            if stopped {
                if let Some(mut interval) = self.interval.take() {
                    interval.stop();
                }
                self.remove_key_listener();
            }
            stopped
        }

        /// Apply a session action by name: "START", "PAUSE", "RESUME" or "STOP"
        pub fn apply(&mut self, action: &str) -> Result<bool, JsValue> {
            let action = SessionAction::parse(action)
                .ok_or_else(|| JsValue::from_str(&format!("Unknown action '{action}'")))?;
            Ok(match action {
                SessionAction::Start => self.start()?,
                SessionAction::Pause => self.pause(),
                SessionAction::Resume => self.resume(),
                SessionAction::Stop => self.stop(),
            })
        }

        /// True while the interval is driving ticks
        pub fn is_ticking(&self) -> bool {
            self.interval
                .as_ref()
                .map(|interval| interval.is_running())
                .unwrap_or(false)
        }

        /// Current session state name
        pub fn state(&self) -> String {
            format!("{:?}", self.game.borrow().session_state())
        }

        /// Feed one hand-tracking frame. Returns the direction it signalled
        /// (-1 up, 1 down) or 0 when it carried no signal.
        pub fn push_hand_frame(&self, frame: &JsValue) -> i8 {
            let frame = parse_frame(frame);
            let now = WasmEnv.now();
            self.hands
                .iter()
                .filter_map(|hands| hands.push_frame(&frame, now))
                .last()
                .map(Direction::signum)
                .unwrap_or(0)
        }

        /// Run a single tick by hand. Returns false when the game isn't playing.
        pub fn tick(&self) -> bool {
            match self.game.try_borrow_mut() {
                Ok(mut game) => game.tick().is_some(),
                Err(_) => false,
            }
        }
    }

    impl PongClient {
        fn spawn_interval(&mut self) -> Result<(), JsValue> {
            let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
            let period = self.game.borrow().frame_period_ms();
            let game = Rc::clone(&self.game);
            let interval = Interval::start(window, period, move || {
                if let Ok(mut game) = game.try_borrow_mut() {
                    game.tick();
                }
            })?;
            self.interval = Some(interval);
            Ok(())
        }

        fn install_key_listener(&mut self) -> Result<(), JsValue> {
            if self.keys.is_empty() {
                return Ok(());
            }
            let keys = self.keys.clone();
            // keydown auto-repeats while held, keeping the direction fresh
            let listener = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
                let key = get_key_from_event(&event);
                let now = WasmEnv.now();
                let mut handled = false;
                for handle in &keys {
                    handled |= handle.press(&key, now);
                }
                if handled {
                    event.prevent_default();
                }
            });
            self.document
                .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())?;
            self.key_listener = Some(listener);
            Ok(())
        }

        fn remove_key_listener(&mut self) {
            if let Some(listener) = self.key_listener.take() {
                if let Err(err) = self.document.remove_event_listener_with_callback(
                    "keydown",
                    listener.as_ref().unchecked_ref(),
                ) {
                    web_sys::console::warn_2(
                        &JsValue::from_str("removing key listener failed:"),
                        &err,
                    );
                }
            }
        }
    }

    impl Drop for PongClient {
        fn drop(&mut self) {
            self.remove_key_listener();
        }
    }

    fn build_controller(
        name: &str,
        side: Side,
        config: &Config,
        keys: &mut Vec<KeyboardHandle>,
        hands: &mut Vec<MotionHandle>,
    ) -> Result<Box<dyn Controller>, JsValue> {
        let kind = ControllerKind::parse(name)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown controller '{name}'")))?;
        let now = WasmEnv.now();
        let window = config.sampling_window_ms;
        Ok(match kind {
            ControllerKind::Keyboard => {
                let (controller, handle) =
                    KeyboardController::new(default_bindings(side), window, now);
                keys.push(handle);
                Box::new(controller)
            }
            ControllerKind::Motion => {
                let (controller, handle) =
                    MotionController::new(config.motion_threshold, window, now);
                hands.push(handle);
                Box::new(controller)
            }
            ControllerKind::Ai => Box::new(ScriptedController::new(
                config.ai_dead_zone,
                config.framerate_ms,
                now,
            )),
        })
    }
}
