// WASM client entry point for the cell game
// Drives the shared simulation from a browser interval timer and paints it on a canvas

use game::{Config, Frame, KeyEvent, KeyResponse, TickOutcome, World};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, window};

mod render; // Canvas rendering, drawing the arena and sprites
mod ui; // DOM manipulation, HUD and lesson messages
mod utils; // Clock, seeding, console logging

use render::CanvasRenderer;
use ui::{DomLessons, DomUi};

/// Initialize panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

struct Session {
    world: World<SmallRng>,
    renderer: CanvasRenderer,
    ui: DomUi,
    lessons: DomLessons,
}

impl Session {
    fn tick(&mut self) -> TickOutcome {
        let Session {
            world,
            renderer,
            ui,
            lessons,
        } = self;
        let mut frame = Frame::new(renderer, ui, lessons);
        world.tick(utils::now(), &mut frame)
    }
}

struct Shared {
    session: RefCell<Session>,
    interval_ms: i32,
    timer: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl Shared {
    fn start_timer(&self) -> Result<(), JsValue> {
        if self.timer.get().is_some() {
            return Ok(());
        }
        let window = window().ok_or("No window")?;
        let tick = self.tick.borrow();
        let callback = tick.as_ref().ok_or("Tick handler not installed")?;
        let handle = window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            self.interval_ms,
        )?;
        self.timer.set(Some(handle));
        Ok(())
    }

    fn stop_timer(&self) {
        if let (Some(handle), Some(window)) = (self.timer.take(), window()) {
            window.clear_interval_with_handle(handle);
        }
    }

    fn restart(&self) -> Result<(), JsValue> {
        {
            let mut session = self.session.borrow_mut();
            let Session { world, ui, .. } = &mut *session;
            world.restart(utils::now(), ui);
        }
        console_log!("Session restarted");
        self.start_timer()
    }
}

/// A running game bound to a canvas element.
#[wasm_bindgen]
pub struct CellGame {
    shared: Rc<Shared>,
}

#[wasm_bindgen]
impl CellGame {
    /// Create a game on the canvas with id `canvas_id`.
    ///
    /// `config` is a plain object shaped like `config.toml`; missing sections
    /// take their defaults, and `undefined` or `null` means all defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, config: JsValue) -> Result<CellGame, JsValue> {
        init();

        let config = parse_config(config)?;
        let interval_ms = i32::try_from(config.runner.tick_interval_ms).unwrap_or(i32::MAX);

        let window = window().ok_or("No window")?;
        let document = window.document().ok_or("No document")?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or("Canvas not found")?
            .dyn_into::<HtmlCanvasElement>()?;

        let seed = utils::random_seed();
        let world = World::new(config, SmallRng::seed_from_u64(seed), utils::now())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let renderer = CanvasRenderer::new(canvas)?;
        renderer.fit(world.bounds());

        let mut ui = DomUi::new(document.clone());
        game::UiOutput::hide_game_over(&mut ui);

        let shared = Rc::new(Shared {
            session: RefCell::new(Session {
                world,
                renderer,
                ui,
                lessons: DomLessons::new(window, document),
            }),
            interval_ms,
            timer: Cell::new(None),
            tick: RefCell::new(None),
        });

        setup_tick_handler(&shared);
        setup_input_handlers(&shared)?;
        setup_restart_button(&shared)?;
        shared.start_timer()?;

        console_log!("Game started (seed {}, tick {} ms)", seed, interval_ms);
        Ok(CellGame { shared })
    }

    /// Start a fresh session.
    pub fn restart(&self) -> Result<(), JsValue> {
        self.shared.restart()
    }

    /// Steer the cell by key name, as a keyboard would.
    pub fn key_down(&self, key: &str) -> bool {
        self.shared.session.borrow_mut().world.handle_key(&KeyEvent::Down(key.to_string()))
            == KeyResponse::Handled
    }

    pub fn key_up(&self, key: &str) -> bool {
        self.shared.session.borrow_mut().world.handle_key(&KeyEvent::Up(key.to_string()))
            == KeyResponse::Handled
    }

    pub fn score(&self) -> u32 {
        self.shared.session.borrow().world.cell().score
    }

    pub fn health(&self) -> u32 {
        self.shared.session.borrow().world.cell().display_health()
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.shared.session.borrow().world.elapsed_seconds(utils::now())
    }

    pub fn is_running(&self) -> bool {
        self.shared.session.borrow().world.is_running()
    }
}

impl Drop for CellGame {
    fn drop(&mut self) {
        self.shared.stop_timer();
    }
}

fn parse_config(value: JsValue) -> Result<Config, JsValue> {
    let config = if value.is_undefined() || value.is_null() {
        Config::default()
    } else {
        serde_wasm_bindgen::from_value::<Config>(value)?
    };
    config
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(config)
}

fn setup_tick_handler(shared: &Rc<Shared>) {
    let weak: Weak<Shared> = Rc::downgrade(shared);
    let closure = Closure::wrap(Box::new(move || {
        let Some(shared) = weak.upgrade() else {
            return;
        };
        let outcome = match shared.session.try_borrow_mut() {
            Ok(mut session) => session.tick(),
            // Busy with an input handler; try again next interval.
            Err(_) => return,
        };
        match outcome {
            TickOutcome::Running => {}
            TickOutcome::GameOver => {
                let score = shared.session.borrow().world.cell().score;
                console_log!("Game over, score {}", score);
                shared.stop_timer();
            }
            TickOutcome::Ended => shared.stop_timer(),
        }
    }) as Box<dyn FnMut()>);
    *shared.tick.borrow_mut() = Some(closure);
}

fn setup_input_handlers(shared: &Rc<Shared>) -> Result<(), JsValue> {
    let window = window().ok_or("No window")?;
    let document = window.document().ok_or("No document")?;

    // Keydown handler
    {
        let weak = Rc::downgrade(shared);
        let closure = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            dispatch_key(&weak, &event, KeyEvent::Down(event.key()));
        }) as Box<dyn FnMut(_)>);

        document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Keyup handler
    {
        let weak = Rc::downgrade(shared);
        let closure = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            dispatch_key(&weak, &event, KeyEvent::Up(event.key()));
        }) as Box<dyn FnMut(_)>);

        document.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

fn dispatch_key(weak: &Weak<Shared>, event: &KeyboardEvent, key: KeyEvent) {
    let Some(shared) = weak.upgrade() else {
        return;
    };
    let Ok(mut session) = shared.session.try_borrow_mut() else {
        return;
    };
    if session.world.handle_key(&key) == KeyResponse::Handled {
        // Keep arrow keys from scrolling the page
        event.prevent_default();
    }
}

fn setup_restart_button(shared: &Rc<Shared>) -> Result<(), JsValue> {
    let window = window().ok_or("No window")?;
    let document = window.document().ok_or("No document")?;

    let Some(button) = document.get_element_by_id("restart") else {
        console_log!("No #restart button, call restart() to play again");
        return Ok(());
    };

    let weak = Rc::downgrade(shared);
    let closure = Closure::wrap(Box::new(move |_event: MouseEvent| {
        if let Some(shared) = weak.upgrade() {
            if let Err(e) = shared.restart() {
                web_sys::console::error_1(&format!("Restart failed: {:?}", e).into());
            }
        }
    }) as Box<dyn FnMut(_)>);

    button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();

    Ok(())
}
