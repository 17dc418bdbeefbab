// DOM manipulation: HUD text, restart button, lesson messages
use game::{LessonChannel, UiOutput};
use web_sys::{Document, Element, Window};

pub struct DomUi {
    document: Document,
}

impl DomUi {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn get_el(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(el) = self.get_el(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_hidden(&self, id: &str, hidden: bool) {
        if let Some(el) = self.get_el(id) {
            let classes = el.class_list();
            let _ = if hidden {
                classes.add_1("hidden")
            } else {
                classes.remove_1("hidden")
            };
        }
    }
}

impl UiOutput for DomUi {
    fn set_score(&mut self, score: u32) {
        self.set_text("score", &score.to_string());
    }

    fn set_health(&mut self, health: u32) {
        self.set_text("health", &health.to_string());
    }

    fn set_elapsed_seconds(&mut self, seconds: f64) {
        self.set_text("timer", &format!("{:.1}", seconds));
    }

    fn show_game_over(&mut self) {
        self.set_hidden("gameOver", false);
        self.set_hidden("restart", false);
    }

    fn hide_game_over(&mut self) {
        self.set_hidden("gameOver", true);
        self.set_hidden("restart", true);
    }
}

/// Shows lessons in a `#lesson` element when the page has one, otherwise
/// as a browser alert.
pub struct DomLessons {
    window: Window,
    document: Document,
}

impl DomLessons {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }
}

impl LessonChannel for DomLessons {
    fn announce(&mut self, message: &str) {
        match self.document.get_element_by_id("lesson") {
            Some(el) => {
                el.set_text_content(Some(message));
                let _ = el.class_list().remove_1("hidden");
            }
            None => {
                let _ = self.window.alert_with_message(message);
            }
        }
    }
}
