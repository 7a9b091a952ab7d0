//! Transient on-screen text: toasts, narration quotes, mission cards and the
//! collision flash. Purely cosmetic; the simulation never reads these back.

/// Narration and mission cards stay up this long.
pub const NARRATION_SECONDS: f32 = 4.0;
/// Default toast lifetime.
pub const TOAST_SECONDS: f32 = 1.4;

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub text: String,
    pub time_remaining: f32,
}

impl Notice {
    fn new(text: impl Into<String>, duration: f32) -> Self {
        Self {
            text: text.into(),
            time_remaining: duration,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MissionCard {
    pub title: String,
    pub subtitle: String,
    pub time_remaining: f32,
}

/// One slot per kind of message; a new message replaces the old one.
#[derive(Debug, Clone, Default)]
pub struct Notices {
    toast: Option<Notice>,
    narration: Option<Notice>,
    mission_card: Option<MissionCard>,
    flash_remaining: f32,
}

impl Notices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toast(&mut self, text: impl Into<String>, duration: f32) {
        self.toast = Some(Notice::new(text, duration));
    }

    pub fn narrate(&mut self, quote: impl Into<String>) {
        self.narration = Some(Notice::new(quote, NARRATION_SECONDS));
    }

    pub fn show_mission_card(&mut self, title: impl Into<String>, subtitle: impl Into<String>) {
        self.mission_card = Some(MissionCard {
            title: title.into(),
            subtitle: subtitle.into(),
            time_remaining: NARRATION_SECONDS,
        });
    }

    /// Red screen flash.
    pub fn flash(&mut self, duration: f32) {
        self.flash_remaining = self.flash_remaining.max(duration);
    }

    pub fn update(&mut self, dt: f32) {
        expire(&mut self.toast, dt);
        expire(&mut self.narration, dt);
        if let Some(card) = &mut self.mission_card {
            card.time_remaining -= dt;
            if card.time_remaining <= 0.0 {
                self.mission_card = None;
            }
        }
        self.flash_remaining = (self.flash_remaining - dt).max(0.0);
    }

    pub fn current_toast(&self) -> Option<&str> {
        self.toast.as_ref().map(|n| n.text.as_str())
    }

    /// The narration quote wrapped in curly quotes, ready to display.
    pub fn narration_line(&self) -> Option<String> {
        self.narration.as_ref().map(|n| format!("\u{201c}{}\u{201d}", n.text))
    }

    pub fn mission_card(&self) -> Option<&MissionCard> {
        self.mission_card.as_ref()
    }

    pub fn is_flashing(&self) -> bool {
        self.flash_remaining > 0.0
    }
}

fn expire(slot: &mut Option<Notice>, dt: f32) {
    if let Some(notice) = slot {
        notice.time_remaining -= dt;
        if notice.time_remaining <= 0.0 {
            *slot = None;
        }
    }
}
