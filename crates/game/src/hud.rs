//! HUD text. A pure function of mission state; the renderer just prints it.

use crate::mission::Checklist;

fn check(flag: bool) -> &'static str {
    if flag {
        "\u{2705}"
    } else {
        "\u{2610}"
    }
}

/// Build the HUD block. `time_left` is only shown while in the maze.
pub fn hud_text(persona: &str, mission_number: u8, checklist: &Checklist, time_left: Option<f32>) -> String {
    let timer = match time_left {
        Some(remaining) => format!("\nTime Left: {:.1}s", remaining.max(0.0)),
        None => String::new(),
    };
    format!(
        "Pilot: {persona}\nMission {mission_number}/3{timer}\n\n[ Why choose me ]\n{} Systems thinking\n{} Fast prototyping\n{} Teaching & leading",
        check(checklist.systems),
        check(checklist.prototyping),
        check(checklist.leading),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_game_hud() {
        let text = hud_text("optimizer", 1, &Checklist::default(), None);
        assert_eq!(
            text,
            "Pilot: optimizer\nMission 1/3\n\n[ Why choose me ]\n\u{2610} Systems thinking\n\u{2610} Fast prototyping\n\u{2610} Teaching & leading"
        );
    }

    #[test]
    fn maze_hud_shows_time_left() {
        let checklist = Checklist { leading: true, ..Default::default() };
        let text = hud_text("prototyper", 2, &checklist, Some(42.06));
        assert!(text.starts_with("Pilot: prototyper\nMission 2/3\nTime Left: 42.1s\n"));
        assert!(text.ends_with("\u{2705} Teaching & leading"));
    }

    #[test]
    fn time_left_never_negative() {
        let text = hud_text("optimizer", 2, &Checklist::default(), Some(-3.0));
        assert!(text.contains("Time Left: 0.0s"));
    }
}
