//! HUD sync: writes snapshot values into the page's text elements.

use web_sys::{Document, Element};

use duckhunt_core::enums::GamePhase;
use duckhunt_core::state::{BannerView, GameStateSnapshot, HudView};

use crate::canvas::element_by_id;
use crate::errors::SessionError;

/// Text for every HUD field, derived from one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HudText {
    pub score: String,
    pub best: String,
    pub round: String,
    pub ammo: String,
    pub strikes: String,
    pub timer: String,
    /// `None` hides the banner.
    pub banner: Option<String>,
    pub game_over: bool,
}

impl HudText {
    pub fn from_snapshot(snapshot: &GameStateSnapshot) -> Self {
        let hud: &HudView = &snapshot.hud;
        Self {
            score: hud.score_text.clone(),
            best: hud.best_score.to_string(),
            round: hud.round.to_string(),
            ammo: hud.ammo.to_string(),
            strikes: hud.strikes.to_string(),
            timer: hud.seconds_left.to_string(),
            banner: snapshot.banner.map(|BannerView { round }| format!("Round {round}")),
            game_over: snapshot.phase == GamePhase::GameOver,
        }
    }
}

/// Handles to the HUD elements. Only fields that changed are written.
pub struct Hud {
    score: Element,
    best: Element,
    round: Element,
    ammo: Element,
    strikes: Element,
    timer: Element,
    banner: Element,
    game_over: Element,
    last: Option<HudText>,
}

impl Hud {
    pub fn attach(document: &Document) -> Result<Self, SessionError> {
        Ok(Self {
            score: element_by_id(document, "score")?,
            best: element_by_id(document, "best-score")?,
            round: element_by_id(document, "round")?,
            ammo: element_by_id(document, "ammo")?,
            strikes: element_by_id(document, "strikes")?,
            timer: element_by_id(document, "timer")?,
            banner: element_by_id(document, "banner")?,
            game_over: element_by_id(document, "game-over")?,
            last: None,
        })
    }

    pub fn sync(&mut self, snapshot: &GameStateSnapshot) {
        let next = HudText::from_snapshot(snapshot);
        if self.last.as_ref() == Some(&next) {
            return;
        }
        // Empty strings never match real values, so the first sync writes everything.
        let prev = self.last.take().unwrap_or_default();

        write_if_changed(&self.score, &prev.score, &next.score);
        write_if_changed(&self.best, &prev.best, &next.best);
        write_if_changed(&self.round, &prev.round, &next.round);
        write_if_changed(&self.ammo, &prev.ammo, &next.ammo);
        write_if_changed(&self.strikes, &prev.strikes, &next.strikes);
        write_if_changed(&self.timer, &prev.timer, &next.timer);

        match &next.banner {
            Some(text) => {
                self.banner.set_text_content(Some(text));
                let _ = self.banner.remove_attribute("hidden");
            }
            None => {
                let _ = self.banner.set_attribute("hidden", "");
            }
        }
        set_hidden(&self.game_over, !next.game_over);

        self.last = Some(next);
    }
}

fn write_if_changed(element: &Element, prev: &str, next: &str) {
    if prev != next {
        element.set_text_content(Some(next));
    }
}

fn set_hidden(element: &Element, hidden: bool) {
    let _ = if hidden {
        element.set_attribute("hidden", "")
    } else {
        element.remove_attribute("hidden")
    };
}

/// Show a status line (camera errors, loading notices). Missing element is ignored.
pub fn set_status(document: &Document, message: &str) {
    if let Some(status) = document.get_element_by_id("status") {
        status.set_text_content(Some(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hud_text_from_snapshot() {
        let mut snapshot = GameStateSnapshot::default();
        snapshot.phase = GamePhase::Playing;
        snapshot.hud.score = 1300;
        snapshot.hud.score_text = "001300".into();
        snapshot.hud.ammo = 2;
        snapshot.hud.strikes = 1;
        snapshot.hud.seconds_left = 42;
        snapshot.banner = Some(BannerView { round: 3 });

        let text = HudText::from_snapshot(&snapshot);
        assert_eq!(text.score, "001300");
        assert_eq!(text.ammo, "2");
        assert_eq!(text.strikes, "1");
        assert_eq!(text.timer, "42");
        assert_eq!(text.banner.as_deref(), Some("Round 3"));
        assert!(!text.game_over);
    }

    #[test]
    fn test_default_snapshot_hud() {
        let text = HudText::from_snapshot(&GameStateSnapshot::default());
        assert_eq!(text.score, "000000");
        assert_eq!(text.round, "1");
        assert_eq!(text.timer, "60");
        assert_eq!(text.banner, None);
    }
}
