//! Sidebar actions and the view transitions they cause.

use crate::models::ViewSelector;
use crate::session::SessionState;

/// A sidebar navigation button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavAction {
    Home,
    Predict,
    Summary,
    Trend,
}

impl NavAction {
    pub fn all() -> &'static [NavAction] {
        &[
            NavAction::Home,
            NavAction::Predict,
            NavAction::Summary,
            NavAction::Trend,
        ]
    }

    pub fn target(&self) -> ViewSelector {
        match self {
            Self::Home => ViewSelector::Home,
            Self::Predict => ViewSelector::Predict,
            Self::Summary => ViewSelector::Summary,
            Self::Trend => ViewSelector::Trend,
        }
    }

    /// Button caption.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "🏠 Home",
            Self::Predict => "🔮 Prediction",
            Self::Summary => "📋 Input Summary",
            Self::Trend => "📊 Yield Trend",
        }
    }

    /// Stable element id for the button.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Home => "nav-home",
            Self::Predict => "nav-predict",
            Self::Summary => "nav-summary",
            Self::Trend => "nav-trend",
        }
    }
}

/// Switches the session to the view behind `action`.
pub fn select_view(session: &mut SessionState, action: NavAction) {
    session.set_view(action.target());
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_action_reaches_its_target_from_every_view() {
        for start in ViewSelector::all() {
            for action in NavAction::all() {
                let mut session = SessionState::new();
                session.set_view(*start);

                select_view(&mut session, *action);

                assert_eq!(
                    session.view(),
                    action.target(),
                    "{action:?} from {start} should land on {}",
                    action.target()
                );
            }
        }
    }

    #[test]
    fn selecting_current_view_changes_nothing() {
        let mut session = SessionState::new();
        select_view(&mut session, NavAction::Summary);
        let before = session.clone();

        select_view(&mut session, NavAction::Summary);

        assert_eq!(session, before);
    }

    #[test]
    fn actions_cover_every_view() {
        let targets: Vec<ViewSelector> = NavAction::all().iter().map(|a| a.target()).collect();
        assert_eq!(targets, ViewSelector::all().to_vec());
    }
}
