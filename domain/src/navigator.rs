//! # Navigator
//!
//! Screen state machine for the mini app.
//!
//! The navigator holds exactly one current screen. Transitions go to any
//! registered screen; names that are not registered are ignored. `main` is
//! the initial screen and every other screen returns to it through `back`.
//!
//! Footer tabs that point at screens without a view (`goals`, `stats`,
//! `agent`) do not transition. They produce a "not yet available" outcome
//! which the session turns into an info notification.

use log::debug;
use shared::{FooterTab, Screen};

/// Result of pressing a footer tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabOutcome {
    /// The navigator moved (or stayed) on the tab's screen
    Shown(Screen),
    /// The tab's screen has no view yet
    NotYetAvailable(Screen),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    current: Screen,
    registered: Vec<Screen>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Navigator with the screens that currently have a view
    pub fn new() -> Self {
        Self::with_screens(&[Screen::Main, Screen::AddIncome, Screen::AddExpense])
    }

    /// Navigator over a custom screen set. `main` is always registered.
    pub fn with_screens(screens: &[Screen]) -> Self {
        let mut registered = vec![Screen::Main];
        for screen in screens {
            if !registered.contains(screen) {
                registered.push(*screen);
            }
        }
        Self {
            current: Screen::Main,
            registered,
        }
    }

    /// Register another screen once its view exists
    pub fn register(&mut self, screen: Screen) {
        if !self.registered.contains(&screen) {
            self.registered.push(screen);
        }
    }

    pub fn is_registered(&self, screen: Screen) -> bool {
        self.registered.contains(&screen)
    }

    /// Transition by screen name. Unknown names are a no-op.
    pub fn transition_to(&mut self, screen_name: &str) {
        match Screen::from_name(screen_name) {
            Some(screen) => self.show(screen),
            None => debug!("Ignoring transition to unknown screen {:?}", screen_name),
        }
    }

    /// Transition to a screen. Screens without a view are a no-op.
    pub fn show(&mut self, screen: Screen) {
        if !self.is_registered(screen) {
            debug!("Ignoring transition to unregistered screen {}", screen);
            return;
        }
        if self.current != screen {
            debug!("Screen {} -> {}", self.current, screen);
            self.current = screen;
        }
    }

    /// Return to the main screen
    pub fn back(&mut self) {
        self.show(Screen::Main);
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn is_active(&self, screen: Screen) -> bool {
        self.current == screen
    }

    /// Footer tab to highlight. Input screens highlight nothing.
    pub fn active_tab(&self) -> Option<FooterTab> {
        FooterTab::ALL.into_iter().find(|tab| tab.screen() == self.current)
    }

    /// Handle a footer tab press
    pub fn select_tab(&mut self, tab: FooterTab) -> TabOutcome {
        let screen = tab.screen();
        if self.is_registered(screen) {
            self.show(screen);
            TabOutcome::Shown(screen)
        } else {
            TabOutcome::NotYetAvailable(screen)
        }
    }
}
