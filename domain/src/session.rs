//! # Session
//!
//! The explicitly owned application context of one mini app session.
//!
//! `MiniApp` is built once at startup and every UI event goes through one of
//! its methods. Each method runs to completion synchronously; the caller
//! re-renders from the read accessors afterwards.
//!
//! ## Transaction flow
//!
//! 1. The ledger validates and records the entry
//! 2. The entry is relayed to the bot (fire-and-forget)
//! 3. The navigator returns to `main`
//! 4. A success notification is shown
//!
//! A rejected entry only produces an error notification; the user stays on
//! the input screen with the ledger unchanged.

use crate::bot_relay::relay;
use crate::bridge::{HostBridge, LocalDialogs};
use crate::clock::Clock;
use crate::goals::GoalBoard;
use crate::insights::InsightCarousel;
use crate::ledger::{Ledger, LedgerError};
use crate::navigator::{Navigator, TabOutcome};
use crate::notification::notify;
use log::{debug, info, warn};
use shared::{
    AppClosedData, BotEventKind, BridgeUser, FinanceSummary, FooterTab, Goal, MiniAppConfig,
    NotificationSeverity, PopupButton, PopupParams, Screen, Transaction, TransactionKind,
};
use std::rc::Rc;

const OPEN_BOT_BUTTON: &str = "open";
const CLOSE_PROMPT: &str = "Close the app?";

pub struct MiniApp {
    config: MiniAppConfig,
    clock: Box<dyn Clock>,
    bridge: Option<Rc<dyn HostBridge>>,
    dialogs: Box<dyn LocalDialogs>,
    user: Option<BridgeUser>,
    ledger: Ledger,
    navigator: Navigator,
    goals: GoalBoard,
    insights: InsightCarousel,
    session_start: i64,
    transactions_added: u32,
}

impl MiniApp {
    pub fn new(
        config: MiniAppConfig,
        clock: Box<dyn Clock>,
        bridge: Option<Rc<dyn HostBridge>>,
        dialogs: Box<dyn LocalDialogs>,
    ) -> Self {
        let ledger = Ledger::from_config(&config);
        let goals = GoalBoard::new(config.seed.goals.clone());
        let insights = InsightCarousel::new(config.seed.insights.clone());
        let session_start = clock.now_millis();

        Self {
            config,
            clock,
            bridge,
            dialogs,
            user: None,
            ledger,
            navigator: Navigator::new(),
            goals,
            insights,
            session_start,
            transactions_added: 0,
        }
    }

    /// Pick up the host context: user identity, viewport and launch parameter
    pub fn start(&mut self) {
        match self.bridge.clone() {
            Some(bridge) => {
                self.user = bridge.user();
                bridge.expand();
                bridge.ready();
                if let Some(param) = bridge.start_param() {
                    info!("Launched by bot with start parameter {:?}", param);
                }
                match &self.user {
                    Some(user) => info!("Mini app started for user {}", user.id),
                    None => info!("Mini app started without user identity"),
                }
            }
            None => info!("Mini app started in standalone mode"),
        }
    }

    pub fn submit_income(
        &mut self,
        amount_input: &str,
        description: Option<&str>,
        category: Option<&str>,
    ) -> Result<Transaction, LedgerError> {
        self.submit(TransactionKind::Income, amount_input, description, category)
    }

    pub fn submit_expense(
        &mut self,
        amount_input: &str,
        description: Option<&str>,
        category: Option<&str>,
    ) -> Result<Transaction, LedgerError> {
        self.submit(TransactionKind::Expense, amount_input, description, category)
    }

    /// Record a transaction and run the follow-up steps
    pub fn submit(
        &mut self,
        kind: TransactionKind,
        amount_input: &str,
        description: Option<&str>,
        category: Option<&str>,
    ) -> Result<Transaction, LedgerError> {
        let result = self
            .ledger
            .record(kind, amount_input, description, category, self.clock.as_ref());

        match &result {
            Ok(transaction) => {
                self.transactions_added += 1;
                relay(
                    self.bridge.as_deref(),
                    kind.event(),
                    transaction,
                    self.user_id(),
                    self.clock.now_millis(),
                );
                self.navigator.back();
                let message = match kind {
                    TransactionKind::Income => "Income added!",
                    TransactionKind::Expense => "Expense added!",
                };
                self.notify(message, NotificationSeverity::Success);
            }
            Err(e) => self.notify(&e.to_string(), NotificationSeverity::Error),
        }
        result
    }

    pub fn open_add_income(&mut self) {
        self.navigator.show(Screen::AddIncome);
    }

    pub fn open_add_expense(&mut self) {
        self.navigator.show(Screen::AddExpense);
    }

    /// Transition by screen name; unknown names are ignored
    pub fn transition_to(&mut self, screen_name: &str) {
        self.navigator.transition_to(screen_name);
    }

    pub fn back(&mut self) {
        self.navigator.back();
    }

    /// Footer tab press
    pub fn select_tab(&mut self, tab: FooterTab) {
        if let TabOutcome::NotYetAvailable(screen) = self.navigator.select_tab(tab) {
            let message = match screen {
                Screen::Goals => "Goals screen is coming soon",
                Screen::Stats => "Statistics are coming soon",
                Screen::Agent => "The financial agent is coming soon",
                _ => "This screen is coming soon",
            };
            self.notify(message, NotificationSeverity::Info);
        }
    }

    /// Goal creation has no flow yet
    pub fn request_new_goal(&self) {
        self.notify("Creating goals is coming soon", NotificationSeverity::Info);
    }

    /// Point the user at the bot's chat
    pub fn open_bot_chat(&self) {
        let Some(bridge) = self.bridge.clone() else {
            self.notify("Open the chat with the bot in Telegram", NotificationSeverity::Info);
            return;
        };

        let popup = PopupParams {
            title: "Chat with the bot".to_string(),
            message: format!(
                "To talk to the finance bot open the chat @{}",
                self.config.bot_username
            ),
            buttons: vec![
                PopupButton::action(OPEN_BOT_BUTTON, "Open bot"),
                PopupButton::cancel("Close"),
            ],
        };
        let link = self.config.bot_link();
        let opener = bridge.clone();
        bridge.show_popup(
            &popup,
            Some(Box::new(move |button_id| {
                if button_id.as_deref() == Some(OPEN_BOT_BUTTON) {
                    opener.open_link(&link);
                }
            })),
        );
    }

    /// Tell the bot the session ends, then ask the host to close the app.
    ///
    /// The user confirms first; declining leaves the session running.
    pub fn close(&self) {
        let Some(bridge) = self.bridge.as_deref() else {
            warn!("Close requested in standalone mode");
            self.dialogs.alert("The app will be closed inside Telegram");
            return;
        };
        if !self.dialogs.confirm(CLOSE_PROMPT) {
            debug!("Close cancelled by the user");
            return;
        }

        let now = self.clock.now_millis();
        let data = AppClosedData {
            screen: self.navigator.current(),
            transactions_added: self.transactions_added,
            session_time: now - self.session_start,
        };
        relay(Some(bridge), BotEventKind::AppClosed, &data, self.user_id(), now);
        bridge.close();
    }

    pub fn advance_insight(&mut self) {
        self.insights.advance();
    }

    pub fn select_insight(&mut self, index: usize) {
        self.insights.select(index);
    }

    fn notify(&self, message: &str, severity: NotificationSeverity) {
        notify(self.bridge.as_deref(), self.dialogs.as_ref(), message, severity);
    }

    fn user_id(&self) -> Option<i64> {
        self.user.as_ref().map(|user| user.id)
    }

    // Read accessors for rendering

    pub fn config(&self) -> &MiniAppConfig {
        &self.config
    }

    pub fn is_standalone(&self) -> bool {
        self.bridge.is_none()
    }

    pub fn user(&self) -> Option<&BridgeUser> {
        self.user.as_ref()
    }

    pub fn summary(&self) -> FinanceSummary {
        self.ledger.snapshot()
    }

    pub fn income_history(&self) -> &[Transaction] {
        self.ledger.income_history()
    }

    pub fn expense_history(&self) -> &[Transaction] {
        self.ledger.expense_history()
    }

    pub fn goals(&self) -> &[Goal] {
        self.goals.goals()
    }

    pub fn total_saved(&self) -> i64 {
        self.goals.total_saved()
    }

    pub fn current_screen(&self) -> Screen {
        self.navigator.current()
    }

    pub fn active_tab(&self) -> Option<FooterTab> {
        self.navigator.active_tab()
    }

    pub fn current_insight(&self) -> Option<&str> {
        self.insights.current()
    }

    pub fn insights(&self) -> &InsightCarousel {
        &self.insights
    }
}
