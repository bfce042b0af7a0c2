use serde::{Deserialize, Serialize};
use std::fmt;

/// A recorded income or expense entry.
///
/// Serialized with the exact field set the companion bot expects inside the
/// `data` object of `income_added` / `expense_added` events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Creation time in epoch milliseconds
    pub id: i64,
    /// Whole currency units, always positive
    pub amount: i64,
    pub description: String,
    pub category: String,
    /// Calendar date in ISO form (YYYY-MM-DD)
    pub date: String,
}

/// Which history a transaction belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Bot event emitted when a transaction of this kind is accepted
    pub fn event(&self) -> BotEventKind {
        match self {
            TransactionKind::Income => BotEventKind::IncomeAdded,
            TransactionKind::Expense => BotEventKind::ExpenseAdded,
        }
    }
}

/// A savings goal shown on the main screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: i64,
    pub title: String,
    pub target: i64,
    pub saved: i64,
}

/// Aggregate view of the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceSummary {
    pub total_income: i64,
    pub total_expenses: i64,
    pub free_balance: i64,
}

/// Screens the mini app knows about.
///
/// `Goals`, `Stats` and `Agent` are declared so footer tabs can refer to
/// them, but they have no view yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    Main,
    AddIncome,
    AddExpense,
    Goals,
    Stats,
    Agent,
}

impl Screen {
    pub const ALL: [Screen; 6] = [
        Screen::Main,
        Screen::AddIncome,
        Screen::AddExpense,
        Screen::Goals,
        Screen::Stats,
        Screen::Agent,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Screen::Main => "main",
            Screen::AddIncome => "add-income",
            Screen::AddExpense => "add-expense",
            Screen::Goals => "goals",
            Screen::Stats => "stats",
            Screen::Agent => "agent",
        }
    }

    pub fn from_name(name: &str) -> Option<Screen> {
        Screen::ALL.into_iter().find(|screen| screen.name() == name)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Footer navigation buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FooterTab {
    Main,
    Goals,
    Stats,
    Agent,
}

impl FooterTab {
    pub const ALL: [FooterTab; 4] = [FooterTab::Main, FooterTab::Goals, FooterTab::Stats, FooterTab::Agent];

    /// Screen the tab points at
    pub fn screen(&self) -> Screen {
        match self {
            FooterTab::Main => Screen::Main,
            FooterTab::Goals => Screen::Goals,
            FooterTab::Stats => Screen::Stats,
            FooterTab::Agent => Screen::Agent,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FooterTab::Main => "Home",
            FooterTab::Goals => "Goals",
            FooterTab::Stats => "Stats",
            FooterTab::Agent => "Agent",
        }
    }
}

/// Severity of a user-facing notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationSeverity {
    Info,
    Success,
    Error,
}

impl NotificationSeverity {
    /// Popup title used when the host platform presents the notification
    pub fn title(&self) -> &'static str {
        match self {
            NotificationSeverity::Info => "Information",
            NotificationSeverity::Success => "Success",
            NotificationSeverity::Error => "Error",
        }
    }
}

/// Button inside a host popup.
///
/// Mirrors the host's popup button object: `type` is one of
/// `default`, `ok`, `close`, `cancel`, `destructive`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopupButton {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub button_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl PopupButton {
    pub fn ok() -> Self {
        Self {
            id: None,
            button_type: "ok".to_string(),
            text: None,
        }
    }

    pub fn action(id: &str, text: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            button_type: "default".to_string(),
            text: Some(text.to_string()),
        }
    }

    pub fn cancel(text: &str) -> Self {
        Self {
            id: None,
            button_type: "cancel".to_string(),
            text: Some(text.to_string()),
        }
    }
}

/// Parameters for the host's modal popup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopupParams {
    pub title: String,
    pub message: String,
    pub buttons: Vec<PopupButton>,
}

/// Identity of the user as reported by the host platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeUser {
    pub id: i64,
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

impl BridgeUser {
    pub fn display_name(&self) -> String {
        match &self.last_name {
            Some(last) if !last.is_empty() => format!("{} {}", self.first_name, last),
            _ => self.first_name.clone(),
        }
    }
}

/// Events relayed to the companion bot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BotEventKind {
    IncomeAdded,
    ExpenseAdded,
    AppClosed,
}

impl BotEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BotEventKind::IncomeAdded => "income_added",
            BotEventKind::ExpenseAdded => "expense_added",
            BotEventKind::AppClosed => "app_closed",
        }
    }
}

/// Outbound message delivered to the bot through the host bridge.
///
/// Wire shape: `{ "event", "data", "userId"?, "timestamp" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotMessage {
    pub event: BotEventKind,
    pub data: serde_json::Value,
    #[serde(rename = "userId", skip_serializing_if = "Option::is_none", default)]
    pub user_id: Option<i64>,
    /// Epoch milliseconds
    pub timestamp: i64,
}

/// Payload of the `app_closed` event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppClosedData {
    pub screen: Screen,
    pub transactions_added: u32,
    /// Milliseconds since the session started
    pub session_time: i64,
}

/// Opening state the session is populated with at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    pub total_income: i64,
    pub total_expenses: i64,
    pub goals: Vec<Goal>,
    pub income_history: Vec<Transaction>,
    pub expense_history: Vec<Transaction>,
    pub insights: Vec<String>,
}

impl Default for SeedData {
    fn default() -> Self {
        Self {
            total_income: 125_000,
            total_expenses: 87_000,
            goals: vec![
                Goal { id: 1, title: "New laptop".to_string(), target: 88_000, saved: 34_000 },
                Goal { id: 2, title: "Trip to Georgia".to_string(), target: 150_000, saved: 45_000 },
            ],
            income_history: vec![
                seed_transaction(1, 50_000, "Salary", "Work", "2024-03-10"),
                seed_transaction(2, 25_000, "Freelance", "Project", "2024-03-15"),
            ],
            expense_history: vec![
                seed_transaction(1, 15_000, "Groceries", "Food", "2024-03-05"),
                seed_transaction(2, 7_000, "Coffee", "Entertainment", "2024-03-12"),
            ],
            insights: vec![
                "Coffee took 8% of your spending this month".to_string(),
                "Saving 5 000 ₽ a week gets you the laptop in 11 weeks".to_string(),
                "Income is up 12% compared to last month".to_string(),
            ],
        }
    }
}

fn seed_transaction(id: i64, amount: i64, description: &str, category: &str, date: &str) -> Transaction {
    Transaction {
        id,
        amount,
        description: description.to_string(),
        category: category.to_string(),
        date: date.to_string(),
    }
}

/// Compiled-in configuration for the mini app
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiniAppConfig {
    pub currency_symbol: String,
    /// Used when a transaction is submitted without a description
    pub default_description: String,
    /// Used when a transaction is submitted without a category
    pub default_category: String,
    pub insight_rotation_ms: u32,
    pub bot_username: String,
    pub enable_debug_logging: bool,
    pub seed: SeedData,
}

impl MiniAppConfig {
    pub fn bot_link(&self) -> String {
        format!("https://t.me/{}", self.bot_username)
    }
}

impl Default for MiniAppConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "₽".to_string(),
            default_description: "No description".to_string(),
            default_category: "Other".to_string(),
            insight_rotation_ms: 5000,
            bot_username: "your_finance_bot".to_string(),
            enable_debug_logging: false,
            seed: SeedData::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_screen_names_round_trip() {
        for screen in Screen::ALL {
            assert_eq!(Screen::from_name(screen.name()), Some(screen));
        }
        assert_eq!(Screen::from_name("settings"), None);
        assert_eq!(Screen::from_name("Main"), None);
    }

    #[test]
    fn test_screen_serializes_as_kebab_case() {
        assert_eq!(serde_json::to_value(Screen::AddIncome).unwrap(), json!("add-income"));
    }

    #[test]
    fn test_bot_message_wire_shape() {
        let message = BotMessage {
            event: BotEventKind::IncomeAdded,
            data: json!({"id": 1, "amount": 500}),
            user_id: Some(42),
            timestamp: 1_710_000_000_000,
        };

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(
            value,
            json!({
                "event": "income_added",
                "data": {"id": 1, "amount": 500},
                "userId": 42,
                "timestamp": 1_710_000_000_000i64,
            })
        );
    }

    #[test]
    fn test_bot_message_omits_missing_user() {
        let message = BotMessage {
            event: BotEventKind::AppClosed,
            data: json!({}),
            user_id: None,
            timestamp: 0,
        };

        let value = serde_json::to_value(&message).unwrap();
        assert!(value.get("userId").is_none());
    }

    #[test]
    fn test_transaction_wire_fields() {
        let tx = seed_transaction(7, 1500, "Lunch", "Food", "2024-03-01");
        assert_eq!(
            serde_json::to_value(&tx).unwrap(),
            json!({"id": 7, "amount": 1500, "description": "Lunch", "category": "Food", "date": "2024-03-01"})
        );
    }

    #[test]
    fn test_app_closed_data_is_camel_case() {
        let data = AppClosedData {
            screen: Screen::Main,
            transactions_added: 2,
            session_time: 1000,
        };
        assert_eq!(
            serde_json::to_value(&data).unwrap(),
            json!({"screen": "main", "transactionsAdded": 2, "sessionTime": 1000})
        );
    }

    #[test]
    fn test_popup_button_encoding() {
        assert_eq!(serde_json::to_value(PopupButton::ok()).unwrap(), json!({"type": "ok"}));
        assert_eq!(
            serde_json::to_value(PopupButton::action("open", "Open bot")).unwrap(),
            json!({"id": "open", "type": "default", "text": "Open bot"})
        );
    }

    #[test]
    fn test_default_config() {
        let config = MiniAppConfig::default();
        assert_eq!(config.currency_symbol, "₽");
        assert_eq!(config.insight_rotation_ms, 5000);
        assert_eq!(config.bot_link(), "https://t.me/your_finance_bot");
        assert_eq!(config.seed.total_income - config.seed.total_expenses, 38_000);
    }

    #[test]
    fn test_user_display_name() {
        let mut user = BridgeUser {
            id: 1,
            first_name: "Anna".to_string(),
            last_name: None,
            username: None,
        };
        assert_eq!(user.display_name(), "Anna");
        user.last_name = Some("Petrova".to_string());
        assert_eq!(user.display_name(), "Anna Petrova");
    }
}
