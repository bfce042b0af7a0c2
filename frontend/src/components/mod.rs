pub mod balance_summary;
pub mod footer_nav;
pub mod forms;
pub mod goal_card;
pub mod header;
pub mod insights_carousel;
pub mod transaction_list;

pub use balance_summary::BalanceSummary;
pub use footer_nav::FooterNav;
pub use forms::TransactionForm;
pub use goal_card::GoalList;
pub use header::Header;
pub use insights_carousel::InsightsCarousel;
pub use transaction_list::TransactionList;
