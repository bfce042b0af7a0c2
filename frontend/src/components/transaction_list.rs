use finance_tracker_domain::format_signed_currency;
use shared::{Transaction, TransactionKind};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TransactionListProps {
    pub income: Vec<Transaction>,
    pub expenses: Vec<Transaction>,
    pub currency_symbol: String,
    #[prop_or(5)]
    pub limit: usize,
}

/// CSS class of a history row
pub fn amount_class(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Income => "amount positive",
        TransactionKind::Expense => "amount negative",
    }
}

/// Most recent entries of both histories, newest first.
///
/// Histories are in insertion order, so ties on date keep the later entry first.
pub fn recent(income: &[Transaction], expenses: &[Transaction], limit: usize) -> Vec<(TransactionKind, Transaction)> {
    let mut rows: Vec<(TransactionKind, Transaction)> = income
        .iter()
        .map(|tx| (TransactionKind::Income, tx.clone()))
        .chain(expenses.iter().map(|tx| (TransactionKind::Expense, tx.clone())))
        .collect();
    rows.sort_by(|a, b| b.1.date.cmp(&a.1.date).then(b.1.id.cmp(&a.1.id)));
    rows.truncate(limit);
    rows
}

#[function_component(TransactionList)]
pub fn transaction_list(props: &TransactionListProps) -> Html {
    let rows = recent(&props.income, &props.expenses, props.limit);

    html! {
        <section class="transactions-section">
            <h2>{"Recent transactions"}</h2>
            <ul class="transaction-list">
                {for rows.into_iter().map(|(kind, tx)| {
                    let signed = match kind {
                        TransactionKind::Income => tx.amount,
                        TransactionKind::Expense => -tx.amount,
                    };
                    html! {
                        <li class="transaction-row" key={format!("{:?}-{}", kind, tx.id)}>
                            <div class="transaction-info">
                                <span class="description">{&tx.description}</span>
                                <span class="meta">{format!("{} · {}", tx.category, tx.date)}</span>
                            </div>
                            <span class={amount_class(kind)}>{format_signed_currency(signed, &props.currency_symbol)}</span>
                        </li>
                    }
                })}
            </ul>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn tx(id: i64, date: &str) -> Transaction {
        Transaction {
            id,
            amount: 100,
            description: "d".to_string(),
            category: "c".to_string(),
            date: date.to_string(),
        }
    }

    #[wasm_bindgen_test]
    fn test_recent_orders_newest_first() {
        let income = vec![tx(1, "2024-03-10"), tx(2, "2024-03-15")];
        let expenses = vec![tx(1, "2024-03-05"), tx(2, "2024-03-12")];

        let rows = recent(&income, &expenses, 3);

        let dates: Vec<&str> = rows.iter().map(|(_, t)| t.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-03-15", "2024-03-12", "2024-03-10"]);
        assert_eq!(rows[1].0, TransactionKind::Expense);
    }

    #[wasm_bindgen_test]
    fn test_amount_class() {
        assert_eq!(amount_class(TransactionKind::Income), "amount positive");
        assert_eq!(amount_class(TransactionKind::Expense), "amount negative");
    }
}
