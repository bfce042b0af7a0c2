use finance_tracker_domain::format_currency;
use shared::FinanceSummary;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BalanceSummaryProps {
    pub summary: FinanceSummary,
    pub currency_symbol: String,
    pub on_add_income: Callback<()>,
    pub on_add_expense: Callback<()>,
}

/// Free balance with the income and expense totals underneath
#[function_component(BalanceSummary)]
pub fn balance_summary(props: &BalanceSummaryProps) -> Html {
    let symbol = props.currency_symbol.as_str();
    let onclick_income = {
        let on_add_income = props.on_add_income.clone();
        Callback::from(move |_: MouseEvent| on_add_income.emit(()))
    };
    let onclick_expense = {
        let on_add_expense = props.on_add_expense.clone();
        Callback::from(move |_: MouseEvent| on_add_expense.emit(()))
    };

    html! {
        <section class="balance-section">
            <div class="free-money">
                <span class="label">{"Free money"}</span>
                <span class="amount">{format_currency(props.summary.free_balance, symbol)}</span>
            </div>
            <div class="totals">
                <div class="total income">
                    <span class="label">{"Income"}</span>
                    <span class="amount">{format_currency(props.summary.total_income, symbol)}</span>
                    <button class="btn btn-small" onclick={onclick_income}>{"+ Income"}</button>
                </div>
                <div class="total expenses">
                    <span class="label">{"Expenses"}</span>
                    <span class="amount">{format_currency(props.summary.total_expenses, symbol)}</span>
                    <button class="btn btn-small" onclick={onclick_expense}>{"+ Expense"}</button>
                </div>
            </div>
        </section>
    }
}
