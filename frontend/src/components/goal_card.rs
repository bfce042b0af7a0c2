use finance_tracker_domain::{format_currency, progress_percent, remaining};
use shared::Goal;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GoalCardProps {
    pub goal: Goal,
    pub currency_symbol: String,
}

#[function_component(GoalCard)]
pub fn goal_card(props: &GoalCardProps) -> Html {
    let goal = &props.goal;
    let symbol = props.currency_symbol.as_str();
    let percent = progress_percent(goal);

    html! {
        <div class="goal-card">
            <div class="goal-header">
                <span class="goal-title">{&goal.title}</span>
                <span class="goal-percent">{format!("{}%", percent)}</span>
            </div>
            <div class="progress-bar">
                <div class="progress-fill" style={format!("width: {}%", percent)}></div>
            </div>
            <div class="goal-footer">
                <span>{format!("{} of {}", format_currency(goal.saved, symbol), format_currency(goal.target, symbol))}</span>
                <span class="goal-remaining">{format!("{} left", format_currency(remaining(goal), symbol))}</span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct GoalListProps {
    pub goals: Vec<Goal>,
    pub total_saved: i64,
    pub currency_symbol: String,
    pub on_new_goal: Callback<()>,
}

#[function_component(GoalList)]
pub fn goal_list(props: &GoalListProps) -> Html {
    let onclick_new = {
        let on_new_goal = props.on_new_goal.clone();
        Callback::from(move |_: MouseEvent| on_new_goal.emit(()))
    };

    html! {
        <section class="goals-section">
            <div class="section-header">
                <h2>{"Goals"}</h2>
                <span class="goals-total">{format!("Saved {}", format_currency(props.total_saved, &props.currency_symbol))}</span>
                <button class="btn btn-link" onclick={onclick_new}>{"+ New goal"}</button>
            </div>
            {for props.goals.iter().map(|goal| html! {
                <GoalCard key={goal.id.to_string()} goal={goal.clone()} currency_symbol={props.currency_symbol.clone()} />
            })}
        </section>
    }
}
