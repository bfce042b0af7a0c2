mod components;
mod hooks;
mod services;

use std::cell::RefCell;
use std::rc::Rc;

use components::forms::TransactionInput;
use components::{BalanceSummary, FooterNav, GoalList, Header, InsightsCarousel, TransactionForm, TransactionList};
use finance_tracker_domain::{HostBridge, MiniApp, SystemClock};
use hooks::use_insight_rotation;
use services::{dialogs::BrowserDialogs, logging::Logger, telegram::TelegramBridge};
use shared::{FooterTab, MiniAppConfig, Screen, TransactionKind};
use yew::prelude::*;

fn build_session(config: MiniAppConfig) -> MiniApp {
    let bridge = TelegramBridge::detect().map(|bridge| Rc::new(bridge) as Rc<dyn HostBridge>);
    MiniApp::new(config, Box::new(SystemClock), bridge, Box::new(BrowserDialogs))
}

fn optional(value: &str) -> Option<&str> {
    (!value.trim().is_empty()).then_some(value)
}

/// Wrap a session mutation so the view re-renders after it
fn session_action<T: 'static>(
    session: &Rc<RefCell<MiniApp>>,
    update: &UseForceUpdateHandle,
    action: impl Fn(&mut MiniApp, T) + 'static,
) -> Callback<T> {
    let session = session.clone();
    let update = update.clone();
    Callback::from(move |arg: T| {
        action(&mut session.borrow_mut(), arg);
        update.force_update();
    })
}

#[function_component(App)]
fn app() -> Html {
    let session = use_mut_ref(|| build_session(MiniAppConfig::default()));
    let update = use_force_update();

    {
        let session = session.clone();
        let update = update.clone();
        use_effect_with((), move |_| {
            session.borrow_mut().start();
            update.force_update();
            || ()
        });
    }

    let rotation_ms = session.borrow().config().insight_rotation_ms;
    use_insight_rotation(rotation_ms, session_action(&session, &update, |app, ()| app.advance_insight()));

    let on_select_insight = session_action(&session, &update, |app, index: usize| app.select_insight(index));
    let on_add_income = session_action(&session, &update, |app, ()| app.open_add_income());
    let on_add_expense = session_action(&session, &update, |app, ()| app.open_add_expense());
    let on_back = session_action(&session, &update, |app, ()| app.back());
    let on_tab = session_action(&session, &update, |app, tab: FooterTab| app.select_tab(tab));
    let on_new_goal = session_action(&session, &update, |app, ()| app.request_new_goal());
    let on_chat = session_action(&session, &update, |app, ()| app.open_bot_chat());
    let on_close = session_action(&session, &update, |app, ()| app.close());
    let on_submit_income = session_action(&session, &update, |app, input: TransactionInput| {
        let _ = app.submit_income(&input.amount, optional(&input.description), optional(&input.category));
    });
    let on_submit_expense = session_action(&session, &update, |app, input: TransactionInput| {
        let _ = app.submit_expense(&input.amount, optional(&input.description), optional(&input.category));
    });

    let app = session.borrow();
    let symbol = app.config().currency_symbol.clone();

    let screen = match app.current_screen() {
        Screen::AddIncome => html! {
            <TransactionForm
                kind={TransactionKind::Income}
                currency_symbol={symbol.clone()}
                on_submit={on_submit_income}
                on_back={on_back}
            />
        },
        Screen::AddExpense => html! {
            <TransactionForm
                kind={TransactionKind::Expense}
                currency_symbol={symbol.clone()}
                on_submit={on_submit_expense}
                on_back={on_back}
            />
        },
        _ => html! {
            <main class="screen main-screen active">
                <BalanceSummary
                    summary={app.summary()}
                    currency_symbol={symbol.clone()}
                    {on_add_income}
                    {on_add_expense}
                />
                <InsightsCarousel
                    current={app.current_insight().map(str::to_string)}
                    index={app.insights().index()}
                    count={app.insights().len()}
                    on_select={on_select_insight}
                />
                <GoalList
                    goals={app.goals().to_vec()}
                    total_saved={app.total_saved()}
                    currency_symbol={symbol.clone()}
                    {on_new_goal}
                />
                <TransactionList
                    income={app.income_history().to_vec()}
                    expenses={app.expense_history().to_vec()}
                    currency_symbol={symbol.clone()}
                />
            </main>
        },
    };

    html! {
        <div class="app">
            <Header
                user_name={app.user().map(|user| user.display_name())}
                standalone={app.is_standalone()}
                {on_chat}
                {on_close}
            />
            {screen}
            <FooterNav active={app.active_tab()} on_select={on_tab} />
        </div>
    }
}

fn main() {
    let config = MiniAppConfig::default();
    Logger::init(config.enable_debug_logging);
    log::info!("Starting finance tracker mini app");
    yew::Renderer::<App>::new().render();
}
