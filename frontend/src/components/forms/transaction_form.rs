use shared::TransactionKind;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Raw values typed into the form
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionInput {
    pub amount: String,
    pub description: String,
    pub category: String,
}

#[derive(Properties, PartialEq)]
pub struct TransactionFormProps {
    pub kind: TransactionKind,
    pub currency_symbol: String,
    pub on_submit: Callback<TransactionInput>,
    pub on_back: Callback<()>,
}

fn texts(kind: TransactionKind) -> (&'static str, &'static str, &'static str) {
    match kind {
        TransactionKind::Income => ("Add income", "Salary, freelance, gift...", "Work"),
        TransactionKind::Expense => ("Add expense", "Groceries, coffee, taxi...", "Food"),
    }
}

/// Input screen for a new income or expense.
///
/// Inputs are uncontrolled so a rejected submission keeps what the user typed.
#[function_component(TransactionForm)]
pub fn transaction_form(props: &TransactionFormProps) -> Html {
    let amount_ref = use_node_ref();
    let description_ref = use_node_ref();
    let category_ref = use_node_ref();
    let (title, description_placeholder, category_placeholder) = texts(props.kind);
    let screen_class = match props.kind {
        TransactionKind::Income => "screen add-income-screen active",
        TransactionKind::Expense => "screen add-expense-screen active",
    };

    let onsubmit = {
        let amount_ref = amount_ref.clone();
        let description_ref = description_ref.clone();
        let category_ref = category_ref.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let value_of = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default()
            };
            on_submit.emit(TransactionInput {
                amount: value_of(&amount_ref),
                description: value_of(&description_ref),
                category: value_of(&category_ref),
            });
        })
    };

    let onclick_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    html! {
        <section class={screen_class}>
            <div class="screen-header">
                <button type="button" class="back-btn" onclick={onclick_back}>{"←"}</button>
                <h2>{title}</h2>
            </div>
            <form class="transaction-form" novalidate={true} {onsubmit}>
                <div class="form-group">
                    <label for="amount-input">{format!("Amount, {}", props.currency_symbol)}</label>
                    <input
                        ref={amount_ref}
                        type="number"
                        id="amount-input"
                        inputmode="numeric"
                        placeholder="0"
                    />
                </div>
                <div class="form-group">
                    <label for="description-input">{"Description"}</label>
                    <input
                        ref={description_ref}
                        type="text"
                        id="description-input"
                        placeholder={description_placeholder}
                    />
                </div>
                <div class="form-group">
                    <label for="category-input">{"Category"}</label>
                    <input
                        ref={category_ref}
                        type="text"
                        id="category-input"
                        placeholder={category_placeholder}
                    />
                </div>
                <button type="submit" class="btn btn-primary">{title}</button>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;
    use wasm_bindgen::JsCast;
    use web_sys::HtmlFormElement;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_out_of_range_amount_still_submits() {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();

        let received = Rc::new(RefCell::new(Vec::new()));
        let props = TransactionFormProps {
            kind: TransactionKind::Income,
            currency_symbol: "₽".to_string(),
            on_submit: {
                let received = received.clone();
                Callback::from(move |input: TransactionInput| received.borrow_mut().push(input))
            },
            on_back: Callback::noop(),
        };
        yew::Renderer::<TransactionForm>::with_root_and_props(root.clone(), props).render();
        yew::platform::time::sleep(Duration::from_millis(10)).await;

        let amount: HtmlInputElement = root.query_selector("#amount-input").unwrap().unwrap().unchecked_into();
        let form: HtmlFormElement = root.query_selector("form").unwrap().unwrap().unchecked_into();
        for value in ["-5", "0", "12.7"] {
            amount.set_value(value);
            form.request_submit().unwrap();
        }
        yew::platform::time::sleep(Duration::from_millis(10)).await;

        let amounts: Vec<String> = received.borrow().iter().map(|input| input.amount.clone()).collect();
        assert_eq!(amounts, vec!["-5", "0", "12.7"]);
    }
}
