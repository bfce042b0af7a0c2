use shared::FooterTab;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FooterNavProps {
    pub active: Option<FooterTab>,
    pub on_select: Callback<FooterTab>,
}

fn icon(tab: FooterTab) -> &'static str {
    match tab {
        FooterTab::Main => "🏠",
        FooterTab::Goals => "🎯",
        FooterTab::Stats => "📊",
        FooterTab::Agent => "🤖",
    }
}

/// CSS class of a footer button
pub fn tab_class(tab: FooterTab, active: Option<FooterTab>) -> &'static str {
    if active == Some(tab) {
        "nav-btn active"
    } else {
        "nav-btn"
    }
}

#[function_component(FooterNav)]
pub fn footer_nav(props: &FooterNavProps) -> Html {
    html! {
        <nav class="bottom-nav">
            {for FooterTab::ALL.into_iter().map(|tab| {
                let on_select = props.on_select.clone();
                html! {
                    <button
                        class={tab_class(tab, props.active)}
                        onclick={Callback::from(move |_: MouseEvent| on_select.emit(tab))}
                    >
                        <span class="nav-icon">{icon(tab)}</span>
                        <span class="nav-label">{tab.label()}</span>
                    </button>
                }
            })}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_only_active_tab_is_highlighted() {
        let active = Some(FooterTab::Main);
        let highlighted: Vec<FooterTab> = FooterTab::ALL
            .into_iter()
            .filter(|tab| tab_class(*tab, active) == "nav-btn active")
            .collect();
        assert_eq!(highlighted, vec![FooterTab::Main]);
    }

    #[wasm_bindgen_test]
    fn test_input_screens_highlight_nothing() {
        assert!(FooterTab::ALL.into_iter().all(|tab| tab_class(tab, None) == "nav-btn"));
    }
}
