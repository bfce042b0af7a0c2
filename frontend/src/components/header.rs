use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    /// Display name reported by the host, if any
    pub user_name: Option<String>,
    pub standalone: bool,
    pub on_chat: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let greeting = match &props.user_name {
        Some(name) => format!("Hi, {}!", name),
        None => "Hi!".to_string(),
    };

    let onclick_chat = {
        let on_chat = props.on_chat.clone();
        Callback::from(move |_: MouseEvent| on_chat.emit(()))
    };
    let onclick_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <header class="header">
            <div class="header-left">
                <h1>{greeting}</h1>
                {if props.standalone {
                    html! { <span class="mode-badge">{"standalone"}</span> }
                } else { html! {} }}
            </div>
            <div class="header-right">
                <button class="icon-btn chat-btn" title="Chat with the bot" onclick={onclick_chat}>{"💬"}</button>
                <button class="icon-btn close-btn" title="Close" onclick={onclick_close}>{"✕"}</button>
            </div>
        </header>
    }
}
