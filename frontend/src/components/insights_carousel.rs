use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InsightsCarouselProps {
    pub current: Option<String>,
    pub index: usize,
    pub count: usize,
    pub on_select: Callback<usize>,
}

#[function_component(InsightsCarousel)]
pub fn insights_carousel(props: &InsightsCarouselProps) -> Html {
    let Some(current) = props.current.clone() else {
        return html! {};
    };

    html! {
        <section class="insights-section">
            <div class="insight-card">{current}</div>
            <div class="insight-dots">
                {for (0..props.count).map(|i| {
                    let on_select = props.on_select.clone();
                    let class = if i == props.index { "dot active" } else { "dot" };
                    html! {
                        <span {class} onclick={Callback::from(move |_: MouseEvent| on_select.emit(i))}></span>
                    }
                })}
            </div>
        </section>
    }
}
