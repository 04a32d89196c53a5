use yew::prelude::*;

use crate::hooks::use_theme;
use crate::services::style;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub is_open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

/// Backdrop plus dialog box. Clicking the backdrop closes it.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let theme = use_theme();

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    if !props.is_open {
        return html! {};
    }

    html! {
        <div class="modal-backdrop" style={style::modal_backdrop_style()} onclick={on_backdrop_click}>
            <div class="modal" role="dialog" style={style::modal_style(&theme)} onclick={on_modal_click}>
                <h3 class="modal-title">{style::heading(&theme, &props.title)}</h3>
                {props.children.clone()}
            </div>
        </div>
    }
}
