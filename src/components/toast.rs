use yew::prelude::*;

use crate::state::Notice;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub notice: Option<Notice>,
}

/// Always-mounted notification overlay; renders nothing while no notice is
/// active.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    match &props.notice {
        Some(notice) => html! {
            <div class={format!("message-toast {} show-toast", notice.severity.css_class())}>
                { &notice.text }
            </div>
        },
        None => html! {},
    }
}
