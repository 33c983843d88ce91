use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DeleteModalProps {
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Delete-confirmation dialog for a single payment record.
#[function_component(DeleteModal)]
pub fn delete_modal(props: &DeleteModalProps) -> Html {
    let on_cancel = props.on_cancel.reform(|_: MouseEvent| ());
    let on_confirm = props.on_confirm.reform(|_: MouseEvent| ());

    html! {
        <div class="modal-overlay" onclick={on_cancel.clone()}>
            <div class="modal-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <h3 class="modal-title">{ "Confirm Deletion" }</h3>
                <p class="modal-text">
                    { "Are you sure you want to delete this payment record? This action cannot be undone." }
                </p>
                <div class="modal-actions">
                    <button class="btn btn-secondary" onclick={on_cancel}>{ "Cancel" }</button>
                    <button class="btn btn-delete" onclick={on_confirm}>{ "Delete" }</button>
                </div>
            </div>
        </div>
    }
}
