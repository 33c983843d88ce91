use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::{PaymentDraft, PaymentRecord};

#[derive(Properties, PartialEq)]
pub struct UpdateModalProps {
    /// Record staged for editing; the form is prefilled from it.
    pub record: PaymentRecord,
    pub busy: bool,
    /// (record id, full replacement fields)
    pub on_save: Callback<(String, PaymentDraft)>,
    pub on_cancel: Callback<()>,
}

#[function_component(UpdateModal)]
pub fn update_modal(props: &UpdateModalProps) -> Html {
    let draft = use_state(|| PaymentDraft::from(&props.record));

    // Re-seed the draft when a different record is staged.
    {
        let draft = draft.clone();
        use_effect_with(props.record.clone(), move |record| {
            draft.set(PaymentDraft::from(record));
            || ()
        });
    }

    let edit_field = |apply: fn(&mut PaymentDraft, String)| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            apply(&mut next, input.value());
            draft.set(next);
        })
    };

    let on_number = edit_field(|d, v| d.card_number = v);
    let on_holder = edit_field(|d, v| d.card_holder_name = v);
    let on_expiry = edit_field(|d, v| d.expiry_date = v);
    let on_cvv = edit_field(|d, v| d.cvv = v);

    let on_submit = {
        let draft = draft.clone();
        let on_save = props.on_save.clone();
        let id = props.record.id.clone();
        let busy = props.busy;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if busy {
                return;
            }
            on_save.emit((id.clone(), (*draft).clone()));
        })
    };

    let on_close = props.on_cancel.reform(|_: MouseEvent| ());

    html! {
        <div class="modal-overlay" onclick={on_close.clone()}>
            <div class="modal-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <h3 class="modal-title">{ "Update Payment" }</h3>
                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <label class="form-label">{ "Card Number" }</label>
                        <input
                            type="text"
                            class="form-input"
                            value={draft.card_number.clone()}
                            oninput={on_number}
                            required=true
                        />
                    </div>
                    <div class="form-group">
                        <label class="form-label">{ "Card Holder Name" }</label>
                        <input
                            type="text"
                            class="form-input"
                            value={draft.card_holder_name.clone()}
                            oninput={on_holder}
                            required=true
                        />
                    </div>
                    <div class="form-group">
                        <label class="form-label">{ "Expiry Date (MM/YY)" }</label>
                        <input
                            type="text"
                            class="form-input"
                            value={draft.expiry_date.clone()}
                            oninput={on_expiry}
                            required=true
                        />
                    </div>
                    <div class="form-group">
                        <label class="form-label">{ "CVV" }</label>
                        <input
                            type="text"
                            class="form-input"
                            value={draft.cvv.clone()}
                            oninput={on_cvv}
                            required=true
                        />
                    </div>
                    <div class="form-actions">
                        <button type="submit" class="btn btn-primary" disabled={props.busy}>
                            { "Update" }
                        </button>
                        <button type="button" class="btn btn-secondary" onclick={on_close}>
                            { "Cancel" }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
