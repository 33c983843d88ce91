use yew::prelude::*;

use crate::models::PaymentRecord;
use crate::utils::format::mask_card_number;

#[derive(Properties, PartialEq)]
pub struct PaymentCardProps {
    pub record: PaymentRecord,
    pub on_edit: Callback<PaymentRecord>,
    pub on_delete: Callback<String>,
}

/// One stored card in the dashboard list. The number is always rendered
/// masked; the full value never leaves the record itself.
#[function_component(PaymentCard)]
pub fn payment_card(props: &PaymentCardProps) -> Html {
    let record = &props.record;

    let on_edit = {
        let on_edit = props.on_edit.clone();
        let record = record.clone();
        Callback::from(move |_: MouseEvent| on_edit.emit(record.clone()))
    };

    let on_delete = {
        let on_delete = props.on_delete.clone();
        let id = record.id.clone();
        Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
    };

    html! {
        <div class="payment-item">
            <div class="payment-info">
                <p class="payment-card-holder">{ &record.card_holder_name }</p>
                <p>{ format!("Card: {}", mask_card_number(&record.card_number)) }</p>
                <p>{ format!("Expires: {}", record.expiry_date) }</p>
            </div>
            <div class="payment-actions">
                <button class="btn btn-edit" onclick={on_edit}>{ "Edit" }</button>
                <button class="btn btn-delete" onclick={on_delete}>{ "Delete" }</button>
            </div>
        </div>
    }
}
