use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::PaymentCard;
use crate::models::{PaymentDraft, PaymentRecord};

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub payments: Vec<PaymentRecord>,
    /// A mutation is already in flight; the add form ignores submits.
    pub busy: bool,
    pub on_add: Callback<PaymentDraft>,
    pub on_edit: Callback<PaymentRecord>,
    pub on_request_delete: Callback<String>,
    pub on_logout: Callback<()>,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let card_number_ref = use_node_ref();
    let card_holder_ref = use_node_ref();
    let expiry_ref = use_node_ref();
    let cvv_ref = use_node_ref();

    let on_add_submit = {
        let card_number_ref = card_number_ref.clone();
        let card_holder_ref = card_holder_ref.clone();
        let expiry_ref = expiry_ref.clone();
        let cvv_ref = cvv_ref.clone();
        let on_add = props.on_add.clone();
        let busy = props.busy;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if busy {
                return;
            }

            let inputs = [
                card_number_ref.cast::<HtmlInputElement>(),
                card_holder_ref.cast::<HtmlInputElement>(),
                expiry_ref.cast::<HtmlInputElement>(),
                cvv_ref.cast::<HtmlInputElement>(),
            ];
            let [Some(number), Some(holder), Some(expiry), Some(cvv)] = inputs else {
                return;
            };

            on_add.emit(PaymentDraft {
                card_number: number.value(),
                card_holder_name: holder.value(),
                expiry_date: expiry.value(),
                cvv: cvv.value(),
            });

            // Discard the draft once submitted.
            number.set_value("");
            holder.set_value("");
            expiry.set_value("");
            cvv.set_value("");
        })
    };

    html! {
        <div class="dashboard-container">
            <header class="dashboard-header">
                <h2 class="title">{ "Payments Dashboard" }</h2>
                <button
                    class="btn btn-secondary"
                    onclick={props.on_logout.reform(|_: MouseEvent| ())}
                >
                    { "Logout" }
                </button>
            </header>

            <div class="form-section">
                <h3 class="section-title">{ "Add New Payment" }</h3>
                <form onsubmit={on_add_submit} class="grid-cols-2">
                    <div>
                        <label class="form-label">{ "Card Number" }</label>
                        <input type="text" class="form-input" ref={card_number_ref} required=true />
                    </div>
                    <div>
                        <label class="form-label">{ "Card Holder Name" }</label>
                        <input type="text" class="form-input" ref={card_holder_ref} required=true />
                    </div>
                    <div>
                        <label class="form-label">{ "Expiry Date (MM/YY)" }</label>
                        <input type="text" class="form-input" ref={expiry_ref} required=true />
                    </div>
                    <div>
                        <label class="form-label">{ "CVV" }</label>
                        <input type="text" class="form-input" ref={cvv_ref} required=true />
                    </div>
                    <div class="col-span-2">
                        <button type="submit" class="btn btn-primary" disabled={props.busy}>
                            { "Add Payment" }
                        </button>
                    </div>
                </form>
            </div>

            <div class="payments-list-section">
                <h3 class="section-title">{ "Your Payments" }</h3>
                <div class="payments-list">
                    {
                        if props.payments.is_empty() {
                            html! { <p class="no-payments-message">{ "No payments found." }</p> }
                        } else {
                            props.payments
                                .iter()
                                .map(|record| {
                                    html! {
                                        <PaymentCard
                                            key={record.id.clone()}
                                            record={record.clone()}
                                            on_edit={props.on_edit.clone()}
                                            on_delete={props.on_request_delete.clone()}
                                        />
                                    }
                                })
                                .collect::<Html>()
                        }
                    }
                </div>
            </div>
        </div>
    }
}
