// ============================================================================
// BOOK PARCEL - Formulario de reserva con precio por tamaño
// ============================================================================

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use crate::hooks::{use_location, use_parcels, use_toasts};
use crate::models::{BookingForm, ParcelSize, PaymentType};
use crate::routing::Route;
use crate::services::report_service::format_amount;
use crate::utils::CURRENCY;
use crate::views::shared::{bind_input, bind_textarea, select_value, ErrorBanner};

#[function_component(BookParcelView)]
pub fn book_parcel_view() -> Html {
    let parcels = use_parcels();
    let toasts = use_toasts();
    let location = use_location();

    let pickup = use_state(String::new);
    let delivery = use_state(String::new);
    let parcel_type = use_state(String::new);
    let notes = use_state(String::new);
    let cod = use_state(String::new);
    let size = use_state(ParcelSize::default);
    let payment = use_state(PaymentType::default);

    let on_size = {
        let size = size.clone();
        Callback::from(move |e: Event| {
            if let Some(parsed) = ParcelSize::parse(&select_value(&e)) {
                size.set(parsed);
            }
        })
    };
    let on_payment = {
        let payment = payment.clone();
        Callback::from(move |e: Event| {
            if let Some(parsed) = PaymentType::parse(&select_value(&e)) {
                payment.set(parsed);
            }
        })
    };

    let onsubmit = {
        let vm = parcels.vm.clone();
        let toasts = toasts.clone();
        let navigator = location.navigator.clone();
        let (pickup, delivery, parcel_type, notes, cod, size, payment) = (
            pickup.clone(),
            delivery.clone(),
            parcel_type.clone(),
            notes.clone(),
            cod.clone(),
            size.clone(),
            payment.clone(),
        );
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = BookingForm {
                pickup_address: (*pickup).clone(),
                delivery_address: (*delivery).clone(),
                parcel_size: *size,
                parcel_type: (*parcel_type).clone(),
                payment_type: *payment,
                cod_amount: cod.trim().parse().unwrap_or(0.0),
                notes: (*notes).clone(),
            };
            let vm = vm.clone();
            let toasts = toasts.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                if vm.book(form).await {
                    toasts.success.emit("Parcel booked successfully".to_string());
                    navigator.push(&Route::BookingHistory);
                }
            });
        })
    };

    let loading = parcels.state.loading;

    html! {
        <div class="page narrow">
            <ErrorBanner message={parcels.state.error.clone()} />
            <form class="card-form" {onsubmit}>
                <div class="form-group">
                    <label for="pickup">{"Pickup address"}</label>
                    <input id="pickup" type="text" value={(*pickup).clone()} oninput={bind_input(&pickup)} />
                </div>
                <div class="form-group">
                    <label for="delivery">{"Delivery address"}</label>
                    <input id="delivery" type="text" value={(*delivery).clone()} oninput={bind_input(&delivery)} />
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="size">{"Parcel size"}</label>
                        <select id="size" onchange={on_size}>
                            { for ParcelSize::ALL.iter().map(|option| html! {
                                <option value={option.as_str()} selected={*size == *option}>
                                    {format!("{} ({}{})", option.as_str(), CURRENCY, format_amount(option.price()))}
                                </option>
                            }) }
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="type">{"Parcel type"}</label>
                        <input
                            id="type"
                            type="text"
                            placeholder="Documents, electronics..."
                            value={(*parcel_type).clone()}
                            oninput={bind_input(&parcel_type)}
                        />
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="payment">{"Payment"}</label>
                        <select id="payment" onchange={on_payment}>
                            <option value={PaymentType::Cod.as_str()} selected={*payment == PaymentType::Cod}>
                                {"Cash on Delivery"}
                            </option>
                            <option value={PaymentType::Prepaid.as_str()} selected={*payment == PaymentType::Prepaid}>
                                {"Prepaid"}
                            </option>
                        </select>
                    </div>
                    if *payment == PaymentType::Cod {
                        <div class="form-group">
                            <label for="cod">{"COD amount"}</label>
                            <input id="cod" type="number" min="0" value={(*cod).clone()} oninput={bind_input(&cod)} />
                        </div>
                    }
                </div>
                <div class="form-group">
                    <label for="notes">{"Notes"}</label>
                    <textarea id="notes" value={(*notes).clone()} oninput={bind_textarea(&notes)} />
                </div>
                <div class="price-line">
                    {format!("Delivery charge: {}{}", CURRENCY, format_amount(size.price()))}
                </div>
                <button type="submit" class="btn btn-primary" disabled={loading}>
                    { if loading { "Booking..." } else { "Book Parcel" } }
                </button>
            </form>
        </div>
    }
}
