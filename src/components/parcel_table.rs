use yew::prelude::*;
use crate::components::status_badge::StatusBadge;
use crate::models::Parcel;
use crate::services::report_service::format_amount;

#[derive(Properties, PartialEq)]
pub struct ParcelTableProps {
    pub parcels: Vec<Parcel>,
    #[prop_or(false)]
    pub show_customer: bool,
    #[prop_or(false)]
    pub show_agent: bool,
    /// Contenido de la última columna (botones, selects...)
    #[prop_or_default]
    pub actions: Option<Callback<Parcel, Html>>,
    #[prop_or(AttrValue::Static("No parcels found"))]
    pub empty_message: AttrValue,
}

#[function_component(ParcelTable)]
pub fn parcel_table(props: &ParcelTableProps) -> Html {
    if props.parcels.is_empty() {
        return html! { <p class="empty-state">{props.empty_message.clone()}</p> };
    }

    html! {
        <table class="parcel-table">
            <thead>
                <tr>
                    <th>{"Tracking"}</th>
                    if props.show_customer { <th>{"Customer"}</th> }
                    <th>{"Pickup"}</th>
                    <th>{"Delivery"}</th>
                    <th>{"Size"}</th>
                    <th>{"Amount"}</th>
                    <th>{"Status"}</th>
                    if props.show_agent { <th>{"Agent"}</th> }
                    if props.actions.is_some() { <th>{"Actions"}</th> }
                </tr>
            </thead>
            <tbody>
                { for props.parcels.iter().map(|parcel| html! {
                    <tr key={parcel.id.clone()}>
                        <td class="mono">{parcel.tracking_number.clone()}</td>
                        if props.show_customer { <td>{parcel.customer_name.clone()}</td> }
                        <td>{parcel.pickup_address.clone()}</td>
                        <td>{parcel.delivery_address.clone()}</td>
                        <td>{parcel.parcel_size.as_str()}</td>
                        <td>{format_amount(parcel.amount)}</td>
                        <td><StatusBadge status={parcel.status.clone()} /></td>
                        if props.show_agent { <td>{parcel.agent_name()}</td> }
                        if let Some(actions) = &props.actions {
                            <td>{actions.emit(parcel.clone())}</td>
                        }
                    </tr>
                }) }
            </tbody>
        </table>
    }
}
