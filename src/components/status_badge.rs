use yew::prelude::*;
use crate::models::ParcelStatus;

#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    pub status: ParcelStatus,
}

#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    html! {
        <span class={classes!("status-badge", props.status.badge_class())}>
            {props.status.as_str()}
        </span>
    }
}
