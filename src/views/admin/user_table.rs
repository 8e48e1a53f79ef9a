use yew::prelude::*;
use crate::models::User;

#[derive(Properties, PartialEq)]
pub struct UserTableProps {
    pub users: Vec<User>,
    pub empty_message: AttrValue,
}

#[function_component(UserTable)]
pub fn user_table(props: &UserTableProps) -> Html {
    if props.users.is_empty() {
        return html! { <p class="empty-state">{props.empty_message.clone()}</p> };
    }

    html! {
        <table class="user-table">
            <thead>
                <tr>
                    <th>{"Name"}</th>
                    <th>{"Email"}</th>
                    <th>{"Role"}</th>
                    <th>{"Joined"}</th>
                </tr>
            </thead>
            <tbody>
                { for props.users.iter().map(|user| html! {
                    <tr key={user.id.clone()}>
                        <td>{user.name.clone()}</td>
                        <td>{user.email.clone()}</td>
                        <td>{user.role.label()}</td>
                        <td>{user.created_at.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_else(|| "-".to_string())}</td>
                    </tr>
                }) }
            </tbody>
        </table>
    }
}
