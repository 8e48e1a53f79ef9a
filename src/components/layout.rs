use yew::prelude::*;
use crate::components::link::Link;
use crate::hooks::{use_location, use_session};
use crate::routing::Route;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

/// Shell autenticado: menú del rol + cabecera con logout
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let session = use_session();
    let location = use_location();
    let current = location.location.route();

    let Some(user) = session.session.user().cloned() else {
        return html! { <>{props.children.clone()}</> };
    };

    let on_logout = {
        let logout = session.logout.clone();
        Callback::from(move |_: MouseEvent| logout.emit(()))
    };

    html! {
        <div class="app-layout">
            <aside class="sidebar">
                <div class="sidebar-brand">{"📦 Courier"}</div>
                <nav>
                    { for Route::menu_for(user.role).into_iter().map(|route| {
                        let active = route == current;
                        html! {
                            <Link to={route.clone()} classes={classes!("nav-link", active.then_some("active"))}>
                                {route.title()}
                            </Link>
                        }
                    }) }
                </nav>
            </aside>
            <div class="main-panel">
                <header class="topbar">
                    <h1>{current.title()}</h1>
                    <div class="user-info">
                        <span>{user.name.clone()}</span>
                        <span class="role-tag">{user.role.label()}</span>
                        <button class="btn btn-secondary" onclick={on_logout} disabled={session.session.is_loading()}>
                            {"Logout"}
                        </button>
                    </div>
                </header>
                <main class="content">
                    {props.children.clone()}
                </main>
            </div>
        </div>
    }
}
