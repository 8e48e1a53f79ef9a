use yew::prelude::*;
use crate::components::Link;
use crate::routing::Route;

#[function_component(NotFoundView)]
pub fn not_found_view() -> Html {
    html! {
        <div class="auth-screen">
            <div class="auth-card">
                <h1>{"404"}</h1>
                <p>{"The page you are looking for does not exist."}</p>
                <Link to={Route::Login} classes={classes!("btn", "btn-primary")}>{"Back to login"}</Link>
            </div>
        </div>
    }
}
