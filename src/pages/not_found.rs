use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"Page Not Found"}</h1>
            <Link<Route> to={Route::Home}>{"Back to Home"}</Link<Route>>
        </div>
    }
}
