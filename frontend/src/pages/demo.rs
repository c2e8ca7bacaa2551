use yew::{html, Component, Context, Html};
use yew_router::prelude::Link;

use crate::routes::AdminRoute;

pub struct Demo;

impl Component for Demo {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Demo
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="container mt-4">
                <h2>{ "Demo" }</h2>
                <p>{ "Página de demostración de la plantilla." }</p>
                <Link<AdminRoute> classes="btn btn-primary" to={AdminRoute::Perfil}>
                    { "Ir al panel de administrador" }
                </Link<AdminRoute>>
            </div>
        }
    }
}
