use yew::{html, Component, Context, Html};
use yew_router::prelude::Link;

use crate::routes::AdminRoute;

pub struct Navbar;

impl Component for Navbar {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Navbar
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <nav class="navbar navbar-dark bg-dark px-4">
                <Link<AdminRoute> classes="navbar-brand" to={AdminRoute::Perfil}>
                    { "Biblioteca" }
                </Link<AdminRoute>>
                <div class="d-flex gap-3">
                    <Link<AdminRoute> classes="nav-link text-white" to={AdminRoute::EditarCargarLibro}>
                        { "Libros" }
                    </Link<AdminRoute>>
                    <Link<AdminRoute> classes="nav-link text-white" to={AdminRoute::EditarCargarSalon}>
                        { "Salón" }
                    </Link<AdminRoute>>
                    <Link<AdminRoute> classes="nav-link text-white" to={AdminRoute::AdministradorUsuarios}>
                        { "Funcionarios" }
                    </Link<AdminRoute>>
                </div>
            </nav>
        }
    }
}
