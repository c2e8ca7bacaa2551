use yew::{html, Component, Context, Html};
use yew_router::prelude::Link;

use crate::routes::AdminRoute;

pub struct Sidebar;

impl Component for Sidebar {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Sidebar
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="bg-light border-end p-3" style="min-width: 220px;">
                <ul class="nav flex-column gap-2">
                    { sidebar_item(AdminRoute::Perfil, "Tu perfil") }
                    { sidebar_item(AdminRoute::EditarCargarLibro, "Editar o cargar libro") }
                    { sidebar_item(AdminRoute::SubirLibro, "Subir libro") }
                    { sidebar_item(AdminRoute::EditarCargarSalon, "Editar o cargar salón") }
                    { sidebar_item(AdminRoute::AdministradorUsuarios, "Administrar usuarios") }
                </ul>
            </div>
        }
    }
}

fn sidebar_item(to: AdminRoute, label: &str) -> Html {
    html! {
        <li class="nav-item">
            <Link<AdminRoute> classes="nav-link" to={to}>{ label }</Link<AdminRoute>>
        </li>
    }
}
