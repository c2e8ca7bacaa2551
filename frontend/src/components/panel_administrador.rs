//! Admin shell: fixed banner over a two-column body. The left column is the
//! sidebar, the right column is the outlet where the active child route
//! renders. Pure presentation, no state.

use yew::{html, Component, Context, Html};
use yew_router::prelude::Switch;

use crate::components::sidebar::Sidebar;
use crate::routes::{self, AdminRoute};

pub struct PanelAdministrador;

impl Component for PanelAdministrador {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        PanelAdministrador
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="d-flex flex-column" style="height: 100%;">
                <div
                    class="bg-dark text-white py-3 px-4 d-flex align-items-center justify-content-between"
                    style="width: 100%; height: 150px;"
                >
                    <div>
                        <h1 class="mb-1">{ "Panel de administrador" }</h1>
                        <p class="mb-0">
                            { "Funcionalidades para aprobar funcionarios/as, \
                               gestión del salón para los eventos y reserva o préstamo de libros." }
                        </p>
                    </div>
                    <img
                        src="/img/administrador.png"
                        alt="Decoración"
                        style="height: 150px; object-fit: contain;"
                    />
                </div>

                <div class="d-flex flex-grow-1">
                    <Sidebar />
                    <div class="flex-grow-1 p-3">
                        <Switch<AdminRoute> render={routes::switch_admin} />
                    </div>
                </div>
            </div>
        }
    }
}
