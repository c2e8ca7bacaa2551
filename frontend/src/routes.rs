//! Client-side route table.
//!
//! Two levels: `Route` covers the application surface, `AdminRoute` the pages
//! nested inside the admin shell. `/` and the bare `/panel_admin` both land on
//! `perfil_administrador`; anything unrecognized falls back to a not-found
//! view at each level.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::panel_administrador::PanelAdministrador;
use crate::pages::administrador_usuarios::AdministradorUsuarios;
use crate::pages::demo::Demo;
use crate::pages::editar_cargar_libro::EditarCargarLibro;
use crate::pages::editar_cargar_salon::EditarCargarSalon;
use crate::pages::modificar_libro::ModificarLibro;
use crate::pages::perfil_administrador::TuPerfil;
use crate::pages::single::Single;
use crate::pages::subir_libro::SubirLibro;

#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/demo")]
    Demo,
    #[at("/single/:theid")]
    Single { theid: u32 },
    #[at("/panel_admin")]
    PanelAdminIndex,
    #[at("/panel_admin/*")]
    PanelAdmin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Clone, Routable, Debug, PartialEq)]
pub enum AdminRoute {
    #[at("/panel_admin/perfil_administrador")]
    Perfil,
    #[at("/panel_admin/editar_cargar_libro")]
    EditarCargarLibro,
    #[at("/panel_admin/modificar_libro/:id")]
    ModificarLibro { id: u32 },
    #[at("/panel_admin/subir_libro")]
    SubirLibro,
    #[at("/panel_admin/editar_cargar_salon")]
    EditarCargarSalon,
    #[at("/panel_admin/administrador_usuarios")]
    AdministradorUsuarios,
    #[not_found]
    #[at("/panel_admin/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Root | Route::PanelAdminIndex => html! {
            <Redirect<AdminRoute> to={AdminRoute::Perfil} />
        },
        Route::Demo => html! { <Demo /> },
        Route::Single { theid } => html! { <Single theid={theid} /> },
        Route::PanelAdmin => html! { <PanelAdministrador /> },
        Route::NotFound => html! { <h1>{ "Not found!" }</h1> },
    }
}

pub fn switch_admin(route: AdminRoute) -> Html {
    match route {
        AdminRoute::Perfil => html! { <TuPerfil /> },
        AdminRoute::EditarCargarLibro => html! { <EditarCargarLibro /> },
        AdminRoute::ModificarLibro { id } => html! { <ModificarLibro id={id} /> },
        AdminRoute::SubirLibro => html! { <SubirLibro /> },
        AdminRoute::EditarCargarSalon => html! { <EditarCargarSalon /> },
        AdminRoute::AdministradorUsuarios => html! { <AdministradorUsuarios /> },
        AdminRoute::NotFound => html! { <h1>{ "Not found!" }</h1> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_and_bare_panel_admin_are_recognized() {
        assert_eq!(Route::recognize("/"), Some(Route::Root));
        assert_eq!(Route::recognize("/panel_admin"), Some(Route::PanelAdminIndex));
    }

    #[test]
    fn admin_children_fall_under_the_panel_subtree() {
        assert_eq!(
            Route::recognize("/panel_admin/perfil_administrador"),
            Some(Route::PanelAdmin)
        );
        assert_eq!(
            AdminRoute::recognize("/panel_admin/perfil_administrador"),
            Some(AdminRoute::Perfil)
        );
        assert_eq!(
            AdminRoute::recognize("/panel_admin/modificar_libro/42"),
            Some(AdminRoute::ModificarLibro { id: 42 })
        );
    }

    #[test]
    fn index_redirect_targets_perfil_administrador() {
        assert_eq!(
            AdminRoute::Perfil.to_path(),
            "/panel_admin/perfil_administrador"
        );
    }

    #[test]
    fn single_takes_a_numeric_id() {
        assert_eq!(Route::recognize("/single/3"), Some(Route::Single { theid: 3 }));
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::recognize("/no_existe"), Some(Route::NotFound));
        assert_eq!(
            AdminRoute::recognize("/panel_admin/no_existe"),
            Some(AdminRoute::NotFound)
        );
    }
}
