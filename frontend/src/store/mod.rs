//! Shared context store.
//!
//! The canonical in-memory collections live in a single `Store` owned by the
//! `StoreProvider` component at the top of the tree. Pages receive a
//! `StoreContext` through Yew's context API: a read-only snapshot of the
//! store plus action methods that call the backend and dispatch the matching
//! state update on success. Pages never mutate collections directly.

use std::rc::Rc;

use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::book::Book;
use common::model::salon::Salon;
use common::model::user::{User, UserStatus};

use crate::api;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Store {
    pub libros: Vec<Book>,
    pub usuarios: Vec<User>,
    pub salones: Vec<Salon>,
    /// Set once the initial fetch for each collection has completed, so
    /// consumers can tell "not loaded yet" apart from "not found".
    pub libros_cargados: bool,
    pub usuarios_cargados: bool,
    pub salones_cargados: bool,
}

pub enum StoreMsg {
    LibrosCargados(Vec<Book>),
    UsuariosCargados(Vec<User>),
    SalonesCargados(Vec<Salon>),
    UpsertLibro(Book),
    EliminarLibro(u32),
    ActualizarUsuario(User),
    UpsertSalon(Salon),
}

impl Store {
    /// Applies a state transition. Pure so it can be exercised without a
    /// running component tree.
    pub fn apply(&mut self, msg: StoreMsg) {
        match msg {
            StoreMsg::LibrosCargados(libros) => {
                self.libros = libros;
                self.libros_cargados = true;
            }
            StoreMsg::UsuariosCargados(usuarios) => {
                self.usuarios = usuarios;
                self.usuarios_cargados = true;
            }
            StoreMsg::SalonesCargados(salones) => {
                self.salones = salones;
                self.salones_cargados = true;
            }
            StoreMsg::UpsertLibro(libro) => {
                match self.libros.iter_mut().find(|l| l.id == libro.id) {
                    Some(existing) => *existing = libro,
                    None => self.libros.push(libro),
                }
            }
            StoreMsg::EliminarLibro(id) => {
                self.libros.retain(|l| l.id != Some(id));
            }
            StoreMsg::ActualizarUsuario(usuario) => {
                if let Some(existing) = self.usuarios.iter_mut().find(|u| u.id == usuario.id) {
                    *existing = usuario;
                }
            }
            StoreMsg::UpsertSalon(salon) => {
                match self.salones.iter_mut().find(|s| s.id == salon.id) {
                    Some(existing) => *existing = salon,
                    None => self.salones.push(salon),
                }
            }
        }
    }

    pub fn find_libro(&self, id: u32) -> Option<&Book> {
        self.libros.iter().find(|l| l.id == Some(id))
    }

    pub fn find_salon(&self, id: u32) -> Option<&Salon> {
        self.salones.iter().find(|s| s.id == Some(id))
    }
}

/// Handle handed to pages through the context API.
#[derive(Clone, PartialEq)]
pub struct StoreContext {
    pub store: Rc<Store>,
    dispatch: Callback<StoreMsg>,
}

impl StoreContext {
    /// Saves the full draft through the gateway. On success the collection is
    /// updated in place when the record already has an id, or refetched so
    /// the backend-assigned id lands in the store.
    pub fn guardar_libro(&self, libro: Book, done: Callback<bool>) {
        let dispatch = self.dispatch.clone();
        spawn_local(async move {
            let ok = api::add_or_update_libro(&libro).await;
            if ok {
                if libro.id.is_some() {
                    dispatch.emit(StoreMsg::UpsertLibro(libro));
                } else {
                    match api::fetch_libros().await {
                        Ok(libros) => dispatch.emit(StoreMsg::LibrosCargados(libros)),
                        Err(err) => error!(format!("no se pudo refrescar libros: {err}")),
                    }
                }
            }
            done.emit(ok);
        });
    }

    pub fn eliminar_libro(&self, id: u32, done: Callback<bool>) {
        let dispatch = self.dispatch.clone();
        spawn_local(async move {
            let ok = api::delete_libro(id).await;
            if ok {
                dispatch.emit(StoreMsg::EliminarLibro(id));
            }
            done.emit(ok);
        });
    }

    pub fn cambiar_estado_usuario(&self, usuario: User, status: UserStatus, done: Callback<bool>) {
        let dispatch = self.dispatch.clone();
        spawn_local(async move {
            let ok = api::update_usuario_status(&usuario, status).await;
            if ok {
                let actualizado = User { status, ..usuario };
                dispatch.emit(StoreMsg::ActualizarUsuario(actualizado));
            }
            done.emit(ok);
        });
    }

    pub fn guardar_salon(&self, salon: Salon, done: Callback<bool>) {
        let dispatch = self.dispatch.clone();
        spawn_local(async move {
            let ok = api::add_or_update_salon(&salon).await;
            if ok {
                if salon.id.is_some() {
                    dispatch.emit(StoreMsg::UpsertSalon(salon));
                } else {
                    match api::fetch_salones().await {
                        Ok(salones) => dispatch.emit(StoreMsg::SalonesCargados(salones)),
                        Err(err) => error!(format!("no se pudo refrescar salones: {err}")),
                    }
                }
            }
            done.emit(ok);
        });
    }
}

#[derive(Properties, PartialEq)]
pub struct StoreProviderProps {
    #[prop_or_default]
    pub children: Html,
}

/// Owns the store and kicks off the initial collection fetches.
pub struct StoreProvider {
    store: Rc<Store>,
}

impl Component for StoreProvider {
    type Message = StoreMsg;
    type Properties = StoreProviderProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            match api::fetch_libros().await {
                Ok(libros) => link.send_message(StoreMsg::LibrosCargados(libros)),
                Err(err) => error!(format!("no se pudieron cargar los libros: {err}")),
            }
        });
        let link = ctx.link().clone();
        spawn_local(async move {
            match api::fetch_usuarios().await {
                Ok(usuarios) => link.send_message(StoreMsg::UsuariosCargados(usuarios)),
                Err(err) => error!(format!("no se pudieron cargar los usuarios: {err}")),
            }
        });
        let link = ctx.link().clone();
        spawn_local(async move {
            match api::fetch_salones().await {
                Ok(salones) => link.send_message(StoreMsg::SalonesCargados(salones)),
                Err(err) => error!(format!("no se pudieron cargar los salones: {err}")),
            }
        });

        Self {
            store: Rc::new(Store::default()),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        Rc::make_mut(&mut self.store).apply(msg);
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let context = StoreContext {
            store: self.store.clone(),
            dispatch: ctx.link().callback(|msg| msg),
        };
        html! {
            <ContextProvider<StoreContext> context={context}>
                { ctx.props().children.clone() }
            </ContextProvider<StoreContext>>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn libro(id: u32, title: &str) -> Book {
        Book {
            id: Some(id),
            title: title.into(),
            author: "Autor".into(),
            summary: "Resumen".into(),
            book_gender: "Novela".into(),
            miniatura: String::new(),
        }
    }

    #[test]
    fn loading_marks_the_collection_as_fetched() {
        let mut store = Store::default();
        assert!(!store.libros_cargados);
        store.apply(StoreMsg::LibrosCargados(vec![libro(1, "Ficciones")]));
        assert!(store.libros_cargados);
        assert_eq!(store.libros.len(), 1);
    }

    #[test]
    fn find_libro_matches_on_exact_id() {
        let mut store = Store::default();
        store.apply(StoreMsg::LibrosCargados(vec![
            libro(1, "Ficciones"),
            libro(2, "Rayuela"),
        ]));
        assert_eq!(store.find_libro(2).unwrap().title, "Rayuela");
        assert!(store.find_libro(99).is_none());
    }

    #[test]
    fn upsert_replaces_existing_record_and_appends_new_ones() {
        let mut store = Store::default();
        store.apply(StoreMsg::LibrosCargados(vec![libro(1, "Ficciones")]));

        store.apply(StoreMsg::UpsertLibro(libro(1, "Ficciones (2a ed.)")));
        assert_eq!(store.libros.len(), 1);
        assert_eq!(store.libros[0].title, "Ficciones (2a ed.)");

        store.apply(StoreMsg::UpsertLibro(libro(2, "Rayuela")));
        assert_eq!(store.libros.len(), 2);
    }

    #[test]
    fn eliminar_removes_only_the_matching_id() {
        let mut store = Store::default();
        store.apply(StoreMsg::LibrosCargados(vec![
            libro(1, "Ficciones"),
            libro(2, "Rayuela"),
        ]));
        store.apply(StoreMsg::EliminarLibro(1));
        assert_eq!(store.libros.len(), 1);
        assert_eq!(store.libros[0].id, Some(2));
    }

    #[test]
    fn actualizar_usuario_only_touches_known_accounts() {
        use common::model::user::{Role, UserStatus};
        let mut store = Store::default();
        store.apply(StoreMsg::UsuariosCargados(vec![User {
            id: 5,
            user_name: "marta".into(),
            email: "marta@example.org".into(),
            role: Role::User,
            status: UserStatus::EnRevision,
        }]));

        let aprobada = User {
            status: UserStatus::Activo,
            ..store.usuarios[0].clone()
        };
        store.apply(StoreMsg::ActualizarUsuario(aprobada));
        assert_eq!(store.usuarios[0].status, UserStatus::Activo);

        let desconocido = User {
            id: 99,
            user_name: "nadie".into(),
            email: "nadie@example.org".into(),
            role: Role::User,
            status: UserStatus::Activo,
        };
        store.apply(StoreMsg::ActualizarUsuario(desconocido));
        assert_eq!(store.usuarios.len(), 1);
    }
}
