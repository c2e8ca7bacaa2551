//! Book listing: the admin's entry point to the edit form, plus the delete
//! action. Deletes ask for confirmation, go through the store action and
//! report the result with a toast.

use yew::context::ContextHandle;
use yew::{html, Component, Context, Html};
use yew_router::prelude::Link;

use common::model::book::Book;

use crate::components::feedback::{confirm, show_toast};
use crate::routes::AdminRoute;
use crate::store::StoreContext;

pub enum Msg {
    StoreUpdated(StoreContext),
    Eliminar(u32),
    EliminarFinalizado(bool),
}

pub struct EditarCargarLibro {
    store: Option<StoreContext>,
    _handle: Option<ContextHandle<StoreContext>>,
    deleting: bool,
}

impl Component for EditarCargarLibro {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let (store, handle) = match ctx
            .link()
            .context::<StoreContext>(ctx.link().callback(Msg::StoreUpdated))
        {
            Some((store, handle)) => (Some(store), Some(handle)),
            None => (None, None),
        };
        EditarCargarLibro {
            store,
            _handle: handle,
            deleting: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::StoreUpdated(store) => {
                self.store = Some(store);
                true
            }
            Msg::Eliminar(id) => {
                if self.deleting {
                    return false;
                }
                let Some(store_ctx) = self.store.clone() else {
                    return false;
                };
                if !confirm("¿Eliminar este libro del catálogo?") {
                    return false;
                }
                self.deleting = true;
                store_ctx.eliminar_libro(id, ctx.link().callback(Msg::EliminarFinalizado));
                true
            }
            Msg::EliminarFinalizado(ok) => {
                self.deleting = false;
                if ok {
                    show_toast("Libro eliminado.");
                } else {
                    show_toast("No se pudo eliminar el libro.");
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let Some(store_ctx) = &self.store else {
            return html! { <p>{ "Cargando…" }</p> };
        };
        let store = &store_ctx.store;

        html! {
            <div class="container mt-4">
                <div class="d-flex justify-content-between align-items-center mb-4">
                    <h2 class="mb-0">{ "Editar o cargar libro" }</h2>
                    <Link<AdminRoute> classes="btn btn-primary" to={AdminRoute::SubirLibro}>
                        { "Subir libro" }
                    </Link<AdminRoute>>
                </div>
                {
                    if !store.libros_cargados {
                        html! { <p>{ "Cargando libros…" }</p> }
                    } else if store.libros.is_empty() {
                        html! { <p>{ "No hay libros en el catálogo." }</p> }
                    } else {
                        html! {
                            <table class="table table-hover align-middle">
                                <thead>
                                    <tr>
                                        <th>{ "Título" }</th>
                                        <th>{ "Autor" }</th>
                                        <th>{ "Género" }</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    { store.libros.iter().map(|libro| self.row(ctx, libro)).collect::<Html>() }
                                </tbody>
                            </table>
                        }
                    }
                }
            </div>
        }
    }
}

impl EditarCargarLibro {
    fn row(&self, ctx: &Context<Self>, libro: &Book) -> Html {
        let actions = match libro.id {
            Some(id) => html! {
                <td class="text-end">
                    <Link<AdminRoute>
                        classes="btn btn-sm btn-secondary me-2"
                        to={AdminRoute::ModificarLibro { id }}
                    >
                        { "Modificar" }
                    </Link<AdminRoute>>
                    <button
                        class="btn btn-sm btn-danger"
                        disabled={self.deleting}
                        onclick={ctx.link().callback(move |_| Msg::Eliminar(id))}
                    >
                        { "Eliminar" }
                    </button>
                </td>
            },
            None => html! { <td></td> },
        };

        html! {
            <tr>
                <td>{ &libro.title }</td>
                <td>{ &libro.author }</td>
                <td>{ &libro.book_gender }</td>
                { actions }
            </tr>
        }
    }
}
