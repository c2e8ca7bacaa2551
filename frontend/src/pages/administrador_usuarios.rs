//! Funcionario administration: approve accounts under review or send active
//! ones back to review. Addresses the backend would reject on update are
//! flagged with a warning marker next to the email.

use yew::context::ContextHandle;
use yew::{html, Component, Context, Html};

use common::model::user::{email_valido, User, UserStatus};

use crate::components::feedback::show_toast;
use crate::store::StoreContext;

pub enum Msg {
    StoreUpdated(StoreContext),
    Cambiar(u32, UserStatus),
    CambioFinalizado(bool),
}

pub struct AdministradorUsuarios {
    store: Option<StoreContext>,
    _handle: Option<ContextHandle<StoreContext>>,
    updating: bool,
}

impl Component for AdministradorUsuarios {
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
        AdministradorUsuarios {
            store,
            _handle: handle,
            updating: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::StoreUpdated(store) => {
                self.store = Some(store);
                true
            }
            Msg::Cambiar(id, status) => {
                if self.updating {
                    return false;
                }
                let Some(store_ctx) = self.store.clone() else {
                    return false;
                };
                let Some(usuario) = store_ctx.store.usuarios.iter().find(|u| u.id == id).cloned()
                else {
                    return false;
                };
                self.updating = true;
                store_ctx.cambiar_estado_usuario(
                    usuario,
                    status,
                    ctx.link().callback(Msg::CambioFinalizado),
                );
                true
            }
            Msg::CambioFinalizado(ok) => {
                self.updating = false;
                if ok {
                    show_toast("Estado actualizado.");
                } else {
                    show_toast("No se pudo actualizar el estado.");
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
                <h2 class="mb-4">{ "Administrador de usuarios" }</h2>
                {
                    if !store.usuarios_cargados {
                        html! { <p>{ "Cargando usuarios…" }</p> }
                    } else if store.usuarios.is_empty() {
                        html! { <p>{ "No hay usuarios registrados." }</p> }
                    } else {
                        html! {
                            <table class="table table-hover align-middle">
                                <thead>
                                    <tr>
                                        <th>{ "Usuario" }</th>
                                        <th>{ "Email" }</th>
                                        <th>{ "Estado" }</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    { store.usuarios.iter().map(|u| self.row(ctx, u)).collect::<Html>() }
                                </tbody>
                            </table>
                        }
                    }
                }
            </div>
        }
    }
}

impl AdministradorUsuarios {
    fn row(&self, ctx: &Context<Self>, usuario: &User) -> Html {
        let id = usuario.id;
        let action = match usuario.status {
            UserStatus::EnRevision => html! {
                <button
                    class="btn btn-sm btn-success"
                    disabled={self.updating}
                    onclick={ctx.link().callback(move |_| Msg::Cambiar(id, UserStatus::Activo))}
                >
                    { "Aprobar" }
                </button>
            },
            UserStatus::Activo => html! {
                <button
                    class="btn btn-sm btn-outline-danger"
                    disabled={self.updating}
                    onclick={ctx.link().callback(move |_| Msg::Cambiar(id, UserStatus::EnRevision))}
                >
                    { "Enviar a revisión" }
                </button>
            },
        };

        html! {
            <tr>
                <td>{ &usuario.user_name }</td>
                <td>
                    { &usuario.email }
                    {
                        if email_valido(&usuario.email) {
                            html! {}
                        } else {
                            html! {
                                <span class="ms-2" title="Formato de correo inválido">{ "⚠" }</span>
                            }
                        }
                    }
                </td>
                <td>{ usuario.status.label() }</td>
                <td class="text-end">{ action }</td>
            </tr>
        }
    }
}
