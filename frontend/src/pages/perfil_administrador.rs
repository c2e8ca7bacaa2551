use yew::context::ContextHandle;
use yew::{html, Component, Context, Html};

use common::model::user::UserStatus;

use crate::store::StoreContext;

pub enum Msg {
    StoreUpdated(StoreContext),
}

/// Landing page of the admin panel: a summary card over the shared
/// collections.
pub struct TuPerfil {
    store: Option<StoreContext>,
    _handle: Option<ContextHandle<StoreContext>>,
}

impl Component for TuPerfil {
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
        TuPerfil {
            store,
            _handle: handle,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::StoreUpdated(store) => {
                self.store = Some(store);
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let (libros, salones, pendientes) = match &self.store {
            Some(store_ctx) => {
                let store = &store_ctx.store;
                let pendientes = store
                    .usuarios
                    .iter()
                    .filter(|u| u.status == UserStatus::EnRevision)
                    .count();
                (store.libros.len(), store.salones.len(), pendientes)
            }
            None => (0, 0, 0),
        };

        html! {
            <div class="container mt-4">
                <h2 class="mb-4">{ "Tu perfil" }</h2>
                <div class="row g-3">
                    { summary_card("Libros en catálogo", libros) }
                    { summary_card("Salones registrados", salones) }
                    { summary_card("Funcionarios en revisión", pendientes) }
                </div>
            </div>
        }
    }
}

fn summary_card(label: &str, count: usize) -> Html {
    html! {
        <div class="col-md-4">
            <div class="card p-4 shadow-sm text-center">
                <h3 class="mb-1">{ count }</h3>
                <p class="mb-0 text-muted">{ label }</p>
            </div>
        </div>
    }
}
