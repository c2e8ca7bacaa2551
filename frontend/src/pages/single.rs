use yew::context::ContextHandle;
use yew::{html, Component, Context, Html, Properties};

use crate::store::StoreContext;

#[derive(Properties, PartialEq)]
pub struct SingleProps {
    pub theid: u32,
}

pub enum Msg {
    StoreUpdated(StoreContext),
}

/// Detail view for a single book, looked up by the id in the URL.
pub struct Single {
    store: Option<StoreContext>,
    _handle: Option<ContextHandle<StoreContext>>,
}

impl Component for Single {
    type Message = Msg;
    type Properties = SingleProps;

    fn create(ctx: &Context<Self>) -> Self {
        let (store, handle) = match ctx
            .link()
            .context::<StoreContext>(ctx.link().callback(Msg::StoreUpdated))
        {
            Some((store, handle)) => (Some(store), Some(handle)),
            None => (None, None),
        };
        Single {
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

    fn view(&self, ctx: &Context<Self>) -> Html {
        let libro = self
            .store
            .as_ref()
            .and_then(|store_ctx| store_ctx.store.find_libro(ctx.props().theid).cloned());

        match libro {
            Some(libro) => html! {
                <div class="container mt-4">
                    <h2>{ &libro.title }</h2>
                    <p class="text-muted">{ format!("{} ({})", libro.author, libro.book_gender) }</p>
                    {
                        if libro.miniatura.is_empty() {
                            html! {}
                        } else {
                            html! {
                                <img
                                    src={libro.miniatura.clone()}
                                    alt={libro.title.clone()}
                                    style="max-width: 200px; max-height: 200px;"
                                />
                            }
                        }
                    }
                    <p class="mt-3">{ &libro.summary }</p>
                </div>
            },
            None => html! {
                <div class="container mt-4">
                    <p>{ "Libro no encontrado." }</p>
                </div>
            },
        }
    }
}
