use yew::{html, Component, Context, Html};
use yew_router::prelude::{BrowserRouter, Switch};

use crate::components::backend_url::BackendUrl;
use crate::components::navbar::Navbar;
use crate::config;
use crate::routes::{self, Route};
use crate::store::StoreProvider;

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        if config::backend_url().is_none() {
            return html! { <BackendUrl /> };
        }

        html! {
            <div class="d-flex flex-column h-100">
                <BrowserRouter basename={config::basename()}>
                    <StoreProvider>
                        <Navbar />
                        <div class="d-flex flex-grow-1">
                            <div class="flex-grow-1 p-0">
                                <Switch<Route> render={routes::switch} />
                            </div>
                        </div>
                    </StoreProvider>
                </BrowserRouter>
            </div>
        }
    }
}
