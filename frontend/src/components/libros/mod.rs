//! Book form: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic, view rendering and props.
//!
//! The same component serves both workflows: with a `libro_id` prop it edits
//! an existing record seeded from the shared store, without one it creates a
//! new book from an empty draft.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::LibroFormProps;
pub use state::LibroForm;

impl Component for LibroForm {
    type Message = Msg;
    type Properties = LibroFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut form = LibroForm::new();
        if let Some((store_ctx, handle)) = ctx
            .link()
            .context::<crate::store::StoreContext>(ctx.link().callback(Msg::StoreUpdated))
        {
            form.seed(&store_ctx.store, ctx.props().libro_id);
            form.store = Some(store_ctx);
            form.store_handle = Some(handle);
        }
        form
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    // Navigating between edit targets reuses the mounted component, so a new
    // `libro_id` must discard the old draft and reseed.
    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().libro_id == old_props.libro_id {
            return false;
        }
        self.reset();
        if let Some(store_ctx) = self.store.clone() {
            self.seed(&store_ctx.store, ctx.props().libro_id);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
