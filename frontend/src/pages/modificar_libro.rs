use yew::{html, Component, Context, Html, Properties};

use crate::components::libros::LibroForm;

#[derive(Properties, PartialEq)]
pub struct ModificarLibroProps {
    /// Id captured from the route, looked up in the shared collection.
    pub id: u32,
}

pub struct ModificarLibro;

impl Component for ModificarLibro {
    type Message = ();
    type Properties = ModificarLibroProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ModificarLibro
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! { <LibroForm libro_id={Some(ctx.props().id)} /> }
    }
}
