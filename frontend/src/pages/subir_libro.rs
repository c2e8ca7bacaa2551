use yew::{html, Component, Context, Html};

use crate::components::libros::LibroForm;

/// Create-mode rendition of the book form: no id, empty draft.
pub struct SubirLibro;

impl Component for SubirLibro {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        SubirLibro
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! { <LibroForm /> }
    }
}
