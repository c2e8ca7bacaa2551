use yew::prelude::*;

/// Properties for the book form.
#[derive(Properties, PartialEq, Clone)]
pub struct LibroFormProps {
    /// Id of the book to edit. `None` starts the form in create mode with an
    /// empty draft; the id is looked up in the shared collection on mount.
    #[prop_or_default]
    pub libro_id: Option<u32>,
}
